use std::collections::HashMap;

use crate::application::errors::BookError;
use crate::domain::entities::{Phone, Record, UpdateAction};

/// Collection of records keyed by name, listed in insertion order
#[derive(Debug, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) -> Result<String, BookError> {
        if self.records.contains_key(record.name()) {
            return Err(BookError::DuplicateName(record.name().to_string()));
        }
        let message = format!("{} has been added", record);
        tracing::debug!(name = record.name(), phones = record.phones().len(), "record added");
        self.order.push(record.name().to_string());
        self.records.insert(record.name().to_string(), record);
        Ok(message)
    }

    pub fn update_record(&mut self, name: &str, action: UpdateAction) -> Result<String, BookError> {
        let record = self
            .records
            .get_mut(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;

        match action {
            UpdateAction::Add(phone) => record.add_phone(phone),
            UpdateAction::Delete(phone) => record.delete_phone(phone),
            UpdateAction::Change { old, new } => record.change_phone(old, new),
        }
    }

    pub fn delete_record(&mut self, name: &str) -> Result<String, BookError> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
        self.order.retain(|n| n != name);
        tracing::debug!(name, "record deleted");
        Ok(format!("Record {} has been deleted!", record))
    }

    pub fn show_phones(&self, name: &str) -> Result<&[Phone], BookError> {
        self.get(name)
            .map(Record::phones)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
    }

    pub fn show_all(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
