use std::fmt;

use crate::application::errors::BookError;

/// A phone number, compared by plain value equality
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Phone {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Phone {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One contact: a name and its phone numbers in insertion order.
///
/// A record never holds the same phone twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<Phone>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
        }
    }

    /// Build a record with initial phones, rejecting repeated ones
    pub fn with_phones<I, P>(name: impl Into<String>, phones: I) -> Result<Self, BookError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Phone>,
    {
        let mut record = Self::new(name);
        for phone in phones {
            record.add_phone(phone)?;
        }
        Ok(record)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    fn position(&self, phone: &Phone) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }

    pub fn add_phone(&mut self, phone: impl Into<Phone>) -> Result<String, BookError> {
        let phone: Phone = phone.into();
        if self.position(&phone).is_some() {
            return Err(BookError::DuplicateEntry {
                name: self.name.clone(),
                phone: phone.0,
            });
        }
        let message = format!("{} has been added to the {} record", phone, self.name);
        self.phones.push(phone);
        Ok(message)
    }

    pub fn delete_phone(&mut self, phone: impl Into<Phone>) -> Result<String, BookError> {
        let phone: Phone = phone.into();
        let index = self.position(&phone).ok_or_else(|| BookError::PhoneNotFound {
            name: self.name.clone(),
            phone: phone.0.clone(),
        })?;
        self.phones.remove(index);
        Ok(format!("{} has been deleted from the {} record", phone, self.name))
    }

    /// Replace `old` with `new` in place; nothing changes on error
    pub fn change_phone(
        &mut self,
        old: impl Into<Phone>,
        new: impl Into<Phone>,
    ) -> Result<String, BookError> {
        let (old, new): (Phone, Phone) = (old.into(), new.into());
        let index = self.position(&old).ok_or_else(|| BookError::PhoneNotFound {
            name: self.name.clone(),
            phone: old.0.clone(),
        })?;
        if old != new && self.position(&new).is_some() {
            return Err(BookError::DuplicateEntry {
                name: self.name.clone(),
                phone: new.0,
            });
        }
        let message = format!("{} has been changed to {} in the {} record", old, new, self.name);
        self.phones[index] = new;
        Ok(message)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", phone)?;
        }
        f.write_str("]")
    }
}
