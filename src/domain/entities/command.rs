/// Usage line for the `update` command
pub const UPDATE_USAGE: &str = "Update record: update {name} add/delete/change {phone} {new phone}(optional)";

/// A parsed address book command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { name: String, phones: Vec<String> },
    Update { name: String, action: UpdateAction },
    Delete { name: String },
    Phone { name: String },
    Show,
    Help { topic: Option<String> },
    Exit,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Add { .. } => CommandKind::Add,
            Command::Update { .. } => CommandKind::Update,
            Command::Delete { .. } => CommandKind::Delete,
            Command::Phone { .. } => CommandKind::Phone,
            Command::Show => CommandKind::Show,
            Command::Help { .. } => CommandKind::Help,
            Command::Exit => CommandKind::Exit,
        }
    }
}

/// Sub-operation of `update`, applied to a single record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    Add(String),
    Delete(String),
    Change { old: String, new: String },
}

impl UpdateAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateAction::Add(_) => "add",
            UpdateAction::Delete(_) => "delete",
            UpdateAction::Change { .. } => "change",
        }
    }
}

/// The fixed set of command keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Add,
    Update,
    Delete,
    Phone,
    Show,
    Help,
    Exit,
}

impl CommandKind {
    pub const ALL: [CommandKind; 7] = [
        CommandKind::Add,
        CommandKind::Update,
        CommandKind::Delete,
        CommandKind::Phone,
        CommandKind::Show,
        CommandKind::Help,
        CommandKind::Exit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Add => "add",
            CommandKind::Update => "update",
            CommandKind::Delete => "delete",
            CommandKind::Phone => "phone",
            CommandKind::Show => "show",
            CommandKind::Help => "help",
            CommandKind::Exit => "exit",
        }
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CommandKind::Exit => &["close", "quit"],
            _ => &[],
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CommandKind::Add => "Create a record with optional phones",
            CommandKind::Update => "Add, delete or change a phone of a record",
            CommandKind::Delete => "Delete a record",
            CommandKind::Phone => "Show the phones of a record",
            CommandKind::Show => "Show all records",
            CommandKind::Help => "Show this message",
            CommandKind::Exit => "Leave the address book",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            CommandKind::Add => "Add record: add {name} {phone}(optional)...",
            CommandKind::Update => UPDATE_USAGE,
            CommandKind::Delete => "Delete record: delete {name}",
            CommandKind::Phone => "Show phones: phone {name}",
            CommandKind::Show => "Show all records: show",
            CommandKind::Help => "Show help: help {command}(optional)",
            CommandKind::Exit => "Leave: close/exit/quit",
        }
    }

    pub fn matches(&self, input: &str) -> bool {
        self.name().eq_ignore_ascii_case(input)
            || self.aliases().iter().any(|a| a.eq_ignore_ascii_case(input))
    }

    pub fn find(input: &str) -> Option<CommandKind> {
        Self::ALL.into_iter().find(|kind| kind.matches(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_name_and_alias() {
        assert_eq!(CommandKind::find("add"), Some(CommandKind::Add));
        assert_eq!(CommandKind::find("PHONE"), Some(CommandKind::Phone));
        for word in ["close", "exit", "quit"] {
            assert_eq!(CommandKind::find(word), Some(CommandKind::Exit));
        }
        assert_eq!(CommandKind::find("remove"), None);
    }

    #[test]
    fn test_kind_of_command() {
        let cmd = Command::Update {
            name: "alice".to_string(),
            action: UpdateAction::Change {
                old: "1".to_string(),
                new: "2".to_string(),
            },
        };
        assert_eq!(cmd.kind(), CommandKind::Update);
        assert_eq!(Command::Exit.kind().name(), "exit");
    }
}
