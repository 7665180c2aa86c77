//! Command parser - Parses raw input lines into typed commands

use crate::application::errors::CommandError;
use crate::domain::entities::{Command, CommandKind, UpdateAction};

/// Parses input lines into `Command` values
pub struct CommandParser {
    case_insensitive: bool,
}

impl CommandParser {
    pub fn new(case_insensitive: bool) -> Self {
        Self { case_insensitive }
    }

    /// Parse one line. Blank lines yield `Ok(None)`.
    pub fn parse(&self, text: &str) -> Result<Option<Command>, CommandError> {
        let text = if self.case_insensitive {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let parts: Vec<&str> = text.split_whitespace().collect();
        let Some((first, args)) = parts.split_first() else {
            return Ok(None);
        };

        let kind = CommandKind::find(first).ok_or_else(|| CommandError::Unknown(first.to_string()))?;
        Self::parse_args(kind, args).map(Some)
    }

    fn parse_args(kind: CommandKind, args: &[&str]) -> Result<Command, CommandError> {
        let invalid = || CommandError::InvalidArgs {
            command: kind.name().to_string(),
            usage: kind.usage(),
        };

        let command = match (kind, args) {
            (CommandKind::Add, [name, phones @ ..]) => Command::Add {
                name: name.to_string(),
                phones: phones.iter().map(|p| p.to_string()).collect(),
            },
            (CommandKind::Update, [name, action, rest @ ..]) => Command::Update {
                name: name.to_string(),
                action: Self::parse_action(action, rest)?,
            },
            (CommandKind::Delete, [name]) => Command::Delete {
                name: name.to_string(),
            },
            (CommandKind::Phone, [name]) => Command::Phone {
                name: name.to_string(),
            },
            (CommandKind::Show, []) => Command::Show,
            (CommandKind::Help, []) => Command::Help { topic: None },
            (CommandKind::Help, [topic]) => Command::Help {
                topic: Some(topic.to_string()),
            },
            (CommandKind::Exit, []) => Command::Exit,
            _ => return Err(invalid()),
        };
        Ok(command)
    }

    fn parse_action(action: &str, phones: &[&str]) -> Result<UpdateAction, CommandError> {
        let invalid = || CommandError::InvalidArgs {
            command: CommandKind::Update.name().to_string(),
            usage: CommandKind::Update.usage(),
        };

        match (action.to_lowercase().as_str(), phones) {
            ("add", [phone]) => Ok(UpdateAction::Add(phone.to_string())),
            ("delete", [phone]) => Ok(UpdateAction::Delete(phone.to_string())),
            ("change", [old, new]) => Ok(UpdateAction::Change {
                old: old.to_string(),
                new: new.to_string(),
            }),
            ("add" | "delete" | "change", _) => Err(invalid()),
            _ => Err(CommandError::UnknownAction(action.to_string())),
        }
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Option<Command>, CommandError> {
        CommandParser::default().parse(text)
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   \t "), Ok(None));
    }

    #[test]
    fn test_parse_add_with_and_without_phones() {
        assert_eq!(
            parse("add alice 111 222"),
            Ok(Some(Command::Add {
                name: "alice".to_string(),
                phones: vec!["111".to_string(), "222".to_string()],
            }))
        );
        assert_eq!(
            parse("  add   bob "),
            Ok(Some(Command::Add {
                name: "bob".to_string(),
                phones: vec![],
            }))
        );
        assert!(matches!(parse("add"), Err(CommandError::InvalidArgs { .. })));
    }

    #[test]
    fn test_parse_update() {
        assert_eq!(
            parse("update alice change 111 333"),
            Ok(Some(Command::Update {
                name: "alice".to_string(),
                action: UpdateAction::Change {
                    old: "111".to_string(),
                    new: "333".to_string(),
                },
            }))
        );
        assert_eq!(
            parse("update alice delete 111"),
            Ok(Some(Command::Update {
                name: "alice".to_string(),
                action: UpdateAction::Delete("111".to_string()),
            }))
        );
    }

    #[test]
    fn test_update_arity_and_action_errors() {
        assert!(matches!(parse("update alice"), Err(CommandError::InvalidArgs { .. })));
        assert!(matches!(parse("update alice add"), Err(CommandError::InvalidArgs { .. })));
        assert!(matches!(parse("update alice add 1 2"), Err(CommandError::InvalidArgs { .. })));
        assert!(matches!(parse("update alice change 1"), Err(CommandError::InvalidArgs { .. })));
        assert_eq!(
            parse("update alice rename 1"),
            Err(CommandError::UnknownAction("rename".to_string()))
        );
    }

    #[test]
    fn test_fixed_arity_commands() {
        assert_eq!(parse("show"), Ok(Some(Command::Show)));
        assert!(parse("show alice").is_err());
        assert!(parse("delete").is_err());
        assert!(parse("phone alice bob").is_err());
        assert_eq!(parse("help update"), Ok(Some(Command::Help { topic: Some("update".to_string()) })));
        for word in ["close", "exit", "quit"] {
            assert_eq!(parse(word), Ok(Some(Command::Exit)));
        }
    }

    #[test]
    fn test_unknown_command() {
        let err = parse("remove alice").unwrap_err();
        assert_eq!(err, CommandError::Unknown("remove".to_string()));
        assert_eq!(err.to_string(), "Wrong command!");
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(
            parse("ADD Alice"),
            Ok(Some(Command::Add {
                name: "alice".to_string(),
                phones: vec![],
            }))
        );

        let strict = CommandParser::new(false);
        assert_eq!(
            strict.parse("ADD Alice"),
            Ok(Some(Command::Add {
                name: "Alice".to_string(),
                phones: vec![],
            }))
        );
    }
}
