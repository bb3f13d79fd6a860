use crate::units::Domain;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::PathBuf;

lazy_static! {
    /// "<value>" or "<value> <from> [to|in] <to>"
    /// Examples: "12", "12 cm m", "12 cm to m", "-40 C in F"
    static ref CONVERSION_PATTERN: Regex = Regex::new(
        r"^(?P<value>\S+)(?:\s+(?P<from>\S+)\s+(?:(?:to|in)\s+)?(?P<to>\S+))?$"
    ).unwrap();

    /// "<domain> <value> <from> [to|in] <to>"
    static ref BATCH_PATTERN: Regex = Regex::new(
        r"^(?P<domain>[A-Za-z]+)\s+(?P<value>\S+)\s+(?P<from>\S+)\s+(?:(?:to|in)\s+)?(?P<to>\S+)$"
    ).unwrap();
}

/// Connectives allowed between the two units, never units themselves
const UNIT_CONNECTIVES: [&str; 2] = ["to", "in"];

fn is_connective(word: &str) -> bool {
    UNIT_CONNECTIVES.contains(&word)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Open(Domain),
    Back,
    SelectFrom(String),
    SelectTo(String),
    Units,
    History,
    Export(PathBuf),
    Help,
    Quit,
    // Value text is parsed later so a bad number gets the user-facing message
    Convert {
        value: String,
        units: Option<(String, String)>,
    },
    Invalid(String),
}

/// Parse one interactive input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut words = trimmed.split_whitespace();
    let head = words.next().unwrap_or_default();
    let rest: Vec<&str> = words.collect();

    let command = match (head, rest.as_slice()) {
        ("back" | "menu", []) => Command::Back,
        ("units", []) => Command::Units,
        ("history", []) => Command::History,
        ("help" | "?", []) => Command::Help,
        ("quit" | "exit", []) => Command::Quit,
        ("from", [unit]) => Command::SelectFrom(unit.to_string()),
        ("to", [unit]) => Command::SelectTo(unit.to_string()),
        ("export", [path]) => Command::Export(PathBuf::from(*path)),
        ("from" | "to" | "export", _) => Command::Invalid(trimmed.to_string()),
        (word, []) => match word.parse::<Domain>() {
            Ok(domain) => Command::Open(domain),
            Err(_) => parse_conversion_or_invalid(trimmed),
        },
        _ => parse_conversion_or_invalid(trimmed),
    };

    Some(command)
}

fn parse_conversion_or_invalid(line: &str) -> Command {
    parse_conversion(line).unwrap_or_else(|| Command::Invalid(line.to_string()))
}

fn parse_conversion(line: &str) -> Option<Command> {
    let caps = CONVERSION_PATTERN.captures(line)?;
    let value = caps.name("value")?.as_str().to_string();
    let units = match (caps.name("from"), caps.name("to")) {
        (Some(from), Some(to)) => {
            let (from, to) = (from.as_str(), to.as_str());
            if is_connective(from) || is_connective(to) {
                return None;
            }
            Some((from.to_string(), to.to_string()))
        }
        _ => None,
    };
    Some(Command::Convert { value, units })
}

/// One line of a batch file, still as raw text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchLine {
    pub domain: String,
    pub value: String,
    pub from_unit: String,
    pub to_unit: String,
}

/// Parse a batch line. Blank lines and `#` comments yield `None`.
pub fn parse_batch_line(line: &str) -> Option<Result<BatchLine, String>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let parsed = BATCH_PATTERN
        .captures(trimmed)
        .filter(|caps| !is_connective(&caps["from"]) && !is_connective(&caps["to"]))
        .map(|caps| BatchLine {
            domain: caps["domain"].to_string(),
            value: caps["value"].to_string(),
            from_unit: caps["from"].to_string(),
            to_unit: caps["to"].to_string(),
        })
        .ok_or_else(|| format!("Expected '<domain> <value> <from> <to>', got '{}'", trimmed));

    Some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_commands() {
        assert_eq!(parse_command("length"), Some(Command::Open(Domain::Length)));
        assert_eq!(parse_command(" Weight "), Some(Command::Open(Domain::Weight)));
        assert_eq!(parse_command("back"), Some(Command::Back));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("from cm"), Some(Command::SelectFrom("cm".into())));
        assert_eq!(parse_command("to K"), Some(Command::SelectTo("K".into())));
        assert_eq!(
            parse_command("export out.json"),
            Some(Command::Export(PathBuf::from("out.json")))
        );
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn test_bare_value_uses_selected_units() {
        assert_eq!(
            parse_command("12.5"),
            Some(Command::Convert {
                value: "12.5".into(),
                units: None
            })
        );
        // Non-numbers still reach the session, which reports them
        assert_eq!(
            parse_command("abc"),
            Some(Command::Convert {
                value: "abc".into(),
                units: None
            })
        );
    }

    #[test]
    fn test_inline_units_with_optional_keyword() {
        let expected = Some(Command::Convert {
            value: "12".into(),
            units: Some(("cm".into(), "m".into())),
        });
        assert_eq!(parse_command("12 cm m"), expected);
        assert_eq!(parse_command("12 cm to m"), expected);
        assert_eq!(parse_command("12  cm  in  m"), expected);
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(parse_command("12 cm"), Some(Command::Invalid("12 cm".into())));
        assert_eq!(parse_command("from"), Some(Command::Invalid("from".into())));
        assert_eq!(
            parse_command("12 cm to m please"),
            Some(Command::Invalid("12 cm to m please".into()))
        );
    }

    #[test]
    fn test_connective_is_never_a_unit() {
        assert_eq!(parse_command("12 cm to"), Some(Command::Invalid("12 cm to".into())));
        assert_eq!(parse_command("12 to m"), Some(Command::Invalid("12 to m".into())));
        assert_eq!(parse_command("12 in in"), Some(Command::Invalid("12 in in".into())));
        assert_eq!(parse_command("12 cm in"), Some(Command::Invalid("12 cm in".into())));
    }

    #[test]
    fn test_batch_lines() {
        assert_eq!(parse_batch_line("# header"), None);
        assert_eq!(parse_batch_line(""), None);
        assert_eq!(
            parse_batch_line("temperature -40 C to F"),
            Some(Ok(BatchLine {
                domain: "temperature".into(),
                value: "-40".into(),
                from_unit: "C".into(),
                to_unit: "F".into(),
            }))
        );
        assert!(matches!(parse_batch_line("length 5 km"), Some(Err(_))));
        assert!(matches!(parse_batch_line("length 5 km to"), Some(Err(_))));
        assert!(matches!(parse_batch_line("length 5 to m"), Some(Err(_))));
    }
}
