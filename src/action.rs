use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The clipboard operation to perform on the selected text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Copy,
    Cut,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Copy => "copy",
            Action::Cut => "cut",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    /// Only the exact lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "copy" => Ok(Action::Copy),
            "cut" => Ok(Action::Cut),
            _ => Err(Error::InvalidAction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_copy() {
        assert_eq!(Action::default(), Action::Copy);
    }

    #[test]
    fn test_parse_known_actions() {
        assert_eq!("copy".parse::<Action>().unwrap(), Action::Copy);
        assert_eq!("cut".parse::<Action>().unwrap(), Action::Cut);
    }

    #[test]
    fn test_parse_rejects_other_values() {
        for value in ["paste", "", "Copy", " cut"] {
            let err = value.parse::<Action>().unwrap_err();
            assert_eq!(
                err.to_string(),
                r#"Invalid "action" value, use either "copy" or "cut""#
            );
        }
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Action::Cut.to_string(), "cut");
        assert_eq!(Action::Copy.as_str(), "copy");
    }
}
