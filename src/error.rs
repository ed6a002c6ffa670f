use thiserror::Error;

/// Configuration errors raised while constructing a clipboard action.
///
/// All variants are invalid-argument errors: the action object is never
/// created when one of them is returned. Failures of the copy/cut primitive
/// itself are not errors, they are reported through the `error` event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(r#"Invalid "action" value, use either "copy" or "cut""#)]
    InvalidAction,

    #[error(r#"Invalid "target" value, use a valid Element"#)]
    InvalidTarget,

    #[error(r#"Invalid "target" attribute. Please use "readonly" instead of "disabled" attribute"#)]
    DisabledTarget,

    #[error(r#"Invalid "target" attribute. You can't cut text from elements with "readonly" or "disabled" attributes"#)]
    ReadonlyTarget,
}

impl Error {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidAction
                | Error::InvalidTarget
                | Error::DisabledTarget
                | Error::ReadonlyTarget
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_messages() {
        assert_eq!(
            Error::InvalidTarget.to_string(),
            r#"Invalid "target" value, use a valid Element"#
        );
        assert_eq!(
            Error::ReadonlyTarget.to_string(),
            r#"Invalid "target" attribute. You can't cut text from elements with "readonly" or "disabled" attributes"#
        );
    }

    #[test]
    fn test_all_variants_are_invalid_argument() {
        assert!(Error::InvalidAction.is_invalid_argument());
        assert!(Error::DisabledTarget.is_invalid_argument());
    }
}
