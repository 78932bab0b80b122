use std::fmt;

/// Errors raised while turning raw inputs into a normalized `InputSet`.
///
/// Ordinary out-of-range values are clamped, not reported. These variants are
/// reserved for inputs the engine cannot run without.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// A field with no default-derivation rule was left empty
    MissingField(&'static str),
    /// A required numeric field is NaN or infinite
    NonFinite { field: &'static str, value: f64 },
    /// A required numeric field is negative
    Negative { field: &'static str, value: f64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MissingField(field) => write!(f, "required field `{field}` is missing"),
            InputError::NonFinite { field, value } => {
                write!(f, "field `{field}` must be a finite number (got {value})")
            }
            InputError::Negative { field, value } => {
                write!(f, "field `{field}` must not be negative (got {value})")
            }
        }
    }
}

impl std::error::Error for InputError {}

pub type Result<T> = std::result::Result<T, InputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            InputError::MissingField("team_size").to_string(),
            "required field `team_size` is missing"
        );
        let err = InputError::Negative {
            field: "implementation_budget",
            value: -5.0,
        };
        assert!(err.to_string().contains("implementation_budget"));
        assert!(err.to_string().contains("-5"));
    }
}
