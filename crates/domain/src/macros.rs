//! Macro for implementing Display and FromStr for closed domain enums
//!
//! Pipeline stages and marketing-service tags are both small closed sets that
//! travel as snake_case strings. This macro keeps their `Display` and
//! `FromStr` implementations in one place.
//!
//! # Example
//!
//! ```rust
//! use dealdesk_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Priority {
//!     Low,
//!     High,
//!     Urgent,
//! }
//!
//! impl_domain_status_conversions!(Priority {
//!     Low => "low",
//!     High => "high",
//!     Urgent => "urgent",
//! });
//!
//! assert_eq!("URGENT".parse::<Priority>(), Ok(Priority::Urgent));
//! ```

/// Implements Display and FromStr traits for closed domain enums
///
/// This macro generates:
/// - Display trait: converts enum variants to their snake_case strings
/// - FromStr trait: parses strings case-insensitively, treating spaces and
///   hyphens as underscores so human labels such as `"Technical Department"`
///   parse to the same variant as `"technical_department"`
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their string
///   representations (must already be lowercase snake_case)
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized: String = s
                    .trim()
                    .chars()
                    .map(|c| if c == ' ' || c == '-' { '_' } else { c.to_ascii_lowercase() })
                    .collect();

                match normalized.as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStage {
        Intake,
        InReview,
        Closed,
    }

    impl_domain_status_conversions!(TestStage {
        Intake => "intake",
        InReview => "in_review",
        Closed => "closed",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestStage::Intake.to_string(), "intake");
        assert_eq!(TestStage::InReview.to_string(), "in_review");
        assert_eq!(TestStage::Closed.to_string(), "closed");
    }

    #[test]
    fn test_fromstr_snake_case() {
        assert_eq!(TestStage::from_str("in_review").unwrap(), TestStage::InReview);
        assert_eq!(TestStage::from_str("closed").unwrap(), TestStage::Closed);
    }

    #[test]
    fn test_fromstr_human_label() {
        assert_eq!(TestStage::from_str("In Review").unwrap(), TestStage::InReview);
        assert_eq!(TestStage::from_str("in-review").unwrap(), TestStage::InReview);
        assert_eq!(TestStage::from_str("  CLOSED ").unwrap(), TestStage::Closed);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestStage::from_str("archived");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestStage: archived"));
    }

    #[test]
    fn test_fromstr_empty() {
        assert!(TestStage::from_str("").is_err());
    }
}
