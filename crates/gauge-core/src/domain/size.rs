//! Size codes ("s" / "m" / "l") and the categories they stand for.
//!
//! Matching is strict: no trimming and no case folding, so `"S"` and `" s"` are
//! rejected just like an unknown letter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::{GaugeError, GaugeResult};

/// Placeholder used in error messages when no code was given.
const ABSENT_CODE: &str = "null";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// The one-letter code that maps to this size.
    pub fn code(self) -> &'static str {
        match self {
            Size::Small => "s",
            Size::Medium => "m",
            Size::Large => "l",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Size {
    type Err = GaugeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        classify_code(Some(s))
    }
}

/// Map a size code to its category.
///
/// `None` stands for a missing code and is rejected like any other unknown
/// input; its message renders the code as `null`, while present codes are quoted.
pub fn classify_code(code: Option<&str>) -> GaugeResult<Size> {
    match code {
        Some("s") => Ok(Size::Small),
        Some("m") => Ok(Size::Medium),
        Some("l") => Ok(Size::Large),
        other => {
            // present codes are quoted so that Some("null") differs from None
            let rendered = match other {
                Some(code) => format!("\"{code}\""),
                None => ABSENT_CODE.to_string(),
            };
            debug!(code = %rendered, "rejecting unknown size code");
            Err(GaugeError::invalid_argument(format!(
                "unknown size code: {rendered}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod classify_code {
        use super::*;

        #[rstest]
        #[case::small("s", Size::Small)]
        #[case::medium("m", Size::Medium)]
        #[case::large("l", Size::Large)]
        fn valid(#[case] code: &str, #[case] expected: Size) {
            assert_eq!(classify_code(Some(code)), Ok(expected));
        }

        #[rstest]
        #[case::absent(None)]
        #[case::empty(Some(""))]
        #[case::wrong_case(Some("S"))]
        #[case::unknown_letter(Some("C"))]
        #[case::padded(Some(" s"))]
        #[case::word(Some("small"))]
        fn invalid(#[case] code: Option<&str>) {
            assert!(matches!(
                classify_code(code),
                Err(GaugeError::InvalidArgument(_))
            ));
        }

        #[rstest]
        #[case::unknown_letter(Some("C"), "C")]
        #[case::absent(None, "code: null")]
        fn invalid_message_contains_code(#[case] code: Option<&str>, #[case] rendered: &str) {
            let err = classify_code(code).unwrap_err();

            assert!(err.to_string().contains(rendered), "message was: {err}");
        }

        #[test]
        fn absent_differs_from_literal_null() {
            let absent = classify_code(None).unwrap_err();
            let literal = classify_code(Some("null")).unwrap_err();

            assert_ne!(absent, literal);
        }

        #[test]
        fn present_code_is_quoted() {
            let err = classify_code(Some("C")).unwrap_err();

            assert_eq!(err.to_string(), r#"invalid argument: unknown size code: "C""#);
        }
    }

    #[rstest]
    #[case::small(Size::Small)]
    #[case::medium(Size::Medium)]
    #[case::large(Size::Large)]
    fn code_parses_back(#[case] size: Size) {
        assert_eq!(size.code().parse::<Size>(), Ok(size));
    }

    #[test]
    fn display_is_code() {
        assert_eq!(Size::Large.to_string(), "l");
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Size::Small).unwrap();
        assert_eq!(json, "\"small\"");
    }
}
