use super::ValidationError;
use serde::{Deserialize, Serialize};

const MAX_NAME_LENGTH: usize = 255;

/// Display name of a campaign member. Surrounding whitespace is stripped
/// before the length rules are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberName(String);

impl MemberName {
    pub fn parse(name: String) -> Result<Self, ValidationError> {
        let name = name.trim();
        match name.chars().count() {
            0 => Err(ValidationError::new(
                "Member name cannot be empty".to_string(),
            )),
            x if x > MAX_NAME_LENGTH => Err(ValidationError::new(format!(
                "Max name length is {MAX_NAME_LENGTH} characters"
            ))),
            _ => Ok(Self(name.to_owned())),
        }
    }
}

impl AsRef<String> for MemberName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[test]
fn test_valid_member_names() {
    let valid_names = ["Dougal".to_string(), "a".repeat(255)];
    for valid_name in valid_names.iter() {
        let parsed = MemberName::parse(valid_name.to_owned())
            .expect("Failed to parse valid member name");

        assert_eq!(parsed.as_ref(), valid_name);
    }
}

#[test]
fn test_member_names_are_trimmed() {
    let parsed = MemberName::parse("  Father Ted \n".to_string())
        .expect("Failed to parse padded member name");
    assert_eq!(parsed.as_ref(), "Father Ted");
}

#[test]
fn test_blank_member_names() {
    for blank_name in ["", "   ", "\t\n"] {
        let result = MemberName::parse(blank_name.to_string());
        assert_eq!(
            result.unwrap_err().as_ref(),
            "Member name cannot be empty",
            "Blank name should be rejected: {blank_name:?}"
        );
    }
}

#[test]
fn test_long_member_names() {
    let long_name = "a".repeat(256);
    let result = MemberName::parse(long_name);
    assert_eq!(
        result.unwrap_err().as_ref(),
        "Max name length is 255 characters"
    );
}
