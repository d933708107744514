use super::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignName(String);

impl CampaignName {
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        match name.chars().count() {
            0 => Err(ValidationError::new(
                "Campaign name cannot be empty".to_string(),
            )),
            x if x > 255 => Err(ValidationError::new(
                "Max campaign name length is 255 characters".to_string(),
            )),
            _ => Ok(Self(name.to_owned())),
        }
    }
}

impl AsRef<String> for CampaignName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[test]
fn test_valid_campaign_names() {
    let valid_names = ["Craggy Island".to_string(), "a".repeat(255)];
    for valid_name in valid_names.iter() {
        let parsed = CampaignName::parse(valid_name)
            .expect("Failed to parse valid campaign name");

        assert_eq!(parsed.as_ref(), valid_name);
    }
}

#[test]
fn test_empty_campaign_names() {
    let result = CampaignName::parse(" ");
    assert_eq!(
        result.unwrap_err().to_string(),
        "Validation error: Campaign name cannot be empty"
    );
}

#[test]
fn test_long_campaign_names() {
    let result = CampaignName::parse(&"a".repeat(256));
    assert_eq!(
        result.unwrap_err().as_ref(),
        "Max campaign name length is 255 characters"
    );
}
