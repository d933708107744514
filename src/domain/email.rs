use secrecy::{ExposeSecret, Secret};
use std::hash::Hash;

use super::ValidationError;

/// Member e-mail address. Kept behind `Secret` so it never ends up in logs
/// through a `Debug` impl.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Hash for Email {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

impl Eq for Email {}

impl Email {
    pub fn parse(s: Secret<String>) -> Result<Self, ValidationError> {
        let trimmed = s.expose_secret().trim();
        if !validator::validate_email(trimmed) {
            return Err(ValidationError::new(
                "Invalid email address".to_string(),
            ));
        }

        Ok(Self(Secret::new(trimmed.to_owned())))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
