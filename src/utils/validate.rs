use regex::Regex;

use crate::core::error::ConfigError;
use crate::types::request::{LoginData, NewStore, NewUser, RegisterData, UpdatePasswordData};

pub(crate) const NAME_LENGTH: (usize, usize) = (20, 60);
pub(crate) const PASSWORD_LENGTH: (usize, usize) = (8, 16);
pub(crate) const ADDRESS_MAX: usize = 400;
pub(crate) const RATING_RANGE: (u8, u8) = (1, 5);

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Name must be between {} and {} characters", NAME_LENGTH.0, NAME_LENGTH.1)]
    NameLength,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be between {} and {} characters", PASSWORD_LENGTH.0, PASSWORD_LENGTH.1)]
    PasswordLength,
    #[error("Password must contain at least one uppercase letter")]
    PasswordUppercase,
    #[error("Password must contain at least one special character")]
    PasswordSpecial,
    #[error("Address must be at most {} characters", ADDRESS_MAX)]
    AddressLength,
    #[error("New passwords do not match")]
    PasswordMismatch,
    #[error("Please select a rating")]
    MissingRating,
    #[error("Rating must be between {} and {}", RATING_RANGE.0, RATING_RANGE.1)]
    RatingRange,
}

/// Form checks that run before anything is sent to the backend.
#[derive(Clone)]
pub(crate) struct Validator {
    email_pattern: Regex,
    special_pattern: Regex,
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("email_pattern", &self.email_pattern.as_str())
            .finish()
    }
}

impl Validator {
    pub(crate) fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            email_pattern: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?,
            special_pattern: Regex::new(r"[^A-Za-z0-9\s]")?,
        })
    }

    pub(crate) fn name(&self, name: &str) -> Result<(), ValidationError> {
        let len = name.trim().chars().count();

        if len < NAME_LENGTH.0 || len > NAME_LENGTH.1 {
            return Err(ValidationError::NameLength);
        }

        Ok(())
    }

    pub(crate) fn email(&self, email: &str) -> Result<(), ValidationError> {
        if email.trim().is_empty() {
            return Err(ValidationError::Required("Email"));
        }

        if !self.email_pattern.is_match(email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(())
    }

    pub(crate) fn password(&self, password: &str) -> Result<(), ValidationError> {
        let len = password.chars().count();

        if len < PASSWORD_LENGTH.0 || len > PASSWORD_LENGTH.1 {
            return Err(ValidationError::PasswordLength);
        }

        if !password.chars().any(char::is_uppercase) {
            return Err(ValidationError::PasswordUppercase);
        }

        if !self.special_pattern.is_match(password) {
            return Err(ValidationError::PasswordSpecial);
        }

        Ok(())
    }

    pub(crate) fn address(&self, address: &str) -> Result<(), ValidationError> {
        if address.trim().is_empty() {
            return Err(ValidationError::Required("Address"));
        }

        if address.chars().count() > ADDRESS_MAX {
            return Err(ValidationError::AddressLength);
        }

        Ok(())
    }

    pub(crate) fn rating(&self, rating: u8) -> Result<(), ValidationError> {
        match rating {
            0 => Err(ValidationError::MissingRating),
            r if r > RATING_RANGE.1 => Err(ValidationError::RatingRange),
            _ => Ok(()),
        }
    }

    pub(crate) fn login(&self, data: &LoginData) -> Result<(), ValidationError> {
        self.email(&data.email)?;

        if data.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }

        Ok(())
    }

    pub(crate) fn registration(&self, data: &RegisterData) -> Result<(), ValidationError> {
        self.name(&data.name)?;
        self.email(&data.email)?;
        self.password(&data.password)?;
        self.address(&data.address)
    }

    pub(crate) fn new_user(&self, data: &NewUser) -> Result<(), ValidationError> {
        self.name(&data.name)?;
        self.email(&data.email)?;
        self.password(&data.password)?;
        self.address(&data.address)
    }

    pub(crate) fn new_store(&self, data: &NewStore) -> Result<(), ValidationError> {
        self.name(&data.name)?;
        self.email(&data.email)?;
        self.address(&data.address)
    }

    pub(crate) fn password_change(
        &self,
        data: &UpdatePasswordData,
        confirmation: &str,
    ) -> Result<(), ValidationError> {
        if data.current_password.is_empty() {
            return Err(ValidationError::Required("Current password"));
        }

        if data.new_password != confirmation {
            return Err(ValidationError::PasswordMismatch);
        }

        self.password(&data.new_password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> Validator {
        Validator::new().unwrap()
    }

    fn registration() -> RegisterData {
        RegisterData {
            name: "Alexandra Catherine Smith".into(),
            email: "alex@example.com".into(),
            password: "Secret#123".into(),
            address: "12 Market Street, Springfield".into(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert_eq!(validator().registration(&registration()), Ok(()));
    }

    #[test]
    fn test_name_bounds() {
        let v = validator();

        assert_eq!(v.name(&"a".repeat(19)), Err(ValidationError::NameLength));
        assert_eq!(v.name(&"a".repeat(20)), Ok(()));
        assert_eq!(v.name(&"a".repeat(60)), Ok(()));
        assert_eq!(v.name(&"a".repeat(61)), Err(ValidationError::NameLength));
    }

    #[test]
    fn test_email_shape() {
        let v = validator();

        assert_eq!(v.email(""), Err(ValidationError::Required("Email")));
        assert_eq!(v.email("alex@example"), Err(ValidationError::InvalidEmail));
        assert_eq!(v.email("alex example@x.io"), Err(ValidationError::InvalidEmail));
        assert_eq!(v.email("alex@example.io"), Ok(()));
    }

    #[test]
    fn test_password_rules() {
        let v = validator();

        assert_eq!(v.password("Ab#1"), Err(ValidationError::PasswordLength));
        assert_eq!(
            v.password("Abcdefgh#12345678"),
            Err(ValidationError::PasswordLength)
        );
        assert_eq!(v.password("secret#123"), Err(ValidationError::PasswordUppercase));
        assert_eq!(v.password("Secret1234"), Err(ValidationError::PasswordSpecial));
        assert_eq!(v.password("Secret#123"), Ok(()));
    }

    #[test]
    fn test_address_bounds() {
        let v = validator();

        assert_eq!(v.address(""), Err(ValidationError::Required("Address")));
        assert_eq!(v.address(&"x".repeat(400)), Ok(()));
        assert_eq!(v.address(&"x".repeat(401)), Err(ValidationError::AddressLength));
    }

    #[test]
    fn test_rating_bounds() {
        let v = validator();

        assert_eq!(v.rating(0), Err(ValidationError::MissingRating));
        assert_eq!(v.rating(1), Ok(()));
        assert_eq!(v.rating(5), Ok(()));
        assert_eq!(v.rating(6), Err(ValidationError::RatingRange));
    }

    #[test]
    fn test_password_change_checks_match_first() {
        let v = validator();
        let data = UpdatePasswordData {
            current_password: "Old#pass1".into(),
            new_password: "short".into(),
        };

        assert_eq!(
            v.password_change(&data, "different"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            v.password_change(&data, "short"),
            Err(ValidationError::PasswordLength)
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "New passwords do not match"
        );
    }
}
