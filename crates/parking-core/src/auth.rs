//! Entry screen forms
//!
//! Login and registration form state. There is no account backend: the
//! forms only collect text and, when submitted, tell the shell which screen to
//! open next. Credentials are never checked.

use serde::{Deserialize, Serialize};

/// What the shell should do after an entry-screen action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryIntent {
    /// Open the parking lot screen
    OpenParkingLot,
    /// Open the registration screen
    OpenRegistration,
}

/// Email and password as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

/// Login form state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    credentials: Credentials,
}

impl LoginForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the email field
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.credentials.email = email.into();
    }

    /// Replace the password field
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    /// Current field values
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Submit the form. Always proceeds to the parking lot.
    pub fn submit(&self) -> EntryIntent {
        tracing::info!(email = %self.credentials.email, "Login submitted");
        EntryIntent::OpenParkingLot
    }

    /// The "register" button
    pub fn open_registration(&self) -> EntryIntent {
        EntryIntent::OpenRegistration
    }
}

/// Registration form state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    credentials: Credentials,
    confirm_password: String,
}

impl RegisterForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the email field
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.credentials.email = email.into();
    }

    /// Replace the password field
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    /// Replace the confirmation field
    pub fn set_confirm_password(&mut self, password: impl Into<String>) {
        self.confirm_password = password.into();
    }

    /// Current field values
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Confirmation field value
    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    /// Whether both password fields match (informational only)
    pub fn passwords_match(&self) -> bool {
        self.credentials.password == self.confirm_password
    }

    /// Submit the form. Always proceeds to the parking lot.
    pub fn submit(&self) -> EntryIntent {
        tracing::info!(email = %self.credentials.email, "Registration submitted");
        EntryIntent::OpenParkingLot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_submit_without_input() {
        let form = LoginForm::new();
        assert_eq!(form.submit(), EntryIntent::OpenParkingLot);
    }

    #[test]
    fn test_login_fields() {
        let mut form = LoginForm::new();
        form.set_email("aru@example.kz");
        form.set_password("secret");
        assert_eq!(form.credentials().email, "aru@example.kz");
        assert_eq!(form.credentials().password, "secret");
        assert_eq!(form.submit(), EntryIntent::OpenParkingLot);
    }

    #[test]
    fn test_login_open_registration() {
        assert_eq!(
            LoginForm::new().open_registration(),
            EntryIntent::OpenRegistration
        );
    }

    #[test]
    fn test_register_submit_ignores_mismatch() {
        let mut form = RegisterForm::new();
        form.set_email("aru@example.kz");
        form.set_password("one");
        form.set_confirm_password("two");
        assert!(!form.passwords_match());
        assert_eq!(form.submit(), EntryIntent::OpenParkingLot);
    }

    #[test]
    fn test_register_passwords_match() {
        let mut form = RegisterForm::new();
        form.set_password("same");
        form.set_confirm_password("same");
        assert!(form.passwords_match());
        assert_eq!(form.confirm_password(), "same");
    }

    #[test]
    fn test_intent_serialization() {
        let json = serde_json::to_string(&EntryIntent::OpenRegistration).unwrap();
        assert_eq!(json, "\"open_registration\"");
    }
}
