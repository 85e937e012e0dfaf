use super::*;

use crate::error::MarketError;
use crate::model::Identity;

/// Signup form fields. The password is accepted for shape only; this is mock
/// authentication and nothing is verified or stored from it.
pub struct NewIdentity {
    pub name: String,
    pub email: String,
    pub password: String,
    pub major: String,
    pub age: Option<u8>,
    pub gender: Option<String>,
}

impl<I: IdGen, C: Clock> Market<I, C> {
    /// Mock sign-in: succeeds whenever both fields are non-empty. Reuses the
    /// persisted identity when its email matches (keeping major/age/gender),
    /// otherwise fabricates a minimal identity from the email's local part.
    pub fn login(&self, email: &str, password: &str) -> Result<Identity> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(MarketError::invalid_input("email and password are required").into());
        }

        let identity = match self.store.read_session()? {
            Some(existing) if existing.email == email => existing,
            _ => Identity {
                email: email.to_string(),
                name: local_part(email).to_string(),
                major: None,
                age: None,
                gender: None,
            },
        };
        self.store.write_session(&identity)?;
        Ok(identity)
    }

    /// Creates and persists a new identity, overwriting whatever the single
    /// session slot held before. Only one identity is remembered per device.
    pub fn signup(&self, new: NewIdentity) -> Result<Identity> {
        if new.name.trim().is_empty()
            || new.email.trim().is_empty()
            || new.password.is_empty()
            || new.major.trim().is_empty()
        {
            return Err(
                MarketError::invalid_input("name, email, password and major are required").into(),
            );
        }

        let identity = Identity {
            email: new.email.trim().to_string(),
            name: new.name.trim().to_string(),
            major: Some(new.major.trim().to_string()),
            age: new.age,
            gender: new.gender,
        };
        self.store.write_session(&identity)?;
        Ok(identity)
    }

    pub fn logout(&self) -> Result<()> {
        self.store.clear_session()
    }

    pub fn current_identity(&self) -> Result<Option<Identity>> {
        self.store.read_session()
    }

    pub(crate) fn require_identity(&self) -> Result<Identity> {
        self.store
            .read_session()?
            .ok_or_else(|| MarketError::Unauthenticated.into())
    }
}

fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
