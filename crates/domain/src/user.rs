//! User: an account that owns places.

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::UserId;
use crate::time::{self, Timestamp};

/// A registered user.
///
/// The password is stored but never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Overwrite every field the patch carries. `email` is not patchable.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
    }
}

/// Step-by-step builder for [`User`]; also the creation payload.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserBuilder {
    email: Option<String>,
    password: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl UserBuilder {
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Consume the builder and return a fresh [`User`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for `email`, then
    /// `password`, whichever is absent first.
    pub fn build(self) -> Result<User, HbnbError> {
        let email = self.email.ok_or(ValidationError::MissingField("email"))?;
        let password = self
            .password
            .ok_or(ValidationError::MissingField("password"))?;
        let now = time::now();
        Ok(User {
            id: UserId::new(),
            created_at: now,
            updated_at: now,
            email,
            password,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
        })
    }
}

/// Mutable fields of a [`User`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserPatch {
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
