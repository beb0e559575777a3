//! State: a top-level region that contains cities.

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::StateId;
use crate::time::{self, Timestamp};

/// A state (or province) grouping cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub name: String,
}

impl State {
    /// Create a builder for constructing a [`State`].
    #[must_use]
    pub fn builder() -> StateBuilder {
        StateBuilder::default()
    }

    /// Overwrite every field the patch carries.
    pub fn apply(&mut self, patch: StatePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}

/// Step-by-step builder for [`State`].
///
/// Deserializable, so it doubles as the creation payload.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StateBuilder {
    name: Option<String>,
}

impl StateBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder and return a fresh [`State`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if `name` was never set.
    pub fn build(self) -> Result<State, HbnbError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let now = time::now();
        Ok(State {
            id: StateId::new(),
            created_at: now,
            updated_at: now,
            name,
        })
    }
}

/// Mutable fields of a [`State`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StatePatch {
    pub name: Option<String>,
}
