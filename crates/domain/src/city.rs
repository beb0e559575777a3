//! City: a named place inside a [`State`](crate::state::State).

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::{CityId, StateId};
use crate::time::{self, Timestamp};

/// A city belonging to exactly one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub state_id: StateId,
    pub name: String,
}

impl City {
    /// Create a builder for constructing a [`City`].
    #[must_use]
    pub fn builder() -> CityBuilder {
        CityBuilder::default()
    }

    /// Overwrite every field the patch carries. `state_id` is not patchable.
    pub fn apply(&mut self, patch: CityPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}

/// Step-by-step builder for [`City`]; also the creation payload.
///
/// `state_id` is never read from a payload, the owning state is assigned by
/// the caller.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CityBuilder {
    #[serde(skip)]
    state_id: Option<StateId>,
    name: Option<String>,
}

impl CityBuilder {
    #[must_use]
    pub fn state_id(mut self, state_id: StateId) -> Self {
        self.state_id = Some(state_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder and return a fresh [`City`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if `name` or `state_id` was
    /// never set.
    pub fn build(self) -> Result<City, HbnbError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let state_id = self
            .state_id
            .ok_or(ValidationError::MissingField("state_id"))?;
        let now = time::now();
        Ok(City {
            id: CityId::new(),
            created_at: now,
            updated_at: now,
            state_id,
            name,
        })
    }
}

/// Mutable fields of a [`City`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CityPatch {
    pub name: Option<String>,
}
