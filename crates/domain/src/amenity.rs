//! Amenity: a feature a place can offer (wifi, pool, …).

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::AmenityId;
use crate::time::{self, Timestamp};

/// A named amenity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: AmenityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub name: String,
}

impl Amenity {
    /// Create a builder for constructing an [`Amenity`].
    #[must_use]
    pub fn builder() -> AmenityBuilder {
        AmenityBuilder::default()
    }

    /// Overwrite every field the patch carries.
    pub fn apply(&mut self, patch: AmenityPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}

/// Step-by-step builder for [`Amenity`]; also the creation payload.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AmenityBuilder {
    name: Option<String>,
}

impl AmenityBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder and return a fresh [`Amenity`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if `name` was never set.
    pub fn build(self) -> Result<Amenity, HbnbError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let now = time::now();
        Ok(Amenity {
            id: AmenityId::new(),
            created_at: now,
            updated_at: now,
            name,
        })
    }
}

/// Mutable fields of an [`Amenity`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AmenityPatch {
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_amenity_when_name_provided() {
        let amenity = Amenity::builder().name("Wifi").build().unwrap();
        assert_eq!(amenity.name, "Wifi");
    }

    #[test]
    fn should_report_missing_name() {
        let builder: AmenityBuilder = serde_json::from_str(r#"{"label":"Pool"}"#).unwrap();
        let result = builder.build();
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::MissingField("name")))
        ));
    }

    #[test]
    fn should_keep_name_when_patch_is_empty() {
        let mut amenity = Amenity::builder().name("Sauna").build().unwrap();
        amenity.apply(AmenityPatch::default());
        assert_eq!(amenity.name, "Sauna");
    }
}
