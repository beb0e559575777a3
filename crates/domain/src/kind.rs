//! The closed set of object kinds the storage layer can count.

use std::fmt;

/// Kind of stored object, used for per-kind counting.
///
/// `Review` has no REST resource but is part of the stored schema, so it is
/// reported by the statistics endpoint like every other kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Amenity,
    City,
    Place,
    Review,
    State,
    User,
}

impl EntityKind {
    /// Every kind, in the order statistics are reported.
    pub const ALL: [Self; 6] = [
        Self::Amenity,
        Self::City,
        Self::Place,
        Self::Review,
        Self::State,
        Self::User,
    ];

    /// Plural, lowercase name used as the statistics key and table name.
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::Amenity => "amenities",
            Self::City => "cities",
            Self::Place => "places",
            Self::Review => "reviews",
            Self::State => "states",
            Self::User => "users",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}
