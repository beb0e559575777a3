//! Counter port: per-kind object counts.

use std::future::Future;

use hbnb_domain::error::HbnbError;
use hbnb_domain::kind::EntityKind;

/// Counts stored objects of a given kind.
pub trait ObjectCounter {
    /// Number of stored objects of `kind`.
    fn count(&self, kind: EntityKind) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}
