//! Statistics service: object counts per kind.

use hbnb_domain::error::HbnbError;
use hbnb_domain::kind::EntityKind;

use crate::ports::ObjectCounter;

/// Application service reporting how many objects of each kind are stored.
pub struct StatsService<C> {
    counter: C,
}

impl<C: ObjectCounter> StatsService<C> {
    /// Create a new service backed by the given counter.
    pub fn new(counter: C) -> Self {
        Self { counter }
    }

    /// Count every kind in [`EntityKind::ALL`], in that order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the counter.
    pub async fn counts(&self) -> Result<Vec<(EntityKind, u64)>, HbnbError> {
        let mut counts = Vec::with_capacity(EntityKind::ALL.len());
        for kind in EntityKind::ALL {
            counts.push((kind, self.counter.count(kind).await?));
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::StateRepository;
    use crate::services::fakes::FakeStore;
    use hbnb_domain::state::State;

    #[tokio::test]
    async fn should_report_zero_for_every_kind_when_empty() {
        let svc = StatsService::new(FakeStore::default());
        let counts = svc.counts().await.unwrap();
        assert_eq!(counts.len(), 6);
        assert!(counts.iter().all(|(_, n)| *n == 0));
    }

    #[tokio::test]
    async fn should_count_stored_states() {
        let store = FakeStore::default();
        for name in ["Ohio", "Iowa"] {
            StateRepository::create(&store, State::builder().name(name).build().unwrap())
                .await
                .unwrap();
        }
        let svc = StatsService::new(store);

        let counts = svc.counts().await.unwrap();
        assert!(counts.contains(&(EntityKind::State, 2)));
        assert!(counts.contains(&(EntityKind::City, 0)));
    }
}
