//! State service: use-cases for managing states.

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::StateId;
use hbnb_domain::state::{State, StateBuilder, StatePatch};

use crate::ports::StateRepository;

/// Application service for state CRUD operations.
pub struct StateService<R> {
    repo: R,
}

impl<R: StateRepository> StateService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all states.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_states(&self) -> Result<Vec<State>, HbnbError> {
        self.repo.get_all().await
    }

    /// Look up a state by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no state with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_state(&self, id: StateId) -> Result<State, HbnbError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "State",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Build and persist a new state.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if a required field is missing, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, builder))]
    pub async fn create_state(&self, builder: StateBuilder) -> Result<State, HbnbError> {
        let state = builder.build()?;
        self.repo.create(state).await
    }

    /// Apply a patch to a state already loaded by the caller and persist it.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, state, patch), fields(id = %state.id))]
    pub async fn update_state(
        &self,
        mut state: State,
        patch: StatePatch,
    ) -> Result<State, HbnbError> {
        state.apply(patch);
        self.repo.update(state).await
    }

    /// Delete a state by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the state does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_state(&self, id: StateId) -> Result<(), HbnbError> {
        let state = self.get_state(id).await?;
        self.repo.delete(state.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::FakeStore;
    use hbnb_domain::error::ValidationError;

    fn make_service() -> StateService<FakeStore> {
        StateService::new(FakeStore::default())
    }

    #[tokio::test]
    async fn should_create_state_when_name_given() {
        let svc = make_service();

        let created = svc
            .create_state(State::builder().name("California"))
            .await
            .unwrap();

        let fetched = svc.get_state(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_reject_create_when_name_missing() {
        let svc = make_service();
        let result = svc.create_state(State::builder()).await;
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::MissingField("name")))
        ));
        assert!(svc.list_states().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_state_missing() {
        let svc = make_service();
        let result = svc.get_state(StateId::new()).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_update_name_and_keep_timestamps() {
        let svc = make_service();
        let created = svc
            .create_state(State::builder().name("Nevada"))
            .await
            .unwrap();

        let updated = svc
            .update_state(
                created.clone(),
                StatePatch {
                    name: Some("Arizona".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Arizona");
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.updated_at, created.updated_at);
    }

    #[tokio::test]
    async fn should_update_without_reloading_state() {
        let store = FakeStore::default();
        let svc = StateService::new(store.clone());
        let created = svc
            .create_state(State::builder().name("Utah"))
            .await
            .unwrap();
        let current = svc.get_state(created.id).await.unwrap();
        let lookups = store.lookups();

        svc.update_state(
            current,
            StatePatch {
                name: Some("Idaho".to_string()),
            },
        )
        .await
        .unwrap();

        assert_eq!(store.lookups(), lookups);
        assert_eq!(svc.get_state(created.id).await.unwrap().name, "Idaho");
    }

    #[tokio::test]
    async fn should_delete_state() {
        let svc = make_service();
        let created = svc
            .create_state(State::builder().name("Ohio"))
            .await
            .unwrap();

        svc.delete_state(created.id).await.unwrap();

        let result = svc.get_state(created.id).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_twice() {
        let svc = make_service();
        let created = svc
            .create_state(State::builder().name("Iowa"))
            .await
            .unwrap();
        svc.delete_state(created.id).await.unwrap();

        let result = svc.delete_state(created.id).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
    }
}
