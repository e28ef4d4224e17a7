//! Greeting service: use-cases for the greeting table.

use sandbox_domain::error::{NotFoundError, SandboxError};
use sandbox_domain::greeting::{Greeting, NewGreeting};

use crate::ports::GreetingRepository;

/// Application service for posting and reading greetings.
pub struct GreetingService<R> {
    repo: R,
}

impl<R: GreetingRepository> GreetingService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new greeting.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError::Validation`] when `message` is blank, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, message))]
    pub async fn post_greeting(&self, message: String) -> Result<Greeting, SandboxError> {
        let greeting = NewGreeting::new(message)?;
        self.repo.insert(greeting).await
    }

    /// Pick one stored greeting at random.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError::NotFound`] when no greeting has been stored,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn random_greeting(&self) -> Result<Greeting, SandboxError> {
        self.repo.random().await?.ok_or_else(|| {
            NotFoundError {
                entity: "Greeting",
                key: "random".to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandbox_domain::error::ValidationError;
    use sandbox_domain::id::GreetingId;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryGreetingRepo {
        store: Mutex<Vec<Greeting>>,
    }

    impl GreetingRepository for InMemoryGreetingRepo {
        fn insert(
            &self,
            greeting: NewGreeting,
        ) -> impl Future<Output = Result<Greeting, SandboxError>> + Send {
            let mut store = self.store.lock().unwrap();
            let id = GreetingId::from_raw(i64::try_from(store.len()).unwrap() + 1);
            let greeting = greeting.with_id(id);
            store.push(greeting.clone());
            async { Ok(greeting) }
        }

        fn random(&self) -> impl Future<Output = Result<Option<Greeting>, SandboxError>> + Send {
            let result = self.store.lock().unwrap().last().cloned();
            async { Ok(result) }
        }
    }

    fn make_service() -> GreetingService<InMemoryGreetingRepo> {
        GreetingService::new(InMemoryGreetingRepo::default())
    }

    #[tokio::test]
    async fn should_store_greeting_when_message_provided() {
        let svc = make_service();
        let created = svc.post_greeting("hello".to_string()).await.unwrap();
        assert_eq!(created.message, "hello");
        assert_eq!(created.id, GreetingId::from_raw(1));
    }

    #[tokio::test]
    async fn should_reject_blank_message() {
        let svc = make_service();
        let result = svc.post_greeting(String::new()).await;
        assert!(matches!(
            result,
            Err(SandboxError::Validation(ValidationError::EmptyField { field: "msg" }))
        ));
        assert!(svc.repo.store.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_no_greetings() {
        let svc = make_service();
        let result = svc.random_greeting().await;
        assert!(matches!(result, Err(SandboxError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_stored_greeting() {
        let svc = make_service();
        svc.post_greeting("hi there".to_string()).await.unwrap();
        let greeting = svc.random_greeting().await.unwrap();
        assert_eq!(greeting.message, "hi there");
    }
}
