//! Shared handler state, one type per service.
//!
//! Each state is generic over its repository type. `Clone` is implemented
//! manually: only the `Arc` wrapper is cloned per request, the repository
//! itself never needs to be `Clone`.

use std::sync::Arc;

use sandbox_app::ports::{CounterRepository, GreetingRepository, UserRepository};
use sandbox_app::services::counter_service::CounterService;
use sandbox_app::services::greeting_service::GreetingService;
use sandbox_app::services::user_service::UserService;

macro_rules! define_state {
    ($(#[doc = $doc:expr])* $name:ident, $service:ident, $port:ident) => {
        $(#[doc = $doc])*
        pub struct $name<R> {
            pub service: Arc<$service<R>>,
        }

        impl<R> Clone for $name<R> {
            fn clone(&self) -> Self {
                Self {
                    service: Arc::clone(&self.service),
                }
            }
        }

        impl<R> $name<R>
        where
            R: $port + Send + Sync + 'static,
        {
            /// Wrap a service instance.
            pub fn new(service: $service<R>) -> Self {
                Self {
                    service: Arc::new(service),
                }
            }
        }
    };
}

define_state!(
    /// State of the counter service router.
    CounterState,
    CounterService,
    CounterRepository
);

define_state!(
    /// State of the greeting service router.
    GreetingState,
    GreetingService,
    GreetingRepository
);

define_state!(
    /// State of the users service router.
    UserState,
    UserService,
    UserRepository
);
