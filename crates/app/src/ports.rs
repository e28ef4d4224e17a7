//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod counter_repo;
pub mod greeting_repo;
pub mod user_repo;

pub use counter_repo::CounterRepository;
pub use greeting_repo::GreetingRepository;
pub use user_repo::UserRepository;
