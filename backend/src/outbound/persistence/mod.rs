//! In-memory persistence adapters.
//!
//! Each repository implements one domain port over a shared [`MemoryStore`].
//! Adapters only translate between stored rows and domain types; referential
//! checks live in the domain services.
//!
//! # Example
//!
//! ```
//! use assessme::outbound::persistence::{InMemoryUserRepository, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let users = InMemoryUserRepository::new(store.clone());
//! # let _ = users;
//! ```

mod memory_course_repository;
mod memory_question_repository;
mod memory_survey_repository;
mod memory_user_repository;
mod store;
mod store_error_mapping;

pub use memory_course_repository::InMemoryCourseRepository;
pub use memory_question_repository::InMemoryQuestionRepository;
pub use memory_survey_repository::InMemorySurveyRepository;
pub use memory_user_repository::InMemoryUserRepository;
pub use store::{MemoryStore, StoreError};
