//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: in-memory repositories sharing one `MemoryStore`
//!
//! Adapters are thin translators between stored rows and domain types. They
//! contain no business logic.

pub mod persistence;
