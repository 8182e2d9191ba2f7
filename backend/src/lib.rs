//! AssessMe backend library.
//!
//! Layers, innermost first: [`domain`] (entities, ports and services),
//! [`outbound`] (repository adapters), [`inbound`] (HTTP handlers) and
//! [`middleware`].

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
