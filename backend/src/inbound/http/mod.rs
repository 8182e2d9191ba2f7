//! HTTP inbound adapter.
//!
//! Page endpoints answer with [`view::ViewModel`] JSON; survey endpoints with
//! the [`envelope::ResponseDto`] wrapper. Handlers only see the driving ports
//! bundled in [`state::HttpState`].

pub mod envelope;
pub mod error;
pub mod health;
pub mod pages;
pub mod session;
pub mod state;
pub mod surveys;
#[cfg(test)]
pub mod test_utils;
pub mod validation;
pub mod view;

pub use error::ApiResult;
