//! Core domain types for the customer registration system.
//!
//! This crate defines the shared vocabulary of the workspace: the
//! [`Cliente`] record and its embedded [`Endereco`], the field
//! validators used by both the form and the store, and the input
//! formatters (progressive masks) applied while the user types.
//!
//! Everything here is synchronous and side-effect free; async
//! collaborators (CEP lookup, persistence, HTTP) live in the other
//! workspace crates.

pub mod constants;
pub mod error;
pub mod formatters;
pub mod types;
pub mod validators;

pub use error::{Error, Result};
pub use types::{Cliente, Endereco};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
