//! CEP (postal code) resolution for the customer registration system.
//!
//! The original system resolved addresses in two independent places:
//! live-fill while the user typed the CEP, and server-side enrichment
//! when a record was created. Both paths now consume the single
//! [`CepResolver`] trait defined here.
//!
//! Two implementations are provided:
//!
//! - [`ViaCepClient`] - HTTP client for the public ViaCEP service
//! - [`MockCepResolver`] - programmable in-memory resolver for tests
//!   and development, no network required

pub mod mock;
pub mod resolver;
pub mod viacep;

pub use mock::MockCepResolver;
pub use resolver::{CepError, CepResolver, CepResult};
pub use viacep::ViaCepClient;
