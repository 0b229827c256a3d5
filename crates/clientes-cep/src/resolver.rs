//! The CEP resolution contract.
//!
//! Uses native `async fn` in traits (Edition 2024 RPITIT), so no
//! `async_trait` macro is needed.

#![allow(async_fn_in_trait)]

use clientes_core::Endereco;
use thiserror::Error;

/// Failures of a CEP lookup.
///
/// `NotFound` means the service answered and the code does not exist;
/// `Transport` covers everything that kept the service from answering
/// (network failure, non-success status, malformed body). Callers
/// treat the two differently: not-found warns the user without
/// touching the draft, transport failure leaves the raw digits behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CepError {
    #[error("CEP não encontrado: {0}")]
    NotFound(String),

    #[error("Erro ao buscar endereço: {0}")]
    Transport(String),
}

pub type CepResult<T> = std::result::Result<T, CepError>;

/// Maps an 8-digit CEP to a structured address.
///
/// `cep` is the digit-only form (`"01001000"`); the resolved
/// [`Endereco`] carries the canonical dashed form (`"01001-000"`).
/// Missing fields in the upstream response come back as empty strings.
pub trait CepResolver: Send + Sync {
    async fn resolve(&self, cep: &str) -> CepResult<Endereco>;
}
