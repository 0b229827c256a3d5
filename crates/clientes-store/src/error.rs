use clientes_cep::CepError;
use thiserror::Error;

/// Failures of the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record carries the targeted identity.
    #[error("Cliente não encontrado: id={0}")]
    NotFound(i64),

    /// A creation payload arrived without a CEP in the canonical
    /// 9-character dashed form.
    #[error("CEP inválido")]
    InvalidCep,

    /// The server-side address enrichment failed; creation is aborted.
    #[error("Erro ao buscar o endereço: {0}")]
    Enrichment(#[from] CepError),

    /// The backing file could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file holds something that is not a record array.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
