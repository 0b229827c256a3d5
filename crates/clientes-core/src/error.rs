use thiserror::Error;

/// Domain-level errors shared across the workspace.
///
/// The `Display` strings double as the user-facing messages of the
/// form (Portuguese, matching the messages shown to operators).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Email inválido!")]
    InvalidEmail,

    #[error("Telefone inválido! Formato esperado: (XX) XXXXX-XXXX")]
    InvalidTelefone,

    #[error("Data de nascimento inválida!")]
    InvalidDataNascimento,

    #[error("CEP inválido")]
    InvalidCep,
}

pub type Result<T> = std::result::Result<T, Error>;
