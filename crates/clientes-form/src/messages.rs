//! User-facing feedback messages (Portuguese/Brazilian).
//!
//! Field-format messages live on [`clientes_core::Error`], whose
//! `Display` strings are shown verbatim to the user. This module holds
//! the remaining form-level messages.

/// Feedback messages shown by the registration form.
pub struct Mensagens;

impl Mensagens {
    /// A required field was left empty.
    pub const CAMPO_OBRIGATORIO: &'static str = "Campo obrigatório";

    /// The CEP lookup service could not be reached.
    pub const ERRO_BUSCA_CEP: &'static str = "Erro ao buscar informações do CEP";

    /// The record was accepted for saving.
    pub const CLIENTE_SALVO: &'static str = "Cliente salvo com sucesso!";
}
