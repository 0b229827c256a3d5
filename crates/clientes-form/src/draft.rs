//! The in-progress customer draft.

use clientes_core::formatters::format_data_br;
use clientes_core::validators::parse_data_nascimento;
use clientes_core::{Cliente, Endereco, Error, Result};

/// The in-progress, not-yet-persisted customer record held by the
/// form.
///
/// Every field is kept as display text while editing; in particular
/// the birth date holds whatever the progressive mask has produced so
/// far (`"15/05/19"` is a perfectly fine draft value). `id` is `0`
/// for a new customer and the preserved identity when editing an
/// existing record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClienteDraft {
    pub id: i64,
    pub nome: String,
    pub sobrenome: String,
    pub email: String,
    pub data_nascimento: String,
    pub telefone: String,
    pub endereco: Endereco,
}

impl ClienteDraft {
    /// An empty draft for a new customer (identity `0`, all fields
    /// blank).
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize an edit draft from an existing record.
    ///
    /// Identity and all fields are copied; the birth date is rendered
    /// in the display format (`DD/MM/YYYY`) so the masked input shows
    /// it as the user would have typed it.
    pub fn from_cliente(cliente: &Cliente) -> Self {
        Self {
            id: cliente.id,
            nome: cliente.nome.clone(),
            sobrenome: cliente.sobrenome.clone(),
            email: cliente.email.clone(),
            data_nascimento: format_data_br(cliente.data_nascimento),
            telefone: cliente.telefone.clone(),
            endereco: cliente.endereco.clone(),
        }
    }

    /// Convert the draft into a record, canonicalizing the birth date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDataNascimento`] when the birth date
    /// text does not denote a real calendar date in either the ISO or
    /// the masked `DD/MM/YYYY` form.
    pub fn to_cliente(&self) -> Result<Cliente> {
        let data_nascimento =
            parse_data_nascimento(&self.data_nascimento).ok_or(Error::InvalidDataNascimento)?;

        Ok(Cliente {
            id: self.id,
            nome: self.nome.clone(),
            sobrenome: self.sobrenome.clone(),
            email: self.email.clone(),
            data_nascimento,
            telefone: self.telefone.clone(),
            endereco: self.endereco.clone(),
        })
    }
}
