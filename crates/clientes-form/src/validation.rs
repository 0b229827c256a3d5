//! Step-one validation of the registration form.

use clientes_core::Error;
use clientes_core::validators::{is_valid_data_nascimento, is_valid_email, is_valid_telefone};

use crate::draft::ClienteDraft;
use crate::messages::Mensagens;

/// Validation outcome of the personal-info step, one optional message
/// per validated attribute (`None` means the field is valid).
///
/// A field left empty carries the required-field message; a field that
/// is present but malformed carries its specific format message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepOneErrors {
    pub nome: Option<String>,
    pub sobrenome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub data_nascimento: Option<String>,
}

impl StepOneErrors {
    /// True when every field passed validation.
    pub fn is_valid(&self) -> bool {
        self.nome.is_none()
            && self.sobrenome.is_none()
            && self.email.is_none()
            && self.telefone.is_none()
            && self.data_nascimento.is_none()
    }
}

/// Validate the personal-info step of a draft.
///
/// Pure function: the draft is not mutated and no state machine is
/// involved, so it can be called to pre-render errors without
/// committing to a step transition.
pub fn validate_step_one(draft: &ClienteDraft) -> StepOneErrors {
    let mut errors = StepOneErrors::default();

    if draft.nome.is_empty() {
        errors.nome = Some(Mensagens::CAMPO_OBRIGATORIO.to_string());
    }
    if draft.sobrenome.is_empty() {
        errors.sobrenome = Some(Mensagens::CAMPO_OBRIGATORIO.to_string());
    }

    if draft.email.is_empty() {
        errors.email = Some(Mensagens::CAMPO_OBRIGATORIO.to_string());
    } else if !is_valid_email(&draft.email) {
        errors.email = Some(Error::InvalidEmail.to_string());
    }

    if draft.telefone.is_empty() {
        errors.telefone = Some(Mensagens::CAMPO_OBRIGATORIO.to_string());
    } else if !is_valid_telefone(&draft.telefone) {
        errors.telefone = Some(Error::InvalidTelefone.to_string());
    }

    if draft.data_nascimento.is_empty() {
        errors.data_nascimento = Some(Mensagens::CAMPO_OBRIGATORIO.to_string());
    } else if !is_valid_data_nascimento(&draft.data_nascimento) {
        errors.data_nascimento = Some(Error::InvalidDataNascimento.to_string());
    }

    errors
}
