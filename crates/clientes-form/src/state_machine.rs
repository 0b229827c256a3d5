//! Registration form state machine.
//!
//! This module drives the two-step wizard that collects a customer
//! record: personal data first, then the address.
//!
//! # States
//!
//! - `PersonalInfo`: name, surname, email, phone and birth date
//! - `AddressInfo`: CEP plus the resolved/typed address fields
//!
//! # Transitions
//!
//! - `PersonalInfo` → `AddressInfo` only through [`ClienteForm::advance_step`],
//!   gated by step-one validation
//! - `AddressInfo` → `PersonalInfo` unconditionally through
//!   [`ClienteForm::retreat_step`]
//! - a successful [`ClienteForm::submit`] clears the draft and resets
//!   the step; there is no terminal state
//!
//! # Examples
//!
//! ```
//! use clientes_form::{ClienteForm, FormStep, PersonalField};
//!
//! let mut form = ClienteForm::new();
//! assert_eq!(form.step(), FormStep::PersonalInfo);
//!
//! form.update_field(PersonalField::Nome, "Ana");
//! // Step one is incomplete, so the gate holds.
//! assert!(!form.advance_step());
//! assert_eq!(form.step(), FormStep::PersonalInfo);
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use clientes_cep::{CepError, CepResolver};
use clientes_core::constants::{CEP_DIGITS, FEEDBACK_CLEAR_DELAY};
use clientes_core::formatters::{format_cep, mask_data_nascimento, mask_telefone, strip_non_digits};
use clientes_core::validators::{is_valid_data_nascimento, is_valid_email, is_valid_telefone};
use clientes_core::{Cliente, Error};

use crate::draft::ClienteDraft;
use crate::messages::Mensagens;
use crate::validation::{StepOneErrors, validate_step_one};

/// The two steps of the registration wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStep {
    /// Collecting name, surname, email, phone and birth date.
    PersonalInfo,

    /// Collecting CEP and address fields.
    AddressInfo,
}

impl fmt::Display for FormStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            FormStep::PersonalInfo => "PersonalInfo",
            FormStep::AddressInfo => "AddressInfo",
        };
        write!(f, "{}", step)
    }
}

/// Top-level scalar fields editable through [`ClienteForm::update_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Nome,
    Sobrenome,
    Email,
    Telefone,
    DataNascimento,
}

/// Address fields editable through [`ClienteForm::update_endereco_field`].
///
/// The CEP is deliberately absent: it has its own operation,
/// [`ClienteForm::update_cep`], because editing it can trigger a
/// lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnderecoField {
    Logradouro,
    Bairro,
    Estado,
    Localidade,
    Complemento,
}

/// A transient status message set by the form.
///
/// Feedback expires [`FEEDBACK_CLEAR_DELAY`] after it was set, or
/// immediately when superseded by a newer message.
#[derive(Debug, Clone)]
pub struct Feedback {
    message: String,
    is_error: bool,
    set_at: Instant,
}

impl Feedback {
    fn new(message: String, is_error: bool) -> Self {
        Self {
            message,
            is_error,
            set_at: Instant::now(),
        }
    }

    /// The message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this is an error (as opposed to a success notice).
    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Whether the display window has elapsed.
    pub fn is_expired(&self) -> bool {
        self.set_at.elapsed() >= FEEDBACK_CLEAR_DELAY
    }

    /// Remaining display time, `None` once expired.
    pub fn time_remaining(&self) -> Option<Duration> {
        FEEDBACK_CLEAR_DELAY.checked_sub(self.set_at.elapsed())
    }
}

/// The two-step registration form.
///
/// Owns the draft, the current step, the step-one error map and the
/// transient feedback message. Persistence is not its concern: a
/// successful [`submit`](ClienteForm::submit) hands the completed
/// [`Cliente`] back to the caller, which forwards it to the store.
///
/// # Thread Safety
///
/// This struct is not thread-safe by design. In async contexts,
/// protect access using `tokio::sync::Mutex` or similar.
#[derive(Debug)]
pub struct ClienteForm {
    step: FormStep,
    draft: ClienteDraft,
    errors: StepOneErrors,
    errors_visible: bool,
    feedback: Option<Feedback>,
}

impl ClienteForm {
    /// Create a form for a new customer: empty draft, identity `0`,
    /// step [`FormStep::PersonalInfo`].
    pub fn new() -> Self {
        Self {
            step: FormStep::PersonalInfo,
            draft: ClienteDraft::new(),
            errors: StepOneErrors::default(),
            errors_visible: false,
            feedback: None,
        }
    }

    /// Create a form editing an existing record.
    ///
    /// The draft is initialized from the record (identity preserved)
    /// and the wizard starts over at the first step.
    pub fn edit(cliente: &Cliente) -> Self {
        Self {
            step: FormStep::PersonalInfo,
            draft: ClienteDraft::from_cliente(cliente),
            errors: StepOneErrors::default(),
            errors_visible: false,
            feedback: None,
        }
    }

    /// The current wizard step.
    pub fn step(&self) -> FormStep {
        self.step
    }

    /// The current draft.
    pub fn draft(&self) -> &ClienteDraft {
        &self.draft
    }

    /// The step-one error map as last computed by
    /// [`advance_step`](ClienteForm::advance_step).
    pub fn errors(&self) -> &StepOneErrors {
        &self.errors
    }

    /// Whether field errors should currently be rendered.
    pub fn errors_visible(&self) -> bool {
        self.errors_visible
    }

    /// The current feedback message, if one is set and still within
    /// its display window.
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref().filter(|f| !f.is_expired())
    }

    /// Apply a raw edit to a top-level scalar field of the draft.
    ///
    /// Phone and birth-date input is re-masked on every keystroke
    /// (progressive masking); the other fields store the value as
    /// typed. This operation never fails and raises no errors.
    pub fn update_field(&mut self, field: PersonalField, value: &str) {
        match field {
            PersonalField::Nome => self.draft.nome = value.to_string(),
            PersonalField::Sobrenome => self.draft.sobrenome = value.to_string(),
            PersonalField::Email => self.draft.email = value.to_string(),
            PersonalField::Telefone => self.draft.telefone = mask_telefone(value),
            PersonalField::DataNascimento => {
                self.draft.data_nascimento = mask_data_nascimento(value);
            }
        }
    }

    /// Apply a raw edit to a nested address field, leaving the other
    /// address fields and all top-level fields untouched.
    pub fn update_endereco_field(&mut self, field: EnderecoField, value: &str) {
        let endereco = &mut self.draft.endereco;
        match field {
            EnderecoField::Logradouro => endereco.logradouro = value.to_string(),
            EnderecoField::Bairro => endereco.bairro = value.to_string(),
            EnderecoField::Estado => endereco.estado = value.to_string(),
            EnderecoField::Localidade => endereco.localidade = value.to_string(),
            EnderecoField::Complemento => endereco.complemento = value.to_string(),
        }
    }

    /// Handle a CEP keystroke.
    ///
    /// The digit-only value is stored immediately so the field always
    /// reflects what was typed. Once exactly 8 digits have
    /// accumulated, the resolver is consulted:
    ///
    /// - on success the address fields (street, neighborhood, state,
    ///   locality) are overwritten from the response and the CEP is
    ///   reformatted to `NNNNN-NNN`;
    /// - on not-found a warning is raised and the draft is left as is;
    /// - on transport failure a warning is raised and the CEP keeps
    ///   the raw digit string.
    pub async fn update_cep<C: CepResolver>(&mut self, raw: &str, resolver: &C) {
        let digits = strip_non_digits(raw);
        self.draft.endereco.cep = digits.clone();

        if digits.len() != CEP_DIGITS {
            return;
        }

        match resolver.resolve(&digits).await {
            Ok(endereco) => {
                let destino = &mut self.draft.endereco;
                destino.logradouro = endereco.logradouro;
                destino.bairro = endereco.bairro;
                destino.estado = endereco.estado;
                destino.localidade = endereco.localidade;
                destino.cep = format_cep(&digits);
            }
            Err(CepError::NotFound(_)) => {
                self.set_feedback(Error::InvalidCep.to_string(), true);
            }
            Err(CepError::Transport(_)) => {
                self.set_feedback(Mensagens::ERRO_BUSCA_CEP.to_string(), true);
            }
        }
    }

    /// Validate the personal-info step without mutating the form.
    pub fn validate_step_one(&self) -> StepOneErrors {
        validate_step_one(&self.draft)
    }

    /// Attempt the only forward transition.
    ///
    /// When step one validates, errors are cleared and the wizard
    /// moves to [`FormStep::AddressInfo`]; otherwise the error map is
    /// stored, marked visible, and the step does not change.
    ///
    /// Returns whether the transition happened.
    pub fn advance_step(&mut self) -> bool {
        let errors = self.validate_step_one();
        if errors.is_valid() {
            self.errors = StepOneErrors::default();
            self.errors_visible = false;
            self.step = FormStep::AddressInfo;
            true
        } else {
            self.errors = errors;
            self.errors_visible = true;
            false
        }
    }

    /// Go back to the personal-info step. Unconditional, no
    /// validation, the draft is kept.
    pub fn retreat_step(&mut self) {
        self.step = FormStep::PersonalInfo;
    }

    /// Submit the form.
    ///
    /// Email, phone and birth date are re-validated in that order; the
    /// first failure raises the corresponding error feedback and
    /// aborts. On success the completed record is returned (this is
    /// the completion-callback value to hand to the store), a success
    /// message is raised, the draft is cleared and the wizard resets
    /// to the first step.
    pub fn submit(&mut self) -> Option<Cliente> {
        if !is_valid_email(&self.draft.email) {
            self.set_feedback(Error::InvalidEmail.to_string(), true);
            return None;
        }
        if !is_valid_telefone(&self.draft.telefone) {
            self.set_feedback(Error::InvalidTelefone.to_string(), true);
            return None;
        }
        if !is_valid_data_nascimento(&self.draft.data_nascimento) {
            self.set_feedback(Error::InvalidDataNascimento.to_string(), true);
            return None;
        }

        // The date was just validated, so the conversion cannot fail;
        // propagate the message anyway rather than assuming.
        let cliente = match self.draft.to_cliente() {
            Ok(cliente) => cliente,
            Err(e) => {
                self.set_feedback(e.to_string(), true);
                return None;
            }
        };

        self.set_feedback(Mensagens::CLIENTE_SALVO.to_string(), false);
        self.draft = ClienteDraft::new();
        self.errors = StepOneErrors::default();
        self.errors_visible = false;
        self.step = FormStep::PersonalInfo;

        Some(cliente)
    }

    /// Set the feedback message, superseding any previous one.
    fn set_feedback(&mut self, message: String, is_error: bool) {
        self.feedback = Some(Feedback::new(message, is_error));
    }
}

impl Default for ClienteForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clientes_cep::MockCepResolver;
    use clientes_core::Endereco;

    fn fill_step_one(form: &mut ClienteForm) {
        form.update_field(PersonalField::Nome, "Ana");
        form.update_field(PersonalField::Sobrenome, "Souza");
        form.update_field(PersonalField::Email, "ana@example.com");
        form.update_field(PersonalField::Telefone, "11912345678");
        form.update_field(PersonalField::DataNascimento, "15051990");
    }

    fn praca_da_se() -> Endereco {
        Endereco {
            cep: "01001-000".to_string(),
            logradouro: "Praça da Sé".to_string(),
            bairro: "Sé".to_string(),
            estado: "SP".to_string(),
            localidade: "São Paulo".to_string(),
            complemento: String::new(),
        }
    }

    #[test]
    fn test_new_form_starts_on_personal_info() {
        let form = ClienteForm::new();
        assert_eq!(form.step(), FormStep::PersonalInfo);
        assert_eq!(form.draft().id, 0);
        assert!(form.feedback().is_none());
        assert!(!form.errors_visible());
    }

    #[test]
    fn test_update_field_masks_telefone_progressively() {
        let mut form = ClienteForm::new();
        for d in "11987654321".chars() {
            let typed = format!("{}{}", form.draft().telefone, d);
            form.update_field(PersonalField::Telefone, &typed);
        }
        assert_eq!(form.draft().telefone, "(11) 98765-4321");
    }

    #[test]
    fn test_update_field_masks_data_nascimento() {
        let mut form = ClienteForm::new();
        form.update_field(PersonalField::DataNascimento, "15051990");
        assert_eq!(form.draft().data_nascimento, "15/05/1990");
    }

    #[test]
    fn test_update_field_stores_plain_fields_verbatim() {
        let mut form = ClienteForm::new();
        form.update_field(PersonalField::Nome, "Ana Maria");
        form.update_field(PersonalField::Email, "not an email yet");
        assert_eq!(form.draft().nome, "Ana Maria");
        assert_eq!(form.draft().email, "not an email yet");
    }

    #[test]
    fn test_update_endereco_field_touches_only_that_field() {
        let mut form = ClienteForm::new();
        form.update_endereco_field(EnderecoField::Bairro, "Centro");
        assert_eq!(form.draft().endereco.bairro, "Centro");
        assert_eq!(form.draft().endereco.logradouro, "");
        assert_eq!(form.draft().nome, "");
    }

    #[test]
    fn test_advance_step_blocks_on_invalid_step_one() {
        let mut form = ClienteForm::new();
        assert!(!form.advance_step());
        assert_eq!(form.step(), FormStep::PersonalInfo);
        assert!(form.errors_visible());
        assert!(!form.errors().is_valid());
    }

    #[test]
    fn test_advance_step_moves_to_address_info_when_valid() {
        let mut form = ClienteForm::new();
        fill_step_one(&mut form);

        assert!(form.advance_step());
        assert_eq!(form.step(), FormStep::AddressInfo);
        assert!(!form.errors_visible());
        assert!(form.errors().is_valid());
    }

    #[test]
    fn test_retreat_step_is_unconditional_and_keeps_draft() {
        let mut form = ClienteForm::new();
        fill_step_one(&mut form);
        form.advance_step();
        form.update_endereco_field(EnderecoField::Logradouro, "Rua A");

        form.retreat_step();
        assert_eq!(form.step(), FormStep::PersonalInfo);
        assert_eq!(form.draft().endereco.logradouro, "Rua A");
        assert_eq!(form.draft().nome, "Ana");
    }

    #[tokio::test]
    async fn test_update_cep_stores_raw_digits_before_lookup() {
        let resolver = MockCepResolver::new();
        let mut form = ClienteForm::new();

        form.update_cep("01001", &resolver).await;
        assert_eq!(form.draft().endereco.cep, "01001");
        // Short input never triggers a lookup, so no warning either.
        assert!(form.feedback().is_none());
    }

    #[tokio::test]
    async fn test_update_cep_fills_address_on_success() {
        let resolver = MockCepResolver::new().with_endereco("01001000", praca_da_se());
        let mut form = ClienteForm::new();

        form.update_cep("01001-000", &resolver).await;

        let endereco = &form.draft().endereco;
        assert_eq!(endereco.cep, "01001-000");
        assert_eq!(endereco.logradouro, "Praça da Sé");
        assert_eq!(endereco.bairro, "Sé");
        assert_eq!(endereco.estado, "SP");
        assert_eq!(endereco.localidade, "São Paulo");
        assert!(form.feedback().is_none());
    }

    #[tokio::test]
    async fn test_update_cep_success_keeps_complemento() {
        let resolver = MockCepResolver::new().with_endereco("01001000", praca_da_se());
        let mut form = ClienteForm::new();
        form.update_endereco_field(EnderecoField::Complemento, "apto 42");

        form.update_cep("01001000", &resolver).await;
        assert_eq!(form.draft().endereco.complemento, "apto 42");
    }

    #[tokio::test]
    async fn test_update_cep_not_found_warns_without_mutating() {
        let resolver = MockCepResolver::new();
        let mut form = ClienteForm::new();

        form.update_cep("99999999", &resolver).await;

        assert_eq!(form.draft().endereco.cep, "99999999");
        assert_eq!(form.draft().endereco.logradouro, "");
        let feedback = form.feedback().expect("warning expected");
        assert!(feedback.is_error());
        assert_eq!(feedback.message(), "CEP inválido");
    }

    #[tokio::test]
    async fn test_update_cep_transport_failure_keeps_raw_digits() {
        let resolver = MockCepResolver::failing();
        let mut form = ClienteForm::new();

        form.update_cep("01001000", &resolver).await;

        assert_eq!(form.draft().endereco.cep, "01001000");
        let feedback = form.feedback().expect("warning expected");
        assert!(feedback.is_error());
        assert_eq!(feedback.message(), Mensagens::ERRO_BUSCA_CEP);
    }

    #[test]
    fn test_submit_rejects_invalid_email_first() {
        let mut form = ClienteForm::new();
        fill_step_one(&mut form);
        form.update_field(PersonalField::Email, "a@b");
        // Phone is also broken, but email is reported first.
        form.update_field(PersonalField::Telefone, "123");

        assert!(form.submit().is_none());
        let feedback = form.feedback().expect("error expected");
        assert_eq!(feedback.message(), "Email inválido!");
        assert!(feedback.is_error());
    }

    #[test]
    fn test_submit_rejects_invalid_telefone() {
        let mut form = ClienteForm::new();
        fill_step_one(&mut form);
        form.draft.telefone = "11912345678".to_string();

        assert!(form.submit().is_none());
        assert_eq!(
            form.feedback().unwrap().message(),
            "Telefone inválido! Formato esperado: (XX) XXXXX-XXXX"
        );
    }

    #[test]
    fn test_submit_rejects_future_birth_date() {
        let mut form = ClienteForm::new();
        fill_step_one(&mut form);
        form.draft.data_nascimento = "15/05/2990".to_string();

        assert!(form.submit().is_none());
        assert_eq!(
            form.feedback().unwrap().message(),
            "Data de nascimento inválida!"
        );
    }

    #[test]
    fn test_submit_returns_record_and_resets() {
        let mut form = ClienteForm::new();
        fill_step_one(&mut form);
        form.advance_step();
        form.update_endereco_field(EnderecoField::Logradouro, "Rua A, 123");

        let cliente = form.submit().expect("valid draft must submit");
        assert_eq!(cliente.id, 0);
        assert_eq!(cliente.nome, "Ana");
        assert_eq!(cliente.telefone, "(11) 91234-5678");
        assert_eq!(
            cliente.data_nascimento,
            NaiveDate::from_ymd_opt(1990, 5, 15).unwrap()
        );
        assert_eq!(cliente.endereco.logradouro, "Rua A, 123");

        // Form is back at a pristine first step.
        assert_eq!(form.step(), FormStep::PersonalInfo);
        assert_eq!(form.draft(), &ClienteDraft::new());
        let feedback = form.feedback().expect("success message expected");
        assert!(!feedback.is_error());
        assert_eq!(feedback.message(), Mensagens::CLIENTE_SALVO);
    }

    #[test]
    fn test_edit_preserves_identity_through_submit() {
        let cliente = Cliente {
            id: 3,
            nome: "Ana".to_string(),
            sobrenome: "Souza".to_string(),
            email: "ana@example.com".to_string(),
            data_nascimento: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            telefone: "(11) 91234-5678".to_string(),
            endereco: Endereco::default(),
        };

        let mut form = ClienteForm::edit(&cliente);
        assert_eq!(form.step(), FormStep::PersonalInfo);
        assert_eq!(form.draft().id, 3);
        assert_eq!(form.draft().data_nascimento, "15/05/1990");

        form.update_field(PersonalField::Nome, "Ana Maria");
        let updated = form.submit().expect("valid edit must submit");
        assert_eq!(updated.id, 3);
        assert_eq!(updated.nome, "Ana Maria");
    }

    #[test]
    fn test_feedback_expires_after_display_window() {
        let mut form = ClienteForm::new();
        form.set_feedback("mensagem".to_string(), false);
        assert!(form.feedback().is_some());

        // Backdate the message past the display window.
        if let Some(feedback) = form.feedback.as_mut() {
            feedback.set_at = Instant::now() - FEEDBACK_CLEAR_DELAY;
        }
        assert!(form.feedback().is_none());
    }

    #[test]
    fn test_feedback_is_superseded_by_newer_message() {
        let mut form = ClienteForm::new();
        form.set_feedback("primeira".to_string(), true);
        form.set_feedback("segunda".to_string(), false);

        let feedback = form.feedback().unwrap();
        assert_eq!(feedback.message(), "segunda");
        assert!(!feedback.is_error());
    }

    #[test]
    fn test_feedback_time_remaining_counts_down() {
        let feedback = Feedback::new("mensagem".to_string(), false);
        assert!(!feedback.is_expired());
        assert!(feedback.time_remaining().is_some());
        assert!(feedback.time_remaining().unwrap() <= FEEDBACK_CLEAR_DELAY);
    }

    #[test]
    fn test_form_step_serialization() {
        assert_eq!(
            serde_json::to_string(&FormStep::PersonalInfo).unwrap(),
            "\"personal_info\""
        );
        let step: FormStep = serde_json::from_str("\"address_info\"").unwrap();
        assert_eq!(step, FormStep::AddressInfo);
    }
}
