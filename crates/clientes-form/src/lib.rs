//! Two-step customer registration form.
//!
//! This crate implements the wizard that collects a customer record:
//! personal data first (name, email, phone, birth date), then the
//! address, with CEP live-fill through a [`clientes_cep::CepResolver`].
//! It owns transient draft state only; persistence belongs to the
//! store.
//!
//! The public entry point is [`ClienteForm`]; see its documentation
//! for the step/validation flow.

pub mod draft;
pub mod messages;
pub mod state_machine;
pub mod validation;

pub use draft::ClienteDraft;
pub use messages::Mensagens;
pub use state_machine::{ClienteForm, EnderecoField, Feedback, FormStep, PersonalField};
pub use validation::{StepOneErrors, validate_step_one};
