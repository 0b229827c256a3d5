//! Shared constants for customer registration.
//!
//! Input masks use `#` as the digit placeholder; every other character
//! is a literal filled in automatically as digits accumulate (see
//! [`crate::formatters::apply_mask`]).

use std::time::Duration;

/// Number of digits in a raw CEP (postal code) as typed by the user.
pub const CEP_DIGITS: usize = 8;

/// Length of a CEP in canonical display form (`NNNNN-NNN`).
pub const CEP_FORMATTED_LEN: usize = 9;

/// Progressive input mask for mobile phone numbers: `(NN) NNNNN-NNNN`.
pub const TELEFONE_MASK: &str = "(##) #####-####";

/// Progressive input mask for birth dates typed as free text: `NN/NN/NNNN`.
pub const DATA_NASCIMENTO_MASK: &str = "##/##/####";

/// Display format for birth dates (Brazilian convention).
pub const DATA_BR_FORMAT: &str = "%d/%m/%Y";

/// Canonical wire format for birth dates (ISO 8601 date).
pub const DATA_ISO_FORMAT: &str = "%Y-%m-%d";

/// How long a transient feedback message stays visible before it is
/// cleared automatically, unless superseded first.
pub const FEEDBACK_CLEAR_DELAY: Duration = Duration::from_secs(3);

/// Identity assigned to the first record created in an empty store.
pub const FIRST_ID: i64 = 1;
