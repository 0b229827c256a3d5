//! Input formatters and progressive masks.
//!
//! Masks are applied incrementally as characters arrive, not as a
//! final-value validator: literal separators are filled in
//! automatically once a later digit is placed, unfilled positions stay
//! blank, and surplus digits are dropped. Feeding `"119"` through the
//! phone mask yields `"(11) 9"`, never an error.

use chrono::NaiveDate;

use crate::constants::{CEP_DIGITS, DATA_BR_FORMAT, DATA_NASCIMENTO_MASK, TELEFONE_MASK};

/// Apply a fixed-pattern mask to the digits of `input`.
///
/// `#` in the pattern consumes the next digit; every other pattern
/// character is a literal. Literals are only emitted once a digit is
/// placed after them, so partial input never ends in a dangling
/// separator.
///
/// # Examples
///
/// ```
/// use clientes_core::formatters::apply_mask;
///
/// assert_eq!(apply_mask("(##) #####-####", "11"), "(11");
/// assert_eq!(apply_mask("(##) #####-####", "119"), "(11) 9");
/// assert_eq!(apply_mask("(##) #####-####", "11987654321"), "(11) 98765-4321");
/// ```
pub fn apply_mask(pattern: &str, input: &str) -> String {
    let mut digits = input.chars().filter(char::is_ascii_digit);
    let mut out = String::with_capacity(pattern.len());
    let mut pending = String::new();

    for p in pattern.chars() {
        if p == '#' {
            match digits.next() {
                Some(d) => {
                    out.push_str(&pending);
                    pending.clear();
                    out.push(d);
                }
                None => break,
            }
        } else {
            pending.push(p);
        }
    }

    out
}

/// Mask a phone number as `(NN) NNNNN-NNNN`, stripping any non-digit
/// input first.
pub fn mask_telefone(input: &str) -> String {
    apply_mask(TELEFONE_MASK, input)
}

/// Mask a free-text birth date as `NN/NN/NNNN`.
pub fn mask_data_nascimento(input: &str) -> String {
    apply_mask(DATA_NASCIMENTO_MASK, input)
}

/// Format an 8-digit CEP into the canonical display form `NNNNN-NNN`.
///
/// Input that does not contain exactly 8 digits is returned unchanged;
/// formatting is not a validator.
pub fn format_cep(cep: &str) -> String {
    let digits: String = cep.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != CEP_DIGITS {
        return cep.to_string();
    }
    format!("{}-{}", &digits[..5], &digits[5..])
}

/// Strip everything that is not an ASCII digit.
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Format a birth date for display (Brazilian `DD/MM/YYYY`).
pub fn format_data_br(data: NaiveDate) -> String {
    data.format(DATA_BR_FORMAT).to_string()
}
