//! Field validation for customer registration.
//!
//! Validation here is format validation only: email shape, the fixed
//! Brazilian mobile phone layout, the dashed CEP display form, and
//! birth dates that must be real calendar dates in the past. Anything
//! beyond simple format checks is out of scope by design.
//!
//! # Accepted birth date formats
//!
//! The canonical wire format is ISO `YYYY-MM-DD`. Because the form
//! masks free-text input as `DD/MM/YYYY`, both formats are accepted on
//! input; [`parse_data_nascimento`] canonicalizes either into a
//! [`NaiveDate`].

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::constants::{DATA_BR_FORMAT, DATA_ISO_FORMAT};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$").expect("email regex")
});

static TELEFONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{2}\) \d{5}-\d{4}$").expect("telefone regex"));

static CEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}-\d{3}$").expect("cep regex"));

/// Check that an email has the basic `local@domain.tld` shape
/// (alphanumerics plus `.`/`_`/`-`, TLD of 2-6 letters).
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check that a phone number is exactly in the display form
/// `(NN) NNNNN-NNNN`. Raw digit strings do not pass.
pub fn is_valid_telefone(telefone: &str) -> bool {
    TELEFONE_RE.is_match(telefone)
}

/// Check that a CEP is in the canonical 9-character dashed form
/// `NNNNN-NNN`.
pub fn is_valid_cep(cep: &str) -> bool {
    CEP_RE.is_match(cep)
}

/// Parse a birth date from either the canonical ISO form
/// (`YYYY-MM-DD`) or the masked display form (`DD/MM/YYYY`).
///
/// Returns `None` when the text does not denote a real calendar date
/// in either format (for example `31/02/2000`).
pub fn parse_data_nascimento(data: &str) -> Option<NaiveDate> {
    // Both accepted forms are exactly 10 characters. Without this
    // guard chrono would read a short year, turning the partial input
    // "20/08/19" into the year 19.
    if data.len() != 10 {
        return None;
    }

    NaiveDate::parse_from_str(data, DATA_ISO_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(data, DATA_BR_FORMAT))
        .ok()
}

/// Check that a birth date parses and lies strictly before today.
pub fn is_valid_data_nascimento(data: &str) -> bool {
    parse_data_nascimento(data).is_some_and(|d| d < Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.co", true)]
    #[case("joao.silva@example.com", true)]
    #[case("maria_oliveira@sub.dominio.com.br", true)]
    #[case("a@b", false)]
    #[case("sem-arroba.com", false)]
    #[case("a@b.c", false)] // TLD shorter than 2
    #[case("a@b.comunicacao", false)] // TLD longer than 6
    #[case("", false)]
    fn test_email_validation(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(email), expected);
    }

    #[rstest]
    #[case("(11) 91234-5678", true)]
    #[case("(21) 98765-4321", true)]
    #[case("11912345678", false)] // raw digits
    #[case("(11) 1234-5678", false)] // landline layout
    #[case("(11)91234-5678", false)] // missing space
    #[case("(11) 91234-567", false)]
    #[case("", false)]
    fn test_telefone_validation(#[case] telefone: &str, #[case] expected: bool) {
        assert_eq!(is_valid_telefone(telefone), expected);
    }

    #[rstest]
    #[case("01001-000", true)]
    #[case("01001000", false)] // 8 raw digits, no dash
    #[case("1001-000", false)]
    #[case("01001-00", false)]
    #[case("abcde-fgh", false)]
    fn test_cep_validation(#[case] cep: &str, #[case] expected: bool) {
        assert_eq!(is_valid_cep(cep), expected);
    }

    #[test]
    fn test_data_nascimento_accepts_iso_and_br() {
        assert_eq!(
            parse_data_nascimento("1990-05-15"),
            NaiveDate::from_ymd_opt(1990, 5, 15)
        );
        assert_eq!(
            parse_data_nascimento("15/05/1990"),
            NaiveDate::from_ymd_opt(1990, 5, 15)
        );
    }

    #[test]
    fn test_data_nascimento_rejects_impossible_dates() {
        assert_eq!(parse_data_nascimento("31/02/2000"), None);
        assert_eq!(parse_data_nascimento("2000-13-01"), None);
        assert_eq!(parse_data_nascimento("15-05-1990"), None);
        assert_eq!(parse_data_nascimento("20/08/19"), None); // partial year
        assert_eq!(parse_data_nascimento(""), None);
    }

    #[test]
    fn test_data_nascimento_must_be_in_the_past() {
        assert!(is_valid_data_nascimento("1990-05-15"));

        let today = Local::now().date_naive();
        assert!(!is_valid_data_nascimento(&today.format("%Y-%m-%d").to_string()));

        let tomorrow = today + Duration::days(1);
        assert!(!is_valid_data_nascimento(&tomorrow.format("%Y-%m-%d").to_string()));

        let yesterday = today - Duration::days(1);
        assert!(is_valid_data_nascimento(&yesterday.format("%Y-%m-%d").to_string()));
    }
}
