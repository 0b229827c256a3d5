//! Mock CEP resolver for testing and development.
//!
//! This module provides a programmable resolver so the form and the
//! store can be exercised without network access to ViaCEP.

use std::collections::HashMap;

use clientes_core::Endereco;
use clientes_core::formatters::strip_non_digits;

use crate::resolver::{CepError, CepResolver, CepResult};

/// In-memory CEP resolver for testing and development.
///
/// Known CEPs are registered up front; unknown CEPs resolve to
/// [`CepError::NotFound`]. A resolver created with [`failing`] fails
/// every lookup with a transport error, simulating an unreachable
/// service.
///
/// # Examples
///
/// ```
/// use clientes_cep::{CepResolver, MockCepResolver};
/// use clientes_core::Endereco;
///
/// # async fn example() {
/// let resolver = MockCepResolver::new().with_endereco(
///     "01001000",
///     Endereco {
///         cep: "01001-000".to_string(),
///         logradouro: "Praça da Sé".to_string(),
///         ..Default::default()
///     },
/// );
///
/// let endereco = resolver.resolve("01001000").await.unwrap();
/// assert_eq!(endereco.logradouro, "Praça da Sé");
/// assert!(resolver.resolve("99999999").await.is_err());
/// # }
/// ```
///
/// [`failing`]: MockCepResolver::failing
#[derive(Debug, Default)]
pub struct MockCepResolver {
    enderecos: HashMap<String, Endereco>,
    fail_transport: bool,
}

impl MockCepResolver {
    /// Create an empty mock resolver; every lookup is not-found.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver that fails every lookup with a transport
    /// error.
    pub fn failing() -> Self {
        Self {
            enderecos: HashMap::new(),
            fail_transport: true,
        }
    }

    /// Register an address for a CEP. The key is normalized to its
    /// digits, so `"01001-000"` and `"01001000"` register the same
    /// entry.
    pub fn with_endereco(mut self, cep: &str, endereco: Endereco) -> Self {
        self.enderecos.insert(strip_non_digits(cep), endereco);
        self
    }
}

impl CepResolver for MockCepResolver {
    async fn resolve(&self, cep: &str) -> CepResult<Endereco> {
        if self.fail_transport {
            return Err(CepError::Transport("falha simulada".to_string()));
        }

        self.enderecos
            .get(&strip_non_digits(cep))
            .cloned()
            .ok_or_else(|| CepError::NotFound(cep.to_string()))
    }
}
