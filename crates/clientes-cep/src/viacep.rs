//! HTTP client for the public ViaCEP service.

use clientes_core::Endereco;
use clientes_core::formatters::format_cep;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::resolver::{CepError, CepResolver, CepResult};

/// Base URL of the public ViaCEP web service.
pub const VIA_CEP_URL: &str = "https://viacep.com.br/ws";

/// CEP resolver backed by the ViaCEP web service.
///
/// Performs `GET {base}/{cep}/json/` and maps the response into an
/// [`Endereco`]. The service signals an unknown CEP with an
/// `"erro": true` body rather than a 404, which is mapped to
/// [`CepError::NotFound`].
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    http: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    /// Create a client pointed at the public ViaCEP service.
    pub fn new() -> Self {
        Self::with_base_url(VIA_CEP_URL.to_string())
    }

    /// Create a client pointed at a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }
}

impl Default for ViaCepClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire shape of a ViaCEP response.
///
/// All fields are optional in practice; `uf` is the two-letter state
/// code that the domain calls `estado`.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    #[serde(default)]
    complemento: String,
    #[serde(default)]
    erro: bool,
}

impl CepResolver for ViaCepClient {
    async fn resolve(&self, cep: &str) -> CepResult<Endereco> {
        let url = format!("{}/{}/json/", self.base_url, cep);
        debug!(cep, %url, "consultando CEP");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| CepError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            warn!(cep, status = %response.status(), "consulta de CEP falhou");
            return Err(CepError::Transport(format!(
                "status HTTP {}",
                response.status()
            )));
        }

        let data: ViaCepResponse = response
            .json()
            .await
            .map_err(|e| CepError::Transport(e.to_string()))?;

        if data.erro {
            debug!(cep, "CEP não encontrado");
            return Err(CepError::NotFound(cep.to_string()));
        }

        Ok(Endereco {
            cep: format_cep(cep),
            logradouro: data.logradouro,
            bairro: data.bairro,
            estado: data.uf,
            localidade: data.localidade,
            complemento: data.complemento,
        })
    }
}
