//! Creation-time rules layered over a repository.

use clientes_cep::CepResolver;
use clientes_core::Cliente;
use clientes_core::formatters::strip_non_digits;
use clientes_core::validators::is_valid_cep;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::repository::ClienteRepository;

/// Record service combining a repository with address enrichment.
///
/// Reads and destructive operations pass straight through to the
/// repository. Creation is where the rules live: the payload must
/// carry a CEP in the canonical dashed form, the address is resolved
/// server-side and overwrites whatever the payload brought, and only
/// then is the record appended.
#[derive(Debug)]
pub struct ClienteService<R, C> {
    repository: R,
    resolver: C,
}

impl<R, C> ClienteService<R, C>
where
    R: ClienteRepository,
    C: CepResolver,
{
    pub fn new(repository: R, resolver: C) -> Self {
        Self {
            repository,
            resolver,
        }
    }

    /// All records in store order.
    pub async fn list(&self) -> StoreResult<Vec<Cliente>> {
        self.repository.list().await
    }

    /// The record with the given identity.
    pub async fn get(&self, id: i64) -> StoreResult<Cliente> {
        self.repository.get(id).await
    }

    /// Validate the CEP, resolve the address and append the record.
    ///
    /// The resolved address replaces the payload's, except that a
    /// complemento typed by the user survives when the resolver
    /// returns none. Fails with [`StoreError::InvalidCep`] before any
    /// lookup when the CEP is not in the `XXXXX-XXX` form, and with
    /// [`StoreError::Enrichment`] when the lookup itself fails.
    pub async fn create(&self, mut cliente: Cliente) -> StoreResult<Cliente> {
        if !is_valid_cep(&cliente.endereco.cep) {
            warn!(cep = %cliente.endereco.cep, "CEP fora do formato canônico, criação abortada");
            return Err(StoreError::InvalidCep);
        }

        let digits = strip_non_digits(&cliente.endereco.cep);
        let mut endereco = self.resolver.resolve(&digits).await?;
        if endereco.complemento.is_empty() {
            endereco.complemento = cliente.endereco.complemento.clone();
        }
        cliente.endereco = endereco;

        let stored = self.repository.create(cliente).await?;
        info!(id = stored.id, "cliente criado");
        Ok(stored)
    }

    /// Replace the record wholesale. No enrichment happens here; the
    /// address is stored as the payload carries it.
    pub async fn update(&self, id: i64, payload: Cliente) -> StoreResult<Cliente> {
        let updated = self.repository.update(id, payload).await?;
        debug!(id, "cliente atualizado");
        Ok(updated)
    }

    /// Remove the record permanently.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        self.repository.delete(id).await?;
        info!(id, "cliente excluído");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clientes_cep::{CepError, MockCepResolver};
    use clientes_core::Endereco;

    use crate::memory::MemoryClienteRepository;

    fn payload(cep: &str, complemento: &str) -> Cliente {
        Cliente {
            id: 0,
            nome: "Ana".to_string(),
            sobrenome: "Souza".to_string(),
            email: "ana@example.com".to_string(),
            data_nascimento: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            telefone: "(11) 91234-5678".to_string(),
            endereco: Endereco {
                cep: cep.to_string(),
                logradouro: "Rua Digitada".to_string(),
                complemento: complemento.to_string(),
                ..Default::default()
            },
        }
    }

    fn praca_da_se() -> Endereco {
        Endereco {
            cep: "01001-000".to_string(),
            logradouro: "Praça da Sé".to_string(),
            bairro: "Sé".to_string(),
            estado: "SP".to_string(),
            localidade: "São Paulo".to_string(),
            complemento: "lado ímpar".to_string(),
        }
    }

    fn service_with(endereco: Endereco) -> ClienteService<MemoryClienteRepository, MockCepResolver> {
        let resolver = MockCepResolver::new().with_endereco("01001-000", endereco);
        ClienteService::new(MemoryClienteRepository::new(), resolver)
    }

    #[tokio::test]
    async fn test_create_enriches_address_from_resolver() {
        let service = service_with(praca_da_se());

        let stored = service.create(payload("01001-000", "")).await.unwrap();

        assert_eq!(stored.id, 1);
        assert_eq!(stored.endereco.logradouro, "Praça da Sé");
        assert_eq!(stored.endereco.localidade, "São Paulo");
        assert_eq!(stored.endereco.complemento, "lado ímpar");
    }

    #[tokio::test]
    async fn test_create_keeps_typed_complemento_when_resolver_has_none() {
        let mut resolved = praca_da_se();
        resolved.complemento = String::new();
        let service = service_with(resolved);

        let stored = service
            .create(payload("01001-000", "Apto 42"))
            .await
            .unwrap();
        assert_eq!(stored.endereco.complemento, "Apto 42");
    }

    #[tokio::test]
    async fn test_create_rejects_undashed_cep_before_lookup() {
        // The resolver would fail every lookup; the format check must
        // short-circuit first.
        let service =
            ClienteService::new(MemoryClienteRepository::new(), MockCepResolver::failing());

        let err = service.create(payload("01001000", "")).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidCep));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_propagates_unknown_cep() {
        let service = service_with(praca_da_se());

        let err = service.create(payload("99999-999", "")).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Enrichment(CepError::NotFound(_))
        ));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_propagates_transport_failure() {
        let service =
            ClienteService::new(MemoryClienteRepository::new(), MockCepResolver::failing());

        let err = service.create(payload("01001-000", "")).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Enrichment(CepError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn test_update_stores_address_as_given() {
        let service = service_with(praca_da_se());
        service.create(payload("01001-000", "")).await.unwrap();

        let mut replacement = payload("99999-999", "");
        replacement.nome = "Ana Maria".to_string();
        replacement.endereco.logradouro = "Rua Livre".to_string();

        let updated = service.update(1, replacement).await.unwrap();
        assert_eq!(updated.nome, "Ana Maria");
        // Untouched by enrichment.
        assert_eq!(updated.endereco.logradouro, "Rua Livre");
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = service_with(praca_da_se());
        service.create(payload("01001-000", "")).await.unwrap();

        service.delete(1).await.unwrap();
        assert!(matches!(
            service.get(1).await.unwrap_err(),
            StoreError::NotFound(1)
        ));
    }
}
