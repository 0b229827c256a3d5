//! Shared application state and runtime backend selection.
//!
//! The repository and resolver traits are not object-safe (their async
//! methods return opaque futures), so runtime selection goes through
//! enum wrappers instead of `Box<dyn ...>`.

use std::sync::Arc;

use clientes_cep::{CepResolver, CepResult, MockCepResolver, ViaCepClient};
use clientes_core::{Cliente, Endereco};
use clientes_store::{
    ClienteRepository, ClienteService, FileClienteRepository, MemoryClienteRepository, StoreResult,
};

use crate::config::ApiConfig;

/// Storage backend chosen at startup.
#[derive(Debug)]
pub enum Repository {
    Memory(MemoryClienteRepository),
    File(FileClienteRepository),
}

impl Repository {
    /// Pick the backend from the configuration: a `CLIENTES_FILE` path
    /// selects the JSON document, otherwise the store is in-memory.
    pub fn from_config(config: &ApiConfig) -> Self {
        match &config.file {
            Some(path) => Self::File(FileClienteRepository::new(path.clone())),
            None => Self::Memory(MemoryClienteRepository::new()),
        }
    }

    /// Short backend name for startup logging.
    pub fn backend(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::File(_) => "file",
        }
    }
}

impl ClienteRepository for Repository {
    async fn list(&self) -> StoreResult<Vec<Cliente>> {
        match self {
            Self::Memory(repo) => repo.list().await,
            Self::File(repo) => repo.list().await,
        }
    }

    async fn get(&self, id: i64) -> StoreResult<Cliente> {
        match self {
            Self::Memory(repo) => repo.get(id).await,
            Self::File(repo) => repo.get(id).await,
        }
    }

    async fn create(&self, cliente: Cliente) -> StoreResult<Cliente> {
        match self {
            Self::Memory(repo) => repo.create(cliente).await,
            Self::File(repo) => repo.create(cliente).await,
        }
    }

    async fn update(&self, id: i64, payload: Cliente) -> StoreResult<Cliente> {
        match self {
            Self::Memory(repo) => repo.update(id, payload).await,
            Self::File(repo) => repo.update(id, payload).await,
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        match self {
            Self::Memory(repo) => repo.delete(id).await,
            Self::File(repo) => repo.delete(id).await,
        }
    }
}

/// CEP resolver chosen at startup. The mock variant exists for tests
/// and offline development of the HTTP surface.
#[derive(Debug)]
pub enum Resolver {
    ViaCep(ViaCepClient),
    Mock(MockCepResolver),
}

impl Resolver {
    /// Build the production resolver, honoring a `VIACEP_BASE_URL`
    /// override.
    pub fn from_config(config: &ApiConfig) -> Self {
        match &config.viacep_base_url {
            Some(base) => Self::ViaCep(ViaCepClient::with_base_url(base.clone())),
            None => Self::ViaCep(ViaCepClient::new()),
        }
    }
}

impl CepResolver for Resolver {
    async fn resolve(&self, cep: &str) -> CepResult<Endereco> {
        match self {
            Self::ViaCep(client) => client.resolve(cep).await,
            Self::Mock(mock) => mock.resolve(cep).await,
        }
    }
}

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ClienteService<Repository, Resolver>>,
}

impl AppState {
    pub fn new(repository: Repository, resolver: Resolver) -> Self {
        Self {
            service: Arc::new(ClienteService::new(repository, resolver)),
        }
    }
}
