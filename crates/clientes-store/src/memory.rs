//! In-memory repository: the collection lives for the lifetime of the
//! process.

use clientes_core::Cliente;
use tokio::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::repository::{ClienteRepository, next_id};

/// Process-memory implementation of [`ClienteRepository`].
///
/// The collection is shared across all tasks of the process. A single
/// mutex serializes every read-modify-write cycle, so concurrent
/// mutations cannot lose each other's changes. Nothing survives a
/// restart.
#[derive(Debug, Default)]
pub struct MemoryClienteRepository {
    clientes: Mutex<Vec<Cliente>>,
}

impl MemoryClienteRepository {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records (tests and seeded
    /// deployments).
    pub fn with_clientes(clientes: Vec<Cliente>) -> Self {
        Self {
            clientes: Mutex::new(clientes),
        }
    }
}

impl ClienteRepository for MemoryClienteRepository {
    async fn list(&self) -> StoreResult<Vec<Cliente>> {
        Ok(self.clientes.lock().await.clone())
    }

    async fn get(&self, id: i64) -> StoreResult<Cliente> {
        self.clientes
            .lock()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, mut cliente: Cliente) -> StoreResult<Cliente> {
        let mut clientes = self.clientes.lock().await;
        cliente.id = next_id(&clientes);
        clientes.push(cliente.clone());
        Ok(cliente)
    }

    async fn update(&self, id: i64, mut payload: Cliente) -> StoreResult<Cliente> {
        let mut clientes = self.clientes.lock().await;
        let pos = clientes
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;

        payload.id = id;
        clientes[pos] = payload.clone();
        Ok(payload)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut clientes = self.clientes.lock().await;
        let pos = clientes
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;

        clientes.remove(pos);
        Ok(())
    }
}
