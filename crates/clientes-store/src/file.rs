//! File-backed repository: the collection lives in a single JSON
//! document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clientes_core::Cliente;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::repository::{ClienteRepository, next_id};

/// JSON-file implementation of [`ClienteRepository`].
///
/// The whole collection is the unit of durability: every mutating
/// operation reads the entire document, mutates it in memory and
/// writes it back. A missing file reads as an empty collection, not an
/// error.
///
/// There is no locking between writers. Two concurrent mutations can
/// interleave their read-modify-write cycles and the last write wins,
/// silently discarding the other side's change. This matches the
/// behavior of the original single-file deployment; keep the
/// repository behind one task (or one process) when that matters.
#[derive(Debug, Clone)]
pub struct FileClienteRepository {
    path: PathBuf,
}

impl FileClienteRepository {
    /// Create a repository backed by the JSON document at `path`.
    /// The file is created on the first mutation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StoreResult<Vec<Cliente>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "arquivo de clientes ausente, coleção vazia");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, clientes: &[Cliente]) -> StoreResult<()> {
        let contents = serde_json::to_string_pretty(clientes)?;
        tokio::fs::write(&self.path, contents).await?;
        Ok(())
    }
}

impl ClienteRepository for FileClienteRepository {
    async fn list(&self) -> StoreResult<Vec<Cliente>> {
        self.load().await
    }

    async fn get(&self, id: i64) -> StoreResult<Cliente> {
        self.load()
            .await?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, mut cliente: Cliente) -> StoreResult<Cliente> {
        let mut clientes = self.load().await?;
        cliente.id = next_id(&clientes);
        clientes.push(cliente.clone());
        self.save(&clientes).await?;
        Ok(cliente)
    }

    async fn update(&self, id: i64, mut payload: Cliente) -> StoreResult<Cliente> {
        let mut clientes = self.load().await?;
        let pos = clientes
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;

        payload.id = id;
        clientes[pos] = payload.clone();
        self.save(&clientes).await?;
        Ok(payload)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut clientes = self.load().await?;
        let pos = clientes
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;

        clientes.remove(pos);
        self.save(&clientes).await?;
        Ok(())
    }
}
