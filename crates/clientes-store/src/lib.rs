//! Record store for customer registration.
//!
//! This crate owns the record lifecycle: identity assignment, lookup,
//! wholesale replacement and deletion, plus persistence of the whole
//! collection.
//!
//! # Architecture
//!
//! Data access goes through the [`ClienteRepository`] trait with two
//! implementations:
//!
//! - [`MemoryClienteRepository`] - collection lives for the lifetime
//!   of the process, guarded by a mutex
//! - [`FileClienteRepository`] - collection lives in a single JSON
//!   document rewritten wholesale on every mutation
//!
//! [`ClienteService`] layers the creation-time rules on top of a
//! repository: the CEP format check and the server-side address
//! enrichment through a [`clientes_cep::CepResolver`].
//!
//! # Identity contract
//!
//! Creation assigns `max existing id + 1` (or `1` for an empty store).
//! Identity is immutable afterwards; updates force the payload back to
//! the targeted id. Gaps left by deletions are never refilled, but the
//! highest value is minted again once its record is gone.

pub mod error;
pub mod file;
pub mod memory;
pub mod repository;
pub mod service;

pub use error::{StoreError, StoreResult};
pub use file::FileClienteRepository;
pub use memory::MemoryClienteRepository;
pub use repository::{ClienteRepository, next_id};
pub use service::ClienteService;
