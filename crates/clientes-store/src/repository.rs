//! Repository contract for customer records.
//!
//! Uses native async trait methods (Edition 2024 RPITIT), so the
//! `async-trait` crate is not needed.

#![allow(async_fn_in_trait)]

use clientes_core::Cliente;
use clientes_core::constants::FIRST_ID;

use crate::error::StoreResult;

/// Data access contract for the customer collection.
///
/// Implementations persist the whole collection as the unit of
/// durability; there is no partial-write protection and no
/// transactions.
pub trait ClienteRepository: Send + Sync {
    /// All records in store order (insertion order, as mutated by
    /// update/delete). No pagination, filtering or sorting.
    async fn list(&self) -> StoreResult<Vec<Cliente>>;

    /// The record with the given identity, or `NotFound`.
    async fn get(&self, id: i64) -> StoreResult<Cliente>;

    /// Append a new record. Any identity on the payload is ignored;
    /// the store assigns the next one (see [`next_id`]) and returns
    /// the stored record carrying it.
    async fn create(&self, cliente: Cliente) -> StoreResult<Cliente>;

    /// Replace the record with identity `id` wholesale by `payload`,
    /// forcing the identity back to `id` regardless of what the
    /// payload carries. `NotFound` when no record matches.
    async fn update(&self, id: i64, payload: Cliente) -> StoreResult<Cliente>;

    /// Remove the record with identity `id` permanently. `NotFound`
    /// when no record matches; the collection is left unchanged then.
    async fn delete(&self, id: i64) -> StoreResult<()>;
}

/// Identity for the next record: `1` for an empty collection,
/// `max existing identity + 1` otherwise.
///
/// This is not a gap-filling scheme. Deleting a middle record leaves a
/// hole that is never refilled; deleting the record with the highest
/// identity makes that same number available again.
pub fn next_id(clientes: &[Cliente]) -> i64 {
    clientes
        .iter()
        .map(|c| c.id)
        .max()
        .map_or(FIRST_ID, |max| max + 1)
}
