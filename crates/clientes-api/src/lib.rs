//! HTTP surface of the customer registration system.
//!
//! Exposes the record store as a small JSON API:
//!
//! | Method | Path             | Action                               |
//! |--------|------------------|--------------------------------------|
//! | GET    | `/clientes`      | list all records                     |
//! | POST   | `/clientes`      | create (with address enrichment)     |
//! | GET    | `/clientes/{id}` | fetch one record                     |
//! | PUT    | `/clientes/{id}` | replace one record wholesale         |
//! | DELETE | `/clientes/{id}` | remove one record                    |
//!
//! Errors come back as `{"message": "..."}` bodies with the message in
//! Portuguese, matching what the registration form displays.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::{AppState, Repository, Resolver};
