//! Route table and request handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use clientes_core::Cliente;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

/// Confirmation shown after a successful deletion.
pub const CLIENTE_EXCLUIDO: &str = "Cliente excluído com sucesso";

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/clientes", get(list_clientes).post(create_cliente))
        .route(
            "/clientes/{id}",
            get(get_cliente).put(update_cliente).delete(delete_cliente),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn list_clientes(State(state): State<AppState>) -> Result<Json<Vec<Cliente>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

async fn get_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Cliente>, ApiError> {
    Ok(Json(state.service.get(id).await?))
}

async fn create_cliente(
    State(state): State<AppState>,
    Json(payload): Json<Cliente>,
) -> Result<(StatusCode, Json<Cliente>), ApiError> {
    let created = state.service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Cliente>,
) -> Result<Json<Cliente>, ApiError> {
    Ok(Json(state.service.update(id, payload).await?))
}

async fn delete_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state.service.delete(id).await?;
    Ok(Json(json!({ "message": CLIENTE_EXCLUIDO })))
}
