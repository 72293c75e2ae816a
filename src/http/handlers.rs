//! Request handlers translating HTTP calls into `Directory` operations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde_json::{json, Value};

use crate::http::request::{CreateContact, RequestId};
use crate::http::response::{ApiError, ContactBody, MessageBody, StatsBody};
use crate::http::server::AppState;
use crate::observability::metrics;

/// `GET /` - service info and endpoint map.
pub async fn service_info() -> Json<Value> {
    Json(json!({
        "message": "Contact directory API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "register_contact": "POST /contactos/",
            "list_contacts": "GET /contactos/",
            "get_contact": "GET /contactos/{name}",
            "delete_contact": "DELETE /contactos/{name}",
            "stats": "GET /estadisticas/",
        },
    }))
}

/// `POST /contactos/` - register a contact.
///
/// 201 with the stored contact on success; 400 on invalid input or duplicate.
pub async fn create_contact(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(body): Json<CreateContact>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let (contact, total) = {
        let mut directory = state.directory();
        let contact = directory.register(&body.name, &body.phone)?;
        (contact, directory.count())
    };
    metrics::set_contact_count(total);

    tracing::info!(
        request_id = %request_id.0,
        name = %contact.name,
        "contact registered"
    );

    let message = format!("Contact '{}' registered successfully", contact.name);
    Ok((
        StatusCode::CREATED,
        Json(MessageBody::with_contact(message, contact)),
    ))
}

/// `GET /contactos/` - all contacts, lexicographic order.
pub async fn list_contacts(State(state): State<AppState>) -> Json<Vec<ContactBody>> {
    let contacts = state.directory().list();
    Json(contacts.into_iter().map(ContactBody::from).collect())
}

/// `GET /contactos/{name}` - case-insensitive lookup. 404 when absent.
pub async fn get_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ContactBody>, ApiError> {
    match state.directory().find(&name) {
        Some(contact) => Ok(Json(contact.into())),
        None => Err(ApiError::not_found(format!(
            "contact '{name}' does not exist"
        ))),
    }
}

/// `DELETE /contactos/{name}` - case-sensitive delete.
///
/// Every failure maps to 404, matching the original service.
pub async fn delete_contact(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(name): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let (contact, total) = {
        let mut directory = state.directory();
        let contact = directory.delete(&name).map_err(ApiError::as_not_found)?;
        (contact, directory.count())
    };
    metrics::set_contact_count(total);

    tracing::info!(
        request_id = %request_id.0,
        name = %contact.name,
        "contact deleted"
    );

    Ok(Json(MessageBody::with_contact(
        "Contact deleted successfully",
        contact,
    )))
}

/// `GET /estadisticas/` - directory totals.
pub async fn stats(State(state): State<AppState>) -> Json<StatsBody> {
    let total = state.directory().count();
    Json(StatsBody {
        total_contacts: total,
        message: format!("The directory holds {total} contact(s)"),
    })
}
