//! Response schemas and error mapping.
//!
//! # Responsibilities
//! - Define response body schemas
//! - Map `DirectoryError` to appropriate HTTP status codes

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::directory::{Contact, DirectoryError};

/// A contact as returned by lookup and list.
#[derive(Debug, Serialize)]
pub struct ContactBody {
    pub name: String,
    pub phone: String,
}

impl From<Contact> for ContactBody {
    fn from(contact: Contact) -> Self {
        Self {
            name: contact.name,
            phone: contact.phone,
        }
    }
}

/// Operation result with an optional contact echo.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            name: None,
            phone: None,
        }
    }

    pub fn with_contact(message: impl Into<String>, contact: Contact) -> Self {
        Self {
            message: message.into(),
            name: Some(contact.name),
            phone: Some(contact.phone),
        }
    }
}

/// Body for `GET /estadisticas/`.
#[derive(Debug, Serialize)]
pub struct StatsBody {
    pub total_contacts: usize,
    pub message: String,
}

/// Error response: a status code plus a `{message}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Not-found with an arbitrary message, used when a lookup comes back
    /// empty (the core reports absence as `None`, not an error).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// Force a 404 regardless of the error kind. The delete endpoint reports
    /// every failure as not-found, matching the original service.
    pub fn as_not_found(error: DirectoryError) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: error.to_string(),
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(error: DirectoryError) -> Self {
        let status = match error {
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
            DirectoryError::InvalidName
            | DirectoryError::InvalidPhone
            | DirectoryError::Duplicate(_) => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageBody::new(self.message))).into_response()
    }
}
