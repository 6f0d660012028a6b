//! # Erros HTTP
//!
//! [`ApiError`] traduz as falhas do domínio em respostas JSON:
//!
//! | Erro | Status | Corpo |
//! |------|--------|-------|
//! | `ValidationError` | 422 | `{"error": "...", "field": "email"}` |
//! | `Duplicate` | 409 | `{"error": "Student with this CPF already exists"}` |
//! | `NotFound` | 404 | `{"error": "Student not found"}` |
//!
//! A mensagem é exibida ao usuário sem alteração pelo cliente.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::core::{Field, RegistryError, ValidationError};

/// Erro devolvido pelos handlers da API JSON.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] RegistryError);

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError(RegistryError::Validation(err))
    }
}

/// Corpo JSON de erro.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            RegistryError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RegistryError::Duplicate { .. } => StatusCode::CONFLICT,
            RegistryError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn field(&self) -> Option<Field> {
        match &self.0 {
            RegistryError::Validation(v) => Some(v.field),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::info!(
            status = status.as_u16(),
            cpf = self.0.cpf(),
            error = %self,
            "Requisição rejeitada"
        );
        let body = ErrorBody {
            error: self.to_string(),
            field: self.field(),
        };
        (status, Json(body)).into_response()
    }
}
