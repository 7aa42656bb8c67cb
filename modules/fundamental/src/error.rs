use actix_web::body::BoxBody;
use actix_web::{HttpResponse, ResponseError};
use herodex_common::error::ErrorInformation;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

impl Error {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Body of a 404 response, e.g. `{"error": "Hero not found"}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct NotFoundPayload {
    pub error: String,
}

/// Body of a 400 response, e.g. `{"errors": ["Strength must be 'Strong', 'Weak', or 'Average'"]}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct ValidationPayload {
    pub errors: Vec<String>,
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::NotFound { .. } => HttpResponse::NotFound().json(NotFoundPayload {
                error: self.to_string(),
            }),
            Self::Validation(message) => HttpResponse::BadRequest().json(ValidationPayload {
                errors: vec![message.clone()],
            }),
            Self::Database(err) => HttpResponse::InternalServerError()
                .json(ErrorInformation::new("Database error", err)),
            Self::Any(err) => HttpResponse::InternalServerError()
                .json(ErrorInformation::new("System unknown", err)),
        }
    }
}
