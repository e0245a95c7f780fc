// utils/error.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Type de résultat standard pour l'application
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Partie de la requête d'où provient une donnée invalide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPart {
    Body,
    Query,
    Path,
}

impl RequestPart {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestPart::Body => "body",
            RequestPart::Query => "query",
            RequestPart::Path => "path",
        }
    }
}

impl std::fmt::Display for RequestPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Erreurs principales de l'application
#[derive(Error, Debug)]
pub enum AppError {
    /// Contraintes de schéma non respectées (422 Unprocessable Entity)
    #[error("Validation failed in {part}: {errors}")]
    Validation {
        part: RequestPart,
        errors: ValidationErrors,
    },

    /// Donnée impossible à désérialiser: champ manquant, mauvais type, JSON invalide (422)
    #[error("Invalid {part}: {message}")]
    InvalidRequest { part: RequestPart, message: String },

    /// Erreur de configuration (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Erreur interne du serveur (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Une violation de contrainte, localisée par son chemin dans la requête
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Structure de réponse d'erreur standardisée
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub details: Vec<FieldViolation>,
}

impl AppError {
    pub fn validation(part: RequestPart, errors: ValidationErrors) -> Self {
        AppError::Validation { part, errors }
    }

    pub fn invalid_request<T: Into<String>>(part: RequestPart, message: T) -> Self {
        AppError::InvalidRequest {
            part,
            message: message.into(),
        }
    }

    /// Liste à plat de toutes les violations, avec leur chemin complet
    pub fn violations(&self) -> Vec<FieldViolation> {
        match self {
            AppError::Validation { part, errors } => {
                let mut violations = Vec::new();
                collect_violations(errors, &mut vec![part.as_str().to_string()], &mut violations);
                violations
            }
            AppError::InvalidRequest { part, message } => vec![FieldViolation {
                loc: vec![part.as_str().to_string()],
                msg: message.clone(),
                kind: "parse".to_string(),
            }],
            AppError::ConfigurationError(_) | AppError::InternalError(_) => Vec::new(),
        }
    }
}

/// Parcourt récursivement les erreurs de `validator` (structs imbriquées et listes)
fn collect_violations(
    errors: &ValidationErrors,
    path: &mut Vec<String>,
    out: &mut Vec<FieldViolation>,
) {
    // Ordre stable: HashMap côté validator
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (field, kind) in fields {
        path.push(field.to_string());
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let msg = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} constraint failed", error.code));
                    out.push(FieldViolation {
                        loc: path.clone(),
                        msg,
                        kind: error.code.to_string(),
                    });
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_violations(inner, path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    path.push(index.to_string());
                    collect_violations(inner, path, out);
                    path.pop();
                }
            }
        }
        path.pop();
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::InvalidRequest { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::ConfigurationError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let error = if status.is_server_error() {
            tracing::error!("Internal server error: {}", self);
            "Internal server error".to_string()
        } else {
            tracing::debug!("Request rejected: {}", self);
            "Validation failed".to_string()
        };

        HttpResponse::build(status).json(ErrorResponse {
            error,
            code: status.as_u16(),
            details: self.violations(),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::InternalError(format!("Serialization error: {}", error))
    }
}
