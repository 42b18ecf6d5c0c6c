// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use courtside_persistence::PersistenceError;

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core/persistence errors and represent
/// the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The request conflicts with committed state (slot or series taken).
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The actor's club scope does not cover the targeted resource.
    Forbidden {
        /// A human-readable description of the scope violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for '{field}': {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Forbidden { message } => write!(f, "Forbidden: {message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a persistence error into the API contract.
///
/// Conflicts and rule violations are caller-correctable; storage-level
/// failures collapse into `Internal`.
pub fn translate_persistence_error(err: &PersistenceError) -> ApiError {
    match err {
        PersistenceError::ClubNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Club"),
            message: format!("No club with id {id}"),
        },
        PersistenceError::CourtNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Court"),
            message: format!("No court with id {id}"),
        },
        PersistenceError::ActivityNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Activity"),
            message: format!("No activity with id {id}"),
        },
        PersistenceError::ReservationNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Reservation"),
            message: format!("No reservation with id {id}"),
        },
        PersistenceError::SeriesNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Series"),
            message: format!("No series with id {id}"),
        },
        PersistenceError::SlotTaken {
            court_id,
            conflicting_start,
            conflicting_end,
        } => ApiError::Conflict {
            message: format!(
                "Court {court_id} is already reserved from {conflicting_start} to {conflicting_end}"
            ),
        },
        PersistenceError::SeriesTaken {
            court_id,
            blocking_series_id,
        } => ApiError::Conflict {
            message: format!(
                "Court {court_id} already carries weekly series {blocking_series_id} in that range"
            ),
        },
        PersistenceError::Forbidden {
            scope_club_id,
            owning_club_id,
        } => ApiError::Forbidden {
            message: format!(
                "Actor scoped to club {scope_club_id} cannot act on club {owning_club_id}"
            ),
        },
        PersistenceError::RuleViolation(message) => ApiError::InvalidInput {
            field: String::from("request"),
            message: message.clone(),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
