//! API handlers

use std::any::Any;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::api::AppState;
use crate::error::Error;
use crate::types::DirectoryUser;

/// The list endpoint never returns more than this many users.
const MAX_USERS: usize = 5;

const MSG_USERS_FETCH_FAILED: &str = "Impossible de récupérer les utilisateurs";
const MSG_USER_FETCH_FAILED: &str = "Erreur lors de la récupération de l'utilisateur";
const MSG_USER_NOT_FOUND: &str = "Utilisateur non trouvé";
const MSG_PARAMS_REQUIRED: &str = "Paramètres 'a' et 'b' requis";
const MSG_PARAMS_NOT_NUMERIC: &str = "Les paramètres doivent être des nombres";
const MSG_ROUTE_NOT_FOUND: &str = "Endpoint non trouvé";
const MSG_ROUTE_NOT_FOUND_DETAIL: &str = "L'URL demandée n'existe pas";
const MSG_INTERNAL_ERROR: &str = "Erreur interne du serveur";
const MSG_INTERNAL_ERROR_DETAIL: &str = "Une erreur inattendue s'est produite";

/// Welcome banner
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Bienvenue sur l'annuaire!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: String,
    pub version: String,
    pub status: String,
}

/// Health check for monitoring
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// List directory users, truncated to [`MAX_USERS`] entries
pub async fn list_users(State(state): State<AppState>) -> Response {
    match state.directory.fetch_users().await {
        Ok(users) => {
            let users: Vec<UserSummary> = users
                .into_iter()
                .take(MAX_USERS)
                .map(UserSummary::from)
                .collect();
            let count = users.len();

            Json(UsersResponse { users, count }).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to fetch the user list");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::with_details(MSG_USERS_FETCH_FAILED, err.to_string())),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserSummary>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub city: String,
}

impl From<DirectoryUser> for UserSummary {
    fn from(user: DirectoryUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            city: user.address.city,
        }
    }
}

/// Fetch a single directory user
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    // A non-integer segment is a routing miss, answered like any unknown URL.
    let Ok(id) = id.parse::<u64>() else {
        return not_found().await;
    };

    match state.directory.fetch_user(id).await {
        Ok(user) => Json(UserResponse {
            user: UserDetail::from(user),
        })
        .into_response(),
        // Checked before the generic arm: an upstream 404 stays a 404.
        Err(Error::UserNotFound) => {
            (StatusCode::NOT_FOUND, Json(ErrorBody::new(MSG_USER_NOT_FOUND))).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, user_id = id, "Failed to fetch user");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::with_details(MSG_USER_FETCH_FAILED, err.to_string())),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserDetail,
}

#[derive(Debug, Serialize)]
pub struct UserDetail {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

impl From<DirectoryUser> for UserDetail {
    fn from(user: DirectoryUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            website: user.website,
        }
    }
}

/// Add two numbers supplied as JSON body fields `a` and `b`
///
/// An absent or unparsable body and a missing operand get the same response,
/// so the extractor rejection is swallowed rather than surfaced.
pub async fn add(payload: Option<Json<Value>>) -> Response {
    let Some(Json(body)) = payload else {
        return missing_params();
    };
    let (Some(a), Some(b)) = (body.get("a"), body.get("b")) else {
        return missing_params();
    };

    let (a, b) = match (coerce_number(a), coerce_number(b)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(err), _) | (_, Err(err)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::with_details(MSG_PARAMS_NOT_NUMERIC, err.to_string())),
            )
                .into_response();
        }
    };

    Json(AddResponse {
        operation: "addition".to_string(),
        a,
        b,
        result: a + b,
    })
    .into_response()
}

fn missing_params() -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorBody::new(MSG_PARAMS_REQUIRED))).into_response()
}

/// Coerce a JSON value to f64: numbers pass through, strings are parsed.
fn coerce_number(value: &Value) -> crate::Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::InvalidNumber(n.to_string())),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidNumber(format!("could not convert string to float: '{s}'"))),
        other => Err(Error::InvalidNumber(format!(
            "unsupported operand type: {other}"
        ))),
    }
}

#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub operation: String,
    pub a: f64,
    pub b: f64,
    pub result: f64,
}

/// Fallback for any undefined route
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::with_message(
            MSG_ROUTE_NOT_FOUND,
            MSG_ROUTE_NOT_FOUND_DETAIL,
        )),
    )
        .into_response()
}

/// Catch-all for panics escaping a handler; never leaks the panic payload.
pub fn internal_error(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(%detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::with_message(
            MSG_INTERNAL_ERROR,
            MSG_INTERNAL_ERROR_DETAIL,
        )),
    )
        .into_response()
}

/// JSON error envelope shared by every failure path
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            details: None,
            message: None,
        }
    }

    fn with_details(error: &str, details: impl Into<String>) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(error)
        }
    }

    fn with_message(error: &str, message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Self::new(error)
        }
    }
}
