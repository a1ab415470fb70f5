use rocket::response::{Responder, Response};
use rocket::{
    http::{ContentType, Status},
    response,
    serde::json::Json,
    Request,
};
use serde::Serialize;

/// Every failure a request can surface. Each variant maps to one HTTP
/// status and a stable `kind` string the frontend can branch on.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    DuplicateIdentity,
    InvalidCredentials,
    NotAuthenticated,
    NotFound,
    InsufficientItems,
    Internal(String),
}

impl ApiError {
    pub(crate) fn internal(err: impl std::fmt::Display) -> ApiError {
        ApiError::Internal(err.to_string())
    }

    fn status(&self) -> Status {
        match self {
            ApiError::Validation(_) => Status::BadRequest,
            ApiError::DuplicateIdentity => Status::Conflict,
            ApiError::InvalidCredentials => Status::Unauthorized,
            ApiError::NotAuthenticated => Status::Unauthorized,
            ApiError::NotFound => Status::NotFound,
            ApiError::InsufficientItems => Status::BadRequest,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::DuplicateIdentity => "duplicate_identity",
            ApiError::InvalidCredentials => "invalid_credentials",
            ApiError::NotAuthenticated => "not_authenticated",
            ApiError::NotFound => "not_found",
            ApiError::InsufficientItems => "insufficient_items",
            ApiError::Internal(_) => "internal",
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::DuplicateIdentity => "Username or email is already registered".to_string(),
            ApiError::InvalidCredentials => "Invalid username or password".to_string(),
            ApiError::NotAuthenticated => "Login required".to_string(),
            ApiError::NotFound => "No such item".to_string(),
            ApiError::InsufficientItems => {
                "Add at least one item to generate an outfit".to_string()
            }
            ApiError::Internal(msg) => msg.clone(),
        }
    }
}

#[derive(Serialize)]
struct ApiErrorBody {
    err: String,
    kind: &'static str,
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        if let ApiError::Internal(msg) = &self {
            log::warn!("internal error on {}: {}", req.uri(), msg);
        }

        let body = Json(ApiErrorBody {
            err: self.message(),
            kind: self.kind(),
        });

        Response::build_from(body.respond_to(req)?)
            .status(self.status())
            .header(ContentType::JSON)
            .ok()
    }
}

// Errors raised before a route body runs (guard failures, bad JSON,
// unknown paths) land in catchers and get the same JSON shape.

#[catch(401)]
pub(crate) fn unauthorized() -> ApiError {
    ApiError::NotAuthenticated
}

#[catch(404)]
pub(crate) fn not_found() -> ApiError {
    ApiError::NotFound
}

#[catch(422)]
pub(crate) fn unprocessable() -> ApiError {
    ApiError::Validation("Malformed request body".to_string())
}

#[catch(default)]
pub(crate) fn fallback(status: Status, _req: &Request) -> ApiError {
    ApiError::Internal(format!("Request failed with status {}", status.code))
}
