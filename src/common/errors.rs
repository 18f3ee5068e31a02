/*
Every failure a request can run into, converted to a status code
in one place(response_logic). Handlers and the capture/fetch layer
only ever deal in this type.
*/
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    //no detail on purpose, callers never learn which factor failed
    #[error("Invalid credentials")]
    Authentication,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database issue while handling the request")]
    Store(#[from] tokio_postgres::Error),
}

impl warp::reject::Reject for ApiError {}

pub fn forbidden() -> ApiError {
    return ApiError::Forbidden("You do not have permission to perform this action".to_owned());
}
