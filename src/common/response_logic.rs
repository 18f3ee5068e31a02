/*
All responses leave through here so every handler speaks the same
json dialect. Rejections raised anywhere in the filter tree get
converted back to the documented status codes in handle_rejection.
*/
use crate::common::errors::ApiError;
use serde::Serialize;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub fn json_with_status<T: Serialize>(data: &T, status: StatusCode) -> impl Reply {
    return warp::reply::with_status(warp::reply::json(data), status);
}

pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if let Some(api_error) = err.find::<ApiError>() {
        match api_error {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, api_error.to_string()),
            ApiError::Authentication => (StatusCode::UNAUTHORIZED, api_error.to_string()),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, api_error.to_string()),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, api_error.to_string()),
            ApiError::Store(cause) => {
                //the real cause stays in the server log, callers only
                //get the generic description
                log::error!("store failure: {}", cause);
                (StatusCode::INTERNAL_SERVER_ERROR, api_error.to_string())
            }
        }
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_owned())
    } else if err.find::<warp::filters::body::BodyDeserializeError>().is_some() {
        (StatusCode::BAD_REQUEST, "Invalid JSON".to_owned())
    } else if err.find::<warp::reject::InvalidQuery>().is_some() {
        (StatusCode::BAD_REQUEST, "Invalid query string".to_owned())
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large".to_owned())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_owned())
    } else {
        log::error!("unhandled rejection: {:?}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_owned())
    };

    let body = ErrorBody { error: message };
    let reply = warp::reply::with_status(warp::reply::json(&body), status);
    //basic challenge so browsers and curl know how to retry
    if status == StatusCode::UNAUTHORIZED {
        return Ok(Box::new(warp::reply::with_header(
            reply,
            "WWW-Authenticate",
            "Basic realm=\"good-neighbor\"",
        )) as Box<dyn Reply>);
    }
    return Ok(Box::new(reply) as Box<dyn Reply>);
}
