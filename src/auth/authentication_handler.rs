/*
Every request re-proves who it is from its basic auth header,
there are no sessions or tokens to keep alive. A missing header,
bad base64, unknown username or wrong password all collapse into
the same failure so callers can't probe which factor was wrong.
*/
use crate::api::data_fetcher;
use crate::api::types::Role;
use crate::auth::password_handler;
use crate::common::errors::ApiError;
use crate::data_store::sql_execution_handler::ExecutionHandler;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures::lock::Mutex;
use std::sync::Arc;

pub struct AuthenticatedUser {
    pub user_id: i32,
    pub username: String,
    pub role: Role,
}

//pulls username/password out of `Basic base64(username:password)`.
//usernames are matched case sensitive further down, no normalizing here.
pub fn parse_basic_credentials(header_value: &str) -> Option<(String, String)> {
    let mut pieces = header_value.splitn(2, ' ');
    let scheme = pieces.next()?;
    let encoded = pieces.next()?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded_bytes = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded_bytes).ok()?;
    let (username, password) = decoded.split_once(':')?;
    return Some((username.to_owned(), password.to_owned()));
}

pub async fn authenticate_request(
    auth_header: &Option<String>,
    execution_handler: &Arc<Mutex<ExecutionHandler>>,
) -> Result<AuthenticatedUser, ApiError> {
    let header_value = auth_header.as_ref().ok_or(ApiError::Authentication)?;
    let (username, password) =
        parse_basic_credentials(header_value).ok_or(ApiError::Authentication)?;

    let user = data_fetcher::get_user_by_username(execution_handler, &username)
        .await?
        .ok_or(ApiError::Authentication)?;

    if !password_handler::verify_password(&password, &password_handler::pepper(), &user.password_hash)
    {
        return Err(ApiError::Authentication);
    }

    let role = Role::parse(&user.role).ok_or(ApiError::Authentication)?;
    return Ok(AuthenticatedUser {
        user_id: user.id,
        username: user.username,
        role,
    });
}
