/*
Handles all captures and the duplicate logic for invalid requests
like registering a taken username or signing up for the same
opportunity twice.
*/
use crate::common::errors::ApiError;
use crate::data_store::db_models::{DBOpportunity, DBSignup, DBUser};
use crate::data_store::sql_execution_handler::ExecutionHandler;
use futures::lock::Mutex;
use std::sync::Arc;

pub async fn capture_new_user(
    execution_handler: &Arc<Mutex<ExecutionHandler>>,
    user: &DBUser,
) -> Result<i32, ApiError> {
    let mut handler = execution_handler.lock().await;
    //uniqueness check before insert, the db constraint is only the backstop
    let existing_rows = handler.select_user_by_username(&user.username).await?;
    if !existing_rows.is_empty() {
        return Err(ApiError::Validation("Username already exists".to_owned()));
    }
    let user_id = handler.insert_user(user).await?;
    return Ok(user_id);
}

pub async fn capture_new_opportunity(
    execution_handler: &Arc<Mutex<ExecutionHandler>>,
    opportunity: &DBOpportunity,
) -> Result<i32, ApiError> {
    let mut handler = execution_handler.lock().await;
    let opportunity_id = handler.insert_opportunity(opportunity).await?;
    return Ok(opportunity_id);
}

pub async fn capture_opportunity_update(
    execution_handler: &Arc<Mutex<ExecutionHandler>>,
    opportunity: &DBOpportunity,
) -> Result<(), ApiError> {
    let mut handler = execution_handler.lock().await;
    let num_modified = handler.update_opportunity(opportunity).await?;
    if num_modified == 0 {
        return Err(ApiError::NotFound("Opportunity not found".to_owned()));
    }
    return Ok(());
}

pub async fn capture_opportunity_removal(
    execution_handler: &Arc<Mutex<ExecutionHandler>>,
    opportunity_id: &i32,
) -> Result<(), ApiError> {
    let mut handler = execution_handler.lock().await;
    let num_modified = handler.delete_opportunity(opportunity_id).await?;
    if num_modified == 0 {
        return Err(ApiError::NotFound("Opportunity not found".to_owned()));
    }
    return Ok(());
}

pub async fn capture_new_signup(
    execution_handler: &Arc<Mutex<ExecutionHandler>>,
    signup: &DBSignup,
) -> Result<i32, ApiError> {
    let mut handler = execution_handler.lock().await;
    let existing_rows = handler
        .select_single_signup(&signup.user_id, &signup.opportunity_id)
        .await?;
    if !existing_rows.is_empty() {
        return Err(ApiError::Validation(
            "You have already signed up for this opportunity".to_owned(),
        ));
    }
    //no existence pre-check on the opportunity, the fk surfaces that
    let signup_id = handler.insert_signup(signup).await?;
    return Ok(signup_id);
}

//cancellation is idempotent, removing nothing is still success
pub async fn capture_signup_removal(
    execution_handler: &Arc<Mutex<ExecutionHandler>>,
    user_id: &i32,
    opportunity_id: &i32,
) -> Result<u64, ApiError> {
    let mut handler = execution_handler.lock().await;
    let num_modified = handler.delete_signup(user_id, opportunity_id).await?;
    return Ok(num_modified);
}

pub async fn capture_role_update(
    execution_handler: &Arc<Mutex<ExecutionHandler>>,
    new_role: String,
    user_id: &i32,
) -> Result<(), ApiError> {
    let mut handler = execution_handler.lock().await;
    let num_modified = handler.update_user_role(new_role, user_id).await?;
    if num_modified == 0 {
        return Err(ApiError::NotFound("User not found".to_owned()));
    }
    return Ok(());
}
