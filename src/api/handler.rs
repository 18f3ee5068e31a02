/*
Handles all functionality that has to be carried out by the HTTP
surface and handles repetitive pre-checks.

For example:
    before an opportunity is replaced, does it exist?
    before a role is handed out, is the requester an admin?

Every handler reads the same way:
authenticate -> authorize -> capture/fetch -> respond.
*/
use crate::api::data_capturer;
use crate::api::data_fetcher;
use crate::api::helpers;
use crate::api::permission_configs;
use crate::api::permission_configs::GatedAction;
use crate::api::types::{
    EventsQuery, LoginResponse, MessageResponse, OpportunityInput, OrgDashboardResponse, OrgStats,
    RegisterRequest, RegisterResponse, RegisteredUser, Role, RoleChangeRequest, Signup,
    SignupCreatedResponse, SignupListResponse, SignupRequest, SuccessResponse,
};
use crate::auth::authentication_handler;
use crate::auth::password_handler;
use crate::common::errors::ApiError;
use crate::common::response_logic;
use crate::data_store::db_models::{DBSignup, DBUser};
use crate::data_store::sql_execution_handler::ExecutionHandler;
use crate::logging;
use crate::state::state::ServerState;
use crate::ws_fan;
use chrono::Local;
use futures::lock::Mutex;
use std::sync::Arc;
use tokio::sync::RwLock;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

pub async fn register(
    body: RegisterRequest,
    auth_header: Option<String>,
    execution_handler: Arc<Mutex<ExecutionHandler>>,
) -> Result<impl Reply, Rejection> {
    helpers::validate_registration_fields(&body.username, &body.password)?;
    let requested_role = match &body.role {
        Some(value) => {
            Role::parse(value).ok_or_else(|| ApiError::Validation("Invalid role".to_owned()))?
        }
        None => Role::User,
    };
    //self registration is open, elevated roles are only handed out by admins
    if requested_role != Role::User {
        let requester =
            authentication_handler::authenticate_request(&auth_header, &execution_handler).await?;
        permission_configs::ensure_allowed(GatedAction::RegisterWithElevatedRole, &requester.role)?;
    }

    let username = body.username.trim().to_owned();
    let password_hash =
        password_handler::hash_password(&body.password, &password_handler::pepper());
    let new_user = DBUser {
        id: -1,
        username: username.to_owned(),
        password_hash,
        role: requested_role.as_str().to_owned(),
    };
    let user_id = data_capturer::capture_new_user(&execution_handler, &new_user).await?;
    logging::console::log_event(&format!("registered {} {}", requested_role.as_str(), username));

    let response = RegisterResponse {
        success: true,
        user: RegisteredUser {
            id: user_id,
            username,
        },
    };
    return Ok(response_logic::json_with_status(
        &response,
        StatusCode::CREATED,
    ));
}

pub async fn login(
    auth_header: Option<String>,
    execution_handler: Arc<Mutex<ExecutionHandler>>,
) -> Result<impl Reply, Rejection> {
    let user =
        authentication_handler::authenticate_request(&auth_header, &execution_handler).await?;
    let response = LoginResponse {
        username: user.username,
        role: user.role,
    };
    return Ok(response_logic::json_with_status(&response, StatusCode::OK));
}

pub async fn list_opportunities(
    query: EventsQuery,
    execution_handler: Arc<Mutex<ExecutionHandler>>,
) -> Result<impl Reply, Rejection> {
    match query.name {
        Some(ref name) if !name.trim().is_empty() => {
            let matches =
                data_fetcher::get_opportunities_by_name(&execution_handler, name.trim()).await?;
            if matches.is_empty() {
                return Err(ApiError::NotFound("No opportunities found".to_owned()).into());
            }
            return Ok(response_logic::json_with_status(&matches, StatusCode::OK));
        }
        _ => {
            let all_opportunities =
                data_fetcher::get_all_opportunities(&execution_handler).await?;
            return Ok(response_logic::json_with_status(
                &all_opportunities,
                StatusCode::OK,
            ));
        }
    }
}

pub async fn get_opportunity(
    opportunity_id: i32,
    execution_handler: Arc<Mutex<ExecutionHandler>>,
) -> Result<impl Reply, Rejection> {
    let opportunity = data_fetcher::get_opportunity_by_id(&execution_handler, &opportunity_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Opportunity not found".to_owned()))?;
    return Ok(response_logic::json_with_status(&opportunity, StatusCode::OK));
}

pub async fn create_opportunity(
    body: OpportunityInput,
    auth_header: Option<String>,
    execution_handler: Arc<Mutex<ExecutionHandler>>,
    server_state: Arc<RwLock<ServerState>>,
) -> Result<impl Reply, Rejection> {
    let creator =
        authentication_handler::authenticate_request(&auth_header, &execution_handler).await?;
    permission_configs::ensure_allowed(GatedAction::ManageOpportunities, &creator.role)?;
    helpers::validate_opportunity_fields(&body)?;

    let record = helpers::db_opportunity_from_input(-1, &body, creator.user_id, &creator.username);
    let opportunity_id = data_capturer::capture_new_opportunity(&execution_handler, &record).await?;
    let created = helpers::opportunity_response_from_db(record, opportunity_id);

    logging::console::log_event(&format!(
        "{} created opportunity '{}'",
        creator.username, created.name
    ));
    let notification = helpers::new_opportunity_notification(&created.name, &created.location);
    ws_fan::fan::broadcast_update(&notification, &server_state).await;

    return Ok(response_logic::json_with_status(
        &created,
        StatusCode::CREATED,
    ));
}

pub async fn update_opportunity(
    opportunity_id: i32,
    body: OpportunityInput,
    auth_header: Option<String>,
    execution_handler: Arc<Mutex<ExecutionHandler>>,
    server_state: Arc<RwLock<ServerState>>,
) -> Result<impl Reply, Rejection> {
    let editor =
        authentication_handler::authenticate_request(&auth_header, &execution_handler).await?;
    permission_configs::ensure_allowed(GatedAction::ManageOpportunities, &editor.role)?;
    helpers::validate_opportunity_fields(&body)?;

    //full replace, fields missing from the body end up blank.
    //createdBy is never part of the update statement.
    let record = helpers::db_opportunity_from_input(opportunity_id, &body, -1, &editor.username);
    data_capturer::capture_opportunity_update(&execution_handler, &record).await?;
    let updated = data_fetcher::get_opportunity_by_id(&execution_handler, &opportunity_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Opportunity not found".to_owned()))?;

    logging::console::log_event(&format!(
        "{} updated opportunity '{}'",
        editor.username, updated.name
    ));
    let notification = helpers::updated_opportunity_notification(&updated.name);
    ws_fan::fan::broadcast_update(&notification, &server_state).await;

    return Ok(response_logic::json_with_status(&updated, StatusCode::OK));
}

pub async fn delete_opportunity(
    opportunity_id: i32,
    auth_header: Option<String>,
    execution_handler: Arc<Mutex<ExecutionHandler>>,
) -> Result<impl Reply, Rejection> {
    let remover =
        authentication_handler::authenticate_request(&auth_header, &execution_handler).await?;
    permission_configs::ensure_allowed(GatedAction::ManageOpportunities, &remover.role)?;

    data_capturer::capture_opportunity_removal(&execution_handler, &opportunity_id).await?;
    logging::console::log_event(&format!(
        "{} deleted opportunity {}",
        remover.username, opportunity_id
    ));
    let response = SuccessResponse { success: true };
    return Ok(response_logic::json_with_status(&response, StatusCode::OK));
}

pub async fn sign_up_for_opportunity(
    body: SignupRequest,
    auth_header: Option<String>,
    execution_handler: Arc<Mutex<ExecutionHandler>>,
) -> Result<impl Reply, Rejection> {
    let requester =
        authentication_handler::authenticate_request(&auth_header, &execution_handler).await?;
    permission_configs::ensure_allowed(GatedAction::SignUpForOpportunity, &requester.role)?;
    helpers::validate_hours(body.hours)?;

    //re-resolve the identity to a stored row in case the account
    //disappeared between authentication and now
    let user = data_fetcher::get_user_by_username(&execution_handler, &requester.username)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_owned()))?;

    let record = DBSignup {
        id: -1,
        user_id: user.id,
        opportunity_id: body.opportunity_id,
        hours: body.hours,
    };
    let signup_id = data_capturer::capture_new_signup(&execution_handler, &record).await?;

    let response = SignupCreatedResponse {
        success: true,
        signup: Signup {
            id: signup_id,
            user_id: user.id,
            opportunity_id: body.opportunity_id,
            hours: body.hours,
        },
    };
    return Ok(response_logic::json_with_status(
        &response,
        StatusCode::CREATED,
    ));
}

pub async fn list_signups_for_user(
    auth_header: Option<String>,
    execution_handler: Arc<Mutex<ExecutionHandler>>,
) -> Result<impl Reply, Rejection> {
    let requester =
        authentication_handler::authenticate_request(&auth_header, &execution_handler).await?;
    let (signups, total_hours) =
        data_fetcher::get_signups_with_opportunities(&execution_handler, &requester.user_id)
            .await?;
    let response = SignupListResponse {
        signups,
        total_hours,
    };
    return Ok(response_logic::json_with_status(&response, StatusCode::OK));
}

pub async fn cancel_signup(
    opportunity_id: i32,
    auth_header: Option<String>,
    execution_handler: Arc<Mutex<ExecutionHandler>>,
) -> Result<impl Reply, Rejection> {
    let requester =
        authentication_handler::authenticate_request(&auth_header, &execution_handler).await?;
    permission_configs::ensure_allowed(GatedAction::CancelOwnSignup, &requester.role)?;

    //idempotent, cancelling a signup that never existed is still success
    data_capturer::capture_signup_removal(&execution_handler, &requester.user_id, &opportunity_id)
        .await?;
    let response = MessageResponse {
        message: "Signup cancelled".to_owned(),
    };
    return Ok(response_logic::json_with_status(&response, StatusCode::OK));
}

pub async fn list_users(
    auth_header: Option<String>,
    execution_handler: Arc<Mutex<ExecutionHandler>>,
) -> Result<impl Reply, Rejection> {
    let requester =
        authentication_handler::authenticate_request(&auth_header, &execution_handler).await?;
    permission_configs::ensure_allowed(GatedAction::ManageUsers, &requester.role)?;

    let users = data_fetcher::get_all_users(&execution_handler).await?;
    return Ok(response_logic::json_with_status(&users, StatusCode::OK));
}

pub async fn change_user_role(
    user_id: i32,
    body: RoleChangeRequest,
    auth_header: Option<String>,
    execution_handler: Arc<Mutex<ExecutionHandler>>,
) -> Result<impl Reply, Rejection> {
    let requester =
        authentication_handler::authenticate_request(&auth_header, &execution_handler).await?;
    permission_configs::ensure_allowed(GatedAction::ManageUsers, &requester.role)?;
    let new_role =
        Role::parse(&body.role).ok_or_else(|| ApiError::Validation("Invalid role".to_owned()))?;

    data_capturer::capture_role_update(
        &execution_handler,
        new_role.as_str().to_owned(),
        &user_id,
    )
    .await?;
    logging::console::log_event(&format!(
        "{} changed role of user {} to {}",
        requester.username,
        user_id,
        new_role.as_str()
    ));
    let response = SuccessResponse { success: true };
    return Ok(response_logic::json_with_status(&response, StatusCode::OK));
}

pub async fn org_dashboard(
    auth_header: Option<String>,
    execution_handler: Arc<Mutex<ExecutionHandler>>,
) -> Result<impl Reply, Rejection> {
    let requester =
        authentication_handler::authenticate_request(&auth_header, &execution_handler).await?;
    permission_configs::ensure_allowed(GatedAction::ViewOrgDashboard, &requester.role)?;

    let opportunities =
        data_fetcher::get_opportunities_for_creator(&execution_handler, &requester.user_id)
            .await?;
    let opportunity_ids: Vec<i32> = opportunities.iter().map(|o| o.id).collect();
    let (total_signups, total_hours) =
        data_fetcher::get_signup_totals_for_opportunities(&execution_handler, &opportunity_ids)
            .await?;

    let stats = OrgStats {
        event_count: opportunities.len(),
        total_signups,
        total_hours,
    };
    let today = Local::now().date_naive();
    let (upcoming, past) = helpers::split_upcoming_and_past(opportunities, today);

    let response = OrgDashboardResponse {
        stats,
        upcoming,
        past,
    };
    return Ok(response_logic::json_with_status(&response, StatusCode::OK));
}
