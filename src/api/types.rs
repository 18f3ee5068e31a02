/*
All of the types that cross the HTTP or WebSocket boundary.
Field names here are the wire contract the browser client reads,
the camelCase column names in the store never leak out.
*/
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Organization,
    Admin,
}

impl Role {
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "user" => Some(Role::User),
            "organization" => Some(Role::Organization),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Organization => "organization",
            Role::Admin => "admin",
        }
    }
}

//Gathering from client

#[derive(Deserialize, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    //only admins may hand out anything other than `user`
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Deserialize, Serialize)]
pub struct OpportunityInput {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
}

#[derive(Deserialize, Serialize)]
pub struct SignupRequest {
    pub opportunity_id: i32,
    pub hours: f64,
}

#[derive(Deserialize, Serialize)]
pub struct RoleChangeRequest {
    pub role: String,
}

#[derive(Deserialize)]
pub struct EventsQuery {
    pub name: Option<String>,
}

//Sending to client

#[derive(Deserialize, Serialize)]
pub struct RegisteredUser {
    pub id: i32,
    pub username: String,
}

#[derive(Deserialize, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub user: RegisteredUser,
}

#[derive(Deserialize, Serialize)]
pub struct LoginResponse {
    pub username: String,
    pub role: Role,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct Opportunity {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: String,
    pub event_date: String,
    pub start_time: String,
    pub end_time: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub created_by: i32,
    pub modified_by: String,
}

#[derive(Deserialize, Serialize)]
pub struct Signup {
    pub id: i32,
    pub user_id: i32,
    pub opportunity_id: i32,
    pub hours: f64,
}

#[derive(Deserialize, Serialize)]
pub struct SignupCreatedResponse {
    pub success: bool,
    pub signup: Signup,
}

//a signup joined with the opportunity it is for
#[derive(Deserialize, Serialize)]
pub struct SignupWithOpportunity {
    pub id: i32,
    pub opportunity_id: i32,
    pub hours: f64,
    pub name: String,
    pub location: String,
}

#[derive(Deserialize, Serialize)]
pub struct SignupListResponse {
    pub signups: Vec<SignupWithOpportunity>,
    #[serde(rename = "totalHours")]
    pub total_hours: f64,
}

#[derive(Deserialize, Serialize)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub role: String,
}

#[derive(Deserialize, Serialize)]
pub struct OrgStats {
    pub event_count: usize,
    pub total_signups: usize,
    pub total_hours: f64,
}

#[derive(Deserialize, Serialize)]
pub struct OrgDashboardResponse {
    pub stats: OrgStats,
    pub upcoming: Vec<Opportunity>,
    pub past: Vec<Opportunity>,
}

#[derive(Deserialize, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

//frames pushed over the live update channel
#[derive(Deserialize, Serialize)]
pub struct LiveNotification {
    #[serde(rename = "type")]
    pub notification_type: String,
    pub message: String,
}
