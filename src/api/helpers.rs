/*
Small pre-checks and constructions shared by the handlers,
kept out of the core logic so each handler reads as
authenticate -> authorize -> capture/fetch.
*/
use crate::api::types::{LiveNotification, Opportunity, OpportunityInput};
use crate::common::errors::ApiError;
use crate::data_store::db_models::DBOpportunity;
use chrono::NaiveDate;

pub fn validate_registration_fields(username: &str, password: &str) -> Result<(), ApiError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "Username and password required".to_owned(),
        ));
    }
    //column width in the store
    if username.trim().len() > 30 {
        return Err(ApiError::Validation(
            "Username must be at most 30 characters".to_owned(),
        ));
    }
    return Ok(());
}

pub fn validate_opportunity_fields(input: &OpportunityInput) -> Result<(), ApiError> {
    if input.name.trim().is_empty() || input.location.trim().is_empty() {
        return Err(ApiError::Validation(
            "Missing 'name' or 'location'".to_owned(),
        ));
    }
    return Ok(());
}

pub fn validate_hours(hours: f64) -> Result<(), ApiError> {
    if !hours.is_finite() || hours <= 0.0 {
        return Err(ApiError::Validation(
            "Hours must be a positive number".to_owned(),
        ));
    }
    return Ok(());
}

//date only comparison, "past" includes today. A blank or
//unparseable date can never be upcoming so it lands in past too.
pub fn split_upcoming_and_past(
    opportunities: Vec<Opportunity>,
    today: NaiveDate,
) -> (Vec<Opportunity>, Vec<Opportunity>) {
    let mut upcoming: Vec<Opportunity> = Vec::new();
    let mut past: Vec<Opportunity> = Vec::new();
    for opportunity in opportunities {
        let parsed = NaiveDate::parse_from_str(&opportunity.event_date, "%Y-%m-%d");
        match parsed {
            Ok(event_date) if event_date > today => upcoming.push(opportunity),
            _ => past.push(opportunity),
        }
    }
    return (upcoming, past);
}

//builds the row struct for insert/replace. Required fields are
//trimmed, everything optional is stored exactly as sent(blank when
//the client left it out, this is a replace not a patch).
pub fn db_opportunity_from_input(
    id: i32,
    input: &OpportunityInput,
    creator_id: i32,
    editor_username: &str,
) -> DBOpportunity {
    return DBOpportunity {
        id,
        name: input.name.trim().to_owned(),
        location: input.location.trim().to_owned(),
        description: input.description.to_owned(),
        event_date: input.event_date.to_owned(),
        start_time: input.start_time.to_owned(),
        end_time: input.end_time.to_owned(),
        contact_name: input.contact_name.to_owned(),
        contact_email: input.contact_email.to_owned(),
        contact_phone: input.contact_phone.to_owned(),
        created_by: creator_id,
        modified_by: editor_username.to_owned(),
    };
}

pub fn opportunity_response_from_db(record: DBOpportunity, id: i32) -> Opportunity {
    return Opportunity {
        id,
        name: record.name,
        location: record.location,
        description: record.description,
        event_date: record.event_date,
        start_time: record.start_time,
        end_time: record.end_time,
        contact_name: record.contact_name,
        contact_email: record.contact_email,
        contact_phone: record.contact_phone,
        created_by: record.created_by,
        modified_by: record.modified_by,
    };
}

pub fn new_opportunity_notification(name: &str, location: &str) -> LiveNotification {
    return LiveNotification {
        notification_type: "opportunity".to_owned(),
        message: format!("New volunteer opportunity: {} at {}", name, location),
    };
}

pub fn updated_opportunity_notification(name: &str) -> LiveNotification {
    return LiveNotification {
        notification_type: "opportunity".to_owned(),
        message: format!("Volunteer opportunity updated: {}", name),
    };
}

pub fn welcome_notification() -> LiveNotification {
    return LiveNotification {
        notification_type: "welcome".to_owned(),
        message: "Connected to Good Neighbor live updates".to_owned(),
    };
}
