/*
abstracts usage of the sql execution handler by fetching and
converting rows to the wire types the handlers respond with.
*/
use crate::api::types::{Opportunity, Signup, SignupWithOpportunity, UserSummary};
use crate::common::errors::ApiError;
use crate::data_store::db_models::DBUser;
use crate::data_store::sql_execution_handler::ExecutionHandler;
use futures::lock::Mutex;
use std::sync::Arc;
use tokio_postgres::row::Row;

pub fn user_from_row(row: &Row) -> DBUser {
    return DBUser {
        id: row.get(0),
        username: row.get(1),
        password_hash: row.get(2),
        role: row.get(3),
    };
}

pub fn opportunity_from_row(row: &Row) -> Opportunity {
    return Opportunity {
        id: row.get(0),
        name: row.get(1),
        location: row.get(2),
        description: row.get(3),
        event_date: row.get(4),
        start_time: row.get(5),
        end_time: row.get(6),
        contact_name: row.get(7),
        contact_email: row.get(8),
        contact_phone: row.get(9),
        created_by: row.get(10),
        modified_by: row.get(11),
    };
}

pub fn signup_from_row(row: &Row) -> Signup {
    return Signup {
        id: row.get(0),
        user_id: row.get(1),
        opportunity_id: row.get(2),
        hours: row.get(3),
    };
}

pub async fn get_user_by_username(
    execution_handler: &Arc<Mutex<ExecutionHandler>>,
    username: &str,
) -> Result<Option<DBUser>, ApiError> {
    let mut handler = execution_handler.lock().await;
    let rows = handler.select_user_by_username(username).await?;
    if rows.len() == 1 {
        return Ok(Some(user_from_row(&rows[0])));
    }
    return Ok(None);
}

pub async fn get_all_users(
    execution_handler: &Arc<Mutex<ExecutionHandler>>,
) -> Result<Vec<UserSummary>, ApiError> {
    let mut handler = execution_handler.lock().await;
    let rows = handler.select_all_users().await?;
    let users = rows
        .iter()
        .map(|row| UserSummary {
            id: row.get(0),
            username: row.get(1),
            role: row.get(3),
        })
        .collect();
    return Ok(users);
}

pub async fn get_all_opportunities(
    execution_handler: &Arc<Mutex<ExecutionHandler>>,
) -> Result<Vec<Opportunity>, ApiError> {
    let mut handler = execution_handler.lock().await;
    let rows = handler.select_all_opportunities().await?;
    return Ok(rows.iter().map(opportunity_from_row).collect());
}

pub async fn get_opportunities_by_name(
    execution_handler: &Arc<Mutex<ExecutionHandler>>,
    name: &str,
) -> Result<Vec<Opportunity>, ApiError> {
    let mut handler = execution_handler.lock().await;
    let rows = handler.select_opportunities_by_name(name).await?;
    return Ok(rows.iter().map(opportunity_from_row).collect());
}

pub async fn get_opportunity_by_id(
    execution_handler: &Arc<Mutex<ExecutionHandler>>,
    opportunity_id: &i32,
) -> Result<Option<Opportunity>, ApiError> {
    let mut handler = execution_handler.lock().await;
    let rows = handler.select_opportunity_by_id(opportunity_id).await?;
    if rows.len() == 1 {
        return Ok(Some(opportunity_from_row(&rows[0])));
    }
    return Ok(None);
}

pub async fn get_opportunities_for_creator(
    execution_handler: &Arc<Mutex<ExecutionHandler>>,
    creator_id: &i32,
) -> Result<Vec<Opportunity>, ApiError> {
    let mut handler = execution_handler.lock().await;
    let rows = handler.select_opportunities_by_creator(creator_id).await?;
    return Ok(rows.iter().map(opportunity_from_row).collect());
}

//joins each signup row to the name/location of its opportunity and
//sums the pledged hours along the way. Two queries per signup is
//fine at this scale and mirrors how every other gather works here.
pub async fn get_signups_with_opportunities(
    execution_handler: &Arc<Mutex<ExecutionHandler>>,
    user_id: &i32,
) -> Result<(Vec<SignupWithOpportunity>, f64), ApiError> {
    let mut handler = execution_handler.lock().await;
    let signup_rows = handler.select_signups_for_user(user_id).await?;
    let mut joined: Vec<SignupWithOpportunity> = Vec::new();
    let mut total_hours: f64 = 0.0;
    for signup_row in signup_rows.iter() {
        let signup = signup_from_row(signup_row);
        let opportunity_rows = handler
            .select_opportunity_by_id(&signup.opportunity_id)
            .await?;
        //signups cascade away with their opportunity, so the row is there
        if opportunity_rows.len() == 1 {
            let opportunity = opportunity_from_row(&opportunity_rows[0]);
            total_hours += signup.hours;
            joined.push(SignupWithOpportunity {
                id: signup.id,
                opportunity_id: signup.opportunity_id,
                hours: signup.hours,
                name: opportunity.name,
                location: opportunity.location,
            });
        }
    }
    return Ok((joined, total_hours));
}

//signup count and pledged hour sum across a set of opportunities
pub async fn get_signup_totals_for_opportunities(
    execution_handler: &Arc<Mutex<ExecutionHandler>>,
    opportunity_ids: &[i32],
) -> Result<(usize, f64), ApiError> {
    let mut handler = execution_handler.lock().await;
    let mut total_signups: usize = 0;
    let mut total_hours: f64 = 0.0;
    for opportunity_id in opportunity_ids.iter() {
        let signup_rows = handler.select_signups_for_opportunity(opportunity_id).await?;
        total_signups += signup_rows.len();
        for signup_row in signup_rows.iter() {
            let hours: f64 = signup_row.get(3);
            total_hours += hours;
        }
    }
    return Ok((total_signups, total_hours));
}
