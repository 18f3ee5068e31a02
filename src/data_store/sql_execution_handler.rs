use crate::data_store::db_models::{DBOpportunity, DBSignup, DBUser};
use crate::data_store::creation_queries;
use crate::data_store::delete_queries;
use crate::data_store::insert_queries;
use crate::data_store::select_queries;
use crate::data_store::update_queries;
use tokio_postgres::{row::Row, Client, Error};

pub struct ExecutionHandler {
    client: Client,
}

//Handles the main sql execution by making usage of the DB types.
//DRY VIOLATIONS on purpose!, helps follow the data to the point of
//execution.
impl ExecutionHandler {
    pub fn new(client_val: Client) -> Self {
        Self { client: client_val }
    }

    //creation
    pub async fn create_table_if_needed(&mut self, query: &str) -> Result<(), Error> {
        self.client.query(query, &[]).await?;
        return Ok(());
    }

    pub async fn create_all_tables_if_needed(&mut self) -> Result<(), Error> {
        self.create_table_if_needed(creation_queries::USER_TABLE_CREATION)
            .await?;
        self.create_table_if_needed(creation_queries::OPPORTUNITY_TABLE_CREATION)
            .await?;
        self.create_table_if_needed(creation_queries::SIGNUP_TABLE_CREATION)
            .await?;
        return Ok(());
    }

    //insertion
    pub async fn insert_user(&mut self, user: &DBUser) -> Result<i32, Error> {
        let query = insert_queries::INSERT_USER_QUERY;
        let rows = self
            .client
            .query(query, &[&user.username, &user.password_hash, &user.role])
            .await?;
        let user_id: i32 = rows[0].get(0);
        return Ok(user_id);
    }

    pub async fn insert_opportunity(&mut self, opportunity: &DBOpportunity) -> Result<i32, Error> {
        let query = insert_queries::INSERT_OPPORTUNITY_QUERY;
        let rows = self
            .client
            .query(
                query,
                &[
                    &opportunity.name,
                    &opportunity.location,
                    &opportunity.description,
                    &opportunity.event_date,
                    &opportunity.start_time,
                    &opportunity.end_time,
                    &opportunity.contact_name,
                    &opportunity.contact_email,
                    &opportunity.contact_phone,
                    &opportunity.created_by,
                    &opportunity.modified_by,
                ],
            )
            .await?;
        let opportunity_id: i32 = rows[0].get(0);
        return Ok(opportunity_id);
    }

    pub async fn insert_signup(&mut self, signup: &DBSignup) -> Result<i32, Error> {
        let query = insert_queries::INSERT_SIGNUP_QUERY;
        let rows = self
            .client
            .query(
                query,
                &[&signup.user_id, &signup.opportunity_id, &signup.hours],
            )
            .await?;
        let signup_id: i32 = rows[0].get(0);
        return Ok(signup_id);
    }

    //deletion
    pub async fn delete_opportunity(&mut self, opportunity_id: &i32) -> Result<u64, Error> {
        let query = delete_queries::DELETE_OPPORTUNITY_QUERY;
        let num_modified = self.client.execute(query, &[opportunity_id]).await?;
        return Ok(num_modified);
    }

    pub async fn delete_signup(
        &mut self,
        user_id: &i32,
        opportunity_id: &i32,
    ) -> Result<u64, Error> {
        let query = delete_queries::DELETE_SIGNUP_QUERY;
        let num_modified = self.client.execute(query, &[user_id, opportunity_id]).await?;
        return Ok(num_modified);
    }

    //update
    pub async fn update_opportunity(&mut self, opportunity: &DBOpportunity) -> Result<u64, Error> {
        let query = update_queries::UPDATE_OPPORTUNITY_QUERY;
        let num_modified = self
            .client
            .execute(
                query,
                &[
                    &opportunity.name,
                    &opportunity.location,
                    &opportunity.description,
                    &opportunity.event_date,
                    &opportunity.start_time,
                    &opportunity.end_time,
                    &opportunity.contact_name,
                    &opportunity.contact_email,
                    &opportunity.contact_phone,
                    &opportunity.modified_by,
                    &opportunity.id,
                ],
            )
            .await?;
        return Ok(num_modified);
    }

    pub async fn update_user_role(&mut self, new_role: String, user_id: &i32) -> Result<u64, Error> {
        let query = update_queries::UPDATE_USER_ROLE_QUERY;
        let num_modified = self.client.execute(query, &[&new_role, user_id]).await?;
        return Ok(num_modified);
    }

    //select
    pub async fn select_user_by_username(&mut self, username: &str) -> Result<Vec<Row>, Error> {
        let query = select_queries::SELECT_USER_BY_USERNAME;
        let result: Vec<Row> = self.client.query(query, &[&username]).await?;
        return Ok(result);
    }

    pub async fn select_user_by_id(&mut self, user_id: &i32) -> Result<Vec<Row>, Error> {
        let query = select_queries::SELECT_USER_BY_ID;
        let result: Vec<Row> = self.client.query(query, &[user_id]).await?;
        return Ok(result);
    }

    pub async fn select_all_users(&mut self) -> Result<Vec<Row>, Error> {
        let query = select_queries::SELECT_ALL_USERS;
        let result: Vec<Row> = self.client.query(query, &[]).await?;
        return Ok(result);
    }

    pub async fn select_all_opportunities(&mut self) -> Result<Vec<Row>, Error> {
        let query = select_queries::SELECT_ALL_OPPORTUNITIES;
        let result: Vec<Row> = self.client.query(query, &[]).await?;
        return Ok(result);
    }

    pub async fn select_opportunity_by_id(
        &mut self,
        opportunity_id: &i32,
    ) -> Result<Vec<Row>, Error> {
        let query = select_queries::SELECT_OPPORTUNITY_BY_ID;
        let result: Vec<Row> = self.client.query(query, &[opportunity_id]).await?;
        return Ok(result);
    }

    pub async fn select_opportunities_by_name(&mut self, name: &str) -> Result<Vec<Row>, Error> {
        let query = select_queries::SELECT_OPPORTUNITIES_BY_NAME;
        let result: Vec<Row> = self.client.query(query, &[&name]).await?;
        return Ok(result);
    }

    pub async fn select_opportunities_by_creator(
        &mut self,
        creator_id: &i32,
    ) -> Result<Vec<Row>, Error> {
        let query = select_queries::SELECT_OPPORTUNITIES_BY_CREATOR;
        let result: Vec<Row> = self.client.query(query, &[creator_id]).await?;
        return Ok(result);
    }

    pub async fn select_signups_for_user(&mut self, user_id: &i32) -> Result<Vec<Row>, Error> {
        let query = select_queries::SELECT_SIGNUPS_FOR_USER;
        let result: Vec<Row> = self.client.query(query, &[user_id]).await?;
        return Ok(result);
    }

    pub async fn select_signups_for_opportunity(
        &mut self,
        opportunity_id: &i32,
    ) -> Result<Vec<Row>, Error> {
        let query = select_queries::SELECT_SIGNUPS_FOR_OPPORTUNITY;
        let result: Vec<Row> = self.client.query(query, &[opportunity_id]).await?;
        return Ok(result);
    }

    //SELECTS one signup for one user for one opportunity
    pub async fn select_single_signup(
        &mut self,
        user_id: &i32,
        opportunity_id: &i32,
    ) -> Result<Vec<Row>, Error> {
        let query = select_queries::SELECT_SINGLE_SIGNUP;
        let result: Vec<Row> = self.client.query(query, &[user_id, opportunity_id]).await?;
        return Ok(result);
    }
}
