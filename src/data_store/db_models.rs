//There is no ORM, these are just structs used for passing required fields
//for insertion and gather

pub struct DBUser {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

pub struct DBOpportunity {
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

pub struct DBSignup {
    pub id: i32,
    pub user_id: i32,
    pub opportunity_id: i32,
    pub hours: f64,
}
