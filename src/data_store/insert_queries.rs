//Dry violations on purpose, helps read and follow each specific query

pub const INSERT_USER_QUERY: &str = "
INSERT INTO users(username, passwordHash, role)
VALUES($1, $2, $3)
RETURNING Id;
";

pub const INSERT_OPPORTUNITY_QUERY: &str = "
INSERT INTO opportunity(
    name, location, description,
    eventDate, startTime, endTime,
    contactName, contactEmail, contactPhone,
    createdBy, modifiedBy)
VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
RETURNING Id;
";

pub const INSERT_SIGNUP_QUERY: &str = "
INSERT INTO signup(userId, opportunityId, hours)
VALUES($1, $2, $3)
RETURNING Id;
";
