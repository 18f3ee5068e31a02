//Dry violations on purpose, helps read and follow each specific query

pub const DELETE_OPPORTUNITY_QUERY: &str = "
DELETE FROM opportunity
WHERE Id = $1;
";

pub const DELETE_SIGNUP_QUERY: &str = "
DELETE FROM signup
WHERE userId = $1 AND opportunityId = $2;
";
