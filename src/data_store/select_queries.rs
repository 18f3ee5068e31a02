//Dry violations on purpose, helps read and follow each specific query

pub const SELECT_USER_BY_USERNAME: &str = "
SELECT * FROM users
WHERE username = $1;
";

pub const SELECT_USER_BY_ID: &str = "
SELECT * FROM users
WHERE Id = $1;
";

pub const SELECT_ALL_USERS: &str = "
SELECT * FROM users;
";

pub const SELECT_ALL_OPPORTUNITIES: &str = "
SELECT * FROM opportunity;
";

pub const SELECT_OPPORTUNITY_BY_ID: &str = "
SELECT * FROM opportunity
WHERE Id = $1;
";

//search is case insensitive exact match
pub const SELECT_OPPORTUNITIES_BY_NAME: &str = "
SELECT * FROM opportunity
WHERE LOWER(name) = LOWER($1);
";

pub const SELECT_OPPORTUNITIES_BY_CREATOR: &str = "
SELECT * FROM opportunity
WHERE createdBy = $1;
";

pub const SELECT_SIGNUPS_FOR_USER: &str = "
SELECT * FROM signup
WHERE userId = $1;
";

pub const SELECT_SIGNUPS_FOR_OPPORTUNITY: &str = "
SELECT * FROM signup
WHERE opportunityId = $1;
";

pub const SELECT_SINGLE_SIGNUP: &str = "
SELECT * FROM signup
WHERE userId = $1 AND opportunityId = $2;
";
