//Dry violations on purpose, helps read and follow each specific query

//full field replace, createdBy is never touched after insert
pub const UPDATE_OPPORTUNITY_QUERY: &str = "
UPDATE opportunity
SET name = $1,
    location = $2,
    description = $3,
    eventDate = $4,
    startTime = $5,
    endTime = $6,
    contactName = $7,
    contactEmail = $8,
    contactPhone = $9,
    modifiedBy = $10
WHERE Id = $11;
";

pub const UPDATE_USER_ROLE_QUERY: &str = "
UPDATE users
SET role = $1
WHERE Id = $2;
";
