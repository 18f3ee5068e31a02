//Dry violations on purpose, helps read and follow each specific query

//initial creation
pub const USER_TABLE_CREATION: &str = "
    CREATE TABLE IF NOT EXISTS users(
        Id SERIAL PRIMARY KEY,
        username VARCHAR(30) NOT NULL UNIQUE,
        passwordHash VARCHAR(255) NOT NULL,
        role VARCHAR(30) NOT NULL
    );
";
pub const OPPORTUNITY_TABLE_CREATION: &str = "
    CREATE TABLE IF NOT EXISTS opportunity(
        Id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        location VARCHAR(255) NOT NULL,
        description VARCHAR(1000),
        eventDate VARCHAR(30),
        startTime VARCHAR(30),
        endTime VARCHAR(30),
        contactName VARCHAR(255),
        contactEmail VARCHAR(255),
        contactPhone VARCHAR(30),
        createdBy int NOT NULL REFERENCES users(Id),
        modifiedBy VARCHAR(30)
    );
";
//signups disappear with their opportunity, and a user can only
//hold one signup per opportunity
pub const SIGNUP_TABLE_CREATION: &str = "
    CREATE TABLE IF NOT EXISTS signup(
        Id SERIAL PRIMARY KEY,
        userId int NOT NULL REFERENCES users(Id),
        opportunityId int NOT NULL REFERENCES opportunity(Id) ON DELETE CASCADE,
        hours DOUBLE PRECISION NOT NULL,
        UNIQUE(userId, opportunityId)
    );
";
