//! Table creation for the record store
//!
//! Idempotent: safe to run on every startup against an existing file.

use sqlx::SqlitePool;

use super::DbError;

/// Create the `landlords` and `tenants` tables if they don't exist
pub async fn init(pool: &SqlitePool) -> Result<(), DbError> {
    tracing::info!("Ensuring record tables exist...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS landlords (
            id TEXT PRIMARY KEY,
            address TEXT,
            sqm REAL,
            rooms REAL,
            floor TEXT,
            gardenOrBalcony TEXT,
            parkingDetails TEXT,
            kitchenDetails TEXT,
            buildingAge TEXT,
            rentCold REAL,
            serviceCharges REAL,
            parkingRent REAL,
            otherCosts REAL,
            rentWarm REAL,
            zipCode TEXT,
            email TEXT,
            phone TEXT,
            propertyTitle TEXT,
            status TEXT,
            createdAt TEXT,
            images TEXT,
            isVerified INTEGER DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tenants (
            id TEXT PRIMARY KEY,
            desiredLocation TEXT,
            minSqm REAL,
            minRooms REAL,
            preferredFloor TEXT,
            gardenOrBalcony TEXT,
            parkingNeeded TEXT,
            kitchenIncluded TEXT,
            buildingCondition TEXT,
            maxRent REAL,
            householdIncome REAL,
            incomeType TEXT,
            incomeDetails TEXT,
            email TEXT,
            phone TEXT,
            personalIntro TEXT,
            profileImage TEXT,
            status TEXT,
            createdAt TEXT,
            isVerified INTEGER DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Record tables ready");
    Ok(())
}
