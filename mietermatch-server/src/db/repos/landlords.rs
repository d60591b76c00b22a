//! Landlord repository
//!
//! - list: all rows, images decoded from JSON text, flag as bool
//! - upsert: INSERT OR REPLACE by id

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::{image, Landlord};

/// Raw `landlords` row
#[derive(Debug, Clone, FromRow)]
#[sqlx(rename_all = "camelCase")]
struct LandlordRow {
    id: Option<String>,
    address: Option<String>,
    sqm: Option<f64>,
    rooms: Option<f64>,
    floor: Option<String>,
    garden_or_balcony: Option<String>,
    parking_details: Option<String>,
    kitchen_details: Option<String>,
    building_age: Option<String>,
    rent_cold: Option<f64>,
    service_charges: Option<f64>,
    parking_rent: Option<f64>,
    other_costs: Option<f64>,
    rent_warm: Option<f64>,
    zip_code: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    property_title: Option<String>,
    status: Option<String>,
    created_at: Option<String>,
    images: Option<String>,
    is_verified: Option<i64>,
}

impl LandlordRow {
    fn into_landlord(self) -> Result<Landlord, DbError> {
        let images = image::decode(self.images.as_deref()).map_err(|source| DbError::CorruptJson {
            table: "landlords",
            column: "images",
            id: self.id.clone().unwrap_or_default(),
            source,
        })?;

        Ok(Landlord {
            id: self.id,
            address: self.address,
            sqm: self.sqm,
            rooms: self.rooms,
            floor: self.floor,
            garden_or_balcony: self.garden_or_balcony,
            parking_details: self.parking_details,
            kitchen_details: self.kitchen_details,
            building_age: self.building_age,
            rent_cold: self.rent_cold,
            service_charges: self.service_charges,
            parking_rent: self.parking_rent,
            other_costs: self.other_costs,
            rent_warm: self.rent_warm,
            zip_code: self.zip_code,
            email: self.email,
            phone: self.phone,
            property_title: self.property_title,
            status: self.status,
            created_at: self.created_at,
            images,
            is_verified: self.is_verified.unwrap_or(0) != 0,
        })
    }
}

/// Landlord repository
pub struct LandlordRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> LandlordRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all landlords in storage order.
    pub async fn list(&self) -> Result<Vec<Landlord>, DbError> {
        let rows: Vec<LandlordRow> = sqlx::query_as(
            r#"
            SELECT
                id, address, sqm, rooms, floor, gardenOrBalcony, parkingDetails,
                kitchenDetails, buildingAge, rentCold, serviceCharges, parkingRent,
                otherCosts, rentWarm, zipCode, email, phone, propertyTitle, status,
                createdAt, images, isVerified
            FROM landlords
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(LandlordRow::into_landlord).collect()
    }

    /// Insert or fully replace the landlord with the record's id.
    ///
    /// Every column is written; fields missing from the record overwrite
    /// previous values with NULL.
    pub async fn upsert(&self, landlord: &Landlord) -> Result<(), DbError> {
        let images = image::encode(&landlord.images).map_err(|source| DbError::Encode {
            column: "images",
            source,
        })?;

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO landlords (
                id, address, sqm, rooms, floor, gardenOrBalcony, parkingDetails,
                kitchenDetails, buildingAge, rentCold, serviceCharges, parkingRent,
                otherCosts, rentWarm, zipCode, email, phone, propertyTitle, status,
                createdAt, images, isVerified
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(landlord.id.as_deref())
        .bind(landlord.address.as_deref())
        .bind(landlord.sqm)
        .bind(landlord.rooms)
        .bind(landlord.floor.as_deref())
        .bind(landlord.garden_or_balcony.as_deref())
        .bind(landlord.parking_details.as_deref())
        .bind(landlord.kitchen_details.as_deref())
        .bind(landlord.building_age.as_deref())
        .bind(landlord.rent_cold)
        .bind(landlord.service_charges)
        .bind(landlord.parking_rent)
        .bind(landlord.other_costs)
        .bind(landlord.rent_warm)
        .bind(landlord.zip_code.as_deref())
        .bind(landlord.email.as_deref())
        .bind(landlord.phone.as_deref())
        .bind(landlord.property_title.as_deref())
        .bind(landlord.status.as_deref())
        .bind(landlord.created_at.as_deref())
        .bind(images)
        .bind(i64::from(landlord.is_verified))
        .execute(self.pool)
        .await?;

        tracing::debug!(id = ?landlord.id, "landlord upserted");
        Ok(())
    }
}
