//! Tenant repository

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::Tenant;

/// Raw `tenants` row
#[derive(Debug, Clone, FromRow)]
#[sqlx(rename_all = "camelCase")]
struct TenantRow {
    id: Option<String>,
    desired_location: Option<String>,
    min_sqm: Option<f64>,
    min_rooms: Option<f64>,
    preferred_floor: Option<String>,
    garden_or_balcony: Option<String>,
    parking_needed: Option<String>,
    kitchen_included: Option<String>,
    building_condition: Option<String>,
    max_rent: Option<f64>,
    household_income: Option<f64>,
    income_type: Option<String>,
    income_details: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    personal_intro: Option<String>,
    profile_image: Option<String>,
    status: Option<String>,
    created_at: Option<String>,
    is_verified: Option<i64>,
}

impl TenantRow {
    fn into_tenant(self) -> Tenant {
        Tenant {
            id: self.id,
            desired_location: self.desired_location,
            min_sqm: self.min_sqm,
            min_rooms: self.min_rooms,
            preferred_floor: self.preferred_floor,
            garden_or_balcony: self.garden_or_balcony,
            parking_needed: self.parking_needed,
            kitchen_included: self.kitchen_included,
            building_condition: self.building_condition,
            max_rent: self.max_rent,
            household_income: self.household_income,
            income_type: self.income_type,
            income_details: self.income_details,
            email: self.email,
            phone: self.phone,
            personal_intro: self.personal_intro,
            profile_image: self.profile_image,
            status: self.status,
            created_at: self.created_at,
            is_verified: self.is_verified.unwrap_or(0) != 0,
        }
    }
}

/// Tenant repository
pub struct TenantRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TenantRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all tenants in storage order.
    pub async fn list(&self) -> Result<Vec<Tenant>, DbError> {
        let rows: Vec<TenantRow> = sqlx::query_as(
            r#"
            SELECT
                id, desiredLocation, minSqm, minRooms, preferredFloor, gardenOrBalcony,
                parkingNeeded, kitchenIncluded, buildingCondition, maxRent,
                householdIncome, incomeType, incomeDetails, email, phone,
                personalIntro, profileImage, status, createdAt, isVerified
            FROM tenants
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(TenantRow::into_tenant).collect())
    }

    /// Insert or fully replace the tenant with the record's id.
    pub async fn upsert(&self, tenant: &Tenant) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO tenants (
                id, desiredLocation, minSqm, minRooms, preferredFloor, gardenOrBalcony,
                parkingNeeded, kitchenIncluded, buildingCondition, maxRent,
                householdIncome, incomeType, incomeDetails, email, phone,
                personalIntro, profileImage, status, createdAt, isVerified
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(tenant.id.as_deref())
        .bind(tenant.desired_location.as_deref())
        .bind(tenant.min_sqm)
        .bind(tenant.min_rooms)
        .bind(tenant.preferred_floor.as_deref())
        .bind(tenant.garden_or_balcony.as_deref())
        .bind(tenant.parking_needed.as_deref())
        .bind(tenant.kitchen_included.as_deref())
        .bind(tenant.building_condition.as_deref())
        .bind(tenant.max_rent)
        .bind(tenant.household_income)
        .bind(tenant.income_type.as_deref())
        .bind(tenant.income_details.as_deref())
        .bind(tenant.email.as_deref())
        .bind(tenant.phone.as_deref())
        .bind(tenant.personal_intro.as_deref())
        .bind(tenant.profile_image.as_deref())
        .bind(tenant.status.as_deref())
        .bind(tenant.created_at.as_deref())
        .bind(i64::from(tenant.is_verified))
        .execute(self.pool)
        .await?;

        tracing::debug!(id = ?tenant.id, "tenant upserted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, schema};

    async fn test_pool() -> (tempfile::TempDir, SqlitePool) {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool(&dir.path().join("tenants.db")).await.unwrap();
        schema::init(&pool).await.unwrap();
        (dir, pool)
    }

    #[tokio::test]
    async fn upsert_then_list() {
        let (_dir, pool) = test_pool().await;
        let repo = TenantRepo::new(&pool);

        let tenant = Tenant {
            id: Some("T1".into()),
            desired_location: Some("Dresden".into()),
            max_rent: Some(1100.0),
            personal_intro: Some("Ruhige Familie <3".into()),
            is_verified: true,
            ..Tenant::default()
        };
        repo.upsert(&tenant).await.unwrap();

        assert_eq!(repo.list().await.unwrap(), vec![tenant]);
    }

    #[tokio::test]
    async fn second_upsert_overwrites() {
        let (_dir, pool) = test_pool().await;
        let repo = TenantRepo::new(&pool);

        repo.upsert(&Tenant {
            id: Some("T1".into()),
            min_rooms: Some(3.0),
            ..Tenant::default()
        })
        .await
        .unwrap();
        repo.upsert(&Tenant {
            id: Some("T1".into()),
            email: Some("neu@example.org".into()),
            ..Tenant::default()
        })
        .await
        .unwrap();

        let tenants = repo.list().await.unwrap();
        assert_eq!(tenants.len(), 1);
        assert_eq!(tenants[0].min_rooms, None);
        assert_eq!(tenants[0].email.as_deref(), Some("neu@example.org"));
    }

    #[tokio::test]
    async fn tables_are_independent() {
        let (_dir, pool) = test_pool().await;

        TenantRepo::new(&pool)
            .upsert(&Tenant {
                id: Some("X".into()),
                ..Tenant::default()
            })
            .await
            .unwrap();

        let landlords = crate::db::LandlordRepo::new(&pool).list().await.unwrap();
        assert!(landlords.is_empty());
    }
}
