//! Tenant search profile

use serde::{Deserialize, Serialize};

use super::coerce;

/// Tenant profile, keyed like the `tenants` table columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[serde(default, deserialize_with = "coerce::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub desired_location: Option<String>,
    #[serde(default, deserialize_with = "coerce::number")]
    pub min_sqm: Option<f64>,
    #[serde(default, deserialize_with = "coerce::number")]
    pub min_rooms: Option<f64>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub preferred_floor: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub garden_or_balcony: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub parking_needed: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub kitchen_included: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub building_condition: Option<String>,
    #[serde(default, deserialize_with = "coerce::number")]
    pub max_rent: Option<f64>,
    #[serde(default, deserialize_with = "coerce::number")]
    pub household_income: Option<f64>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub income_type: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub income_details: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub personal_intro: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub profile_image: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "coerce::truthy")]
    pub is_verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn camel_case_keys() {
        let tenant: Tenant = serde_json::from_value(json!({
            "id": "T1",
            "desiredLocation": "Leipzig",
            "maxRent": 950,
            "householdIncome": "3200",
            "isVerified": "true"
        }))
        .unwrap();

        assert_eq!(tenant.desired_location.as_deref(), Some("Leipzig"));
        assert_eq!(tenant.max_rent, Some(950.0));
        assert_eq!(tenant.household_income, Some(3200.0));
        assert!(tenant.is_verified);

        let out = serde_json::to_value(&tenant).unwrap();
        assert_eq!(out["desiredLocation"], json!("Leipzig"));
        assert_eq!(out["profileImage"], json!(null));
        assert_eq!(out.as_object().unwrap().len(), 20);
    }
}
