//! Landlord property record

use serde::{Deserialize, Serialize};

use super::{coerce, ImageRef};

/// Landlord property listing.
///
/// Serialized with the camelCase keys the web client uses, which are also
/// the column names in the `landlords` table. Absent fields become `null`,
/// `images` defaults to `[]` and `isVerified` to `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landlord {
    #[serde(default, deserialize_with = "coerce::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "coerce::number")]
    pub sqm: Option<f64>,
    #[serde(default, deserialize_with = "coerce::number")]
    pub rooms: Option<f64>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub floor: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub garden_or_balcony: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub parking_details: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub kitchen_details: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub building_age: Option<String>,
    #[serde(default, deserialize_with = "coerce::number")]
    pub rent_cold: Option<f64>,
    #[serde(default, deserialize_with = "coerce::number")]
    pub service_charges: Option<f64>,
    #[serde(default, deserialize_with = "coerce::number")]
    pub parking_rent: Option<f64>,
    #[serde(default, deserialize_with = "coerce::number")]
    pub other_costs: Option<f64>,
    #[serde(default, deserialize_with = "coerce::number")]
    pub rent_warm: Option<f64>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub zip_code: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub property_title: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "coerce::images")]
    pub images: Vec<ImageRef>,
    #[serde(default, deserialize_with = "coerce::truthy")]
    pub is_verified: bool,
}
