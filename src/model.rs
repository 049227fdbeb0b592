use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::RenewalStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum VehicleType {
    #[serde(rename = "2-wheeler")]
    TwoWheeler,
    #[serde(rename = "4-wheeler")]
    FourWheeler,
}

impl VehicleType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "2-wheeler" => Some(VehicleType::TwoWheeler),
            "4-wheeler" => Some(VehicleType::FourWheeler),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleModel {
    pub id: String,
    pub name: String,
    pub registration_number: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub insurance_expiry: NaiveDate,
    pub puc_expiry: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub puc_document: Option<String>,
}

// Raw form payload. Every field is optional at this layer so the validator
// can report all missing or malformed fields in one pass instead of failing
// at deserialization.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostVehicle {
    pub name: Option<String>,
    pub registration_number: Option<String>,
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub insurance_expiry: Option<String>,
    pub puc_expiry: Option<String>,
    pub insurance_document: Option<String>,
    pub puc_document: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleStatusModel {
    #[serde(flatten)]
    pub vehicle: VehicleModel,
    pub insurance_status: RenewalStatus,
    pub puc_status: RenewalStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSettings {
    pub alert_days: u32,
}

impl Default for AlertSettings {
    fn default() -> Self {
        AlertSettings { alert_days: 7 }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSettings {
    pub alert_days: Option<i64>,
}
