use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use crate::model::{AlertSettings, PostSettings, PostVehicle, VehicleModel, VehicleType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    Required,
    TooShort,
    InvalidEnum,
    InvalidDate,
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Field name mapped to every violation found for it. Validation never stops
/// at the first failure, so one submission reports all of its problems.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<FieldError>>,
}

impl FieldErrors {
    fn push(&mut self, field: &str, kind: ErrorKind, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(FieldError {
                kind,
                message: message.to_string(),
            });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&Vec<FieldError>> {
        self.errors.get(field)
    }
}

/// Validated form fields, minus the identifier. The id is assigned by the
/// store: a fresh sequential id on create, the existing id on edit.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedVehicle {
    pub name: String,
    pub registration_number: String,
    pub vehicle_type: VehicleType,
    pub insurance_expiry: NaiveDate,
    pub puc_expiry: NaiveDate,
    pub insurance_document: Option<String>,
    pub puc_document: Option<String>,
}

impl ValidatedVehicle {
    pub fn into_record(self, id: String) -> VehicleModel {
        VehicleModel {
            id,
            name: self.name,
            registration_number: self.registration_number,
            vehicle_type: self.vehicle_type,
            insurance_expiry: self.insurance_expiry,
            puc_expiry: self.puc_expiry,
            insurance_document: self.insurance_document,
            puc_document: self.puc_document,
        }
    }
}

pub fn validate(input: &PostVehicle) -> Result<ValidatedVehicle, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = check_text(
        &input.name,
        "name",
        2,
        "Vehicle name must be at least 2 characters.",
        &mut errors,
    );
    let registration_number = check_text(
        &input.registration_number,
        "registrationNumber",
        4,
        "Please enter a valid registration number.",
        &mut errors,
    );

    let vehicle_type = match input.vehicle_type.as_deref() {
        None | Some("") => {
            errors.push(
                "type",
                ErrorKind::Required,
                "You need to select a vehicle type.",
            );
            None
        }
        Some(raw) => match VehicleType::parse(raw) {
            Some(vehicle_type) => Some(vehicle_type),
            None => {
                errors.push(
                    "type",
                    ErrorKind::InvalidEnum,
                    "Vehicle type must be either 2-wheeler or 4-wheeler.",
                );
                None
            }
        },
    };

    let insurance_expiry = check_date(
        &input.insurance_expiry,
        "insuranceExpiry",
        "Insurance expiry date is required.",
        &mut errors,
    );
    let puc_expiry = check_date(
        &input.puc_expiry,
        "pucExpiry",
        "PUC expiry date is required.",
        &mut errors,
    );

    match (
        name,
        registration_number,
        vehicle_type,
        insurance_expiry,
        puc_expiry,
    ) {
        (
            Some(name),
            Some(registration_number),
            Some(vehicle_type),
            Some(insurance_expiry),
            Some(puc_expiry),
        ) if errors.is_empty() => Ok(ValidatedVehicle {
            name,
            registration_number,
            vehicle_type,
            insurance_expiry,
            puc_expiry,
            insurance_document: input.insurance_document.clone(),
            puc_document: input.puc_document.clone(),
        }),
        _ => Err(errors),
    }
}

pub fn validate_settings(input: &PostSettings) -> Result<AlertSettings, FieldErrors> {
    let mut errors = FieldErrors::default();
    match input.alert_days {
        None => errors.push("alertDays", ErrorKind::Required, "Please enter a number."),
        Some(days) if days < 1 => {
            errors.push("alertDays", ErrorKind::OutOfRange, "Must be at least 1 day.")
        }
        Some(days) if days > 90 => errors.push(
            "alertDays",
            ErrorKind::OutOfRange,
            "Cannot be more than 90 days.",
        ),
        Some(days) => {
            return Ok(AlertSettings {
                alert_days: days as u32,
            })
        }
    }
    Err(errors)
}

fn check_text(
    value: &Option<String>,
    field: &str,
    min_len: usize,
    too_short: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match value {
        None => {
            errors.push(field, ErrorKind::Required, "Required");
            None
        }
        Some(text) if text.chars().count() < min_len => {
            errors.push(field, ErrorKind::TooShort, too_short);
            None
        }
        Some(text) => Some(text.clone()),
    }
}

fn check_date(
    value: &Option<String>,
    field: &str,
    required: &str,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    let raw = match value.as_deref() {
        None | Some("") => {
            errors.push(field, ErrorKind::Required, required);
            return None;
        }
        Some(raw) => raw,
    };
    match parse_calendar_date(raw) {
        Some(date) => Some(date),
        None => {
            errors.push(field, ErrorKind::InvalidDate, "Please enter a valid date.");
            None
        }
    }
}

// Dates arrive either as plain calendar dates or as full ISO timestamps from
// a date picker; only the calendar day is kept.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}
