use chrono::{Duration, NaiveDate};

use crate::model::{VehicleModel, VehicleType};
use crate::validate::ValidatedVehicle;

/// In-memory record set. Records are immutable once inserted; an edit is a
/// whole-record replace keyed by id.
#[derive(Debug)]
pub struct VehicleStore {
    vehicles: Vec<VehicleModel>,
    next_id: u64,
}

impl VehicleStore {
    pub fn new() -> Self {
        VehicleStore {
            vehicles: Vec::new(),
            next_id: 1,
        }
    }

    /// Seeds the sample fleet with expiries relative to `today`, so the
    /// dashboard always shows one record per status band.
    pub fn with_sample_data(today: NaiveDate) -> Self {
        let mut store = VehicleStore::new();
        store.insert(sample(
            "Honda Activa",
            "MH12AB1234",
            VehicleType::TwoWheeler,
            today + Duration::days(25),
            today + Duration::days(90),
        ));
        store.insert(sample(
            "Toyota Fortuner",
            "MH14CD5678",
            VehicleType::FourWheeler,
            today - Duration::days(10),
            today + Duration::days(5),
        ));
        store.insert(sample(
            "Royal Enfield Classic",
            "MH01EF9012",
            VehicleType::TwoWheeler,
            today + Duration::days(120),
            today + Duration::days(150),
        ));
        store.insert(sample(
            "Maruti Swift",
            "MH02GH3456",
            VehicleType::FourWheeler,
            today + Duration::days(2),
            today - Duration::days(30),
        ));
        store
    }

    pub fn all(&self) -> &[VehicleModel] {
        &self.vehicles
    }

    pub fn get(&self, id: &str) -> Option<&VehicleModel> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn insert(&mut self, vehicle: ValidatedVehicle) -> VehicleModel {
        let id = self.next_id.to_string();
        self.next_id += 1;
        let record = vehicle.into_record(id);
        self.vehicles.push(record.clone());
        record
    }

    pub fn replace(&mut self, id: &str, vehicle: ValidatedVehicle) -> Option<VehicleModel> {
        let slot = self.vehicles.iter_mut().find(|v| v.id == id)?;
        *slot = vehicle.into_record(id.to_string());
        Some(slot.clone())
    }
}

fn sample(
    name: &str,
    registration_number: &str,
    vehicle_type: VehicleType,
    insurance_expiry: NaiveDate,
    puc_expiry: NaiveDate,
) -> ValidatedVehicle {
    ValidatedVehicle {
        name: name.to_string(),
        registration_number: registration_number.to_string(),
        vehicle_type,
        insurance_expiry,
        puc_expiry,
        insurance_document: None,
        puc_document: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn edited() -> ValidatedVehicle {
        sample(
            "Toyota Fortuner Legender",
            "MH14CD5678",
            VehicleType::FourWheeler,
            today() + Duration::days(365),
            today() + Duration::days(180),
        )
    }

    #[test]
    fn seeds_four_vehicles_with_sequential_ids() {
        let store = VehicleStore::with_sample_data(today());
        let ids: Vec<&str> = store.all().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert_eq!(store.get("2").unwrap().name, "Toyota Fortuner");
        assert_eq!(
            store.get("4").unwrap().puc_expiry,
            today() - Duration::days(30)
        );
    }

    #[test]
    fn insert_continues_the_id_sequence() {
        let mut store = VehicleStore::with_sample_data(today());
        let created = store.insert(edited());
        assert_eq!(created.id, "5");
        assert_eq!(store.all().len(), 5);
    }

    #[test]
    fn replace_keeps_the_existing_id() {
        let mut store = VehicleStore::with_sample_data(today());
        let updated = store.replace("2", edited()).unwrap();
        assert_eq!(updated.id, "2");
        assert_eq!(updated.name, "Toyota Fortuner Legender");
        assert_eq!(store.all().len(), 4);
        // The replace is total, not a field merge.
        assert_eq!(
            store.get("2").unwrap().insurance_expiry,
            today() + Duration::days(365)
        );
    }

    #[test]
    fn replace_of_an_unknown_id_is_none() {
        let mut store = VehicleStore::with_sample_data(today());
        assert!(store.replace("99", edited()).is_none());
        assert_eq!(store.all().len(), 4);
    }

    #[test]
    fn empty_store_starts_ids_at_one() {
        let mut store = VehicleStore::new();
        assert!(store.all().is_empty());
        assert_eq!(store.insert(edited()).id, "1");
    }
}
