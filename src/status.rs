use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenewalCategory {
    Expired,
    ExpiringSoon,
    Valid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewalStatus {
    pub days_left: i64,
    pub category: RenewalCategory,
    pub label: String,
}

/// Classifies an expiry date against a reference date (normally today at day
/// granularity). Expiries within the next 30 days count as expiring soon; a
/// same-day expiry is reported as "Expires in 1 day".
pub fn classify(expiry_date: NaiveDate, reference_date: NaiveDate) -> RenewalStatus {
    let days_left = expiry_date.signed_duration_since(reference_date).num_days();

    if days_left < 0 {
        return RenewalStatus {
            days_left,
            category: RenewalCategory::Expired,
            label: "Expired".to_string(),
        };
    }
    if days_left <= 30 {
        // The displayed count is days_left + 1, but the singular form tracks
        // the raw days_left.
        let unit = if days_left == 0 { "day" } else { "days" };
        return RenewalStatus {
            days_left,
            category: RenewalCategory::ExpiringSoon,
            label: format!("Expires in {} {}", days_left + 1, unit),
        };
    }
    RenewalStatus {
        days_left,
        category: RenewalCategory::Valid,
        label: "Valid".to_string(),
    }
}
