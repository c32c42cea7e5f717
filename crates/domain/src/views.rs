use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Everyone expected to check in on a given day
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationCheckin {
    pub date: NaiveDate,
    pub bookers: BTreeSet<String>,
}

/// Total income of a month. Stored once per month under its `YYYY-MM` key.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationIncomeSummary {
    pub id: String,
    pub income: i64,
}

/// A single damage at a chalet, as reported to the insurance company
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationInsuranceClaim {
    pub date: NaiveDate,
    pub chalet: String,
    pub damage: String,
    pub has_insurance: bool,
}
