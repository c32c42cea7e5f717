use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;

/// A stay at one of the chalets on a given date.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: ID,
    /// Price of the stay, insurance surcharge included
    pub price: i64,
    pub date: NaiveDate,
    pub chalet: String,
    /// Name of the guest responsible for the reservation
    pub booker: String,
    pub guests: Vec<String>,
    pub has_paid: bool,
    pub has_insurance: bool,
    /// `None` until staff file the first damage. This is not the same
    /// as an empty list of damages.
    pub damages: Option<Vec<String>>,
}

/// What a client supplies when booking. The id and the damages are
/// never set by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationEntry {
    pub price: i64,
    pub date: NaiveDate,
    pub chalet: String,
    pub booker: String,
    pub guests: Vec<String>,
    pub has_paid: bool,
    pub has_insurance: bool,
}

impl Reservation {
    pub fn new(id: ID, entry: ReservationEntry) -> Self {
        Self {
            id,
            price: entry.price,
            date: entry.date,
            chalet: entry.chalet,
            booker: entry.booker,
            guests: entry.guests,
            has_paid: entry.has_paid,
            has_insurance: entry.has_insurance,
            damages: None,
        }
    }

    pub fn has_damages(&self) -> bool {
        self.damages.is_some()
    }

    pub fn file_damage(&mut self, damage: String) {
        self.damages.get_or_insert_with(Vec::new).push(damage);
    }
}

impl Entity for Reservation {
    fn id(&self) -> &ID {
        &self.id
    }
}
