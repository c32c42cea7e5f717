use crate::Reservation;
use chrono::NaiveDate;

/// Discount given on the birthday of the company to every unpaid reservation
/// of that day. The price includes insurance, which is not discounted, so
/// insured stays need a higher price to qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnniversaryDiscount {
    pub amount: i64,
    /// Minimum price for reservations with insurance
    pub insured_threshold: i64,
    /// Minimum price for reservations without insurance
    pub uninsured_threshold: i64,
}

impl Default for AnniversaryDiscount {
    fn default() -> Self {
        Self {
            amount: 50,
            insured_threshold: 300,
            uninsured_threshold: 250,
        }
    }
}

impl AnniversaryDiscount {
    pub fn threshold(&self, has_insurance: bool) -> i64 {
        if has_insurance {
            self.insured_threshold
        } else {
            self.uninsured_threshold
        }
    }

    pub fn applies_to(&self, reservation: &Reservation, date: &NaiveDate) -> bool {
        reservation.date == *date
            && !reservation.has_paid
            && reservation.price >= self.threshold(reservation.has_insurance)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{ReservationEntry, ID};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
    }

    fn reservation(date: NaiveDate, price: i64, has_paid: bool, has_insurance: bool) -> Reservation {
        Reservation::new(
            ID::new(),
            ReservationEntry {
                price,
                date,
                chalet: "120B".into(),
                booker: "alex".into(),
                guests: vec!["kai".into(), "jack".into()],
                has_paid,
                has_insurance,
            },
        )
    }

    #[test]
    fn it_applies_thresholds_by_insurance() {
        let discount = AnniversaryDiscount::default();
        assert!(discount.applies_to(&reservation(date(), 325, false, true), &date()));
        assert!(discount.applies_to(&reservation(date(), 300, false, true), &date()));
        assert!(!discount.applies_to(&reservation(date(), 275, false, true), &date()));
        assert!(discount.applies_to(&reservation(date(), 275, false, false), &date()));
        assert!(discount.applies_to(&reservation(date(), 250, false, false), &date()));
        assert!(!discount.applies_to(&reservation(date(), 225, false, false), &date()));
    }

    #[test]
    fn it_skips_paid_and_other_days() {
        let discount = AnniversaryDiscount::default();
        assert!(!discount.applies_to(&reservation(date(), 275, true, false), &date()));
        let yesterday = date().pred_opt().unwrap();
        assert!(!discount.applies_to(&reservation(yesterday, 275, false, false), &date()));
    }
}
