use chalet_reservations_domain::{Reservation, ReservationEntry};
use chalet_reservations_service::ReservationService;
use chrono::NaiveDate;

pub fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

pub fn entry() -> ReservationEntry {
    ReservationEntry {
        price: 120,
        date: date(),
        chalet: "80C".into(),
        booker: "booker".into(),
        guests: vec!["kai".into(), "jack".into()],
        has_paid: true,
        has_insurance: false,
    }
}

pub async fn save(service: &ReservationService, entry: ReservationEntry) -> Reservation {
    service.save(entry).await.expect("To save reservation")
}
