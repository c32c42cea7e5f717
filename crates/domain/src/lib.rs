mod date;
mod discount;
mod query;
mod reservation;
mod shared;
mod views;

pub use date::{InvalidYearMonthError, YearMonth};
pub use discount::AnniversaryDiscount;
pub use query::{ReservationPageQuery, SortDirection};
pub use reservation::{Reservation, ReservationEntry};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use views::{ReservationCheckin, ReservationIncomeSummary, ReservationInsuranceClaim};
