mod inmemory;
mod mongo;

pub use inmemory::InMemoryReservationRepo;
pub use mongo::MongoReservationRepo;

use crate::repos::shared::repo::DeleteResult;
use chalet_reservations_domain::{
    AnniversaryDiscount, Reservation, ReservationCheckin, ReservationIncomeSummary,
    ReservationInsuranceClaim, ReservationPageQuery, YearMonth, ID,
};
use chrono::NaiveDate;

#[async_trait::async_trait]
pub trait IReservationRepo: Send + Sync {
    async fn insert(&self, reservation: &Reservation) -> anyhow::Result<()>;
    async fn find(&self, reservation_id: &ID) -> anyhow::Result<Option<Reservation>>;
    async fn find_all(&self) -> anyhow::Result<Vec<Reservation>>;
    async fn delete(&self, reservation_id: &ID) -> anyhow::Result<Option<Reservation>>;
    async fn delete_all(&self) -> anyhow::Result<DeleteResult>;
    /// Priced reservations of the day, most expensive first
    async fn find_most_expensive(
        &self,
        date: &NaiveDate,
        limit: usize,
    ) -> anyhow::Result<Vec<Reservation>>;
    /// Uninsured reservations of the chalet that have damages filed
    async fn find_damage_claims(&self, chalet: &str) -> anyhow::Result<Vec<Reservation>>;
    async fn find_page(&self, query: &ReservationPageQuery) -> anyhow::Result<Vec<Reservation>>;
    async fn set_booker(&self, reservation_id: &ID, booker: &str) -> anyhow::Result<()>;
    async fn push_guest(&self, reservation_id: &ID, guest: &str) -> anyhow::Result<()>;
    async fn push_damage(&self, reservation_id: &ID, damage: &str) -> anyhow::Result<()>;
    /// Returns the number of discounted reservations
    async fn apply_discount(
        &self,
        date: &NaiveDate,
        discount: &AnniversaryDiscount,
    ) -> anyhow::Result<u64>;
    async fn checkin_list(&self, date: &NaiveDate) -> anyhow::Result<Option<ReservationCheckin>>;
    /// Computes the income of the month and stores it as the summary of that month
    async fn summarize_income(
        &self,
        month: &YearMonth,
    ) -> anyhow::Result<Option<ReservationIncomeSummary>>;
    /// One claim per damage, in the order of the given chalets
    async fn insurance_claims(
        &self,
        chalets: &[String],
        date: &NaiveDate,
    ) -> anyhow::Result<Vec<ReservationInsuranceClaim>>;
}
