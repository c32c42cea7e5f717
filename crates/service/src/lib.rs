mod error;
mod report;
mod reservation;
mod shared;

pub use error::ReservationServiceError;

use chalet_reservations_domain::{
    AnniversaryDiscount, Reservation, ReservationCheckin, ReservationEntry,
    ReservationIncomeSummary, ReservationInsuranceClaim, ReservationPageQuery, SortDirection, ID,
};
use chalet_reservations_infra::ReservationContext;
use chrono::NaiveDate;
use report::{
    generate_income_summary::GenerateIncomeSummaryUseCase,
    get_checkin_list::GetCheckinListUseCase, get_income_summaries::GetIncomeSummariesUseCase,
    get_insurance_claims::GetInsuranceClaimsUseCase,
};
use reservation::{
    add_guest::AddGuestUseCase, apply_anniversary_discount::ApplyAnniversaryDiscountUseCase,
    correct_booker::CorrectBookerUseCase, create_reservation::CreateReservationUseCase,
    delete_reservation::DeleteReservationUseCase, file_damage::FileDamageUseCase,
    get_damage_claims::GetDamageClaimsUseCase, get_most_expensive::GetMostExpensiveUseCase,
    get_reservation::GetReservationUseCase, get_reservations::GetReservationsUseCase,
    search_reservations::SearchReservationsUseCase,
};
use shared::usecase::execute;

type Result<T> = std::result::Result<T, ReservationServiceError>;

/// Queries, updates and reports on the reservations of the chalets.
///
/// Every method is a single round trip to the reservation store held by the
/// given `ReservationContext`; this type keeps no state of its own.
#[derive(Clone)]
pub struct ReservationService {
    ctx: ReservationContext,
}

impl ReservationService {
    pub fn new(ctx: ReservationContext) -> Self {
        Self { ctx }
    }

    pub async fn find(&self, reservation_id: &ID) -> Result<Option<Reservation>> {
        let usecase = GetReservationUseCase {
            reservation_id: *reservation_id,
        };
        Ok(execute(usecase, &self.ctx).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Reservation>> {
        let usecase = GetReservationsUseCase {};
        Ok(execute(usecase, &self.ctx).await?)
    }

    /// Stores a new reservation under a freshly provided id
    pub async fn save(&self, entry: ReservationEntry) -> Result<Reservation> {
        let usecase = CreateReservationUseCase { entry };
        Ok(execute(usecase, &self.ctx).await?)
    }

    /// Deleting a reservation that does not exist is a no-op
    pub async fn delete(&self, reservation_id: &ID) -> Result<()> {
        let usecase = DeleteReservationUseCase {
            reservation_id: *reservation_id,
        };
        execute(usecase, &self.ctx).await?;
        Ok(())
    }

    pub async fn most_expensive(&self, date: NaiveDate) -> Result<Vec<Reservation>> {
        let usecase = GetMostExpensiveUseCase { date };
        Ok(execute(usecase, &self.ctx).await?)
    }

    pub async fn damage_claims(&self, chalet: &str) -> Result<Vec<Reservation>> {
        let usecase = GetDamageClaimsUseCase {
            chalet: chalet.to_string(),
        };
        Ok(execute(usecase, &self.ctx).await?)
    }

    /// `page` is zero based. Bookers are matched on any part of their name,
    /// ignoring case.
    pub async fn page_and_sort(
        &self,
        page_size: usize,
        page: usize,
        direction: SortDirection,
        booker: &str,
    ) -> Result<Vec<Reservation>> {
        let usecase = SearchReservationsUseCase {
            query: ReservationPageQuery {
                page_size,
                page,
                direction,
                booker: booker.to_string(),
            },
        };
        Ok(execute(usecase, &self.ctx).await?)
    }

    pub async fn correct_booker(&self, reservation_id: &ID, booker: &str) -> Result<()> {
        let usecase = CorrectBookerUseCase {
            reservation_id: *reservation_id,
            booker: booker.to_string(),
        };
        Ok(execute(usecase, &self.ctx).await?)
    }

    pub async fn include_new_guest(&self, reservation_id: &ID, guest: &str) -> Result<()> {
        let usecase = AddGuestUseCase {
            reservation_id: *reservation_id,
            guest: guest.to_string(),
        };
        Ok(execute(usecase, &self.ctx).await?)
    }

    pub async fn file_damage(&self, reservation_id: &ID, damage: &str) -> Result<()> {
        let usecase = FileDamageUseCase {
            reservation_id: *reservation_id,
            damage: damage.to_string(),
        };
        Ok(execute(usecase, &self.ctx).await?)
    }

    /// Returns the number of reservations that got the discount
    pub async fn anniversary_discount(&self, date: NaiveDate) -> Result<u64> {
        let usecase = ApplyAnniversaryDiscountUseCase {
            date,
            discount: AnniversaryDiscount::default(),
        };
        Ok(execute(usecase, &self.ctx).await?)
    }

    pub async fn checkin_list(&self, date: NaiveDate) -> Result<Option<ReservationCheckin>> {
        let usecase = GetCheckinListUseCase { date };
        Ok(execute(usecase, &self.ctx).await?)
    }

    /// Computes and stores the income of the month. `month` is 1 based.
    pub async fn income_generated(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Option<ReservationIncomeSummary>> {
        let usecase = GenerateIncomeSummaryUseCase { year, month };
        Ok(execute(usecase, &self.ctx).await?)
    }

    /// The stored summary of the month, as of the last time it was generated
    pub async fn income_summary(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Option<ReservationIncomeSummary>> {
        let usecase = GetIncomeSummariesUseCase {
            month: Some((year, month)),
        };
        let mut summaries = execute(usecase, &self.ctx).await?;
        Ok(summaries.pop())
    }

    pub async fn income_summaries(&self) -> Result<Vec<ReservationIncomeSummary>> {
        let usecase = GetIncomeSummariesUseCase { month: None };
        Ok(execute(usecase, &self.ctx).await?)
    }

    pub async fn insurance_claims(
        &self,
        chalets: &[String],
        date: NaiveDate,
    ) -> Result<Vec<ReservationInsuranceClaim>> {
        let usecase = GetInsuranceClaimsUseCase {
            chalets: chalets.to_vec(),
            date,
        };
        Ok(execute(usecase, &self.ctx).await?)
    }
}
