use crate::{error::ReservationServiceError, shared::usecase::UseCase};
use chalet_reservations_domain::AnniversaryDiscount;
use chalet_reservations_infra::ReservationContext;
use chrono::NaiveDate;
use tracing::info;

/// Gives the anniversary discount to every unpaid reservation of the day that
/// is expensive enough. Running it twice discounts twice.
#[derive(Debug)]
pub struct ApplyAnniversaryDiscountUseCase {
    pub date: NaiveDate,
    pub discount: AnniversaryDiscount,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for ReservationServiceError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError(e) => Self::StorageError(e),
        }
    }
}

#[async_trait::async_trait]
impl UseCase for ApplyAnniversaryDiscountUseCase {
    /// Number of discounted reservations
    type Response = u64;

    type Error = UseCaseError;

    const NAME: &'static str = "ApplyAnniversaryDiscount";

    async fn execute(&mut self, ctx: &ReservationContext) -> Result<Self::Response, Self::Error> {
        let discounted = ctx
            .repos
            .reservations
            .apply_discount(&self.date, &self.discount)
            .await
            .map_err(UseCaseError::StorageError)?;
        info!(
            "Anniversary discount of {} given to {} reservations on {}",
            self.discount.amount, discounted, self.date
        );
        Ok(discounted)
    }
}
