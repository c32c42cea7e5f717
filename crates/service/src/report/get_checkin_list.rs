use crate::{error::ReservationServiceError, shared::usecase::UseCase};
use chalet_reservations_domain::ReservationCheckin;
use chalet_reservations_infra::ReservationContext;
use chrono::NaiveDate;

/// Bookers that are expected to check in on the date
#[derive(Debug)]
pub struct GetCheckinListUseCase {
    pub date: NaiveDate,
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
impl UseCase for GetCheckinListUseCase {
    type Response = Option<ReservationCheckin>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCheckinList";

    async fn execute(&mut self, ctx: &ReservationContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reservations
            .checkin_list(&self.date)
            .await
            .map_err(UseCaseError::StorageError)
    }
}
