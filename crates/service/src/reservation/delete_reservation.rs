use crate::{error::ReservationServiceError, shared::usecase::UseCase};
use chalet_reservations_domain::{Reservation, ID};
use chalet_reservations_infra::ReservationContext;

#[derive(Debug)]
pub struct DeleteReservationUseCase {
    pub reservation_id: ID,
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
impl UseCase for DeleteReservationUseCase {
    /// The deleted reservation, if there was one
    type Response = Option<Reservation>;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReservation";

    async fn execute(&mut self, ctx: &ReservationContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reservations
            .delete(&self.reservation_id)
            .await
            .map_err(UseCaseError::StorageError)
    }
}
