use crate::{error::ReservationServiceError, shared::usecase::UseCase};
use chalet_reservations_domain::Reservation;
use chalet_reservations_infra::ReservationContext;

#[derive(Debug)]
pub struct GetReservationsUseCase {}

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
impl UseCase for GetReservationsUseCase {
    type Response = Vec<Reservation>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReservations";

    async fn execute(&mut self, ctx: &ReservationContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reservations
            .find_all()
            .await
            .map_err(UseCaseError::StorageError)
    }
}
