use crate::{error::ReservationServiceError, shared::usecase::UseCase};
use chalet_reservations_domain::{Reservation, ReservationEntry};
use chalet_reservations_infra::ReservationContext;

#[derive(Debug)]
pub struct CreateReservationUseCase {
    pub entry: ReservationEntry,
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
impl UseCase for CreateReservationUseCase {
    type Response = Reservation;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReservation";

    async fn execute(&mut self, ctx: &ReservationContext) -> Result<Self::Response, Self::Error> {
        // New reservations never have damages filed
        let reservation = Reservation::new(ctx.ids.provide(), self.entry.clone());

        ctx.repos
            .reservations
            .insert(&reservation)
            .await
            .map(|_| reservation)
            .map_err(UseCaseError::StorageError)
    }
}
