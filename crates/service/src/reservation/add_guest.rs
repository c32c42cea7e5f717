use crate::{error::ReservationServiceError, shared::usecase::UseCase};
use chalet_reservations_domain::ID;
use chalet_reservations_infra::ReservationContext;

/// Appends a guest to the end of the guest list
#[derive(Debug)]
pub struct AddGuestUseCase {
    pub reservation_id: ID,
    pub guest: String,
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
impl UseCase for AddGuestUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "AddGuest";

    async fn execute(&mut self, ctx: &ReservationContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reservations
            .push_guest(&self.reservation_id, &self.guest)
            .await
            .map_err(UseCaseError::StorageError)
    }
}
