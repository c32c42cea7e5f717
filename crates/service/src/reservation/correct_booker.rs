use crate::{error::ReservationServiceError, shared::usecase::UseCase};
use chalet_reservations_domain::ID;
use chalet_reservations_infra::ReservationContext;

/// Bookers sometimes enter their name incorrectly, which then does not match
/// their identification at check in.
#[derive(Debug)]
pub struct CorrectBookerUseCase {
    pub reservation_id: ID,
    pub booker: String,
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
impl UseCase for CorrectBookerUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "CorrectBooker";

    async fn execute(&mut self, ctx: &ReservationContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reservations
            .set_booker(&self.reservation_id, &self.booker)
            .await
            .map_err(UseCaseError::StorageError)
    }
}
