use crate::{error::ReservationServiceError, shared::usecase::UseCase};
use chalet_reservations_domain::Reservation;
use chalet_reservations_infra::ReservationContext;

/// Reservations at the chalet with damages filed but without insurance.
/// Those guests pay for the damages themselves.
#[derive(Debug)]
pub struct GetDamageClaimsUseCase {
    pub chalet: String,
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
impl UseCase for GetDamageClaimsUseCase {
    type Response = Vec<Reservation>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetDamageClaims";

    async fn execute(&mut self, ctx: &ReservationContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reservations
            .find_damage_claims(&self.chalet)
            .await
            .map_err(UseCaseError::StorageError)
    }
}
