use crate::{error::ReservationServiceError, shared::usecase::UseCase};
use chalet_reservations_domain::ID;
use chalet_reservations_infra::ReservationContext;

/// Staff file damages found after a stay
#[derive(Debug)]
pub struct FileDamageUseCase {
    pub reservation_id: ID,
    pub damage: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    EmptyDamage,
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for ReservationServiceError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyDamage => {
                Self::BadClientData("A damage needs a description".into())
            }
            UseCaseError::StorageError(e) => Self::StorageError(e),
        }
    }
}

#[async_trait::async_trait]
impl UseCase for FileDamageUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "FileDamage";

    async fn execute(&mut self, ctx: &ReservationContext) -> Result<Self::Response, Self::Error> {
        if self.damage.trim().is_empty() {
            return Err(UseCaseError::EmptyDamage);
        }

        ctx.repos
            .reservations
            .push_damage(&self.reservation_id, &self.damage)
            .await
            .map_err(UseCaseError::StorageError)
    }
}
