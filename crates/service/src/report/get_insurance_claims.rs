use crate::{error::ReservationServiceError, shared::usecase::UseCase};
use chalet_reservations_domain::ReservationInsuranceClaim;
use chalet_reservations_infra::ReservationContext;
use chrono::NaiveDate;

/// The insurance company processes every damage on its own, so every damage
/// of an insured stay becomes a separate claim. Claims are grouped by chalet
/// in the order the chalets are given.
#[derive(Debug)]
pub struct GetInsuranceClaimsUseCase {
    pub chalets: Vec<String>,
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
impl UseCase for GetInsuranceClaimsUseCase {
    type Response = Vec<ReservationInsuranceClaim>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetInsuranceClaims";

    async fn execute(&mut self, ctx: &ReservationContext) -> Result<Self::Response, Self::Error> {
        if self.chalets.is_empty() {
            return Ok(Vec::new());
        }

        ctx.repos
            .reservations
            .insurance_claims(&self.chalets, &self.date)
            .await
            .map_err(UseCaseError::StorageError)
    }
}
