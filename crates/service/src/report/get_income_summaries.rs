use crate::{error::ReservationServiceError, shared::usecase::UseCase};
use chalet_reservations_domain::{ReservationIncomeSummary, YearMonth};
use chalet_reservations_infra::ReservationContext;

/// Reads stored income summaries without recalculating them. Either the
/// summary of one month or all of them.
#[derive(Debug)]
pub struct GetIncomeSummariesUseCase {
    pub month: Option<(i32, u32)>,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidMonth(String),
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for ReservationServiceError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidMonth(msg) => Self::BadClientData(msg),
            UseCaseError::StorageError(e) => Self::StorageError(e),
        }
    }
}

#[async_trait::async_trait]
impl UseCase for GetIncomeSummariesUseCase {
    type Response = Vec<ReservationIncomeSummary>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetIncomeSummaries";

    async fn execute(&mut self, ctx: &ReservationContext) -> Result<Self::Response, Self::Error> {
        let summaries = &ctx.repos.income_summaries;
        match self.month {
            Some((year, month)) => {
                let month = YearMonth::new(year, month)
                    .map_err(|e| UseCaseError::InvalidMonth(e.to_string()))?;
                summaries
                    .find(&month.to_string())
                    .await
                    .map(|summary| summary.into_iter().collect())
                    .map_err(UseCaseError::StorageError)
            }
            None => summaries
                .find_all()
                .await
                .map_err(UseCaseError::StorageError),
        }
    }
}
