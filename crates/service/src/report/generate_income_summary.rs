use crate::{error::ReservationServiceError, shared::usecase::UseCase};
use chalet_reservations_domain::{ReservationIncomeSummary, YearMonth};
use chalet_reservations_infra::ReservationContext;
use tracing::info;

/// Calculates the income of the month and stores it, replacing the summary
/// from an earlier run for the same month.
#[derive(Debug)]
pub struct GenerateIncomeSummaryUseCase {
    pub year: i32,
    pub month: u32,
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
impl UseCase for GenerateIncomeSummaryUseCase {
    type Response = Option<ReservationIncomeSummary>;

    type Error = UseCaseError;

    const NAME: &'static str = "GenerateIncomeSummary";

    async fn execute(&mut self, ctx: &ReservationContext) -> Result<Self::Response, Self::Error> {
        let month = YearMonth::new(self.year, self.month)
            .map_err(|e| UseCaseError::InvalidMonth(e.to_string()))?;

        let summary = ctx
            .repos
            .reservations
            .summarize_income(&month)
            .await
            .map_err(UseCaseError::StorageError)?;

        match &summary {
            Some(summary) => info!("Income of {} is {}", summary.id, summary.income),
            None => info!("No reservations in {}, no income summary stored", month),
        }
        Ok(summary)
    }
}
