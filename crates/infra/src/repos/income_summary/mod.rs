mod inmemory;
mod mongo;

pub use inmemory::InMemoryIncomeSummaryRepo;
pub(crate) use mongo::IncomeSummaryMongo;
pub use mongo::MongoIncomeSummaryRepo;

use crate::repos::shared::repo::DeleteResult;
use chalet_reservations_domain::ReservationIncomeSummary;

/// Read side of the monthly income summaries. Summaries are written by
/// `IReservationRepo::summarize_income`.
#[async_trait::async_trait]
pub trait IIncomeSummaryRepo: Send + Sync {
    async fn find(&self, summary_id: &str) -> anyhow::Result<Option<ReservationIncomeSummary>>;
    /// All summaries ordered by month
    async fn find_all(&self) -> anyhow::Result<Vec<ReservationIncomeSummary>>;
    async fn delete_all(&self) -> anyhow::Result<DeleteResult>;
}
