use super::IIncomeSummaryRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use chalet_reservations_domain::ReservationIncomeSummary;
use itertools::Itertools;
use std::sync::{Arc, Mutex};

pub struct InMemoryIncomeSummaryRepo {
    summaries: Arc<Mutex<Vec<ReservationIncomeSummary>>>,
}

impl InMemoryIncomeSummaryRepo {
    pub fn new(summaries: Arc<Mutex<Vec<ReservationIncomeSummary>>>) -> Self {
        Self { summaries }
    }
}

#[async_trait::async_trait]
impl IIncomeSummaryRepo for InMemoryIncomeSummaryRepo {
    async fn find(&self, summary_id: &str) -> anyhow::Result<Option<ReservationIncomeSummary>> {
        let mut summaries = find_by(&self.summaries, |s| s.id == summary_id);
        Ok(summaries.pop())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ReservationIncomeSummary>> {
        let summaries = find_by(&self.summaries, |_| true)
            .into_iter()
            .sorted_by(|a, b| a.id.cmp(&b.id))
            .collect();
        Ok(summaries)
    }

    async fn delete_all(&self) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.summaries, |_| true))
    }
}
