use super::IIncomeSummaryRepo;
use crate::repos::shared::mongo_repo::{self, MongoDocument};
use crate::repos::shared::repo::DeleteResult;
use chalet_reservations_domain::ReservationIncomeSummary;
use mongodb::{
    bson::{doc, Document},
    options::FindOptions,
    Collection,
};
use serde::{Deserialize, Serialize};

pub struct MongoIncomeSummaryRepo {
    collection: Collection<Document>,
}

impl MongoIncomeSummaryRepo {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

#[async_trait::async_trait]
impl IIncomeSummaryRepo for MongoIncomeSummaryRepo {
    async fn find(&self, summary_id: &str) -> anyhow::Result<Option<ReservationIncomeSummary>> {
        let filter = doc! {
            "_id": summary_id
        };
        mongo_repo::find_one_by::<_, IncomeSummaryMongo>(&self.collection, filter).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ReservationIncomeSummary>> {
        let mut find_options = FindOptions::default();
        find_options.sort = Some(doc! { "_id": 1 });
        mongo_repo::find_many_by::<_, IncomeSummaryMongo>(
            &self.collection,
            doc! {},
            Some(find_options),
        )
        .await
    }

    async fn delete_all(&self) -> anyhow::Result<DeleteResult> {
        mongo_repo::delete_many_by(&self.collection, doc! {}).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct IncomeSummaryMongo {
    _id: String,
    income: i64,
}

impl MongoDocument<ReservationIncomeSummary> for IncomeSummaryMongo {
    fn to_domain(self) -> anyhow::Result<ReservationIncomeSummary> {
        Ok(ReservationIncomeSummary {
            id: self._id,
            income: self.income,
        })
    }

    fn from_domain(summary: &ReservationIncomeSummary) -> Self {
        Self {
            _id: summary.id.clone(),
            income: summary.income,
        }
    }
}
