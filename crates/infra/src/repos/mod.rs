mod income_summary;
mod reservation;
mod shared;

pub use income_summary::IIncomeSummaryRepo;
use income_summary::{InMemoryIncomeSummaryRepo, MongoIncomeSummaryRepo};
use mongodb::{options::ClientOptions, Client};
pub use reservation::IReservationRepo;
use reservation::{InMemoryReservationRepo, MongoReservationRepo};
pub use shared::repo::DeleteResult;
use std::sync::{Arc, Mutex};
use tracing::info;

const RESERVATIONS_COLLECTION: &str = "reservation";
const INCOME_SUMMARIES_COLLECTION: &str = "reservation-income-view";

#[derive(Clone)]
pub struct Repos {
    pub reservations: Arc<dyn IReservationRepo>,
    pub income_summaries: Arc<dyn IIncomeSummaryRepo>,
}

impl Repos {
    pub async fn create_mongodb(connection_string: &str, db_name: &str) -> anyhow::Result<Self> {
        let client_options = ClientOptions::parse(connection_string).await?;
        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // Fail at startup rather than on the first query
        info!("DB CHECKING CONNECTION ...");
        db.run_command(mongodb::bson::doc! { "ping": 1 }, None)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        let reservations = db.collection(RESERVATIONS_COLLECTION);
        let income_summaries = db.collection(INCOME_SUMMARIES_COLLECTION);
        Ok(Self {
            reservations: Arc::new(MongoReservationRepo::new(
                reservations,
                income_summaries.clone(),
            )),
            income_summaries: Arc::new(MongoIncomeSummaryRepo::new(income_summaries)),
        })
    }

    pub fn create_inmemory() -> Self {
        // Both repos share the summaries, the income pipeline writes into them
        let summaries = Arc::new(Mutex::new(Vec::new()));
        Self {
            reservations: Arc::new(InMemoryReservationRepo::new(summaries.clone())),
            income_summaries: Arc::new(InMemoryIncomeSummaryRepo::new(summaries)),
        }
    }
}
