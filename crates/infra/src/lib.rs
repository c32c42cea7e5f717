mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{DeleteResult, IIncomeSummaryRepo, IReservationRepo, Repos};
use std::sync::Arc;
pub use system::{IIdProvider, ObjectIdProvider};

#[derive(Clone)]
pub struct ReservationContext {
    pub repos: Repos,
    pub ids: Arc<dyn IIdProvider>,
}

struct ContextParams {
    pub mongodb_url: String,
    pub mongodb_database: String,
}

impl ReservationContext {
    pub fn new(repos: Repos, ids: Arc<dyn IIdProvider>) -> Self {
        Self { repos, ids }
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            ids: Arc::new(ObjectIdProvider {}),
        }
    }

    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos = Repos::create_mongodb(&params.mongodb_url, &params.mongodb_database).await?;
        Ok(Self {
            repos,
            ids: Arc::new(ObjectIdProvider {}),
        })
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<ReservationContext> {
    let config = Config::new();
    ReservationContext::create(ContextParams {
        mongodb_url: config.mongodb_url,
        mongodb_database: config.mongodb_database,
    })
    .await
}

/// Contexts to run repository tests against: always the inmemory one, and
/// a mongo one as well when `MONGODB_URL` points at a running instance
#[cfg(test)]
pub(crate) async fn create_test_contexts() -> Vec<ReservationContext> {
    let mut contexts = vec![ReservationContext::create_inmemory()];
    if std::env::var("MONGODB_URL").is_ok() {
        let ctx = setup_context()
            .await
            .expect("MONGODB_URL to point at a running mongo instance");
        ctx.repos
            .reservations
            .delete_all()
            .await
            .expect("To clear reservations");
        ctx.repos
            .income_summaries
            .delete_all()
            .await
            .expect("To clear income summaries");
        contexts.push(ctx);
    }
    contexts
}
