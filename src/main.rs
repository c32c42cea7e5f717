mod telemetry;

use chalet_reservations_infra::setup_context;
use chalet_reservations_service::ReservationService;
use chrono::Datelike;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("chalet_reservations".into(), "info".into());
    init_subscriber(subscriber)?;

    let context = setup_context().await?;
    let service = ReservationService::new(context);

    let today = chrono::Utc::now().date_naive();
    match service.income_generated(today.year(), today.month()).await? {
        Some(summary) => info!("Income of {}: {}", summary.id, summary.income),
        None => info!("No reservations found for {}-{:02}", today.year(), today.month()),
    }

    let checkin = service.checkin_list(today).await?;
    info!("Check-in list of {}: {:?}", today, checkin);

    Ok(())
}
