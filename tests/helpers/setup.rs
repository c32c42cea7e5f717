use chalet_reservations_infra::{setup_context, ReservationContext};
use chalet_reservations_service::ReservationService;

/// Builds a service backed by mongo when `MONGODB_URL` is set and by the
/// inmemory repositories otherwise. Stored reservations and summaries are
/// cleared before the service is handed out.
pub async fn spawn_service() -> ReservationService {
    let ctx = if std::env::var("MONGODB_URL").is_ok() {
        setup_context()
            .await
            .expect("MONGODB_URL to point at a running mongo instance")
    } else {
        ReservationContext::create_inmemory()
    };

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

    ReservationService::new(ctx)
}
