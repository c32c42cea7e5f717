use crate::{error::ReservationServiceError, shared::usecase::UseCase};
use chalet_reservations_domain::Reservation;
use chalet_reservations_infra::ReservationContext;
use chrono::NaiveDate;

const MOST_EXPENSIVE_LIMIT: usize = 10;

/// The ten most expensive reservations of the day, so that those guests can be
/// made an offer to return. Free stays are left out.
#[derive(Debug)]
pub struct GetMostExpensiveUseCase {
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
impl UseCase for GetMostExpensiveUseCase {
    type Response = Vec<Reservation>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetMostExpensive";

    async fn execute(&mut self, ctx: &ReservationContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reservations
            .find_most_expensive(&self.date, MOST_EXPENSIVE_LIMIT)
            .await
            .map_err(UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chalet_reservations_domain::{ReservationEntry, ID};

    #[tokio::test]
    async fn it_returns_at_most_ten_sorted_by_price() {
        let ctx = ReservationContext::create_inmemory();
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        for price in [40, 0, 15, 99, 15, 3, 70, 8, 12, 5, 60, 1, 2] {
            let reservation = Reservation::new(
                ID::new(),
                ReservationEntry {
                    price,
                    date,
                    chalet: "80C".into(),
                    booker: "booker".into(),
                    guests: vec![],
                    has_paid: true,
                    has_insurance: false,
                },
            );
            ctx.repos.reservations.insert(&reservation).await.unwrap();
        }

        let mut usecase = GetMostExpensiveUseCase { date };
        let res = usecase.execute(&ctx).await.unwrap();
        let prices = res.iter().map(|r| r.price).collect::<Vec<_>>();
        assert_eq!(prices, vec![99, 70, 60, 40, 15, 15, 12, 8, 5, 3]);
    }
}
