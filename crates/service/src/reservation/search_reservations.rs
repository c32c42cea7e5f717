use crate::{error::ReservationServiceError, shared::usecase::UseCase};
use chalet_reservations_domain::{Reservation, ReservationPageQuery};
use chalet_reservations_infra::ReservationContext;

/// A page of reservations sorted by date, searchable by partial booker name
#[derive(Debug)]
pub struct SearchReservationsUseCase {
    pub query: ReservationPageQuery,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidPageSize,
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for ReservationServiceError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidPageSize => {
                Self::BadClientData("The page size must be greater than 0".into())
            }
            UseCaseError::StorageError(e) => Self::StorageError(e),
        }
    }
}

#[async_trait::async_trait]
impl UseCase for SearchReservationsUseCase {
    type Response = Vec<Reservation>;

    type Error = UseCaseError;

    const NAME: &'static str = "SearchReservations";

    async fn execute(&mut self, ctx: &ReservationContext) -> Result<Self::Response, Self::Error> {
        if self.query.page_size == 0 {
            return Err(UseCaseError::InvalidPageSize);
        }

        ctx.repos
            .reservations
            .find_page(&self.query)
            .await
            .map_err(UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chalet_reservations_domain::{ReservationEntry, SortDirection, ID};
    use chrono::NaiveDate;

    async fn insert(ctx: &ReservationContext, booker: &str, date: NaiveDate) -> Reservation {
        let reservation = Reservation::new(
            ID::new(),
            ReservationEntry {
                price: 120,
                date,
                chalet: "80C".into(),
                booker: booker.into(),
                guests: vec!["kai".into(), "jack".into()],
                has_paid: true,
                has_insurance: false,
            },
        );
        ctx.repos.reservations.insert(&reservation).await.unwrap();
        reservation
    }

    fn query(page_size: usize, page: usize, direction: SortDirection) -> SearchReservationsUseCase {
        SearchReservationsUseCase {
            query: ReservationPageQuery {
                page_size,
                page,
                direction,
                booker: "o".into(),
            },
        }
    }

    #[tokio::test]
    async fn it_rejects_empty_pages() {
        let ctx = ReservationContext::create_inmemory();
        let res = query(0, 0, SortDirection::Ascending).execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::InvalidPageSize)));
    }

    #[tokio::test]
    async fn pages_neither_overlap_nor_skip() {
        let ctx = ReservationContext::create_inmemory();
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let yesterday = date.pred_opt().unwrap();
        for (booker, date) in [
            ("thomas", date),
            ("anouk", date),
            ("will", date),
            ("rebecca", yesterday),
            ("john", yesterday),
        ] {
            insert(&ctx, booker, date).await;
        }

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let unpaged = query(100, 0, direction).execute(&ctx).await.unwrap();
            let mut paged = Vec::new();
            for page in 0..5 {
                paged.extend(query(2, page, direction).execute(&ctx).await.unwrap());
            }
            assert_eq!(unpaged.len(), 3);
            assert_eq!(paged, unpaged);
        }
    }
}
