use super::IReservationRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use chalet_reservations_domain::{
    AnniversaryDiscount, Reservation, ReservationCheckin, ReservationIncomeSummary,
    ReservationInsuranceClaim, ReservationPageQuery, SortDirection, YearMonth, ID,
};
use chrono::NaiveDate;
use itertools::Itertools;
use std::sync::{Arc, Mutex};

pub struct InMemoryReservationRepo {
    reservations: Mutex<Vec<Reservation>>,
    income_summaries: Arc<Mutex<Vec<ReservationIncomeSummary>>>,
}

impl InMemoryReservationRepo {
    pub fn new(income_summaries: Arc<Mutex<Vec<ReservationIncomeSummary>>>) -> Self {
        Self {
            reservations: Mutex::new(Vec::new()),
            income_summaries,
        }
    }
}

#[async_trait::async_trait]
impl IReservationRepo for InMemoryReservationRepo {
    async fn insert(&self, reservation: &Reservation) -> anyhow::Result<()> {
        insert(reservation, &self.reservations);
        Ok(())
    }

    async fn find(&self, reservation_id: &ID) -> anyhow::Result<Option<Reservation>> {
        Ok(find(reservation_id, &self.reservations))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reservation>> {
        Ok(find_by(&self.reservations, |_| true))
    }

    async fn delete(&self, reservation_id: &ID) -> anyhow::Result<Option<Reservation>> {
        Ok(delete(reservation_id, &self.reservations))
    }

    async fn delete_all(&self) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.reservations, |_| true))
    }

    async fn find_most_expensive(
        &self,
        date: &NaiveDate,
        limit: usize,
    ) -> anyhow::Result<Vec<Reservation>> {
        let reservations = find_by(&self.reservations, |r| r.price > 0 && r.date == *date)
            .into_iter()
            .sorted_by(|a, b| b.price.cmp(&a.price).then(a.id.cmp(&b.id)))
            .take(limit)
            .collect();
        Ok(reservations)
    }

    async fn find_damage_claims(&self, chalet: &str) -> anyhow::Result<Vec<Reservation>> {
        let reservations = find_by(&self.reservations, |r| {
            r.chalet == chalet && r.has_damages() && !r.has_insurance
        })
        .into_iter()
        .sorted_by_key(|r| r.id)
        .collect();
        Ok(reservations)
    }

    async fn find_page(&self, query: &ReservationPageQuery) -> anyhow::Result<Vec<Reservation>> {
        let reservations = find_by(&self.reservations, |r| query.matches_booker(&r.booker))
            .into_iter()
            .sorted_by(|a, b| {
                let by_date = match query.direction {
                    SortDirection::Ascending => a.date.cmp(&b.date),
                    SortDirection::Descending => b.date.cmp(&a.date),
                };
                by_date.then(a.id.cmp(&b.id))
            })
            .skip(query.skip())
            .take(query.page_size)
            .collect();
        Ok(reservations)
    }

    async fn set_booker(&self, reservation_id: &ID, booker: &str) -> anyhow::Result<()> {
        update_many(
            &self.reservations,
            |r| r.id == *reservation_id,
            |r| r.booker = booker.to_string(),
        );
        Ok(())
    }

    async fn push_guest(&self, reservation_id: &ID, guest: &str) -> anyhow::Result<()> {
        update_many(
            &self.reservations,
            |r| r.id == *reservation_id,
            |r| r.guests.push(guest.to_string()),
        );
        Ok(())
    }

    async fn push_damage(&self, reservation_id: &ID, damage: &str) -> anyhow::Result<()> {
        update_many(
            &self.reservations,
            |r| r.id == *reservation_id,
            |r| r.file_damage(damage.to_string()),
        );
        Ok(())
    }

    async fn apply_discount(
        &self,
        date: &NaiveDate,
        discount: &AnniversaryDiscount,
    ) -> anyhow::Result<u64> {
        let discounted = update_many(
            &self.reservations,
            |r| discount.applies_to(r, date),
            |r| r.price -= discount.amount,
        );
        Ok(discounted)
    }

    async fn checkin_list(&self, date: &NaiveDate) -> anyhow::Result<Option<ReservationCheckin>> {
        let reservations = find_by(&self.reservations, |r| r.date == *date);
        if reservations.is_empty() {
            return Ok(None);
        }
        Ok(Some(ReservationCheckin {
            date: *date,
            bookers: reservations.into_iter().map(|r| r.booker).collect(),
        }))
    }

    async fn summarize_income(
        &self,
        month: &YearMonth,
    ) -> anyhow::Result<Option<ReservationIncomeSummary>> {
        let reservations = find_by(&self.reservations, |r| month.contains(&r.date));
        if reservations.is_empty() {
            return Ok(None);
        }
        let summary = ReservationIncomeSummary {
            id: month.to_string(),
            income: reservations.iter().map(|r| r.price).sum(),
        };
        upsert_by(&summary, &self.income_summaries, |s| s.id == summary.id);
        Ok(Some(summary))
    }

    async fn insurance_claims(
        &self,
        chalets: &[String],
        date: &NaiveDate,
    ) -> anyhow::Result<Vec<ReservationInsuranceClaim>> {
        let claims = find_by(&self.reservations, |r| {
            r.date == *date
                && r.has_insurance
                && chalets.contains(&r.chalet)
                && r.damages.as_ref().map(|d| !d.is_empty()).unwrap_or(false)
        })
        .into_iter()
        .sorted_by_key(|r| (chalets.iter().position(|c| *c == r.chalet), r.id))
        .flat_map(|r| {
            let damages = r.damages.unwrap_or_default();
            damages
                .into_iter()
                .map(move |damage| ReservationInsuranceClaim {
                    date: r.date,
                    chalet: r.chalet.clone(),
                    damage,
                    has_insurance: r.has_insurance,
                })
        })
        .collect();
        Ok(claims)
    }
}
