use super::IReservationRepo;
use crate::repos::income_summary::IncomeSummaryMongo;
use crate::repos::shared::mongo_repo::{self, from_bson_date, to_bson_date};
use crate::repos::shared::repo::DeleteResult;
use chalet_reservations_domain::{
    AnniversaryDiscount, Reservation, ReservationCheckin, ReservationIncomeSummary,
    ReservationInsuranceClaim, ReservationPageQuery, YearMonth, ID,
};
use chrono::NaiveDate;
use mongo_repo::MongoDocument;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::FindOptions,
    Collection,
};
use serde::{Deserialize, Serialize};

pub struct MongoReservationRepo {
    collection: Collection<Document>,
    /// Target of the monthly income pipeline
    income_summaries: Collection<Document>,
}

impl MongoReservationRepo {
    pub fn new(collection: Collection<Document>, income_summaries: Collection<Document>) -> Self {
        Self {
            collection,
            income_summaries,
        }
    }
}

#[async_trait::async_trait]
impl IReservationRepo for MongoReservationRepo {
    async fn insert(&self, reservation: &Reservation) -> anyhow::Result<()> {
        mongo_repo::insert::<_, ReservationMongo>(&self.collection, reservation).await
    }

    async fn find(&self, reservation_id: &ID) -> anyhow::Result<Option<Reservation>> {
        let oid = reservation_id.inner_ref();
        mongo_repo::find::<_, ReservationMongo>(&self.collection, oid).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reservation>> {
        mongo_repo::find_many_by::<_, ReservationMongo>(&self.collection, doc! {}, None).await
    }

    async fn delete(&self, reservation_id: &ID) -> anyhow::Result<Option<Reservation>> {
        let oid = reservation_id.inner_ref();
        mongo_repo::delete::<_, ReservationMongo>(&self.collection, oid).await
    }

    async fn delete_all(&self) -> anyhow::Result<DeleteResult> {
        mongo_repo::delete_many_by(&self.collection, doc! {}).await
    }

    async fn find_most_expensive(
        &self,
        date: &NaiveDate,
        limit: usize,
    ) -> anyhow::Result<Vec<Reservation>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let filter = doc! {
            "price": {
                "$gt": 0_i64
            },
            "date": to_bson_date(date)
        };
        let mut find_options = FindOptions::default();
        find_options.sort = Some(doc! {
            "price": -1,
            "_id": 1
        });
        find_options.limit = Some(i64::try_from(limit).unwrap_or(i64::MAX));

        mongo_repo::find_many_by::<_, ReservationMongo>(&self.collection, filter, Some(find_options))
            .await
    }

    async fn find_damage_claims(&self, chalet: &str) -> anyhow::Result<Vec<Reservation>> {
        // Presence of the damages field is what matters, not its length
        let filter = doc! {
            "chalet": chalet,
            "damages": {
                "$exists": true,
                "$ne": null
            },
            "hasInsurance": false
        };
        let mut find_options = FindOptions::default();
        find_options.sort = Some(doc! { "_id": 1 });

        mongo_repo::find_many_by::<_, ReservationMongo>(&self.collection, filter, Some(find_options))
            .await
    }

    async fn find_page(&self, query: &ReservationPageQuery) -> anyhow::Result<Vec<Reservation>> {
        // A limit of 0 means no limit at all to mongo
        if query.page_size == 0 {
            return Ok(Vec::new());
        }
        let filter = doc! {
            "booker": {
                "$regex": regex::escape(&query.booker),
                "$options": "i"
            }
        };
        let mut find_options = FindOptions::default();
        find_options.sort = Some(doc! {
            "date": query.direction.as_order(),
            "_id": 1
        });
        // The server reads a negative limit as a single batch, and rejects skips above i64
        let skip = i64::try_from(query.skip()).unwrap_or(i64::MAX);
        find_options.skip = Some(skip as u64);
        find_options.limit = Some(i64::try_from(query.page_size).unwrap_or(i64::MAX));

        mongo_repo::find_many_by::<_, ReservationMongo>(&self.collection, filter, Some(find_options))
            .await
    }

    async fn set_booker(&self, reservation_id: &ID, booker: &str) -> anyhow::Result<()> {
        let filter = doc! {
            "_id": *reservation_id.inner_ref()
        };
        let update = doc! {
            "$set": {
                "booker": booker
            }
        };
        mongo_repo::update_one(&self.collection, filter, update).await?;
        Ok(())
    }

    async fn push_guest(&self, reservation_id: &ID, guest: &str) -> anyhow::Result<()> {
        let filter = doc! {
            "_id": *reservation_id.inner_ref()
        };
        let update = doc! {
            "$push": {
                "guests": guest
            }
        };
        mongo_repo::update_one(&self.collection, filter, update).await?;
        Ok(())
    }

    async fn push_damage(&self, reservation_id: &ID, damage: &str) -> anyhow::Result<()> {
        let filter = doc! {
            "_id": *reservation_id.inner_ref()
        };
        // $push creates the array when the reservation had no damages yet
        let update = doc! {
            "$push": {
                "damages": damage
            }
        };
        mongo_repo::update_one(&self.collection, filter, update).await?;
        Ok(())
    }

    async fn apply_discount(
        &self,
        date: &NaiveDate,
        discount: &AnniversaryDiscount,
    ) -> anyhow::Result<u64> {
        let filter = doc! {
            "date": to_bson_date(date),
            "hasPaid": false,
            "$or": [
                {
                    "hasInsurance": true,
                    "price": {
                        "$gte": discount.insured_threshold
                    }
                },
                {
                    "hasInsurance": false,
                    "price": {
                        "$gte": discount.uninsured_threshold
                    }
                }
            ]
        };
        let update = doc! {
            "$inc": {
                "price": -discount.amount
            }
        };
        mongo_repo::update_many(&self.collection, filter, update).await
    }

    async fn checkin_list(&self, date: &NaiveDate) -> anyhow::Result<Option<ReservationCheckin>> {
        let pipeline = vec![
            doc! {
                "$match": {
                    "date": to_bson_date(date)
                }
            },
            doc! {
                "$group": {
                    "_id": "$date",
                    "bookers": {
                        "$addToSet": "$booker"
                    }
                }
            },
            doc! {
                "$project": {
                    "_id": 0,
                    "date": "$_id",
                    "bookers": 1
                }
            },
        ];

        let mut checkins =
            mongo_repo::aggregate::<_, CheckinMongo>(&self.collection, pipeline).await?;
        Ok(checkins.pop())
    }

    async fn summarize_income(
        &self,
        month: &YearMonth,
    ) -> anyhow::Result<Option<ReservationIncomeSummary>> {
        let filter = doc! {
            "date": {
                "$gte": to_bson_date(&month.first_day()),
                "$lt": to_bson_date(&month.first_day_of_next_month())
            }
        };
        // An empty month produces no summary and leaves a stored one untouched
        if self.collection.count_documents(filter.clone(), None).await? == 0 {
            return Ok(None);
        }

        let key = month.to_string();
        let pipeline = vec![
            doc! {
                "$match": filter
            },
            doc! {
                "$group": {
                    "_id": key.as_str(),
                    "income": {
                        "$sum": "$price"
                    }
                }
            },
            doc! {
                "$merge": {
                    "into": self.income_summaries.name(),
                    "on": "_id",
                    "whenMatched": "replace",
                    "whenNotMatched": "insert"
                }
            },
        ];
        mongo_repo::run_pipeline(&self.collection, pipeline).await?;

        mongo_repo::find_one_by::<_, IncomeSummaryMongo>(
            &self.income_summaries,
            doc! {
                "_id": key.as_str()
            },
        )
        .await
    }

    async fn insurance_claims(
        &self,
        chalets: &[String],
        date: &NaiveDate,
    ) -> anyhow::Result<Vec<ReservationInsuranceClaim>> {
        let pipeline = vec![
            doc! {
                "$match": {
                    "date": to_bson_date(date),
                    "chalet": {
                        "$in": chalets.to_vec()
                    },
                    "hasInsurance": true,
                    "damages.0": {
                        "$exists": true
                    }
                }
            },
            doc! {
                "$unwind": {
                    "path": "$damages",
                    "includeArrayIndex": "damageIndex"
                }
            },
            // Rows are reported in the order the chalets were asked for
            doc! {
                "$addFields": {
                    "chaletOrder": {
                        "$indexOfArray": [
                            {
                                "$literal": chalets.to_vec()
                            },
                            "$chalet"
                        ]
                    }
                }
            },
            doc! {
                "$sort": {
                    "chaletOrder": 1,
                    "_id": 1,
                    "damageIndex": 1
                }
            },
            doc! {
                "$project": {
                    "_id": 0,
                    "date": 1,
                    "chalet": 1,
                    "damage": "$damages",
                    "hasInsurance": 1
                }
            },
        ];

        mongo_repo::aggregate::<_, InsuranceClaimMongo>(&self.collection, pipeline).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ReservationMongo {
    _id: ObjectId,
    price: i64,
    date: DateTime,
    chalet: String,
    booker: String,
    guests: Vec<String>,
    #[serde(rename = "hasPaid")]
    has_paid: bool,
    #[serde(rename = "hasInsurance")]
    has_insurance: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    damages: Option<Vec<String>>,
}

impl MongoDocument<Reservation> for ReservationMongo {
    fn to_domain(self) -> anyhow::Result<Reservation> {
        Ok(Reservation {
            id: ID::from(self._id),
            price: self.price,
            date: from_bson_date(self.date)?,
            chalet: self.chalet,
            booker: self.booker,
            guests: self.guests,
            has_paid: self.has_paid,
            has_insurance: self.has_insurance,
            damages: self.damages,
        })
    }

    fn from_domain(reservation: &Reservation) -> Self {
        Self {
            _id: *reservation.id.inner_ref(),
            price: reservation.price,
            date: to_bson_date(&reservation.date),
            chalet: reservation.chalet.clone(),
            booker: reservation.booker.clone(),
            guests: reservation.guests.clone(),
            has_paid: reservation.has_paid,
            has_insurance: reservation.has_insurance,
            damages: reservation.damages.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CheckinMongo {
    date: DateTime,
    bookers: Vec<String>,
}

impl MongoDocument<ReservationCheckin> for CheckinMongo {
    fn to_domain(self) -> anyhow::Result<ReservationCheckin> {
        Ok(ReservationCheckin {
            date: from_bson_date(self.date)?,
            bookers: self.bookers.into_iter().collect(),
        })
    }

    fn from_domain(checkin: &ReservationCheckin) -> Self {
        Self {
            date: to_bson_date(&checkin.date),
            bookers: checkin.bookers.iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct InsuranceClaimMongo {
    date: DateTime,
    chalet: String,
    damage: String,
    #[serde(rename = "hasInsurance")]
    has_insurance: bool,
}

impl MongoDocument<ReservationInsuranceClaim> for InsuranceClaimMongo {
    fn to_domain(self) -> anyhow::Result<ReservationInsuranceClaim> {
        Ok(ReservationInsuranceClaim {
            date: from_bson_date(self.date)?,
            chalet: self.chalet,
            damage: self.damage,
            has_insurance: self.has_insurance,
        })
    }

    fn from_domain(claim: &ReservationInsuranceClaim) -> Self {
        Self {
            date: to_bson_date(&claim.date),
            chalet: claim.chalet.clone(),
            damage: claim.damage.clone(),
            has_insurance: claim.has_insurance,
        }
    }
}
