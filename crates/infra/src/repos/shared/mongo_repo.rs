use super::repo::DeleteResult;
use anyhow::Result;
use chrono::NaiveDate;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId, DateTime, Document},
    options::FindOptions,
    Collection, Cursor,
};
use serde::{de::DeserializeOwned, Serialize};

pub trait MongoDocument<E>: Serialize + DeserializeOwned {
    fn to_domain(self) -> Result<E>;
    fn from_domain(entity: &E) -> Self;
}

fn get_id_filter(oid: &ObjectId) -> Document {
    doc! {
        "_id": *oid
    }
}

/// Dates are stored as midnight UTC of that day
pub fn to_bson_date(date: &NaiveDate) -> DateTime {
    let millis = date
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc().timestamp_millis())
        .unwrap_or_default();
    DateTime::from_millis(millis)
}

pub fn from_bson_date(date: DateTime) -> Result<NaiveDate> {
    chrono::DateTime::from_timestamp_millis(date.timestamp_millis())
        .map(|datetime| datetime.date_naive())
        .ok_or_else(|| anyhow::anyhow!("Stored date is out of range: {}", date))
}

fn entity_to_persistence<E, D: MongoDocument<E>>(entity: &E) -> Result<Document> {
    let raw = D::from_domain(entity);
    bson::to_document(&raw).map_err(anyhow::Error::new)
}

fn persistence_to_entity<E, D: MongoDocument<E>>(doc: Document) -> Result<E> {
    let raw: D = bson::from_document(doc)?;
    raw.to_domain()
}

pub async fn insert<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entity: &E,
) -> Result<()> {
    let doc = entity_to_persistence::<E, D>(entity)?;
    collection.insert_one(doc, None).await?;
    Ok(())
}

pub async fn find<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    id: &ObjectId,
) -> Result<Option<E>> {
    let filter = get_id_filter(id);
    find_one_by::<E, D>(collection, filter).await
}

pub async fn find_one_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<Option<E>> {
    match collection.find_one(filter, None).await? {
        Some(doc) => persistence_to_entity::<E, D>(doc).map(Some),
        None => Ok(None),
    }
}

pub async fn find_many_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
    options: Option<FindOptions>,
) -> Result<Vec<E>> {
    let cursor = collection.find(filter, options).await?;
    consume_cursor::<E, D>(cursor).await
}

/// Updates the first document matching the filter. Returns the number of modified documents.
pub async fn update_one(
    collection: &Collection<Document>,
    filter: Document,
    update: Document,
) -> Result<u64> {
    collection
        .update_one(filter, update, None)
        .await
        .map(|res| res.modified_count)
        .map_err(anyhow::Error::new)
}

/// Updates every document matching the filter. Returns the number of modified documents.
pub async fn update_many(
    collection: &Collection<Document>,
    filter: Document,
    update: Document,
) -> Result<u64> {
    collection
        .update_many(filter, update, None)
        .await
        .map(|res| res.modified_count)
        .map_err(anyhow::Error::new)
}

pub async fn delete<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    id: &ObjectId,
) -> Result<Option<E>> {
    let filter = get_id_filter(id);
    match collection.find_one_and_delete(filter, None).await? {
        Some(doc) => persistence_to_entity::<E, D>(doc).map(Some),
        None => Ok(None),
    }
}

pub async fn delete_many_by(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<DeleteResult> {
    let res = collection.delete_many(filter, None).await?;
    Ok(DeleteResult {
        deleted_count: res.deleted_count,
    })
}

/// Runs the pipeline and maps every resulting document to the view `V`
pub async fn aggregate<V, D: MongoDocument<V>>(
    collection: &Collection<Document>,
    pipeline: Vec<Document>,
) -> Result<Vec<V>> {
    let cursor = collection.aggregate(pipeline, None).await?;
    consume_cursor::<V, D>(cursor).await
}

/// Runs a pipeline that writes its output elsewhere, e.g. through `$merge`
pub async fn run_pipeline(collection: &Collection<Document>, pipeline: Vec<Document>) -> Result<()> {
    let mut cursor = collection.aggregate(pipeline, None).await?;
    while cursor.try_next().await?.is_some() {}
    Ok(())
}

async fn consume_cursor<E, D: MongoDocument<E>>(mut cursor: Cursor<Document>) -> Result<Vec<E>> {
    let mut documents = vec![];
    while let Some(document) = cursor.try_next().await? {
        documents.push(persistence_to_entity::<E, D>(document)?);
    }

    Ok(documents)
}
