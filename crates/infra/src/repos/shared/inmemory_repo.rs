use crate::repos::shared::repo::DeleteResult;
use chalet_reservations_domain::{Entity, ID};
use std::sync::Mutex;

/// Useful functions for creating inmemory repositories

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    collection.iter().find(|item| item.id() == val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> Vec<T> {
    let collection = collection.lock().unwrap();
    let mut items = Vec::new();
    for item in collection.iter() {
        if compare(item) {
            items.push(item.clone());
        }
    }
    items
}

pub fn delete<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = collection.lock().unwrap();
    let index = collection.iter().position(|item| item.id() == val_id)?;
    Some(collection.remove(index))
}

pub fn delete_by<T, F: Fn(&T) -> bool>(collection: &Mutex<Vec<T>>, compare: F) -> DeleteResult {
    let mut collection = collection.lock().unwrap();
    let before = collection.len();
    collection.retain(|item| !compare(item));
    DeleteResult {
        deleted_count: (before - collection.len()) as u64,
    }
}

/// Applies `update` to every item matching `compare`. Returns the number of updated items.
pub fn update_many<T, F: Fn(&T) -> bool, U: Fn(&mut T)>(
    collection: &Mutex<Vec<T>>,
    compare: F,
    update: U,
) -> u64 {
    let mut collection = collection.lock().unwrap();
    let mut updated = 0;
    for item in collection.iter_mut() {
        if compare(item) {
            update(item);
            updated += 1;
        }
    }
    updated
}

/// Replaces the item matching `compare`, or appends `val` when there is none
pub fn upsert_by<T: Clone, F: Fn(&T) -> bool>(val: &T, collection: &Mutex<Vec<T>>, compare: F) {
    let mut collection = collection.lock().unwrap();
    match collection.iter().position(|item| compare(item)) {
        Some(index) => collection[index] = val.clone(),
        None => collection.push(val.clone()),
    }
}
