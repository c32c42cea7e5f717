use chalet_reservations_domain::ID;

// Mocking out id generation so that tests can control which ids new reservations get.
pub trait IIdProvider: Send + Sync {
    /// A globally unique id for a new document
    fn provide(&self) -> ID;
}

/// Provider that generates a fresh `ObjectId` per call and is used when not testing
pub struct ObjectIdProvider {}
impl IIdProvider for ObjectIdProvider {
    fn provide(&self) -> ID {
        ID::new()
    }
}
