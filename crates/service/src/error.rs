use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReservationServiceError {
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("The reservation store failed to perform the operation: {0}")]
    StorageError(#[source] anyhow::Error),
}

impl ReservationServiceError {
    pub fn is_bad_client_data(&self) -> bool {
        matches!(self, Self::BadClientData(_))
    }
}
