#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    pub deleted_count: u64,
}
