use mongodb::bson::oid::ObjectId;
use std::{cmp::Ordering, fmt::Display, str::FromStr};
use thiserror::Error;

pub trait Entity {
    fn id(&self) -> &ID;
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Identifier of a persisted document.
///
/// Ids compare by their creation second first and then by the driver's
/// counter, which is what repositories fall back on to break ties when
/// sorting. The counter starts at a random value and wraps at 2^24, so two
/// ids created within the same second straddling the wrap compare in
/// reverse creation order.
#[derive(Debug, Clone, Copy, Hash)]
pub struct ID(ObjectId);
impl ID {
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    pub fn from(oid: ObjectId) -> Self {
        Self(oid)
    }

    pub fn as_string(&self) -> String {
        self.0.to_hex()
    }

    pub fn inner_ref(&self) -> &ObjectId {
        &self.0
    }
}

impl Default for ID {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[derive(Error, Debug)]
pub enum InvalidIDError {
    #[error("ID: {0} is malformed")]
    Malformed(String),
}

impl FromStr for ID {
    type Err = InvalidIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidIDError::Malformed(s.to_string()))
    }
}

impl PartialEq for ID {
    fn eq(&self, other: &Self) -> bool {
        self.0.bytes() == other.0.bytes()
    }
}

impl Eq for ID {}

impl PartialOrd for ID {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ID {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.bytes().cmp(&other.0.bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_its_own_string_representation() {
        let id = ID::new();
        let parsed = id.as_string().parse::<ID>().expect("To parse id");
        assert_eq!(parsed, id);
    }

    #[test]
    fn it_rejects_malformed_ids() {
        assert!("not-an-object-id".parse::<ID>().is_err());
        assert!("".parse::<ID>().is_err());
    }

    fn id(seconds: u32, counter: u32) -> ID {
        let mut bytes = [0_u8; 12];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);
        ID::from(ObjectId::from_bytes(bytes))
    }

    #[test]
    fn ids_are_ordered_by_second_then_counter() {
        assert!(id(1_672_531_200, 7) < id(1_672_531_200, 8));
        // A later second wins even when the counter wrapped in between
        assert!(id(1_672_531_200, 0xff_ff_ff) < id(1_672_531_201, 0));
        assert_eq!(id(1_672_531_200, 3), id(1_672_531_200, 3));
    }
}
