#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Sort order as understood by the document store
    pub fn as_order(&self) -> i32 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }
}

/// A page of reservations sorted by date, optionally narrowed down to
/// bookers whose name contains `booker`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationPageQuery {
    pub page_size: usize,
    /// Zero based
    pub page: usize,
    pub direction: SortDirection,
    pub booker: String,
}

impl ReservationPageQuery {
    pub fn skip(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// Case insensitive partial match on the booker name
    pub fn matches_booker(&self, booker: &str) -> bool {
        booker
            .to_lowercase()
            .contains(&self.booker.to_lowercase())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn query(page_size: usize, page: usize, booker: &str) -> ReservationPageQuery {
        ReservationPageQuery {
            page_size,
            page,
            direction: SortDirection::Ascending,
            booker: booker.into(),
        }
    }

    #[test]
    fn skip_is_page_times_page_size() {
        assert_eq!(query(2, 0, "").skip(), 0);
        assert_eq!(query(2, 3, "").skip(), 6);
        assert_eq!(query(usize::MAX, 2, "").skip(), usize::MAX);
    }

    #[test]
    fn booker_match_is_partial_and_case_insensitive() {
        let q = query(2, 0, "o");
        assert!(q.matches_booker("thomas"));
        assert!(q.matches_booker("JOHN"));
        assert!(!q.matches_booker("will"));
        assert!(query(2, 0, "").matches_booker("anyone"));
        assert!(query(2, 0, "Anou").matches_booker("anouk"));
    }

    #[test]
    fn direction_as_store_order() {
        assert_eq!(SortDirection::Ascending.as_order(), 1);
        assert_eq!(SortDirection::Descending.as_order(), -1);
    }
}
