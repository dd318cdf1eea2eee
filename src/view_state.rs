use crate::domain::market_data::ListingQuery;

/// Pager parameters of the market table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagerState {
    pub page_index: u32,
    pub rows_per_page: u32,
}

impl PagerState {
    pub fn new(rows_per_page: u32) -> Self {
        Self { page_index: 0, rows_per_page }
    }

    /// Number of pages for `total` rows, at least one
    pub fn page_count(&self, total: u64) -> u32 {
        if self.rows_per_page == 0 {
            return 1;
        }
        total.div_ceil(self.rows_per_page as u64).max(1) as u32
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self, total: u64) -> bool {
        self.page_index + 1 < self.page_count(total)
    }

    /// `from–to of total`, one-based like the pager shows it
    pub fn range_label(&self, total: u64) -> String {
        if total == 0 {
            return "0–0 of 0".to_string();
        }
        let from = self.page_index as u64 * self.rows_per_page as u64 + 1;
        let to = (from + self.rows_per_page as u64 - 1).min(total);
        format!("{}–{} of {}", from.min(total), to, total)
    }
}

impl From<&ListingQuery> for PagerState {
    fn from(query: &ListingQuery) -> Self {
        Self { page_index: query.page_index, rows_per_page: query.per_page }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_label_clamps_last_page() {
        let pager = PagerState { page_index: 2, rows_per_page: 15 };
        assert_eq!(pager.range_label(40), "31–40 of 40");
        assert!(!pager.has_next(40));
        assert!(pager.has_previous());
    }

    #[test]
    fn empty_total_has_one_page() {
        let pager = PagerState::new(15);
        assert_eq!(pager.page_count(0), 1);
        assert_eq!(pager.range_label(0), "0–0 of 0");
    }
}
