use super::value_objects::{ChartPoint, Viewport};
use crate::domain::market_data::{HistoryWindow, PricePoint};
use crate::number_utils::remove_duplicates;

/// Domain entity - line chart of one asset's price history
#[derive(Debug, Clone, PartialEq)]
pub struct PriceChart {
    pub title: String,
    pub window: HistoryWindow,
    pub points: Vec<ChartPoint>,
}

impl PriceChart {
    pub fn new(title: String, window: HistoryWindow) -> Self {
        Self { title, window, points: Vec::new() }
    }

    /// Build the plotted series from raw samples.
    ///
    /// Each sample is labelled with `label_for`; samples whose label was
    /// already produced are dropped, so the first sample of a label wins.
    pub fn from_history<F>(title: String, window: HistoryWindow, history: &[PricePoint], label_for: F) -> Self
    where
        F: Fn(u64, HistoryWindow) -> String,
    {
        let labelled: Vec<ChartPoint> = history
            .iter()
            .map(|p| ChartPoint::new(label_for(p.timestamp, window), p.price))
            .collect();
        let points = remove_duplicates(labelled, |p| p.label.clone());
        Self { title, window, points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.points.iter().map(|p| p.price).filter(|p| p.is_finite());
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Viewport fitted to this series on a canvas of the given size
    pub fn viewport(&self, width: u32, height: u32) -> Viewport {
        let mut viewport = Viewport::new(width, height);
        if let Some((min, max)) = self.price_range() {
            viewport.fit(min, max, self.points.len());
        }
        viewport
    }
}

/// Chart dataset label, e.g. `BITCOIN Price (USD)`
pub fn dataset_label(asset_id: &str, currency_code: &str) -> String {
    format!("{} Price ({})", asset_id.to_uppercase(), currency_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour_label(ts: u64, _window: HistoryWindow) -> String {
        format!("{:02}", (ts / 3_600_000) % 24)
    }

    #[test]
    fn collapses_samples_sharing_a_label() {
        let history = vec![
            PricePoint::new(0, 1.0),
            PricePoint::new(60_000, 2.0),
            PricePoint::new(3_600_000, 3.0),
        ];
        let chart = PriceChart::from_history("t".into(), HistoryWindow::OneDay, &history, hour_label);
        assert_eq!(chart.points, vec![ChartPoint::new("00", 1.0), ChartPoint::new("01", 3.0)]);
        assert_eq!(chart.price_range(), Some((1.0, 3.0)));
    }

    #[test]
    fn dataset_label_uppercases_id() {
        assert_eq!(dataset_label("bitcoin", "USD"), "BITCOIN Price (USD)");
    }
}
