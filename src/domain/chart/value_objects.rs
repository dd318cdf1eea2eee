/// Value Object - one plotted sample: category label on X, price on Y
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub price: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, price: f64) -> Self {
        Self { label: label.into(), price }
    }
}

/// Value Object - Viewport
///
/// Maps category indices and prices onto canvas pixels inside a padded plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub padding: f64,
    /// Space reserved on the right for the price scale
    pub scale_space: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub point_count: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            padding: 40.0,
            scale_space: 80.0,
            min_price: 0.0,
            max_price: 100.0,
            point_count: 0,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Default::default() }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width as f64 - self.padding * 2.0 - self.scale_space).max(1.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height as f64 - self.padding * 2.0).max(1.0)
    }

    pub fn price_range(&self) -> f64 {
        self.max_price - self.min_price
    }

    /// Fit the price axis to `[min, max]` with 5% headroom on both ends.
    pub fn fit(&mut self, min: f64, max: f64, point_count: usize) {
        let span = max - min;
        let margin = if span > 0.0 { span * 0.05 } else { min.abs().max(1.0) * 0.05 };
        self.min_price = min - margin;
        self.max_price = max + margin;
        self.point_count = point_count;
    }

    /// X coordinate of the `index`-th category
    pub fn index_to_x(&self, index: usize) -> f64 {
        if self.point_count <= 1 {
            return self.padding + self.plot_width() / 2.0;
        }
        self.padding + self.plot_width() * index as f64 / (self.point_count - 1) as f64
    }

    /// Convert a price to a screen Y coordinate
    pub fn price_to_y(&self, price: f64) -> f64 {
        if self.price_range() == 0.0 {
            return self.padding + self.plot_height() / 2.0;
        }
        let normalized = (price - self.min_price) / self.price_range();
        self.padding + self.plot_height() * (1.0 - normalized)
    }

    /// Nearest category index under a screen X coordinate
    pub fn x_to_index(&self, x: f64) -> Option<usize> {
        if self.point_count == 0 {
            return None;
        }
        if self.point_count == 1 {
            return Some(0);
        }
        let step = self.plot_width() / (self.point_count - 1) as f64;
        let raw = ((x - self.padding) / step).round();
        Some(raw.clamp(0.0, (self.point_count - 1) as f64) as usize)
    }

    /// Evenly spaced prices for grid lines, top to bottom
    pub fn price_ticks(&self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![self.max_price];
        }
        (0..count)
            .map(|i| self.max_price - self.price_range() * i as f64 / (count - 1) as f64)
            .collect()
    }

    /// Indices of categories that get an X label, at most `max_labels`
    pub fn label_indices(&self, max_labels: usize) -> Vec<usize> {
        if self.point_count == 0 || max_labels == 0 {
            return Vec::new();
        }
        let step = self.point_count.div_ceil(max_labels).max(1);
        (0..self.point_count).step_by(step).collect()
    }
}
