//! Canvas 2D drawing of the price history chart.

pub mod canvas_renderer;

pub use canvas_renderer::LineChartRenderer;
