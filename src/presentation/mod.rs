//! Leptos components of the dashboard.

pub mod detail_view;
pub mod loader;
pub mod market_table;
pub mod price_chart;
pub mod toasts;

pub use detail_view::DetailView;
pub use loader::Loader;
pub use market_table::MarketTable;
pub use price_chart::PriceChartCanvas;
pub use toasts::ToastContainer;
