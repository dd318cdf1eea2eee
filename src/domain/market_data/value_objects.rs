use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

/// Value Object - CoinGecko asset identifier, e.g. `bitcoin`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Display, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Asset id cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - quote currency used for prices and volumes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    #[default]
    #[strum(serialize = "USD")]
    Usd,
    #[strum(serialize = "EUR")]
    Eur,
    #[strum(serialize = "GBP")]
    Gbp,
    #[strum(serialize = "JPY")]
    Jpy,
    #[strum(serialize = "CHF")]
    Chf,
}

impl Currency {
    /// ISO code as written in the UI, e.g. `USD`
    pub fn code(&self) -> &str {
        self.as_ref()
    }

    /// Lowercase code expected by the `vs_currency` query parameter
    pub fn api_code(&self) -> String {
        self.code().to_lowercase()
    }
}

/// Value Object - span of a price history query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum HistoryWindow {
    #[default]
    #[strum(serialize = "1")]
    #[serde(rename = "1")]
    OneDay,
    #[strum(serialize = "7")]
    #[serde(rename = "7")]
    SevenDays,
    #[strum(serialize = "30")]
    #[serde(rename = "30")]
    ThirtyDays,
    #[strum(serialize = "90")]
    #[serde(rename = "90")]
    NinetyDays,
    #[strum(serialize = "365")]
    #[serde(rename = "365")]
    OneYear,
    #[strum(serialize = "max")]
    #[serde(rename = "max")]
    Max,
}

impl HistoryWindow {
    /// Value of the `days` query parameter
    pub fn to_api_str(&self) -> &str {
        self.as_ref()
    }

    /// Tab caption
    pub fn label(&self) -> &'static str {
        match self {
            Self::OneDay => "24h",
            Self::SevenDays => "7d",
            Self::ThirtyDays => "1m",
            Self::NinetyDays => "3m",
            Self::OneYear => "1y",
            Self::Max => "Max",
        }
    }

    /// Only the one-day window is labelled by time of day.
    pub fn uses_time_of_day_labels(&self) -> bool {
        matches!(self, Self::OneDay)
    }

    pub fn all() -> Vec<HistoryWindow> {
        Self::iter().collect()
    }
}

/// Value Object - window of a percentage-change column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr)]
pub enum ChangeWindow {
    #[strum(serialize = "1h")]
    OneHour,
    #[strum(serialize = "24h")]
    OneDay,
    #[strum(serialize = "7d")]
    SevenDays,
}

impl ChangeWindow {
    /// `1h,24h,7d` as sent in `price_change_percentage`
    pub fn api_list() -> String {
        Self::iter().map(|w| w.as_ref().to_string()).collect::<Vec<_>>().join(",")
    }
}

/// Value Object - everything that determines which listing page is requested
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingQuery {
    pub currency: Currency,
    /// Zero-based page index as shown by the pager
    pub page_index: u32,
    pub per_page: u32,
    pub filter: Option<AssetId>,
}

impl ListingQuery {
    pub fn new(currency: Currency, per_page: u32) -> Self {
        Self { currency, page_index: 0, per_page, filter: None }
    }

    /// One-based page number sent to the API.
    ///
    /// A filtered query is scoped to one id, so it always asks for the first page.
    pub fn api_page(&self) -> u32 {
        if self.filter.is_some() { 1 } else { self.page_index + 1 }
    }

    /// Index of the first row of the page, i.e. the pagination offset
    pub fn offset(&self) -> u64 {
        self.page_index as u64 * self.per_page as u64
    }

    pub fn with_page(&self, page_index: u32) -> Self {
        Self { page_index, ..self.clone() }
    }

    pub fn with_per_page(&self, per_page: u32) -> Self {
        Self { per_page, ..self.clone() }
    }

    pub fn with_filter(&self, filter: Option<AssetId>) -> Self {
        Self { filter, ..self.clone() }
    }
}

/// Value Object - colour class of a signed change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Trend {
    #[display(fmt = "up")]
    Up,
    #[display(fmt = "down")]
    Down,
    #[display(fmt = "flat")]
    Unknown,
}

impl Trend {
    /// Zero counts as up, a missing value has no trend.
    pub fn of(change: Option<f64>) -> Self {
        match change {
            Some(v) if v >= 0.0 => Self::Up,
            Some(_) => Self::Down,
            None => Self::Unknown,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Up => "\u{21e1}",
            Self::Down => "\u{21e3}",
            Self::Unknown => "",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Up => "#66bb6a",
            Self::Down => "#f44336",
            Self::Unknown => "#9e9e9e",
        }
    }
}
