use super::dto::{CoinListEntryDto, GlobalResponseDto, MarketChartDto, MarketCoinDto};
use super::{GlooHttpClient, HttpUtils};
use crate::config::AppConfig;
use crate::domain::errors::FetchResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{
    AssetId, AssetIdentity, AssetSummary, ChangeWindow, Currency, GlobalSnapshot, HistoryWindow,
    ListingQuery, MarketDataRepository, PricePoint,
};

/// REST client for the CoinGecko v3 public API
#[derive(Debug, Clone)]
pub struct CoinGeckoRestClient {
    http: GlooHttpClient,
    currency: Currency,
}

impl CoinGeckoRestClient {
    pub fn new(base_url: impl Into<String>, currency: Currency) -> Self {
        Self { http: GlooHttpClient::new(base_url), currency }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone(), config.currency)
    }

    fn base_url(&self) -> &str {
        self.http.base_url().trim_end_matches('/')
    }

    pub fn markets_url(&self, query: &ListingQuery) -> String {
        let mut params = vec![
            ("vs_currency", query.currency.api_code()),
            ("page", query.api_page().to_string()),
            ("per_page", query.per_page.to_string()),
            ("price_change_percentage", ChangeWindow::api_list()),
        ];
        if let Some(id) = &query.filter {
            params.push(("ids", id.value().to_string()));
        }
        HttpUtils::build_url_with_params(&format!("{}/coins/markets", self.base_url()), &params)
    }

    pub fn global_url(&self) -> String {
        format!("{}/global", self.base_url())
    }

    pub fn coins_list_url(&self) -> String {
        format!("{}/coins/list", self.base_url())
    }

    pub fn market_chart_url(&self, id: &AssetId, currency: Currency, window: HistoryWindow) -> String {
        HttpUtils::build_url_with_params(
            &format!("{}/coins/{}/market_chart", self.base_url(), HttpUtils::url_encode(id.value())),
            &[("vs_currency", currency.api_code()), ("days", window.to_api_str().to_string())],
        )
    }
}

impl MarketDataRepository for CoinGeckoRestClient {
    async fn get_markets(&self, query: &ListingQuery) -> FetchResult<Vec<AssetSummary>> {
        let url = self.markets_url(query);
        let rows: Vec<MarketCoinDto> = self.http.get_json(&url).await?;
        let total = rows.len();
        let assets: Vec<AssetSummary> = rows
            .into_iter()
            .filter_map(|row| match row.to_domain() {
                Ok(asset) => Some(asset),
                Err(e) => {
                    crate::log_warn!(LogComponent::Infrastructure("CoinGecko"), "Skipping market row: {}", e);
                    None
                }
            })
            .collect();
        crate::log_info!(
            LogComponent::Infrastructure("CoinGecko"),
            "✅ Loaded {}/{} market rows (page {}, {} per page)",
            assets.len(),
            total,
            query.api_page(),
            query.per_page
        );
        Ok(assets)
    }

    async fn get_global(&self) -> FetchResult<GlobalSnapshot> {
        let response: GlobalResponseDto = self.http.get_json(&self.global_url()).await?;
        let snapshot = response.to_domain(self.currency);
        crate::log_info!(
            LogComponent::Infrastructure("CoinGecko"),
            "✅ Global snapshot: {} active assets, {} markets",
            snapshot.active_cryptocurrencies,
            snapshot.markets
        );
        Ok(snapshot)
    }

    async fn get_identities(&self) -> FetchResult<Vec<AssetIdentity>> {
        let entries: Vec<CoinListEntryDto> = self.http.get_json(&self.coins_list_url()).await?;
        let identities: Vec<AssetIdentity> = entries.into_iter().filter_map(CoinListEntryDto::to_domain).collect();
        crate::log_info!(LogComponent::Infrastructure("CoinGecko"), "✅ Loaded {} asset identities", identities.len());
        Ok(identities)
    }

    async fn get_price_history(
        &self,
        id: &AssetId,
        currency: Currency,
        window: HistoryWindow,
    ) -> FetchResult<Vec<PricePoint>> {
        let chart: MarketChartDto = self.http.get_json(&self.market_chart_url(id, currency, window)).await?;
        let points = chart.to_domain();
        crate::log_info!(
            LogComponent::Infrastructure("CoinGecko"),
            "📈 Loaded {} price samples for {} ({} days)",
            points.len(),
            id,
            window.to_api_str()
        );
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markets_url_carries_pagination() {
        let client = CoinGeckoRestClient::new("https://api.coingecko.com/api/v3", Currency::Usd);
        let query = ListingQuery::new(Currency::Usd, 15).with_page(1);
        assert_eq!(
            client.markets_url(&query),
            "https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd&page=2&per_page=15&price_change_percentage=1h,24h,7d"
        );
    }

    #[test]
    fn market_chart_url_uses_window_days() {
        let client = CoinGeckoRestClient::new("https://api.coingecko.com/api/v3/", Currency::Usd);
        let url = client.market_chart_url(&AssetId::from("bitcoin"), Currency::Usd, HistoryWindow::Max);
        assert_eq!(url, "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart?vs_currency=usd&days=max");
    }
}
