use coin_market_wasm::domain::market_data::{AssetId, AssetIdentity, search_identities};

fn identity(id: &str, name: &str, symbol: &str) -> AssetIdentity {
    AssetIdentity { id: AssetId::from(id), name: name.into(), symbol: symbol.into() }
}

fn universe() -> Vec<AssetIdentity> {
    vec![
        identity("wrapped-bitcoin", "Wrapped Bitcoin", "wbtc"),
        identity("bitcoin-cash", "Bitcoin Cash", "bch"),
        identity("bitcoin", "Bitcoin", "btc"),
        identity("ethereum", "Ethereum", "eth"),
    ]
}

fn ids(results: &[AssetIdentity]) -> Vec<&str> {
    results.iter().map(|i| i.id.value()).collect()
}

#[test]
fn exact_then_prefix_then_substring() {
    let results = search_identities(&universe(), "Bitcoin", 10);
    assert_eq!(ids(&results), vec!["bitcoin", "bitcoin-cash", "wrapped-bitcoin"]);
}

#[test]
fn symbol_match_is_case_insensitive() {
    let results = search_identities(&universe(), "ETH", 10);
    assert_eq!(ids(&results), vec!["ethereum"]);
}

#[test]
fn respects_limit_and_blank_query() {
    assert_eq!(search_identities(&universe(), "bitcoin", 1).len(), 1);
    assert!(search_identities(&universe(), "   ", 10).is_empty());
    assert!(search_identities(&universe(), "doge", 10).is_empty());
}
