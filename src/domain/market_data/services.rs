use crate::domain::errors::SparklineError;
use crate::domain::market_data::AssetIdentity;

/// Numeric id CoinGecko embeds in asset image URLs:
/// `{image_base}/{id}/large/{file}`.
pub fn extract_image_coin_id(image_url: &str, image_base: &str) -> Result<u64, SparklineError> {
    let prefix = format!("{}/", image_base.trim_end_matches('/'));
    let rest = image_url
        .strip_prefix(&prefix)
        .ok_or_else(|| SparklineError::UnrecognizedImageUrl(image_url.to_string()))?;
    let (id, _) = rest
        .split_once("/large/")
        .ok_or_else(|| SparklineError::UnrecognizedImageUrl(image_url.to_string()))?;
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SparklineError::InvalidCoinId(id.to_string()));
    }
    id.parse::<u64>()
        .map_err(|_| SparklineError::InvalidCoinId(id.to_string()))
}

/// 7-day sparkline image for the asset whose image URL is given
pub fn sparkline_url(image_url: &str, image_base: &str, sparkline_base: &str) -> Result<String, SparklineError> {
    let id = extract_image_coin_id(image_url, image_base)?;
    Ok(format!("{}/{}/sparkline.svg", sparkline_base.trim_end_matches('/'), id))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchRank {
    Exact,
    Prefix,
    Contains,
}

fn rank(identity: &AssetIdentity, needle: &str) -> Option<MatchRank> {
    let id = identity.id.value().to_lowercase();
    let symbol = identity.symbol.to_lowercase();
    let name = identity.name.to_lowercase();

    if symbol == needle || id == needle || name == needle {
        Some(MatchRank::Exact)
    } else if name.starts_with(needle) || symbol.starts_with(needle) || id.starts_with(needle) {
        Some(MatchRank::Prefix)
    } else if name.contains(needle) || symbol.contains(needle) || id.contains(needle) {
        Some(MatchRank::Contains)
    } else {
        None
    }
}

/// Suggestions for the search box.
///
/// Case-insensitive over name, symbol and id. Exact matches come first, then
/// prefix matches, then substring matches; ties keep list order.
pub fn search_identities(identities: &[AssetIdentity], query: &str, limit: usize) -> Vec<AssetIdentity> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(MatchRank, usize, &AssetIdentity)> = identities
        .iter()
        .enumerate()
        .filter_map(|(i, identity)| rank(identity, &needle).map(|r| (r, i, identity)))
        .collect();
    ranked.sort_by_key(|(r, i, _)| (*r, *i));
    ranked.into_iter().take(limit).map(|(_, _, identity)| identity.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGES: &str = "https://assets.coingecko.com/coins/images";
    const COINS: &str = "https://www.coingecko.com/coins";

    #[test]
    fn derives_sparkline_from_image_url() {
        let url = sparkline_url(
            "https://assets.coingecko.com/coins/images/1/large/bitcoin.png?1696501400",
            IMAGES,
            COINS,
        )
        .unwrap();
        assert_eq!(url, "https://www.coingecko.com/coins/1/sparkline.svg");
    }

    #[test]
    fn rejects_foreign_image_url() {
        let err = extract_image_coin_id("https://example.com/logo.png", IMAGES).unwrap_err();
        assert!(matches!(err, SparklineError::UnrecognizedImageUrl(_)));
    }

    #[test]
    fn rejects_non_numeric_id() {
        let err = extract_image_coin_id(&format!("{IMAGES}/abc/large/x.png"), IMAGES).unwrap_err();
        assert_eq!(err, SparklineError::InvalidCoinId("abc".into()));
    }
}
