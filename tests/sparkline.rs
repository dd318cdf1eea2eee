use coin_market_wasm::config::{DEFAULT_IMAGE_BASE_URL, DEFAULT_SPARKLINE_BASE_URL};
use coin_market_wasm::domain::errors::SparklineError;
use coin_market_wasm::domain::market_data::{extract_image_coin_id, sparkline_url};

#[test]
fn sparkline_uses_numeric_image_id() {
    let image = "https://assets.coingecko.com/coins/images/279/large/ethereum.png?1696501628";
    assert_eq!(extract_image_coin_id(image, DEFAULT_IMAGE_BASE_URL), Ok(279));
    assert_eq!(
        sparkline_url(image, DEFAULT_IMAGE_BASE_URL, DEFAULT_SPARKLINE_BASE_URL).as_deref(),
        Ok("https://www.coingecko.com/coins/279/sparkline.svg")
    );
}

#[test]
fn foreign_image_url_is_rejected() {
    let result = sparkline_url("https://example.com/logo.png", DEFAULT_IMAGE_BASE_URL, DEFAULT_SPARKLINE_BASE_URL);
    assert!(matches!(result, Err(SparklineError::UnrecognizedImageUrl(_))));
}

#[test]
fn non_numeric_id_is_rejected() {
    let image = "https://assets.coingecko.com/coins/images/abc/large/x.png";
    assert!(matches!(
        extract_image_coin_id(image, DEFAULT_IMAGE_BASE_URL),
        Err(SparklineError::InvalidCoinId(_))
    ));
}
