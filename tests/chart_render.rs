use coin_market_wasm::domain::chart::PriceChart;
use coin_market_wasm::domain::market_data::{HistoryWindow, PricePoint};
use coin_market_wasm::infrastructure::rendering::LineChartRenderer;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn renders_series_with_highlight() {
    let history: Vec<_> = (0..20u64).map(|i| PricePoint::new(i * 3_600_000, 100.0 + i as f64)).collect();
    let chart = PriceChart::from_history("BITCOIN Price (USD)".into(), HistoryWindow::OneDay, &history, |ts, _| {
        format!("{:02}:00", ts / 3_600_000)
    });
    let renderer = LineChartRenderer::new(400, 200, "USD");
    let canvas = canvas();

    assert!(renderer.render(&canvas, &chart, Some(3)).is_ok());
    assert_eq!((canvas.width(), canvas.height()), (400, 200));

    let viewport = renderer.viewport_for(&chart);
    assert_eq!(viewport.x_to_index(viewport.index_to_x(7)), Some(7));
}

#[wasm_bindgen_test]
fn renders_empty_series_message() {
    let chart = PriceChart::new("BITCOIN Price (USD)".into(), HistoryWindow::SevenDays);
    let renderer = LineChartRenderer::new(300, 150, "USD");
    assert!(renderer.render(&canvas(), &chart, None).is_ok());
}
