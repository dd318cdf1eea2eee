use crate::domain::{
    chart::{PriceChart, Viewport},
    errors::AppError,
    logging::LogComponent,
};
use crate::number_utils::format_currency;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND: &str = "#ffffff";
const GRID: &str = "#eeeeee";
const AXIS_TEXT: &str = "#666666";
const LINE: &str = "rgb(75, 192, 192)";
const TITLE: &str = "#333333";
const FONT: &str = "12px sans-serif";

/// Price ticks drawn on the right-hand scale
const PRICE_TICKS: usize = 5;
/// Upper bound of category labels along the X axis
const MAX_X_LABELS: usize = 8;

fn js_err(context: &str) -> impl Fn(JsValue) -> AppError + '_ {
    move |e| AppError::Rendering(format!("{context}: {e:?}"))
}

/// Canvas 2D renderer for the price history line chart
#[derive(Debug, Clone)]
pub struct LineChartRenderer {
    width: u32,
    height: u32,
    currency_code: String,
}

impl LineChartRenderer {
    pub fn new(width: u32, height: u32, currency_code: impl Into<String>) -> Self {
        Self { width, height, currency_code: currency_code.into() }
    }

    /// Viewport the chart is drawn with, for hit-testing the pointer
    pub fn viewport_for(&self, chart: &PriceChart) -> Viewport {
        chart.viewport(self.width, self.height)
    }

    fn context(&self, canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, AppError> {
        canvas.set_width(self.width);
        canvas.set_height(self.height);
        canvas
            .get_context("2d")
            .map_err(js_err("Failed to get 2D context"))?
            .ok_or_else(|| AppError::Rendering("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Rendering("Failed to cast to 2D context".to_string()))
    }

    /// Draw `chart`, marking the point at `highlight` if given.
    pub fn render(&self, canvas: &HtmlCanvasElement, chart: &PriceChart, highlight: Option<usize>) -> Result<(), AppError> {
        let context = self.context(canvas)?;
        let (w, h) = (self.width as f64, self.height as f64);

        context.clear_rect(0.0, 0.0, w, h);
        context.set_fill_style_str(BACKGROUND);
        context.fill_rect(0.0, 0.0, w, h);

        if chart.is_empty() {
            self.render_no_data_message(&context)?;
            return Ok(());
        }

        let viewport = self.viewport_for(chart);
        self.render_price_scale(&context, &viewport)?;
        self.render_x_labels(&context, &viewport, chart)?;
        self.render_line(&context, &viewport, chart);
        if let Some(index) = highlight.filter(|i| *i < chart.len()) {
            self.render_highlight(&context, &viewport, chart, index)?;
        }
        self.render_title(&context, &chart.title)?;

        crate::log_trace!(LogComponent::Infrastructure("CanvasRenderer"), "Rendered {} points", chart.len());
        Ok(())
    }

    fn render_price_scale(&self, context: &CanvasRenderingContext2d, viewport: &Viewport) -> Result<(), AppError> {
        context.set_font(FONT);
        context.set_text_baseline("middle");
        context.set_text_align("left");
        context.set_line_width(1.0);

        let right = viewport.padding + viewport.plot_width();
        for price in viewport.price_ticks(PRICE_TICKS) {
            let y = viewport.price_to_y(price);
            context.set_stroke_style_str(GRID);
            context.begin_path();
            context.move_to(viewport.padding, y);
            context.line_to(right, y);
            context.stroke();

            context.set_fill_style_str(AXIS_TEXT);
            context
                .fill_text(&format_currency(&self.currency_code, price), right + 8.0, y)
                .map_err(js_err("Failed to draw price label"))?;
        }
        Ok(())
    }

    fn render_x_labels(&self, context: &CanvasRenderingContext2d, viewport: &Viewport, chart: &PriceChart) -> Result<(), AppError> {
        context.set_font(FONT);
        context.set_fill_style_str(AXIS_TEXT);
        context.set_text_align("center");
        context.set_text_baseline("top");
        let y = viewport.padding + viewport.plot_height() + 8.0;
        for index in viewport.label_indices(MAX_X_LABELS) {
            context
                .fill_text(&chart.points[index].label, viewport.index_to_x(index), y)
                .map_err(js_err("Failed to draw axis label"))?;
        }
        Ok(())
    }

    fn render_line(&self, context: &CanvasRenderingContext2d, viewport: &Viewport, chart: &PriceChart) {
        context.set_stroke_style_str(LINE);
        context.set_line_width(1.0);
        context.begin_path();
        for (i, point) in chart.points.iter().enumerate() {
            let (x, y) = (viewport.index_to_x(i), viewport.price_to_y(point.price));
            if i == 0 {
                context.move_to(x, y);
            } else {
                context.line_to(x, y);
            }
        }
        context.stroke();
    }

    fn render_highlight(&self, context: &CanvasRenderingContext2d, viewport: &Viewport, chart: &PriceChart, index: usize) -> Result<(), AppError> {
        let x = viewport.index_to_x(index);
        let y = viewport.price_to_y(chart.points[index].price);

        context.set_stroke_style_str(GRID);
        context.begin_path();
        context.move_to(x, viewport.padding);
        context.line_to(x, viewport.padding + viewport.plot_height());
        context.stroke();

        context.set_fill_style_str(LINE);
        context.begin_path();
        context
            .arc(x, y, 3.0, 0.0, std::f64::consts::TAU)
            .map_err(js_err("Failed to draw marker"))?;
        context.fill();
        Ok(())
    }

    fn render_no_data_message(&self, context: &CanvasRenderingContext2d) -> Result<(), AppError> {
        context.set_fill_style_str(AXIS_TEXT);
        context.set_font("16px sans-serif");
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context
            .fill_text("No price data available", self.width as f64 / 2.0, self.height as f64 / 2.0)
            .map_err(js_err("Failed to draw message"))?;

        crate::log_warn!(LogComponent::Infrastructure("CanvasRenderer"), "No price data to render");
        Ok(())
    }

    fn render_title(&self, context: &CanvasRenderingContext2d, title: &str) -> Result<(), AppError> {
        context.set_fill_style_str(TITLE);
        context.set_font("14px sans-serif");
        context.set_text_align("left");
        context.set_text_baseline("alphabetic");
        context.fill_text(title, 10.0, 20.0).map_err(js_err("Failed to draw title"))
    }
}
