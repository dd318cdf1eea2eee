use leptos::html::Canvas;
use leptos::*;
use web_sys::MouseEvent;

use crate::{
    app::use_services,
    domain::{chart::PriceChart, logging::LogComponent},
    infrastructure::rendering::LineChartRenderer,
    number_utils::format_currency,
};

const CHART_WIDTH: u32 = 720;
const CHART_HEIGHT: u32 = 360;

/// Hovered sample: label, price and its position on the canvas
#[derive(Debug, Clone, PartialEq)]
struct HoverPoint {
    label: String,
    price: f64,
    x: f64,
    y: f64,
}

/// Line chart of one price history. Hidden while `chart` is `None`.
#[component]
pub fn PriceChartCanvas(#[prop(into)] chart: Signal<Option<PriceChart>>) -> impl IntoView {
    let code = use_services().config.currency.code().to_string();
    let renderer = store_value(LineChartRenderer::new(CHART_WIDTH, CHART_HEIGHT, code.clone()));
    let canvas_ref = create_node_ref::<Canvas>();
    let (hover, set_hover) = create_signal::<Option<usize>>(None);

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let highlight = hover.get();
        chart.with(|chart| {
            let Some(chart) = chart else {
                return;
            };
            if let Err(e) = renderer.with_value(|r| r.render(&canvas, chart, highlight)) {
                crate::log_error!(LogComponent::Presentation("PriceChart"), "Render failed: {}", e);
            }
        });
    });

    // A new series invalidates the hovered index.
    create_effect(move |_| {
        chart.track();
        set_hover.set(None);
    });

    let on_mouse_move = move |ev: MouseEvent| {
        let x = ev.offset_x() as f64;
        let index = chart.with_untracked(|chart| {
            chart
                .as_ref()
                .and_then(|c| renderer.with_value(|r| r.viewport_for(c)).x_to_index(x))
        });
        if index != hover.get_untracked() {
            set_hover.set(index);
        }
    };

    let hover_point = move || {
        let index = hover.get()?;
        chart.with(|chart| {
            let chart = chart.as_ref()?;
            let point = chart.points.get(index)?;
            let viewport = renderer.with_value(|r| r.viewport_for(chart));
            Some(HoverPoint {
                label: point.label.clone(),
                price: point.price,
                x: viewport.index_to_x(index),
                y: viewport.price_to_y(point.price),
            })
        })
    };

    view! {
        <div class="chart-wrapper" style:display=move || chart.with(|c| if c.is_some() { "block" } else { "none" })>
            <canvas
                node_ref=canvas_ref
                width=CHART_WIDTH
                height=CHART_HEIGHT
                on:mousemove=on_mouse_move
                on:mouseleave=move |_| set_hover.set(None)
            />
            {move || hover_point().map(|p| {
                let text = format!("{}: {}", p.label, format_currency(&code, p.price));
                view! {
                    <div
                        class="chart-tooltip"
                        style:left=format!("{}px", p.x + 10.0)
                        style:top=format!("{}px", p.y - 30.0)
                    >
                        {text}
                    </div>
                }
            })}
        </div>
    }
}
