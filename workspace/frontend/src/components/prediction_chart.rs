use common::{PredictionChart as Chart, SectionView};
use plotly::common::{Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::common::error::SectionNotice;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub section: SectionView<Chart>,
}

/// Actual vs predicted prices for a neural model.
#[function_component(PredictionChart)]
pub fn prediction_chart(props: &Props) -> Html {
    let body = match &props.section {
        SectionView::Ready { content } => html! { <PlotlyChart chart={content.clone()} /> },
        SectionView::Warning { message } => html! { <SectionNotice message={message.clone()} /> },
        SectionView::Error { message } => html! { <SectionNotice message={message.clone()} is_error=true /> },
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">{body}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PlotlyChartProps {
    chart: Chart,
}

#[function_component(PlotlyChart)]
fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let container_ref = use_node_ref();
    let div_id = format!("prediction-chart-{}", props.chart.model.slug());
    let title = preview_heading(props.chart.points.len());

    use_effect_with(
        (container_ref.clone(), props.chart.clone(), div_id.clone()),
        move |(container_ref, chart, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);
                if let Err(e) = draw(div_id, chart) {
                    log::error!("Failed to draw prediction chart: {:?}", e);
                }
            }
            || ()
        },
    );

    html! {
        <>
            <h3 class="card-title">{title}</h3>
            <div ref={container_ref} style="width:100%; height:400px;"></div>
        </>
    }
}

fn preview_heading(points: usize) -> String {
    format!("🔍 Visual Preview (Last {} points)", points)
}

fn draw(div_id: &str, chart: &Chart) -> Result<(), JsValue> {
    let index: Vec<usize> = chart.points.iter().map(|p| p.index).collect();
    let actual: Vec<f64> = chart.points.iter().map(|p| p.actual).collect();
    let predicted: Vec<f64> = chart.points.iter().map(|p| p.predicted).collect();

    let traces = [
        Scatter::new(index.clone(), actual).mode(Mode::Lines).name("Actual"),
        Scatter::new(index, predicted).mode(Mode::Lines).name("Predicted"),
    ];

    let layout = Layout::new()
        .x_axis(Axis::new().title(Title::with_text("Test sample")))
        .y_axis(Axis::new().title(Title::with_text("Price")))
        .height(400);

    // Plotly expects plain JS objects, so go through JSON
    let data_js = js_sys::Array::new();
    for trace in &traces {
        let json = serde_json::to_string(trace).map_err(|e| JsValue::from_str(&e.to_string()))?;
        data_js.push(&js_sys::JSON::parse(&json)?);
    }
    let layout_json = serde_json::to_string(&layout).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let layout_js = js_sys::JSON::parse(&layout_json)?;

    newPlot(div_id, data_js.into(), layout_js);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_heading_counts_points() {
        assert_eq!(preview_heading(100), "🔍 Visual Preview (Last 100 points)");
        assert_eq!(preview_heading(12), "🔍 Visual Preview (Last 12 points)");
    }
}
