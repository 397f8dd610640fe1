use common::{ComparisonImage, SectionView, Ticker};
use yew::prelude::*;

use crate::api_client::plot_url;
use crate::common::error::SectionNotice;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub ticker: Ticker,
    pub section: SectionView<ComparisonImage>,
}

#[function_component(Comparison)]
pub fn comparison(props: &Props) -> Html {
    let body = match &props.section {
        SectionView::Ready { content } => html! {
            <img
                class="w-full rounded"
                src={plot_url(content.ticker)}
                alt={heading(content.ticker)}
            />
        },
        SectionView::Warning { message } => html! { <SectionNotice message={message.clone()} /> },
        SectionView::Error { message } => html! { <SectionNotice message={message.clone()} is_error=true /> },
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{heading(props.ticker)}</h3>
                {body}
            </div>
        </div>
    }
}

fn heading(ticker: Ticker) -> String {
    format!("📊 Comparison Plot for {}", ticker)
}
