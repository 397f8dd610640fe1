use common::{ForecastPreview, SectionView, Ticker};
use yew::prelude::*;

use crate::api_client::download_url;
use crate::common::error::SectionNotice;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub ticker: Ticker,
    pub section: SectionView<ForecastPreview>,
}

/// Tail of the Prophet forecast with a link to the full table.
#[function_component(ForecastTable)]
pub fn forecast_table(props: &Props) -> Html {
    let body = match &props.section {
        SectionView::Ready { content } => render_preview(props.ticker, content),
        SectionView::Warning { message } => html! { <SectionNotice message={message.clone()} /> },
        SectionView::Error { message } => html! { <SectionNotice message={message.clone()} is_error=true /> },
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"📄 Forecast Table (Prophet)"}</h3>
                {body}
            </div>
        </div>
    }
}

fn render_preview(ticker: Ticker, preview: &ForecastPreview) -> Html {
    html! {
        <>
            <p class="text-sm text-gray-500">
                {format!("Last {} of {} rows", preview.rows.len(), preview.total_rows)}
            </p>
            <div class="overflow-x-auto">
                <table class="table table-zebra table-sm">
                    <thead>
                        <tr>
                            { for preview.columns.iter().map(|column| html! { <th>{column}</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for preview.rows.iter().map(|row| html! {
                            <tr>{ for row.iter().map(|cell| html! { <td>{cell}</td> }) }</tr>
                        }) }
                    </tbody>
                </table>
            </div>
            <div class="card-actions justify-start">
                <a class="btn btn-primary btn-sm" href={download_url(ticker)} download={preview.file_name.clone()}>
                    <i class="fas fa-download"></i>
                    {" Download Forecast CSV"}
                </a>
            </div>
        </>
    }
}
