use common::{DashboardOptions, DashboardView, DetailSection, Selection};
use yew::prelude::*;

use crate::api_client::{get_dashboard, get_options};
use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::components::comparison::Comparison;
use crate::components::forecast_table::ForecastTable;
use crate::components::layout::Layout;
use crate::components::prediction_chart::PredictionChart;
use crate::components::sidebar::Sidebar;
use crate::hooks::FetchState;

/// The single dashboard page.
///
/// Every selection change starts a fresh render request. Responses that
/// arrive after a newer request was issued are dropped, so sections of a
/// previous selection are never shown under the current one.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let options = use_state(DashboardOptions::default);
    let selection = use_state(Selection::default);
    let view = use_state(FetchState::<DashboardView>::default);
    let latest_request = use_mut_ref(|| 0u64);

    // Offered choices
    {
        let options = options.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match get_options().await {
                    Ok(offered) => options.set(offered),
                    Err(e) => log::warn!("Using built-in options: {}", e),
                }
            });
            || ()
        });
    }

    let refetch = {
        let view = view.clone();
        let latest_request = latest_request.clone();
        Callback::from(move |requested: Selection| {
            let view = view.clone();
            let latest_request = latest_request.clone();
            let request_id = *latest_request.borrow() + 1;
            *latest_request.borrow_mut() = request_id;

            view.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                let result = get_dashboard(requested).await;
                if *latest_request.borrow() != request_id {
                    log::debug!("Dropping stale dashboard for {}", requested);
                    return;
                }
                match result {
                    Ok(rendered) => view.set(FetchState::Success(rendered)),
                    Err(err) => view.set(FetchState::Error(err)),
                }
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with(*selection, move |current| {
            refetch.emit(*current);
            || ()
        });
    }

    let on_change = {
        let selection = selection.clone();
        Callback::from(move |next: Selection| selection.set(next))
    };

    let on_retry = {
        let selection = selection.clone();
        Callback::from(move |_: ()| refetch.emit(*selection))
    };

    let sidebar = html! {
        <Sidebar options={(*options).clone()} selection={*selection} on_change={on_change} />
    };

    let content = match &*view {
        FetchState::NotStarted | FetchState::Loading => html! {
            <Loading text={Some(format!("Rendering {}...", *selection))} />
        },
        FetchState::Error(message) => html! {
            <ErrorDisplay message={message.clone()} on_retry={Some(on_retry)} />
        },
        FetchState::Success(rendered) if rendered.selection != *selection => html! { <Loading /> },
        FetchState::Success(rendered) => render_view(rendered),
    };

    html! {
        <Layout sidebar={Some(sidebar)}>
            {content}
        </Layout>
    }
}

fn render_view(view: &DashboardView) -> Html {
    let ticker = view.selection.ticker;
    let detail = match &view.detail {
        DetailSection::Forecast(section) => html! { <ForecastTable {ticker} section={section.clone()} /> },
        DetailSection::Prediction(section) => html! { <PredictionChart section={section.clone()} /> },
    };

    html! {
        <>
            <Comparison {ticker} section={view.comparison.clone()} />
            {detail}
            <div class="alert alert-success">
                <i class="fas fa-check-circle"></i>
                <span>{&view.status_banner}</span>
            </div>
        </>
    }
}
