use common::{DashboardOptions, ForecastModel, Selection, Ticker};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub options: DashboardOptions,
    pub selection: Selection,
    pub on_change: Callback<Selection>,
}

/// Ticker dropdown, model radio group and footer.
#[function_component(Sidebar)]
pub fn sidebar(props: &Props) -> Html {
    let on_ticker = {
        let on_change = props.on_change.clone();
        let selection = props.selection;
        Callback::from(move |e: Event| {
            let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) else {
                return;
            };
            match select.value().parse::<Ticker>() {
                Ok(ticker) => {
                    log::debug!("Ticker changed to {}", ticker);
                    on_change.emit(Selection::new(ticker, selection.model));
                }
                Err(e) => log::error!("Ignoring ticker choice: {}", e),
            }
        })
    };

    let model_choice = |model: ForecastModel| {
        let on_change = props.on_change.clone();
        let selection = props.selection;
        let onchange = Callback::from(move |e: Event| {
            let checked = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .is_some_and(|input| input.checked());
            if checked {
                log::debug!("Model changed to {}", model);
                on_change.emit(Selection::new(selection.ticker, model));
            }
        });

        html! {
            <label class="label cursor-pointer justify-start gap-3">
                <input
                    type="radio"
                    name="model"
                    class="radio radio-primary"
                    value={model.label()}
                    checked={props.selection.model == model}
                    {onchange}
                />
                <span class="label-text">{model.label()}</span>
            </label>
        }
    };

    html! {
        <div class="flex flex-col gap-6">
            <h2 class="text-lg font-semibold">{"🔧 Select Options"}</h2>

            <label class="form-control w-full">
                <div class="label"><span class="label-text">{"Select Stock"}</span></div>
                <select class="select select-bordered w-full" onchange={on_ticker}>
                    { for props.options.tickers.iter().map(|ticker| html! {
                        <option value={ticker.code()} selected={*ticker == props.selection.ticker}>
                            {ticker.code()}
                        </option>
                    }) }
                </select>
            </label>

            <div class="form-control">
                <div class="label"><span class="label-text">{"Select Model"}</span></div>
                { for props.options.models.iter().copied().map(model_choice) }
            </div>

            <div class="divider"></div>
            <p class="text-sm text-gray-500">{&props.options.footer}</p>
        </div>
    }
}
