use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;

use components::dashboard::Dashboard;
use components::layout::Layout;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => html! { <Dashboard /> },
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <Layout>
                    <h1 class="text-2xl font-bold">{"404 Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="link link-primary">{"Back to the dashboard"}</Link<Route>>
                </Layout>
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== StockCast Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
