use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    /// Selection controls, rendered in the side drawer
    #[prop_or_default]
    pub sidebar: Option<Html>,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="drawer lg:drawer-open">
            <input id="stockcast-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200">
                <div class="navbar bg-base-100 shadow-sm px-6">
                    <label for="stockcast-drawer" class="btn btn-ghost lg:hidden">
                        <i class="fas fa-bars"></i>
                    </label>
                    <div class="flex flex-col">
                        <h1 class="text-xl font-bold">{"📈 AI Stock Price Forecast"}</h1>
                        <p class="text-sm text-gray-500">{"Select a stock and model to view predictions"}</p>
                    </div>
                </div>
                <main class="flex-1 p-6 overflow-y-auto flex flex-col gap-6">
                    { for props.children.iter() }
                </main>
            </div>
            <div class="drawer-side z-50">
                <label aria-label="close sidebar" class="drawer-overlay" for="stockcast-drawer"></label>
                <div class="p-4 w-80 min-h-full bg-base-100 border-r border-base-300">
                    { props.sidebar.clone().unwrap_or_default() }
                </div>
            </div>
        </div>
    }
}
