use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;
mod state;

use pages::savings_plans::SavingsPlansPage;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());

    html! {
        <SavingsPlansPage api_client={(*api_client).clone()} />
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
