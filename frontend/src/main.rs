use std::rc::Rc;

use shared::{ClientConfig, RefreshSignal};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::{ExpenseForm, ExpenseList};
use services::logging::Logger;

/// Refresh counter owned by the page root
struct RefreshStore(RefreshSignal);

impl Reducible for RefreshStore {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(RefreshStore(self.0.bumped()))
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: ClientConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let refresh = use_reducer(|| RefreshStore(RefreshSignal::default()));

    let on_expense_added = {
        let refresh = refresh.clone();
        use_callback((), move |_: (), _| {
            refresh.dispatch(());
            Logger::debug_with_component("app", "Expense added, refreshing list");
        })
    };

    html! {
        <ContextProvider<ClientConfig> context={props.config.clone()}>
            <main class="main">
                <div class="container">
                    <h1>{"Expense Tracker"}</h1>
                    <ExpenseForm {on_expense_added} />
                    <ExpenseList refresh_signal={refresh.0} />
                </div>
            </main>
        </ContextProvider<ClientConfig>>
    }
}

fn main() {
    let config = config::load();
    Logger::info_with_component(
        "app",
        &format!("Starting expense tracker against '{}'", config.base_url),
    );
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
