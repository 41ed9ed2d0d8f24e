use std::rc::Rc;

use shared::list::confirm_prompt;
use shared::{DeleteOutcome, DeletePlan, FetchSequence, ListMsg, ListState, RefreshSignal};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "expense-list";

/// [`ListState`] behind a Yew reducer
pub struct ListStore(ListState);

impl Reducible for ListStore {
    type Action = ListMsg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(ListStore(state))
    }
}

pub struct UseExpenseListResult {
    pub state: ListState,
    pub actions: UseExpenseListActions,
}

#[derive(Clone)]
pub struct UseExpenseListActions {
    pub delete: Callback<String>,
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Loads the expense list on mount and again whenever `refresh_signal` changes
#[hook]
pub fn use_expense_list(api_client: &ApiClient, refresh_signal: RefreshSignal) -> UseExpenseListResult {
    let store = use_reducer(|| ListStore(ListState::default()));
    let sequence = use_mut_ref(FetchSequence::default);

    let refresh = {
        let store = store.clone();
        let sequence = sequence.clone();

        use_callback(api_client.clone(), move |_: (), api_client| {
            let ticket = sequence.borrow_mut().issue();
            store.dispatch(ListMsg::FetchStarted(ticket));
            Logger::debug_with_component(COMPONENT, &format!("Fetching expenses (#{})", ticket.seq()));

            let store = store.clone();
            let api_client = api_client.clone();
            spawn_local(async move {
                match api_client.list_expenses().await {
                    Ok(expenses) => {
                        Logger::debug_with_component(
                            COMPONENT,
                            &format!("Fetch #{} returned {} expenses", ticket.seq(), expenses.len()),
                        );
                        store.dispatch(ListMsg::FetchSucceeded { ticket, expenses });
                    }
                    Err(err) => {
                        let message = err.fetch_message();
                        Logger::error_with_component(COMPONENT, &format!("{} ({})", message, err));
                        store.dispatch(ListMsg::FetchFailed { ticket, message });
                    }
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with(refresh_signal, move |_| {
            refresh.emit(());
            || ()
        });
    }

    let delete = {
        let store = store.clone();

        use_callback(api_client.clone(), move |name: String, api_client| {
            store.dispatch(ListMsg::DeleteRequested(name.clone()));
            let plan = DeletePlan::new(&name, confirm(&confirm_prompt(&name)));
            store.dispatch(plan.message());
            let DeletePlan::Send(name) = plan else {
                return;
            };

            let store = store.clone();
            let refresh = refresh.clone();
            let api_client = api_client.clone();
            spawn_local(async move {
                let result = api_client.delete_expense(&name).await;
                match &result {
                    Ok(()) => Logger::info_with_component(COMPONENT, &format!("Expense {} deleted", name)),
                    Err(err) => Logger::error_with_component(
                        COMPONENT,
                        &format!("{} ({})", err.delete_message(), err),
                    ),
                }

                let outcome = DeleteOutcome::from_result(&result);
                store.dispatch(outcome.message);
                if outcome.refetch {
                    refresh.emit(());
                }
            });
        })
    };

    UseExpenseListResult {
        state: store.0.clone(),
        actions: UseExpenseListActions { delete },
    }
}
