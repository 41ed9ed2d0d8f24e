use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use shared::{DraftField, FormMsg, FormState, SubmitOutcome, SubmitPlan};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

const COMPONENT: &str = "expense-form";

/// [`FormState`] behind a Yew reducer so late async results apply to the latest state
pub struct FormStore(FormState);

impl Reducible for FormStore {
    type Action = FormMsg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(FormStore(state))
    }
}

pub struct UseExpenseFormResult {
    pub state: FormState,
    pub actions: UseExpenseFormActions,
}

#[derive(Clone)]
pub struct UseExpenseFormActions {
    pub on_edit: Callback<(DraftField, String)>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_expense_form(
    api_client: &ApiClient,
    success_message_ms: u32,
    on_expense_added: Callback<()>,
) -> UseExpenseFormResult {
    let store = use_reducer(|| FormStore(FormState::new(today())));

    let on_edit = {
        let store = store.clone();
        use_callback((), move |(field, value): (DraftField, String), _| {
            store.dispatch(FormMsg::Edit(field, value));
        })
    };

    // Rebuilt every render so it sees the current draft
    let submit = {
        let store = store.clone();
        let api_client = api_client.clone();

        Callback::from(move |_: ()| {
            let plan = store.0.plan_submit();
            if let SubmitPlan::Rejected(err) = &plan {
                Logger::warn_with_component(COMPONENT, &format!("Validation failed: {:?}", err));
            }
            if let Some(msg) = plan.message() {
                store.dispatch(msg);
            }
            let SubmitPlan::Send(request) = plan else {
                return;
            };

            let store = store.clone();
            let api_client = api_client.clone();
            let on_expense_added = on_expense_added.clone();
            spawn_local(async move {
                let result = api_client.create_expense(&request).await;
                match &result {
                    Ok(name) => Logger::info_with_component(
                        COMPONENT,
                        &format!("Expense added: {}", name.as_deref().unwrap_or("<unnamed>")),
                    ),
                    Err(err) => Logger::error_with_component(
                        COMPONENT,
                        &format!("{} ({})", err.create_message(), err),
                    ),
                }

                let outcome = SubmitOutcome::from_result(&result, today());
                store.dispatch(outcome.message);
                if outcome.added {
                    on_expense_added.emit(());

                    let store = store.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(success_message_ms).await;
                        store.dispatch(FormMsg::DismissSuccess);
                    });
                }
            });
        })
    };

    UseExpenseFormResult {
        state: store.0.clone(),
        actions: UseExpenseFormActions { on_edit, submit },
    }
}
