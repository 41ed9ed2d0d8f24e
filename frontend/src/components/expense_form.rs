use shared::{ClientConfig, DraftField, ExpenseCategory};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_expense_form::use_expense_form;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    /// Called once per successfully created expense
    pub on_expense_added: Callback<()>,
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let api_client = ApiClient::new(&config);
    let form = use_expense_form(
        &api_client,
        config.success_message_ms,
        props.on_expense_added.clone(),
    );
    let state = &form.state;
    let draft = &state.draft;

    let on_input = |field: DraftField| {
        let on_edit = form.actions.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((field, input.value()));
        })
    };

    let on_category_change = {
        let on_edit = form.actions.on_edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_edit.emit((DraftField::Category, select.value()));
        })
    };

    let on_description_input = {
        let on_edit = form.actions.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit((DraftField::Description, area.value()));
        })
    };

    let onsubmit = {
        let submit = form.actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <section class="expense-form-section">
            <h3>{"Add New Expense"}</h3>
            <form class="expense-form" {onsubmit}>
                <div class="form-group">
                    <label for="expense_date">{"Date:"}</label>
                    <input
                        type="date"
                        id="expense_date"
                        name="expense_date"
                        value={draft.expense_date.clone()}
                        oninput={on_input(DraftField::Date)}
                        disabled={state.submitting}
                        required={true}
                    />
                </div>

                <div class="form-group">
                    <label for="amount">{"Amount:"}</label>
                    <input
                        type="number"
                        id="amount"
                        name="amount"
                        step="0.01"
                        value={draft.amount.clone()}
                        oninput={on_input(DraftField::Amount)}
                        disabled={state.submitting}
                        required={true}
                    />
                </div>

                <div class="form-group">
                    <label for="expense_category">{"Category:"}</label>
                    <select
                        id="expense_category"
                        name="expense_category"
                        onchange={on_category_change}
                        disabled={state.submitting}
                        required={true}
                    >
                        <option value="" selected={draft.expense_category.is_empty()}>
                            {"Select Category"}
                        </option>
                        {for ExpenseCategory::ALL.iter().map(|category| html! {
                            <option
                                value={category.code()}
                                selected={draft.expense_category == category.code()}
                            >
                                {category.to_string()}
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="description">{"Description (Optional):"}</label>
                    <textarea
                        id="description"
                        name="description"
                        rows="3"
                        value={draft.description.clone()}
                        oninput={on_description_input}
                        disabled={state.submitting}
                    />
                </div>

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={state.submitting}
                >
                    {state.submit_label()}
                </button>
            </form>

            {if let Some(error) = state.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {if let Some(success) = state.success.as_ref() {
                html! { <div class="form-message success">{success}</div> }
            } else { html! {} }}
        </section>
    }
}
