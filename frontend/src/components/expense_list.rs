use shared::list::{EMPTY_MESSAGE, LOADING_MESSAGE};
use shared::{ClientConfig, ExpenseRow, ListView, RefreshSignal};
use yew::prelude::*;

use crate::hooks::use_expense_list::use_expense_list;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    /// Any change triggers a re-fetch
    pub refresh_signal: RefreshSignal,
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let api_client = ApiClient::new(&config);
    let list = use_expense_list(&api_client, props.refresh_signal);
    let busy = list.state.loading || list.state.deleting.is_some();

    let body = match list.state.view() {
        ListView::Loading => html! { <div class="loading">{LOADING_MESSAGE}</div> },
        ListView::Error(message) => html! { <div class="form-message error">{message}</div> },
        ListView::Empty => html! { <p class="empty-state">{EMPTY_MESSAGE}</p> },
        ListView::Rows(rows) => html! {
            <div class="table-container">
                <table class="expenses-table">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Amount"}</th>
                            <th>{"Category"}</th>
                            <th>{"Description"}</th>
                            <th>{"User"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for rows.into_iter().map(|row| expense_row(row, busy, &list.actions.delete))}
                    </tbody>
                </table>
            </div>
        },
    };

    html! {
        <section class="expense-list-section">
            <h2>{"Expense List"}</h2>
            {body}
        </section>
    }
}

fn expense_row(row: ExpenseRow, busy: bool, on_delete: &Callback<String>) -> Html {
    let onclick = {
        let on_delete = on_delete.clone();
        let name = row.name.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(name.clone()))
    };

    html! {
        <tr key={row.name.clone()}>
            <td class="date">{row.date}</td>
            <td class="amount">{row.amount}</td>
            <td class="category" title={row.category_label}>{row.category}</td>
            <td class="description">{row.description}</td>
            <td class="user">{row.user}</td>
            <td>
                <button class="btn btn-danger" {onclick} disabled={busy}>
                    {"Delete"}
                </button>
            </td>
        </tr>
    }
}
