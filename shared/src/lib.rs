//! Types and client-side state shared by the expense tracker frontend.
//!
//! Everything here is target-independent so it can be unit-tested natively.

pub mod config;
pub mod endpoints;
pub mod error;
pub mod form;
pub mod list;
pub mod models;
pub mod refresh;

pub use config::{ClientConfig, LogLevel, PageConfig};
pub use error::{ApiError, DraftError};
pub use form::{DraftField, ExpenseDraft, FormMsg, FormState, SubmitOutcome, SubmitPlan};
pub use list::{
    DeleteOutcome, DeletePlan, FetchSequence, FetchTicket, ListMsg, ListState, ListView,
};
pub use models::{
    CreateExpenseRequest, CreatedExpense, Expense, ExpenseCategory, ExpenseRow, ResourceDoc,
    ResourceList, ServerErrorBody,
};
pub use refresh::RefreshSignal;
