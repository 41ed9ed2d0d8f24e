//! State machine behind the expense list.
//!
//! Every fetch is issued a [`FetchTicket`] with a monotonically increasing
//! sequence number. Only the response for the latest ticket is applied, so a
//! slow response can never overwrite the result of a newer fetch.

use crate::error::ApiError;
use crate::models::{Expense, ExpenseRow};

pub const LOADING_MESSAGE: &str = "Loading expenses...";
pub const EMPTY_MESSAGE: &str = "No expenses found. Add a new one above!";

/// Prompt shown before deleting `name`
pub fn confirm_prompt(name: &str) -> String {
    format!("Are you sure you want to delete expense \"{}\"?", name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// Issues fetch tickets. Lives outside [`ListState`] so that two fetches
/// started before the state is next observed still get distinct tickets.
#[derive(Debug, Default)]
pub struct FetchSequence(u64);

impl FetchSequence {
    pub fn issue(&mut self) -> FetchTicket {
        self.0 += 1;
        FetchTicket(self.0)
    }
}

/// Events applied to [`ListState`]
#[derive(Debug, Clone, PartialEq)]
pub enum ListMsg {
    FetchStarted(FetchTicket),
    FetchSucceeded {
        ticket: FetchTicket,
        expenses: Vec<Expense>,
    },
    FetchFailed {
        ticket: FetchTicket,
        message: String,
    },
    DeleteRequested(String),
    DeleteDeclined,
    DeleteConfirmed,
    DeleteSucceeded,
    DeleteFailed(String),
}

/// What the list renders for a given state
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading,
    Error(String),
    Empty,
    Rows(Vec<ExpenseRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub error: Option<String>,
    /// Record awaiting delete confirmation
    pub pending_delete: Option<String>,
    /// Record whose delete request is in flight
    pub deleting: Option<String>,
    latest_fetch: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            loading: true,
            error: None,
            pending_delete: None,
            deleting: None,
            latest_fetch: 0,
        }
    }
}

impl ListState {
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest_fetch
    }

    pub fn apply(&mut self, msg: ListMsg) {
        match msg {
            ListMsg::FetchStarted(ticket) => {
                self.latest_fetch = self.latest_fetch.max(ticket.0);
                self.loading = true;
                self.error = None;
            }
            ListMsg::FetchSucceeded { ticket, expenses } => {
                if self.is_current(ticket) {
                    self.expenses = expenses;
                    self.loading = false;
                }
            }
            ListMsg::FetchFailed { ticket, message } => {
                if self.is_current(ticket) {
                    self.error = Some(message);
                    self.loading = false;
                }
            }
            ListMsg::DeleteRequested(name) => {
                self.pending_delete = Some(name);
            }
            ListMsg::DeleteDeclined => {
                self.pending_delete = None;
            }
            ListMsg::DeleteConfirmed => {
                if let Some(name) = self.pending_delete.take() {
                    self.deleting = Some(name);
                    self.loading = true;
                    self.error = None;
                }
            }
            ListMsg::DeleteSucceeded => {
                self.deleting = None;
            }
            ListMsg::DeleteFailed(message) => {
                self.deleting = None;
                self.loading = false;
                self.error = Some(message);
            }
        }
    }

    pub fn view(&self) -> ListView {
        if self.loading {
            ListView::Loading
        } else if let Some(error) = &self.error {
            ListView::Error(error.clone())
        } else if self.expenses.is_empty() {
            ListView::Empty
        } else {
            ListView::Rows(self.expenses.iter().map(ExpenseRow::from).collect())
        }
    }
}

/// Decision taken once the delete confirmation dialog closes
#[derive(Debug, Clone, PartialEq)]
pub enum DeletePlan {
    Declined,
    Send(String),
}

impl DeletePlan {
    pub fn new(name: &str, confirmed: bool) -> Self {
        if confirmed {
            DeletePlan::Send(name.to_string())
        } else {
            DeletePlan::Declined
        }
    }

    pub fn message(&self) -> ListMsg {
        match self {
            DeletePlan::Declined => ListMsg::DeleteDeclined,
            DeletePlan::Send(_) => ListMsg::DeleteConfirmed,
        }
    }

    /// Record to send a DELETE for
    pub fn target(&self) -> Option<&str> {
        match self {
            DeletePlan::Declined => None,
            DeletePlan::Send(name) => Some(name),
        }
    }
}

/// What a finished delete request means for the list
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub message: ListMsg,
    pub refetch: bool,
}

impl DeleteOutcome {
    pub fn from_result(result: &Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Self {
                message: ListMsg::DeleteSucceeded,
                refetch: true,
            },
            Err(err) => Self {
                message: ListMsg::DeleteFailed(err.delete_message()),
                refetch: false,
            },
        }
    }
}
