//! State machine behind the expense form.
//!
//! The form owns a draft of the four editable fields. Submission is split in
//! two: [`FormState::plan_submit`] decides whether a request may go out at all,
//! and [`SubmitOutcome`] turns the response into a [`FormMsg`] plus whether the
//! page should be told about a new record.

use chrono::NaiveDate;

use crate::error::{ApiError, DraftError};
use crate::models::CreateExpenseRequest;

pub const SUCCESS_MESSAGE: &str = "Expense added successfully!";
pub const SUBMIT_LABEL: &str = "Add Expense";
pub const SUBMIT_BUSY_LABEL: &str = "Adding...";

/// Editable field of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Date,
    Amount,
    Description,
    Category,
}

/// Unsubmitted expense, kept as the raw input text
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub expense_date: String,
    pub amount: String,
    pub description: String,
    pub expense_category: String,
}

impl ExpenseDraft {
    /// Empty draft dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            expense_date: today.format("%Y-%m-%d").to_string(),
            amount: String::new(),
            description: String::new(),
            expense_category: String::new(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Date => self.expense_date = value,
            DraftField::Amount => self.amount = value,
            DraftField::Description => self.description = value,
            DraftField::Category => self.expense_category = value,
        }
    }

    /// Check the required fields and build the create request
    pub fn validate(&self) -> Result<CreateExpenseRequest, DraftError> {
        let mut missing = Vec::new();
        if self.expense_date.trim().is_empty() {
            missing.push("expense_date");
        }
        if self.amount.trim().is_empty() {
            missing.push("amount");
        }
        if self.expense_category.trim().is_empty() {
            missing.push("expense_category");
        }
        if !missing.is_empty() {
            return Err(DraftError::MissingRequired { fields: missing });
        }

        Ok(CreateExpenseRequest {
            expense_date: self.expense_date.trim().to_string(),
            amount: self.amount.trim().parse::<f64>().ok().filter(|a| a.is_finite()),
            description: self.description.clone(),
            expense_category: self.expense_category.trim().to_string(),
        })
    }
}

/// Events applied to [`FormState`]
#[derive(Debug, Clone, PartialEq)]
pub enum FormMsg {
    Edit(DraftField, String),
    ValidationFailed(DraftError),
    SubmitStarted,
    SubmitSucceeded { today: NaiveDate },
    SubmitFailed(String),
    DismissSuccess,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub draft: ExpenseDraft,
    pub submitting: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl FormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: ExpenseDraft::new(today),
            submitting: false,
            error: None,
            success: None,
        }
    }

    pub fn apply(&mut self, msg: FormMsg) {
        match msg {
            FormMsg::Edit(field, value) => {
                self.draft.set(field, value);
            }
            FormMsg::ValidationFailed(err) => {
                self.submitting = false;
                self.success = None;
                self.error = Some(err.to_string());
            }
            FormMsg::SubmitStarted => {
                self.submitting = true;
                self.error = None;
                self.success = None;
            }
            FormMsg::SubmitSucceeded { today } => {
                self.submitting = false;
                self.draft = ExpenseDraft::new(today);
                self.success = Some(SUCCESS_MESSAGE.to_string());
            }
            FormMsg::SubmitFailed(message) => {
                self.submitting = false;
                self.error = Some(message);
            }
            FormMsg::DismissSuccess => {
                self.success = None;
            }
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Decide what a submit press does with the current draft
    pub fn plan_submit(&self) -> SubmitPlan {
        if self.submitting {
            return SubmitPlan::InFlight;
        }
        match self.draft.validate() {
            Ok(request) => SubmitPlan::Send(request),
            Err(err) => SubmitPlan::Rejected(err),
        }
    }
}

/// Result of pressing submit, before any request goes out
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPlan {
    /// A create is already running; the press is ignored
    InFlight,
    /// Validation failed; nothing is sent
    Rejected(DraftError),
    Send(CreateExpenseRequest),
}

impl SubmitPlan {
    /// Event to apply before the request is sent, if any
    pub fn message(&self) -> Option<FormMsg> {
        match self {
            SubmitPlan::InFlight => None,
            SubmitPlan::Rejected(err) => Some(FormMsg::ValidationFailed(err.clone())),
            SubmitPlan::Send(_) => Some(FormMsg::SubmitStarted),
        }
    }

    pub fn request(&self) -> Option<&CreateExpenseRequest> {
        match self {
            SubmitPlan::Send(request) => Some(request),
            _ => None,
        }
    }
}

/// What a finished create request means for the form and the page
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub message: FormMsg,
    /// The list must re-fetch
    pub added: bool,
}

impl SubmitOutcome {
    /// Any 2xx counts as created; the record name is only informational
    pub fn from_result(result: &Result<Option<String>, ApiError>, today: NaiveDate) -> Self {
        match result {
            Ok(_) => Self {
                message: FormMsg::SubmitSucceeded { today },
                added: true,
            },
            Err(err) => Self {
                message: FormMsg::SubmitFailed(err.create_message()),
                added: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled_state() -> FormState {
        let mut state = FormState::new(day(2024, 1, 15));
        state.apply(FormMsg::Edit(DraftField::Date, "2024-01-01".to_string()));
        state.apply(FormMsg::Edit(DraftField::Amount, "12.5".to_string()));
        state.apply(FormMsg::Edit(DraftField::Category, "1".to_string()));
        state
    }

    #[test]
    fn test_new_draft_defaults_to_today() {
        let state = FormState::new(day(2024, 3, 7));
        assert_eq!(state.draft.expense_date, "2024-03-07");
        assert_eq!(state.draft.amount, "");
        assert_eq!(state.draft.expense_category, "");
        assert_eq!(state.submit_label(), "Add Expense");
    }

    #[test]
    fn test_validate_requires_date_amount_category() {
        let base = filled_state().draft;
        for field in [DraftField::Date, DraftField::Amount, DraftField::Category] {
            let mut draft = base.clone();
            draft.set(field, String::new());
            let err = draft.validate().unwrap_err();
            assert_eq!(err.to_string(), "Date, Amount, and Category are required.");
        }

        // Whitespace counts as empty
        let mut draft = base.clone();
        draft.set(DraftField::Amount, "   ".to_string());
        assert!(draft.validate().is_err());

        // Description is optional
        assert!(base.validate().is_ok());
    }

    #[test]
    fn test_validate_lists_every_missing_field() {
        let mut draft = ExpenseDraft::new(day(2024, 1, 1));
        draft.set(DraftField::Date, String::new());
        assert_eq!(
            draft.validate(),
            Err(DraftError::MissingRequired {
                fields: vec!["expense_date", "amount", "expense_category"]
            })
        );
    }

    #[test]
    fn test_validate_builds_request_from_example() {
        let request = filled_state().draft.validate().unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "expense_date": "2024-01-01",
                "amount": 12.5,
                "description": "",
                "expense_category": "1"
            })
        );
    }

    #[test]
    fn test_non_numeric_amount_is_left_to_server() {
        let mut draft = filled_state().draft;
        draft.set(DraftField::Amount, "twelve".to_string());
        let request = draft.validate().unwrap();
        assert_eq!(request.amount, None);
    }

    #[test]
    fn test_validation_failure_reports_error() {
        let mut state = FormState::new(day(2024, 1, 15));
        let err = state.draft.validate().unwrap_err();
        state.apply(FormMsg::ValidationFailed(err));

        assert!(!state.submitting);
        assert_eq!(
            state.error.as_deref(),
            Some("Date, Amount, and Category are required.")
        );
    }

    #[test]
    fn test_submit_in_flight_shows_busy_label() {
        let mut state = filled_state();
        state.apply(FormMsg::SubmitStarted);
        assert!(state.submitting);
        assert_eq!(state.submit_label(), "Adding...");
    }

    #[test]
    fn test_success_resets_draft_to_today() {
        let mut state = filled_state();
        state.apply(FormMsg::Edit(DraftField::Description, "Lunch".to_string()));
        state.apply(FormMsg::SubmitStarted);
        state.apply(FormMsg::SubmitSucceeded {
            today: day(2024, 1, 16),
        });

        assert_eq!(state.draft, ExpenseDraft::new(day(2024, 1, 16)));
        assert!(!state.submitting);
        assert_eq!(state.error, None);
        assert_eq!(state.success.as_deref(), Some("Expense added successfully!"));

        state.apply(FormMsg::DismissSuccess);
        assert_eq!(state.success, None);
    }

    #[test]
    fn test_failure_keeps_draft() {
        let mut state = filled_state();
        let before = state.draft.clone();
        state.apply(FormMsg::SubmitStarted);
        state.apply(FormMsg::SubmitFailed(
            "Failed to add expense: Amount is mandatory".to_string(),
        ));

        assert_eq!(state.draft, before);
        assert!(!state.submitting);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to add expense: Amount is mandatory")
        );
        assert_eq!(state.success, None);
    }

    #[test]
    fn test_invalid_draft_plans_no_request() {
        let mut state = FormState::new(day(2024, 1, 15));
        let plan = state.plan_submit();
        assert_eq!(plan.request(), None);
        assert!(matches!(plan, SubmitPlan::Rejected(_)));

        if let Some(msg) = plan.message() {
            state.apply(msg);
        }
        assert!(!state.submitting);
        assert_eq!(
            state.error.as_deref(),
            Some("Date, Amount, and Category are required.")
        );
    }

    #[test]
    fn test_submit_press_while_in_flight_is_ignored() {
        let mut state = filled_state();
        let plan = state.plan_submit();
        assert!(plan.request().is_some());
        if let Some(msg) = plan.message() {
            state.apply(msg);
        }
        assert!(state.submitting);

        let again = state.plan_submit();
        assert_eq!(again, SubmitPlan::InFlight);
        assert_eq!(again.message(), None);
        assert_eq!(again.request(), None);
    }

    #[test]
    fn test_created_expense_notifies_once() {
        let mut state = filled_state();
        state.apply(FormMsg::SubmitStarted);

        let outcome = SubmitOutcome::from_result(&Ok(Some("EXP-0007".to_string())), day(2024, 1, 16));
        assert!(outcome.added);
        state.apply(outcome.message);
        assert_eq!(state.success.as_deref(), Some("Expense added successfully!"));

        // Without a readable record name the create still counts
        let outcome = SubmitOutcome::from_result(&Ok(None), day(2024, 1, 16));
        assert!(outcome.added);
        assert_eq!(outcome.message, FormMsg::SubmitSucceeded { today: day(2024, 1, 16) });
    }

    #[test]
    fn test_failed_create_does_not_notify() {
        let mut state = filled_state();
        let before = state.draft.clone();
        state.apply(FormMsg::SubmitStarted);

        let err = ApiError::from_response(
            417,
            "Expectation Failed",
            r#"{"message": "Amount is mandatory"}"#,
        );
        let outcome = SubmitOutcome::from_result(&Err(err), day(2024, 1, 16));
        assert!(!outcome.added);
        state.apply(outcome.message);

        assert_eq!(state.draft, before);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to add expense: Amount is mandatory")
        );
    }

    #[test]
    fn test_new_submit_clears_previous_messages() {
        let mut state = filled_state();
        state.apply(FormMsg::SubmitFailed("boom".to_string()));
        state.apply(FormMsg::SubmitStarted);
        assert_eq!(state.error, None);
        assert_eq!(state.success, None);
    }
}
