use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// An expense record as returned by the `Expense` resource endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Server-assigned unique identifier (e.g. "EXP-0001")
    pub name: String,
    /// Date of the expense, YYYY-MM-DD (older records may carry a time part)
    #[serde(default, deserialize_with = "null_as_default")]
    pub expense_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Category code, see [`ExpenseCategory`]
    #[serde(default, deserialize_with = "null_as_default")]
    pub expense_category: String,
    /// Owning account, set by the server from the session
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: String,
}

// Frappe sends `null` for empty optional fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Fixed set of expense categories, keyed by the code stored on the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Utilities,
    Rent,
    Shopping,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Utilities,
        ExpenseCategory::Rent,
        ExpenseCategory::Shopping,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "1",
            ExpenseCategory::Transport => "2",
            ExpenseCategory::Utilities => "3",
            ExpenseCategory::Rent => "4",
            ExpenseCategory::Shopping => "5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::Shopping => "Shopping",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code.trim())
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body of the create request. `name` and `user` are server-assigned and never sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub expense_date: String,
    /// `None` when the amount text is not a number; serialises as `null`
    pub amount: Option<f64>,
    pub description: String,
    pub expense_category: String,
}

/// `{ "data": [...] }` envelope of a resource list call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceList<T> {
    pub data: Vec<T>,
}

/// `{ "data": {...} }` envelope of a single-document call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDoc<T> {
    pub data: T,
}

/// The part of a created document the client cares about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedExpense {
    pub name: String,
}

impl CreatedExpense {
    /// Record name from a successful create body, if the body has the usual shape
    pub fn name_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ResourceDoc<CreatedExpense>>(body)
            .ok()
            .map(|doc| doc.data.name)
    }
}

/// Error body of a failed resource call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub exc_type: Option<String>,
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub name: String,
    pub date: String,
    pub amount: String,
    pub category: String,
    /// Label of a known category code, empty otherwise
    pub category_label: String,
    pub description: String,
    pub user: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            name: expense.name.clone(),
            date: date_portion(&expense.expense_date).to_string(),
            // + 0.0 turns -0.0 into 0.0
            amount: format!("{:.2}", expense.amount + 0.0),
            category: expense.expense_category.clone(),
            category_label: ExpenseCategory::from_code(&expense.expense_category)
                .map(|c| c.to_string())
                .unwrap_or_default(),
            description: expense.description.clone(),
            user: expense.user.clone(),
        }
    }
}

/// Strip any time part from a date or datetime string
pub fn date_portion(value: &str) -> &str {
    value.split(|c: char| c == ' ' || c == 'T').next().unwrap_or(value)
}
