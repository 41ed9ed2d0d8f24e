pub mod expense_form;
pub mod expense_list;

pub use expense_form::ExpenseForm;
pub use expense_list::ExpenseList;
