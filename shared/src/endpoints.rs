//! URLs and headers of the `Expense` resource endpoint.

/// Resource path of the Expense doctype
pub const RESOURCE_PATH: &str = "/api/resource/Expense";

/// Header carrying the anti-forgery token on state-changing requests
pub const CSRF_HEADER: &str = "X-Frappe-CSRF-Token";

/// Fields requested when listing expenses
pub const LIST_FIELDS: [&str; 6] = [
    "name",
    "expense_date",
    "amount",
    "description",
    "expense_category",
    "user",
];

fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// `GET` target for the expense list, with the field set as a JSON array
pub fn list_url(base_url: &str) -> String {
    let fields = serde_json::to_string(&LIST_FIELDS).unwrap_or_else(|_| "[]".to_string());
    format!(
        "{}{}?fields={}",
        trim_base(base_url),
        RESOURCE_PATH,
        urlencoding::encode(&fields)
    )
}

/// `POST` target for creating an expense
pub fn create_url(base_url: &str) -> String {
    format!("{}{}", trim_base(base_url), RESOURCE_PATH)
}

/// `DELETE` target for a single expense
pub fn record_url(base_url: &str, name: &str) -> String {
    format!(
        "{}{}/{}",
        trim_base(base_url),
        RESOURCE_PATH,
        urlencoding::encode(name)
    )
}
