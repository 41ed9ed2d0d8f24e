use gloo::net::http::{Request, Response};
use shared::endpoints::{self, CSRF_HEADER};
use shared::{ApiError, ClientConfig, CreateExpenseRequest, CreatedExpense, Expense, ResourceList};

/// API client for the `Expense` resource endpoint
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    csrf_token: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            csrf_token: config.csrf_token.clone(),
        }
    }

    /// Fetch every expense with the fixed list field set
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        let url = endpoints::list_url(&self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = ensure_ok(response).await?;

        response
            .json::<ResourceList<Expense>>()
            .await
            .map(|list| list.data)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Create an expense; the server assigns `name` and `user`.
    /// Any 2xx is a success; the returned name is `None` if the body is not the usual envelope.
    pub async fn create_expense(
        &self,
        request: &CreateExpenseRequest,
    ) -> Result<Option<String>, ApiError> {
        let url = endpoints::create_url(&self.base_url);

        let response = Request::post(&url)
            .header(CSRF_HEADER, &self.csrf_token)
            .json(request)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = ensure_ok(response).await?;

        let body = response.text().await.unwrap_or_default();
        Ok(CreatedExpense::name_from_body(&body))
    }

    /// Delete the expense identified by `name`
    pub async fn delete_expense(&self, name: &str) -> Result<(), ApiError> {
        let url = endpoints::record_url(&self.base_url, name);

        let response = Request::delete(&url)
            .header(CSRF_HEADER, &self.csrf_token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(response).await?;
        Ok(())
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, status_text, &body))
}
