use async_trait::async_trait;
use domain_todos::{CreateTodo, DeletedTodo, Todo, UpdateTodo};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

/// Failures crossing the network boundary.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Network boundary of the client. One method per service operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoTransport: Send + Sync {
    async fn list(&self, date: &str) -> Result<Vec<Todo>, TransportError>;
    async fn create(&self, input: CreateTodo) -> Result<Todo, TransportError>;
    async fn update(&self, id: Uuid, completed: bool) -> Result<Todo, TransportError>;
    async fn delete(&self, id: Uuid) -> Result<Todo, TransportError>;
}

/// Shape of the service's error bodies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Transport talking to the HTTP API over reqwest.
#[derive(Debug, Clone)]
pub struct HttpTodoTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTodoTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Decodes a success body, or turns a non-2xx response into a
    /// `TransportError::Status` carrying the service's `error` message.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, TransportError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        tracing::warn!(status = status.as_u16(), %message, "Request rejected by server");
        Err(TransportError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl TodoTransport for HttpTodoTransport {
    async fn list(&self, date: &str) -> Result<Vec<Todo>, TransportError> {
        let response = self
            .client
            .get(self.url("/todos"))
            .query(&[("date", date)])
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn create(&self, input: CreateTodo) -> Result<Todo, TransportError> {
        let response = self
            .client
            .post(self.url("/todos"))
            .json(&input)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update(&self, id: Uuid, completed: bool) -> Result<Todo, TransportError> {
        let response = self
            .client
            .put(self.url(&format!("/todos/{id}")))
            .json(&UpdateTodo { completed })
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: Uuid) -> Result<Todo, TransportError> {
        let response = self
            .client
            .delete(self.url(&format!("/todos/{id}")))
            .send()
            .await?;
        let deleted: DeletedTodo = Self::decode(response).await?;
        Ok(deleted.todo)
    }
}
