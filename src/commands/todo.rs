//! Todo Commands
//!
//! HTTP implementation of [`TodoApi`] on top of `reqwest`, which uses the
//! browser's fetch API on wasm32.

use async_trait::async_trait;
use reqwest::{Client, Request, Response};
use serde::de::DeserializeOwned;

use super::TodoApi;
use crate::config::ApiConfig;
use crate::error::{ApiResult, TodoApiError, TransportError};
use crate::models::{CreateTodoPayload, DeletedTodo, Todo, TodosPage, UpdateTodoPayload};

/// Todo client backed by a `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    config: ApiConfig,
}

impl HttpTodoApi {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    // ========================
    // Request Builders
    // ========================

    fn list_request(&self) -> reqwest::Result<Request> {
        self.client.get(self.config.list_url()).build()
    }

    fn get_request(&self, id: u32) -> reqwest::Result<Request> {
        self.client.get(self.config.todo_url(id)).build()
    }

    fn create_request(&self, payload: &CreateTodoPayload) -> reqwest::Result<Request> {
        self.client.post(self.config.add_url()).json(payload).build()
    }

    fn update_request(&self, id: u32, payload: &UpdateTodoPayload) -> reqwest::Result<Request> {
        self.client.put(self.config.todo_url(id)).json(payload).build()
    }

    fn delete_request(&self, id: u32) -> reqwest::Result<Request> {
        self.client.delete(self.config.todo_url(id)).build()
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::Result<Request>) -> Result<T, TransportError> {
        let request = request?;
        log::debug!("[API] {} {}", request.method(), request.url());
        let response = self.client.execute(request).await?;
        decode(check_status(response)?).await
    }
}

/// Reject non-2xx responses
fn check_status(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if !status.is_success() {
        log::warn!("[API] {} answered {}", response.url(), status);
        return Err(TransportError::Status(status.as_u16()));
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, TransportError> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ApiResult<TodosPage> {
        self.send(self.list_request()).await.map_err(TodoApiError::Fetch)
    }

    async fn get(&self, id: u32) -> ApiResult<Todo> {
        self.send(self.get_request(id)).await.map_err(TodoApiError::Fetch)
    }

    async fn create(&self, payload: &CreateTodoPayload) -> ApiResult<Todo> {
        self.send(self.create_request(payload)).await.map_err(TodoApiError::Create)
    }

    async fn update(&self, id: u32, payload: &UpdateTodoPayload) -> ApiResult<Todo> {
        self.send(self.update_request(id, payload)).await.map_err(TodoApiError::Update)
    }

    async fn remove(&self, id: u32) -> ApiResult<DeletedTodo> {
        self.send(self.delete_request(id)).await.map_err(TodoApiError::Delete)
    }
}
