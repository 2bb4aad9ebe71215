//! API Configuration
//!
//! Where the todo service lives and how much of it to fetch.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_PAGE_LIMIT: u32 = 30;
pub const DEFAULT_USER_ID: u32 = 1;

/// Todo service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Service root, without the `/todos` path
    pub base_url: String,
    /// Page size of the single list request
    pub page_limit: u32,
    /// Owner assigned to newly created todos
    pub default_user_id: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            default_user_id: DEFAULT_USER_ID,
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// `{base}/todos`, tolerating a trailing slash on the base
    pub fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url.trim_end_matches('/'))
    }

    pub fn list_url(&self) -> String {
        format!("{}?limit={}", self.todos_url(), self.page_limit)
    }

    pub fn todo_url(&self, id: u32) -> String {
        format!("{}/{}", self.todos_url(), id)
    }

    pub fn add_url(&self) -> String {
        format!("{}/add", self.todos_url())
    }
}
