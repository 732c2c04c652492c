//! # Supabase
//!
//! Hosted Postgres table reached through its PostgREST endpoint.
//!
//! Core purpose is to persist guestbook entries and hand them back newest first.
//!
//! ## Schema
//! - Table `guestbook`
//! - Columns: `id` (**int**, auto-increment primary key), `name` (**string**), `message` (**string**), `timestamp` (**string**)
//!
//! ## Operations
//! - Insert: `POST /rest/v1/guestbook` with `Prefer: return=minimal`
//! - List: `GET /rest/v1/guestbook?select=*&order=id.desc`
//! - Both carry the project key as `apikey` and as a bearer token
//!
//! Concurrent inserts lean on the table's own id sequence. Nothing is
//! locked or retried on this side.
use async_trait::async_trait;
use reqwest::{
    Client, Response,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::{
    error::AppError,
    guestbook::{Entry, NewEntry},
};

pub const TABLE: &str = "guestbook";

#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn insert(&self, entry: NewEntry) -> Result<(), AppError>;

    /// Every row, ordered by `id` descending.
    async fn list_newest_first(&self) -> Result<Vec<Entry>, AppError>;
}

pub struct SupabaseStore {
    client: Client,
    endpoint: String,
}

impl SupabaseStore {
    pub fn new(supabase_url: &str, supabase_key: &str) -> Result<Self, AppError> {
        let invalid_key = |_| AppError::InvalidConfig {
            key: crate::config::SUPABASE_KEY.to_string(),
            value: "<redacted>".to_string(),
        };

        let mut api_key = HeaderValue::from_str(supabase_key).map_err(invalid_key)?;
        api_key.set_sensitive(true);
        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {supabase_key}")).map_err(invalid_key)?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder().default_headers(headers).build()?;
        let endpoint = format!("{}/rest/v1/{TABLE}", supabase_url.trim_end_matches('/'));
        info!("Using store endpoint {endpoint}");

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl EntryStore for SupabaseStore {
    async fn insert(&self, entry: NewEntry) -> Result<(), AppError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Prefer", "return=minimal")
            .json(&entry)
            .send()
            .await?;

        check_status(response).await?;

        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<Entry>, AppError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("select", "*"), ("order", "id.desc")])
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }
}

async fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!("Store rejected request with {status}: {body}");

    Err(AppError::Store { status, body })
}

struct Rows {
    next_id: i64,
    entries: Vec<Entry>,
}

/// In-process table with the same id and ordering rules as the hosted one.
pub struct MemoryStore {
    rows: RwLock<Rows>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Rows {
                next_id: 1,
                entries: Vec::new(),
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn insert(&self, entry: NewEntry) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        let id = rows.next_id;
        rows.next_id += 1;

        rows.entries.push(Entry {
            id,
            name: entry.name,
            message: entry.message,
            timestamp: entry.timestamp,
        });

        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<Entry>, AppError> {
        let mut entries = self.rows.read().await.entries.clone();
        entries.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;

    const KEY: &str = "test-key";

    fn new_entry(name: &str) -> NewEntry {
        NewEntry {
            name: name.to_string(),
            message: "Hello!".to_string(),
            timestamp: "2024-05-01 03:22:10 PM CET".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_posts_row_with_key() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/rest/v1/guestbook")
            .match_header("apikey", KEY)
            .match_header("authorization", "Bearer test-key")
            .match_header("prefer", "return=minimal")
            .match_body(Matcher::Json(json!({
                "name": "Alice",
                "message": "Hello!",
                "timestamp": "2024-05-01 03:22:10 PM CET",
            })))
            .with_status(201)
            .create_async()
            .await;

        let store = SupabaseStore::new(&server.url(), KEY).unwrap();
        store.insert(new_entry("Alice")).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_orders_by_id_desc() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/guestbook")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), "*".into()),
                Matcher::UrlEncoded("order".into(), "id.desc".into()),
            ]))
            .match_header("apikey", KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    {"id": 2, "name": "Bob", "message": "Yo", "timestamp": "2024-05-01 03:23:00 PM CET"},
                    {"id": 1, "name": "Alice", "message": "Hello!", "timestamp": "2024-05-01 03:22:10 PM CET"},
                ])
                .to_string(),
            )
            .create_async()
            .await;

        // Trailing slash on the project URL is tolerated.
        let store = SupabaseStore::new(&format!("{}/", server.url()), KEY).unwrap();
        let entries = store.list_newest_first().await.unwrap();

        mock.assert_async().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 2);
        assert_eq!(entries[0].name, "Bob");
        assert_eq!(entries[1].message, "Hello!");
    }

    #[tokio::test]
    async fn test_rejected_key_surfaces_store_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/rest/v1/guestbook")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body("Invalid API key")
            .create_async()
            .await;

        let store = SupabaseStore::new(&server.url(), "wrong").unwrap();
        let result = store.list_newest_first().await;

        match result {
            Err(AppError::Store { status, body }) => {
                assert_eq!(status.as_u16(), 401);
                assert_eq!(body, "Invalid API key");
            }
            other => panic!("expected store error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_store_is_request_error() {
        let store = SupabaseStore::new("http://127.0.0.1:1", KEY).unwrap();

        let result = store.insert(new_entry("Alice")).await;

        assert!(matches!(result, Err(AppError::Request(_))));
    }

    #[test]
    fn test_key_with_newline_is_invalid_config() {
        let result = SupabaseStore::new("http://localhost", "bad\nkey");

        assert!(matches!(result, Err(AppError::InvalidConfig { .. })));
    }

    #[tokio::test]
    async fn test_memory_ids_increase() {
        let store = MemoryStore::new();
        store.insert(new_entry("Alice")).await.unwrap();
        store.insert(new_entry("Bob")).await.unwrap();
        store.insert(new_entry("Carol")).await.unwrap();

        let entries = store.list_newest_first().await.unwrap();
        let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();

        assert_eq!(ids, [3, 2, 1]);
        assert_eq!(entries[0].name, "Carol");
    }
}
