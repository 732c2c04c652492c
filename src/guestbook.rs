//! # Guestbook
//!
//! Visitors leave a name and a short message. Entries are immutable once
//! written and are always listed newest first.
//!
//! ## Entry
//! - `id` (**int**): assigned by the store, unique and increasing in insertion order. Used as the sort key.
//! - `name` (**string**): up to 15 chars, bounded by the form only.
//! - `message` (**string**): up to 50 chars, bounded by the form only.
//! - `timestamp` (**string**): pre-formatted at write time, e.g. `2024-05-01 03:22:10 PM CET`.
//!
//! Length and emptiness are not re-checked here. Anything that reaches
//! [`Guestbook::add_entry`] is stored as given.
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::{database::EntryStore, error::AppError, utils::now_timestamp};

pub const MAX_NAME_CHAR: usize = 15;
pub const MAX_MESSAGE_CHAR: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
    #[serde(default, deserialize_with = "nullable")]
    pub timestamp: String,
}

/// Row payload for an insert. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEntry {
    pub name: String,
    pub message: String,
    pub timestamp: String,
}

fn nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Clone)]
pub struct Guestbook {
    store: Arc<dyn EntryStore>,
}

impl Guestbook {
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    pub async fn add_entry(&self, name: String, message: String) -> Result<(), AppError> {
        let timestamp = now_timestamp()?;
        debug!("Adding entry from {name} at {timestamp}");

        self.store
            .insert(NewEntry {
                name,
                message,
                timestamp,
            })
            .await
    }

    pub async fn list_entries(&self) -> Result<Vec<Entry>, AppError> {
        self.store.list_newest_first().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;

    fn guestbook() -> Guestbook {
        Guestbook::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_added_entry_is_listed_with_newest_id() {
        let guestbook = guestbook();
        guestbook
            .add_entry("Alice".to_string(), "Hello!".to_string())
            .await
            .unwrap();
        let first_id = guestbook.list_entries().await.unwrap()[0].id;

        guestbook
            .add_entry("Bob".to_string(), "Hi there".to_string())
            .await
            .unwrap();
        let entries = guestbook.list_entries().await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Bob");
        assert_eq!(entries[0].message, "Hi there");
        assert!(entries[0].id > first_id);
        assert!(entries[0].timestamp.ends_with(" CET"));
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let guestbook = guestbook();
        for name in ["Alice", "Bob", "Carol"] {
            guestbook
                .add_entry(name.to_string(), "hey".to_string())
                .await
                .unwrap();
        }

        let entries = guestbook.list_entries().await.unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, ["Carol", "Bob", "Alice"]);
        assert!(entries.windows(2).all(|pair| pair[0].id > pair[1].id));
    }

    #[tokio::test]
    async fn test_no_server_side_validation() {
        let guestbook = guestbook();
        let long_message = "x".repeat(MAX_MESSAGE_CHAR * 2);

        guestbook
            .add_entry(String::new(), long_message.clone())
            .await
            .unwrap();

        let entries = guestbook.list_entries().await.unwrap();
        assert_eq!(entries[0].name, "");
        assert_eq!(entries[0].message, long_message);
    }

    #[test]
    fn test_null_columns_deserialize_empty() {
        let entry: Entry = serde_json::from_str(
            r#"{"id": 3, "name": null, "message": "hi", "timestamp": null}"#,
        )
        .unwrap();

        assert_eq!(entry.id, 3);
        assert_eq!(entry.name, "");
        assert_eq!(entry.timestamp, "");
    }
}
