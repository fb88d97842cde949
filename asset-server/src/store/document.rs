//! [`AssetStore`] backed by a SQLite document collection.
//!
//! Each asset is one JSON document in a table named after the collection,
//! keyed by URI. User input only ever reaches SQL as a bound parameter; the
//! collection name is the one interpolated fragment and is checked with
//! [`is_valid_collection`] before any statement is built.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use super::{AssetStore, StoreError};
use crate::model::Asset;
use crate::validate::is_valid_collection;

type Result<T> = std::result::Result<T, StoreError>;

/// Document store over a single SQLite connection.
///
/// The connection is shared by every request behind a mutex; calls run on
/// the blocking thread pool.
#[derive(Clone)]
pub struct DocumentStore {
    conn: Arc<Mutex<Connection>>,
    queries: Arc<Queries>,
}

/// SQL text for one collection, built once at open time.
struct Queries {
    list: String,
    get: String,
    upsert: String,
    remove: String,
}

impl Queries {
    fn for_collection(collection: &str) -> Self {
        Self {
            list: format!(
                "SELECT doc FROM {collection} ORDER BY json_extract(doc, '$.name') ASC, uri ASC"
            ),
            get: format!("SELECT doc FROM {collection} WHERE uri = ?1"),
            upsert: format!(
                "INSERT INTO {collection} (uri, doc) VALUES (?1, ?2) \
                 ON CONFLICT(uri) DO UPDATE SET doc = excluded.doc"
            ),
            remove: format!("DELETE FROM {collection} WHERE uri = ?1"),
        }
    }
}

impl DocumentStore {
    /// Open (or create) a document store at `path`.
    pub fn open(path: impl AsRef<Path>, collection: &str) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |_| Ok(()))?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        info!(path = %path.as_ref().display(), collection, "opened document store");
        Self::init(conn, collection)
    }

    /// Open a private in-memory document store. Useful for tests.
    pub fn open_in_memory(collection: &str) -> Result<Self> {
        Self::init(Connection::open_in_memory()?, collection)
    }

    fn init(conn: Connection, collection: &str) -> Result<Self> {
        if !is_valid_collection(collection) {
            return Err(StoreError::InvalidCollection {
                name: collection.to_string(),
            });
        }
        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {collection} (
                    uri TEXT PRIMARY KEY,
                    doc TEXT NOT NULL
                )"
            ),
            [],
        )?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            queries: Arc::new(Queries::for_collection(collection)),
        })
    }

    /// Run `f` against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection, &Queries) -> Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        let queries = Arc::clone(&self.queries);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| StoreError::Poisoned)?;
            f(&guard, &queries)
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

#[async_trait::async_trait]
impl AssetStore for DocumentStore {
    async fn list_all(&self) -> Result<Vec<Asset>> {
        self.with_conn(|conn, q| {
            let mut stmt = conn.prepare_cached(&q.list)?;
            let docs = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            docs.iter()
                .map(|doc| serde_json::from_str(doc).map_err(StoreError::from))
                .collect()
        })
        .await
    }

    async fn get(&self, uri: &str) -> Result<Option<Asset>> {
        let uri = uri.to_string();
        self.with_conn(move |conn, q| {
            let doc: Option<String> = conn
                .prepare_cached(&q.get)?
                .query_row(params![uri], |row| row.get(0))
                .optional()?;
            match doc {
                Some(doc) => Ok(Some(serde_json::from_str(&doc)?)),
                None => Ok(None),
            }
        })
        .await
    }

    async fn upsert(&self, asset: &Asset) -> Result<()> {
        let uri = asset.uri.clone();
        let doc = serde_json::to_string(asset)?;
        self.with_conn(move |conn, q| {
            conn.prepare_cached(&q.upsert)?.execute(params![uri, doc])?;
            debug!(uri = %uri, "upserted asset document");
            Ok(())
        })
        .await
    }

    async fn remove(&self, uri: &str) -> Result<()> {
        let uri = uri.to_string();
        self.with_conn(move |conn, q| {
            let removed = conn.prepare_cached(&q.remove)?.execute(params![uri])?;
            debug!(uri = %uri, removed, "removed asset document");
            Ok(())
        })
        .await
    }
}
