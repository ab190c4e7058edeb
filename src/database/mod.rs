//! ShopTrail database layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! key-value store the activity log persists into.
//!
//! # Usage
//!
//! ```no_run
//! use shoptrail::database::{Database, KeyValueStore};
//!
//! let db = Database::open("shoptrail.db").expect("failed to open database");
//! db.set("greeting", "hello").expect("write failed");
//! assert_eq!(db.get("greeting").unwrap().as_deref(), Some("hello"));
//! ```

pub mod connection;
pub mod kv_store;
pub mod migrations;

pub use connection::Database;
pub use kv_store::KeyValueStore;
