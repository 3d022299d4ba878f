// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        clippy::cast_possible_truncation
    )
)]

pub mod config;
pub mod content;
pub mod logging;
pub mod ordering;
pub mod service;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::{load_config, Config, ConfigError};
pub use content::{ContentKind, OrderedCore, Record};
pub use ordering::{archive, normalize, restore, upsert, OrderError, Ordered};
pub use service::{ContentService, ServiceError, UpsertMode};
pub use store::{CollectionStore, FileStore, MemoryStore, Snapshot, StoreError, Version};
