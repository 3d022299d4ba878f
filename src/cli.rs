use clap::Subcommand;
use color_eyre::eyre::{eyre, Result};
use content_store::{CollectionStore, ContentKind, ContentService, ServiceError, UpsertMode};
use serde_json::{json, Value};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List a collection in display order
    List {
        kind: ContentKind,
        /// Include archived records after the active ones
        #[arg(long)]
        all: bool,
    },

    /// Show one record
    Get { kind: ContentKind, id: String },

    /// Create or replace a record; its `order` is the requested position
    Upsert {
        kind: ContentKind,
        /// Read the record from a JSON file
        #[arg(long, conflicts_with = "json", required_unless_present = "json")]
        file: Option<PathBuf>,
        /// Record as inline JSON
        #[arg(long)]
        json: Option<String>,
        /// Reject an out-of-range order instead of clamping it
        #[arg(long)]
        strict: bool,
    },

    /// Archive a record, closing the gap it leaves
    Archive { kind: ContentKind, id: String },

    /// Bring an archived record back at the given position (default: last)
    Restore {
        kind: ContentKind,
        id: String,
        #[arg(long)]
        order: Option<u32>,
    },

    /// Renumber the active records of a collection to 1..N
    Normalize { kind: ContentKind },

    /// Remove a record for good
    Delete { kind: ContentKind, id: String },

    /// Check whether an order is valid before submitting an edit
    CheckOrder {
        kind: ContentKind,
        order: u32,
        /// Id of the active record being moved (omit for a new record)
        #[arg(long)]
        existing: Option<String>,
    },
}

/// Execute a command and return what should be printed.
pub async fn run<S: CollectionStore>(
    service: &ContentService<S>,
    command: Command,
) -> Result<Value> {
    let output = match command {
        Command::List { kind, all } => serde_json::to_value(service.list(kind, all).await?)?,
        Command::Get { kind, id } => serde_json::to_value(service.get(kind, &id).await?)?,
        Command::Upsert {
            kind,
            file,
            json,
            strict,
        } => {
            let payload = read_payload(file, json).await?;
            let mode = if strict {
                UpsertMode::Strict
            } else {
                UpsertMode::Clamp
            };
            serde_json::to_value(service.upsert_value(kind, payload, mode).await?)?
        }
        Command::Archive { kind, id } => serde_json::to_value(service.archive(kind, &id).await?)?,
        Command::Restore { kind, id, order } => {
            serde_json::to_value(service.restore(kind, &id, order).await?)?
        }
        Command::Normalize { kind } => serde_json::to_value(service.normalize(kind).await?)?,
        Command::Delete { kind, id } => serde_json::to_value(service.delete(kind, &id).await?)?,
        Command::CheckOrder {
            kind,
            order,
            existing,
        } => match service.check_order(kind, order, existing.as_deref()).await {
            Ok(order) => json!({ "valid": true, "order": order }),
            Err(ServiceError::InvalidOrder(reason)) => {
                json!({ "valid": false, "order": order, "reason": reason.to_string() })
            }
            Err(e) => return Err(e.into()),
        },
    };
    Ok(output)
}

async fn read_payload(file: Option<PathBuf>, json: Option<String>) -> Result<Value> {
    let text = match (file, json) {
        (Some(path), _) => tokio::fs::read_to_string(&path).await?,
        (None, Some(text)) => text,
        (None, None) => return Err(eyre!("Either --file or --json is required")),
    };
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
