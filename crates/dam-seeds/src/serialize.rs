//! Read-only projection of stored records into output-safe JSON.
//!
//! The projection rules live on the record types themselves: belongs-to
//! back-references are `skip_serializing` and has-many fields already hold
//! `{id, type}` stubs, so serializing a record yields exactly the output
//! form. Output size is therefore linear in the total record count rather
//! than exponential in graph depth, and cycles cannot appear. Nothing here
//! mutates the store.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ExportError;
use crate::record::RecordKind;
use crate::store::RecordStore;

/// Projects every stored record of `kind` into its output form, in bucket
/// order.
///
/// # Errors
///
/// Returns [`ExportError::Serialize`] if a record cannot be converted to
/// JSON.
pub fn serialize_kind(store: &RecordStore, kind: RecordKind) -> Result<Vec<Value>, ExportError> {
    match kind {
        RecordKind::Customers => to_values(&store.customers, kind),
        RecordKind::Projects => to_values(&store.projects, kind),
        RecordKind::Users => to_values(&store.users, kind),
        RecordKind::Groups => to_values(&store.groups, kind),
        RecordKind::Folders => to_values(&store.folders, kind),
        RecordKind::Collections => to_values(&store.collections, kind),
        RecordKind::Assets => to_values(&store.assets, kind),
    }
}

/// Projects the whole store into a kind-keyed document suitable for export.
///
/// # Errors
///
/// Returns [`ExportError::Serialize`] if any record cannot be converted to
/// JSON.
pub fn serialize_all(store: &RecordStore) -> Result<Map<String, Value>, ExportError> {
    let mut document = Map::new();
    for kind in RecordKind::ALL {
        let records = serialize_kind(store, kind)?;
        document.insert(kind.as_str().to_owned(), Value::Array(records));
    }
    Ok(document)
}

fn to_values<T: Serialize>(records: &[T], kind: RecordKind) -> Result<Vec<Value>, ExportError> {
    records
        .iter()
        .map(|record| {
            serde_json::to_value(record).map_err(|err| ExportError::Serialize {
                kind: kind.as_str(),
                message: err.to_string(),
            })
        })
        .collect()
}
