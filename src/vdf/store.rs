//! Read-modify-write of `shortcuts.vdf`.
//!
//! There is no locking. Two concurrent runs against the same file can both
//! read the old contents and the later write wins, dropping the other's
//! shortcut. The tool is meant to be run by one user at a time.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use super::codec::{EMPTY_STORE, STORE_TERMINATOR, Shortcut, encode_record, scan_max_index};
use crate::error::{Result, StoreFormatError};
use crate::fs_util::write_atomic;

/// In-memory shortcuts store with a validated terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutStore {
    bytes: Vec<u8>,
}

impl ShortcutStore {
    /// A store containing no shortcuts.
    pub fn empty() -> Self {
        Self {
            bytes: EMPTY_STORE.to_vec(),
        }
    }

    /// Wrap raw store bytes. Fails unless they end with `08 08`.
    pub fn from_bytes(bytes: Vec<u8>) -> std::result::Result<Self, StoreFormatError> {
        if !bytes.ends_with(&STORE_TERMINATOR) {
            let tail = &bytes[bytes.len().saturating_sub(2)..];
            return Err(StoreFormatError::BadTerminator {
                tail: hex_bytes(tail),
            });
        }
        Ok(Self { bytes })
    }

    /// Index the next inserted record will get.
    pub fn next_index(&self) -> std::result::Result<u32, StoreFormatError> {
        match scan_max_index(&self.bytes) {
            None => Ok(0),
            Some(last) => last
                .checked_add(1)
                .ok_or(StoreFormatError::IndexExhausted { last }),
        }
    }

    /// Splice `shortcut` in front of the terminator and return its index.
    pub fn insert(&mut self, shortcut: &Shortcut) -> std::result::Result<u32, StoreFormatError> {
        let index = self.next_index()?;
        let record = encode_record(index, shortcut);

        let body_len = self.bytes.len() - STORE_TERMINATOR.len();
        self.bytes.truncate(body_len);
        self.bytes.extend_from_slice(&record);
        self.bytes.extend_from_slice(&STORE_TERMINATOR);

        debug!(index, record_len = record.len(), total_len = self.bytes.len(), "Spliced record");
        Ok(index)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn hex_bytes(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "nothing".to_string();
    }
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// What an insert would do, without writing.
#[derive(Debug, Clone, Serialize)]
pub struct InsertPlan {
    pub store_path: PathBuf,
    pub store_exists: bool,
    pub index: u32,
    pub record_len: usize,
    pub new_len: usize,
}

/// Compute the index and resulting size of inserting `shortcut` into the store
/// at `store_path`. A missing file is treated as an empty store.
#[instrument(skip(shortcut), fields(path = %store_path.display()))]
pub fn plan_insert(store_path: &Path, shortcut: &Shortcut) -> Result<InsertPlan> {
    let store_exists = store_path.exists();
    let store = if store_exists {
        ShortcutStore::from_bytes(fs::read(store_path)?).map_err(|e| e.at(store_path))?
    } else {
        ShortcutStore::empty()
    };

    let index = store.next_index().map_err(|e| e.at(store_path))?;
    let record_len = encode_record(index, shortcut).len();

    Ok(InsertPlan {
        store_path: store_path.to_path_buf(),
        store_exists,
        index,
        record_len,
        new_len: store.len() + record_len,
    })
}

/// Append `shortcut` to the store at `store_path` and return its index.
///
/// A missing file is first created as an empty store. A file that does not
/// end in `08 08` is left untouched and `MalformedStore` is returned.
#[instrument(skip(shortcut), fields(path = %store_path.display(), appid = %shortcut.appid))]
pub fn insert_shortcut(store_path: &Path, shortcut: &Shortcut) -> Result<u32> {
    if !store_path.exists() {
        info!("Creating empty shortcuts file");
        fs::write(store_path, EMPTY_STORE)?;
    }

    let bytes = fs::read(store_path)?;
    debug!(len = bytes.len(), "Read shortcuts file");

    let mut store = ShortcutStore::from_bytes(bytes).map_err(|e| e.at(store_path))?;
    let index = store.insert(shortcut).map_err(|e| e.at(store_path))?;

    write_atomic(store_path, store.as_bytes())?;
    debug!(len = store.len(), "Wrote shortcuts file");
    info!(index, "Shortcut added");
    Ok(index)
}
