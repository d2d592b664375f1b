//! Steam binary VDF (`shortcuts.vdf`) handling.
//!
//! The codec writes single shortcut records and finds the last used index with
//! a byte scan; the store splices records in front of the `08 08` terminator
//! and writes the file back atomically.

mod codec;
mod store;

pub use codec::{
    encode_record, scan_max_index, Shortcut, EMPTY_STORE, STORE_TERMINATOR, TAG_INT32,
    TAG_OBJECT, TAG_OBJECT_END, TAG_STRING,
};
pub use store::{InsertPlan, ShortcutStore, insert_shortcut, plan_insert};
