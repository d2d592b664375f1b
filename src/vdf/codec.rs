//! Binary VDF record encoding and the shallow index scan.
//!
//! Only the subset of the format needed to append one shortcut is modelled.
//! A record looks like:
//!
//! ```text
//! 00 <index ascii> 00
//! 02 "appid" 00 <u32 le>
//! 01 "appname" 00 <utf8> 00
//! 01 "exe" 00 <utf8> 00
//! 01 "StartDir" 00 <utf8> 00
//! 01 "icon" 00 <utf8> 00
//! 08
//! ```

use std::path::Path;

use serde::Serialize;
use tracing::trace;

use crate::appid::ShortcutId;

/// Opens a nested object; also terminates keys and string values.
pub const TAG_OBJECT: u8 = 0x00;
/// Null-terminated string field.
pub const TAG_STRING: u8 = 0x01;
/// 4-byte little-endian integer field.
pub const TAG_INT32: u8 = 0x02;
/// Closes the innermost object.
pub const TAG_OBJECT_END: u8 = 0x08;

/// Trailing bytes of a well-formed store: end of `shortcuts`, end of root.
pub const STORE_TERMINATOR: [u8; 2] = [TAG_OBJECT_END, TAG_OBJECT_END];

/// A store with no shortcuts: `00 "shortcuts" 00 08 08`.
pub const EMPTY_STORE: &[u8] = b"\x00shortcuts\x00\x08\x08";

/// One shortcut to be written into the store.
///
/// Strings must not contain NUL bytes; a NUL would end the field early and the
/// remainder would be read by Steam as the next tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    pub appid: ShortcutId,
    pub app_name: String,
    pub exe: String,
    pub start_dir: String,
    pub icon: String,
}

impl Shortcut {
    /// Build a shortcut, deriving the app id and the icon path under `config_dir`.
    pub fn new(app_name: &str, exe: &str, start_dir: &str, config_dir: &Path) -> Self {
        let appid = ShortcutId::from_name_and_exe(app_name, exe);
        Self {
            appid,
            app_name: app_name.to_string(),
            exe: exe.to_string(),
            start_dir: start_dir.to_string(),
            icon: appid.icon_path(config_dir).to_string_lossy().into_owned(),
        }
    }
}

fn push_key(out: &mut Vec<u8>, tag: u8, key: &str) {
    out.push(tag);
    out.extend_from_slice(key.as_bytes());
    out.push(TAG_OBJECT);
}

fn push_string(out: &mut Vec<u8>, key: &str, value: &str) {
    push_key(out, TAG_STRING, key);
    out.extend_from_slice(value.as_bytes());
    out.push(TAG_OBJECT);
}

fn push_int32(out: &mut Vec<u8>, key: &str, value: [u8; 4]) {
    push_key(out, TAG_INT32, key);
    out.extend_from_slice(&value);
}

/// Encode a single shortcut record at `index`. Field order is fixed.
pub fn encode_record(index: u32, shortcut: &Shortcut) -> Vec<u8> {
    let mut out = Vec::with_capacity(
        64 + shortcut.app_name.len()
            + shortcut.exe.len()
            + shortcut.start_dir.len()
            + shortcut.icon.len(),
    );

    push_key(&mut out, TAG_OBJECT, &index.to_string());
    push_int32(&mut out, "appid", shortcut.appid.to_le_bytes());
    push_string(&mut out, "appname", &shortcut.app_name);
    push_string(&mut out, "exe", &shortcut.exe);
    push_string(&mut out, "StartDir", &shortcut.start_dir);
    push_string(&mut out, "icon", &shortcut.icon);
    out.push(TAG_OBJECT_END);

    trace!(index, len = out.len(), appid = %shortcut.appid, "Encoded shortcut record");
    out
}

/// Return the value of the last `00 <digits> 00` run in `data`, scanning left
/// to right with non-overlapping matches.
///
/// This does not parse the tree. A string value that is itself a run of digits
/// (an app named `"7"` encodes as `"appname" 00 "7" 00`) is indistinguishable
/// from an index key and will be reported. Runs that overflow `u32` are
/// ignored.
pub fn scan_max_index(data: &[u8]) -> Option<u32> {
    let mut last = None;
    let mut i = 0;

    while i < data.len() {
        if data[i] != TAG_OBJECT {
            i += 1;
            continue;
        }

        let digits_start = i + 1;
        let digits_len = data[digits_start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        let close = digits_start + digits_len;

        if digits_len > 0 && data.get(close) == Some(&TAG_OBJECT) {
            // ASCII digits are valid UTF-8.
            let text = std::str::from_utf8(&data[digits_start..close]).unwrap_or_default();
            match text.parse::<u32>() {
                Ok(value) => {
                    trace!(offset = i, value, "Index candidate");
                    last = Some(value);
                }
                Err(_) => trace!(offset = i, text, "Skipping oversized index candidate"),
            }
            i = close + 1;
        } else {
            i += 1;
        }
    }

    last
}
