//! Webhook payload serialization.
//!
//! Receivers verify the checksum and HMAC over the exact payload bytes, and
//! existing receivers were written against a fixed layout:
//!
//! ```text
//! {"message_type": "ping", "message_data": {"title": "Café"}}
//! ```
//!
//! - `", "` between elements and `": "` after keys
//! - keys in insertion order
//! - every non-ASCII character (and DEL) escaped as `\uXXXX`, using
//!   surrogate pairs outside the Basic Multilingual Plane

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Value};

use crate::notification::Notification;

/// Wire shape of a webhook payload.
#[derive(Debug, Serialize)]
struct Payload<'a> {
    message_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_data: Option<&'a Map<String, Value>>,
}

/// Builds the JSON payload for a notification.
///
/// `message_data` is omitted when the notification carries no data.
///
/// # Errors
///
/// Returns an error if the message data cannot be serialized.
pub fn build(notification: &Notification) -> Result<String, serde_json::Error> {
    to_string(&Payload {
        message_type: notification.kind().wire_name(),
        message_data: notification.webhook_message_data(),
    })
}

/// Serializes any value in the webhook payload layout.
///
/// # Errors
///
/// Returns an error if `value` fails to serialize.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf)
        .map_err(|e| serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// JSON formatter producing spaced separators and ASCII-only output.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\x7f' {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..index])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}
