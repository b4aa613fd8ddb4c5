//! CBOR wire codec shared by every command.
//!
//! Each message is a single CBOR map. Requests lead with a `cmd` text entry,
//! replies lead with a `status` text entry; both are written before the
//! variant's own fields so a decoder can dispatch without outside context.

use crate::envelope::{AnyRequest, Reply};
use crate::error::{CodecError, Result};
use ciborium::Value;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

/// Key carrying a reply's status discriminant.
pub const STATUS_KEY: &str = "status";

/// Key carrying a request's command discriminant.
pub const CMD_KEY: &str = "cmd";

/// Key carrying the optional human-readable reason of a reply.
pub const REASON_KEY: &str = "reason";

/// Encode a message into CBOR bytes.
///
/// # Errors
///
/// Returns an error if the message cannot be serialized.
pub fn encode<T: Serialize + ?Sized>(msg: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    ciborium::ser::into_writer(msg, &mut buf)?;
    Ok(buf)
}

/// Decode CBOR bytes into a message.
///
/// # Errors
///
/// Returns an error if the data is invalid, has trailing bytes, or the
/// message cannot be deserialized.
pub fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T> {
    decode_value(data)?.deserialized().map_err(Into::into)
}

/// Decode exactly one top-level CBOR item.
fn decode_value(data: &[u8]) -> Result<Value> {
    let mut reader = data;
    let value: Value = ciborium::de::from_reader(&mut reader)?;
    if !reader.is_empty() {
        return Err(CodecError::TrailingBytes(reader.len()));
    }
    Ok(value)
}

fn entries(value: &Value) -> Result<&[(Value, Value)]> {
    match value {
        Value::Map(entries) => Ok(entries),
        _ => Err(CodecError::NotAMap),
    }
}

/// Look up `key`, refusing maps that carry it more than once.
fn field<'a>(entries: &'a [(Value, Value)], key: &'static str) -> Result<Option<&'a Value>> {
    let mut found = entries
        .iter()
        .filter(|(k, _)| matches!(k, Value::Text(text) if text == key))
        .map(|(_, v)| v);
    let first = found.next();
    if found.next().is_some() {
        return Err(CodecError::DuplicateField(key));
    }
    Ok(first)
}

fn text_field<'a>(entries: &'a [(Value, Value)], key: &'static str) -> Result<&'a str> {
    match field(entries, key)? {
        Some(Value::Text(text)) => Ok(text),
        Some(_) => Err(CodecError::InvalidField {
            field: key,
            expected: "text",
        }),
        None => Err(CodecError::MissingField(key)),
    }
}

fn optional_text_field(entries: &[(Value, Value)], key: &'static str) -> Result<Option<String>> {
    match field(entries, key)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Text(text)) => Ok(Some(text.clone())),
        Some(_) => Err(CodecError::InvalidField {
            field: key,
            expected: "text or absent",
        }),
    }
}

/// Wire shape of a reply whose status the reader does not model.
#[derive(Serialize)]
struct StatusReply<'a> {
    status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

/// Encode a bare `{status, reason?}` reply.
///
/// Used for `UnknownStatus` variants and for protocol-level statuses that are
/// not tied to a single command.
///
/// # Errors
///
/// Returns an error if the reply cannot be serialized.
pub fn encode_status(status: &str, reason: Option<&str>) -> Result<Vec<u8>> {
    encode(&StatusReply { status, reason })
}

/// Decode a reply, routing statuses unknown to `R` to its catch-all variant.
///
/// # Errors
///
/// Returns an error only on structurally malformed input.
pub fn decode_reply<R: Reply>(data: &[u8]) -> Result<R> {
    let value = decode_value(data)?;
    let entries = entries(&value)?;
    let status = text_field(entries, STATUS_KEY)?;

    if R::STATUSES.contains(&status) {
        return value.deserialized().map_err(Into::into);
    }

    debug!(status, "routing unrecognized reply status to UnknownStatus");
    let reason = optional_text_field(entries, REASON_KEY)?;
    Ok(R::unknown_status(status.to_owned(), reason))
}

/// Encode a reply, including its catch-all variant.
///
/// # Errors
///
/// Returns an error if the reply cannot be serialized, or if its catch-all
/// variant carries a status the reply models with a variant of its own.
pub fn encode_reply<R: Reply>(reply: &R) -> Result<Vec<u8>> {
    match reply.status() {
        // A known tag here would load back as another variant.
        crate::Status::Unknown(status) if R::STATUSES.contains(&status) => {
            Err(CodecError::SerializationFailed(format!(
                "status `{status}` is not unknown to this reply"
            )))
        }
        crate::Status::Unknown(status) => encode_status(status, reply.reason()),
        _ => encode(reply),
    }
}

/// Decode a request of the family `F`, dispatching on its `cmd` entry.
///
/// # Errors
///
/// Returns [`CodecError::UnknownCommand`] if the family has no such command,
/// or another codec error on malformed input.
pub fn decode_request<F: AnyRequest>(data: &[u8]) -> Result<F> {
    let value = decode_value(data)?;
    let entries = entries(&value)?;
    let cmd = text_field(entries, CMD_KEY)?;

    if !F::COMMANDS.contains(&cmd) {
        return Err(CodecError::UnknownCommand(cmd.to_owned()));
    }

    value.deserialized().map_err(Into::into)
}
