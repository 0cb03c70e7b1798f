//! Encoded backend calls waiting for the embedding shell to send them.

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::commands::BackendCommand;
use super::error::{BackendError, Result};

/// A backend call in wire form
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Invocation {
    pub command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Map<String, Value>>,
}

/// A reply as handed back by the transport
#[allow(dead_code)]
#[derive(Clone, Debug, Deserialize)]
pub struct BackendReply {
    pub command: String,
    #[serde(default)]
    pub result: Value,
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Encode a call. Payload-less calls get no payload at all.
pub fn encode<C: BackendCommand>(command: &C) -> Result<Invocation> {
    let value = serde_json::to_value(command).map_err(|source| BackendError::Encode {
        command: C::NAME,
        source,
    })?;

    let payload = match value {
        Value::Null => None,
        Value::Object(map) => Some(map),
        other => {
            return Err(BackendError::PayloadNotObject {
                command: C::NAME,
                found: json_kind(&other),
            });
        }
    };

    Ok(Invocation {
        command: C::NAME,
        payload,
    })
}

/// Parse a raw result into the call's response type
#[allow(dead_code)]
pub fn decode_response<C: BackendCommand>(result: Value) -> Result<C::Response> {
    serde_json::from_value(result).map_err(|source| BackendError::Response {
        command: C::NAME,
        source,
    })
}

/// Parse a reply, checking it answers `C`
#[allow(dead_code)]
pub fn decode_reply<C: BackendCommand>(reply: BackendReply) -> Result<C::Response> {
    if reply.command != C::NAME {
        return Err(BackendError::CommandMismatch {
            expected: C::NAME,
            got: reply.command,
        });
    }
    decode_response::<C>(reply.result)
}

/// Queue of calls produced by the UI
#[derive(Resource, Debug, Default)]
pub struct CommandOutbox {
    pending: Vec<Invocation>,
}

impl CommandOutbox {
    /// Encode and queue a call. Calls that fail to encode are logged and dropped.
    pub fn push<C: BackendCommand>(&mut self, command: &C) {
        match encode(command) {
            Ok(invocation) => {
                log::debug!("queued backend call `{}`", invocation.command);
                self.pending.push(invocation);
            }
            Err(err) => log::warn!("dropping backend call: {err}"),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Hand every queued call to the transport, oldest first
    pub fn drain(&mut self) -> Vec<Invocation> {
        std::mem::take(&mut self.pending)
    }
}
