//! Request/response descriptors shown in the inspector

use serde::Serialize;

use crate::parse::CallDescriptor;
use crate::{Arguments, Value};

/// A simulated RPC request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    /// Procedure name
    pub method: String,

    /// Call arguments (JSON array or object)
    pub params: Arguments,

    /// Request id, mirrored by the response
    pub id: String,
}

impl Request {
    /// Build a request from an inferred call.
    pub fn from_call(call: &CallDescriptor, id: impl Into<String>) -> Self {
        Self {
            method: call.procedure_name.clone(),
            params: call.arguments.clone(),
            id: id.into(),
        }
    }

    /// Pretty-printed JSON for display.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// An RPC error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDescriptor {
    /// Error code
    pub code: i64,

    /// Human-readable message
    pub message: String,
}

/// A simulated RPC response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    /// The result value
    pub result: Value,

    /// Error payload; always `null` for simulated runs
    pub error: Option<ErrorDescriptor>,

    /// Id of the request this answers
    pub id: String,
}

impl Response {
    /// A successful response.
    pub fn success(result: Value, id: impl Into<String>) -> Self {
        Self {
            result,
            error: None,
            id: id.into(),
        }
    }

    /// Pretty-printed JSON for display.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
