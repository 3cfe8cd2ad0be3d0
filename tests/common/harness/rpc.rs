//! Builder for scripted JSON-RPC sessions piped through `serve`.

#![allow(dead_code)]

use serde_json::{Value, json};

/// Accumulates JSON-RPC messages, one per line, with increasing ids.
#[derive(Debug, Default)]
pub struct RpcSession {
    lines: Vec<Vec<u8>>,
    next_id: u64,
}

impl RpcSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends `initialize` followed by the `initialized` notification.
    pub fn initialize(self) -> Self {
        self.request(
            "initialize",
            Some(json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": { "name": "harness", "version": "0.0.0" }
            })),
        )
        .notify("notifications/initialized")
    }

    /// Adds a request with the next id.
    pub fn request(mut self, method: &str, params: Option<Value>) -> Self {
        self.next_id += 1;
        let mut message = json!({ "jsonrpc": "2.0", "id": self.next_id, "method": method });
        if let Some(params) = params {
            message["params"] = params;
        }
        self.lines.push(message.to_string().into_bytes());
        self
    }

    /// Adds a notification (no id, no response expected).
    pub fn notify(mut self, method: &str) -> Self {
        let message = json!({ "jsonrpc": "2.0", "method": method });
        self.lines.push(message.to_string().into_bytes());
        self
    }

    /// Adds a `tools/call` request.
    pub fn call_tool(self, name: &str, arguments: Value) -> Self {
        self.request(
            "tools/call",
            Some(json!({ "name": name, "arguments": arguments })),
        )
    }

    /// Adds a raw line verbatim; it need not be valid UTF-8.
    pub fn raw(mut self, line: impl AsRef<[u8]>) -> Self {
        self.lines.push(line.as_ref().to_vec());
        self
    }

    /// Renders the session as newline-delimited input.
    pub fn into_input(self) -> Vec<u8> {
        let mut input = self.lines.join(&b'\n');
        input.push(b'\n');
        input
    }
}

/// Parses each stdout line as a JSON-RPC response.
pub fn parse_responses(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("response line should be JSON"))
        .collect()
}

/// Extracts the first text content block of a tool result.
pub fn tool_text(response: &Value) -> &str {
    response["result"]["content"][0]["text"]
        .as_str()
        .expect("response should carry text content")
}
