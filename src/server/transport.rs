//! Newline-delimited stdio transport in front of the rmcp service.
//!
//! Input lines are screened before rmcp sees them. A line that is not UTF-8,
//! not JSON, or not a message the service understands is answered here with
//! a JSON-RPC error and dropped, so one bad line never ends the session.
//! Requests are forwarded one at a time: the next line is read only after the
//! previous request has been answered.

use anyhow::{Context, Result};
use rmcp::ServiceExt;
use rmcp::model::ClientJsonRpcMessage;
use serde_json::{Value, json};
use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, DuplexStream, duplex,
};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use super::service::NotesService;

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;

/// Requests the service answers; anything else is a method-not-found.
const KNOWN_METHODS: &[&str] = &["initialize", "ping", "tools/list", "tools/call"];

const PIPE_CAPACITY: usize = 64 * 1024;

/// What to do with one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Screened {
    /// Whitespace only.
    Blank,
    /// Hand to the service; `awaits_reply` is set for requests.
    Forward { awaits_reply: bool },
    /// Answer with this error response instead of forwarding.
    Reject(Value),
    /// A notification the service cannot parse; dropped silently.
    Ignore,
}

/// Classifies a raw input line.
pub fn screen(line: &[u8]) -> Screened {
    let line = line.trim_ascii();
    if line.is_empty() {
        return Screened::Blank;
    }

    let value: Value = match serde_json::from_slice(line) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "unparseable message");
            return Screened::Reject(error_response(Value::Null, PARSE_ERROR, "Parse error"));
        }
    };

    if !value.is_object() {
        warn!("message is not a JSON object");
        return Screened::Reject(error_response(Value::Null, INVALID_REQUEST, "Invalid Request"));
    }

    let parsed = serde_json::from_value::<ClientJsonRpcMessage>(value.clone()).is_ok();
    let method = value.get("method").and_then(Value::as_str);

    let id = match (value.get("id"), method) {
        (None, _) if parsed => return Screened::Forward { awaits_reply: false },
        (None, _) => {
            debug!(message = %value, "ignoring unrecognized notification");
            return Screened::Ignore;
        }
        // a client's answer to a server request
        (Some(_), None) if parsed => return Screened::Forward { awaits_reply: false },
        (Some(id), _) => id.clone(),
    };

    let valid_envelope =
        value.get("jsonrpc") == Some(&json!("2.0")) && (id.is_string() || id.is_number());

    let response = match method {
        Some(m) if valid_envelope && !KNOWN_METHODS.contains(&m) => {
            let mut response = error_response(id, METHOD_NOT_FOUND, "Method not found");
            response["error"]["data"] = json!({ "method": m });
            response
        }
        Some(m) if valid_envelope && parsed => {
            debug!(method = m, "request");
            return Screened::Forward { awaits_reply: true };
        }
        Some(_) if valid_envelope => error_response(id, INVALID_PARAMS, "Invalid params"),
        _ => error_response(id, INVALID_REQUEST, "Invalid Request"),
    };
    warn!(code = %response["error"]["code"], "rejected message");
    Screened::Reject(response)
}

fn error_response(id: Value, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message },
    })
}

/// Serves `service` over stdin and stdout until stdin closes.
pub async fn serve_stdio(service: NotesService) -> Result<()> {
    serve(service, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Serves `service` over a newline-delimited byte stream until `reader` hits
/// EOF, writing one line per response to `writer`.
///
/// # Errors
///
/// Returns an error if the MCP handshake fails or reading input or writing
/// output fails. A failing tool call is reported to the client and serving
/// continues.
pub async fn serve<R, W>(service: NotesService, reader: R, writer: W) -> Result<()>
where
    R: AsyncRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    info!(root = %service.tools().store().root().display(), "serving MCP over stdio");

    let (input_tx, input_rx) = duplex(PIPE_CAPACITY);
    let (output_tx, output_rx) = duplex(PIPE_CAPACITY);
    let (reject_tx, reject_rx) = mpsc::unbounded_channel();
    let (answered_tx, answered_rx) = watch::channel(0usize);

    let pump_in = tokio::spawn(pump_input(reader, input_tx, reject_tx, answered_rx));
    let pump_out = tokio::spawn(pump_output(output_rx, reject_rx, writer, answered_tx));

    let running = service
        .serve((input_rx, output_tx))
        .await
        .context("MCP handshake failed")?;
    let reason = running.waiting().await.context("MCP service task failed")?;
    debug!(?reason, "service stopped");

    pump_in.await.context("input task panicked")??;
    pump_out.await.context("output task panicked")??;

    info!("input closed, shutting down");
    Ok(())
}

/// Reads raw lines, forwarding screened messages to the service.
async fn pump_input<R: AsyncRead + Unpin>(
    reader: R,
    mut service_in: DuplexStream,
    rejects: mpsc::UnboundedSender<String>,
    mut answered: watch::Receiver<usize>,
) -> Result<()> {
    let mut reader = BufReader::new(reader);
    let mut line = Vec::new();
    let mut forwarded = 0usize;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            break;
        }

        match screen(&line) {
            Screened::Blank | Screened::Ignore => {}
            Screened::Reject(response) => {
                if rejects.send(response.to_string()).is_err() {
                    break;
                }
            }
            Screened::Forward { awaits_reply } => {
                if !line.ends_with(b"\n") {
                    line.push(b'\n');
                }
                service_in.write_all(&line).await?;
                service_in.flush().await?;

                if awaits_reply {
                    forwarded += 1;
                    if answered.wait_for(|n| *n >= forwarded).await.is_err() {
                        break;
                    }
                }
            }
        }
    }

    service_in.shutdown().await?;
    Ok(())
}

/// Writes service output and local rejections to `writer`, one per line.
async fn pump_output<W: AsyncWrite + Unpin>(
    service_out: DuplexStream,
    mut rejects: mpsc::UnboundedReceiver<String>,
    mut writer: W,
    answered: watch::Sender<usize>,
) -> Result<()> {
    let mut lines = BufReader::new(service_out).lines();
    let mut rejects_open = true;

    loop {
        tokio::select! {
            biased;

            reject = rejects.recv(), if rejects_open => match reject {
                Some(line) => write_line(&mut writer, &line).await?,
                None => rejects_open = false,
            },
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                write_line(&mut writer, &line).await?;
                if is_response(&line) {
                    answered.send_modify(|n| *n += 1);
                }
            }
        }
    }

    while let Ok(line) = rejects.try_recv() {
        write_line(&mut writer, &line).await?;
    }
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, line: &str) -> Result<()> {
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

fn is_response(line: &str) -> bool {
    serde_json::from_str::<Value>(line)
        .is_ok_and(|v| v.get("id").is_some() && v.get("method").is_none())
}
