use std::sync::Arc;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::server::protocol::{
    CallToolParams, CallToolResult, InitializeParams, InitializeResult, JsonRpcError,
    JsonRpcRequest, JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo,
    ToolsCapability,
};
use crate::tools::{PatentTools, ToolError};
use crate::utils::constants::{DEFAULT_PROTOCOL_VERSION, SERVER_NAME};

/// MCP server answering line-delimited JSON-RPC.
#[derive(Debug, Clone)]
pub struct McpServer {
    tools: PatentTools,
}

impl McpServer {
    pub fn new(tools: PatentTools) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &PatentTools {
        &self.tools
    }

    /// Serve stdin/stdout until stdin closes.
    pub async fn run_stdio(self) -> Result<()> {
        let reader = BufReader::new(tokio::io::stdin());
        Arc::new(self).serve(reader, tokio::io::stdout()).await
    }

    /// Read requests from `reader` and write responses to `writer`.
    ///
    /// Every request runs on its own task so slow OPS calls do not block the
    /// rest. A single writer task owns `writer`, which keeps lines whole.
    pub async fn serve<R, W>(self: Arc<Self>, mut reader: R, writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel::<String>();
        let writer_task = tokio::spawn(write_lines(writer, rx));

        let mut in_flight = JoinSet::new();
        let mut buf = Vec::new();
        loop {
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let line = match String::from_utf8(std::mem::take(&mut buf)) {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "message is not valid UTF-8");
                    let response = JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error());
                    send_response(&tx, &response);
                    continue;
                }
            };

            let server = self.clone();
            let tx = tx.clone();
            in_flight.spawn(async move {
                if let Some(response) = server.handle_line(&line).await {
                    send_response(&tx, &response);
                }
            });
        }

        info!("input closed, waiting for {} in-flight requests", in_flight.len());
        while in_flight.join_next().await.is_some() {}
        drop(tx);

        writer_task.await??;
        Ok(())
    }

    /// Handle one raw input line. `None` when nothing must be written back.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let raw: Value = match serde_json::from_str(line) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "unparseable message");
                return Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
            }
        };

        let id = raw.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(raw) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                warn!(error = %e, "invalid request");
                Some(JsonRpcResponse::error(id.unwrap_or(Value::Null), JsonRpcError::invalid_request()))
            }
        }
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id.clone() else {
            debug!(method = %request.method, "notification");
            return None;
        };

        let outcome = match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(Value::Object(Default::default())),
            "tools/list" => to_result(&ListToolsResult { tools: self.tools.list_schemas() }),
            "tools/call" => self.call_tool(request.params).await,
            method => Err(JsonRpcError::method_not_found(method)),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: InitializeParams = params
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| JsonRpcError::invalid_params(e.to_string()))?
            .unwrap_or_default();

        if let Some(client) = &params.client_info {
            info!(client = %client.name, version = %client.version, "client connected");
        }

        to_result(&InitializeResult {
            protocol_version: params
                .protocol_version
                .unwrap_or_else(|| DEFAULT_PROTOCOL_VERSION.to_owned()),
            capabilities: ServerCapabilities {
                tools: ToolsCapability { list_changed: false },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_owned(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
            },
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("tools/call requires params"))
            .and_then(|p| {
                serde_json::from_value(p).map_err(|e| JsonRpcError::invalid_params(e.to_string()))
            })?;

        let result = match self.tools.call(&params.name, params.arguments).await {
            Ok(document) => {
                let text = serde_json::to_string(&document)
                    .map_err(|e| JsonRpcError::internal_error(e.to_string()))?;
                CallToolResult::text(text)
            }
            Err(ToolError::Ops(e)) => CallToolResult::error(e.to_string()),
            Err(e @ (ToolError::UnknownTool(_) | ToolError::InvalidArguments { .. })) => {
                return Err(JsonRpcError::invalid_params(e.to_string()));
            }
        };
        to_result(&result)
    }
}

fn send_response(tx: &mpsc::UnboundedSender<String>, response: &JsonRpcResponse) {
    match serde_json::to_string(response) {
        Ok(encoded) => {
            let _ = tx.send(encoded);
        }
        Err(e) => error!(error = %e, "cannot encode response"),
    }
}

fn to_result<T: Serialize>(value: &T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}

async fn write_lines<W>(mut writer: W, mut rx: mpsc::UnboundedReceiver<String>) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(line) = rx.recv().await {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }
    Ok(())
}
