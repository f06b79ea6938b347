//! Plain JSON-RPC HTTP shim over the tool registry, for callers that do not
//! speak the streamable MCP transport. Mounted at `/v1/rpc`.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::{json, Value as J};

use crate::core::mcp::{RpcReq, RpcResp};
use crate::core::tool::ToolError;
use crate::infra::http::json as http_json;
use crate::tools::registry::ToolRegistry;

fn tools_list(reg: &ToolRegistry) -> J {
    let tools: Vec<J> = reg
        .list()
        .into_iter()
        .map(|t| {
            json!({ "name": t.name, "description": t.description, "inputSchema": t.input_schema })
        })
        .collect();
    json!({ "tools": tools })
}

async fn call_tool(reg: &ToolRegistry, params: &J) -> Result<J, ToolError> {
    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ToolError::InvalidArguments("missing tool name".into()))?;
    let args = params.get("arguments").cloned().unwrap_or(J::Null);
    reg.call(name, &args).await
}

pub async fn http(
    axum::extract::State(reg): axum::extract::State<ToolRegistry>,
    payload: Result<Json<RpcReq>, JsonRejection>,
) -> Json<RpcResp> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "rejecting malformed rpc body");
            return http_json::parse_error(format!("parse error: {rejection}"));
        }
    };
    tracing::debug!(method = %req.method, id = ?req.id, "rpc shim invoked");
    let id = req.id.clone();
    match req.method.as_str() {
        "initialize" => http_json::ok(
            id,
            json!({ "serverInfo": { "name": "product-mcp", "version": env!("CARGO_PKG_VERSION") }, "capabilities": {} }),
        ),
        "shutdown" => http_json::ok(id, J::Null),
        "tools.list" | "tools/list" => http_json::ok(id, tools_list(&reg)),
        "tools.call" | "tools/call" => match call_tool(&reg, &req.params).await {
            Ok(out) => http_json::ok(id, out),
            Err(e) => {
                tracing::warn!(error = %e, "tools.call failed");
                http_json::error(id, -32000, e.to_string())
            }
        },
        _ => http_json::error(id, -32601, format!("unknown method: {}", req.method)),
    }
}
