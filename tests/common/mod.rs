//! Shared utilities for integration tests: an in-process JSON-RPC node.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Anvil's first dev account
pub const TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// A running mock node
pub struct MockNode {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl MockNode {
    /// Every JSON-RPC request received so far, in order
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests for one method
    pub fn requests_for(&self, method: &str) -> Vec<Value> {
        self.requests()
            .into_iter()
            .filter(|r| r.get("method").and_then(Value::as_str) == Some(method))
            .collect()
    }
}

type Handler = dyn Fn(&str, &Value) -> Result<Value, String> + Send + Sync;

/// Start a mock node answering each request with `handler(method, params)`
///
/// `Err(message)` becomes a JSON-RPC error object with code -32000.
pub async fn start_mock_node<F>(handler: F) -> MockNode
where
    F: Fn(&str, &Value) -> Result<Value, String> + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let handler: Arc<Handler> = Arc::new(handler);

    let log = requests.clone();
    tokio::spawn(async move {
        loop {
            let Ok((socket, _)) = listener.accept().await else {
                break;
            };
            let handler = handler.clone();
            let log = log.clone();
            tokio::spawn(async move {
                let _ = serve_connection(socket, handler, log).await;
            });
        }
    });

    MockNode {
        url: format!("http://{addr}"),
        requests,
    }
}

async fn serve_connection(
    mut socket: TcpStream,
    handler: Arc<Handler>,
    log: Arc<Mutex<Vec<Value>>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body: Value = serde_json::from_slice(&buf[header_end..]).unwrap_or(Value::Null);
    let response = match body {
        Value::Array(batch) => Value::Array(
            batch
                .iter()
                .map(|req| answer(req, handler.as_ref(), &log))
                .collect(),
        ),
        single => answer(&single, handler.as_ref(), &log),
    };

    let payload = response.to_string();
    let http = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        payload.len(),
        payload
    );
    socket.write_all(http.as_bytes()).await?;
    socket.shutdown().await
}

fn answer(request: &Value, handler: &Handler, log: &Mutex<Vec<Value>>) -> Value {
    log.lock().unwrap().push(request.clone());

    let id = request.get("id").cloned().unwrap_or(Value::Null);
    let method = request.get("method").and_then(Value::as_str).unwrap_or("");
    let params = request.get("params").cloned().unwrap_or(Value::Null);

    match handler(method, &params) {
        Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
        Err(message) => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32000, "message": message }
        }),
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Hex-encode bytes the way nodes return `data` fields
pub fn hex_data(bytes: &[u8]) -> Value {
    Value::String(format!("0x{}", hex::encode(bytes)))
}

/// A uint256 return word
pub fn uint_word(value: u128) -> Value {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    hex_data(&word)
}

/// Handler for a node with Anvil-like defaults and a fixed `eth_call` result
pub fn anvil_like(call_result: Value) -> impl Fn(&str, &Value) -> Result<Value, String> {
    move |method: &str, params: &Value| match method {
        "eth_chainId" => Ok(json!("0x7a69")),
        "net_version" => Ok(json!("31337")),
        "eth_gasPrice" => Ok(json!("0x3b9aca00")),
        "eth_getTransactionCount" => Ok(json!("0x5")),
        "eth_call" => Ok(call_result.clone()),
        "eth_sendRawTransaction" => {
            let raw = params
                .get(0)
                .and_then(Value::as_str)
                .ok_or("missing raw transaction")?;
            let bytes = hex::decode(raw.trim_start_matches("0x")).map_err(|e| e.to_string())?;
            Ok(hex_data(alloy::primitives::keccak256(&bytes).as_slice()))
        }
        other => Err(format!("method {other} not supported")),
    }
}
