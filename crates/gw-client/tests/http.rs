//! Client behaviour against a throwaway local HTTP responder.

use std::time::Duration;

use gw_client::{ClientConfig, ClientError, GraphKind, PathQuery, ServiceClient};
use gw_graph::{Graph, parse_edge_lines};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Answer exactly one request with `status` and `body`; yields the raw request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let request = read_request(&mut sock).await;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        sock.write_all(response.as_bytes()).await.unwrap();
        sock.shutdown().await.unwrap();
        request
    });
    (base, handle)
}

async fn read_request(sock: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = sock.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(head_end) = text.find("\r\n\r\n") {
            let content_length = text[..head_end]
                .lines()
                .find_map(|l| {
                    let (k, v) = l.split_once(':')?;
                    k.eq_ignore_ascii_case("content-length")
                        .then(|| v.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn client(base: &str) -> ServiceClient {
    ServiceClient::new(ClientConfig::new(base)).unwrap()
}

fn square() -> Graph {
    Graph::from_records(&parse_edge_lines("A B\nB C\nC D\nA D 9").unwrap()).unwrap()
}

#[tokio::test]
async fn shortest_path_round_trip() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"exists": true, "path": ["A","D","C"], "length": 2, "edges": [["A","D"],["D","C"]]}"#,
    )
    .await;

    let query = PathQuery::from_graph(&square(), "A", "C");
    let path = client(&base).shortest_path(&query).await.unwrap();
    assert_eq!(path.path, ["A", "D", "C"]);
    assert_eq!(path.length, 2);
    assert_eq!(path.length, path.edges.len());

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /shortest_path"));
    let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
    let sent: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(sent["start"], "A");
    assert_eq!(sent["end"], "C");
    assert_eq!(sent["edges"][3], serde_json::json!(["A", "D"]));
}

#[tokio::test]
async fn no_path_response_is_structured_error() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"exists": false, "path": [], "length": -1, "edges": [], "error": "No path exists between A and Z"}"#,
    )
    .await;
    let query = PathQuery::new(vec![["A".into(), "B".into()]], "A", "Z");
    let err = client(&base).shortest_path(&query).await.unwrap_err();
    assert!(matches!(err, ClientError::NoPath(_)));
    assert_eq!(err.to_string(), "No path exists between A and Z");
    server.await.unwrap();
}

#[tokio::test]
async fn bad_request_surfaces_service_message() {
    let (base, server) =
        serve_once("400 Bad Request", r#"{"error": "Start or end node not found in graph"}"#).await;
    let query = PathQuery::new(vec![["A".into(), "B".into()]], "A", "Q");
    let err = client(&base).shortest_path(&query).await.unwrap_err();
    assert_eq!(err.to_string(), "Start or end node not found in graph");
    server.await.unwrap();
}

#[tokio::test]
async fn validation_never_touches_the_network() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let query = PathQuery::from_graph(&square(), "B", "B");
    let err = client(&base).shortest_path(&query).await.unwrap_err();
    assert!(err.is_local());

    let accepted = tokio::time::timeout(Duration::from_millis(100), listener.accept()).await;
    assert!(accepted.is_err(), "a connection was made for an invalid query");
}

#[tokio::test]
async fn unreachable_service_is_http_error() {
    // Bind then drop to get a port nothing listens on.
    let addr = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();
    let query = PathQuery::from_graph(&square(), "A", "C");
    let err = client(&format!("http://{addr}")).shortest_path(&query).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}

#[tokio::test]
async fn classify_round_trip() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"success": true, "classification": {"type": "Cycle", "confidence": 0.8}}"#,
    )
    .await;
    let c = client(&base).classify(&square()).await.unwrap();
    assert_eq!(c.kind, GraphKind::Cycle);
    assert_eq!(c.confidence, Some(0.8));

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /classify"));
    assert!(request.contains(r#"["A","D","9"]"#));
    assert!(request.contains(r#"["A","B",null]"#));
}

#[tokio::test]
async fn health_reports_status() {
    let (base, server) = serve_once("200 OK", r#"{"status": "healthy"}"#).await;
    assert!(client(&base).health().await.unwrap());
    assert!(server.await.unwrap().starts_with("GET /health"));
}
