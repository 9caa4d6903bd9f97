// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use moneyboard::api::{ApiError, HttpApi, TransactionsApi};
use moneyboard::models::{NewTransaction, TransactionKind};
use moneyboard::utils::http_client;
use rust_decimal::Decimal;

/// Answers a single request with `status` and `body`, returning the raw
/// request text from the join handle.
fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .find_map(|l| {
                        let (k, v) = l.split_once(':')?;
                        if k.eq_ignore_ascii_case("content-length") {
                            v.trim().parse::<usize>().ok()
                        } else {
                            None
                        }
                    })
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&buf).to_string()
    });
    (format!("http://{}", addr), handle)
}

fn api(base: &str) -> HttpApi {
    HttpApi::new(http_client().unwrap(), base).unwrap()
}

#[test]
fn list_decodes_transactions_and_balance() {
    let body = r#"{"transactions":[{"id":"a1","title":"Salary","value":3000,"type":"income","category":{"title":"Work"},"created_at":"2023-01-05T00:00:00.000Z"}],"balance":{"income":3000,"outcome":0,"total":3000}}"#;
    let (base, server) = serve_once("200 OK", body);

    let resp = api(&base).list().unwrap();
    assert_eq!(resp.transactions.len(), 1);
    assert_eq!(resp.transactions[0].id, "a1");
    assert_eq!(resp.balance.total, Decimal::new(3000, 0));

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /transactions HTTP/1.1"));
}

#[test]
fn delete_targets_the_id_path() {
    let (base, server) = serve_once("204 No Content", "");
    api(&base).delete("abc").unwrap();
    let request = server.join().unwrap();
    assert!(request.starts_with("DELETE /transactions/abc HTTP/1.1"));
}

#[test]
fn base_path_prefix_is_kept() {
    let (base, server) = serve_once("204 No Content", "");
    api(&format!("{}/api", base)).delete("abc").unwrap();
    let request = server.join().unwrap();
    assert!(request.starts_with("DELETE /api/transactions/abc HTTP/1.1"));
}

#[test]
fn create_posts_wire_shape() {
    let (base, server) = serve_once("200 OK", "{}");
    api(&base)
        .create(&NewTransaction {
            title: "Rent".into(),
            value: Decimal::new(1200, 0),
            kind: TransactionKind::Outcome,
            category: "Home".into(),
        })
        .unwrap();

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /transactions HTTP/1.1"));
    let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
    let v: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(v["title"], "Rent");
    assert_eq!(v["type"], "outcome");
    assert_eq!(v["category"], "Home");
}

#[test]
fn error_status_is_reported() {
    let (base, server) = serve_once("404 Not Found", r#"{"error":"not found"}"#);
    let err = api(&base).delete("missing").unwrap_err();
    server.join().unwrap();
    match err {
        ApiError::Status { method, status, .. } => {
            assert_eq!(method, "DELETE");
            assert_eq!(status.as_u16(), 404);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_body_is_a_decode_error() {
    let (base, server) = serve_once("200 OK", r#"{"transactions":"nope"}"#);
    let err = api(&base).list().unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let err = api(&format!("http://{}", addr)).list().unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }));
}

#[test]
fn empty_id_is_refused_locally() {
    let err = api("http://127.0.0.1:9").delete("  ").unwrap_err();
    assert!(matches!(err, ApiError::EmptyId));
}

#[test]
fn non_base_url_is_rejected() {
    assert!(HttpApi::new(http_client().unwrap(), "mailto:someone@example.com").is_err());
    assert!(HttpApi::new(http_client().unwrap(), "not a url").is_err());
}
