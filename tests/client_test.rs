//! Chat-completions client against a one-shot loopback server.

use churn_dashboard::{
    config::NarrativeConfig,
    error::NarrativeError,
    narrative::{ChatCompletionClient, NarrativeKind, NarrativeRequest, TextGenerator},
};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

/// Accepts one connection, answers with `status` and `body`, returns the raw request.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/openai/v1", listener.local_addr().unwrap());
    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&raw).to_string();
            if let Some(head_end) = text.find("\r\n\r\n") {
                let len = text[..head_end]
                    .lines()
                    .find_map(|l| {
                        let (k, v) = l.split_once(':')?;
                        k.eq_ignore_ascii_case("content-length")
                            .then(|| v.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if raw.len() >= head_end + 4 + len {
                    break;
                }
            }
        }
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&raw).to_string()
    });
    (base_url, handle)
}

fn config(base_url: String) -> NarrativeConfig {
    NarrativeConfig {
        base_url,
        timeout_secs: 5,
        connect_timeout_secs: 2,
        ..NarrativeConfig::default()
    }
}

fn request() -> NarrativeRequest {
    NarrativeRequest {
        kind: NarrativeKind::Explanation,
        model: "llama-3.2-3b-preview".into(),
        prompt: "Explain the churn risk.".into(),
        framing: None,
    }
}

#[test]
fn posts_prompt_and_returns_content() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"Short tenure and one product."}}]}"#,
    );
    let client = ChatCompletionClient::new(&config(base_url), "test-key").unwrap();
    assert!(client.url().ends_with("/openai/v1/chat/completions"));

    let text = client.complete(&request()).unwrap();
    assert_eq!(text, "Short tenure and one product.");

    let raw = server.join().unwrap();
    let lower = raw.to_ascii_lowercase();
    assert!(lower.starts_with("post /openai/v1/chat/completions"));
    assert!(lower.contains("authorization: bearer test-key"));
    let body = &raw[raw.find("\r\n\r\n").unwrap() + 4..];
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["model"], "llama-3.2-3b-preview");
    assert_eq!(json["messages"][0]["role"], "user");
    assert_eq!(json["messages"][0]["content"], "Explain the churn risk.");
    assert!(json.get("stream").is_none());
}

#[test]
fn error_status_is_surfaced() {
    let (base_url, server) = serve_once("401 Unauthorized", r#"{"error":"invalid api key"}"#);
    let client = ChatCompletionClient::new(&config(base_url), "bad-key").unwrap();
    let err = client.complete(&request()).unwrap_err();
    match err {
        NarrativeError::Status { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid api key"));
        }
        other => panic!("unexpected error: {other}"),
    }
    server.join().unwrap();
}

#[test]
fn malformed_body_is_surfaced() {
    let (base_url, server) = serve_once("200 OK", r#"{"result":"ok"}"#);
    let client = ChatCompletionClient::new(&config(base_url), "k").unwrap();
    let err = client.complete(&request()).unwrap_err();
    assert!(matches!(err, NarrativeError::MalformedResponse { .. }));
    server.join().unwrap();
}

#[test]
fn connection_failure_is_transport_error() {
    let port = {
        let l = TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };
    let client =
        ChatCompletionClient::new(&config(format!("http://127.0.0.1:{port}/v1")), "k").unwrap();
    let err = client.complete(&request()).unwrap_err();
    assert!(matches!(err, NarrativeError::Transport { .. }));
}

#[test]
fn missing_api_key_is_reported() {
    let cfg = NarrativeConfig {
        api_key_env: "CHURN_DASHBOARD_TEST_UNSET_KEY".into(),
        ..NarrativeConfig::default()
    };
    match ChatCompletionClient::from_env(&cfg) {
        Err(NarrativeError::MissingApiKey { env_var }) => {
            assert_eq!(env_var, "CHURN_DASHBOARD_TEST_UNSET_KEY")
        }
        _ => panic!("expected MissingApiKey"),
    }
}
