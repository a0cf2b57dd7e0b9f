// HTTP execution client against a mock server

use mockito::Matcher;
use runbox::runner::{ExecutionApi, JudgeClient, RunRequest, SubmissionFailure};
use serde_json::json;
use std::time::Duration;

fn client(url: String) -> JudgeClient {
    JudgeClient::new(url, Duration::from_secs(5))
}

#[tokio::test]
async fn test_posts_json_and_parses_result() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/run")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "source_code": "print(input())",
            "language_id": 71,
            "stdin": "hi"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"stdout":"hi\n","stderr":null,"compile_output":null,
                "status":{"id":3,"description":"Accepted"},"time":"0.021","memory":7712}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let api = client(format!("{}/run", server.url()));
    let result = api
        .execute(&RunRequest::new("print(input())", 71, "hi"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.display_output(), Some("hi\n"));
    assert_eq!(result.status_description(), Some("Accepted"));
    assert_eq!(result.time.as_deref(), Some("0.021"));
    assert_eq!(result.memory.as_deref(), Some("7712"));
}

#[tokio::test]
async fn test_server_error_is_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(500)
        .with_body(r#"{"stdout":"should be ignored"}"#)
        .create_async()
        .await;

    let api = client(server.url());
    let err = api
        .execute(&RunRequest::new("", 71, ""))
        .await
        .unwrap_err();

    assert_eq!(err, SubmissionFailure::HttpStatus { status: 500 });
}

#[tokio::test]
async fn test_non_json_body_is_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let api = client(server.url());
    let err = api
        .execute(&RunRequest::new("", 71, ""))
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionFailure::MalformedResponse(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_failure() {
    // Port 1 is reserved and refuses connections
    let api = JudgeClient::new("http://127.0.0.1:1/run", Duration::from_secs(2));
    let err = api
        .execute(&RunRequest::new("", 71, ""))
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionFailure::Transport(_)));
    assert!(!err.to_string().is_empty());
}
