use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use webkit_utils::adapters::server::{router, MAX_DUMP_BODY};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(body_json(resp).await, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn test_phone_endpoint_formats_number() {
    let req = Request::builder()
        .uri("/phone?number=555.123.4567")
        .body(Body::empty())
        .unwrap();
    let resp = router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["input"], "555.123.4567");
    assert_eq!(body["formatted"], "(555) 123-4567");
}

#[tokio::test]
async fn test_phone_endpoint_rejects_wrong_digit_count() {
    let req = Request::builder()
        .uri("/phone?number=555123456")
        .body(Body::empty())
        .unwrap();
    let resp = router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["digit_count"], 9);
    assert_eq!(body["input"], "555123456");
}

#[tokio::test]
async fn test_phone_endpoint_missing_param() {
    let req = Request::builder()
        .uri("/phone")
        .body(Body::empty())
        .unwrap();
    let resp = router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(resp).await["digit_count"], 0);
}

#[tokio::test]
async fn test_dump_endpoint_echoes_request() {
    let req = Request::builder()
        .method("POST")
        .uri("/dump?trace=1")
        .header("host", "localhost:4567")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"hello":"world"}"#))
        .unwrap();
    let resp = router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(
        text,
        "POST /dump?trace=1 HTTP/1.1\r\n\
         Host: localhost:4567\r\n\
         Content-Type: application/json\r\n\
         \r\n\
         {\"hello\":\"world\"}"
    );
}

#[tokio::test]
async fn test_dump_endpoint_rejects_oversized_body() {
    let req = Request::builder()
        .method("POST")
        .uri("/dump")
        .body(Body::from(vec![b'a'; MAX_DUMP_BODY + 1]))
        .unwrap();
    let resp = router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_dump_endpoint_accepts_body_at_limit() {
    let req = Request::builder()
        .method("POST")
        .uri("/dump")
        .body(Body::from(vec![b'a'; MAX_DUMP_BODY]))
        .unwrap();
    let resp = router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_dump_endpoint_broken_body_is_bad_request() {
    // 模擬中途斷線的 body
    let chunks: Vec<Result<axum::body::Bytes, std::io::Error>> = vec![
        Ok(axum::body::Bytes::from_static(b"{\"partial\":")),
        Err(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "client went away",
        )),
    ];
    let req = Request::builder()
        .method("POST")
        .uri("/dump")
        .body(Body::from_stream(tokio_stream::iter(chunks)))
        .unwrap();
    let resp = router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
