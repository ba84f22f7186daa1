use crate::helpers::{spawn_app, valid_submission};

const ORIGIN: &str = "https://portfolio.example";

fn header(response: &reqwest::Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[tokio::test]
async fn preflight_requests_are_answered() {
    // arrange
    let app = spawn_app().await;

    for path in ["/api/submissions", "/api/submissions/some-id"] {
        // act
        let response = app.preflight(path, ORIGIN).await;

        // assert
        assert_eq!(204, response.status().as_u16(), "preflight for {}", path);
        assert_eq!(
            header(&response, "Access-Control-Allow-Origin").as_deref(),
            Some("*")
        );
        let methods = header(&response, "Access-Control-Allow-Methods").unwrap();
        assert!(methods.contains("POST"), "{}", methods);
        assert!(methods.contains("DELETE"), "{}", methods);
        assert_eq!(
            header(&response, "Access-Control-Allow-Headers").as_deref(),
            Some("content-type")
        );
    }
}

#[tokio::test]
async fn cross_origin_responses_carry_the_allow_origin_header() {
    // arrange
    let app = spawn_app().await;

    // act
    let health = app.get_with_origin("/api/health", ORIGIN).await;
    let missing = app.get_with_origin("/api/submissions/not-a-valid-id", ORIGIN).await;

    // assert
    assert_eq!(200, health.status().as_u16());
    assert_eq!(header(&health, "Access-Control-Allow-Origin").as_deref(), Some("*"));
    assert_eq!(404, missing.status().as_u16());
    assert_eq!(header(&missing, "Access-Control-Allow-Origin").as_deref(), Some("*"));
}

#[tokio::test]
async fn same_origin_requests_get_no_cors_headers() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app.post_submission(&valid_submission()).await;

    // assert
    assert_eq!(201, response.status().as_u16());
    assert_eq!(header(&response, "Access-Control-Allow-Origin"), None);
}
