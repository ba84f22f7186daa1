use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_works() {
    // arrange
    let app = spawn_app().await;

    for path in ["/api/health", "/"] {
        // act
        let response = app.get_path(path).await;

        // assert
        assert_eq!(200, response.status().as_u16(), "{} did not return 200", path);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["message"], "Server is running");
    }
}

#[tokio::test]
async fn unknown_routes_return_a_json_404() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app.get_path("/api/nope").await;

    // assert
    assert_eq!(404, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["message"].is_string());
}
