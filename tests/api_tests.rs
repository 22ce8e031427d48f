use axum_test::TestServer;

use movie_rec_api::api::{create_router, AppState};
use movie_rec_api::models::{Catalog, MovieRecord};
use movie_rec_api::services::Recommender;

fn movie(json: &str) -> MovieRecord {
    serde_json::from_str(json).unwrap()
}

fn create_test_server() -> TestServer {
    let movies = vec![
        movie(r#"{"title": "Inception", "overview": "Dreams within dreams", "genres": "Action, Sci-Fi", "poster_path": "/in.jpg", "vote_average": 8.4, "release_date": "2010-07-16"}"#),
        movie(r#"{"title": "Interstellar", "vote_average": "8.6", "release_date": "2014-11-05"}"#),
        movie(r#"{"title": "Tenet", "poster_path": "/t", "vote_average": 7.3}"#),
    ];
    let similarity = vec![
        vec![1.0, 0.8, 0.3],
        vec![0.8, 1.0, 0.5],
        vec![0.3, 0.5, 1.0],
    ];
    let catalog = Catalog::new(movies, similarity).unwrap();
    let state = AppState::new(Recommender::new(catalog));
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_root_greeting() {
    let server = create_test_server();
    let response = server.get("/").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("live"));
}

#[tokio::test]
async fn test_recommend_returns_ranked_results() {
    let server = create_test_server();

    let response = server
        .get("/api/movies/recommend")
        .add_query_param("title", "inception")
        .add_query_param("count", 2)
        .await;
    response.assert_status_ok();

    let recs: Vec<serde_json::Value> = response.json();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0]["title"], "Interstellar");
    assert_eq!(recs[0]["similarity_score"], 0.8);
    assert_eq!(recs[0]["rating"], 8.6);
    assert_eq!(recs[1]["title"], "Tenet");
    assert_eq!(recs[1]["similarity_score"], 0.3);
}

#[tokio::test]
async fn test_recommend_shapes_poster_urls() {
    let server = create_test_server();

    let response = server
        .get("/api/movies/recommend")
        .add_query_param("title", "tenet")
        .await;
    response.assert_status_ok();

    let recs: Vec<serde_json::Value> = response.json();
    // Interstellar (no poster) then Inception (qualified poster URL)
    assert!(recs[0]["poster_path"].is_null());
    assert_eq!(
        recs[1]["poster_path"],
        "https://image.tmdb.org/t/p/w500/in.jpg"
    );
}

#[tokio::test]
async fn test_recommend_unknown_title_is_empty_ok() {
    let server = create_test_server();

    let response = server
        .get("/api/movies/recommend")
        .add_query_param("title", "Nonexistent Movie")
        .add_query_param("count", 5)
        .await;
    response.assert_status_ok();

    let recs: Vec<serde_json::Value> = response.json();
    assert!(recs.is_empty());
}

#[tokio::test]
async fn test_recommend_without_title_is_empty_ok() {
    let server = create_test_server();

    let response = server.get("/api/movies/recommend").await;
    response.assert_status_ok();

    let recs: Vec<serde_json::Value> = response.json();
    assert!(recs.is_empty());
}

#[tokio::test]
async fn test_recommend_default_count_clamps_to_catalog() {
    let server = create_test_server();

    // Default count is 10 but only 2 candidates exist
    let response = server
        .get("/api/movies/recommend")
        .add_query_param("title", "Inception")
        .await;
    response.assert_status_ok();

    let recs: Vec<serde_json::Value> = response.json();
    assert_eq!(recs.len(), 2);
    assert!(recs.iter().all(|r| r["title"] != "Inception"));
}

#[tokio::test]
async fn test_list_titles_in_load_order() {
    let server = create_test_server();

    let response = server.get("/api/movies/titles").await;
    response.assert_status_ok();

    let titles: Vec<String> = response.json();
    assert_eq!(titles, vec!["Inception", "Interstellar", "Tenet"]);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = create_test_server();

    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}
