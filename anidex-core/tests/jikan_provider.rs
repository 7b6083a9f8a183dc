use std::collections::HashMap;
use std::time::Duration;

use anidex_core::{
    BrowseSession, CatalogProvider, ClientConfig, JikanProvider, PageLoad,
    ProviderError, SearchOutcome, SortField, SortOrder,
};
use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};

fn listing(page: u32, has_next_page: bool) -> Value {
    json!({
        "pagination": {
            "last_visible_page": 3,
            "has_next_page": has_next_page,
            "current_page": page,
            "items": { "count": 3, "total": 75, "per_page": 25 }
        },
        "data": [
            {
                "mal_id": 5114,
                "title": "Fullmetal Alchemist: Brotherhood",
                "year": 2009,
                "score": 9.1,
                "images": {
                    "jpg": { "image_url": "https://cdn.example/94745.jpg" }
                }
            },
            {
                "mal_id": 9253,
                "title": "Steins;Gate",
                "year": null,
                "score": 9.07
            },
            {
                "mal_id": 28977,
                "title": "Gintama°",
                "year": 2015,
                "score": null
            }
        ]
    })
}

async fn top_anime(
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let page: u32 = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);

    match page {
        // Jikan caps listings; anything past the end is a 404 with a message
        99 => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "status": 404,
                "type": "BadResponseException",
                "message": "Resource does not exist"
            })),
        )
            .into_response(),
        42 => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "status": 429,
                "type": "RateLimitException",
                "message": "You are being rate limited"
            })),
        )
            .into_response(),
        7 => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": 500,
                "type": "UpstreamException",
                "message": "MyAnimeList is down"
            })),
        )
            .into_response(),
        8 => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => Json(listing(page, page < 3)).into_response(),
    }
}

async fn search_anime(
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query = params.get("q").cloned().unwrap_or_default();
    let limit = params.get("limit").cloned().unwrap_or_default();

    Json(json!({
        "pagination": { "has_next_page": false, "current_page": 1 },
        "data": [
            {
                "mal_id": 1,
                "title": format!("{query} (limit {limit})"),
                "year": 1998,
                "score": 8.75
            }
        ]
    }))
    .into_response()
}

async fn spawn_jikan() -> String {
    let app = Router::new()
        .route("/v4/top/anime", get(top_anime))
        .route("/v4/anime", get(search_anime));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/v4")
}

async fn provider() -> JikanProvider {
    let config = ClientConfig::default()
        .with_api_base(spawn_jikan().await)
        .with_page_limit(10)
        .with_timeout(Duration::from_secs(5));
    JikanProvider::new(&config).unwrap()
}

#[tokio::test]
async fn fetches_top_listing() {
    let provider = provider().await;

    let page = provider.top_anime(2).await.unwrap();

    assert_eq!(page.len(), 3);
    assert_eq!(page.page_info.current_page, 2);
    assert!(page.page_info.has_next_page);
    assert_eq!(page.page_info.last_visible_page, Some(3));
    assert_eq!(page.items[0].title, "Fullmetal Alchemist: Brotherhood");
    assert_eq!(page.items[1].year, None);
    assert_eq!(page.items[2].score, None);
    assert!(page.items[0].poster_url().is_some());
}

#[tokio::test]
async fn page_zero_is_clamped_to_first_page() {
    let provider = provider().await;

    let page = provider.top_anime(0).await.unwrap();

    assert_eq!(page.page_info.current_page, 1);
}

#[tokio::test]
async fn search_sends_query_and_limit() {
    let provider = provider().await;

    let page = provider.search_anime("cowboy bebop", 1).await.unwrap();

    assert_eq!(page.items[0].title, "cowboy bebop (limit 10)");
    assert!(!page.page_info.has_next_page);
}

#[tokio::test]
async fn maps_error_statuses() {
    let provider = provider().await;

    assert!(matches!(
        provider.top_anime(99).await,
        Err(ProviderError::NotFound)
    ));
    assert!(matches!(
        provider.top_anime(42).await,
        Err(ProviderError::RateLimited)
    ));
    match provider.top_anime(7).await {
        Err(ProviderError::ApiError(message)) => {
            assert_eq!(message, "MyAnimeList is down")
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
    assert!(matches!(
        provider.top_anime(8).await,
        Err(ProviderError::ParseError(_))
    ));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config =
        ClientConfig::default().with_api_base(format!("http://{addr}/v4"));
    let provider = JikanProvider::new(&config).unwrap();

    assert!(matches!(
        provider.top_anime(1).await,
        Err(ProviderError::NetworkError(_))
    ));
}

#[tokio::test]
async fn session_browses_against_live_provider() {
    let provider = provider().await;
    let mut session = BrowseSession::new();

    assert_eq!(
        session.load_page(&provider, 1).await.unwrap(),
        PageLoad::Fetched(3)
    );
    assert_eq!(session.next_page(), Some(2));

    session.sort_by(SortField::Year, SortOrder::Ascending);
    let ids: Vec<u32> = session
        .displayed()
        .iter()
        .map(|item| item.mal_id.value())
        .collect();
    assert_eq!(ids, vec![5114, 28977, 9253]);

    let outcome = session.search(&provider, "steins").await;
    assert_eq!(outcome, SearchOutcome::Local { matches: 1 });

    let outcome = session.search(&provider, "bebop").await;
    assert_eq!(outcome, SearchOutcome::Remote { results: 1 });

    assert_eq!(
        session.load_page(&provider, 42).await.unwrap(),
        PageLoad::Unavailable
    );
    assert!(session.displayed().is_empty());
    assert_eq!(session.current_page(), 1);
}
