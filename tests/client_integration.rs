//! End-to-end tests of the public client API against a wiremock server.
//!
//! These cover the multi-request flows: cursor and offset pagination and
//! exact-match search on top of the search endpoints.

use serde_json::{Value, json};
use twitch_kraken::{Error, KrakenClient};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ────────────────────────────────────────────────────────────────

fn test_client(server: &MockServer) -> KrakenClient {
    KrakenClient::with_base_url("integration-client", &server.uri())
        .expect("failed to create test client")
}

fn user(id: u64, name: &str) -> Value {
    json!({
        "_id": id.to_string(),
        "name": name,
        "display_name": name,
        "type": "user",
        "bio": null,
        "logo": null,
        "created_at": "2016-01-01T00:00:00Z",
        "updated_at": "2017-01-01T00:00:00Z"
    })
}

fn channel(id: u64, name: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "display_name": name,
        "status": null,
        "game": "Factorio",
        "created_at": "2014-01-05T22:12:56Z",
        "updated_at": "2017-02-14T21:30:39Z",
        "partner": false,
        "views": 10,
        "followers": 2
    })
}

fn user_follow(id: u64, name: &str) -> Value {
    json!({
        "created_at": "2017-02-05T16:04:10Z",
        "notifications": false,
        "user": user(id, name)
    })
}

fn channel_follow(id: u64, name: &str) -> Value {
    json!({
        "created_at": "2017-02-05T16:04:10Z",
        "notifications": true,
        "channel": channel(id, name)
    })
}

// ── Cursor pagination ──────────────────────────────────────────────────────

#[tokio::test]
async fn all_channel_follows_follows_cursor_to_the_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels/42/follows"))
        .and(query_param("limit", "100"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 3,
            "_cursor": "page-2",
            "follows": [user_follow(1, "alder"), user_follow(2, "birch")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/channels/42/follows"))
        .and(query_param("cursor", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 3,
            "_cursor": "",
            "follows": [user_follow(3, "cedar")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let follows = client.all_channel_follows("42").await.unwrap();

    let names: Vec<&str> = follows
        .iter()
        .filter_map(|f| f.user.as_ref())
        .map(|u| u.name.as_str())
        .collect();
    assert_eq!(names, vec!["alder", "birch", "cedar"]);
}

#[tokio::test]
async fn channel_follows_pager_yields_pages_then_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels/42/follows"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 2,
            "_cursor": "next",
            "follows": [user_follow(1, "alder")]
        })))
        .mount(&server)
        .await;

    // The last page omits the cursor entirely.
    Mock::given(method("GET"))
        .and(path("/channels/42/follows"))
        .and(query_param("cursor", "next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 2,
            "follows": [user_follow(2, "birch")]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut pager = client.channel_follows_pager("42");

    assert_eq!(pager.next_page().await.unwrap().map(|p| p.len()), Some(1));
    assert!(!pager.is_done());
    assert_eq!(pager.next_page().await.unwrap().map(|p| p.len()), Some(1));
    assert!(pager.is_done());
    assert!(pager.next_page().await.unwrap().is_none());
}

#[tokio::test]
async fn pager_surfaces_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels/42/follows"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.all_channel_follows("42").await.unwrap_err();

    assert!(
        matches!(err, Error::Api { status: 500, ref message } if message == "boom"),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn channel_follows_pager_retries_failed_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels/42/follows"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 2,
            "_cursor": "page-2",
            "follows": [user_follow(1, "alder")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The second page fails once, then succeeds.
    Mock::given(method("GET"))
        .and(path("/channels/42/follows"))
        .and(query_param("cursor", "page-2"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/channels/42/follows"))
        .and(query_param("cursor", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 2,
            "_cursor": "",
            "follows": [user_follow(2, "birch")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut pager = client.channel_follows_pager("42");

    assert_eq!(pager.next_page().await.unwrap().map(|p| p.len()), Some(1));
    let err = pager.next_page().await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 502, .. }), "got: {err:?}");
    assert!(!pager.is_done());

    let retried = pager.next_page().await.unwrap().unwrap();
    assert_eq!(retried[0].user.as_ref().unwrap().name, "birch");
    assert!(pager.next_page().await.unwrap().is_none());
}

#[tokio::test]
async fn channel_follows_pager_stops_on_repeated_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels/42/follows"))
        .and(query_param("cursor", "same"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 9,
            "_cursor": "same",
            "follows": [user_follow(2, "birch")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/channels/42/follows"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 9,
            "_cursor": "same",
            "follows": [user_follow(1, "alder")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let follows = client.all_channel_follows("42").await.unwrap();

    assert_eq!(follows.len(), 2);
}

#[tokio::test]
async fn channel_follows_pager_stops_on_cursor_cycle() {
    let server = MockServer::start().await;

    let pages = [(None, "a"), (Some("a"), "b"), (Some("b"), "a")];
    for (i, (cursor, next)) in pages.into_iter().enumerate() {
        let mock = Mock::given(method("GET")).and(path("/channels/42/follows"));
        let mock = match cursor {
            Some(c) => mock.and(query_param("cursor", c)),
            None => mock.and(query_param_is_missing("cursor")),
        };
        mock.respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 100,
            "_cursor": next,
            "follows": [user_follow(i as u64, &format!("viewer{i}"))]
        })))
        .expect(1)
        .mount(&server)
        .await;
    }

    let client = test_client(&server);
    let mut pager = client.channel_follows_pager("42");
    let mut pages_seen = 0;
    while pager.next_page().await.unwrap().is_some() {
        pages_seen += 1;
        assert!(pages_seen <= 3, "pager kept following a cursor cycle");
    }

    assert_eq!(pages_seen, 3);
    assert!(pager.is_done());
}

// ── Offset pagination ──────────────────────────────────────────────────────

#[tokio::test]
async fn all_user_follows_walks_offsets_until_total() {
    let server = MockServer::start().await;

    let first: Vec<Value> = (0..25)
        .map(|i| channel_follow(1000 + i, &format!("chan{i}")))
        .collect();

    Mock::given(method("GET"))
        .and(path("/users/7/follows/channels"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "25"))
        .and(query_param("direction", "desc"))
        .and(query_param("sortby", "created_at"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 27,
            "follows": first
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/7/follows/channels"))
        .and(query_param("offset", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 27,
            "follows": [channel_follow(2000, "late1"), channel_follow(2001, "late2")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let follows = client.all_user_follows("7").await.unwrap();

    assert_eq!(follows.len(), 27);
    let last = follows.last().and_then(|f| f.channel.as_ref()).unwrap();
    assert_eq!(last.name, "late2");
    assert_eq!(last.id, "2001");
}

#[tokio::test]
async fn all_user_follows_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/7/follows/channels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 0,
            "follows": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let follows = client.all_user_follows("7").await.unwrap();

    assert!(follows.is_empty());
}

// ── Exact-match search ─────────────────────────────────────────────────────

#[tokio::test]
async fn search_exact_channel_picks_matching_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/channels"))
        .and(query_param("query", "cedar"))
        .and(header("Client-ID", "integration-client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 3,
            "channels": [channel(1, "cedar_fan"), channel(2, "cedar"), channel(3, "Cedar")]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let all = client.search_channels("cedar").await.unwrap();
    let exact = client.search_exact_channel("cedar").await.unwrap();

    assert_eq!(all.len(), 3);
    assert_eq!(exact.map(|c| c.id), Some("2".to_string()));
}

#[tokio::test]
async fn search_exact_user_without_match_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/users"))
        .and(query_param("query", "dogwood"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 1,
            "users": [user(9, "dogwood_tv")]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let exact = client.search_exact_user("dogwood").await.unwrap();

    assert!(exact.is_none());
}

#[tokio::test]
async fn search_exact_user_finds_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 2,
            "users": [user(9, "dogwood_tv"), user(10, "dogwood")]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let found = client.search_exact_user("dogwood").await.unwrap().unwrap();

    assert_eq!(found.id, "10");
}

// ── Public user profile ────────────────────────────────────────────────────

#[tokio::test]
async fn user_profile_by_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alder"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user(1, "alder")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let profile = client.user("alder").await.unwrap();

    assert_eq!(profile.id, "1");
    assert!(profile.email.is_none());
}

#[tokio::test]
async fn user_follows_pager_stops_on_empty_page_before_total() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/7/follows/channels"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 500,
            "follows": (0..25).map(|i| channel_follow(i, &format!("c{i}"))).collect::<Vec<_>>()
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/7/follows/channels"))
        .and(query_param("offset", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 500,
            "follows": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut pager = client.user_follows_pager("7");

    assert_eq!(pager.next_page().await.unwrap().map(|p| p.len()), Some(25));
    assert!(!pager.is_done());
    assert!(pager.next_page().await.unwrap().is_none());
    assert!(pager.is_done());
    assert!(pager.next_page().await.unwrap().is_none());
}
