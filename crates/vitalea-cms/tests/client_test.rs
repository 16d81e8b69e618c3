//! Integration tests for `CmsClient` against a mocked CMS.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vitalea_cms::{entry, pages, BlogPost, CmsClient, CmsConfig, ContentSource, Error};
use vitalea_core::CmsQuery;

fn client_for(server: &MockServer) -> CmsClient {
    CmsClient::new(CmsConfig {
        base_url: server.uri(),
        ..CmsConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_single_sends_encoded_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/about"))
        .and(query_param("populate[0]", "story"))
        .and(query_param("populate[1]", "story.image"))
        .and(query_param("locale", "it"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": 1, "title": "La nostra storia" },
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = CmsQuery::new()
        .populate_paths(["story", "story.image"])
        .locale("it");

    let envelope = client.fetch_single("about", &query).await.unwrap();
    let record = entry(&envelope.data).unwrap();
    assert_eq!(record["title"], "La nostra storia");
}

#[tokio::test]
async fn test_fetch_single_empty_query_has_no_question_mark() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/header"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let envelope = client.fetch_single("header", &CmsQuery::new()).await.unwrap();
    assert!(envelope.entry().is_none());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_fetch_collection_decodes_pagination_meta() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/blog-posts"))
        .and(query_param("sort[]", "publishedAt:desc"))
        .and(query_param("pagination[page]", "1"))
        .and(query_param("pagination[pageSize]", "12"))
        .and(query_param("publicationState", "live"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": 1, "title": "First", "slug": "first",
                  "publishedAt": "2026-01-10T08:00:00.000Z",
                  "Image": { "data": { "attributes": { "url": "/uploads/first.jpg" } } } },
                { "id": 2, "title": "Second", "slug": "second" }
            ],
            "meta": { "pagination": { "page": 1, "pageSize": 12, "pageCount": 1, "total": 2 } }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let envelope = pages::blog_posts(&client, "it", 1).await.unwrap();

    assert_eq!(envelope.entries().len(), 2);
    assert_eq!(envelope.pagination().unwrap().total, 2);

    let posts = BlogPost::from_envelope(&envelope);
    assert_eq!(posts[0].cover_url.as_deref(), Some("/uploads/first.jpg"));
    assert_eq!(
        client.absolute_url(posts[0].cover_url.as_deref().unwrap()),
        format!("{}/uploads/first.jpg", server.uri())
    );
    assert!(posts[1].cover_url.is_none());
}

#[tokio::test]
async fn test_fetch_entry_hits_id_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/blog-posts/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": 7, "title": "Seventh" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let envelope = client
        .fetch_entry("blog-posts", "7", &CmsQuery::new())
        .await
        .unwrap();
    assert_eq!(entry(&envelope.data).unwrap()["id"], 7);
}

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/missing-page"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "status": 404, "name": "NotFoundError", "message": "Not Found" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .fetch_single("missing-page", &CmsQuery::new())
        .await
        .unwrap_err();

    match err {
        Error::NotFound(msg) => assert!(msg.contains("missing-page")),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_envelope_message_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/about"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "status": 403, "name": "ForbiddenError", "message": "Invalid credentials" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch_single("about", &CmsQuery::new()).await.unwrap_err();

    match err {
        Error::Cms(msg) => {
            assert!(msg.contains("ForbiddenError"));
            assert!(msg.contains("Invalid credentials"));
            assert!(msg.contains("403"));
        }
        other => panic!("Expected Cms error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_undecodable_error_body_falls_back_to_status_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/about"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch_single("about", &CmsQuery::new()).await.unwrap_err();

    match err {
        Error::Cms(msg) => assert!(msg.contains("Internal Server Error")),
        other => panic!("Expected Cms error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_api_token_sent_as_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/home"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": 1 } })))
        .expect(1)
        .mount(&server)
        .await;

    let client = CmsClient::new(CmsConfig {
        base_url: server.uri(),
        api_token: Some("secret-token".to_string()),
        ..CmsConfig::default()
    })
    .unwrap();

    client.fetch_single("home", &CmsQuery::new()).await.unwrap();
}

#[tokio::test]
async fn test_slug_lookup_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/blog-posts"))
        .and(query_param("filters[slug]", "mediterranean-diet"))
        .and(query_param("populate[0]", "Image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": 3, "slug": "mediterranean-diet", "title": "The Mediterranean diet" }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let envelope = pages::blog_post_by_slug(&client, "mediterranean-diet")
        .await
        .unwrap();

    let post = entry(&envelope.data).unwrap();
    assert_eq!(post["title"], "The Mediterranean diet");
}
