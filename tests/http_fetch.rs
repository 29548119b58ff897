// SPDX-FileCopyrightText: The foliogrid authors
// SPDX-License-Identifier: MPL-2.0

use foliogrid::{
    Error, HttpFetch, Loader, MemoryContainer, MemoryDocument, Node, Settings, page,
    settings::DEFAULT_GRID_ID,
};
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const PROJECTS: &str = r#"[
    {"id": "aitextviews", "title": "AI Text Views", "description": "Summaries.", "projectUrl": "https://example.com/ai", "buttonText": "Try"},
    {"id": "unknown", "title": "Side Project", "description": "Misc.", "projectUrl": "https://example.com/side", "buttonText": "Visit"}
]"#;

async fn serve(status: u16, body: &str) -> (MockServer, Loader<HttpFetch>) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/portfolio/projects.json"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;
    let page_url: Url = format!("{}/portfolio/index.html", server.uri())
        .parse()
        .unwrap();
    let loader = Loader::for_page(HttpFetch::new(), &page_url, &Settings::default()).unwrap();
    (server, loader)
}

fn document() -> MemoryDocument {
    MemoryDocument::new().with_container(
        DEFAULT_GRID_ID,
        MemoryContainer::with_children(vec![Node::text("Loading...")]),
    )
}

#[tokio::test]
async fn load_projects_over_http() {
    let (_server, loader) = serve(200, PROJECTS).await;
    let records = loader.load().await.unwrap();
    assert_eq!(2, records.len());
    assert_eq!("AI Text Views", records[0].title());
    assert_eq!("Side Project", records[1].title());
}

#[tokio::test]
async fn start_renders_cards_from_http() {
    let (_server, loader) = serve(200, PROJECTS).await;
    let mut document = document();
    let count = page::start(&mut document, &loader, &Settings::default())
        .await
        .unwrap();
    assert_eq!(2, count);
    let html = document.container(DEFAULT_GRID_ID).unwrap().to_string();
    assert!(!html.contains("Loading..."));
    assert!(html.find("AI Text Views").unwrap() < html.find("Side Project").unwrap());
}

#[tokio::test]
async fn not_found_renders_error_message() {
    let (_server, loader) = serve(404, "Not Found").await;
    let mut document = document();
    let err = page::start(&mut document, &loader, &Settings::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Fetch { status: 404 }));
    let grid = document.container(DEFAULT_GRID_ID).unwrap();
    assert_eq!(1, grid.children().len());
    assert_eq!("Failed to load projects.", grid.children()[0].text_content());
}

#[tokio::test]
async fn malformed_json_renders_error_message() {
    let (_server, loader) = serve(200, "<html>not json</html>").await;
    let mut document = document();
    let err = page::start(&mut document, &loader, &Settings::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    let grid = document.container(DEFAULT_GRID_ID).unwrap();
    assert_eq!(1, grid.children().len());
    assert_eq!("Failed to load projects.", grid.children()[0].text_content());
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Nothing listens on the reserved TCP port 1.
    let location: Url = "http://127.0.0.1:1/projects.json".parse().unwrap();
    let loader = Loader::new(HttpFetch::new(), location);
    assert!(matches!(loader.load().await, Err(Error::Transport(_))));
}
