// SPDX-FileCopyrightText: The foliogrid authors
// SPDX-License-Identifier: MPL-2.0

use std::{
    cell::Cell,
    rc::Rc,
    sync::atomic::{AtomicUsize, Ordering},
};

use super::*;

#[derive(Debug, Default)]
struct StaticFetch {
    status: u16,
    body: &'static str,
    requests: AtomicUsize,
}

impl StaticFetch {
    fn new(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            ..Default::default()
        }
    }
}

impl Fetch for StaticFetch {
    async fn fetch(&self, _location: &Url) -> anyhow::Result<Fetched> {
        self.requests.fetch_add(1, Ordering::Relaxed);
        Ok(Fetched {
            status: self.status,
            body: self.body.as_bytes().to_vec(),
        })
    }
}

#[derive(Debug)]
struct UnreachableFetch;

impl Fetch for UnreachableFetch {
    async fn fetch(&self, location: &Url) -> anyhow::Result<Fetched> {
        anyhow::bail!("connection refused: {location}")
    }
}

/// Single-threaded transport that shares its request counter with the host.
#[derive(Debug)]
struct LocalFetch(Rc<Cell<u32>>);

impl Fetch for LocalFetch {
    async fn fetch(&self, _location: &Url) -> anyhow::Result<Fetched> {
        let requests = Rc::clone(&self.0);
        tokio::task::yield_now().await;
        requests.set(requests.get() + 1);
        Ok(Fetched {
            status: 200,
            body: br#"[{"title": "Local"}]"#.to_vec(),
        })
    }
}

fn location() -> Url {
    "https://example.com/projects.json".parse().unwrap()
}

#[test]
fn success_status_range() {
    assert!(!Fetched { status: 199, body: vec![] }.is_success());
    assert!(Fetched { status: 200, body: vec![] }.is_success());
    assert!(Fetched { status: 204, body: vec![] }.is_success());
    assert!(Fetched { status: 299, body: vec![] }.is_success());
    assert!(!Fetched { status: 304, body: vec![] }.is_success());
    assert!(!Fetched { status: 404, body: vec![] }.is_success());
}

#[test]
fn resolve_location_relative_to_page() {
    let page_url: Url = "https://example.com/portfolio/index.html".parse().unwrap();
    let loader = Loader::for_page(UnreachableFetch, &page_url, &Settings::default()).unwrap();
    assert_eq!(
        "https://example.com/portfolio/projects.json",
        loader.location().as_str()
    );
}

#[tokio::test]
async fn load_records_in_order() {
    let loader = Loader::new(
        StaticFetch::new(
            200,
            r#"[{"id": "cricket", "title": "First"}, {"title": "Second"}, {"title": "Third"}]"#,
        ),
        location(),
    );
    let records = loader.load().await.unwrap();
    let titles: Vec<_> = records.iter().map(ProjectRecord::title).collect();
    assert_eq!(vec!["First", "Second", "Third"], titles);
    assert_eq!(1, loader.fetch.requests.load(Ordering::Relaxed));
}

#[tokio::test]
async fn load_empty_list() {
    let loader = Loader::new(StaticFetch::new(200, "[]"), location());
    assert!(loader.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn non_success_status_is_a_fetch_error() {
    let loader = Loader::new(StaticFetch::new(404, "Not Found"), location());
    let err = loader.load().await.unwrap_err();
    assert!(matches!(err, Error::Fetch { status: 404 }));
    assert_eq!("HTTP error! status: 404", err.to_string());
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let loader = Loader::new(StaticFetch::new(200, "[{\"title\": "), location());
    assert!(matches!(loader.load().await, Err(Error::Parse(_))));
}

#[tokio::test]
async fn non_array_json_is_a_parse_error() {
    let loader = Loader::new(StaticFetch::new(200, r#"{"title": "Alone"}"#), location());
    assert!(matches!(loader.load().await, Err(Error::Parse(_))));
}

#[tokio::test]
async fn failed_request_is_a_transport_error() {
    let loader = Loader::new(UnreachableFetch, location());
    let err = loader.load().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.to_string().contains("connection refused"));
}

#[tokio::test]
async fn every_load_fetches_again() {
    let loader = Loader::new(StaticFetch::new(200, "[]"), location());
    loader.load().await.unwrap();
    loader.load().await.unwrap();
    assert_eq!(2, loader.fetch.requests.load(Ordering::Relaxed));
}

#[tokio::test]
async fn load_with_single_threaded_transport() {
    let requests = Rc::new(Cell::new(0));
    let loader = Loader::new(LocalFetch(Rc::clone(&requests)), location());
    let records = loader.load().await.unwrap();
    assert_eq!(1, records.len());
    assert_eq!("Local", records[0].title());
    assert_eq!(1, requests.get());
}
