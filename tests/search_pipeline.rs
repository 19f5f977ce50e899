//! End-to-end tests of the fetch pipeline against a local canned-response server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use museo::api::ApiClient;
use museo::filters::{Classification, SearchFilters};
use museo::results::ResultsState;

/// Serve one HTTP request with the given body and capture the raw request.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let addr = listener.local_addr().expect("local addr");

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        // GET requests end with the blank line after the headers.
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");

        String::from_utf8_lossy(&request).to_string()
    });

    (format!("http://{}", addr), handle)
}

fn client_for(base: &str) -> ApiClient {
    ApiClient::with_base_urls(base, "http://images.test/iiif/2").expect("build client")
}

const SEARCH_PAGE: &str = r#"{
    "data": [
        {"id": 1, "title": "Haystacks", "artist_display": "Claude Monet", "date_start": 1890, "classification_title": "Painting"},
        {"id": 2, "title": "Street Scene", "artist_display": "Unknown", "date_start": 1955, "classification_title": "photography"},
        {"id": 3, "title": "Fragment", "artist_display": "", "date_start": 1890}
    ]
}"#;

#[test]
fn search_sends_only_query_and_year_range_upstream() {
    let (base, server) = serve_once("HTTP/1.1 200 OK", SEARCH_PAGE);
    let client = client_for(&base);

    let filters = SearchFilters {
        query: "water lilies".to_string(),
        artist: Some("Monet".to_string()),
        classification: Some(Classification::Painting),
        date_from: Some(1900),
        date_to: Some(1950),
    };

    let page = client.search_artworks(&filters).expect("search succeeds");
    let request = server.join().expect("server thread");

    assert!(request.starts_with(
        "GET /artworks/search?q=water%20lilies&date_start=1900&date_end=1950&limit=100&fields="
    ));
    assert!(!request.contains("artist"));
    assert!(!request.contains("classification="));

    let ids: Vec<u64> = page.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn search_omits_incomplete_year_range() {
    let (base, server) = serve_once("HTTP/1.1 200 OK", r#"{"data": []}"#);
    let client = client_for(&base);

    let mut filters = SearchFilters::query_only("prints");
    filters.date_from = Some(1900);

    client.search_artworks(&filters).expect("search succeeds");
    let request = server.join().expect("server thread");

    assert!(!request.contains("date_start"));
    assert!(!request.contains("date_end"));
}

#[test]
fn detail_fetches_by_id_and_parses_the_record() {
    let (base, server) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"data": {"title": "The Bedroom", "artist_display": "Vincent van Gogh", "image_id": "img-1", "date_start": 1889, "description": "<p>A bedroom.</p>"}}"#,
    );
    let client = client_for(&base);

    let record = client.artwork_detail(27992).expect("detail succeeds");
    let request = server.join().expect("server thread");

    assert!(request.starts_with("GET /artworks/27992 "));
    assert_eq!(record.title.as_deref(), Some("The Bedroom"));
    assert_eq!(record.image_id.as_deref(), Some("img-1"));
    assert_eq!(record.dimensions, None);
}

#[test]
fn results_screen_post_filters_the_fetched_page() {
    let (base, _server) = serve_once("HTTP/1.1 200 OK", SEARCH_PAGE);
    let client = client_for(&base);

    let mut filters = SearchFilters::query_only("scene");
    filters.classification = Some(Classification::Photography);

    let mut results = ResultsState::new();
    results.apply_filters(filters, &client);

    let count = poll_until_settled(&mut results);

    // Of the three records, only the case-insensitive photography match
    // survives; the record with no classification is excluded.
    assert_eq!(count, 1);
    assert_eq!(results.items[0].id, 2);
}

#[test]
fn results_screen_treats_server_errors_as_no_results() {
    let (base, _server) = serve_once("HTTP/1.1 500 Internal Server Error", "oops");
    let client = client_for(&base);

    let mut results = ResultsState::new();
    results.apply_filters(SearchFilters::query_only("anything"), &client);

    let count = poll_until_settled(&mut results);

    assert_eq!(count, 0);
    assert!(!results.loading);
    assert!(results.items.is_empty());
}

fn poll_until_settled(results: &mut ResultsState) -> usize {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        if let Some(count) = results.poll() {
            return count;
        }
        assert!(Instant::now() < deadline, "fetch never completed");
        thread::sleep(Duration::from_millis(5));
    }
}
