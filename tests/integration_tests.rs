// Integration tests for compound-finder
// These tests run the source -> parser -> solver -> reporter pipeline end to end

use compound_finder::reporter::render;
use compound_finder::source::{fetch_words, load};
use compound_finder::*;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

/// Serve a single HTTP response on a local port and return the URL to fetch.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = [0u8; 1024];
        let _ = stream.read(&mut request);
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    format!("http://{addr}/word.list")
}

fn run(raw: &str, separator: LineSeparator, config: &SearchConfig) -> String {
    let words = split_words(raw, separator);
    render(find_longest_decomposable_word(&words, config).as_deref())
}

#[test]
fn test_local_file_pipeline() {
    let path = std::env::temp_dir().join("compound_finder_pipeline_words.txt");
    std::fs::write(&path, "cat\r\nbird\r\ndog\r\nhouse\r\ncatdog\r\nbirdhouse\r\n").unwrap();

    let raw = load(&WordSource::local(&path)).unwrap();
    assert_eq!(
        run(&raw, LineSeparator::Crlf, &SearchConfig::default()),
        "Longest anagram is \"birdhouse\""
    );

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_remote_pipeline() {
    let url = serve_once("200 OK", "bird\r\nhouse\r\nbirdhouse");
    let raw = load(&WordSource::Remote {
        url,
        timeout: Some(Duration::from_secs(5)),
    })
    .unwrap();

    assert_eq!(
        run(&raw, LineSeparator::Crlf, &SearchConfig::default()),
        "Longest anagram is \"birdhouse\""
    );
}

#[test]
fn test_remote_non_success_status() {
    let url = serve_once("404 Not Found", "missing");
    match fetch_words(&url, Some(Duration::from_secs(5))) {
        Err(SourceError::Status { url: failed, status }) => {
            assert_eq!(failed, url);
            assert!(status.starts_with("404"), "unexpected status {status}");
        }
        other => panic!("Expected status error, got {other:?}"),
    }
}

#[test]
fn test_empty_input_reports_not_found() {
    assert_eq!(
        run("", LineSeparator::Crlf, &SearchConfig::default()),
        "Unfortunately no anagramms were found in provided list"
    );
}

#[test]
fn test_no_compound_reports_not_found() {
    assert_eq!(
        run("cat\r\ndog", LineSeparator::Crlf, &SearchConfig::default()),
        "Unfortunately no anagramms were found in provided list"
    );
}

#[test]
fn test_wrong_separator_hides_compounds() {
    // Splitting LF-only text on CRLF leaves one long token and nothing to build it from.
    let raw = "bird\nhouse\nbirdhouse";
    let config = SearchConfig::default();
    assert_eq!(
        run(raw, LineSeparator::Crlf, &config),
        "Unfortunately no anagramms were found in provided list"
    );
    assert_eq!(run(raw, LineSeparator::Lf, &config), "Longest anagram is \"birdhouse\"");
}

#[test]
fn test_recursive_decomposition_with_min_len_one() {
    let config = SearchConfig::new(1).unwrap();
    assert_eq!(run("a\nb\nab\nabab", LineSeparator::Lf, &config), "Longest anagram is \"abab\"");
}

#[test]
fn test_decomposition_parts_rebuild_the_word() {
    let words = split_words(
        "news\r\npaper\r\nboy\r\nnewspaper\r\nnewspaperboy\r\npaperboy",
        LineSeparator::Crlf,
    );
    let found = find_longest_decomposition(&words, &SearchConfig::default()).unwrap();

    assert_eq!(found.word, "newspaperboy");
    assert!(found.parts.len() >= 2);
    assert_eq!(found.parts.concat(), found.word);
    assert!(found.parts.iter().all(|part| words.contains(part) && part.len() >= 2));
}

#[test]
fn test_inclusive_splits_change_boundary_result() {
    let raw = "abc\r\nde\r\nabcde";
    let reference = SearchConfig::default();
    let inclusive = reference.with_split_bounds(SplitBounds::Inclusive);

    assert_eq!(
        run(raw, LineSeparator::Crlf, &reference),
        "Unfortunately no anagramms were found in provided list"
    );
    assert_eq!(run(raw, LineSeparator::Crlf, &inclusive), "Longest anagram is \"abcde\"");
}
