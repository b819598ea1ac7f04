//! Error messages and their mapping to user-facing notices

use otb_helper::error::OtbError;
use otb_helper_common::{Error, Notice, NoticeLevel, SearchError, SearchRequest};

#[test]
fn test_empty_query_rejected() {
    let err = SearchRequest::new("   ", 3).unwrap_err();
    assert!(matches!(err, Error::EmptyQuery));

    let cli_err: OtbError = err.into();
    assert_eq!(cli_err.to_string(), "Please enter a disc name to search for");
}

#[test]
fn test_search_error_categories() {
    let timeout: OtbError = SearchError::Timeout.into();
    assert!(timeout.to_string().starts_with("Search timed out"));

    let http: OtbError = SearchError::Http { status: 502 }.into();
    assert_eq!(http.to_string(), "Search failed: HTTP error! status: 502. Please try again.");

    let network: OtbError = SearchError::Network("connection refused".into()).into();
    assert_eq!(
        network.to_string(),
        "Search failed. Please check your connection and try again."
    );
}

#[test]
fn test_search_error_notice_is_error_level() {
    let notice = SearchError::Timeout.notice();
    assert_eq!(notice.level, NoticeLevel::Error);
}

#[test]
fn test_checkout_errors() {
    assert_eq!(Notice::from(&Error::EmptyCart).message, "Your cart is empty!");
    assert!(Notice::from(&Error::NoDirectLinks)
        .message
        .starts_with("No items have direct product links"));
}

#[test]
fn test_error_display() {
    let errors = vec![
        OtbError::Config("bad".to_string()),
        OtbError::Health("refused".to_string()),
        OtbError::InvalidView("grid".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty message: {:?}", err);
    }
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: OtbError = io.into();
    assert!(matches!(err, OtbError::Io(_)));
}
