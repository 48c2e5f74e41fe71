use crate::headers::{HeaderError, HeaderMap};

const fn is_send_sync<T: Send + Sync>() { }
const _: () = {
    is_send_sync::<HeaderMap>();
};

#[test]
fn header_map() {
    let mut map = HeaderMap::new();
    assert!(map.is_empty());

    map.append("Content-Type", "text/html").unwrap();
    assert!(map.contains_key("content-type"));
    assert!(map.contains_key("Content-Type"));
    assert_eq!(map.get("content-type"), Some("text/html"));

    map.append("host", "localhost:42069").unwrap();
    map.append("accept", "*/*").unwrap();
    assert_eq!(map.len(), 3);

    // Append Multi

    map.append("Accept", "text/plain").unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map.get("accept"), Some("*/*, text/plain"));

    map.append("ACCEPT", "application/json").unwrap();
    assert_eq!(map.get("accept"), Some("*/*, text/plain, application/json"));

    // Stored lowercase

    let mut names = map.iter().map(|(k, _)| k).collect::<Vec<_>>();
    names.sort_unstable();
    assert_eq!(names, ["accept", "content-type", "host"]);

    // Clear

    map.clear();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert!(!map.contains_key("content-type"));
    assert!(!map.contains_key("host"));
}

#[test]
fn header_map_invalid_name() {
    let mut map = HeaderMap::new();

    assert_eq!(map.append("", "foo"), Err(HeaderError::Empty));
    assert_eq!(map.append("Content Type", "foo"), Err(HeaderError::Invalid(b' ')));
    assert_eq!(map.append("H@st", "foo"), Err(HeaderError::Invalid(b'@')));
    assert_eq!(map.append("caf\u{e9}", "foo"), Err(HeaderError::Invalid(0xC3)));
    assert!(map.is_empty());

    map.append("x-!#$%&'*+-.^_`|~", "ok").unwrap();
    assert_eq!(map.get("X-!#$%&'*+-.^_`|~"), Some("ok"));
}

#[test]
fn header_map_empty_value() {
    let mut map = HeaderMap::new();
    map.append("x-empty", "").unwrap();
    map.append("x-empty", "b").unwrap();
    assert_eq!(map.get("x-empty"), Some(", b"));
}

#[test]
fn header_map_value_trimmed() {
    let mut map = HeaderMap::new();

    map.append("x", "  padded\t\x0B").unwrap();
    assert_eq!(map.get("x"), Some("padded"));

    map.append("x", " \u{e9}t\u{e9} ").unwrap();
    assert_eq!(map.get("x"), Some("padded, \u{e9}t\u{e9}"));

    assert_eq!(map.append("y", "  padded \r\n"), Err(HeaderError::InvalidValue(b'\r')));
    assert_eq!(map.append("y", "a\nb"), Err(HeaderError::InvalidValue(b'\n')));
    assert!(!map.contains_key("y"));
}
