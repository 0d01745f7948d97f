use super::cookie_value;

#[test]
fn finds_cookie_among_several() {
    let raw = "sessionid=xyz; csrftoken=abc123; theme=dark";
    assert_eq!(cookie_value(raw, "csrftoken"), Some("abc123".to_string()));
}

#[test]
fn missing_cookie_is_none() {
    assert_eq!(cookie_value("sessionid=xyz", "csrftoken"), None);
    assert_eq!(cookie_value("", "csrftoken"), None);
}

#[test]
fn name_prefix_does_not_match() {
    // `csrftoken_old` must not satisfy a lookup for `csrftoken`.
    let raw = "csrftoken_old=stale; other=1";
    assert_eq!(cookie_value(raw, "csrftoken"), None);
}

#[test]
fn tolerates_missing_space_after_separator() {
    let raw = "a=1;csrftoken=tok;b=2";
    assert_eq!(cookie_value(raw, "csrftoken"), Some("tok".to_string()));
}

#[test]
fn empty_value_is_still_present() {
    assert_eq!(cookie_value("csrftoken=", "csrftoken"), Some(String::new()));
}

#[test]
fn value_may_contain_equals() {
    let raw = "csrftoken=a=b=c";
    assert_eq!(cookie_value(raw, "csrftoken"), Some("a=b=c".to_string()));
}
