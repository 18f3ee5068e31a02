use crate::auth::authentication_handler::parse_basic_credentials;
use crate::auth::password_handler;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

#[test]
pub fn test_parsing_valid_basic_header() {
    let header = format!("Basic {}", STANDARD.encode("alice:pw1"));
    let credentials = parse_basic_credentials(&header);
    assert_eq!(credentials, Some(("alice".to_owned(), "pw1".to_owned())));
}

#[test]
pub fn test_scheme_is_case_insensitive() {
    let header = format!("basic {}", STANDARD.encode("alice:pw1"));
    let credentials = parse_basic_credentials(&header);
    assert_eq!(credentials, Some(("alice".to_owned(), "pw1".to_owned())));
}

//only the first colon separates, passwords may contain their own
#[test]
pub fn test_password_keeps_extra_colons() {
    let header = format!("Basic {}", STANDARD.encode("alice:pw:extra"));
    let credentials = parse_basic_credentials(&header);
    assert_eq!(credentials, Some(("alice".to_owned(), "pw:extra".to_owned())));
}

#[test]
pub fn test_rejecting_malformed_headers() {
    //wrong scheme
    assert_eq!(
        parse_basic_credentials(&format!("Bearer {}", STANDARD.encode("alice:pw1"))),
        None
    );
    //not base64 at all
    assert_eq!(parse_basic_credentials("Basic %%%%"), None);
    //no credential part
    assert_eq!(parse_basic_credentials("Basic"), None);
    //decodes but has no colon separator
    assert_eq!(
        parse_basic_credentials(&format!("Basic {}", STANDARD.encode("alicepw1"))),
        None
    );
    assert_eq!(parse_basic_credentials(""), None);
}

#[test]
pub fn test_hash_and_verify_round_trip() {
    let hash = password_handler::hash_password("pw1", "test-pepper");
    assert_eq!(password_handler::verify_password("pw1", "test-pepper", &hash), true);
}

#[test]
pub fn test_wrong_password_fails_verification() {
    let hash = password_handler::hash_password("pw1", "test-pepper");
    assert_eq!(password_handler::verify_password("pw2", "test-pepper", &hash), false);
}

//a hash made with one pepper is worthless under another
#[test]
pub fn test_wrong_pepper_fails_verification() {
    let hash = password_handler::hash_password("pw1", "test-pepper");
    assert_eq!(
        password_handler::verify_password("pw1", "other-pepper", &hash),
        false
    );
}

#[test]
pub fn test_salting_makes_hashes_differ() {
    let first_hash = password_handler::hash_password("pw1", "test-pepper");
    let second_hash = password_handler::hash_password("pw1", "test-pepper");
    assert_ne!(first_hash, second_hash);
}

#[test]
pub fn test_garbage_stored_hash_fails_closed() {
    assert_eq!(
        password_handler::verify_password("pw1", "test-pepper", "not-a-phc-string"),
        false
    );
}
