use http::Uri;
use url::Url;
use varykey_core::Error;
use varykey_core::http::HttpHost;

#[test]
fn test_canonical_form_without_port() {
    assert_eq!(HttpHost::new("https", "example.com").to_string(), "https://example.com");
}

#[test]
fn test_scheme_and_hostname_are_lowercased() {
    let host = HttpHost::new("HTTPS", "API.Example.com").with_port(8443);
    assert_eq!(host.scheme(), "https");
    assert_eq!(host.hostname(), "api.example.com");
    assert_eq!(host.port(), Some(8443));
    assert_eq!(host.to_string(), "https://api.example.com:8443");
}

#[test]
fn test_from_uri_keeps_explicit_default_port() {
    let uri: Uri = "http://example.com:80/ignored?x=1".parse().unwrap();
    let host = HttpHost::try_from(&uri).expect("absolute uri");
    assert_eq!(host.to_string(), "http://example.com:80");
}

#[test]
fn test_from_url_drops_default_port() {
    let url = Url::parse("http://example.com:80/path").unwrap();
    let host = HttpHost::try_from(&url).expect("http url");
    assert_eq!(host.to_string(), "http://example.com");

    let url = Url::parse("http://example.com:8080/path").unwrap();
    assert_eq!(HttpHost::try_from(&url).unwrap().port(), Some(8080));
}

#[test]
fn test_from_str() {
    let host: HttpHost = "https://example.com:8443".parse().expect("valid host");
    assert_eq!(host, HttpHost::new("https", "example.com").with_port(8443));
}

#[test]
fn test_origin_form_uri_has_no_scheme() {
    let uri: Uri = "/only/a/path".parse().unwrap();
    assert!(matches!(HttpHost::try_from(&uri), Err(Error::MissingScheme(_))));
}

#[test]
fn test_url_without_host() {
    let url = Url::parse("data:text/plain,hello").unwrap();
    assert!(matches!(HttpHost::try_from(&url), Err(Error::MissingHost(_))));
}

#[test]
fn test_unparseable_input() {
    let err = "http://exa mple.com".parse::<HttpHost>().unwrap_err();
    assert!(matches!(err, Error::InvalidUri { .. }));
    assert!(err.to_string().starts_with("invalid URI `http://exa mple.com`"));
}

#[test]
fn test_serde_round_trip() {
    let host = HttpHost::new("http", "example.com").with_port(8080);
    let json = serde_json::to_string(&host).unwrap();
    assert_eq!(json, r#"{"scheme":"http","hostname":"example.com","port":8080}"#);
    assert_eq!(serde_json::from_str::<HttpHost>(&json).unwrap(), host);
}

#[test]
fn test_deserialized_host_is_canonical() {
    let json = r#"{"scheme":"HTTP","hostname":"Example.COM","port":8080}"#;
    let host: HttpHost = serde_json::from_str(json).unwrap();

    assert_eq!(host, HttpHost::new("http", "example.com").with_port(8080));
    assert_eq!(host.to_string(), "http://example.com:8080");
}

#[test]
fn test_deserialize_without_port() {
    let host: HttpHost = serde_json::from_str(r#"{"scheme":"https","hostname":"example.com"}"#).unwrap();
    assert_eq!(host.port(), None);
}
