use std::collections::HashMap;

use bytes::Bytes;
use http::header::{ACCEPT_ENCODING, VARY};
use http::{Request, Response, StatusCode};
use varykey::{CacheEntry, CacheKey, CacheKeyer, HttpHost, Lookup, primary_key};

fn host() -> HttpHost {
    HttpHost::new("https", "cdn.example.com")
}

fn request(encoding: &str) -> Request<()> {
    Request::get("/app.js")
        .header(ACCEPT_ENCODING, encoding)
        .body(())
        .expect("Request creation should succeed in test")
}

fn create_test_response(body: &'static str, vary: Option<&'static str>) -> CacheEntry {
    let mut builder = Response::builder().status(StatusCode::OK);
    if let Some(vary) = vary {
        builder = builder.header(VARY, vary);
    }
    CacheEntry::from_response(builder.body(Bytes::from_static(body.as_bytes())).unwrap())
}

/// Files `response` the way a store would: root under the primary key, the
/// negotiated representation under its variant key.
fn store_response(
    store: &mut HashMap<CacheKey, CacheEntry>,
    keyer: &CacheKeyer,
    request: &Request<()>,
    response: CacheEntry,
) {
    let keys = keyer.storage_keys(&host(), request, &response);
    match keys.variant {
        Some(variant) => {
            let root = store.entry(keys.root).or_insert_with(|| response.clone());
            root.record_variant(variant.clone());
            store.insert(variant, response);
        }
        None => {
            store.insert(keys.root, response);
        }
    }
}

#[test]
fn test_lookup_empty_store_misses_on_primary_key() {
    let keyer = CacheKeyer::new();
    let mut fetched = Vec::new();

    let found: Lookup<CacheEntry> = keyer.lookup(&host(), &request("gzip"), |key| {
        fetched.push(key.clone());
        None
    });

    assert!(!found.is_hit());
    assert_eq!(found.key().as_str(), "https://cdn.example.com/app.js");
    assert_eq!(fetched.len(), 1);
}

#[test]
fn test_lookup_plain_entry_single_fetch() {
    let keyer = CacheKeyer::new();
    let mut store = HashMap::new();
    store_response(&mut store, &keyer, &request("gzip"), create_test_response("plain", None));

    let mut fetched = 0;
    let found = keyer.lookup(&host(), &request("br"), |key| {
        fetched += 1;
        store.get(key)
    });

    assert_eq!(fetched, 1);
    assert_eq!(found.key(), &primary_key(&host(), &request("br")));
    assert_eq!(found.entry().map(|e| e.body().as_ref()), Some(&b"plain"[..]));
}

#[test]
fn test_lookup_selects_negotiated_variant() {
    let keyer = CacheKeyer::new();
    let mut store = HashMap::new();
    store_response(&mut store, &keyer, &request("gzip"), create_test_response("gzip-body", Some("Accept-Encoding")));
    store_response(&mut store, &keyer, &request("br"), create_test_response("br-body", Some("Accept-Encoding")));

    let gzip = keyer.lookup(&host(), &request("gzip"), |key| store.get(key));
    let br = keyer.lookup(&host(), &request("br"), |key| store.get(key));

    assert_eq!(gzip.key(), "{Accept-Encoding=gzip}https://cdn.example.com/app.js");
    assert_eq!(gzip.into_entry().map(|e| e.body().clone()), Some(Bytes::from_static(b"gzip-body")));
    assert_eq!(br.into_entry().map(|e| e.body().clone()), Some(Bytes::from_static(b"br-body")));

    let root = store.get("https://cdn.example.com/app.js").expect("root entry");
    assert_eq!(root.variant_keys().count(), 2);
}

#[test]
fn test_lookup_unseen_variant_misses_on_variant_key() {
    let keyer = CacheKeyer::new();
    let mut store = HashMap::new();
    store_response(&mut store, &keyer, &request("gzip"), create_test_response("gzip-body", Some("Accept-Encoding")));

    let mut fetched = Vec::new();
    let found = keyer.lookup(&host(), &request("identity"), |key| {
        fetched.push(key.clone());
        store.get(key)
    });

    assert!(matches!(found, Lookup::Miss { .. }));
    assert_eq!(found.key(), "{Accept-Encoding=identity}https://cdn.example.com/app.js");
    assert_eq!(fetched.len(), 2);
    assert!(!fetched[0].is_variant());
    assert!(fetched[1].is_variant());
}

#[test]
fn test_storage_keys() {
    let keyer = CacheKeyer::default();

    let plain = keyer.storage_keys(&host(), &request("gzip"), &create_test_response("x", None));
    assert_eq!(plain.root, "https://cdn.example.com/app.js");
    assert_eq!(plain.variant, None);

    let negotiated = keyer.storage_keys(&host(), &request("gzip"), &create_test_response("x", Some("Accept-Encoding")));
    assert_eq!(negotiated.root, "https://cdn.example.com/app.js");
    assert_eq!(
        negotiated.variant.as_ref().map(CacheKey::as_str),
        Some("{Accept-Encoding=gzip}https://cdn.example.com/app.js")
    );
}

#[test]
fn test_storage_keys_blank_vary_is_not_negotiated() {
    let keyer = CacheKeyer::new();
    let keys = keyer.storage_keys(&host(), &request("gzip"), &create_test_response("x", Some(" , ")));
    assert_eq!(keys.variant, None);
}
