use std::fs;

use listbench::{BenchError, load_listing};

#[test]
fn listing_round_trip_skips_blank_lines() {
    let temp = tempfile::tempdir().expect("failed creating tempdir");
    let path = temp.path().join("listing.txt");
    fs::write(
        &path,
        "/home/user/a.txt\n\n  /home/user/b.txt  \n\t\n/home/user/c.txt\r\n\n",
    )
    .expect("failed writing listing");

    let listing = load_listing(&path).expect("listing should load");

    assert_eq!(listing.len(), 3);
    assert_eq!(
        listing.as_slice(),
        ["/home/user/a.txt", "/home/user/b.txt", "/home/user/c.txt"]
    );
    assert_eq!(listing.get(1), Some("/home/user/a.txt"));
}

#[test]
fn listing_with_invalid_utf8_still_loads() {
    let temp = tempfile::tempdir().expect("failed creating tempdir");
    let path = temp.path().join("listing.txt");
    fs::write(&path, b"ok\n\xc0\xafbad\nr\xc3\xa9sum\xc3\xa9\n").expect("failed writing listing");

    let listing = load_listing(&path).expect("listing should load");

    assert_eq!(listing.as_slice(), ["ok", "bad", "résumé"]);
}

#[test]
fn missing_listing_is_fatal() {
    let temp = tempfile::tempdir().expect("failed creating tempdir");
    let path = temp.path().join("absent.txt");

    let err = load_listing(&path).unwrap_err();

    match err {
        BenchError::ListingUnreadable { path: reported, source } => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn directory_is_unreadable() {
    let temp = tempfile::tempdir().expect("failed creating tempdir");

    let err = load_listing(temp.path()).unwrap_err();

    assert_eq!(err.error_code(), "LISTING_UNREADABLE");
}
