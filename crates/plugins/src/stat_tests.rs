use super::*;
use log::Level;
use serde_json::json;
use statprobe_runtime::BufferedDiagnostics;
use std::{fs::write, path::Path};

const ABC_SHA1: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";
const ABC_MD5: &str = "900150983cd24fb0d6963f7d28e17f72";

fn options(value: Value) -> Options {
    match value {
        Value::Object(map) => map,
        other => panic!("options must be an object, got {other}"),
    }
}

fn term(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn defaults_produce_records_without_checksum() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let path = tmp.path().join("abc");
    write(&path, b"abc").expect("write file");

    let values = StatLookup::logging()
        .run(&[term(&path)], &Options::new())
        .expect("lookup ok");

    assert_eq!(values.len(), 1);
    assert_eq!(values[0]["exists"], true);
    assert_eq!(values[0]["size"], 3);
    assert_eq!(values[0]["is_regular_file"], true);
    assert!(values[0].get("checksum").is_none());
}

#[test]
fn checksum_uses_sha1_by_default() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let path = tmp.path().join("abc");
    write(&path, b"abc").expect("write file");

    let lookup = StatLookup::logging();

    let values = lookup
        .run(&[term(&path)], &options(json!({ "get_checksum": true })))
        .expect("lookup ok");
    assert_eq!(values[0]["checksum"], ABC_SHA1);

    let values = lookup
        .run(
            &[term(&path)],
            &options(json!({ "get_checksum": true, "checksum_algorithm": "md5" })),
        )
        .expect("lookup ok");
    assert_eq!(values[0]["checksum"], ABC_MD5);
}

#[test]
fn results_align_with_terms() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let first = tmp.path().join("first");
    let third = tmp.path().join("third");
    write(&first, b"1").expect("write file");
    write(&third, b"333").expect("write file");

    let terms = [
        term(&first),
        term(&tmp.path().join("second")),
        term(&third),
    ];

    let values = StatLookup::logging()
        .run(&terms, &options(json!({ "get_checksum": true })))
        .expect("lookup ok");

    assert_eq!(values.len(), 3);
    assert_eq!(values[0]["exists"], true);
    assert_eq!(values[1], json!({ "exists": false }));
    assert_eq!(values[2]["exists"], true);
    assert_eq!(values[2]["size"], 3);
}

#[test]
fn follow_option_reaches_probe() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let target = tmp.path().join("target");
    write(&target, b"abc").expect("write file");
    let link = tmp.path().join("link");
    std::os::unix::fs::symlink(&target, &link).expect("symlink");

    let lookup = StatLookup::logging();

    let values = lookup.run(&[term(&link)], &Options::new()).expect("lookup");
    assert_eq!(values[0]["is_symlink"], true);

    let values = lookup
        .run(&[term(&link)], &options(json!({ "follow": true })))
        .expect("lookup");
    assert_eq!(values[0]["is_symlink"], false);
    assert_eq!(values[0]["is_regular_file"], true);
}

#[test]
fn unknown_algorithm_is_rejected() {
    let err = StatLookup::logging()
        .run(
            &["/".to_owned()],
            &options(json!({ "get_checksum": true, "checksum_algorithm": "sha512" })),
        )
        .unwrap_err();

    assert!(matches!(err, LookupError::InvalidOptions { lookup: "stat", .. }));
    assert!(err.to_string().contains("sha512"), "{err}");
}

#[test]
fn probe_failure_surfaces_after_all_terms() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let ok = tmp.path().join("ok");
    write(&ok, b"x").expect("write file");

    let diag = BufferedDiagnostics::new();
    let lookup = StatLookup::new(FileStatusProbe::new(&diag));

    let terms = [term(&ok), String::new(), term(&ok)];
    let err = lookup.run(&terms, &Options::new()).unwrap_err();

    match err {
        LookupError::Probe { path, source } => {
            assert_eq!(path, "");
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidInput);
        }
        other => panic!("unexpected error {other}"),
    }

    // All three terms were probed.
    let probed = diag
        .messages_at(Level::Debug)
        .iter()
        .filter(|m| m.starts_with("[probe]"))
        .count();
    assert_eq!(probed, 2);
    assert_eq!(diag.messages_at(Level::Warn).len(), 1);
}

#[test]
fn run_each_keeps_records_around_a_failure() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let ok = tmp.path().join("ok");
    write(&ok, b"abc").expect("write file");

    let terms = [term(&ok), String::new(), term(&tmp.path().join("gone"))];
    let results = StatLookup::new(FileStatusProbe::new(statprobe_runtime::NullDiagnostics))
        .run_each(&terms, &Options::new())
        .expect("options ok");

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().expect("first record")["size"], 3);
    assert!(matches!(&results[1], Err(LookupError::Probe { path, .. }) if path.is_empty()));
    assert_eq!(
        results[2].as_ref().expect("missing path is a record"),
        &json!({ "exists": false })
    );
}

#[test]
fn run_each_rejects_bad_options_up_front() {
    let result = StatLookup::logging().run_each(
        &["/".to_owned()],
        &options(json!({ "follow": "yes" })),
    );

    assert!(matches!(result, Err(LookupError::InvalidOptions { lookup: "stat", .. })));
}
