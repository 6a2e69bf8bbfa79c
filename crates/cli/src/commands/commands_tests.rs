use super::*;
use crate::printer::{HumanPrinter, JsonPrinter};
use serde_json::json;
use std::fs::write;

fn stat_results(terms: &[String]) -> Vec<Result<Value, LookupError>> {
    statprobe_plugins::lookup("stat")
        .expect("stat is registered")
        .run_each(terms, &Options::new())
        .expect("default options are valid")
}

#[test]
fn good_paths_are_printed_before_the_failure_is_reported() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let ok = tmp.path().join("ok");
    write(&ok, b"abc").expect("write file");
    let ok = ok.to_string_lossy().into_owned();

    let terms = vec![ok.clone(), String::new(), ok.clone()];
    let results = stat_results(&terms);

    let mut out = Vec::new();
    let mut err = Vec::new();
    let failed = {
        let mut printer = HumanPrinter::new(&mut out, &mut err, PrinterConfig::default());
        print_outcomes(&mut printer, "stat", &terms, &results).expect("print")
    };

    assert_eq!(failed, 1);

    let out = String::from_utf8(out).expect("utf8");
    let headers: Vec<&str> = out.lines().filter(|l| !l.starts_with(' ')).collect();
    assert_eq!(headers, vec![ok.as_str(), ok.as_str()]);
    assert!(out.contains("  size: 3"));

    let err = String::from_utf8(err).expect("utf8");
    assert!(err.starts_with("[error] : failed to stat "), "{err}");
    assert!(err.ends_with("[stat] 1 of 3 results failed\n"), "{err}");
}

#[test]
fn json_output_keeps_rows_aligned_with_terms() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let gone = tmp.path().join("gone").to_string_lossy().into_owned();

    let terms = vec![String::new(), gone.clone()];
    let results = stat_results(&terms);

    let mut out = Vec::new();
    let mut err = Vec::new();
    let failed = {
        let mut printer = JsonPrinter::new(&mut out, &mut err);
        print_outcomes(&mut printer, "stat", &terms, &results).expect("print")
    };

    assert_eq!(failed, 1);

    let rows: Vec<Value> = std::str::from_utf8(&out)
        .expect("utf8")
        .lines()
        .map(|l| serde_json::from_str(l).expect("json line"))
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["term"], "");
    assert!(rows[0]["error"].as_str().expect("error text").starts_with("failed to stat"));
    assert_eq!(
        rows[1],
        json!({ "kind": "stat", "term": gone, "result": { "exists": false } })
    );
}

#[test]
fn unknown_lookup_fails_before_printing() {
    let output = OutputOptions {
        json: true,
        color: "never".to_owned(),
    };

    let err = run_lookup("inventory", &[], &Options::new(), &output).unwrap_err();
    assert_eq!(err.to_string(), "unknown lookup inventory");
}

#[test]
fn printer_config_follows_flags() {
    let output = OutputOptions {
        json: true,
        color: "always".to_owned(),
    };

    let cfg = output.printer_config();
    assert_eq!(cfg.format, OutputFormat::Json);
    assert_eq!(cfg.color, ColorChoice::Always);
}
