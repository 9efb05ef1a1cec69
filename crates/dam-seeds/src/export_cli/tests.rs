//! Unit tests for the seed export CLI helpers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::rstest;
use serde_json::Value;

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct ExportFixture {
    dir: Utf8PathBuf,
}

impl ExportFixture {
    fn new() -> Self {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos());
        let counter = DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!(
            "dam-seeds-cli-{}-{suffix}-{counter}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        Self {
            dir: Utf8PathBuf::from_path_buf(dir).expect("utf-8 temp dir"),
        }
    }

    fn out_path(&self) -> Utf8PathBuf {
        self.dir.join("seeds.json")
    }
}

impl Drop for ExportFixture {
    fn drop(&mut self) {
        drop(std::fs::remove_dir_all(&self.dir));
    }
}

fn args(values: &[&str]) -> std::vec::IntoIter<String> {
    values
        .iter()
        .map(|value| (*value).to_owned())
        .collect::<Vec<_>>()
        .into_iter()
}

fn parsed_options(values: &[&str]) -> Options {
    let ParseOutcome::Options(options) = parse_args(args(values)).expect("parse args") else {
        panic!("expected options");
    };
    options
}

#[rstest]
#[case(&["-h"])]
#[case(&["--help"])]
#[case(&["--out", "seeds.json", "--help"])]
fn help_flags_short_circuit_parsing(#[case] values: &[&str]) {
    let outcome = parse_args(args(values)).expect("parse args");

    assert!(matches!(outcome, ParseOutcome::Help));
}

#[test]
fn parses_all_flags() {
    let options = parsed_options(&[
        "--out",
        "out/seeds.json",
        "--seed",
        "42",
        "--customer-count",
        "3",
    ]);

    assert_eq!(options.out_path(), "out/seeds.json");
    assert_eq!(options.seed(), Some(42));
    assert_eq!(options.customer_count(), Some(3));
}

#[test]
fn seed_and_customer_count_are_optional() {
    let options = parsed_options(&["--out", "seeds.json"]);

    assert_eq!(options.seed(), None);
    assert_eq!(options.customer_count(), None);
}

#[test]
fn missing_out_path_is_an_error() {
    let result = parse_args(args(&["--seed", "42"]));

    assert!(matches!(result, Err(CliError::MissingOutPath)));
}

#[rstest]
#[case(&["--out"], "--out")]
#[case(&["--out", "seeds.json", "--seed"], "--seed")]
#[case(&["--out", "seeds.json", "--customer-count"], "--customer-count")]
fn flags_without_values_are_errors(#[case] values: &[&str], #[case] expected_flag: &str) {
    let result = parse_args(args(values));

    assert!(
        matches!(result, Err(CliError::MissingValue { flag }) if flag == expected_flag),
        "unexpected result: {result:?}"
    );
}

#[rstest]
#[case(&["--out", "seeds.json", "--seed", "not-a-number"], "--seed")]
#[case(&["--out", "seeds.json", "--customer-count", "-1"], "--customer-count")]
fn non_numeric_values_are_errors(#[case] values: &[&str], #[case] expected_flag: &str) {
    let result = parse_args(args(values));

    assert!(
        matches!(result, Err(CliError::InvalidNumber { flag, .. }) if flag == expected_flag),
        "unexpected result: {result:?}"
    );
}

#[test]
fn unknown_arguments_are_errors() {
    let result = parse_args(args(&["--out", "seeds.json", "--frobnicate"]));

    assert!(
        matches!(result, Err(CliError::UnknownArgument { value }) if value == "--frobnicate"),
        "unexpected result"
    );
}

#[test]
fn run_export_writes_a_parseable_document() {
    let fixture = ExportFixture::new();
    let out_path = fixture.out_path();
    let options = parsed_options(&["--out", out_path.as_str(), "--seed", "42"]);

    let summary = run_export(&options).expect("run export");

    let contents = std::fs::read_to_string(&out_path).expect("read document");
    let document: Value = serde_json::from_str(&contents).expect("parse document");
    let object = document.as_object().expect("object document");
    assert_eq!(object.len(), 7);
    assert!(summary.record_count > 0);
    assert_eq!(summary.seed, Some(42));
}

#[test]
fn run_export_honours_the_customer_count_flag() {
    let fixture = ExportFixture::new();
    let out_path = fixture.out_path();
    let options = parsed_options(&[
        "--out",
        out_path.as_str(),
        "--seed",
        "42",
        "--customer-count",
        "1",
    ]);

    drop(run_export(&options).expect("run export"));

    let contents = std::fs::read_to_string(&out_path).expect("read document");
    let document: Value = serde_json::from_str(&contents).expect("parse document");
    let customers = document
        .get("customers")
        .and_then(Value::as_array)
        .expect("customers bucket");
    assert_eq!(customers.len(), 1);
}

#[test]
fn run_export_is_reproducible_for_a_fixed_seed() {
    let first_fixture = ExportFixture::new();
    let second_fixture = ExportFixture::new();
    let first_path = first_fixture.out_path();
    let second_path = second_fixture.out_path();

    drop(run_export(&parsed_options(&["--out", first_path.as_str(), "--seed", "7"]))
        .expect("first export"));
    drop(run_export(&parsed_options(&["--out", second_path.as_str(), "--seed", "7"]))
        .expect("second export"));

    let first = std::fs::read_to_string(&first_path).expect("read first");
    let second = std::fs::read_to_string(&second_path).expect("read second");
    assert_eq!(first, second);
}

#[test]
fn run_export_fails_for_a_missing_output_directory() {
    let fixture = ExportFixture::new();
    let out_path = fixture.dir.join("does-not-exist").join("seeds.json");
    let options = parsed_options(&["--out", out_path.as_str(), "--seed", "1"]);

    let result = run_export(&options);

    assert!(matches!(result, Err(CliError::OutDirUnavailable { .. })));
}

#[test]
fn success_message_names_the_output_path() {
    let summary = ExportSummary {
        record_count: 250,
        seed: None,
    };

    let message = success_message(&summary, Utf8Path::new("out/seeds.json"));

    assert_eq!(message, "Wrote 250 records to out/seeds.json");
}
