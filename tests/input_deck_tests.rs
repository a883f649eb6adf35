//! Input Deck Loading Tests
//!
//! Exercises the TOML deck loader independently of the derivation: aggregated
//! missing-key errors, unknown-key tolerance, and I/O failure paths.

use std::io::Write;
use std::path::Path;

use welltherm::{ParameterError, WellInput};

const CANONICAL_DECK: &str = r#"
# Reference circulation scenario
tin = 20.0
ts = 15.0
wd = 120.0
mdt = 3000.0

ddi = 0.1
ddo = 0.12
dcsg = 0.2
dsr = 0.24
dsro = 0.26
dri = 0.45
dro = 0.5
dfm = 0.6

q = 36.0

lambdal = 0.635
lambdac = 43.3
lambdad = 40.0
lambdacsr = 0.7
lambdasr = 15.49
lambdafm = 2.249
lambdasrfm = 4.17
lambdar = 15.49
lambdarw = 0.6
lambdaw = 0.6

cl = 3713.0
cc = 469.0
cd = 400.0
cr = 464.0
cw = 4000.0
csr = 813.7
cfm = 800.0

h1 = 1800.0
h2 = 2000.0
h3 = 200.0
h3r = 200.0

rhol = 1198.0
rhod = 7600.0
rhoc = 7800.0
rhor = 7800.0
rhofm = 2245.0
rhow = 1029.0
rhosr = 3000.0

gt = 0.0238
wtg = -0.005

RPM = 100.0
T = 20.0
Tbit = 5.0
WOB = 50.0
ROP = 30.0
An = 0.0025
"#;

fn write_deck(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create deck file");
    file.write_all(contents.as_bytes()).expect("write deck file");
    path
}

#[test]
fn complete_deck_loads() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_deck(dir.path(), "well.toml", CANONICAL_DECK);

    let input = WellInput::load_from_file(&path).expect("complete deck should load");
    assert_eq!(input.ddi, 0.1);
    assert_eq!(input.rpm, 100.0);
    assert_eq!(input.wtg, -0.005);
}

#[test]
fn missing_keys_aggregate_into_one_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let truncated: String = CANONICAL_DECK
        .lines()
        .filter(|l| !l.starts_with("ddi") && !l.starts_with("rhow") && !l.starts_with("Tbit"))
        .collect::<Vec<_>>()
        .join("\n");
    let path = write_deck(dir.path(), "well.toml", &truncated);

    let err = WellInput::load_from_file(&path).expect_err("truncated deck must fail");
    match err {
        ParameterError::MissingParameters { keys } => {
            assert_eq!(keys, vec!["ddi", "rhow", "Tbit"]);
        }
        other => panic!("expected MissingParameters, got {other:?}"),
    }
}

#[test]
fn unknown_keys_do_not_break_loading() {
    let dir = tempfile::tempdir().expect("tempdir");
    let with_extra = format!("{CANONICAL_DECK}\nmud_vendor_code = 7.0\n");
    let path = write_deck(dir.path(), "well.toml", &with_extra);

    // Unknown keys only warn; the deck still loads.
    let input = WellInput::load_from_file(&path).expect("extra keys are tolerated");
    assert_eq!(input.q, 36.0);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_deck(dir.path(), "well.toml", "tin = = 20.0\n");

    let err = WellInput::load_from_file(&path).expect_err("malformed deck must fail");
    assert!(matches!(err, ParameterError::Parse(..)), "got {err:?}");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = WellInput::load_from_file(&dir.path().join("nope.toml"))
        .expect_err("missing file must fail");
    assert!(matches!(err, ParameterError::Io(..)), "got {err:?}");
}

#[test]
fn non_numeric_value_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bad = CANONICAL_DECK.replace("q = 36.0", "q = \"thirty-six\"");
    let path = write_deck(dir.path(), "well.toml", &bad);

    let err = WellInput::load_from_file(&path).expect_err("string value must fail");
    assert!(matches!(err, ParameterError::Parse(..)), "got {err:?}");
}
