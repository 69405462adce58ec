//! Loading datasets from disk in both supported formats, and rejection of
//! malformed or invalid files at the loading boundary.

use std::io::Write;

use rtn_pack::{Dataset, PackError};

const MINIMAL_YAML: &str = r#"
regulations:
  - id: home-business-approval
    title: Home Business Approval
    jurisdiction: local
    description: Approval to run a business from home.
    requirements:
      - Check zoning
    complexity: low
    cost: Free
    timeframe: 1 week
scenarios:
  - id: bakery-hobart
    title: Bakery in Hobart
    industry: Food
    location: Hobart, TAS
    state: TAS
    description: Small artisan bakery.
    local_requirements:
      - title: Food Premises Registration
        description: Register the premises.
        category: Food Safety
        regulator: City of Hobart
        jurisdiction: local
        progress: 50
    steps:
      - step: 1
        title: Register premises
        description: Lodge the form.
        timeframe: 2 weeks
        status: in-progress
    conflicts:
      - title: Delivery Hours
        description: Council and state delivery windows differ.
        jurisdictions: [City of Hobart, TAS State]
        severity: low
"#;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ---------------------------------------------------------------------------
// Successful loads
// ---------------------------------------------------------------------------

#[test]
fn loads_yaml_file() {
    let file = write_temp(".yaml", MINIMAL_YAML);
    let dataset = Dataset::load(file.path()).unwrap();

    assert_eq!(dataset.regulations.len(), 1);
    assert_eq!(dataset.scenarios.len(), 1);
    let scenario = dataset.scenario("bakery-hobart").unwrap();
    assert_eq!(scenario.state.code(), "TAS");
    assert_eq!(scenario.local_requirements[0].progress.value(), 50);
}

#[test]
fn loads_yml_and_json_files_identically() {
    let yml = write_temp(".yml", MINIMAL_YAML);
    let from_yaml = Dataset::load(yml.path()).unwrap();

    let json = write_temp(".json", &from_yaml.to_json_pretty().unwrap());
    let from_json = Dataset::load(json.path()).unwrap();

    assert_eq!(from_yaml, from_json);
    assert_eq!(from_yaml.digest().unwrap(), from_json.digest().unwrap());
}

#[test]
fn builtin_exports_reload_through_yaml() {
    let builtin = Dataset::builtin().unwrap();
    let file = write_temp(".yaml", &builtin.to_yaml().unwrap());
    let reloaded = Dataset::load(file.path()).unwrap();
    assert_eq!(builtin.digest().unwrap(), reloaded.digest().unwrap());
}

// ---------------------------------------------------------------------------
// Rejections
// ---------------------------------------------------------------------------

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, PackError::Io { .. }), "got {err:?}");
}

#[test]
fn unknown_jurisdiction_tag_fails_to_parse() {
    let yaml = MINIMAL_YAML.replace(
        "jurisdiction: local\n    description",
        "jurisdiction: council\n    description",
    );
    let file = write_temp(".yaml", &yaml);
    let err = Dataset::load(file.path()).unwrap_err();
    assert!(matches!(err, PackError::Yaml(_)), "got {err:?}");
}

#[test]
fn progress_above_bound_fails_to_parse() {
    let yaml = MINIMAL_YAML.replace("progress: 50", "progress: 150");
    let file = write_temp(".yaml", &yaml);
    assert!(Dataset::load(file.path()).is_err());
}

#[test]
fn misfiled_requirement_is_rejected_as_invalid() {
    let yaml = MINIMAL_YAML.replace(
        "        jurisdiction: local\n        progress",
        "        jurisdiction: federal\n        progress",
    );
    let file = write_temp(".yaml", &yaml);
    match Dataset::load(file.path()).unwrap_err() {
        PackError::Invalid { errors } => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("bakery-hobart"));
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_json_error() {
    let file = write_temp(".json", "{ \"regulations\": [ ");
    let err = Dataset::load(file.path()).unwrap_err();
    assert!(matches!(err, PackError::Json(_)), "got {err:?}");
}
