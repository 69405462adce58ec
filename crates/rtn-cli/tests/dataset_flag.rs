//! The global `--dataset` path through the library entry points: an exported
//! dataset file must load back and answer queries like the built-in one.

use std::io::Write;
use std::sync::Arc;

use rtn_cli::load_dataset;
use rtn_cli::search::render_report;
use rtn_pack::Dataset;
use rtn_query::QueryEngine;

fn export_to(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn exported_yaml_answers_like_builtin() {
    let builtin = Dataset::builtin().unwrap();
    let file = export_to(".yaml", &builtin.to_yaml().unwrap());

    let loaded = load_dataset(Some(file.path())).unwrap();
    assert_eq!(loaded.digest().unwrap(), builtin.digest().unwrap());

    let from_file = QueryEngine::new(Arc::new(loaded)).evaluate("builder melbourne");
    let from_builtin = QueryEngine::new(Arc::new(builtin)).evaluate("builder melbourne");
    assert_eq!(render_report(&from_file), render_report(&from_builtin));
}

#[test]
fn unsupported_extension_is_an_error() {
    let file = export_to(".toml", "regulations = []");
    let err = load_dataset(Some(file.path())).unwrap_err();
    assert!(format!("{err:#}").contains("failed to load dataset"));
}
