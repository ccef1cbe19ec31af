use std::io::Write;

use pretty_assertions::assert_eq;
use salary_core::NumberLocale;
use salary_ui::{
    app::{ComparisonReport, StartupInput, initial_state},
    config::AppConfig,
};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn load_reads_settings_from_disk() {
    let file = write_config(
        r#"
        [window]
        width = 1280.0
        height = 720.0

        [display]
        currency_symbol = "USD "
        grouping_separator = " "

        [share]
        page_url = "https://example.com/tools/salary"
        "#,
    );

    let config = AppConfig::load(file.path()).unwrap();

    assert_eq!(config.window.width, 1280.0);
    assert_eq!(config.locale(), NumberLocale::new("USD ", ' '));
    assert_eq!(
        config.share_links().unwrap().page_url().as_str(),
        "https://example.com/tools/salary"
    );
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = AppConfig::load(&path).unwrap_err();

    assert!(err.to_string().contains("cannot read config file"), "{err}");
}

#[test]
fn load_reports_invalid_contents() {
    let file = write_config("[share]\npage_url = \"ftp://example.com\"\n");

    let err = AppConfig::load(file.path()).unwrap_err();

    assert!(err.to_string().contains("invalid config file"), "{err}");
}

#[test]
fn configured_locale_flows_into_report() {
    let file = write_config("[display]\ngrouping_separator = \".\"\ncurrency_symbol = \"$\"\n");
    let config = AppConfig::load(file.path()).unwrap();
    let state = initial_state(StartupInput {
        preset: Some("Software Engineer".to_string()),
        ..Default::default()
    });
    let comparison = state.comparison().unwrap();
    let locale = config.locale();

    let report = ComparisonReport::new(&comparison, &locale).to_string();

    assert!(report.contains("Based on a U.S. salary of $120.000"), "{report}");
    assert!(report.contains("Annual savings:         $96.000"), "{report}");
}
