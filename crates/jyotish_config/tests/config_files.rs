use std::io::Write;

use jyotish_config::{ChartSettings, ConfigError};
use jyotish_vedic_base::dasha::DashaSystem;
use jyotish_vedic_base::{AyanamshaSystem, Varga};

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "ayanamsha = \"raman\"\nvargas = [\"D1\", \"D9\", \"D30\"]\n\n[dasha]\nsystem = \"yogini\"\ndepth = 2"
    )
    .unwrap();
    let s = ChartSettings::load(file.path()).unwrap();
    assert_eq!(s.ayanamsha, AyanamshaSystem::Raman);
    assert_eq!(s.vargas, vec![Varga::D1, Varga::D9, Varga::D30]);
    assert_eq!(s.dasha.system, DashaSystem::Yogini);
    assert_eq!(s.dasha.depth, 2);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = ChartSettings::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn written_defaults_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.toml");
    let text = ChartSettings::default().to_toml_string().unwrap();
    std::fs::write(&path, text).unwrap();
    assert_eq!(ChartSettings::load(&path).unwrap(), ChartSettings::default());
}

#[test]
fn no_path_means_defaults() {
    assert_eq!(
        ChartSettings::load_or_default(None).unwrap(),
        ChartSettings::default()
    );
}
