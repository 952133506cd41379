//! Project Metadata Tests
//!
//! Tests for building the record through the public API and for the
//! checked-in `config/project.toml`.

use project_metadata::{
    get_copyright_years, get_google_analytics, get_paypal, FieldValue, MetadataLoader,
    MetadataSource, ProjectMetadata,
};
use std::path::PathBuf;

fn shipped_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/project.toml")
}

#[test]
fn shipped_config_matches_built_in_defaults() {
    let source = MetadataLoader::new()
        .without_environment()
        .with_config_file(shipped_config())
        .load_source()
        .expect("shipped config should load");

    assert_eq!(source, MetadataSource::default());
}

#[test]
fn shipped_config_builds() {
    let metadata = MetadataLoader::new()
        .without_environment()
        .with_config_file(shipped_config())
        .load()
        .expect("shipped config should build");

    assert_eq!(metadata.name(), "demos-linux");
    assert_eq!(metadata.year_started(), "2011");
    assert!(metadata.copyright_years().starts_with("2011-"));
}

#[test]
fn building_twice_yields_identical_records() {
    let first = ProjectMetadata::build_at(MetadataSource::default(), 2026).unwrap();
    let second = ProjectMetadata::build_at(MetadataSource::default(), 2026).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn copyright_end_year_tracks_the_clock_only() {
    let earlier = ProjectMetadata::build_at(MetadataSource::default(), 2025).unwrap();
    let later = ProjectMetadata::build_at(MetadataSource::default(), 2026).unwrap();

    assert_ne!(earlier.copyright_years(), later.copyright_years());
    for name in ProjectMetadata::field_names() {
        if *name != "project_copyright_years" {
            assert_eq!(earlier.get(name), later.get(name), "field {name} changed");
        }
    }
}

#[test]
fn project_started_this_year_has_single_year() {
    let source = MetadataSource {
        year_started: "2026".to_string(),
        ..MetadataSource::default()
    };
    let metadata = ProjectMetadata::build_at(source, 2026).unwrap();
    assert_eq!(metadata.copyright_years(), "2026");
}

#[test]
fn absent_ids_produce_absent_snippets() {
    let source = MetadataSource {
        google_analytics_tracking_id: None,
        paypal_donate_button_id: None,
        ..MetadataSource::default()
    };
    let metadata = ProjectMetadata::build_at(source, 2026).unwrap();

    assert_eq!(metadata.google_analytics_snipplet(), None);
    assert_eq!(metadata.paypal_donate_button_snipplet(), None);
    assert_eq!(
        metadata.get("project_google_analytics_snipplet"),
        Some(FieldValue::Absent)
    );
}

#[test]
fn description_placeholders_see_earlier_fields() {
    let source = MetadataSource {
        github_username: "octo".to_string(),
        name: "widgets".to_string(),
        year_started: "2019".to_string(),
        long_description: "{project_name} by {project_github_username}".to_string(),
        description: "Clone {project_website_git}, browse {project_website_source}, \
                      read {project_website}. Since {project_year_started}."
            .to_string(),
        ..MetadataSource::default()
    };
    let metadata = ProjectMetadata::build_at(source, 2026).unwrap();

    assert_eq!(metadata.long_description(), "widgets by octo");
    assert_eq!(
        metadata.description(),
        "Clone git://github.com/octo/widgets.git, browse https://github.com/octo/widgets, \
         read https://octo.github.io/widgets. Since 2019."
    );
}

#[test]
fn public_helpers() {
    assert!(get_copyright_years("2011").unwrap().starts_with("2011-"));
    assert!(get_copyright_years("eleven").is_err());
    assert_eq!(get_google_analytics(None), None);
    assert!(get_google_analytics(Some("UA-X")).unwrap().contains("UA-X"));
    assert_eq!(get_paypal(None), None);
}

#[test]
fn built_in_description_keeps_original_wording() {
    let metadata = ProjectMetadata::build_at(MetadataSource::default(), 2026).unwrap();

    assert!(metadata
        .description()
        .contains("I don't have a 32 bit\nmachine anymore. \nOther platforms"));
    assert!(metadata
        .description()
        .contains("unless explicity stolen as attributed"));
}
