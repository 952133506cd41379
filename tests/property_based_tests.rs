use project_metadata::helpers::copyright_years_at;
use project_metadata::{MetadataSource, ProjectMetadata};
use proptest::prelude::*;

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,20}"
}

proptest! {
    /// Property: the range mentions the start year and, when later, the current year
    #[test]
    fn copyright_range_contains_both_years(start in 1970i32..=2100, offset in 0i32..100) {
        let current = start + offset;
        let years = copyright_years_at(&start.to_string(), current).unwrap();

        prop_assert!(years.contains(&start.to_string()));
        prop_assert!(years.contains(&current.to_string()));
        if offset == 0 {
            prop_assert_eq!(years, start.to_string());
        } else {
            prop_assert_eq!(years, format!("{start}-{current}"));
        }
    }

    /// Property: a start year after the current year never builds
    #[test]
    fn future_start_year_is_rejected(current in 1970i32..2100, ahead in 1i32..50) {
        let start = current + ahead;
        prop_assume!(start <= 9999);
        prop_assert!(copyright_years_at(&start.to_string(), current).is_err());
    }

    /// Property: website URLs are plain concatenations of username and name
    #[test]
    fn website_urls_are_consistent(username in identifier_strategy(), name in identifier_strategy()) {
        let source = MetadataSource {
            github_username: username.clone(),
            name: name.clone(),
            ..MetadataSource::default()
        };
        let metadata = ProjectMetadata::build_at(source.clone(), 2026).unwrap();

        prop_assert_eq!(metadata.website(), format!("https://{username}.github.io/{name}"));
        prop_assert_eq!(metadata.website_source(), format!("https://github.com/{username}/{name}"));
        prop_assert_eq!(metadata.website_git(), format!("git://github.com/{username}/{name}.git"));

        let rebuilt = ProjectMetadata::build_at(source, 2026).unwrap();
        prop_assert_eq!(metadata, rebuilt);
    }
}
