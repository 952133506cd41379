//! # Project Metadata Configuration
//!
//! The metadata record describing a project's identity, description and
//! licensing, read by documentation generators and packaging scripts.
//!
//! ## Architecture
//!
//! - **Literal inputs**: [`MetadataSource`] holds everything a human writes
//!   down (name, username, description texts, keywords, optional ids)
//! - **Derived fields**: [`ProjectMetadata::build`] computes website URLs,
//!   expands description placeholders, formats the copyright range and the
//!   optional snippets, exactly once
//! - **Explicit Validation**: malformed inputs fail the load, nothing is
//!   silently defaulted
//! - **No global state**: the record is a plain value passed by reference
//!
//! ## Usage
//!
//! ```rust,no_run
//! use project_metadata::config::MetadataLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metadata = MetadataLoader::new().load()?;
//!
//! println!("{} ({})", metadata.name(), metadata.copyright_years());
//! if let Some(website) = metadata.get("project_website") {
//!     println!("{website}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use crate::constants::{self, fields};
use crate::helpers;
use crate::template;
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub use error::{ConfigResult, ConfigurationError};
pub use loader::MetadataLoader;

/// Literal metadata inputs, as written in `config/project.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MetadataSource {
    /// GitHub account hosting the project
    pub github_username: String,

    /// Project (and repository) name
    pub name: String,

    /// One-line description, may reference earlier fields as `{field}`
    pub long_description: String,

    /// Year the project started, four digits
    pub year_started: String,

    /// Long-form description, may reference earlier fields as `{field}`
    pub description: String,

    pub keywords: Vec<String>,

    /// Whether a Debian package is produced
    pub deb_package: bool,

    /// Extra files shipped with the package
    pub data_files: Vec<String>,

    pub codacy_id: Option<String>,

    pub google_analytics_tracking_id: Option<String>,

    pub paypal_donate_button_id: Option<String>,
}

impl Default for MetadataSource {
    fn default() -> Self {
        Self {
            github_username: constants::GITHUB_USERNAME.to_string(),
            name: constants::PROJECT_NAME.to_string(),
            long_description: constants::LONG_DESCRIPTION.to_string(),
            year_started: constants::YEAR_STARTED.to_string(),
            description: constants::DESCRIPTION.to_string(),
            keywords: constants::KEYWORDS.iter().map(|k| k.to_string()).collect(),
            deb_package: constants::DEB_PACKAGE,
            data_files: Vec::new(),
            codacy_id: constants::CODACY_ID.map(str::to_string),
            google_analytics_tracking_id: constants::GOOGLE_ANALYTICS_TRACKING_ID
                .map(str::to_string),
            paypal_donate_button_id: constants::PAYPAL_DONATE_BUTTON_ID.map(str::to_string),
        }
    }
}

impl MetadataSource {
    /// Validate the literal inputs
    pub fn validate(&self) -> ConfigResult<()> {
        if self.github_username.trim().is_empty() {
            return Err(ConfigurationError::missing_required_field(
                "github_username",
                "project metadata",
            ));
        }

        if self.name.trim().is_empty() {
            return Err(ConfigurationError::missing_required_field(
                "name",
                "project metadata",
            ));
        }

        helpers::parse_year(&self.year_started)?;

        if let Some(blank) = self.keywords.iter().find(|k| k.trim().is_empty()) {
            return Err(ConfigurationError::invalid_value(
                "keywords",
                blank.as_str(),
                "keywords must not be blank",
            ));
        }

        if let Some(blank) = self.data_files.iter().find(|f| f.trim().is_empty()) {
            return Err(ConfigurationError::invalid_value(
                "data_files",
                blank.as_str(),
                "data file paths must not be blank",
            ));
        }

        Ok(())
    }
}

/// A single field of the record as seen by key-value readers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Flag(bool),
    /// Unset optional field
    Absent,
}

impl FieldValue {
    fn optional(value: &Option<String>) -> Self {
        value.clone().map_or(Self::Absent, Self::Text)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{text}"),
            FieldValue::List(items) => write!(f, "{}", items.join("\n")),
            FieldValue::Flag(flag) => write!(f, "{flag}"),
            FieldValue::Absent => Ok(()),
        }
    }
}

/// The fully computed, read-only metadata record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectMetadata {
    #[serde(rename = "project_github_username")]
    github_username: String,
    #[serde(rename = "project_name")]
    name: String,
    #[serde(rename = "project_website")]
    website: String,
    #[serde(rename = "project_website_source")]
    website_source: String,
    #[serde(rename = "project_website_git")]
    website_git: String,
    #[serde(rename = "project_long_description")]
    long_description: String,
    #[serde(rename = "project_year_started")]
    year_started: String,
    #[serde(rename = "project_description")]
    description: String,
    #[serde(rename = "project_keywords")]
    keywords: Vec<String>,
    deb_package: bool,
    #[serde(rename = "project_data_files")]
    data_files: Vec<String>,
    codacy_id: Option<String>,
    #[serde(rename = "project_google_analytics_tracking_id")]
    google_analytics_tracking_id: Option<String>,
    #[serde(rename = "project_paypal_donate_button_id")]
    paypal_donate_button_id: Option<String>,
    #[serde(rename = "project_copyright_years")]
    copyright_years: String,
    #[serde(rename = "project_google_analytics_snipplet")]
    google_analytics_snipplet: Option<String>,
    #[serde(rename = "project_paypal_donate_button_snipplet")]
    paypal_donate_button_snipplet: Option<String>,
}

impl ProjectMetadata {
    /// Build the record, ending the copyright range at the current year
    pub fn build(source: MetadataSource) -> ConfigResult<Self> {
        Self::build_at(source, Local::now().year())
    }

    /// Build the record with an explicit current year
    pub fn build_at(source: MetadataSource, current_year: i32) -> ConfigResult<Self> {
        source.validate()?;

        let MetadataSource {
            github_username,
            name,
            long_description,
            year_started,
            description,
            keywords,
            deb_package,
            data_files,
            codacy_id,
            google_analytics_tracking_id,
            paypal_donate_button_id,
        } = source;

        // An empty id in a TOML file switches the integration off
        let codacy_id = codacy_id.filter(|id| !id.trim().is_empty());
        let google_analytics_tracking_id =
            google_analytics_tracking_id.filter(|id| !id.trim().is_empty());
        let paypal_donate_button_id = paypal_donate_button_id.filter(|id| !id.trim().is_empty());

        let website = format!("https://{github_username}.github.io/{name}");
        let website_source = format!("https://github.com/{github_username}/{name}");
        let website_git = format!("git://github.com/{github_username}/{name}.git");

        // Each template sees only the fields declared before it
        let long_description = template::expand(
            fields::LONG_DESCRIPTION,
            &long_description,
            &[
                (fields::GITHUB_USERNAME, github_username.as_str()),
                (fields::NAME, name.as_str()),
                (fields::WEBSITE, website.as_str()),
                (fields::WEBSITE_SOURCE, website_source.as_str()),
                (fields::WEBSITE_GIT, website_git.as_str()),
            ],
        )?;
        let description = template::expand(
            fields::DESCRIPTION,
            &description,
            &[
                (fields::GITHUB_USERNAME, github_username.as_str()),
                (fields::NAME, name.as_str()),
                (fields::WEBSITE, website.as_str()),
                (fields::WEBSITE_SOURCE, website_source.as_str()),
                (fields::WEBSITE_GIT, website_git.as_str()),
                (fields::LONG_DESCRIPTION, long_description.as_str()),
                (fields::YEAR_STARTED, year_started.as_str()),
            ],
        )?;

        let copyright_years = helpers::copyright_years_at(&year_started, current_year)?;
        let google_analytics_snipplet =
            helpers::get_google_analytics(google_analytics_tracking_id.as_deref());
        let paypal_donate_button_snipplet =
            helpers::get_paypal(paypal_donate_button_id.as_deref());

        debug!(
            project = %name,
            website = %website,
            copyright_years = %copyright_years,
            google_analytics = google_analytics_snipplet.is_some(),
            paypal = paypal_donate_button_snipplet.is_some(),
            "Project metadata built"
        );

        Ok(Self {
            github_username,
            name,
            website,
            website_source,
            website_git,
            long_description,
            year_started,
            description,
            keywords,
            deb_package,
            data_files,
            codacy_id,
            google_analytics_tracking_id,
            paypal_donate_button_id,
            copyright_years,
            google_analytics_snipplet,
            paypal_donate_button_snipplet,
        })
    }

    /// Field names in declaration order
    pub fn field_names() -> &'static [&'static str] {
        fields::ALL
    }

    /// Key-value read by record field name; `None` for unknown keys
    pub fn get(&self, key: &str) -> Option<FieldValue> {
        let value = match key {
            fields::GITHUB_USERNAME => FieldValue::Text(self.github_username.clone()),
            fields::NAME => FieldValue::Text(self.name.clone()),
            fields::WEBSITE => FieldValue::Text(self.website.clone()),
            fields::WEBSITE_SOURCE => FieldValue::Text(self.website_source.clone()),
            fields::WEBSITE_GIT => FieldValue::Text(self.website_git.clone()),
            fields::LONG_DESCRIPTION => FieldValue::Text(self.long_description.clone()),
            fields::YEAR_STARTED => FieldValue::Text(self.year_started.clone()),
            fields::DESCRIPTION => FieldValue::Text(self.description.clone()),
            fields::KEYWORDS => FieldValue::List(self.keywords.clone()),
            fields::DEB_PACKAGE => FieldValue::Flag(self.deb_package),
            fields::DATA_FILES => FieldValue::List(self.data_files.clone()),
            fields::CODACY_ID => FieldValue::optional(&self.codacy_id),
            fields::GOOGLE_ANALYTICS_TRACKING_ID => {
                FieldValue::optional(&self.google_analytics_tracking_id)
            }
            fields::PAYPAL_DONATE_BUTTON_ID => FieldValue::optional(&self.paypal_donate_button_id),
            fields::COPYRIGHT_YEARS => FieldValue::Text(self.copyright_years.clone()),
            fields::GOOGLE_ANALYTICS_SNIPPLET => {
                FieldValue::optional(&self.google_analytics_snipplet)
            }
            fields::PAYPAL_DONATE_BUTTON_SNIPPLET => {
                FieldValue::optional(&self.paypal_donate_button_snipplet)
            }
            _ => return None,
        };
        Some(value)
    }

    /// The whole record as JSON, keyed by field name
    pub fn to_json(&self) -> ConfigResult<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| ConfigurationError::json_serialization_error("project metadata", e))
    }

    pub fn github_username(&self) -> &str {
        &self.github_username
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn website_source(&self) -> &str {
        &self.website_source
    }

    pub fn website_git(&self) -> &str {
        &self.website_git
    }

    pub fn long_description(&self) -> &str {
        &self.long_description
    }

    pub fn year_started(&self) -> &str {
        &self.year_started
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn deb_package(&self) -> bool {
        self.deb_package
    }

    pub fn data_files(&self) -> &[String] {
        &self.data_files
    }

    pub fn codacy_id(&self) -> Option<&str> {
        self.codacy_id.as_deref()
    }

    pub fn google_analytics_tracking_id(&self) -> Option<&str> {
        self.google_analytics_tracking_id.as_deref()
    }

    pub fn paypal_donate_button_id(&self) -> Option<&str> {
        self.paypal_donate_button_id.as_deref()
    }

    /// Copyright range, e.g. `2011-2026`
    pub fn copyright_years(&self) -> &str {
        &self.copyright_years
    }

    pub fn google_analytics_snipplet(&self) -> Option<&str> {
        self.google_analytics_snipplet.as_deref()
    }

    pub fn paypal_donate_button_snipplet(&self) -> Option<&str> {
        self.paypal_donate_button_snipplet.as_deref()
    }
}
