#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow accessors without must_use when context is clear

//! # Project Metadata
//!
//! Static project metadata (name, description, keywords, URLs, licensing text)
//! consumed by documentation generators and packaging scripts.
//!
//! ## Overview
//!
//! The crate exposes a single record, [`ProjectMetadata`], built once at
//! startup and passed by reference to whatever reads it. Most fields are
//! literals; the rest are pure functions of fields declared before them:
//!
//! - website URLs interpolated from the GitHub username and project name
//! - description texts with `{field}` placeholders expanded
//! - the copyright year range ending at the current year
//! - optional Google Analytics and PayPal snippets
//!
//! ## Module Organization
//!
//! - [`config`] - The record, its literal inputs and the layered loader
//! - [`helpers`] - Copyright range and snippet helpers
//! - [`constants`] - Built-in values and field names
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use project_metadata::{MetadataLoader, ProjectMetadata};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metadata: ProjectMetadata = MetadataLoader::new().load()?;
//!
//! println!("Copyright (C) {} {}", metadata.copyright_years(), metadata.github_username());
//! for name in ProjectMetadata::field_names() {
//!     println!("{name}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod helpers;
pub mod logging;
mod template;

pub use config::{
    ConfigResult, ConfigurationError, FieldValue, MetadataLoader, MetadataSource, ProjectMetadata,
};
pub use helpers::{get_copyright_years, get_google_analytics, get_paypal};
