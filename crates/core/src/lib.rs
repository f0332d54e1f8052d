//! Swagger 2.0 / OpenAPI 3.x to TypeScript client generator.
//!
//! [`generate`] runs the whole pipeline for one [`GeneratorConfig`]:
//! load the document, normalize it, render every artifact in memory,
//! write them out and optionally run a formatter over the result.

pub mod config;
pub mod error;
pub mod loader;
pub mod openapi;
pub mod output;

use std::path::PathBuf;

use tracing::{debug, info};

pub use config::{ConfigFile, DEFAULT_CONFIG_FILE, GeneratorConfig};
pub use error::{Error, Result};
pub use openapi::ir::{Diagnostic, Diagnostics, Severity};

/// Outcome of a completed generation run.
#[derive(Debug)]
pub struct GenerationReport {
    /// Directory the files were written to.
    pub output: PathBuf,
    /// Written files, relative to `output`.
    pub files: Vec<PathBuf>,
    /// Number of operations found in the document.
    pub operations: usize,
    /// Number of named type declarations.
    pub types: usize,
    /// Everything noted while generating.
    pub diagnostics: Diagnostics,
    /// Formatter result, when one was configured.
    pub formatted: Option<bool>,
}

/// Summary of a document, without generating anything.
#[derive(Debug)]
pub struct DocumentSummary {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
    /// Base URL, when the document declares one.
    pub base_url: Option<String>,
    /// Tags in first-seen order.
    pub tags: Vec<String>,
    /// Number of operations.
    pub operations: usize,
    /// Number of named type declarations.
    pub types: usize,
    /// Everything noted while normalizing.
    pub diagnostics: Diagnostics,
}

/// Load and parse the document named by `locator`.
pub async fn load_api_document(locator: &str) -> Result<openapi::spec::ApiDocument> {
    let value = loader::load_document(locator).await?;
    openapi::parse_document(value, locator)
}

/// Generate the client described by `config`.
pub async fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    let doc = load_api_document(&config.input).await?;
    let rendered = openapi::render(&doc, &config.naming, &config.emit);
    rendered.diagnostics.log();
    debug!(
        artifacts = rendered.artifacts.len(),
        warnings = rendered.diagnostics.warning_count(),
        "Rendered API client."
    );

    output::write_artifacts(&config.output, &rendered.artifacts, config.overwrite)?;
    info!(
        output = %config.output.display(),
        files = rendered.artifacts.len(),
        "Wrote API client."
    );

    let formatted = match &config.lint {
        Some(command) => Some(output::run_formatter(command, &config.output).await),
        None => None,
    };

    Ok(GenerationReport {
        output: config.output.clone(),
        files: rendered.artifacts.into_iter().map(|a| a.path).collect(),
        operations: rendered.api.operations.len(),
        types: rendered.api.types.len(),
        diagnostics: rendered.diagnostics,
        formatted,
    })
}

/// Load and normalize a document, returning counts and tags.
pub async fn summarize(config: &GeneratorConfig) -> Result<DocumentSummary> {
    let doc = load_api_document(&config.input).await?;
    let mut diagnostics = Diagnostics::new();
    let api = openapi::ir::normalize_document(&doc, &config.naming, &mut diagnostics);
    Ok(DocumentSummary {
        title: api.info.title,
        version: api.info.version,
        base_url: api.info.base_url,
        tags: api.tags,
        operations: api.operations.len(),
        types: api.types.len(),
        diagnostics,
    })
}
