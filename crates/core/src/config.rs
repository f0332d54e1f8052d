//! `swagen.config.json` reading, validation and the `init` template.
//!
//! The file uses camelCase keys. Every key except `input` and `output` has
//! a default, so a minimal file is just:
//!
//! ```json
//! { "input": "./openapi.json", "output": "./src/api" }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::openapi::ir::{
    EmitOptions, GenerationMode, NamingOptions, RequestStyle, TagFileNaming,
};

/// File name looked up when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "swagen.config.json";

const SUPPORTED_GENERATORS: &[&str] = &["typescript", "javascript"];
const SUPPORTED_REQUEST_STYLES: &[&str] = &["generic", "method"];
const SUPPORTED_FILE_NAMINGS: &[&str] = &["tag", "kebab-case", "camelCase"];

/// Raw configuration file, as written on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigFile {
    /// Path or `http(s)://` URL of the API document.
    pub input: String,
    /// Output directory.
    pub output: String,
    /// `typescript` or `javascript`.
    pub generator: String,
    /// One unit per tag instead of a single `api` unit.
    pub group_by_tags: bool,
    /// Replace the whole output directory.
    pub overwrite: bool,
    /// Prepended to every request URL.
    pub prefix: String,
    /// `generic` or `method`.
    pub request_style: String,
    /// Tag directory settings.
    pub tag_grouping: TagGrouping,
    /// Per-artifact toggles.
    pub options: ArtifactOptions,
    /// First line of every operation unit.
    pub import_template: String,
    /// Formatter command run on the output directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lint: Option<String>,
    /// Prefixes stripped from operation names.
    pub method_name_ignore_prefix: Vec<String>,
    /// Keep the verb suffix on derived operation names.
    pub add_method_suffix: bool,
}

/// `tagGrouping` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagGrouping {
    /// `tag`, `kebab-case` or `camelCase`.
    pub file_naming: String,
}

impl Default for TagGrouping {
    fn default() -> Self {
        Self {
            file_naming: "camelCase".to_string(),
        }
    }
}

/// `options` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ArtifactOptions {
    /// Emit `types.ts`.
    pub generate_models: bool,
    /// Emit operation units.
    pub generate_apis: bool,
    /// Emit the barrel unit.
    pub generate_index: bool,
    /// Emit comment blocks above callables.
    pub add_comments: bool,
}

impl Default for ArtifactOptions {
    fn default() -> Self {
        Self {
            generate_models: true,
            generate_apis: true,
            generate_index: true,
            add_comments: true,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        let emit = EmitOptions::default();
        Self {
            input: String::new(),
            output: String::new(),
            generator: "typescript".to_string(),
            group_by_tags: true,
            overwrite: true,
            prefix: String::new(),
            request_style: "generic".to_string(),
            tag_grouping: TagGrouping::default(),
            options: ArtifactOptions::default(),
            import_template: emit.import_template,
            lint: None,
            method_name_ignore_prefix: Vec::new(),
            add_method_suffix: true,
        }
    }
}

/// Validated settings for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Path or URL of the API document.
    pub input: String,
    /// Output directory.
    pub output: PathBuf,
    /// Replace the whole output directory.
    pub overwrite: bool,
    /// Formatter command, if any.
    pub lint: Option<String>,
    /// Operation naming.
    pub naming: NamingOptions,
    /// Emission settings.
    pub emit: EmitOptions,
}

impl GeneratorConfig {
    /// Settings for an explicit input and output with every other key at its default.
    pub fn new(input: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        let file = ConfigFile::default();
        Self {
            input: input.into(),
            output: output.into(),
            overwrite: file.overwrite,
            lint: None,
            naming: NamingOptions {
                ignore_prefixes: Vec::new(),
                add_method_suffix: file.add_method_suffix,
            },
            emit: EmitOptions::default(),
        }
    }
}

/// Read and deserialize a configuration file.
pub fn load(path: &Path) -> Result<ConfigFile> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let config: ConfigFile = serde_json::from_str(&text).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), input = %config.input, "Loaded config file.");
    Ok(config)
}

impl ConfigFile {
    /// Default file written by `swagen init`.
    pub fn template() -> Self {
        Self {
            input: "http://localhost:3000/admin/docs/json".to_string(),
            output: "./src/api".to_string(),
            lint: Some("prettier --write".to_string()),
            ..Self::default()
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map(|mut text| {
                text.push('\n');
                text
            })
            .map_err(|e| Error::Config {
                path: PathBuf::from(DEFAULT_CONFIG_FILE),
                message: e.to_string(),
            })
    }

    /// Check every field and convert into [`GeneratorConfig`].
    ///
    /// All problems are reported together.
    pub fn validate(&self) -> Result<GeneratorConfig> {
        let mut problems = Vec::new();

        if self.input.trim().is_empty() {
            problems.push("input is required".to_string());
        }
        if self.output.trim().is_empty() {
            problems.push("output is required".to_string());
        }
        let mode = match self.generator.as_str() {
            "typescript" => Some(GenerationMode::Typed),
            "javascript" => Some(GenerationMode::Untyped),
            other => {
                problems.push(unsupported("generator", other, SUPPORTED_GENERATORS));
                None
            }
        };
        let request_style = match self.request_style.as_str() {
            "generic" => Some(RequestStyle::Generic),
            "method" => Some(RequestStyle::Method),
            other => {
                problems.push(unsupported("requestStyle", other, SUPPORTED_REQUEST_STYLES));
                None
            }
        };
        let file_naming = match self.tag_grouping.file_naming.as_str() {
            "tag" => Some(TagFileNaming::Tag),
            "kebab-case" => Some(TagFileNaming::KebabCase),
            "camelCase" => Some(TagFileNaming::CamelCase),
            other => {
                problems.push(unsupported(
                    "tagGrouping.fileNaming",
                    other,
                    SUPPORTED_FILE_NAMINGS,
                ));
                None
            }
        };

        let (Some(mode), Some(request_style), Some(file_naming)) =
            (mode, request_style, file_naming)
        else {
            return Err(Error::InvalidConfig(problems));
        };
        if !problems.is_empty() {
            return Err(Error::InvalidConfig(problems));
        }

        Ok(GeneratorConfig {
            input: self.input.trim().to_string(),
            output: PathBuf::from(self.output.trim()),
            overwrite: self.overwrite,
            lint: self
                .lint
                .as_deref()
                .map(str::trim)
                .filter(|cmd| !cmd.is_empty())
                .map(str::to_string),
            naming: NamingOptions {
                ignore_prefixes: self.method_name_ignore_prefix.clone(),
                add_method_suffix: self.add_method_suffix,
            },
            emit: EmitOptions {
                mode,
                group_by_tags: self.group_by_tags,
                request_style,
                file_naming,
                prefix: self.prefix.clone(),
                import_template: self.import_template.clone(),
                generate_models: self.options.generate_models,
                generate_apis: self.options.generate_apis,
                generate_index: self.options.generate_index,
                add_comments: self.options.add_comments,
            },
        })
    }
}

fn unsupported(key: &str, value: &str, supported: &[&str]) -> String {
    format!(
        "unsupported {key} '{value}' (expected one of: {})",
        supported.join(", ")
    )
}
