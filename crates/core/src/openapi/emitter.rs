//! TypeScript client emitter for API documents.
//!
//! This module is a thin wrapper around the IR-based code generation.
//! The pipeline is:
//! 1. Parse: JSON value -> ApiDocument
//! 2. Normalize: ApiDocument -> ApiIR (all layout logic resolved)
//! 3. Codegen: ApiIR -> TsModule per output unit
//! 4. Emit: TsModule -> String (via Emit trait)

use crate::error::{Error, Result};
use crate::openapi::ir::{
    ApiIR, Artifact, Diagnostics, EmitOptions, NamingOptions, normalize_document, render_artifacts,
};
use crate::openapi::spec::ApiDocument;

/// Output of one rendering pass.
#[derive(Debug)]
pub struct Rendered {
    /// Normalized API.
    pub api: ApiIR,
    /// Rendered files, relative to the output directory.
    pub artifacts: Vec<Artifact>,
    /// Everything noted while normalizing and emitting.
    pub diagnostics: Diagnostics,
}

/// Render every artifact for a parsed document.
pub fn render(doc: &ApiDocument, naming: &NamingOptions, options: &EmitOptions) -> Rendered {
    let mut diagnostics = Diagnostics::new();
    let api = normalize_document(doc, naming, &mut diagnostics);
    let artifacts = render_artifacts(&api, options, &mut diagnostics);
    Rendered {
        api,
        artifacts,
        diagnostics,
    }
}

/// Read a loaded JSON value as an API document.
pub fn parse_document(value: serde_json::Value, locator: &str) -> Result<ApiDocument> {
    if !value.is_object() {
        return Err(Error::Parse {
            locator: locator.to_string(),
            message: "document root is not an object".to_string(),
        });
    }
    let doc = ApiDocument::from_value(value).map_err(|e| Error::Parse {
        locator: locator.to_string(),
        message: e.to_string(),
    })?;
    if doc.swagger.is_none() && doc.openapi.is_none() {
        tracing::warn!(locator, "document declares neither 'swagger' nor 'openapi'");
    }
    Ok(doc)
}
