//! Normalization from an API document to the API IR.
//!
//! This module handles all the document-layout logic:
//! - merging `definitions` and `components.schemas` into one schema table
//! - parameter merging (operation-level overrides path-level)
//! - request body and response schema selection for both layouts
//! - operation naming and type resolution

use indexmap::IndexMap;

use crate::openapi::schema::{SchemaNode, SchemaTable, merge_schema_tables};
use crate::openapi::spec::{ApiDocument, MediaType, Operation, Parameter, PathItem, Schema};

use super::api::{ApiIR, ApiInfo, HttpMethod, OperationIR, ParamIR, ParamLocation};
use super::catalog::build_type_catalog;
use super::diagnostics::Diagnostics;
use super::naming::{NamingOptions, operation_name};
use super::resolve::SchemaResolver;
use super::types::TsType;

/// Response codes consulted for the response type, in priority order.
const RESPONSE_CODES: [&str; 3] = ["200", "201", "default"];

/// Normalize a document into API IR.
pub fn normalize_document(
    doc: &ApiDocument,
    naming: &NamingOptions,
    diag: &mut Diagnostics,
) -> ApiIR {
    let schemas = schema_table(doc, diag);
    let types = build_type_catalog(&schemas, diag);
    let resolver = SchemaResolver::new(&schemas);

    let mut operations = Vec::new();
    for (path, item) in &doc.paths {
        for (method, op) in path_operations(item) {
            diag.set_scope(format!("{} {path}", method.as_upper()));
            operations.push(normalize_operation(
                path,
                method,
                op,
                &item.parameters,
                &resolver,
                naming,
                diag,
            ));
        }
    }

    ApiIR {
        info: api_info(doc),
        tags: collect_tags(doc, &operations),
        operations,
        types,
    }
}

/// Merged reusable-schema table: `definitions` first, then `components.schemas`.
pub fn schema_table(doc: &ApiDocument, diag: &mut Diagnostics) -> SchemaTable {
    let components = doc.components.as_ref().and_then(|c| c.schemas.as_ref());
    let (table, replaced) = merge_schema_tables(doc.definitions.iter().chain(components));
    diag.set_scope("schemas");
    for name in replaced {
        diag.warn(format!(
            "schema '{name}' is declared in definitions and components.schemas; using components.schemas"
        ));
    }
    table
}

fn path_operations(item: &PathItem) -> impl Iterator<Item = (HttpMethod, &Operation)> {
    HttpMethod::ALL.into_iter().filter_map(move |method| {
        let op = match method {
            HttpMethod::Get => item.get.as_ref(),
            HttpMethod::Post => item.post.as_ref(),
            HttpMethod::Put => item.put.as_ref(),
            HttpMethod::Delete => item.delete.as_ref(),
            HttpMethod::Patch => item.patch.as_ref(),
            HttpMethod::Head => item.head.as_ref(),
            HttpMethod::Options => item.options.as_ref(),
        };
        op.map(|op| (method, op))
    })
}

fn normalize_operation(
    path: &str,
    method: HttpMethod,
    op: &Operation,
    path_params: &[Parameter],
    resolver: &SchemaResolver<'_>,
    naming: &NamingOptions,
    diag: &mut Diagnostics,
) -> OperationIR {
    let name = operation_name(op.operation_id.as_deref(), method, path, naming);

    let mut params = Vec::new();
    let mut body = None;
    for p in merge_parameters(path_params, &op.parameters, diag) {
        let Some(param) = normalize_param(p, resolver, diag) else {
            continue;
        };
        if param.location != ParamLocation::Body {
            params.push(param);
        } else if body.is_none() {
            body = Some(param);
        } else {
            diag.warn(format!("extra body parameter '{}' ignored", param.name));
        }
    }

    if body.is_none() {
        body = request_body_param(op, resolver, diag);
    }

    OperationIR {
        name,
        method,
        path: path.to_string(),
        description: op.display_description().map(str::to_string),
        deprecated: op.deprecated,
        tags: op.tags.clone(),
        params,
        body,
        response_type: response_type(op, resolver, diag),
    }
}

/// Path-level parameters followed by operation-level ones; an operation-level
/// parameter replaces a path-level one with the same name.
fn merge_parameters<'d>(
    path_level: &'d [Parameter],
    op_level: &'d [Parameter],
    diag: &mut Diagnostics,
) -> Vec<&'d Parameter> {
    let mut merged: Vec<&Parameter> = path_level.iter().collect();
    for p in op_level {
        if let Some(name) = &p.name {
            let before = merged.len();
            merged.retain(|existing| existing.name.as_ref() != Some(name));
            if merged.len() < before {
                diag.info(format!(
                    "operation parameter '{name}' overrides the path-level declaration"
                ));
            }
        }
        merged.push(p);
    }
    merged
}

fn normalize_param(
    p: &Parameter,
    resolver: &SchemaResolver<'_>,
    diag: &mut Diagnostics,
) -> Option<ParamIR> {
    let Some(name) = p.name.as_deref().filter(|n| !n.is_empty()) else {
        match &p.ref_path {
            Some(r) => diag.warn(format!("parameter reference '{r}' is not resolved; skipped")),
            None => diag.warn("parameter without a name skipped"),
        }
        return None;
    };

    let raw_location = p.location.as_deref().unwrap_or_default();
    let Some(location) = ParamLocation::parse(raw_location) else {
        diag.info(format!(
            "parameter '{name}' in '{raw_location}' is not part of the signature; skipped"
        ));
        return None;
    };

    let schema = SchemaNode::from_parameter(p);
    Some(ParamIR {
        name: name.to_string(),
        location,
        required: p.required || location == ParamLocation::Path,
        ty: resolver.resolve(&schema, diag),
        description: p.description.clone(),
        schema: Some(schema),
    })
}

/// Synthesize the `body` parameter from a JSON request body.
fn request_body_param(
    op: &Operation,
    resolver: &SchemaResolver<'_>,
    diag: &mut Diagnostics,
) -> Option<ParamIR> {
    let request_body = op.request_body.as_ref()?;
    let Some(schema) = json_schema(&request_body.content) else {
        if !request_body.content.is_empty() {
            diag.info("request body has no JSON media type; no body parameter generated");
        }
        return None;
    };
    let schema = SchemaNode::parse(schema);
    Some(ParamIR {
        name: "body".to_string(),
        location: ParamLocation::Body,
        required: request_body.required,
        ty: resolver.resolve(&schema, diag),
        description: request_body.description.clone(),
        schema: Some(schema),
    })
}

fn response_type(op: &Operation, resolver: &SchemaResolver<'_>, diag: &mut Diagnostics) -> TsType {
    let Some(response) = RESPONSE_CODES.iter().find_map(|code| op.responses.get(*code)) else {
        return TsType::any();
    };
    json_schema(&response.content)
        .or(response.schema.as_ref())
        .map_or_else(TsType::any, |schema| {
            resolver.resolve(&SchemaNode::parse(schema), diag)
        })
}

/// Schema of the preferred JSON media type: `application/json`, then any
/// `+json` or `*/*` entry.
fn json_schema(content: &IndexMap<String, MediaType>) -> Option<&Schema> {
    content
        .get("application/json")
        .and_then(|m| m.schema.as_ref())
        .or_else(|| {
            content
                .iter()
                .filter(|(media, _)| media.ends_with("+json") || *media == "*/*")
                .find_map(|(_, m)| m.schema.as_ref())
        })
}

fn api_info(doc: &ApiDocument) -> ApiInfo {
    ApiInfo {
        title: doc.info.title.clone(),
        description: doc.info.description.clone(),
        version: doc.info.version.clone(),
        base_url: base_url(doc),
    }
}

fn base_url(doc: &ApiDocument) -> Option<String> {
    if let Some(host) = doc.host.as_deref().filter(|h| !h.is_empty()) {
        let scheme = doc.schemes.first().map_or("https", String::as_str);
        let base_path = doc.base_path.as_deref().unwrap_or_default();
        return Some(format!("{scheme}://{host}{base_path}"));
    }
    doc.servers.first().map(|s| s.url.clone())
}

fn collect_tags(doc: &ApiDocument, operations: &[OperationIR]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let declared = doc.tags.iter().map(|t| &t.name);
    for tag in declared.chain(operations.iter().flat_map(|op| &op.tags)) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}
