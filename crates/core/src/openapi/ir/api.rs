//! API-level intermediate representation.
//!
//! These types are independent of the document layout: every Swagger 2.0 /
//! OpenAPI 3.x difference is resolved during normalization, so codegen only
//! ever sees this model.

use super::types::{TsType, TsTypeDef};
use crate::openapi::schema::SchemaNode;

/// HTTP method, in the order operations are read from a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// PATCH
    Patch,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
}

impl HttpMethod {
    /// All recognized methods in extraction order.
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    /// Lower-case method, used for `request.get(...)` call forms.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
        }
    }

    /// Capitalized method appended to derived operation names.
    pub fn suffix(self) -> &'static str {
        match self {
            HttpMethod::Get => "Get",
            HttpMethod::Post => "Post",
            HttpMethod::Put => "Put",
            HttpMethod::Delete => "Delete",
            HttpMethod::Patch => "Patch",
            HttpMethod::Head => "Head",
            HttpMethod::Options => "Options",
        }
    }

    /// Upper-case method, used for `method: 'GET'` in dispatch objects.
    pub fn as_upper(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

/// Where a parameter lives in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Path placeholder.
    Path,
    /// Query string.
    Query,
    /// Request header.
    Header,
    /// Swagger 2.0 form field.
    FormData,
    /// Request body.
    Body,
}

impl ParamLocation {
    /// Parse an `in` value. Cookie and unknown locations are not modeled.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "path" => Some(ParamLocation::Path),
            "query" => Some(ParamLocation::Query),
            "header" => Some(ParamLocation::Header),
            "formData" => Some(ParamLocation::FormData),
            "body" => Some(ParamLocation::Body),
            _ => None,
        }
    }
}

/// A normalized request parameter.
#[derive(Debug, Clone)]
pub struct ParamIR {
    /// Wire name.
    pub name: String,
    /// Location.
    pub location: ParamLocation,
    /// Required flag. Path parameters are always required.
    pub required: bool,
    /// Resolved type.
    pub ty: TsType,
    /// Human description.
    pub description: Option<String>,
    /// Parsed schema, kept for later lookups.
    pub schema: Option<SchemaNode>,
}

/// A normalized operation.
#[derive(Debug, Clone)]
pub struct OperationIR {
    /// Derived operation name (before camel-casing for emission).
    pub name: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Path template with `{param}` placeholders.
    pub path: String,
    /// Summary or description.
    pub description: Option<String>,
    /// Deprecation flag.
    pub deprecated: bool,
    /// Tags, possibly empty.
    pub tags: Vec<String>,
    /// Path, query, header and form parameters in merged order.
    pub params: Vec<ParamIR>,
    /// Request body parameter.
    pub body: Option<ParamIR>,
    /// Resolved response type.
    pub response_type: TsType,
}

impl OperationIR {
    /// Declared request-body type.
    pub fn request_body_type(&self) -> Option<&TsType> {
        self.body.as_ref().map(|b| &b.ty)
    }

    /// Parameters at the given location.
    pub fn params_in(&self, location: ParamLocation) -> impl Iterator<Item = &ParamIR> {
        self.params.iter().filter(move |p| p.location == location)
    }
}

/// Document metadata surfaced by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiInfo {
    /// API title.
    pub title: String,
    /// API description.
    pub description: Option<String>,
    /// API version.
    pub version: String,
    /// Base URL derived from host/schemes/basePath or servers.
    pub base_url: Option<String>,
}

/// Complete API IR - the normalized representation of a document.
#[derive(Debug, Clone, Default)]
pub struct ApiIR {
    /// Document metadata.
    pub info: ApiInfo,
    /// Declared and used tags, first-seen order.
    pub tags: Vec<String>,
    /// Operations in document order.
    pub operations: Vec<OperationIR>,
    /// Named type declarations.
    pub types: Vec<TsTypeDef>,
}
