//! API document structs for serde deserialization.
//!
//! Covers both the Swagger 2.0 layout (`definitions`, flat parameters, direct
//! response schemas) and the OpenAPI 3.x layout (`components.schemas`,
//! `requestBody.content`, `responses[...].content`). Unknown keys are ignored.

use indexmap::IndexMap;
use serde::Deserialize;

/// Root API document.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDocument {
    /// Swagger 2.0 version marker.
    pub swagger: Option<String>,
    /// OpenAPI 3.x version marker.
    pub openapi: Option<String>,
    /// Document metadata.
    #[serde(default)]
    pub info: Info,
    /// Swagger 2.0 host.
    pub host: Option<String>,
    /// Swagger 2.0 base path.
    pub base_path: Option<String>,
    /// Swagger 2.0 schemes.
    #[serde(default)]
    pub schemes: Vec<String>,
    /// OpenAPI 3.x servers.
    #[serde(default)]
    pub servers: Vec<Server>,
    /// Path table in document order.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Swagger 2.0 reusable schemas.
    pub definitions: Option<IndexMap<String, Schema>>,
    /// OpenAPI 3.x components.
    pub components: Option<Components>,
    /// Declared tags.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Document metadata.
#[derive(Debug, Default, Deserialize)]
pub struct Info {
    /// API title.
    #[serde(default)]
    pub title: String,
    /// API description.
    pub description: Option<String>,
    /// API version.
    #[serde(default)]
    pub version: String,
}

/// OpenAPI 3.x server entry.
#[derive(Debug, Deserialize)]
pub struct Server {
    /// Server URL.
    pub url: String,
}

/// Declared tag.
#[derive(Debug, Deserialize)]
pub struct Tag {
    /// Tag name.
    pub name: String,
    /// Tag description.
    pub description: Option<String>,
}

/// Components section containing reusable schemas.
#[derive(Debug, Default, Deserialize)]
pub struct Components {
    /// Reusable schemas.
    pub schemas: Option<IndexMap<String, Schema>>,
}

/// A path item containing operations for different HTTP methods.
#[derive(Debug, Default, Deserialize)]
pub struct PathItem {
    /// GET operation.
    pub get: Option<Operation>,
    /// POST operation.
    pub post: Option<Operation>,
    /// PUT operation.
    pub put: Option<Operation>,
    /// DELETE operation.
    pub delete: Option<Operation>,
    /// PATCH operation.
    pub patch: Option<Operation>,
    /// HEAD operation.
    pub head: Option<Operation>,
    /// OPTIONS operation.
    pub options: Option<Operation>,
    /// Path-level parameters shared by all operations.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// An API operation (endpoint).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Tags used for grouping.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Short summary.
    pub summary: Option<String>,
    /// Long description.
    pub description: Option<String>,
    /// Explicit operation identifier.
    pub operation_id: Option<String>,
    /// Operation-level parameters.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// OpenAPI 3.x request body.
    pub request_body: Option<RequestBody>,
    /// Responses keyed by status code.
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
    /// Deprecation flag.
    #[serde(default)]
    pub deprecated: bool,
}

/// A parameter (path, query, header, formData, or Swagger 2.0 body).
///
/// Name and location are optional so that `$ref` parameters deserialize
/// instead of failing the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: Option<String>,
    /// Parameter location.
    #[serde(rename = "in")]
    pub location: Option<String>,
    /// Human description.
    pub description: Option<String>,
    /// Required flag.
    #[serde(default)]
    pub required: bool,
    /// OpenAPI 3.x or Swagger 2.0 body schema.
    pub schema: Option<Schema>,
    /// Swagger 2.0 flat type.
    #[serde(rename = "type")]
    pub param_type: Option<String>,
    /// Swagger 2.0 flat array items.
    pub items: Option<Box<Schema>>,
    /// Swagger 2.0 flat enum.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<EnumValue>>,
    /// Unresolved reference.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,
}

/// A request body definition.
#[derive(Debug, Default, Deserialize)]
pub struct RequestBody {
    /// Human description.
    pub description: Option<String>,
    /// Required flag.
    #[serde(default)]
    pub required: bool,
    /// Media-typed content.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// A response definition.
#[derive(Debug, Default, Deserialize)]
pub struct Response {
    /// Human description.
    pub description: Option<String>,
    /// Swagger 2.0 direct schema.
    pub schema: Option<Schema>,
    /// OpenAPI 3.x media-typed content.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// Media type content (e.g., application/json).
#[derive(Debug, Default, Deserialize)]
pub struct MediaType {
    /// Payload schema.
    pub schema: Option<Schema>,
}

/// JSON Schema fragment used by both document layouts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// The type of the schema (string, number, integer, boolean, object, array, file, null).
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,

    /// Reference to another schema.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    /// Human description.
    pub description: Option<String>,

    /// Properties for object types, in document order.
    pub properties: Option<IndexMap<String, Schema>>,

    /// Required property names for object types.
    #[serde(default)]
    pub required: Vec<String>,

    /// Item schema for array types.
    pub items: Option<Box<Schema>>,

    /// Enum values (can be strings, integers, floats, booleans, or null).
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<EnumValue>>,

    /// Union type (any of these schemas).
    pub any_of: Option<Vec<Schema>>,

    /// Union type (exactly one of these schemas).
    pub one_of: Option<Vec<Schema>>,

    /// Composition (all of these schemas combined).
    pub all_of: Option<Vec<Schema>>,

    /// Additional properties for object types (for Record/dict types).
    pub additional_properties: Option<AdditionalProperties>,

    /// OpenAPI 3.0 nullable flag (3.1 uses type arrays instead).
    pub nullable: Option<bool>,

    /// Enum member name hints.
    #[serde(rename = "x-enum-varnames")]
    pub x_enum_varnames: Option<Vec<String>>,

    /// Alternative enum member name hints.
    #[serde(rename = "x-enumNames")]
    pub x_enum_names: Option<Vec<String>>,
}

/// Enum value can be string, integer, float, boolean, or null.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// String literal.
    String(String),
    /// Integer literal.
    Integer(i64),
    /// Floating point literal.
    Float(f64),
    /// Boolean literal.
    Bool(bool),
    /// Null literal.
    Null,
}

impl EnumValue {
    /// Plain text form of the value, without quotes.
    pub fn as_text(&self) -> String {
        match self {
            EnumValue::String(s) => s.clone(),
            EnumValue::Integer(n) => n.to_string(),
            EnumValue::Float(f) => f.to_string(),
            EnumValue::Bool(b) => b.to_string(),
            EnumValue::Null => "null".to_string(),
        }
    }
}

/// Schema type can be a single type or an array of types (for nullable).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    /// `"type": "string"`
    Single(String),
    /// `"type": ["string", "null"]`
    Multiple(Vec<String>),
}

/// Additional properties can be a boolean or a schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `true` / `false`
    Bool(bool),
    /// Typed map values.
    Schema(Box<Schema>),
}

impl ApiDocument {
    /// Build a document from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Operation {
    /// Summary, falling back to the description.
    pub fn display_description(&self) -> Option<&str> {
        let non_blank = |s: &&str| !s.trim().is_empty();
        self.summary
            .as_deref()
            .filter(non_blank)
            .or_else(|| self.description.as_deref().filter(non_blank))
    }
}
