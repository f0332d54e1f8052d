//! Closed schema model.
//!
//! Raw [`Schema`] fragments carry many optional keywords at once. They are
//! parsed here exactly once into a [`SchemaNode`] whose [`SchemaKind`] is chosen
//! by the fixed precedence reference > combinator > array > object >
//! primitive > any. Nullability stays orthogonal to the kind.

use indexmap::IndexMap;

use super::spec::{AdditionalProperties, EnumValue, Parameter, Schema, SchemaType};

/// Reusable schemas keyed by their raw (unsanitized) names.
pub type SchemaTable = IndexMap<String, SchemaNode>;

/// A parsed schema fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// Structural interpretation.
    pub kind: SchemaKind,
    /// `nullable: true` or a `null` entry in a type array.
    pub nullable: bool,
    /// Enumerated literal values, if any.
    pub enum_values: Vec<EnumValue>,
    /// Member name hints from `x-enum-varnames` or `x-enumNames`.
    pub enum_names: Vec<String>,
    /// Human description.
    pub description: Option<String>,
}

/// The one interpretation picked for a schema fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    /// `$ref` to another schema, holding the raw reference path.
    Reference(String),
    /// `allOf` / `anyOf` / `oneOf`.
    Combinator {
        /// Which combinator.
        op: Combinator,
        /// Members in document order.
        members: Vec<SchemaNode>,
    },
    /// Array with an optional element schema.
    Array(Option<Box<SchemaNode>>),
    /// Object shape.
    Object {
        /// Property map, absent for free-form objects.
        properties: Option<IndexMap<String, SchemaNode>>,
        /// Required property names.
        required: Vec<String>,
        /// Typed `additionalProperties`.
        additional: Option<Box<SchemaNode>>,
    },
    /// Scalar type.
    Primitive(PrimitiveKind),
    /// Nothing recognizable.
    Any,
}

/// Schema combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Composition.
    AllOf,
    /// Non-exclusive union.
    AnyOf,
    /// Exclusive union.
    OneOf,
}

/// Scalar schema types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// `string`
    String,
    /// `number`
    Number,
    /// `integer`
    Integer,
    /// `boolean`
    Boolean,
    /// Swagger 2.0 `file`
    File,
    /// `null`
    Null,
    /// Any other type keyword.
    Other(String),
}

impl PrimitiveKind {
    fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "string" => PrimitiveKind::String,
            "number" => PrimitiveKind::Number,
            "integer" => PrimitiveKind::Integer,
            "boolean" => PrimitiveKind::Boolean,
            "file" => PrimitiveKind::File,
            "null" => PrimitiveKind::Null,
            other => PrimitiveKind::Other(other.to_string()),
        }
    }
}

impl SchemaNode {
    /// A node with the given kind and no modifiers.
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            nullable: false,
            enum_values: Vec::new(),
            enum_names: Vec::new(),
            description: None,
        }
    }

    /// Parse a raw schema fragment.
    pub fn parse(schema: &Schema) -> Self {
        let (type_keyword, nullable_from_type, extra_types) = split_type(schema.schema_type.as_ref());

        let kind = if let Some(ref_path) = &schema.ref_path {
            SchemaKind::Reference(ref_path.clone())
        } else if let Some(members) = &schema.all_of {
            combinator(Combinator::AllOf, members)
        } else if let Some(members) = &schema.any_of {
            combinator(Combinator::AnyOf, members)
        } else if let Some(members) = &schema.one_of {
            combinator(Combinator::OneOf, members)
        } else if !extra_types.is_empty() {
            let members = type_keyword
                .into_iter()
                .chain(extra_types)
                .map(|t| SchemaNode::new(SchemaKind::Primitive(PrimitiveKind::from_keyword(&t))))
                .collect();
            SchemaKind::Combinator {
                op: Combinator::AnyOf,
                members,
            }
        } else {
            match type_keyword.as_deref() {
                Some("array") => {
                    SchemaKind::Array(schema.items.as_deref().map(|i| Box::new(Self::parse(i))))
                }
                Some("object") => object_kind(schema),
                None if schema.properties.is_some() || schema.additional_properties.is_some() => {
                    object_kind(schema)
                }
                Some(keyword) => SchemaKind::Primitive(PrimitiveKind::from_keyword(keyword)),
                None => SchemaKind::Any,
            }
        };

        let enum_names = schema
            .x_enum_varnames
            .clone()
            .or_else(|| schema.x_enum_names.clone())
            .unwrap_or_default();

        Self {
            kind,
            nullable: schema.nullable == Some(true) || nullable_from_type,
            enum_values: schema.enum_values.clone().unwrap_or_default(),
            enum_names,
            description: schema.description.clone(),
        }
    }

    /// Schema of a parameter. Swagger 2.0 flat parameters without a `schema`
    /// are read from their own `type`, `items` and `enum` fields, defaulting to
    /// `string`.
    pub fn from_parameter(param: &Parameter) -> Self {
        if let Some(schema) = &param.schema {
            return Self::parse(schema);
        }
        let flat = Schema {
            schema_type: Some(SchemaType::Single(
                param.param_type.clone().unwrap_or_else(|| "string".to_string()),
            )),
            items: param.items.clone(),
            enum_values: param.enum_values.clone(),
            description: param.description.clone(),
            ..Schema::default()
        };
        Self::parse(&flat)
    }

    /// Whether this node is an array shape.
    pub fn is_array(&self) -> bool {
        matches!(self.kind, SchemaKind::Array(_))
    }
}

/// Build the reusable-schema table from both document layouts.
///
/// `definitions` are read first, then `components.schemas`; a later entry with
/// the same name replaces the earlier one in place. Replaced names are returned
/// so the caller can report them.
pub fn merge_schema_tables<'a>(
    tables: impl IntoIterator<Item = &'a IndexMap<String, Schema>>,
) -> (SchemaTable, Vec<String>) {
    let mut merged = SchemaTable::new();
    let mut replaced = Vec::new();
    for table in tables {
        for (name, schema) in table {
            if merged.insert(name.clone(), SchemaNode::parse(schema)).is_some() {
                replaced.push(name.clone());
            }
        }
    }
    (merged, replaced)
}

fn combinator(op: Combinator, members: &[Schema]) -> SchemaKind {
    SchemaKind::Combinator {
        op,
        members: members.iter().map(SchemaNode::parse).collect(),
    }
}

fn object_kind(schema: &Schema) -> SchemaKind {
    let additional = match &schema.additional_properties {
        Some(AdditionalProperties::Schema(s)) => Some(Box::new(SchemaNode::parse(s))),
        _ => None,
    };
    SchemaKind::Object {
        properties: schema.properties.as_ref().map(|props| {
            props
                .iter()
                .map(|(name, s)| (name.clone(), SchemaNode::parse(s)))
                .collect()
        }),
        required: schema.required.clone(),
        additional,
    }
}

/// Split a type keyword into (primary type, has-null, further non-null types).
fn split_type(schema_type: Option<&SchemaType>) -> (Option<String>, bool, Vec<String>) {
    match schema_type {
        None => (None, false, Vec::new()),
        Some(SchemaType::Single(t)) => (Some(t.clone()), false, Vec::new()),
        Some(SchemaType::Multiple(types)) => {
            let has_null = types.iter().any(|t| t == "null");
            let mut non_null = types.iter().filter(|t| *t != "null").cloned();
            match non_null.next() {
                Some(first) => (Some(first), has_null, non_null.collect()),
                None if has_null => (Some("null".to_string()), false, Vec::new()),
                None => (None, false, Vec::new()),
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SchemaNode {
        SchemaNode::parse(&serde_json::from_str::<Schema>(json).unwrap())
    }

    #[test]
    fn test_reference_wins_over_everything() {
        let node = parse(r##"{ "$ref": "#/definitions/User", "type": "object", "allOf": [] }"##);
        assert_eq!(node.kind, SchemaKind::Reference("#/definitions/User".into()));
    }

    #[test]
    fn test_combinator_wins_over_array() {
        let node = parse(r#"{ "type": "array", "anyOf": [{ "type": "string" }] }"#);
        assert!(matches!(
            node.kind,
            SchemaKind::Combinator {
                op: Combinator::AnyOf,
                ..
            }
        ));
    }

    #[test]
    fn test_untyped_properties_are_object() {
        let node = parse(r#"{ "properties": { "a": { "type": "string" } }, "required": ["a"] }"#);
        match node.kind {
            SchemaKind::Object {
                properties,
                required,
                ..
            } => {
                assert!(properties.unwrap().contains_key("a"));
                assert_eq!(required, ["a"]);
            }
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn test_type_array_with_null_sets_nullable() {
        let node = parse(r#"{ "type": ["string", "null"] }"#);
        assert_eq!(node.kind, SchemaKind::Primitive(PrimitiveKind::String));
        assert!(node.nullable);
    }

    #[test]
    fn test_type_array_with_several_types_is_union() {
        let node = parse(r#"{ "type": ["string", "integer"] }"#);
        match node.kind {
            SchemaKind::Combinator { op, members } => {
                assert_eq!(op, Combinator::AnyOf);
                assert_eq!(members.len(), 2);
            }
            other => panic!("expected combinator, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_schema_is_any() {
        assert_eq!(parse("{}").kind, SchemaKind::Any);
    }

    #[test]
    fn test_enum_name_hints() {
        let node = parse(
            r#"{ "type": "integer", "enum": [1, 2], "x-enumNames": ["One", "Two"] }"#,
        );
        assert_eq!(node.enum_names, ["One", "Two"]);
        assert_eq!(node.enum_values.len(), 2);
    }

    #[test]
    fn test_flat_parameter_defaults_to_string() {
        let param = Parameter {
            name: Some("q".into()),
            location: Some("query".into()),
            ..Parameter::default()
        };
        assert_eq!(
            SchemaNode::from_parameter(&param).kind,
            SchemaKind::Primitive(PrimitiveKind::String)
        );
    }

    #[test]
    fn test_flat_array_parameter_keeps_items() {
        let param: Parameter = serde_json::from_str(
            r#"{ "name": "ids", "in": "query", "type": "array", "items": { "type": "integer" } }"#,
        )
        .unwrap();
        let node = SchemaNode::from_parameter(&param);
        assert!(node.is_array());
    }

    #[test]
    fn test_merge_components_replace_definitions_in_place() {
        let definitions: IndexMap<String, Schema> = serde_json::from_str(
            r#"{ "User": { "type": "string" }, "Role": { "type": "string" } }"#,
        )
        .unwrap();
        let components: IndexMap<String, Schema> =
            serde_json::from_str(r#"{ "User": { "type": "integer" } }"#).unwrap();

        let (table, replaced) = merge_schema_tables([&definitions, &components]);

        assert_eq!(replaced, ["User"]);
        assert_eq!(table.keys().collect::<Vec<_>>(), ["User", "Role"]);
        assert_eq!(
            table["User"].kind,
            SchemaKind::Primitive(PrimitiveKind::Integer)
        );
    }
}
