//! Schema to TypeScript type resolution.
//!
//! `SchemaResolver::resolve` maps a parsed [`SchemaNode`] to a [`TsType`]. It
//! never fails: anything unrecognized becomes `any`. The optional schema table
//! lets references know whether their target is an array schema, in which case
//! the array suffix is placed at the reference point and never doubled.

use indexmap::IndexMap;

use super::diagnostics::Diagnostics;
use super::naming::sanitize_type_name;
use super::types::{TsLiteral, TsPrimitive, TsProp, TsType};
use crate::openapi::schema::{Combinator, PrimitiveKind, SchemaKind, SchemaNode, SchemaTable};
use crate::openapi::spec::EnumValue;

/// Last path segment of a `$ref`: `#/components/schemas/User` -> `User`.
pub fn ref_name(ref_path: &str) -> &str {
    ref_path.rsplit('/').next().unwrap_or(ref_path)
}

/// Resolves schema nodes, optionally against the document's schema table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaResolver<'a> {
    schemas: Option<&'a SchemaTable>,
}

impl<'a> SchemaResolver<'a> {
    /// Resolver that can look up referenced schemas.
    pub fn new(schemas: &'a SchemaTable) -> Self {
        Self {
            schemas: Some(schemas),
        }
    }

    /// Resolver without a schema table.
    pub fn without_context() -> Self {
        Self { schemas: None }
    }

    /// Resolve a node to its type expression.
    pub fn resolve(&self, node: &SchemaNode, diag: &mut Diagnostics) -> TsType {
        let base = match &node.kind {
            SchemaKind::Reference(path) => self.resolve_reference(path, diag),
            SchemaKind::Combinator {
                op: Combinator::AllOf,
                members,
            } => self.resolve_all_of(members, diag),
            SchemaKind::Combinator { members, .. } => self.resolve_union(members, diag),
            SchemaKind::Array(items) => self.resolve_array(items.as_deref(), diag),
            SchemaKind::Object {
                properties,
                required,
                additional,
            } => match properties {
                Some(props) => TsType::Object(self.resolve_props(props, required, diag)),
                None => TsType::string_record(
                    additional
                        .as_deref()
                        .map_or_else(TsType::any, |a| self.resolve(a, diag)),
                ),
            },
            SchemaKind::Primitive(kind) => resolve_primitive(kind, &node.enum_values),
            SchemaKind::Any => TsType::any(),
        };

        if node.nullable { base.or_null() } else { base }
    }

    /// Resolve a property: optional properties drop their `null` union member.
    pub fn resolve_property(
        &self,
        node: &SchemaNode,
        required: bool,
        diag: &mut Diagnostics,
    ) -> TsType {
        let ty = self.resolve(node, diag);
        if required { ty } else { ty.without_null() }
    }

    /// Resolve an ordered property map into object members.
    pub fn resolve_props(
        &self,
        props: &IndexMap<String, SchemaNode>,
        required: &[String],
        diag: &mut Diagnostics,
    ) -> Vec<TsProp> {
        props
            .iter()
            .map(|(name, node)| {
                let is_required = required.contains(name);
                TsProp {
                    name: name.clone(),
                    ty: self.resolve_property(node, is_required, diag),
                    optional: !is_required,
                    description: node.description.clone(),
                }
            })
            .collect()
    }

    /// Look up the schema a reference points at.
    pub fn lookup(&self, ref_path: &str) -> Option<&'a SchemaNode> {
        self.schemas?.get(ref_name(ref_path))
    }

    fn resolve_reference(&self, ref_path: &str, diag: &mut Diagnostics) -> TsType {
        let name = sanitize_type_name(ref_name(ref_path));
        match self.lookup(ref_path) {
            Some(target) if target.is_array() => TsType::Array(Box::new(TsType::Ref(name))),
            Some(_) => TsType::Ref(name),
            None => {
                if self.schemas.is_some() {
                    diag.warn(format!("reference '{ref_path}' has no matching schema"));
                }
                TsType::Ref(name)
            }
        }
    }

    fn resolve_array(&self, items: Option<&SchemaNode>, diag: &mut Diagnostics) -> TsType {
        let Some(items) = items else {
            return TsType::Array(Box::new(TsType::any()));
        };
        let element = self.resolve(items, diag);
        if let SchemaKind::Reference(path) = &items.kind
            && self.lookup(path).is_some_and(SchemaNode::is_array)
        {
            return element;
        }
        TsType::Array(Box::new(element))
    }

    /// `allOf: [ref(Wrapper), { properties: { data: T } }]` reads as `Wrapper<T>`.
    fn resolve_all_of(&self, members: &[SchemaNode], diag: &mut Diagnostics) -> TsType {
        let wrapper = members.iter().find_map(|m| match &m.kind {
            SchemaKind::Reference(path) => Some(path.as_str()),
            _ => None,
        });
        let payload = members
            .iter()
            .find(|m| !matches!(m.kind, SchemaKind::Reference(_)));

        if let (Some(wrapper), Some(payload)) = (wrapper, payload) {
            let name = sanitize_type_name(ref_name(wrapper));
            if let SchemaKind::Object {
                properties: Some(props),
                required,
                ..
            } = &payload.kind
            {
                let arg = match props.len() {
                    0 => return TsType::Ref(name),
                    1 => props
                        .values()
                        .next()
                        .map_or_else(TsType::any, |node| self.resolve(node, diag)),
                    _ => TsType::Object(self.resolve_props(props, required, diag)),
                };
                return TsType::Generic {
                    name,
                    args: vec![arg],
                };
            }
            return TsType::Ref(name);
        }

        if members.len() > 1 {
            diag.info("allOf is not a wrapper pattern; using its first resolvable member");
        }
        members
            .iter()
            .map(|m| self.resolve(m, diag))
            .find(|t| !t.is_any())
            .unwrap_or_else(TsType::any)
    }

    fn resolve_union(&self, members: &[SchemaNode], diag: &mut Diagnostics) -> TsType {
        let mut resolved = Vec::with_capacity(members.len());
        for member in members {
            let ty = self.resolve(member, diag);
            if ty.is_any() {
                diag.info("union member resolves to any; the union collapses to any");
                return TsType::any();
            }
            resolved.push(ty);
        }
        TsType::union(resolved)
    }
}

fn resolve_primitive(kind: &PrimitiveKind, enum_values: &[EnumValue]) -> TsType {
    match kind {
        PrimitiveKind::Integer | PrimitiveKind::Number => TsType::Primitive(TsPrimitive::Number),
        PrimitiveKind::String if !enum_values.is_empty() => {
            TsType::union(enum_values.iter().map(|v| match v {
                EnumValue::Null => TsType::null(),
                other => TsType::Literal(TsLiteral::String(other.as_text())),
            }))
        }
        PrimitiveKind::String => TsType::Primitive(TsPrimitive::String),
        PrimitiveKind::Boolean => TsType::Primitive(TsPrimitive::Boolean),
        PrimitiveKind::File => TsType::Primitive(TsPrimitive::File),
        PrimitiveKind::Null => TsType::null(),
        PrimitiveKind::Other(_) => TsType::any(),
    }
}
