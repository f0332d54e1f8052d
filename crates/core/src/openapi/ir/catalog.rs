//! Named type declarations from the reusable-schema table.

use indexmap::IndexMap;

use super::diagnostics::Diagnostics;
use super::naming::sanitize_type_name;
use super::resolve::SchemaResolver;
use super::types::{TsLiteral, TsType, TsTypeDef, TypeDefKind};
use super::utils::{enum_value_to_key, enum_value_to_literal, quote_if_needed};
use crate::openapi::schema::{SchemaKind, SchemaNode, SchemaTable};

/// Build one declaration per schema entry, in table order.
///
/// Two entries whose names sanitize to the same identifier keep the first
/// position and the last body.
pub fn build_type_catalog(schemas: &SchemaTable, diag: &mut Diagnostics) -> Vec<TsTypeDef> {
    let resolver = SchemaResolver::new(schemas);
    let mut catalog: IndexMap<String, TsTypeDef> = IndexMap::new();

    for (raw_name, node) in schemas {
        let name = sanitize_type_name(raw_name);
        diag.set_scope(&name);
        let kind = declaration_kind(&resolver, node, diag);
        let def = TsTypeDef {
            name: name.clone(),
            kind,
            description: node.description.clone().filter(|d| !d.trim().is_empty()),
        };
        if catalog.insert(name.clone(), def).is_some() {
            diag.warn(format!(
                "schema '{raw_name}' redeclares type '{name}'; the later declaration wins"
            ));
        }
    }

    catalog.into_values().collect()
}

fn declaration_kind(
    resolver: &SchemaResolver<'_>,
    node: &SchemaNode,
    diag: &mut Diagnostics,
) -> TypeDefKind {
    match &node.kind {
        SchemaKind::Object {
            properties: Some(props),
            required,
            ..
        } => TypeDefKind::Interface {
            properties: resolver.resolve_props(props, required, diag),
        },
        SchemaKind::Array(items) => TypeDefKind::TypeAlias {
            ty: items
                .as_deref()
                .map_or_else(TsType::any, |element| resolver.resolve(element, diag)),
        },
        SchemaKind::Primitive(_) | SchemaKind::Any if !node.enum_values.is_empty() => {
            TypeDefKind::Enum {
                members: enum_members(node, diag),
            }
        }
        _ => TypeDefKind::TypeAlias {
            ty: resolver.resolve(node, diag),
        },
    }
}

fn enum_members(node: &SchemaNode, diag: &mut Diagnostics) -> Vec<(String, TsLiteral)> {
    let mut members: Vec<(String, TsLiteral)> = Vec::with_capacity(node.enum_values.len());
    for (i, value) in node.enum_values.iter().enumerate() {
        let key = match node.enum_names.get(i).map(|n| n.trim()) {
            Some(hint) if !hint.is_empty() => quote_if_needed(hint),
            _ => enum_value_to_key(value),
        };
        if members.iter().any(|(existing, _)| *existing == key) {
            diag.warn(format!("enum member '{key}' is declared twice; keeping the first"));
            continue;
        }
        members.push((key, enum_value_to_literal(value)));
    }
    members
}
