//! TypeScript IR types for code generation.
//!
//! This module defines the TypeScript representation the engine builds before
//! printing:
//! - TsType: type expressions (primitives, arrays, unions, objects, generics)
//! - TsTypeDef: named declarations (interface, alias, enum)
//! - TsExpr / TsStmt / TsFunction: the request callables
//! - TsModule: one output unit

use std::collections::BTreeSet;

/// TypeScript type representation
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    /// Primitive types: string, number, boolean, null, any, File
    Primitive(TsPrimitive),
    /// Array type: T[]
    Array(Box<TsType>),
    /// Union type: A | B | C
    Union(Vec<TsType>),
    /// Object type: { foo: string; bar?: number }
    Object(Vec<TsProp>),
    /// Record type: Record<K, V>
    Record {
        /// Key type.
        key: Box<TsType>,
        /// Value type.
        value: Box<TsType>,
    },
    /// Literal type: 'foo', 42, true
    Literal(TsLiteral),
    /// Named type reference
    Ref(String),
    /// Parametrized named type: Container<T>
    Generic {
        /// Container name.
        name: String,
        /// Type arguments.
        args: Vec<TsType>,
    },
}

/// TypeScript primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `null`
    Null,
    /// `any`, the unknown marker
    Any,
    /// `File`, the binary-upload marker
    File,
}

/// Object property definition
#[derive(Debug, Clone, PartialEq)]
pub struct TsProp {
    /// Property key.
    pub name: String,
    /// Property type.
    pub ty: TsType,
    /// `?` marker.
    pub optional: bool,
    /// Doc comment emitted above interface members.
    pub description: Option<String>,
}

/// TypeScript literal values
#[derive(Debug, Clone, PartialEq)]
pub enum TsLiteral {
    /// 'text'
    String(String),
    /// 1.5
    Number(f64),
    /// 42
    Int(i64),
    /// true / false
    Bool(bool),
    /// null
    Null,
}

impl TsType {
    /// The `any` marker.
    pub const fn any() -> Self {
        TsType::Primitive(TsPrimitive::Any)
    }

    /// The `null` marker.
    pub const fn null() -> Self {
        TsType::Primitive(TsPrimitive::Null)
    }

    /// `Record<string, V>`
    pub fn string_record(value: TsType) -> Self {
        TsType::Record {
            key: Box::new(TsType::Primitive(TsPrimitive::String)),
            value: Box::new(value),
        }
    }

    /// Whether this is the `any` marker.
    pub fn is_any(&self) -> bool {
        matches!(self, TsType::Primitive(TsPrimitive::Any))
    }

    /// Whether this is `null` or a union with a top-level `null` member.
    pub fn includes_null(&self) -> bool {
        match self {
            TsType::Primitive(TsPrimitive::Null) => true,
            TsType::Union(members) => members.iter().any(TsType::includes_null),
            _ => false,
        }
    }

    /// Build a union from members, flattening nested unions and dropping
    /// structural duplicates. One member collapses to itself.
    pub fn union(members: impl IntoIterator<Item = TsType>) -> Self {
        let mut flat: Vec<TsType> = Vec::new();
        for member in members {
            let parts = match member {
                TsType::Union(inner) => inner,
                other => vec![other],
            };
            for part in parts {
                if !flat.contains(&part) {
                    flat.push(part);
                }
            }
        }
        match flat.len() {
            0 => TsType::any(),
            1 => flat.remove(0),
            _ => TsType::Union(flat),
        }
    }

    /// `T | null`, unless `T` is `any` or already admits `null`.
    pub fn or_null(self) -> Self {
        if self.is_any() || self.includes_null() {
            self
        } else {
            TsType::union([self, TsType::null()])
        }
    }

    /// Remove top-level `null` union members. An emptied type becomes `any`.
    pub fn without_null(self) -> Self {
        match self {
            TsType::Primitive(TsPrimitive::Null) => TsType::any(),
            TsType::Union(members) => {
                TsType::union(members.into_iter().filter(|m| !m.includes_null()))
            }
            other => other,
        }
    }

    /// Whether the type is built from primitives and literals only.
    pub fn is_primitive(&self) -> bool {
        match self {
            TsType::Primitive(_) | TsType::Literal(_) => true,
            TsType::Union(members) => members.iter().all(TsType::is_primitive),
            TsType::Array(inner) => inner.is_primitive(),
            _ => false,
        }
    }

    /// Collect every named type this expression refers to.
    pub fn collect_refs(&self, out: &mut BTreeSet<String>) {
        match self {
            TsType::Primitive(_) | TsType::Literal(_) => {}
            TsType::Array(inner) => inner.collect_refs(out),
            TsType::Union(members) => members.iter().for_each(|m| m.collect_refs(out)),
            TsType::Object(props) => props.iter().for_each(|p| p.ty.collect_refs(out)),
            TsType::Record { key, value } => {
                key.collect_refs(out);
                value.collect_refs(out);
            }
            TsType::Ref(name) => {
                out.insert(name.clone());
            }
            TsType::Generic { name, args } => {
                out.insert(name.clone());
                args.iter().for_each(|a| a.collect_refs(out));
            }
        }
    }
}

/// Function parameter
#[derive(Debug, Clone)]
pub struct TsParam {
    /// Parameter name.
    pub name: String,
    /// Annotation, omitted in untyped output.
    pub ty: Option<TsType>,
    /// `?` marker.
    pub optional: bool,
}

/// TypeScript expression
#[derive(Debug, Clone)]
pub enum TsExpr {
    /// Identifier: foo
    Ident(String),
    /// Literal value: 'bar', 42
    Literal(TsLiteral),
    /// Function call: foo<T>(a, b)
    Call {
        /// Callee expression.
        callee: Box<TsExpr>,
        /// Explicit type arguments.
        type_args: Vec<TsType>,
        /// Call arguments.
        args: Vec<TsExpr>,
    },
    /// Object literal: { a: 1, b, ...c }
    Object(Vec<ObjectEntry>),
    /// Member access: foo.bar
    Member {
        /// Receiver.
        object: Box<TsExpr>,
        /// Property name.
        prop: String,
    },
    /// Template literal: `${foo}/bar`
    Template(Vec<TemplatePart>),
    /// Raw code that doesn't fit the AST
    Raw(String),
}

/// Object literal entry
#[derive(Debug, Clone)]
pub enum ObjectEntry {
    /// key: value, or shorthand `key` when the value is the same identifier
    Prop(String, TsExpr),
    /// ...expr
    Spread(TsExpr),
}

/// Template literal part
#[derive(Debug, Clone)]
pub enum TemplatePart {
    /// Static string part
    Static(String),
    /// Dynamic expression part: ${expr}
    Dynamic(TsExpr),
}

/// Statement inside a callable body
#[derive(Debug, Clone)]
pub enum TsStmt {
    /// return expr;
    Return(TsExpr),
}

/// Exported arrow-function callable: `export const name = (...) => { ... };`
#[derive(Debug, Clone)]
pub struct TsFunction {
    /// Callable name.
    pub name: String,
    /// JSDoc lines, without the comment markers.
    pub doc: Vec<String>,
    /// Parameters in order.
    pub params: Vec<TsParam>,
    /// Body statements.
    pub body: Vec<TsStmt>,
}

// =============================================================================
// Module-Level IR (for printer)
// =============================================================================

/// Import statement
#[derive(Debug, Clone)]
pub struct TsImport {
    /// Imported names.
    pub items: Vec<String>,
    /// Module specifier.
    pub from: String,
    /// Whether this is a type-only import.
    pub type_only: bool,
}

/// Named type declaration
#[derive(Debug, Clone)]
pub struct TsTypeDef {
    /// Declaration name.
    pub name: String,
    /// Declaration body.
    pub kind: TypeDefKind,
    /// JSDoc text.
    pub description: Option<String>,
}

/// Kind of type definition
#[derive(Debug, Clone)]
pub enum TypeDefKind {
    /// `export interface Name { ... }`
    Interface {
        /// Members in document order.
        properties: Vec<TsProp>,
    },
    /// `export type Name = T;`
    TypeAlias {
        /// Aliased type.
        ty: TsType,
    },
    /// `export enum Name { KEY = 'value' }`
    Enum {
        /// Member names and values.
        members: Vec<(String, TsLiteral)>,
    },
}

/// One generated output unit
#[derive(Debug, Clone, Default)]
pub struct TsModule {
    /// Raw leading lines emitted verbatim.
    pub preamble: Vec<String>,
    /// Import statements.
    pub imports: Vec<TsImport>,
    /// Header comment lines.
    pub banner: Vec<String>,
    /// Type declarations.
    pub types: Vec<TsTypeDef>,
    /// Callables.
    pub functions: Vec<TsFunction>,
    /// `export * from '...'` specifiers.
    pub reexports: Vec<String>,
}
