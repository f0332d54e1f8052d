//! TypeScript code emission via the Emit trait.
//!
//! Each IR node implements `Emit`, so printing is purely mechanical string
//! building. Generated code uses single-quoted strings and two-space indents.

use super::types::{
    ObjectEntry, TemplatePart, TsExpr, TsFunction, TsImport, TsLiteral, TsModule, TsParam,
    TsPrimitive, TsProp, TsStmt, TsType, TsTypeDef, TypeDefKind,
};
use super::utils::{escape_js_string, quote_if_needed};

/// Trait for emitting TypeScript code from IR nodes.
pub trait Emit {
    /// Convert the node to its TypeScript string representation.
    fn emit(&self) -> String;
}

// =============================================================================
// Primitive Types
// =============================================================================

impl Emit for TsPrimitive {
    fn emit(&self) -> String {
        match self {
            TsPrimitive::String => "string".to_string(),
            TsPrimitive::Number => "number".to_string(),
            TsPrimitive::Boolean => "boolean".to_string(),
            TsPrimitive::Null => "null".to_string(),
            TsPrimitive::Any => "any".to_string(),
            TsPrimitive::File => "File".to_string(),
        }
    }
}

impl Emit for TsLiteral {
    fn emit(&self) -> String {
        match self {
            TsLiteral::String(s) => format!("'{}'", escape_js_string(s)),
            TsLiteral::Number(n) => n.to_string(),
            TsLiteral::Int(i) => i.to_string(),
            TsLiteral::Bool(b) => b.to_string(),
            TsLiteral::Null => "null".to_string(),
        }
    }
}

// =============================================================================
// Types
// =============================================================================

impl Emit for TsType {
    fn emit(&self) -> String {
        match self {
            TsType::Primitive(p) => p.emit(),
            TsType::Array(inner) => {
                let inner_str = inner.emit();
                // Wrap unions in parentheses
                if matches!(**inner, TsType::Union(_)) {
                    format!("({inner_str})[]")
                } else {
                    format!("{inner_str}[]")
                }
            }
            TsType::Union(types) => types.iter().map(Emit::emit).collect::<Vec<_>>().join(" | "),
            TsType::Object(props) => {
                if props.is_empty() {
                    "{}".to_string()
                } else {
                    let parts: Vec<_> = props.iter().map(Emit::emit).collect();
                    format!("{{ {} }}", parts.join("; "))
                }
            }
            TsType::Record { key, value } => {
                format!("Record<{}, {}>", key.emit(), value.emit())
            }
            TsType::Literal(lit) => lit.emit(),
            TsType::Ref(name) => name.clone(),
            TsType::Generic { name, args } => {
                let args_str = args.iter().map(Emit::emit).collect::<Vec<_>>().join(", ");
                format!("{name}<{args_str}>")
            }
        }
    }
}

impl Emit for TsProp {
    fn emit(&self) -> String {
        let key = quote_if_needed(&self.name);
        let opt = if self.optional { "?" } else { "" };
        format!("{}{}: {}", key, opt, self.ty.emit())
    }
}

// =============================================================================
// Type Definitions
// =============================================================================

impl Emit for TsTypeDef {
    fn emit(&self) -> String {
        let mut output = String::new();
        if let Some(description) = &self.description {
            output.push_str("/**\n");
            for line in description.lines() {
                output.push_str(&format!(" * {}\n", line.trim_end()));
            }
            output.push_str(" */\n");
        }
        match &self.kind {
            TypeDefKind::Interface { properties } => {
                output.push_str(&format!("export interface {} {{\n", self.name));
                for prop in properties {
                    if let Some(description) = &prop.description {
                        output.push_str(&format!("  /** {} */\n", one_line(description)));
                    }
                    output.push_str(&format!("  {};\n", prop.emit()));
                }
                output.push_str("}\n");
            }
            TypeDefKind::TypeAlias { ty } => {
                output.push_str(&format!("export type {} = {};\n", self.name, ty.emit()));
            }
            TypeDefKind::Enum { members } => {
                output.push_str(&format!("export enum {} {{\n", self.name));
                let lines: Vec<_> = members
                    .iter()
                    .map(|(key, value)| format!("  {} = {}", key, value.emit()))
                    .collect();
                output.push_str(&lines.join(",\n"));
                output.push_str("\n}\n");
            }
        }
        output
    }
}

fn one_line(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "*\\/")
}

// =============================================================================
// Expressions
// =============================================================================

impl Emit for TsExpr {
    fn emit(&self) -> String {
        match self {
            TsExpr::Ident(name) => name.clone(),
            TsExpr::Literal(lit) => lit.emit(),
            TsExpr::Call {
                callee,
                type_args,
                args,
            } => {
                let type_args_str = if type_args.is_empty() {
                    String::new()
                } else {
                    let parts: Vec<_> = type_args.iter().map(Emit::emit).collect();
                    format!("<{}>", parts.join(", "))
                };
                let args_str = args.iter().map(Emit::emit).collect::<Vec<_>>().join(", ");
                format!("{}{}({})", callee.emit(), type_args_str, args_str)
            }
            TsExpr::Object(entries) => {
                if entries.is_empty() {
                    "{}".to_string()
                } else {
                    let parts: Vec<_> = entries.iter().map(Emit::emit).collect();
                    format!("{{ {} }}", parts.join(", "))
                }
            }
            TsExpr::Member { object, prop } => {
                format!("{}.{}", object.emit(), prop)
            }
            TsExpr::Template(parts) => {
                let content: String = parts
                    .iter()
                    .map(|p| match p {
                        TemplatePart::Static(s) => s.replace('`', "\\`"),
                        TemplatePart::Dynamic(e) => format!("${{{}}}", e.emit()),
                    })
                    .collect();
                format!("`{content}`")
            }
            TsExpr::Raw(code) => code.clone(),
        }
    }
}

impl Emit for ObjectEntry {
    fn emit(&self) -> String {
        match self {
            ObjectEntry::Prop(key, TsExpr::Ident(value)) if key == value => key.clone(),
            ObjectEntry::Prop(key, value) => format!("{}: {}", quote_if_needed(key), value.emit()),
            ObjectEntry::Spread(expr) => format!("...{}", expr.emit()),
        }
    }
}

impl Emit for TsParam {
    fn emit(&self) -> String {
        let opt = if self.optional { "?" } else { "" };
        match &self.ty {
            Some(ty) => format!("{}{}: {}", self.name, opt, ty.emit()),
            None => self.name.clone(),
        }
    }
}

// =============================================================================
// Statements
// =============================================================================

impl Emit for TsStmt {
    fn emit(&self) -> String {
        self.emit_indented(1)
    }
}

impl TsStmt {
    /// Emit with specified indentation level (2 spaces per level)
    pub fn emit_indented(&self, indent: usize) -> String {
        let prefix = "  ".repeat(indent);
        match self {
            TsStmt::Return(expr) => format!("{}return {};\n", prefix, expr.emit()),
        }
    }
}

// =============================================================================
// Functions
// =============================================================================

impl Emit for TsFunction {
    fn emit(&self) -> String {
        let mut output = String::new();

        if !self.doc.is_empty() {
            output.push_str("/**\n");
            for line in &self.doc {
                if line.is_empty() {
                    output.push_str(" *\n");
                } else {
                    output.push_str(&format!(" * {line}\n"));
                }
            }
            output.push_str(" */\n");
        }

        let params_str = self.params.iter().map(Emit::emit).collect::<Vec<_>>().join(", ");
        output.push_str(&format!("export const {} = ({})", self.name, params_str));
        if self.body.is_empty() {
            output.push_str(" => {};\n");
        } else {
            output.push_str(" => {\n");
            for stmt in &self.body {
                output.push_str(&stmt.emit_indented(1));
            }
            output.push_str("};\n");
        }

        output
    }
}

// =============================================================================
// Imports
// =============================================================================

impl Emit for TsImport {
    fn emit(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        format!(
            "import {}{{ {} }} from '{}';\n",
            type_kw,
            self.items.join(", "),
            escape_js_string(&self.from)
        )
    }
}

// =============================================================================
// Modules
// =============================================================================

impl Emit for TsModule {
    fn emit(&self) -> String {
        let mut sections: Vec<String> = Vec::new();

        let mut head = String::new();
        for line in &self.preamble {
            head.push_str(line);
            head.push('\n');
        }
        for import in &self.imports {
            head.push_str(&import.emit());
        }
        if !head.is_empty() {
            sections.push(head);
        }

        if !self.banner.is_empty() {
            let mut banner = String::from("/**\n");
            for line in &self.banner {
                banner.push_str(&format!(" * {line}\n"));
            }
            banner.push_str(" */\n");
            sections.push(banner);
        }

        sections.extend(self.types.iter().map(Emit::emit));
        sections.extend(self.functions.iter().map(Emit::emit));

        if !self.reexports.is_empty() {
            let exports: String = self
                .reexports
                .iter()
                .map(|from| format!("export * from '{}';\n", escape_js_string(from)))
                .collect();
            sections.push(exports);
        }

        sections.join("\n")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn prop(name: &str, ty: TsType, optional: bool) -> TsProp {
        TsProp {
            name: name.into(),
            ty,
            optional,
            description: None,
        }
    }

    #[test]
    fn test_emit_primitive() {
        assert_eq!(TsPrimitive::String.emit(), "string");
        assert_eq!(TsPrimitive::Number.emit(), "number");
        assert_eq!(TsPrimitive::Any.emit(), "any");
        assert_eq!(TsPrimitive::File.emit(), "File");
    }

    #[test]
    fn test_emit_literal() {
        assert_eq!(TsLiteral::String("it's".into()).emit(), "'it\\'s'");
        assert_eq!(TsLiteral::Int(42).emit(), "42");
        assert_eq!(TsLiteral::Bool(true).emit(), "true");
    }

    #[test]
    fn test_emit_array_type() {
        let ty = TsType::Array(Box::new(TsType::Ref("User".into())));
        assert_eq!(ty.emit(), "User[]");
    }

    #[test]
    fn test_emit_union_array() {
        let ty = TsType::Array(Box::new(TsType::Union(vec![
            TsType::Primitive(TsPrimitive::String),
            TsType::null(),
        ])));
        assert_eq!(ty.emit(), "(string | null)[]");
    }

    #[test]
    fn test_emit_record_type() {
        assert_eq!(
            TsType::string_record(TsType::any()).emit(),
            "Record<string, any>"
        );
    }

    #[test]
    fn test_emit_generic() {
        let ty = TsType::Generic {
            name: "ResOp".into(),
            args: vec![TsType::Ref("UserListRespDto".into())],
        };
        assert_eq!(ty.emit(), "ResOp<UserListRespDto>");
    }

    #[test]
    fn test_emit_object_type() {
        let ty = TsType::Object(vec![
            prop("id", TsType::Primitive(TsPrimitive::Number), false),
            prop("display-name", TsType::Primitive(TsPrimitive::String), true),
        ]);
        assert_eq!(ty.emit(), "{ id: number; 'display-name'?: string }");
    }

    #[test]
    fn test_emit_type_def_interface() {
        let def = TsTypeDef {
            name: "Item".into(),
            kind: TypeDefKind::Interface {
                properties: vec![
                    TsProp {
                        description: Some("Primary key".into()),
                        ..prop("id", TsType::Primitive(TsPrimitive::Number), false)
                    },
                    prop("name", TsType::Primitive(TsPrimitive::String), true),
                ],
            },
            description: Some("An item".into()),
        };
        let expected = "/**\n * An item\n */\nexport interface Item {\n  /** Primary key */\n  id: number;\n  name?: string;\n}\n";
        assert_eq!(def.emit(), expected);
    }

    #[test]
    fn test_emit_type_def_alias() {
        let def = TsTypeDef {
            name: "UserList".into(),
            kind: TypeDefKind::TypeAlias {
                ty: TsType::Ref("User".into()),
            },
            description: None,
        };
        assert_eq!(def.emit(), "export type UserList = User;\n");
    }

    #[test]
    fn test_emit_type_def_enum() {
        let def = TsTypeDef {
            name: "Status".into(),
            kind: TypeDefKind::Enum {
                members: vec![
                    ("ACTIVE".into(), TsLiteral::String("active".into())),
                    ("VALUE_1".into(), TsLiteral::Int(1)),
                ],
            },
            description: None,
        };
        assert_eq!(
            def.emit(),
            "export enum Status {\n  ACTIVE = 'active',\n  VALUE_1 = 1\n}\n"
        );
    }

    #[test]
    fn test_emit_type_import() {
        let import = TsImport {
            items: vec!["LoginDto".into(), "User".into()],
            from: "../types".into(),
            type_only: true,
        };
        assert_eq!(
            import.emit(),
            "import type { LoginDto, User } from '../types';\n"
        );
    }

    #[test]
    fn test_emit_object_shorthand_and_spread() {
        let expr = TsExpr::Object(vec![
            ObjectEntry::Prop("url".into(), TsExpr::Literal(TsLiteral::String("/a".into()))),
            ObjectEntry::Prop("params".into(), TsExpr::Ident("params".into())),
            ObjectEntry::Spread(TsExpr::Ident("config".into())),
        ]);
        assert_eq!(expr.emit(), "{ url: '/a', params, ...config }");
    }

    #[test]
    fn test_emit_arrow_function() {
        let func = TsFunction {
            name: "getUser".into(),
            doc: vec!["Fetch a user".into(), String::new(), "@param config extra".into()],
            params: vec![
                TsParam {
                    name: "params".into(),
                    ty: Some(TsType::Object(vec![prop(
                        "id",
                        TsType::Primitive(TsPrimitive::String),
                        false,
                    )])),
                    optional: false,
                },
                TsParam {
                    name: "config".into(),
                    ty: Some(TsType::any()),
                    optional: true,
                },
            ],
            body: vec![TsStmt::Return(TsExpr::Call {
                callee: Box::new(TsExpr::Ident("request".into())),
                type_args: vec![TsType::Ref("User".into())],
                args: vec![TsExpr::Template(vec![
                    TemplatePart::Static("/users/".into()),
                    TemplatePart::Dynamic(TsExpr::Raw("params.id".into())),
                ])],
            })],
        };
        let expected = "/**\n * Fetch a user\n *\n * @param config extra\n */\nexport const getUser = (params: { id: string }, config?: any) => {\n  return request<User>(`/users/${params.id}`);\n};\n";
        assert_eq!(func.emit(), expected);
    }

    #[test]
    fn test_emit_module_layout() {
        let module = TsModule {
            preamble: vec!["import { request } from '@/utils/request';".into()],
            banner: vec!["Users API".into()],
            reexports: vec!["./types".into()],
            ..TsModule::default()
        };
        assert_eq!(
            module.emit(),
            "import { request } from '@/utils/request';\n\n/**\n * Users API\n */\n\nexport * from './types';\n"
        );
    }
}
