//! Code generation from API IR to output artifacts.
//!
//! Operations are grouped by tag, turned into TypeScript AST nodes
//! (callables, imports, declarations) and printed with the `Emit` trait.
//! Nothing here touches the filesystem: the result is a list of
//! [`Artifact`]s with paths relative to the output directory.

use std::collections::BTreeSet;
use std::path::PathBuf;

use indexmap::IndexMap;

use super::api::{ApiIR, OperationIR, ParamIR, ParamLocation};
use super::diagnostics::Diagnostics;
use super::emit::Emit;
use super::naming::{sanitize_filename, to_camel_case, to_kebab_case};
use super::types::{
    ObjectEntry, TemplatePart, TsExpr, TsFunction, TsImport, TsLiteral, TsModule, TsParam, TsProp,
    TsStmt, TsType,
};
use super::utils::{format_param_access, sanitize_binding, to_snake_case};

/// Group label for operations without tags.
pub const DEFAULT_TAG: &str = "default";

const GENERATED_NOTE: &str = "Generated by swagen. Do not edit by hand.";

/// Typed (TypeScript) or untyped (JavaScript) output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationMode {
    /// `.ts` units with annotations and a `types.ts` declaration unit.
    #[default]
    Typed,
    /// `.js` units, no annotations, no declarations.
    Untyped,
}

impl GenerationMode {
    /// File extension of operation and barrel units.
    pub fn extension(self) -> &'static str {
        match self {
            GenerationMode::Typed => "ts",
            GenerationMode::Untyped => "js",
        }
    }
}

/// Shape of the request-dispatch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStyle {
    /// `request<T>({ url, method: 'GET', ... })`
    #[default]
    Generic,
    /// `request.get<T>({ url, ... })`
    Method,
}

/// How tag labels become directory names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagFileNaming {
    /// Lower-cased tag.
    Tag,
    /// `user-controller`
    KebabCase,
    /// `userController`
    #[default]
    CamelCase,
}

impl TagFileNaming {
    /// Directory name for a tag.
    pub fn dir_name(self, tag: &str) -> String {
        let clean = sanitize_filename(tag);
        let name = match self {
            TagFileNaming::Tag => clean.to_lowercase(),
            TagFileNaming::KebabCase => to_kebab_case(&clean),
            TagFileNaming::CamelCase => to_camel_case(&clean),
        };
        if name.is_empty() {
            DEFAULT_TAG.to_string()
        } else {
            name
        }
    }
}

/// Everything that shapes emitted text.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct EmitOptions {
    /// Typed or untyped output.
    pub mode: GenerationMode,
    /// One unit per tag instead of a single `api` unit.
    pub group_by_tags: bool,
    /// Dispatch call shape.
    pub request_style: RequestStyle,
    /// Tag directory naming.
    pub file_naming: TagFileNaming,
    /// Prepended to every URL.
    pub prefix: String,
    /// First line of every operation unit.
    pub import_template: String,
    /// Emit `types.ts`.
    pub generate_models: bool,
    /// Emit operation units.
    pub generate_apis: bool,
    /// Emit the barrel unit.
    pub generate_index: bool,
    /// Emit comment blocks above callables.
    pub add_comments: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            mode: GenerationMode::Typed,
            group_by_tags: true,
            request_style: RequestStyle::Generic,
            file_naming: TagFileNaming::CamelCase,
            prefix: String::new(),
            import_template: "import { request } from '@/utils/request';".to_string(),
            generate_models: true,
            generate_apis: true,
            generate_index: true,
            add_comments: true,
        }
    }
}

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the output directory.
    pub path: PathBuf,
    /// Full file text.
    pub contents: String,
}

/// Group operations by tag. An operation with several tags appears in each
/// group; untagged operations go to [`DEFAULT_TAG`]. Groups keep first-seen order.
pub fn group_by_tags(operations: &[OperationIR]) -> IndexMap<String, Vec<&OperationIR>> {
    let mut groups: IndexMap<String, Vec<&OperationIR>> = IndexMap::new();
    for op in operations {
        if op.tags.is_empty() {
            groups.entry(DEFAULT_TAG.to_string()).or_default().push(op);
        }
        for tag in &op.tags {
            groups.entry(tag.clone()).or_default().push(op);
        }
    }
    groups
}

/// Declared type names referenced by the given operations, sorted.
pub fn used_types(operations: &[&OperationIR], declared: &BTreeSet<&str>) -> Vec<String> {
    let mut refs = BTreeSet::new();
    for op in operations {
        op.response_type.collect_refs(&mut refs);
        for param in signature_params(op) {
            param.ty.collect_refs(&mut refs);
        }
        if let Some(body) = &op.body {
            body.ty.collect_refs(&mut refs);
        }
    }
    refs.into_iter()
        .filter(|name| declared.contains(name.as_str()))
        .collect()
}

fn signature_params(op: &OperationIR) -> impl Iterator<Item = &ParamIR> {
    op.params.iter().filter(|p| {
        matches!(
            p.location,
            ParamLocation::Path | ParamLocation::Query | ParamLocation::FormData
        )
    })
}

/// One operation unit before printing.
struct Unit<'a> {
    label: Vec<String>,
    path: PathBuf,
    import_from: &'static str,
    operations: Vec<&'a OperationIR>,
}

/// Render every artifact for the API.
pub fn render_artifacts(
    api: &ApiIR,
    options: &EmitOptions,
    diag: &mut Diagnostics,
) -> Vec<Artifact> {
    let ext = options.mode.extension();
    let typed = options.mode == GenerationMode::Typed;
    let with_types = typed && options.generate_models;
    let mut artifacts = Vec::new();

    if with_types {
        artifacts.push(Artifact {
            path: PathBuf::from("types.ts"),
            contents: types_module(api).emit(),
        });
    }

    let units = build_units(api, options, ext);
    let declared: BTreeSet<&str> = api.types.iter().map(|t| t.name.as_str()).collect();

    if options.generate_apis {
        for unit in &units {
            diag.set_scope(unit.path.display().to_string());
            let used = if with_types {
                used_types(&unit.operations, &declared)
            } else {
                Vec::new()
            };
            artifacts.push(Artifact {
                path: unit.path.clone(),
                contents: operation_module(unit, used, options, diag).emit(),
            });
        }
    }

    if options.generate_index {
        let mut reexports = Vec::new();
        if with_types {
            reexports.push("./types".to_string());
        }
        if options.generate_apis {
            for unit in &units {
                let target = unit.path.parent().filter(|p| !p.as_os_str().is_empty());
                reexports.push(match target {
                    Some(dir) => format!("./{}", dir.display()),
                    None => "./api".to_string(),
                });
            }
        }
        let barrel = TsModule {
            banner: vec!["API entry point".to_string(), GENERATED_NOTE.to_string()],
            reexports,
            ..TsModule::default()
        };
        artifacts.push(Artifact {
            path: PathBuf::from(format!("index.{ext}")),
            contents: barrel.emit(),
        });
    }

    artifacts
}

fn types_module(api: &ApiIR) -> TsModule {
    TsModule {
        banner: vec![
            "API type declarations".to_string(),
            GENERATED_NOTE.to_string(),
        ],
        types: api.types.clone(),
        ..TsModule::default()
    }
}

/// Tags that map to the same directory share one unit.
fn build_units<'a>(api: &'a ApiIR, options: &EmitOptions, ext: &str) -> Vec<Unit<'a>> {
    if !options.group_by_tags {
        return vec![Unit {
            label: Vec::new(),
            path: PathBuf::from(format!("api.{ext}")),
            import_from: "./types",
            operations: api.operations.iter().collect(),
        }];
    }

    let mut by_dir: IndexMap<String, Unit<'a>> = IndexMap::new();
    for (tag, operations) in group_by_tags(&api.operations) {
        let dir = options.file_naming.dir_name(&tag);
        let unit = by_dir.entry(dir.clone()).or_insert_with(|| Unit {
            label: Vec::new(),
            path: PathBuf::from(&dir).join(format!("index.{ext}")),
            import_from: "../types",
            operations: Vec::new(),
        });
        unit.label.push(tag);
        for op in operations {
            if !unit.operations.iter().any(|seen| std::ptr::eq(*seen, op)) {
                unit.operations.push(op);
            }
        }
    }
    by_dir.into_values().collect()
}

fn operation_module(
    unit: &Unit<'_>,
    used: Vec<String>,
    options: &EmitOptions,
    diag: &mut Diagnostics,
) -> TsModule {
    let mut preamble = Vec::new();
    if !options.import_template.is_empty() {
        preamble.push(options.import_template.clone());
    }

    let mut imports = Vec::new();
    if !used.is_empty() {
        imports.push(TsImport {
            items: used,
            from: unit.import_from.to_string(),
            type_only: true,
        });
    }

    let title = if unit.label.is_empty() {
        "API".to_string()
    } else {
        format!("{} API", unit.label.join(", "))
    };

    let mut seen: Vec<String> = Vec::new();
    let mut functions = Vec::with_capacity(unit.operations.len());
    for op in &unit.operations {
        let callable = build_callable(op, options, diag);
        if seen.contains(&callable.name) {
            diag.warn(format!(
                "callable '{}' is declared more than once in this unit",
                callable.name
            ));
        }
        seen.push(callable.name.clone());
        functions.push(callable);
    }

    TsModule {
        preamble,
        imports,
        banner: vec![title, GENERATED_NOTE.to_string()],
        functions,
        ..TsModule::default()
    }
}

/// Build the exported callable for one operation.
pub fn build_callable(op: &OperationIR, options: &EmitOptions, diag: &mut Diagnostics) -> TsFunction {
    let typed = options.mode == GenerationMode::Typed;
    let annotate = |ty: TsType| typed.then_some(ty);

    let url_params: Vec<&ParamIR> = op
        .params_in(ParamLocation::Path)
        .chain(op.params_in(ParamLocation::Query))
        .collect();
    let form_params: Vec<&ParamIR> = op.params_in(ParamLocation::FormData).collect();
    let has_query = op.params_in(ParamLocation::Query).next().is_some();
    let has_data = op.body.is_some() || !form_params.is_empty();

    let mut params = Vec::new();
    if !url_params.is_empty() {
        params.push(TsParam {
            name: "params".to_string(),
            ty: annotate(TsType::Object(url_params.iter().map(|p| param_prop(p)).collect())),
            optional: url_params.iter().all(|p| !p.required),
        });
    }
    if let Some(body) = &op.body {
        params.push(TsParam {
            name: "data".to_string(),
            ty: annotate(body.ty.clone()),
            optional: false,
        });
    } else if !form_params.is_empty() {
        params.push(TsParam {
            name: "data".to_string(),
            ty: annotate(TsType::Object(form_params.iter().map(|p| param_prop(p)).collect())),
            optional: false,
        });
    }
    params.push(TsParam {
        name: "config".to_string(),
        ty: annotate(TsType::any()),
        optional: true,
    });

    let method_style = typed && options.request_style == RequestStyle::Method;
    let mut entries = vec![ObjectEntry::Prop(
        "url".to_string(),
        url_expr(op, &options.prefix, diag),
    )];
    if !method_style {
        entries.push(ObjectEntry::Prop(
            "method".to_string(),
            TsExpr::Literal(TsLiteral::String(op.method.as_upper().to_string())),
        ));
    }
    if has_query {
        entries.push(ObjectEntry::Prop(
            "params".to_string(),
            TsExpr::Ident("params".to_string()),
        ));
    }
    if has_data {
        entries.push(ObjectEntry::Prop(
            "data".to_string(),
            TsExpr::Ident("data".to_string()),
        ));
    }
    entries.push(ObjectEntry::Spread(TsExpr::Ident("config".to_string())));

    let request = TsExpr::Ident("request".to_string());
    let callee = if method_style {
        TsExpr::Member {
            object: Box::new(request),
            prop: op.method.as_str().to_string(),
        }
    } else {
        request
    };

    TsFunction {
        name: sanitize_binding(&to_camel_case(&op.name)),
        doc: if options.add_comments {
            comment_lines(op, !url_params.is_empty(), has_data)
        } else {
            Vec::new()
        },
        params,
        body: vec![TsStmt::Return(TsExpr::Call {
            callee: Box::new(callee),
            type_args: if typed {
                vec![op.response_type.clone()]
            } else {
                Vec::new()
            },
            args: vec![TsExpr::Object(entries)],
        })],
    }
}

fn param_prop(param: &ParamIR) -> TsProp {
    TsProp {
        name: param.name.clone(),
        ty: if param.required {
            param.ty.clone()
        } else {
            param.ty.clone().without_null()
        },
        optional: !param.required,
        description: None,
    }
}

/// URL with `${params.x}` for each matched placeholder.
fn url_expr(op: &OperationIR, prefix: &str, diag: &mut Diagnostics) -> TsExpr {
    let path_params: Vec<&ParamIR> = op.params_in(ParamLocation::Path).collect();
    let full = format!("{prefix}{}", op.path);

    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut rest = full.as_str();
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            break;
        };
        let placeholder = &rest[open + 1..close];
        literal.push_str(&rest[..open]);
        match find_matching_param(placeholder, &path_params) {
            Some(name) => {
                if !literal.is_empty() {
                    parts.push(TemplatePart::Static(std::mem::take(&mut literal)));
                }
                parts.push(TemplatePart::Dynamic(TsExpr::Raw(format_param_access(
                    "params", name, true,
                ))));
            }
            None => {
                diag.warn(format!(
                    "path placeholder '{{{placeholder}}}' has no path parameter; left as is"
                ));
                literal.push_str(&rest[open..=close]);
            }
        }
        rest = &rest[close + 1..];
    }
    literal.push_str(rest);

    if parts.is_empty() {
        return TsExpr::Literal(TsLiteral::String(literal));
    }
    if !literal.is_empty() {
        parts.push(TemplatePart::Static(literal));
    }
    TsExpr::Template(parts)
}

/// Exact name first, then snake_case equivalence (`itemId` matches `item_id`).
fn find_matching_param<'p>(placeholder: &str, params: &[&'p ParamIR]) -> Option<&'p str> {
    if let Some(p) = params.iter().find(|p| p.name == placeholder) {
        return Some(p.name.as_str());
    }
    let placeholder_snake = to_snake_case(placeholder);
    params
        .iter()
        .find(|p| to_snake_case(&p.name) == placeholder_snake)
        .map(|p| p.name.as_str())
}

fn comment_lines(op: &OperationIR, has_params: bool, has_data: bool) -> Vec<String> {
    let mut lines: Vec<String> = op
        .description
        .iter()
        .flat_map(|d| d.lines())
        .map(|line| line.trim_end().replace("*/", "*\\/"))
        .collect();

    if has_params || has_data {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        if has_params {
            lines.push("@param params Request parameters".to_string());
            let url_params = op
                .params_in(ParamLocation::Path)
                .chain(op.params_in(ParamLocation::Query));
            for p in url_params {
                lines.push(match &p.description {
                    Some(desc) if !desc.trim().is_empty() => {
                        format!("@param params.{} {}", p.name, one_line(desc))
                    }
                    _ => format!("@param params.{}", p.name),
                });
            }
        }
        if has_data {
            let desc = op
                .body
                .as_ref()
                .and_then(|b| b.description.as_deref())
                .filter(|d| !d.trim().is_empty())
                .map_or_else(|| "Request body".to_string(), one_line);
            lines.push(format!("@param data {desc}"));
        }
        lines.push("@param config Optional request config".to_string());
    }

    if op.deprecated {
        lines.push("@deprecated".to_string());
    }
    lines
}

fn one_line(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "*\\/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::openapi::ir::api::HttpMethod;
    use crate::openapi::ir::types::{TsPrimitive, TsTypeDef, TypeDefKind};

    fn param(name: &str, location: ParamLocation, required: bool, ty: TsType) -> ParamIR {
        ParamIR {
            name: name.into(),
            location,
            required,
            ty,
            description: None,
            schema: None,
        }
    }

    fn string() -> TsType {
        TsType::Primitive(TsPrimitive::String)
    }

    fn op(name: &str, method: HttpMethod, path: &str, tags: &[&str]) -> OperationIR {
        OperationIR {
            name: name.into(),
            method,
            path: path.into(),
            description: None,
            deprecated: false,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            params: Vec::new(),
            body: None,
            response_type: TsType::any(),
        }
    }

    fn alias(name: &str) -> TsTypeDef {
        TsTypeDef {
            name: name.into(),
            kind: TypeDefKind::TypeAlias { ty: string() },
            description: None,
        }
    }

    fn plain() -> EmitOptions {
        EmitOptions {
            add_comments: false,
            ..EmitOptions::default()
        }
    }

    fn callable(op: &OperationIR, options: &EmitOptions) -> String {
        build_callable(op, options, &mut Diagnostics::new()).emit()
    }

    #[test]
    fn test_group_by_tags_fans_out() {
        let ops = vec![
            op("a", HttpMethod::Get, "/a", &["x", "y"]),
            op("b", HttpMethod::Get, "/b", &[]),
            op("c", HttpMethod::Get, "/c", &["y"]),
        ];
        let groups = group_by_tags(&ops);
        let summary: Vec<(String, Vec<&str>)> = groups
            .iter()
            .map(|(tag, ops)| (tag.clone(), ops.iter().map(|o| o.name.as_str()).collect()))
            .collect();
        assert_eq!(
            summary,
            [
                ("x".to_string(), vec!["a"]),
                ("y".to_string(), vec!["a", "c"]),
                ("default".to_string(), vec!["b"]),
            ]
        );
    }

    #[test]
    fn test_tag_file_naming() {
        assert_eq!(TagFileNaming::CamelCase.dir_name("User Controller"), "userController");
        assert_eq!(TagFileNaming::KebabCase.dir_name("UserController"), "user-controller");
        assert_eq!(TagFileNaming::Tag.dir_name("UserController"), "usercontroller");
        assert_eq!(TagFileNaming::CamelCase.dir_name("a/b"), "aB");
        assert_eq!(TagFileNaming::Tag.dir_name(""), "default");
    }

    #[test]
    fn test_used_types_only_declared_references() {
        let mut get = op("get", HttpMethod::Get, "/x", &[]);
        get.response_type = TsType::Generic {
            name: "ResOp".into(),
            args: vec![TsType::Array(Box::new(TsType::Ref("User".into())))],
        };
        get.params.push(param("h", ParamLocation::Header, false, TsType::Ref("Header".into())));
        let mut post = op("post", HttpMethod::Post, "/x", &[]);
        post.body = Some(param("body", ParamLocation::Body, true, TsType::Ref("Missing".into())));

        let declared: BTreeSet<&str> = ["ResOp", "User", "Header", "Other"].into_iter().collect();
        assert_eq!(used_types(&[&get, &post], &declared), ["ResOp", "User"]);
    }

    #[test]
    fn test_callable_generic_style_with_path_and_query() {
        let mut get = op("getUserGet", HttpMethod::Get, "/users/{id}", &[]);
        get.params = vec![
            param("id", ParamLocation::Path, true, string()),
            param("q", ParamLocation::Query, false, TsType::Primitive(TsPrimitive::Number).or_null()),
        ];
        get.response_type = TsType::Ref("User".into());
        assert_eq!(
            callable(&get, &plain()),
            "export const getUserGet = (params: { id: string; q?: number }, config?: any) => {\n  return request<User>({ url: `/users/${params.id}`, method: 'GET', params, ...config });\n};\n"
        );
    }

    #[test]
    fn test_callable_method_style_with_body_and_prefix() {
        let mut post = op("createUserPost", HttpMethod::Post, "/users", &[]);
        post.body = Some(param("body", ParamLocation::Body, true, TsType::Ref("UserDto".into())));
        let options = EmitOptions {
            request_style: RequestStyle::Method,
            prefix: "/api".into(),
            ..plain()
        };
        assert_eq!(
            callable(&post, &options),
            "export const createUserPost = (data: UserDto, config?: any) => {\n  return request.post<any>({ url: '/api/users', data, ...config });\n};\n"
        );
    }

    #[test]
    fn test_callable_untyped_uses_explicit_method() {
        let mut post = op("createUserPost", HttpMethod::Post, "/users/{id}", &[]);
        post.params = vec![param("id", ParamLocation::Path, true, string())];
        post.body = Some(param("body", ParamLocation::Body, true, TsType::Ref("UserDto".into())));
        let options = EmitOptions {
            mode: GenerationMode::Untyped,
            request_style: RequestStyle::Method,
            ..plain()
        };
        assert_eq!(
            callable(&post, &options),
            "export const createUserPost = (params, data, config) => {\n  return request({ url: `/users/${params.id}`, method: 'POST', data, ...config });\n};\n"
        );
    }

    #[test]
    fn test_all_optional_params_object_is_optional() {
        let mut get = op("listGet", HttpMethod::Get, "/list", &[]);
        get.params = vec![param("page", ParamLocation::Query, false, string())];
        let out = callable(&get, &plain());
        assert!(out.starts_with("export const listGet = (params?: { page?: string }, config?: any)"));
    }

    #[test]
    fn test_form_data_becomes_data_and_headers_are_dropped() {
        let mut post = op("uploadPost", HttpMethod::Post, "/upload", &[]);
        post.params = vec![
            param("file", ParamLocation::FormData, true, TsType::Primitive(TsPrimitive::File)),
            param("X-Token", ParamLocation::Header, true, string()),
        ];
        assert_eq!(
            callable(&post, &plain()),
            "export const uploadPost = (data: { file: File }, config?: any) => {\n  return request<any>({ url: '/upload', method: 'POST', data, ...config });\n};\n"
        );
    }

    #[test]
    fn test_unmatched_placeholder_stays_literal() {
        let mut get = op("x", HttpMethod::Get, "/orgs/{orgId}/users/{user_id}", &[]);
        get.params = vec![param("userId", ParamLocation::Path, true, string())];
        let mut diag = Diagnostics::new();
        let out = build_callable(&get, &plain(), &mut diag).emit();
        assert!(out.contains("url: `/orgs/{orgId}/users/${params.userId}`"));
        assert_eq!(diag.warning_count(), 1);
    }

    #[test]
    fn test_bracket_access_for_non_identifier_placeholder() {
        let mut get = op("x", HttpMethod::Get, "/files/{file-name}", &[]);
        get.params = vec![param("file-name", ParamLocation::Path, true, string())];
        let out = callable(&get, &plain());
        assert!(out.contains("url: `/files/${params['file-name']}`"));
        assert!(out.contains("params: { 'file-name': string }"));
    }

    #[test]
    fn test_callable_name_is_camel_cased_and_bindable() {
        let get = op("AuthController_loginPost", HttpMethod::Post, "/login", &[]);
        assert!(callable(&get, &plain()).starts_with("export const authControllerLoginPost = "));
        let del = op("delete", HttpMethod::Delete, "/x", &[]);
        assert!(callable(&del, &plain()).starts_with("export const _delete = "));
    }

    #[test]
    fn test_comment_block() {
        let mut put = op("updatePut", HttpMethod::Put, "/items/{id}", &[]);
        put.description = Some("Update an item".into());
        put.deprecated = true;
        put.params = vec![ParamIR {
            description: Some("Item id".into()),
            ..param("id", ParamLocation::Path, true, string())
        }];
        put.body = Some(ParamIR {
            description: Some("new values".into()),
            ..param("body", ParamLocation::Body, true, TsType::Ref("Item".into()))
        });
        let out = callable(&put, &EmitOptions::default());
        assert!(out.starts_with(
            "/**\n * Update an item\n *\n * @param params Request parameters\n * @param params.id Item id\n * @param data new values\n * @param config Optional request config\n * @deprecated\n */\n"
        ));
    }

    #[test]
    fn test_no_comment_without_content() {
        let get = op("pingGet", HttpMethod::Get, "/ping", &[]);
        assert!(callable(&get, &EmitOptions::default()).starts_with("export const pingGet"));
    }

    #[test]
    fn test_render_grouped_artifacts() {
        let mut a = op("aGet", HttpMethod::Get, "/a", &["User Admin"]);
        a.response_type = TsType::Ref("User".into());
        let b = op("bGet", HttpMethod::Get, "/b", &["user-admin"]);
        let c = op("cGet", HttpMethod::Get, "/c", &[]);
        let api = ApiIR {
            operations: vec![a, b, c],
            types: vec![alias("User"), alias("Unused")],
            ..ApiIR::default()
        };
        let artifacts = render_artifacts(&api, &plain(), &mut Diagnostics::new());
        let paths: Vec<_> = artifacts.iter().map(|a| a.path.clone()).collect();
        assert_eq!(
            paths,
            [
                PathBuf::from("types.ts"),
                PathBuf::from("userAdmin/index.ts"),
                PathBuf::from("default/index.ts"),
                PathBuf::from("index.ts"),
            ]
        );

        let unit = &artifacts[1].contents;
        assert!(unit.starts_with(
            "import { request } from '@/utils/request';\nimport type { User } from '../types';\n\n/**\n * User Admin, user-admin API\n"
        ));
        assert!(unit.contains("export const aGet"));
        assert!(unit.contains("export const bGet"));
        assert!(!artifacts[2].contents.contains("import type"));

        assert_eq!(
            artifacts[3].contents,
            "/**\n * API entry point\n * Generated by swagen. Do not edit by hand.\n */\n\nexport * from './types';\nexport * from './userAdmin';\nexport * from './default';\n"
        );
    }

    #[test]
    fn test_render_ungrouped_untyped() {
        let mut a = op("aPost", HttpMethod::Post, "/a", &["x"]);
        a.response_type = TsType::Ref("User".into());
        let api = ApiIR {
            operations: vec![a],
            types: vec![alias("User")],
            ..ApiIR::default()
        };
        let options = EmitOptions {
            mode: GenerationMode::Untyped,
            group_by_tags: false,
            ..plain()
        };
        let artifacts = render_artifacts(&api, &options, &mut Diagnostics::new());
        let paths: Vec<_> = artifacts.iter().map(|a| a.path.clone()).collect();
        assert_eq!(paths, [PathBuf::from("api.js"), PathBuf::from("index.js")]);
        assert!(!artifacts[0].contents.contains("import type"));
        assert!(artifacts[0].contents.contains("method: 'POST'"));
        assert!(artifacts[1].contents.ends_with("export * from './api';\n"));
    }

    #[test]
    fn test_types_unit_layout() {
        let api = ApiIR {
            types: vec![alias("A"), alias("B")],
            ..ApiIR::default()
        };
        let artifacts = render_artifacts(&api, &plain(), &mut Diagnostics::new());
        assert_eq!(
            artifacts[0].contents,
            "/**\n * API type declarations\n * Generated by swagen. Do not edit by hand.\n */\n\nexport type A = string;\n\nexport type B = string;\n"
        );
    }

    #[test]
    fn test_toggles_skip_units() {
        let api = ApiIR {
            operations: vec![op("aGet", HttpMethod::Get, "/a", &[])],
            types: vec![alias("A")],
            ..ApiIR::default()
        };
        let options = EmitOptions {
            generate_models: false,
            generate_index: false,
            ..plain()
        };
        let artifacts = render_artifacts(&api, &options, &mut Diagnostics::new());
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].path, PathBuf::from("default/index.ts"));
    }

    #[test]
    fn test_duplicate_callable_names_warn() {
        let api = ApiIR {
            operations: vec![
                op("users", HttpMethod::Get, "/a", &[]),
                op("users", HttpMethod::Get, "/b", &[]),
            ],
            ..ApiIR::default()
        };
        let mut diag = Diagnostics::new();
        render_artifacts(&api, &plain(), &mut diag);
        assert_eq!(diag.warning_count(), 1);
    }
}
