//! Intermediate representation for API document to TypeScript generation.
//!
//! This module defines a three-layer architecture:
//! 1. API-level IR: normalized operations and parameters (layout-agnostic)
//! 2. TypeScript AST IR: types, expressions, statements, functions
//! 3. Emission: AST to TypeScript code strings via the `Emit` trait
//!
//! ## Module Structure
//!
//! - `types`: TypeScript AST IR (TsType, TsExpr, TsFunction, TsModule)
//! - `api`: API-level IR (OperationIR, ParamIR, ApiIR)
//! - `resolve`: schema node -> TsType
//! - `naming`: case conversion and operation naming
//! - `catalog`: reusable schemas -> named declarations
//! - `normalize`: API document -> API IR
//! - `codegen`: API IR -> output artifacts
//! - `emit`: TypeScript AST -> code strings (via Emit trait)
//! - `diagnostics`: notes collected along the way
//! - `utils`: common utilities shared across modules

mod api;
mod catalog;
mod codegen;
mod diagnostics;
mod emit;
pub mod naming;
mod normalize;
mod resolve;
mod types;
pub mod utils;

pub use api::{ApiIR, ApiInfo, HttpMethod, OperationIR, ParamIR, ParamLocation};
pub use catalog::build_type_catalog;
pub use codegen::{
    Artifact, DEFAULT_TAG, EmitOptions, GenerationMode, RequestStyle, TagFileNaming,
    build_callable, group_by_tags, render_artifacts, used_types,
};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use emit::Emit;
pub use naming::NamingOptions;
pub use normalize::{normalize_document, schema_table};
pub use resolve::{SchemaResolver, ref_name};
pub use types::{TsLiteral, TsPrimitive, TsProp, TsType, TsTypeDef, TypeDefKind};
