//! API document to TypeScript client generator.
//!
//! This module reads Swagger 2.0 and OpenAPI 3.x documents and renders:
//! - a `types.ts` unit with one declaration per reusable schema
//! - one operation unit per tag (or a single `api` unit) of request callables
//! - an `index` barrel re-exporting all of the above

mod emitter;
pub mod ir;
pub mod schema;
pub mod spec;

pub use emitter::{Rendered, parse_document, render};
