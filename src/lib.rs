/*!
 * # Ficha Técnica
 *
 * A Rust library and CLI that turns the editorial metadata of a book project
 * into a "ficha técnica" for the print shop: a one-page PDF plus a plain-text
 * mirror of the same data.
 *
 * ## Features
 *
 * - Fixed, ordered list of thirteen editorial fields
 * - Coarse validation of the file name, email and phone fields
 * - Deterministic PDF and text output with shared layout and pagination
 * - Non-interactive and interactive front ends over the same core
 * - Pre-filled email draft links and opening the results in the system viewer
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `record`: Field list and submitted record
 * - `validation`: Record validation rules
 * - `document`: Layout, PDF and text serialization:
 *   - `document::layout`: Page geometry and pagination
 *   - `document::pdf`: PDF output
 *   - `document::text`: Plain-text output
 * - `export`: Writing the artifact pair to disk
 * - `frontend`: Presentation adapters (`args`, `prompt`)
 * - `app_controller`: Main application controller
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `opener`: Platform file viewer launchers
 * - `mail`: Email draft links
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod errors;
pub mod export;
pub mod file_utils;
pub mod frontend;
pub mod mail;
pub mod opener;
pub mod record;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use document::{render, PageLayout, RenderedDocument};
pub use errors::{AppError, DocumentError, FormError, ValidationError};
pub use export::{ExportOutcome, FichaExporter};
pub use record::{FieldList, Record};
pub use validation::{validate, RecordValidator};
