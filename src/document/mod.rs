/*!
 * Document rendering.
 *
 * A record is laid out once into a `RenderedDocument`, which is then serialized
 * twice: as PDF pages and as a plain-text mirror. Both serializers walk the same
 * lines in the same order.
 *
 * # Architecture
 *
 * - `layout`: page geometry, cursor and pagination
 * - `metrics`: Helvetica-Bold advance widths used to center the title
 * - `pdf`: PDF serialization with the standard Type1 fonts
 * - `text`: plain-text serialization
 */

pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod text;

pub use layout::{render, PageLayout, PlacedLine, RenderedDocument, RenderedPage};

/// Title drawn on the first page and at the top of the text file
pub const DEFAULT_TITLE: &str = "Ficha Técnica para Gráfica";
