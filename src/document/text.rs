/*!
 * Plain-text mirror of a rendered document.
 */

use std::fmt::Write;

use super::layout::RenderedDocument;

/// Width of the `=` rule under the title
pub const SEPARATOR_WIDTH: usize = 40;

/// Width of the label column
pub const LABEL_WIDTH: usize = 30;

impl RenderedDocument {
    /// Serialize as UTF-8 text: title, rule, blank line, one `label: value` line
    /// per field. Page breaks are not represented.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title().text);
        out.push('\n');
        out.push_str(&"=".repeat(SEPARATOR_WIDTH));
        out.push_str("\n\n");

        for line in self.lines() {
            // Writing to a String cannot fail
            let _ = writeln!(
                out,
                "{:<width$.width$}: {}",
                line.label,
                line.value,
                width = LABEL_WIDTH
            );
        }

        out
    }

    pub fn to_text_bytes(&self) -> Vec<u8> {
        self.to_text().into_bytes()
    }
}
