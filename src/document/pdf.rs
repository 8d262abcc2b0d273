/*!
 * PDF serialization of a rendered document.
 *
 * Uses the standard Type1 fonts Helvetica and Helvetica-Bold, which every PDF
 * reader provides, so no font program is embedded. Text is encoded as WinAnsi.
 */

use log::debug;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use super::layout::{RenderedDocument, RenderedPage, TitleBlock, BODY_FONT_SIZE, TITLE_FONT_SIZE};
use crate::errors::DocumentError;

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

impl RenderedDocument {
    /// Serialize to PDF bytes. The output carries no timestamps or document IDs,
    /// so the same document always produces the same bytes.
    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(type1_font("Helvetica"));
        let bold_id = doc.add_object(type1_font("Helvetica-Bold"));
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                REGULAR_FONT => regular_id,
                BOLD_FONT => bold_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.page_count());
        for (index, page) in self.pages().iter().enumerate() {
            let title = (index == 0).then(|| self.title());
            let content = Content {
                operations: self.page_operations(page, title),
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = add_page(&mut doc, pages_id, content_id);
            kids.push(page_id.into());
        }

        let layout = self.layout();
        let count = kids.len() as i64;
        let media_box: Vec<Object> = vec![
            0.into(),
            0.into(),
            layout.page_width.into(),
            layout.page_height.into(),
        ];
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => media_box,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| DocumentError::Pdf(e.to_string()))?;

        debug!("Serialized {} page(s) into {} PDF bytes", self.page_count(), buffer.len());
        Ok(buffer)
    }

    fn page_operations(&self, page: &RenderedPage, title: Option<&TitleBlock>) -> Vec<Operation> {
        let mut operations = Vec::new();

        if let Some(title) = title {
            push_text(&mut operations, BOLD_FONT, TITLE_FONT_SIZE, title.x, title.y, &title.text);
            operations.push(Operation::new("w", vec![1.into()]));
            operations.push(Operation::new(
                "m",
                vec![title.divider_start.into(), title.divider_y.into()],
            ));
            operations.push(Operation::new(
                "l",
                vec![title.divider_end.into(), title.divider_y.into()],
            ));
            operations.push(Operation::new("S", vec![]));
        }

        let layout = self.layout();
        for line in &page.lines {
            let label = format!("{}:", line.label);
            push_text(&mut operations, BOLD_FONT, BODY_FONT_SIZE, layout.margin, line.y, &label);
            push_text(&mut operations, REGULAR_FONT, BODY_FONT_SIZE, layout.value_x(), line.y, &line.value);
        }

        operations
    }
}

fn type1_font(base_font: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn add_page(doc: &mut Document, pages_id: ObjectId, content_id: ObjectId) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    })
}

fn push_text(operations: &mut Vec<Operation>, font: &str, size: f32, x: f32, y: f32, text: &str) {
    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new("Tf", vec![font.into(), size.into()]));
    operations.push(Operation::new("Td", vec![x.into(), y.into()]));
    operations.push(Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(text))]));
    operations.push(Operation::new("ET", vec![]));
}

/// Encode text for a WinAnsiEncoding font. Characters outside the encoding
/// become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}
