/*!
 * Tests for layout, pagination and both serializations
 */

use anyhow::Result;
use fichatecnica::document::layout::{A4_HEIGHT, DEFAULT_MARGIN, LINE_HEIGHT};
use fichatecnica::{render, FieldList, PageLayout, Record};

use crate::common;

static FORTY: [&str; 40] = [
    "f01", "f02", "f03", "f04", "f05", "f06", "f07", "f08", "f09", "f10",
    "f11", "f12", "f13", "f14", "f15", "f16", "f17", "f18", "f19", "f20",
    "f21", "f22", "f23", "f24", "f25", "f26", "f27", "f28", "f29", "f30",
    "f31", "f32", "f33", "f34", "f35", "f36", "f37", "f38", "f39", "f40",
];

#[test]
fn test_toText_withSampleRecord_shouldMatchExpectedDocument() {
    let document = render(&common::sample_record(), FieldList::standard(), &PageLayout::default());

    let expected = "Ficha Técnica para Gráfica\n\
========================================\n\
\n\
Nome do ficheiro              : Livro Teste\n\
Nome do designer              : Ana Sousa\n\
Formato do livro              : Brochura\n\
Cores aplicadas               : CMYK\n\
Dimensão do livro             : 15 x 21 cm\n\
Dimensão da capa              : 31 x 21 cm\n\
Acabamentos do miolo          : Papel Coral 90g\n\
Acabamentos da capa           : Laminação mate\n\
Fontes usadas                 : Garamond, Futura\n\
Ficheiro PDF vs Editável      : PDF\n\
Data                          : 15/03/2024\n\
Email                         : a@b.com\n\
Telefone                      : 912345678\n";

    assert_eq!(document.to_text(), expected);
}

/// Rendering twice yields byte-identical output in both formats
#[test]
fn test_render_twice_shouldProduceIdenticalBytes() -> Result<()> {
    let record = common::sample_record();
    let first = render(&record, FieldList::standard(), &PageLayout::default());
    let second = render(&record, FieldList::standard(), &PageLayout::default());

    assert_eq!(first.to_text_bytes(), second.to_text_bytes());
    assert_eq!(first.to_pdf_bytes()?, second.to_pdf_bytes()?);
    Ok(())
}

#[test]
fn test_toPdfBytes_withStandardFields_shouldHaveOnePage() -> Result<()> {
    let document = render(&common::sample_record(), FieldList::standard(), &PageLayout::default());
    let bytes = document.to_pdf_bytes()?;

    assert!(bytes.starts_with(b"%PDF-1.5"));
    assert_eq!(common::pdf_page_count(&bytes)?, 1);
    Ok(())
}

/// Title first, then label and value for every field, in order
#[test]
fn test_toPdfBytes_shouldDrawTitleThenLabelValuePairs() -> Result<()> {
    let document = render(&common::sample_record(), FieldList::standard(), &PageLayout::default());
    let pages = common::pdf_page_strings(&document.to_pdf_bytes()?)?;

    let strings = &pages[0];
    assert_eq!(strings.len(), 1 + 2 * 13);
    assert_eq!(strings[0], b"Ficha T\xe9cnica para Gr\xe1fica".to_vec());
    assert_eq!(strings[1], b"Nome do ficheiro:".to_vec());
    assert_eq!(strings[2], b"Livro Teste".to_vec());
    assert_eq!(strings[26], b"912345678".to_vec());
    Ok(())
}

/// Lines crossing the bottom margin continue on a new page without the title
#[test]
fn test_render_withManyFields_shouldPaginate() -> Result<()> {
    let fields = FieldList::from_static(&FORTY);
    let document = render(&Record::new(fields), fields, &PageLayout::default());

    // 751.89 - 28 * 25 = 51.89 is the last baseline above the margin
    assert_eq!(document.page_count(), 2);
    assert_eq!(document.pages()[0].lines.len(), 29);
    assert_eq!(document.pages()[1].lines.len(), 11);

    let top = A4_HEIGHT - DEFAULT_MARGIN - 40.0;
    assert_eq!(document.pages()[1].lines[0].y, top);
    assert!(document.pages()[0].lines.iter().all(|line| line.y >= DEFAULT_MARGIN));

    let pages = common::pdf_page_strings(&document.to_pdf_bytes()?)?;
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].len(), 1 + 2 * 29);
    assert_eq!(pages[1].len(), 2 * 11);
    assert_eq!(pages[1][0], b"f30:".to_vec());
    Ok(())
}

#[test]
fn test_render_withFewFields_shouldStayOnOnePage() {
    let fields = FieldList::from_static(&FORTY[..29]);
    let document = render(&Record::new(fields), fields, &PageLayout::default());

    assert_eq!(document.page_count(), 1);
    let last = document.pages()[0].lines.last().unwrap();
    assert!(last.y - LINE_HEIGHT < DEFAULT_MARGIN);
}

#[test]
fn test_toPdfBytes_withSmallPage_shouldUsePageGeometry() -> Result<()> {
    let layout = PageLayout::new("Ficha", 400.0, 300.0, 50.0);
    let document = render(&common::sample_record(), FieldList::standard(), &layout);
    let bytes = document.to_pdf_bytes()?;

    assert_eq!(common::pdf_page_count(&bytes)?, 2);
    let text = document.to_text();
    assert!(text.starts_with("Ficha\n"));
    Ok(())
}
