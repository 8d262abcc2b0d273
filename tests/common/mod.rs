/*!
 * Common test utilities for the fichatecnica test suite
 */

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Result;
use lopdf::content::Content;
use lopdf::Document;
use tempfile::TempDir;

use fichatecnica::opener::FileOpener;
use fichatecnica::{FieldList, Record};

/// Route library logs through env_logger; RUST_LOG=debug shows them
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// A record that passes validation, with every field filled
pub fn sample_record() -> Record {
    let mut record = Record::new(FieldList::standard());
    let values = [
        ("Nome do ficheiro", "Livro Teste"),
        ("Nome do designer", "Ana Sousa"),
        ("Formato do livro", "Brochura"),
        ("Cores aplicadas", "CMYK"),
        ("Dimensão do livro", "15 x 21 cm"),
        ("Dimensão da capa", "31 x 21 cm"),
        ("Acabamentos do miolo", "Papel Coral 90g"),
        ("Acabamentos da capa", "Laminação mate"),
        ("Fontes usadas", "Garamond, Futura"),
        ("Ficheiro PDF vs Editável", "PDF"),
        ("Data", "15/03/2024"),
        ("Email", "a@b.com"),
        ("Telefone", "912345678"),
    ];
    for (name, value) in values {
        record.set(name, value).expect("field belongs to the standard list");
    }
    record
}

/// Number of pages of a PDF
pub fn pdf_page_count(bytes: &[u8]) -> Result<usize> {
    let doc = Document::load_mem(bytes)?;
    Ok(doc.get_pages().len())
}

/// Strings shown with `Tj` on each page, in drawing order
pub fn pdf_page_strings(bytes: &[u8]) -> Result<Vec<Vec<Vec<u8>>>> {
    let doc = Document::load_mem(bytes)?;
    let mut pages = Vec::new();
    for (_, page_id) in doc.get_pages() {
        let content = Content::decode(&doc.get_page_content(page_id)?)?;
        let strings = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| op.operands.first())
            .filter_map(|operand| operand.as_str().ok())
            .map(|s| s.to_vec())
            .collect();
        pages.push(strings);
    }
    Ok(pages)
}

/// File opener that records the paths it was asked to open
#[derive(Clone, Default)]
pub struct RecordingOpener {
    pub opened: Rc<RefCell<Vec<PathBuf>>>,
}

impl FileOpener for RecordingOpener {
    fn open(&self, path: &Path) -> Result<()> {
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
