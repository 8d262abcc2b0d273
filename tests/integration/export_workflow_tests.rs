/*!
 * End-to-end tests for writing the PDF and TXT artifacts
 */

use std::fs;

use anyhow::Result;
use fichatecnica::{DocumentError, FichaExporter, PageLayout};

use crate::common;

const TEXT_HEADER: &str = "Ficha Técnica para Gráfica\n========================================\n\n";

#[test]
fn test_export_withSampleRecord_shouldWriteBothArtifacts() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output_dir = temp_dir.path().join("FichasTecnicas");
    let exporter = FichaExporter::new(&output_dir, PageLayout::default());

    let outcome = exporter.export(&common::sample_record())?;

    assert!(outcome.is_complete());
    assert_eq!(outcome.pdf_path, output_dir.join("Ficha_Técnica_Livro_Teste.pdf"));
    let text_path = outcome.text.as_ref().map_err(|e| anyhow::anyhow!("{}", e))?;
    assert_eq!(*text_path, output_dir.join("Ficha_Técnica_Livro_Teste.txt"));

    let text = fs::read_to_string(text_path)?;
    assert!(text.starts_with(TEXT_HEADER));
    assert!(text.contains("Telefone                      : 912345678\n"));

    let pdf = fs::read(&outcome.pdf_path)?;
    assert_eq!(common::pdf_page_count(&pdf)?, 1);
    Ok(())
}

/// Written files match the in-memory serializations exactly
#[test]
fn test_export_shouldWriteRenderedBytes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let exporter = FichaExporter::new(temp_dir.path(), PageLayout::default());
    let record = common::sample_record();

    let outcome = exporter.export(&record)?;
    let document = exporter.render(&record);

    assert_eq!(fs::read(&outcome.pdf_path)?, document.to_pdf_bytes()?);
    let (_, text_path) = exporter.artifact_paths(&record);
    assert_eq!(fs::read(text_path)?, document.to_text_bytes());
    Ok(())
}

/// Same file name twice: the second export replaces the first
#[test]
fn test_export_withSameName_shouldOverwrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let exporter = FichaExporter::new(temp_dir.path(), PageLayout::default());

    let mut record = common::sample_record();
    exporter.export(&record)?;
    record.set("Cores aplicadas", "Pantone 186 C")?;
    let outcome = exporter.export(&record)?;

    let text = fs::read_to_string(outcome.text.as_ref().map_err(|e| anyhow::anyhow!("{}", e))?)?;
    assert!(text.contains("Cores aplicadas               : Pantone 186 C\n"));
    assert_eq!(fs::read_dir(temp_dir.path())?.count(), 2);
    Ok(())
}

/// A text write failure leaves the PDF in place and is reported, not raised
#[test]
fn test_export_withUnwritableText_shouldKeepPdfAndReportFailure() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let exporter = FichaExporter::new(temp_dir.path(), PageLayout::default());
    let record = common::sample_record();

    // A directory squatting on the text path makes the write fail
    let (pdf_path, text_path) = exporter.artifact_paths(&record);
    fs::create_dir(&text_path)?;

    let outcome = exporter.export(&record)?;

    assert!(!outcome.is_complete());
    assert!(matches!(&outcome.text, Err(DocumentError::WriteFailure { path, .. }) if *path == text_path));
    assert_eq!(outcome.written_paths(), vec![pdf_path.as_path()]);
    assert!(pdf_path.is_file());
    Ok(())
}

/// A PDF write failure aborts the export before the text file is written
#[test]
fn test_export_withUnwritablePdf_shouldFailWithoutArtifacts() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let exporter = FichaExporter::new(temp_dir.path(), PageLayout::default());
    let record = common::sample_record();

    let (pdf_path, text_path) = exporter.artifact_paths(&record);
    fs::create_dir(&pdf_path)?;

    let result = exporter.export(&record);

    assert!(matches!(result, Err(DocumentError::WriteFailure { ref path, .. }) if *path == pdf_path));
    assert!(pdf_path.is_dir());
    assert!(!text_path.exists());
    // no temporary file left behind
    assert_eq!(fs::read_dir(temp_dir.path())?.count(), 1);
    Ok(())
}

#[test]
fn test_export_withSpacesInName_shouldUseUnderscores() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let exporter = FichaExporter::new(temp_dir.path(), PageLayout::default());
    let mut record = common::sample_record();
    record.set("Nome do ficheiro", "O Meu Livro")?;

    let outcome = exporter.export(&record)?;

    assert_eq!(
        outcome.pdf_path.file_name().and_then(|name| name.to_str()),
        Some("Ficha_Técnica_O_Meu_Livro.pdf")
    );
    Ok(())
}

/// Path separators in the file name are refused instead of leaving the output directory
#[test]
fn test_export_withPathInName_shouldFailWithoutWritingOutside() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output_dir = temp_dir.path().join("FichasTecnicas");
    let exporter = FichaExporter::new(&output_dir, PageLayout::default());
    let mut record = common::sample_record();
    record.set("Nome do ficheiro", "Livro/../../x")?;

    let result = exporter.export(&record);

    assert!(matches!(result, Err(DocumentError::WriteFailure { .. })));
    assert!(!temp_dir.path().join("x.pdf").exists());
    assert!(!temp_dir.path().join("x.txt").exists());
    let entries: Vec<_> = fs::read_dir(temp_dir.path())?.collect::<Result<_, _>>()?;
    assert!(entries.is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_export_shouldWritePdfWithTextFilePermissions() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = common::create_temp_dir()?;
    let exporter = FichaExporter::new(temp_dir.path(), PageLayout::default());

    let outcome = exporter.export(&common::sample_record())?;

    let pdf_mode = fs::metadata(&outcome.pdf_path)?.permissions().mode() & 0o777;
    assert_eq!(pdf_mode, 0o644);
    Ok(())
}
