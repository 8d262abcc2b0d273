/*!
 * Front ends collecting a record and presenting the result.
 *
 * Both adapters drive the same validate/export core through the controller:
 * - `args`: record from a JSON file and `NAME=VALUE` arguments, reported through the log
 * - `prompt`: interactive terminal form, one prompt per field
 */

pub mod args;
pub mod prompt;

use anyhow::Result;

use crate::errors::{DocumentError, ValidationError};
use crate::export::ExportOutcome;
use crate::record::{FieldList, Record};

pub use args::ArgsForm;
pub use prompt::PromptForm;

/// Message shown after both files were written
pub const SUCCESS_MESSAGE: &str = "Relatórios gerados com sucesso!";

/// Result of submitting one record
#[derive(Debug)]
pub enum Submission {
    /// The record failed validation; nothing was written
    Rejected(ValidationError),
    /// The PDF was written; the text file may have failed
    Exported {
        outcome: ExportOutcome,
        /// Pre-filled email draft addressed to the submitted email
        mail_link: String,
    },
    /// The PDF could not be produced
    Failed(DocumentError),
}

impl Submission {
    /// Whether the PDF was written
    pub fn is_exported(&self) -> bool {
        matches!(self, Submission::Exported { .. })
    }
}

/// A presentation adapter over the validate/export core
pub trait Frontend {
    /// Gather the values of one submission
    fn collect(&mut self, fields: FieldList) -> Result<Record>;

    /// Present the result of a submission
    fn report(&mut self, submission: &Submission) -> Result<()>;

    /// Whether to collect again after a rejected record
    fn retry_after_rejection(&self) -> bool {
        false
    }
}
