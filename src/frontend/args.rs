use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{error, info, warn};

use super::{Frontend, Submission, SUCCESS_MESSAGE};
use crate::errors::FormError;
use crate::record::{FieldList, Record};

// @module: Non-interactive front end

/// Builds a record from an optional JSON file and `NAME=VALUE` assignments.
///
/// Assignments are applied after the file, so they override it. The date field
/// defaults to today when neither source sets it.
#[derive(Debug, Clone, Default)]
pub struct ArgsForm {
    record_file: Option<PathBuf>,
    assignments: Vec<String>,
}

impl ArgsForm {
    pub fn new(record_file: Option<PathBuf>, assignments: Vec<String>) -> Self {
        Self {
            record_file,
            assignments,
        }
    }

    fn read_record_file(path: &Path) -> Result<BTreeMap<String, String>, FormError> {
        let to_error = |message: String| FormError::RecordFile {
            path: path.to_path_buf(),
            message,
        };
        let content = fs::read_to_string(path).map_err(|e| to_error(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| to_error(e.to_string()))
    }
}

/// Split a `NAME=VALUE` assignment at the first `=`
pub fn parse_assignment(assignment: &str) -> Result<(&str, &str), FormError> {
    assignment
        .split_once('=')
        .map(|(name, value)| (name.trim(), value))
        .ok_or_else(|| FormError::MalformedAssignment(assignment.to_string()))
}

impl Frontend for ArgsForm {
    fn collect(&mut self, fields: FieldList) -> Result<Record> {
        let mut record = Record::prefilled(fields);

        if let Some(path) = &self.record_file {
            for (name, value) in Self::read_record_file(path)? {
                record.set(&name, value)?;
            }
        }

        for assignment in &self.assignments {
            let (name, value) = parse_assignment(assignment)?;
            record.set(name, value)?;
        }

        Ok(record)
    }

    fn report(&mut self, submission: &Submission) -> Result<()> {
        match submission {
            Submission::Rejected(reason) => warn!("{}", reason),
            Submission::Exported { outcome, mail_link } => {
                match &outcome.text {
                    Ok(_) => info!("{}", SUCCESS_MESSAGE),
                    Err(e) => error!("Erro ao gerar arquivo TXT: {}", e),
                }
                for path in outcome.written_paths() {
                    println!("{}", path.display());
                }
                println!("{}", mail_link);
            }
            Submission::Failed(e) => error!("{}", e),
        }
        Ok(())
    }
}
