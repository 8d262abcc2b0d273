use std::io::{BufRead, Write};

use anyhow::Result;

use super::{Frontend, Submission, SUCCESS_MESSAGE};
use crate::errors::FormError;
use crate::record::{FieldList, Record};

// @module: Interactive terminal front end

/// Answer that empties a field instead of keeping its current value
pub const CLEAR_ANSWER: &str = "-";

/// Prompts for each field in order on a line-based terminal.
///
/// A field's current value is shown in brackets and kept when the answer is
/// empty: today's date for the date field, and the previous answers after a
/// rejected submission. A lone `-` clears the field.
pub struct PromptForm<R: BufRead, W: Write> {
    input: R,
    output: W,
    previous: Option<Record>,
}

impl<R: BufRead, W: Write> PromptForm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            previous: None,
        }
    }

    /// Give back the writer, mostly to inspect what was shown
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, field: &str, current: &str) -> Result<Option<String>> {
        if current.is_empty() {
            write!(self.output, "{}: ", field)?;
        } else {
            write!(self.output, "{} [{}]: ", field, current)?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(FormError::InputClosed.into());
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        match answer {
            "" => Ok(None),
            CLEAR_ANSWER => Ok(Some(String::new())),
            _ => Ok(Some(answer.to_string())),
        }
    }
}

impl<R: BufRead, W: Write> Frontend for PromptForm<R, W> {
    fn collect(&mut self, fields: FieldList) -> Result<Record> {
        let mut record = match self.previous.take() {
            Some(previous) if previous.fields() == fields => previous,
            _ => Record::prefilled(fields),
        };

        for field in fields.iter() {
            let current = record.get(field).to_string();
            if let Some(answer) = self.ask(field, &current)? {
                record.set(field, answer)?;
            }
        }

        self.previous = Some(record.clone());
        Ok(record)
    }

    fn report(&mut self, submission: &Submission) -> Result<()> {
        match submission {
            Submission::Rejected(reason) => {
                writeln!(self.output, "{}", reason)?;
            }
            Submission::Exported { outcome, mail_link } => {
                match &outcome.text {
                    Ok(_) => writeln!(self.output, "{}", SUCCESS_MESSAGE)?,
                    Err(e) => writeln!(self.output, "Erro ao gerar arquivo TXT: {}", e)?,
                }
                for path in outcome.written_paths() {
                    writeln!(self.output, "  {}", path.display())?;
                }
                writeln!(self.output, "Enviar por email: {}", mail_link)?;
            }
            Submission::Failed(e) => {
                writeln!(self.output, "Erro: {}", e)?;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn retry_after_rejection(&self) -> bool {
        true
    }
}
