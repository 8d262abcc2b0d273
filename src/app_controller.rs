use anyhow::Result;
use log::{debug, info, warn};

use crate::app_config::Config;
use crate::errors::ValidationError;
use crate::export::FichaExporter;
use crate::frontend::{Frontend, Submission};
use crate::mail;
use crate::opener::{platform_opener, FileOpener, NoopOpener};
use crate::record::{FieldList, Record, EMAIL_FIELD};
use crate::validation::RecordValidator;

// @module: Application controller for ficha generation

/// Owns the application state shared by every submission: configuration,
/// validator, exporter and file opener. Front ends are passed in per run.
pub struct Controller {
    // @field: App configuration
    config: Config,
    validator: RecordValidator,
    exporter: FichaExporter,
    opener: Box<dyn FileOpener>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let exporter = FichaExporter::new(config.output_dir.clone(), config.document.page_layout());
        let opener: Box<dyn FileOpener> = if config.open_after_export {
            platform_opener()
        } else {
            Box::new(NoopOpener)
        };

        Ok(Self {
            config,
            validator: RecordValidator::new(),
            exporter,
            opener,
        })
    }

    /// Replace the file opener
    pub fn with_opener(mut self, opener: Box<dyn FileOpener>) -> Self {
        self.opener = opener;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn fields(&self) -> FieldList {
        FieldList::standard()
    }

    /// Validate a record without writing anything
    pub fn validate(&self, record: &Record) -> Result<(), ValidationError> {
        self.validator.validate(record)
    }

    /// Validate the record and, when valid, write both artifacts, open them and
    /// prepare the email draft link
    pub fn submit(&self, record: &Record) -> Submission {
        if let Err(reason) = self.validate(record) {
            warn!("Record rejected: {}", reason);
            return Submission::Rejected(reason);
        }

        let outcome = match self.exporter.export(record) {
            Ok(outcome) => outcome,
            Err(e) => return Submission::Failed(e),
        };

        for path in outcome.written_paths() {
            if let Err(e) = self.opener.open(path) {
                warn!("{:#}", e);
            }
        }

        let mail_link = mail::draft_link(record.get(EMAIL_FIELD), &self.config.email);
        debug!("Email draft: {}", mail_link);

        Submission::Exported { outcome, mail_link }
    }

    /// Collect, submit and report through a front end. Front ends that ask for
    /// it collect again after a rejected record.
    pub fn run(&self, frontend: &mut dyn Frontend) -> Result<Submission> {
        loop {
            let record = frontend.collect(self.fields())?;
            let submission = self.submit(&record);
            frontend.report(&submission)?;

            if matches!(submission, Submission::Rejected(_)) && frontend.retry_after_rejection() {
                info!("Collecting the form again");
                continue;
            }
            return Ok(submission);
        }
    }
}
