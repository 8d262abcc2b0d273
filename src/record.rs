/*!
 * Field list and submitted record.
 *
 * The field list is fixed and ordered: the same order drives the prompts of the
 * interactive form and the line order of both generated documents.
 */

use std::collections::HashMap;

use chrono::Local;

use crate::errors::FormError;

/// Name of the only field that must be non-empty
pub const MANDATORY_FIELD: &str = "Nome do ficheiro";

/// Field holding the contact email
pub const EMAIL_FIELD: &str = "Email";

/// Field holding the contact phone number
pub const PHONE_FIELD: &str = "Telefone";

/// Field pre-filled with today's date
pub const DATE_FIELD: &str = "Data";

/// Date format used for the pre-filled date field
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// The editorial fields, in layout order
pub const STANDARD_FIELDS: [&str; 13] = [
    "Nome do ficheiro",
    "Nome do designer",
    "Formato do livro",
    "Cores aplicadas",
    "Dimensão do livro",
    "Dimensão da capa",
    "Acabamentos do miolo",
    "Acabamentos da capa",
    "Fontes usadas",
    "Ficheiro PDF vs Editável",
    "Data",
    "Email",
    "Telefone",
];

/// Ordered, immutable list of field names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldList {
    names: &'static [&'static str],
}

impl FieldList {
    /// The thirteen editorial fields
    pub const fn standard() -> Self {
        Self { names: &STANDARD_FIELDS }
    }

    /// A custom field list, mostly useful for layout tests
    pub const fn from_static(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name)
    }
}

impl Default for FieldList {
    fn default() -> Self {
        Self::standard()
    }
}

/// Values submitted for one document-generation request.
///
/// Every field of the list it was created from is present; unset fields hold
/// an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: FieldList,
    values: HashMap<&'static str, String>,
}

impl Record {
    /// Create a record with every field empty
    pub fn new(fields: FieldList) -> Self {
        let values = fields.iter().map(|name| (name, String::new())).collect();
        Self { fields, values }
    }

    /// Create a record with the date field set to today, when the list has one
    pub fn prefilled(fields: FieldList) -> Self {
        let mut record = Self::new(fields);
        if fields.contains(DATE_FIELD) {
            record.values.insert(DATE_FIELD, today());
        }
        record
    }

    /// Set a field value, rejecting names outside the field list
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let key = self
            .fields
            .iter()
            .find(|field| *field == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.values.insert(key, value.into());
        Ok(())
    }

    /// Value of a field; unknown fields read as empty
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn fields(&self) -> FieldList {
        self.fields
    }

    /// (field, value) pairs in field list order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(move |name| (name, self.get(name)))
    }

    /// Base name shared by the two artifacts: the mandatory value with spaces
    /// replaced by underscores
    pub fn base_name(&self) -> String {
        self.get(MANDATORY_FIELD).replace(' ', "_")
    }
}

/// Today's date in the form's date format
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}
