//! AFE domain types.
pub mod validation;
pub mod xml;

pub use validation::validate;

/// Fields of an AFE record's `DocumentData` that the business rules look at.
///
/// Each value is the element's text content exactly as it appears in the
/// document. An empty string means the element was present but had no text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentData {
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

impl DocumentData {
    pub fn new(
        description: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}

/// Errors and warnings collected while validating a single AFE record.
///
/// Both lists keep the order in which the rules ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// `true` when no rule produced an error. Warnings do not count.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
