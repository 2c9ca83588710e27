//! XML serialization for validation results.
pub(crate) mod constants;
pub mod parse;

use super::ValidationOutcome;
use constants::{RESULT_NS, XML_DECLARATION};
use quick_xml::se::{SeError, Serializer as QuickXmlSerializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Wrapper for serializing a [`ValidationOutcome`] as an `AFEValidateResult` document.
pub struct ResultXml<'a>(pub &'a ValidationOutcome);

/// XML serialization error.
#[derive(Debug, Error)]
pub enum ResultXmlError {
    #[error("failed to serialize validation result to XML: {source}")]
    Serialize {
        #[from]
        source: SeError,
    },
}

/// XML formatting options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum XmlFormat {
    #[default]
    Compact,
    Pretty {
        indent_char: char,
        indent_size: usize,
    },
}

impl XmlFormat {
    pub const fn pretty() -> Self {
        XmlFormat::Pretty {
            indent_char: ' ',
            indent_size: 2,
        }
    }
}

struct EmptyElement;

impl Serialize for EmptyElement {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_unit_struct("EmptyElement")
    }
}

struct MessageList<'a> {
    tag: &'static str,
    item_tag: &'static str,
    messages: &'a [String],
}

impl Serialize for MessageList<'_> {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut st = s.serialize_struct(self.tag, 1)?;
        st.serialize_field(self.item_tag, self.messages)?;
        st.end()
    }
}

impl Serialize for ResultXml<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let outcome = self.0;
        let mut root = serializer.serialize_struct("AFEValidateResult", 3)?;
        root.serialize_field("@xmlns", RESULT_NS)?;

        if outcome.is_success() {
            root.serialize_field("Success", &EmptyElement)?;
        } else {
            root.serialize_field(
                "Failure",
                &MessageList {
                    tag: "Failure",
                    item_tag: "ValidationErrorMessage",
                    messages: outcome.errors(),
                },
            )?;
        }

        if outcome.has_warnings() {
            root.serialize_field(
                "Warnings",
                &MessageList {
                    tag: "Warnings",
                    item_tag: "ValidationWarningMessage",
                    messages: outcome.warnings(),
                },
            )?;
        }

        root.end()
    }
}

/// Serialize validation results to XML.
///
/// # Examples
/// ```rust
/// use afe_validate_core::afe::{DocumentData, validate};
/// use afe_validate_core::afe::xml::ToXml;
///
/// let outcome = validate(&DocumentData::new("please", "2024-01-01", "2024-01-01"));
/// let xml = outcome.to_xml()?;
/// assert!(xml.contains("<Success/>"));
/// # Ok::<(), afe_validate_core::afe::xml::ResultXmlError>(())
/// ```
pub trait ToXml {
    fn to_xml_with_format(&self, format: XmlFormat) -> Result<String, ResultXmlError>;

    fn to_xml(&self) -> Result<String, ResultXmlError> {
        self.to_xml_with_format(XmlFormat::pretty())
    }
}

impl ToXml for ValidationOutcome {
    fn to_xml_with_format(&self, format: XmlFormat) -> Result<String, ResultXmlError> {
        let mut buffer = String::with_capacity(512);
        buffer.push_str(XML_DECLARATION);
        buffer.push('\n');

        {
            let mut serializer = QuickXmlSerializer::new(&mut buffer);
            if let XmlFormat::Pretty {
                indent_char,
                indent_size,
            } = format
            {
                serializer.indent(indent_char, indent_size);
            }
            ResultXml(self).serialize(serializer)?;
        }

        Ok(buffer)
    }
}
