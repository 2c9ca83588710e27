//! XML reading for AFE documents.
use crate::afe::DocumentData;
use crate::afe::xml::constants::{AFE_NS, VALIDATE_NS};
use libxml::parser::{Parser, ParserOptions};
use libxml::tree::{Document, Node};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors emitted while reading AFE documents.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("XML parse error: {0}")]
    XmlParse(String),
    #[error("Missing required element: {0}")]
    MissingElement(&'static str),
}

enum XmlInput<'a> {
    Str(&'a str),
    File(&'a str),
}

fn parse_strict(input: XmlInput<'_>) -> Result<Document, ParseError> {
    // Without recovery libxml returns no document for input that is not well-formed.
    let options = ParserOptions {
        recover: false,
        no_error: true,
        no_warning: true,
        no_net: true,
        ..Default::default()
    };
    let parser = Parser::default();
    let doc = match input {
        XmlInput::Str(xml) => parser.parse_string_with_options(xml, options),
        XmlInput::File(path) => parser.parse_file_with_options(path, options),
    }
    .map_err(|e| ParseError::XmlParse(format!("{e:?}")))?;
    ensure_prefixes_declared(&doc)?;
    Ok(doc)
}

/// Parse an XML string into a document, rejecting anything not well-formed.
///
/// # Examples
/// ```rust
/// use afe_validate_core::afe::xml::parse::{child_element, parse_xml_str};
///
/// let doc = parse_xml_str(r#"<a xmlns="urn:x"><b>hi</b></a>"#)?;
/// let root = doc.get_root_element().expect("root");
/// assert_eq!(child_element(&root, "urn:x", "b").map(|b| b.get_content()).as_deref(), Some("hi"));
/// # Ok::<(), afe_validate_core::afe::xml::parse::ParseError>(())
/// ```
pub fn parse_xml_str(xml: &str) -> Result<Document, ParseError> {
    parse_strict(XmlInput::Str(xml))
}

/// Parse an XML file, honouring its BOM or declared encoding.
pub fn parse_xml_file(path: &Path) -> Result<Document, ParseError> {
    // libxml reports a missing file as a generic parse failure
    std::fs::File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let xml_path = path
        .to_str()
        .ok_or_else(|| ParseError::XmlParse(format!("invalid XML path: {}", path.display())))?;
    parse_strict(XmlInput::File(xml_path))
}

// libxml only flags an undeclared prefix as a namespace warning and keeps the
// qualified name, so a colon left in an element name means the prefix was unbound.
fn ensure_prefixes_declared(doc: &Document) -> Result<(), ParseError> {
    let mut pending: Vec<Node> = doc.get_root_element().into_iter().collect();
    while let Some(node) = pending.pop() {
        let name = node.get_name();
        if name.contains(':') {
            return Err(ParseError::XmlParse(format!(
                "undeclared namespace prefix on element <{name}>"
            )));
        }
        pending.extend(node.get_child_elements());
    }
    Ok(())
}

/// `true` if `node` is an element with the given namespace URI and local name.
pub fn is_element(node: &Node, namespace: &str, local_name: &str) -> bool {
    node.is_element_node()
        && node.get_name() == local_name
        && node
            .get_namespace()
            .is_some_and(|ns| ns.get_href() == namespace)
}

/// First direct child element with the given namespace URI and local name.
pub fn child_element(node: &Node, namespace: &str, local_name: &str) -> Option<Node> {
    node.get_child_elements()
        .into_iter()
        .find(|child| is_element(child, namespace, local_name))
}

/// Extract the [`DocumentData`] fields from an AFE document.
///
/// The AFE record is looked up as a direct child of the root; a document whose
/// root is the record itself is accepted too.
///
/// # Examples
/// ```rust
/// use afe_validate_core::afe::xml::parse::parse_afe_xml;
///
/// let xml = r#"<ev:AFE xmlns:ev="http://energynavigator.com/xml/afe/validate/2"
///                      xmlns:afe="http://energynavigator.com/xml/afe/2">
///   <afe:DocumentData>
///     <afe:DESCRIPTION>please</afe:DESCRIPTION>
///     <afe:START_DATE>2024-01-01</afe:START_DATE>
///     <afe:END_DATE>2024-01-02</afe:END_DATE>
///   </afe:DocumentData>
/// </ev:AFE>"#;
/// let data = parse_afe_xml(xml)?;
/// assert_eq!(data.start_date, "2024-01-01");
/// # Ok::<(), afe_validate_core::afe::xml::parse::ParseError>(())
/// ```
pub fn parse_afe_xml(xml: &str) -> Result<DocumentData, ParseError> {
    let doc = parse_xml_str(xml)?;
    document_data_from_doc(&doc)
}

/// Read and parse an AFE document from a file.
pub fn parse_afe_xml_file(path: &Path) -> Result<DocumentData, ParseError> {
    let doc = parse_xml_file(path)?;
    debug!(path = %path.display(), "loaded AFE document");
    document_data_from_doc(&doc)
}

fn document_data_from_doc(doc: &Document) -> Result<DocumentData, ParseError> {
    let root = doc
        .get_root_element()
        .ok_or_else(|| ParseError::XmlParse("document has no root element".into()))?;
    let afe = if is_element(&root, VALIDATE_NS, "AFE") {
        root
    } else {
        child_element(&root, VALIDATE_NS, "AFE").ok_or(ParseError::MissingElement("AFE"))?
    };
    let document = child_element(&afe, AFE_NS, "DocumentData")
        .ok_or(ParseError::MissingElement("DocumentData"))?;

    let field = |name: &'static str| {
        child_element(&document, AFE_NS, name)
            .map(|node| node.get_content())
            .ok_or(ParseError::MissingElement(name))
    };
    let description = field("DESCRIPTION")?;
    let start_date = field("START_DATE")?;
    let end_date = field("END_DATE")?;

    debug!("located AFE document data fields");
    Ok(DocumentData {
        description,
        start_date,
        end_date,
    })
}
