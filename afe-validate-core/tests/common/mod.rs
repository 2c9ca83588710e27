use afe_validate_core::afe::xml::parse::{child_element, is_element, parse_xml_file};
use libxml::tree::Node;
use std::path::{Path, PathBuf};

pub const RESULT_NS: &str = "http://energynavigator.com/xml/afe/validate-result/2";

#[allow(dead_code)]
pub fn afe_fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("afe")
        .join(name)
}

#[allow(dead_code)]
pub fn unique_temp_path(prefix: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("{prefix}-{}-{nonce}.xml", std::process::id()));
    path
}

/// Result document reduced to what the assertions care about.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ResultDoc {
    /// Local names of the root's children, in document order.
    pub sections: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

#[allow(dead_code)]
pub fn read_result(path: &Path) -> ResultDoc {
    let doc = parse_xml_file(path).expect("parse result document");
    let root = doc.get_root_element().expect("result root");
    assert!(
        is_element(&root, RESULT_NS, "AFEValidateResult"),
        "unexpected root: {}",
        root.get_name()
    );

    let messages = |section: Option<Node>, item: &str| -> Vec<String> {
        section
            .map(|s| {
                s.get_child_elements()
                    .iter()
                    .filter(|e| is_element(e, RESULT_NS, item))
                    .map(Node::get_content)
                    .collect()
            })
            .unwrap_or_default()
    };

    ResultDoc {
        sections: root.get_child_elements().iter().map(Node::get_name).collect(),
        errors: messages(
            child_element(&root, RESULT_NS, "Failure"),
            "ValidationErrorMessage",
        ),
        warnings: messages(
            child_element(&root, RESULT_NS, "Warnings"),
            "ValidationWarningMessage",
        ),
    }
}
