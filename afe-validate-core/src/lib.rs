//! Validation of AFE (authorization-for-expenditure) documents.
//!
//! Reads an AFE XML document, applies the business rules to its
//! `DocumentData`, and writes an `AFEValidateResult` XML document.
//!
//! # Examples
//! ```rust,no_run
//! use std::path::Path;
//! use afe_validate_core::validate_afe_file;
//!
//! let outcome = validate_afe_file(Path::new("afe.xml"), Path::new("result.xml"))?;
//! println!("errors: {}", outcome.errors().len());
//! # Ok::<(), afe_validate_core::Error>(())
//! ```
pub mod afe;

use afe::ValidationOutcome;
use afe::xml::ToXml;
use afe::xml::parse::{ParseError, parse_afe_xml_file};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Top-level error wrapper for a validation run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Xml(#[from] afe::xml::ResultXmlError),
    #[error("failed to write result to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// Process exit code reported for this failure.
    ///
    /// 1: input unreadable or not well-formed, 2: required element missing,
    /// 3: result could not be written.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Parse(ParseError::Io { .. } | ParseError::XmlParse(_)) => 1,
            Error::Parse(ParseError::MissingElement(_)) => 2,
            Error::Xml(_) | Error::Write { .. } => 3,
        }
    }
}

/// Validate the AFE document at `input` and write the result document to `output`.
///
/// Nothing is written when the input cannot be read or lacks a required element.
pub fn validate_afe_file(input: &Path, output: &Path) -> Result<ValidationOutcome, Error> {
    let data = parse_afe_xml_file(input).inspect_err(|err| {
        warn!(path = %input.display(), error = %err, "could not load AFE document");
    })?;
    let outcome = afe::validate(&data);
    write_result(output, &outcome)?;
    Ok(outcome)
}

/// Serialize `outcome` and write it to `output`.
///
/// The document is written to a hidden sibling file first and renamed into
/// place, so a failed write never leaves a partial result at `output`.
pub fn write_result(output: &Path, outcome: &ValidationOutcome) -> Result<(), Error> {
    let xml = outcome.to_xml()?;
    let write_error = |source: std::io::Error| {
        warn!(path = %output.display(), error = %source, "could not write result document");
        Error::Write {
            path: output.to_path_buf(),
            source,
        }
    };

    let staged = staging_path(output).ok_or_else(|| {
        write_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "output path has no file name",
        ))
    })?;
    if let Err(source) =
        std::fs::write(&staged, xml).and_then(|()| std::fs::rename(&staged, output))
    {
        std::fs::remove_file(&staged).ok();
        return Err(write_error(source));
    }

    debug!(path = %output.display(), success = outcome.is_success(), "wrote result document");
    Ok(())
}

fn staging_path(output: &Path) -> Option<PathBuf> {
    let mut name = OsString::from(".");
    name.push(output.file_name()?);
    name.push(format!(".{}.tmp", std::process::id()));
    Some(output.with_file_name(name))
}
