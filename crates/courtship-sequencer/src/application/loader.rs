//! Loading authored sequences.
//!
//! A script is a YAML or JSON list of beat descriptors, or a map with a
//! `beats` list and an optional `name`. Each element is decoded on its own:
//! an element with an unknown `type` or malformed fields is replaced by a
//! zero-length wait and reported as a [`Diagnostic`], so one bad beat never
//! prevents the rest of the cutscene from playing.

use std::path::Path;

use courtship_core::error::SequenceError;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::domain::descriptors::{BeatDescriptor, BeatKind};

/// Source syntax of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// JSON.
    Json,
    /// YAML (the default for anything not ending in `.json`).
    Yaml,
}

impl SourceFormat {
    /// Picks a format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Why an element was replaced by a zero-length wait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The element has no string `type` field.
    MissingType,
    /// The `type` names no known beat.
    UnknownType,
    /// The `type` is known but a field has the wrong shape.
    MalformedFields,
}

/// A problem found while decoding one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Position in the beat list.
    pub index: usize,
    /// The `type` tag, if present.
    pub tag: Option<String>,
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Human-readable detail.
    pub message: String,
}

/// A decoded script, ready to hand to the runner.
#[derive(Debug, Clone)]
pub struct SequenceScript {
    /// Optional script name.
    pub name: Option<String>,
    /// One descriptor per authored element.
    pub descriptors: Vec<BeatDescriptor>,
    /// Elements that were replaced by zero-length waits.
    pub diagnostics: Vec<Diagnostic>,
    /// Hex SHA-256 of the source text.
    pub digest: String,
}

impl SequenceScript {
    /// Parses a script.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::Parse` if the text is not valid in `format` or
    /// its top level is not a beat list, and `SequenceError::EmptyDocument`
    /// if it holds nothing.
    pub fn parse(source: &str, format: SourceFormat) -> Result<Self, SequenceError> {
        let document: Value = match format {
            SourceFormat::Json => serde_json::from_str(source)
                .map_err(|e| SequenceError::Parse(format!("invalid JSON: {e}")))?,
            SourceFormat::Yaml => serde_yaml::from_str(source)
                .map_err(|e| SequenceError::Parse(format!("invalid YAML: {e}")))?,
        };

        let (name, elements) = split_document(document)?;
        let mut descriptors = Vec::with_capacity(elements.len());
        let mut diagnostics = Vec::new();
        for (index, element) in elements.into_iter().enumerate() {
            match decode_element(index, element) {
                Ok(descriptor) => descriptors.push(descriptor),
                Err(diagnostic) => {
                    warn!(
                        index,
                        tag = diagnostic.tag.as_deref().unwrap_or("<none>"),
                        reason = %diagnostic.message,
                        "substituting zero-length wait for undecodable beat"
                    );
                    diagnostics.push(diagnostic);
                    descriptors.push(BeatDescriptor::noop());
                }
            }
        }

        let digest = format!("{:x}", Sha256::digest(source.as_bytes()));
        info!(
            name = name.as_deref().unwrap_or("<unnamed>"),
            beats = descriptors.len(),
            diagnostics = diagnostics.len(),
            %digest,
            "sequence script loaded"
        );

        Ok(Self {
            name,
            descriptors,
            diagnostics,
            digest,
        })
    }

    /// Reads and parses a script file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::Parse` if the file cannot be read, plus
    /// everything [`parse`](Self::parse) returns.
    pub fn load(path: &Path) -> Result<Self, SequenceError> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| SequenceError::Parse(format!("cannot read {}: {e}", path.display())))?;
        Self::parse(&source, SourceFormat::from_path(path))
    }
}

fn split_document(document: Value) -> Result<(Option<String>, Vec<Value>), SequenceError> {
    match document {
        Value::Null => Err(SequenceError::EmptyDocument),
        Value::Array(elements) => Ok((None, elements)),
        Value::Object(mut map) => {
            let name = map
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_owned);
            match map.remove("beats") {
                Some(Value::Array(elements)) => Ok((name, elements)),
                Some(_) => Err(SequenceError::Parse("`beats` must be a list".to_owned())),
                None => Err(SequenceError::Parse(
                    "expected a list of beats or a map with a `beats` list".to_owned(),
                )),
            }
        }
        _ => Err(SequenceError::Parse(
            "expected a list of beats or a map with a `beats` list".to_owned(),
        )),
    }
}

fn decode_element(index: usize, element: Value) -> Result<BeatDescriptor, Diagnostic> {
    let Some(tag) = element.get("type").and_then(Value::as_str).map(str::to_owned) else {
        return Err(Diagnostic {
            index,
            tag: None,
            kind: DiagnosticKind::MissingType,
            message: "beat has no `type`".to_owned(),
        });
    };

    if BeatKind::from_tag(&tag).is_none() {
        return Err(Diagnostic {
            index,
            message: format!("unrecognized beat type `{tag}`"),
            tag: Some(tag),
            kind: DiagnosticKind::UnknownType,
        });
    }

    serde_json::from_value(element).map_err(|e| Diagnostic {
        index,
        message: format!("malformed `{tag}` beat: {e}"),
        tag: Some(tag),
        kind: DiagnosticKind::MalformedFields,
    })
}
