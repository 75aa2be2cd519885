//! Metadata rules for `model.config` and `model.sdf`.
//!
//! Both files are expected to start from the standard template. A file that
//! is not well-formed XML, or lacks a node the template always has, is a
//! hard failure rather than a finding. A missing file is skipped; the
//! structure rule already reports it.

use crate::error::{CheckError, Result};
use crate::models::convention::Convention;
use crate::models::Finding;
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;

fn read(path: &Path) -> Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|e| CheckError::io(path, e))
}

fn parse<'a>(path: &Path, text: &'a str) -> Result<Document<'a>> {
    Document::parse(text).map_err(|source| CheckError::Xml {
        path: path.to_path_buf(),
        source,
    })
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name() == name)
}

fn require<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
    path: &Path,
) -> Result<Node<'a, 'input>> {
    child(node, name).ok_or_else(|| CheckError::MissingNode {
        path: path.to_path_buf(),
        node: name.to_string(),
    })
}

/// Author identity and description completeness in `model.config`.
pub fn check_config(path: &Path, conv: &Convention) -> Result<Vec<Finding>> {
    let text = match read(path)? {
        Some(t) => t,
        None => return Ok(Vec::new()),
    };
    let doc = parse(path, &text)?;
    let root = doc.root_element();
    let author = require(root, "author", path)?;
    let description = require(root, "description", path)?;

    let mut findings = Vec::new();
    for field in ["name", "email"] {
        let value = child(author, field).and_then(|n| n.text()).unwrap_or("");
        if conv.is_author_placeholder(value) {
            findings.push(Finding::warning(format!(
                "author {} missing or left as template value",
                field
            )));
        }
    }
    let desc = description.text().unwrap_or("").trim();
    if desc.is_empty() || desc == conv.description_placeholder {
        findings.push(Finding::error("model description missing or left as template value"));
    }
    Ok(findings)
}

fn components(node: Node, path: &Path) -> Result<Vec<f64>> {
    let text = node.text().unwrap_or("");
    text.split_whitespace()
        .map(|t| {
            t.parse::<f64>().map_err(|_| CheckError::MalformedNode {
                path: path.to_path_buf(),
                node: node.tag_name().name().to_string(),
                value: text.trim().to_string(),
            })
        })
        .collect()
}

/// Every `<pose>` must be all zero and every `<scale>` all one in `model.sdf`.
pub fn check_scene(path: &Path) -> Result<Vec<Finding>> {
    let text = match read(path)? {
        Some(t) => t,
        None => return Ok(Vec::new()),
    };
    let doc = parse(path, &text)?;
    if doc.root_element().tag_name().name() != "sdf" {
        return Err(CheckError::MissingNode {
            path: path.to_path_buf(),
            node: "sdf".to_string(),
        });
    }
    let mut findings = Vec::new();
    for node in doc.descendants().filter(|n| n.is_element()) {
        match node.tag_name().name() {
            "pose" => {
                if components(node, path)?.iter().any(|v| *v != 0.0) {
                    findings.push(Finding::warning(format!(
                        "pose not zero: {}",
                        node.text().unwrap_or("").trim()
                    )));
                }
            }
            "scale" => {
                if components(node, path)?.iter().any(|v| *v != 1.0) {
                    findings.push(Finding::warning(format!(
                        "scale not one: {}",
                        node.text().unwrap_or("").trim()
                    )));
                }
            }
            _ => {}
        }
    }
    Ok(findings)
}
