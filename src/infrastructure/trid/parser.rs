//! TrID XML definition parser
//!
//! Reads the `*.trid.xml` format:
//!
//! ```xml
//! <TrID ver="2.00">
//!   <Info>
//!     <FileType>JPEG Bitmap</FileType>
//!     <Ext>JPG</Ext>
//!     <Mime>image/jpeg</Mime>
//!   </Info>
//!   <FrontBlock>
//!     <Pattern><Bytes>FFD8FF</Bytes><Pos>0</Pos></Pattern>
//!   </FrontBlock>
//!   <GlobalStrings>
//!     <String>JFIF</String>
//!   </GlobalStrings>
//! </TrID>
//! ```
//!
//! In global strings a `'` stands for a NUL byte.

use crate::domain::entities::{Definition, Pattern};
use roxmltree::{Document, Node};
use thiserror::Error;

/// Errors that can occur when parsing a definition
#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("Malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Root element is <{0}>, expected <TrID>")]
    UnexpectedRoot(String),

    #[error("Missing element <{0}>")]
    MissingElement(&'static str),

    #[error("Invalid pattern bytes '{bytes}': {source}")]
    InvalidBytes {
        bytes: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Invalid pattern position '{0}'")]
    InvalidPosition(String),
}

/// Parses one definition document
pub fn parse_definition(xml: &str) -> Result<Definition, DefinitionError> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    if root.tag_name().name() != "TrID" {
        return Err(DefinitionError::UnexpectedRoot(
            root.tag_name().name().to_string(),
        ));
    }

    let info = child(root, "Info").ok_or(DefinitionError::MissingElement("Info"))?;
    let file_type = child_text(info, "FileType").unwrap_or_default();
    let extension = child_text(info, "Ext").unwrap_or_default();

    let mut definition = Definition::new(file_type, extension);
    if let Some(mime) = child_text(info, "Mime").filter(|m| !m.is_empty()) {
        definition = definition.with_mime(mime);
    }

    if let Some(front) = child(root, "FrontBlock") {
        for node in front.children().filter(|n| n.has_tag_name("Pattern")) {
            definition = definition.with_pattern(parse_pattern(node)?);
        }
    }

    if let Some(strings) = child(root, "GlobalStrings") {
        for node in strings.children().filter(|n| n.has_tag_name("String")) {
            let bytes = decode_string(node.text().unwrap_or_default());
            if !bytes.is_empty() {
                definition = definition.with_string(bytes);
            }
        }
    }

    Ok(definition)
}

fn parse_pattern(node: Node<'_, '_>) -> Result<Pattern, DefinitionError> {
    let bytes = child_text(node, "Bytes").ok_or(DefinitionError::MissingElement("Bytes"))?;
    let position = child_text(node, "Pos").unwrap_or_else(|| "0".to_string());

    let decoded = hex::decode(&bytes).map_err(|source| DefinitionError::InvalidBytes {
        bytes: bytes.clone(),
        source,
    })?;
    let position = position
        .parse::<usize>()
        .map_err(|_| DefinitionError::InvalidPosition(position.clone()))?;

    Ok(Pattern::new(position, decoded))
}

/// Converts a global string to bytes: chars up to U+00FF map to one byte
fn decode_string(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\'' => bytes.push(0x00),
            c if (c as u32) <= 0xFF => bytes.push(c as u8),
            c => {
                let mut buf = [0u8; 4];
                bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    bytes
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    child(node, name).map(|n| n.text().unwrap_or_default().trim().to_string())
}
