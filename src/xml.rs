//! Minimal XML document model for SOAP envelopes.
//!
//! Documents are parsed with `quick-xml` into an owned element tree. Element
//! and attribute names are stored as local names: the vendor's envelopes mix
//! `soap:`, `ns1:` and default namespaces, and no two elements we care about
//! differ only by namespace.

use crate::error::{SymantecError, SymantecResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

/// Elements whose children always form a sequence, however many there are.
pub const LIST_CONTAINERS: &[&str] = &["ModificationEvents", "OrderDetails", "ApproverList", "Errors"];

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root_element: Element,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.content.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First direct child with the given local name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.name == name)
    }

    /// Follow a path of direct children.
    pub fn descendant(&self, path: &[&str]) -> Option<&Element> {
        path.iter().try_fold(self, |element, name| element.child(name))
    }

    /// Concatenated text content of this element (not of its children).
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Text of a direct child, if the child exists.
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).map(Element::text)
    }

    fn is_nil(&self) -> bool {
        self.attribute("nil") == Some("true")
    }

    /// Convert into a mapping keyed by vendor element names.
    ///
    /// Leaves become strings, `xsi:nil` elements become null, repeated
    /// children collapse into arrays, and [`LIST_CONTAINERS`] always become
    /// arrays.
    pub fn to_value(&self) -> Value {
        if self.is_nil() {
            return Value::Null;
        }

        if LIST_CONTAINERS.contains(&self.name.as_str()) {
            return Value::Array(self.child_elements().map(Element::to_value).collect());
        }

        let children: Vec<&Element> = self.child_elements().collect();
        if children.is_empty() {
            return Value::String(self.text());
        }

        let mut map = Map::new();
        for child in &children {
            let repeated = children.iter().filter(|c| c.name == child.name).count() > 1;
            let value = child.to_value();
            if !repeated {
                map.insert(child.name.clone(), value);
                continue;
            }
            if let Value::Array(items) = map
                .entry(child.name.clone())
                .or_insert_with(|| Value::Array(Vec::new()))
            {
                items.push(value);
            }
        }
        Value::Object(map)
    }
}

/// Parse a complete XML document.
pub fn parse(input: &str) -> SymantecResult<Document> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            SymantecError::response_parsing_error(format!(
                "Malformed XML at byte {}: {e}",
                reader.buffer_position()
            ))
        })?;

        match event {
            Event::Start(start) => stack.push(start_element(&start)?),
            Event::Empty(start) => {
                let element = start_element(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    SymantecError::response_parsing_error("Unbalanced closing tag")
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| {
                    SymantecError::response_parsing_error(format!("Invalid text content: {e}"))
                })?;
                push_text(&mut stack, text.into_owned());
            }
            Event::CData(data) => {
                let text = String::from_utf8(data.into_inner().into_owned()).map_err(|e| {
                    SymantecError::response_parsing_error(format!("Invalid CDATA content: {e}"))
                })?;
                push_text(&mut stack, text);
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(SymantecError::response_parsing_error(format!(
            "Unexpected end of document inside <{}>",
            stack.last().map(|e| e.name.as_str()).unwrap_or_default()
        )));
    }

    root.map(|root_element| Document { root_element })
        .ok_or_else(|| SymantecError::response_parsing_error("Document has no root element"))
}

fn start_element(start: &BytesStart<'_>) -> SymantecResult<Element> {
    let mut element = Element::new(decode_name(start.local_name().as_ref())?);

    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| {
            SymantecError::response_parsing_error(format!("Invalid attribute: {e}"))
        })?;
        let key = decode_name(attribute.key.local_name().as_ref())?;
        let value = attribute.unescape_value().map_err(|e| {
            SymantecError::response_parsing_error(format!("Invalid attribute value: {e}"))
        })?;
        element.attributes.push((key, value.into_owned()));
    }

    Ok(element)
}

fn decode_name(raw: &[u8]) -> SymantecResult<String> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|e| SymantecError::response_parsing_error(format!("Invalid element name: {e}")))
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> SymantecResult<()> {
    if let Some(parent) = stack.last_mut() {
        parent.content.push(Node::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(SymantecError::response_parsing_error(
            "Document has more than one root element",
        ));
    }
    *root = Some(element);
    Ok(())
}

fn push_text(stack: &mut [Element], text: String) {
    // Text outside the root element is ignored
    if let Some(parent) = stack.last_mut() {
        parent.content.push(Node::Text(text));
    }
}
