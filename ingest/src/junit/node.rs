use std::{borrow::Cow, io::BufRead};

use quick_xml::{
    events::{BytesCData, BytesStart, BytesText, Event},
    Reader,
};

use crate::error::IngestError;

/// A generic parsed element: tag, attributes, direct text and children.
///
/// `content` holds the element's own text and CDATA, entity-decoded and with
/// whitespace preserved. Text belonging to child elements lives on those
/// children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    pub name: String,
    attrs: Vec<(String, String)>,
    pub content: String,
    pub nodes: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Tag name with any namespace prefix removed.
    pub fn local_name(&self) -> &str {
        self.name
            .rsplit_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    pub fn is<T: AsRef<str>>(&self, tag: T) -> bool {
        self.local_name() == tag.as_ref()
    }

    pub fn attr<T: AsRef<str>>(&self, name: T) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name.as_ref())
            .map(|(_, value)| value.as_str())
    }

    /// Attribute value, or an empty string when the attribute is absent.
    pub fn attr_or_default<T: AsRef<str>>(&self, name: T) -> String {
        self.attr(name).map(String::from).unwrap_or_default()
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Sets an attribute, replacing an earlier value under the same name.
    pub fn set_attr<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn with_attr<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_content<T: Into<String>>(mut self, content: T) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_node(mut self, node: XmlNode) -> Self {
        self.nodes.push(node);
        self
    }
}

/// Reads a whole document into a tree.
///
/// The returned node is a synthetic, unnamed document root whose children
/// are every top-level element, so reports with several root elements are
/// accepted as-is.
pub fn parse<R: BufRead>(xml: R) -> Result<XmlNode, IngestError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut tree = TreeBuilder::new();
    let mut buf = Vec::new();
    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|source| IngestError::Xml {
                position: reader.buffer_position() as u64,
                source,
            })?;
        if tree.match_event(event)?.is_none() {
            break;
        }
        buf.clear();
    }

    tree.finish()
}

#[derive(Debug)]
struct TreeBuilder {
    // The document root sits at the bottom and is never popped by an end tag.
    open_nodes: Vec<XmlNode>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            open_nodes: vec![XmlNode::default()],
        }
    }

    fn match_event(&mut self, event: Event) -> Result<Option<()>, IngestError> {
        match event {
            Event::Eof => return Ok(None),
            Event::Start(e) => self.open_nodes.push(open_node(&e)),
            Event::Empty(e) => self.attach(open_node(&e)),
            Event::End(_) => self.close_node(),
            Event::Text(e) => self.append_content(&text::unescape(&e)),
            Event::CData(e) => self.append_content(&text::cdata(&e)),
            _ => (),
        };
        Ok(Some(()))
    }

    // The reader checks end names, so an end tag always has an open node.
    fn close_node(&mut self) {
        if self.open_nodes.len() > 1 {
            if let Some(node) = self.open_nodes.pop() {
                self.attach(node);
            }
        }
    }

    fn attach(&mut self, node: XmlNode) {
        if let Some(parent) = self.open_nodes.last_mut() {
            parent.nodes.push(node);
        }
    }

    fn append_content(&mut self, value: &str) {
        if let Some(node) = self.open_nodes.last_mut() {
            node.content.push_str(value);
        }
    }

    fn finish(mut self) -> Result<XmlNode, IngestError> {
        if self.open_nodes.len() > 1 {
            let unclosed = self
                .open_nodes
                .pop()
                .map(|node| node.name)
                .unwrap_or_default();
            return Err(IngestError::UnclosedElement(unclosed));
        }
        Ok(self.open_nodes.pop().unwrap_or_default())
    }
}

fn open_node(e: &BytesStart) -> XmlNode {
    let mut node = XmlNode::new(String::from_utf8_lossy(e.name().as_ref()));

    // Reporters occasionally repeat an attribute; keep the later value.
    let mut attributes = e.attributes();
    attributes.with_checks(false);
    for attr in attributes.flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = match attr.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        };
        node.set_attr(key, value);
    }

    node
}

mod text {
    use super::*;

    pub fn unescape<'a>(e: &'a BytesText<'a>) -> Cow<'a, str> {
        match e.unescape() {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!("Keeping raw text after failing to unescape it: {}", err);
                String::from_utf8_lossy(e)
            }
        }
    }

    pub fn cdata<'a>(e: &'a BytesCData<'a>) -> Cow<'a, str> {
        String::from_utf8_lossy(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_in_order() {
        let root = parse(
            r#"<?xml version="1.0"?>
<testsuites><testsuite name="a"/><testsuite name="b"><testcase name="c"/></testsuite></testsuites>"#
                .as_bytes(),
        )
        .unwrap();

        assert_eq!(root.name, "");
        assert_eq!(root.nodes.len(), 1);
        let suites = &root.nodes[0];
        assert!(suites.is("testsuites"));
        assert_eq!(
            suites
                .nodes
                .iter()
                .map(|n| n.attr("name").unwrap())
                .collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert_eq!(suites.nodes[1].nodes[0].attr("name"), Some("c"));
    }

    #[test]
    fn accepts_several_top_level_elements() {
        let root = parse(r#"<testsuite name="a"/><testsuite name="b"/>"#.as_bytes()).unwrap();
        assert_eq!(root.nodes.len(), 2);
    }

    #[test]
    fn decodes_text_and_cdata() {
        let root = parse(
            r#"<failure message="a &amp; b">x &lt; y<![CDATA[ <raw> & ]]></failure>"#.as_bytes(),
        )
        .unwrap();
        let failure = &root.nodes[0];
        assert_eq!(failure.attr("message"), Some("a & b"));
        assert_eq!(failure.content, "x < y <raw> & ");
    }

    #[test]
    fn repeated_attribute_keeps_later_value() {
        let root = parse(r#"<testcase name="first" name="second"/>"#.as_bytes()).unwrap();
        assert_eq!(root.nodes[0].attr("name"), Some("second"));
        assert_eq!(root.nodes[0].attrs().count(), 1);
    }

    #[test]
    fn local_name_strips_prefix() {
        let node = XmlNode::new("ns:testsuite");
        assert_eq!(node.local_name(), "testsuite");
        assert!(node.is("testsuite"));
    }

    #[test]
    fn mismatched_end_tag_is_an_error() {
        let result = parse("<testsuite><testcase></testsuite>".as_bytes());
        assert!(matches!(result, Err(IngestError::Xml { .. })));
    }

    #[test]
    fn end_tag_without_start_is_an_error() {
        let result = parse("</testsuite>".as_bytes());
        assert!(matches!(result, Err(IngestError::Xml { .. })));

        let result = parse("<testsuite/></testsuite>".as_bytes());
        assert!(matches!(result, Err(IngestError::Xml { .. })));
    }

    #[test]
    fn unclosed_element_is_an_error() {
        let result = parse("<testsuites><testsuite>".as_bytes());
        assert!(matches!(
            result,
            Err(IngestError::UnclosedElement(name)) if name == "testsuite"
        ));
    }
}
