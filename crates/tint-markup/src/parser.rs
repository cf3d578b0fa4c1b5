//! Markup tree provider backed by `quick-xml`.

#![allow(clippy::unused_self)] // Unit struct methods have &self for API consistency

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::catalog::ROOT_TAG;
use crate::entities::{decode_entities, decode_entity};
use crate::error::ParseError;
use crate::tree::{Attribute, Document, Element, Node};

/// Parse inline markup fragments into a [`Document`].
pub struct MarkupParser;

impl MarkupParser {
    /// Create a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse a markup fragment.
    ///
    /// The fragment is wrapped in a synthetic `<root>` element, so bare text
    /// and several top-level elements are accepted. Whitespace is preserved
    /// and adjacent text, CDATA and entity references are joined into one
    /// text node.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment is not well-formed. Use
    /// [`ParseError::kind`] to tell tag-structure problems from other
    /// syntax errors.
    pub fn parse(&self, text: &str) -> Result<Document, ParseError> {
        let wrapped = format!("<{ROOT_TAG}>{text}</{ROOT_TAG}>");

        let mut reader = Reader::from_str(&wrapped);
        reader.config_mut().trim_text(false);
        reader.config_mut().check_end_names = true;

        self.build_tree(&mut reader)
    }

    fn build_tree<R: BufRead>(&self, reader: &mut Reader<R>) -> Result<Document, ParseError> {
        let mut buf = Vec::new();
        // Open elements, outermost first
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            buf.clear();
            let event = reader.read_event_into(&mut buf)?;

            if root.is_some() && !matches!(event, Event::Eof) {
                return Err(ParseError::TrailingContent(ROOT_TAG.to_owned()));
            }

            match event {
                Event::Start(e) => {
                    stack.push(self.decode_element(reader, &e)?);
                }
                Event::Empty(e) => {
                    let element = self.decode_element(reader, &e)?;
                    open_element(&mut stack)?
                        .children
                        .push(Node::Element(element));
                }
                Event::End(_) => {
                    // The reader has already checked the name against the open tag
                    let Some(element) = stack.pop() else {
                        return Err(ParseError::TrailingContent(ROOT_TAG.to_owned()));
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(Node::Element(element)),
                        None => root = Some(element),
                    }
                }
                Event::Text(e) => {
                    let text = reader.decoder().decode(&e)?;
                    open_element(&mut stack)?.push_text(&text);
                }
                Event::GeneralRef(e) => {
                    // Entity references (e.g., &lt; &nbsp; &#169;)
                    let entity = reader.decoder().decode(&e)?;
                    open_element(&mut stack)?.push_text(&decode_entity(&entity));
                }
                Event::CData(e) => {
                    let text = String::from_utf8_lossy(&e);
                    open_element(&mut stack)?.push_text(&text);
                }
                Event::Comment(e) => {
                    let comment = reader.decoder().decode(&e)?.into_owned();
                    open_element(&mut stack)?
                        .children
                        .push(Node::Comment(comment));
                }
                Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
                Event::Eof => break,
            }
        }

        if let Some(unclosed) = stack.pop() {
            return Err(ParseError::UnclosedTag(unclosed.name.clone()));
        }
        root.map(Document::new)
            .ok_or_else(|| ParseError::UnclosedTag(ROOT_TAG.to_owned()))
    }

    fn decode_element<R: BufRead>(
        &self,
        reader: &Reader<R>,
        e: &BytesStart,
    ) -> Result<Element, ParseError> {
        let name = reader.decoder().decode(e.name().as_ref())?.into_owned();

        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr?;
            let key = reader.decoder().decode(attr.key.as_ref())?.into_owned();
            let raw = reader.decoder().decode(&attr.value)?;
            let value = decode_entities(&raw).into_owned();
            attributes.push(Attribute::new(key, value));
        }

        Ok(Element::new(name).with_attributes(attributes))
    }
}

impl Default for MarkupParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Innermost open element.
fn open_element(stack: &mut [Element]) -> Result<&mut Element, ParseError> {
    stack
        .last_mut()
        .ok_or_else(|| ParseError::TrailingContent(ROOT_TAG.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use pretty_assertions::assert_eq;

    fn text(value: &str) -> Node {
        Node::Text(value.to_owned())
    }

    fn parse(input: &str) -> Document {
        MarkupParser::new().parse(input).unwrap()
    }

    fn failure(input: &str) -> FailureKind {
        MarkupParser::new().parse(input).unwrap_err().kind()
    }

    #[test]
    fn test_parse_bare_text() {
        let doc = parse("hello dart");
        assert_eq!(doc.root().name, ROOT_TAG);
        assert_eq!(doc.root().children, vec![text("hello dart")]);
    }

    #[test]
    fn test_parse_nested_elements() {
        let doc = parse("hello <b>dart and <u>flutter</u></b>");
        let expected = Element::new(ROOT_TAG).with_children(vec![
            text("hello "),
            Node::Element(Element::new("b").with_children(vec![
                text("dart and "),
                Node::Element(Element::new("u").with_children(vec![text("flutter")])),
            ])),
        ]);
        assert_eq!(doc.root(), &expected);
    }

    #[test]
    fn test_parse_multiple_top_level_elements() {
        let doc = parse("<b>a</b><i>b</i>");
        assert_eq!(doc.root().children.len(), 2);
    }

    #[test]
    fn test_parse_attributes_keep_order() {
        let doc = parse(r#"<span fontSize="12" color="red" href="x">t</span>"#);
        let Node::Element(span) = &doc.root().children[0] else {
            panic!("expected element");
        };
        assert_eq!(
            span.attributes,
            vec![
                Attribute::new("fontSize", "12"),
                Attribute::new("color", "red"),
                Attribute::new("href", "x"),
            ]
        );
    }

    #[test]
    fn test_parse_attribute_entities() {
        let doc = parse(r#"<a href="x&nbsp;y&lt;&#33;&what;">t</a>"#);
        let Node::Element(anchor) = &doc.root().children[0] else {
            panic!("expected element");
        };
        assert_eq!(
            anchor.attributes,
            vec![Attribute::new("href", "x\u{00a0}y<!&what;")]
        );
    }

    #[test]
    fn test_parse_preserves_whitespace() {
        let doc = parse("  a <b> </b> ");
        assert_eq!(doc.root().children[0], text("  a "));
        let Node::Element(b) = &doc.root().children[1] else {
            panic!("expected element");
        };
        assert_eq!(b.children, vec![text(" ")]);
    }

    #[test]
    fn test_parse_entities_join_text() {
        let doc = parse("a &amp; b&nbsp;&#169;&bogus;");
        assert_eq!(
            doc.root().children,
            vec![text("a & b\u{00a0}\u{00a9}&bogus;")]
        );
    }

    #[test]
    fn test_parse_cdata_as_text() {
        let doc = parse("x<![CDATA[<b>]]>y");
        assert_eq!(doc.root().children, vec![text("x<b>y")]);
    }

    #[test]
    fn test_parse_comment_node() {
        let doc = parse("a<!-- note -->b");
        assert_eq!(
            doc.root().children,
            vec![text("a"), Node::Comment(" note ".to_owned()), text("b")]
        );
    }

    #[test]
    fn test_parse_self_closing_element() {
        let doc = parse("a<br/>b");
        assert_eq!(
            doc.root().children,
            vec![text("a"), Node::Element(Element::new("br")), text("b")]
        );
    }

    #[test]
    fn test_unclosed_tag_is_invalid_tag() {
        assert_eq!(failure("hello <b>world"), FailureKind::InvalidTag);
    }

    #[test]
    fn test_mismatched_tag_is_invalid_tag() {
        assert_eq!(failure("<b>hello</u>"), FailureKind::InvalidTag);
    }

    #[test]
    fn test_stray_end_tag_is_invalid_tag() {
        assert_eq!(failure("hello</b>"), FailureKind::InvalidTag);
    }

    #[test]
    fn test_closing_synthetic_root_is_invalid_tag() {
        assert_eq!(failure("a</root>b"), FailureKind::InvalidTag);
    }

    #[test]
    fn test_unquoted_attribute_is_malformed() {
        assert_eq!(failure("<span color=red>x</span>"), FailureKind::DocumentMalformed);
    }

    #[test]
    fn test_duplicate_attribute_is_malformed() {
        assert_eq!(
            failure(r#"<span color="a" color="b">x</span>"#),
            FailureKind::DocumentMalformed
        );
    }

    #[test]
    fn test_unclosed_comment_is_malformed() {
        assert_eq!(failure("a <!-- b"), FailureKind::DocumentMalformed);
    }
}
