//! Document text → [`Document`].

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::events::{BytesDecl, BytesStart, Event};

use super::{Declaration, Document, Node, NodeId};
use crate::error::{AlsError, Result};

impl Document {
    /// Parse document text.
    ///
    /// The text must hold exactly one root element. Whitespace between
    /// elements, comments and processing instructions are dropped; any
    /// other text content is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let mut reader = Reader::from_str(text);
        let mut arena = id_arena::Arena::new();
        let mut declaration = None;
        let mut root: Option<NodeId> = None;
        let mut open: Vec<NodeId> = Vec::new();

        loop {
            let position = reader.buffer_position();
            let event = reader
                .read_event()
                .map_err(|e| AlsError::malformed(format!("at byte {position}: {e}")))?;
            match event {
                Event::Decl(decl) => {
                    if root.is_some() || declaration.is_some() {
                        return Err(AlsError::malformed("misplaced declaration"));
                    }
                    declaration = Some(read_declaration(&decl)?);
                }
                Event::Start(start) => {
                    let id = attach(&mut arena, &mut root, &open, &start)?;
                    open.push(id);
                }
                Event::Empty(start) => {
                    attach(&mut arena, &mut root, &open, &start)?;
                }
                Event::End(end) => {
                    let Some(id) = open.pop() else {
                        return Err(AlsError::malformed("unbalanced closing tag"));
                    };
                    let qname = end.name();
                    let name = utf8(qname.as_ref())?;
                    if arena[id].name != name {
                        return Err(AlsError::malformed(format!(
                            "closing tag {name} does not match {}",
                            arena[id].name
                        )));
                    }
                }
                Event::Text(text) => {
                    if !text.iter().all(u8::is_ascii_whitespace) {
                        return Err(AlsError::malformed("unexpected text content"));
                    }
                }
                Event::GeneralRef(_) => {
                    return Err(AlsError::malformed("unexpected text content"));
                }
                Event::CData(_) => {
                    return Err(AlsError::malformed("unexpected CDATA section"));
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(id) = open.last() {
            return Err(AlsError::malformed(format!(
                "unclosed element {}",
                arena[*id].name
            )));
        }
        let root = root.ok_or_else(|| AlsError::malformed("document has no root element"))?;
        tracing::debug!(nodes = arena.len(), "parsed document tree");
        Ok(Self {
            arena,
            root,
            declaration,
        })
    }
}

/// Allocate a node for `start` and link it under the innermost open
/// element, or make it the root.
fn attach(
    arena: &mut id_arena::Arena<Node>,
    root: &mut Option<NodeId>,
    open: &[NodeId],
    start: &BytesStart<'_>,
) -> Result<NodeId> {
    let mut node = Node::new(utf8(start.name().as_ref())?);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| AlsError::malformed(e.to_string()))?;
        let key = utf8(attribute.key.as_ref())?.to_string();
        let value = attribute
            .unescape_value()
            .map_err(|e| AlsError::malformed(format!("attribute {key}: {e}")))?;
        node.attributes.push((key, value.into_owned()));
    }

    let parent = open.last().copied();
    node.parent = parent;
    let id = arena.alloc(node);
    match parent {
        Some(parent) => {
            match arena[parent].last_child {
                Some(last) => arena[last].next_sibling = Some(id),
                None => arena[parent].first_child = Some(id),
            }
            arena[parent].last_child = Some(id);
        }
        None if root.is_none() => *root = Some(id),
        None => return Err(AlsError::malformed("document has more than one root element")),
    }
    Ok(id)
}

fn read_declaration(decl: &BytesDecl<'_>) -> Result<Declaration> {
    let version = decl
        .version()
        .map_err(|e| AlsError::malformed(format!("declaration version: {e}")))?;
    let encoding = decl
        .encoding()
        .transpose()
        .map_err(|e| AlsError::malformed(format!("declaration encoding: {e}")))?;
    Ok(Declaration {
        version: lossy(version),
        encoding: encoding.map(lossy),
    })
}

fn utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| AlsError::malformed(format!("invalid UTF-8 name: {e}")))
}

fn lossy(bytes: Cow<'_, [u8]>) -> String {
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_elements_and_attributes() {
        let doc = Document::parse(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<Ableton MajorVersion="5" Creator="Ableton Live 11.0.0">
	<LiveSet>
		<Tracks>
			<AudioTrack Id="8" />
			<MidiTrack Id="9"></MidiTrack>
		</Tracks>
	</LiveSet>
</Ableton>
"#,
        )
        .unwrap();
        let root = doc.root();
        assert_eq!(doc.name(root), "Ableton");
        assert_eq!(doc.attribute(root, "Creator"), Some("Ableton Live 11.0.0"));
        let declaration = doc.declaration().unwrap();
        assert_eq!(declaration.version, "1.0");
        assert_eq!(declaration.encoding.as_deref(), Some("UTF-8"));

        let live_set = doc.first_child_named(root, "LiveSet").unwrap();
        let tracks = doc.first_child_named(live_set, "Tracks").unwrap();
        let ids: Vec<_> = doc
            .children(tracks)
            .map(|id| (doc.name(id), doc.attribute(id, "Id")))
            .collect();
        assert_eq!(
            ids,
            vec![("AudioTrack", Some("8")), ("MidiTrack", Some("9"))]
        );
    }

    #[test]
    fn test_attribute_entities_are_unescaped() {
        let doc = Document::parse(r#"<Name Value="Bass &amp; Drums &quot;A&quot;" />"#).unwrap();
        assert_eq!(
            doc.attribute(doc.root(), "Value"),
            Some(r#"Bass & Drums "A""#)
        );
    }

    #[test]
    fn test_comments_are_dropped() {
        let doc = Document::parse("<A><!-- note --><B /></A>").unwrap();
        assert_eq!(doc.children(doc.root()).count(), 1);
    }

    #[test]
    fn test_rejects_mismatched_tags() {
        let err = Document::parse("<A><B></A></B>").unwrap_err();
        assert!(matches!(err, AlsError::MalformedTree { .. }));
    }

    #[test]
    fn test_rejects_unclosed_element() {
        let err = Document::parse("<A><B>").unwrap_err();
        assert!(matches!(err, AlsError::MalformedTree { .. }));
    }

    #[test]
    fn test_rejects_text_content() {
        let err = Document::parse("<A>hello</A>").unwrap_err();
        assert!(matches!(err, AlsError::MalformedTree { .. }));
    }

    #[test]
    fn test_rejects_entity_reference_text() {
        for text in ["<A>&amp;</A>", "<A>&#65;</A>", "<A> &lt; </A>"] {
            let err = Document::parse(text).unwrap_err();
            assert!(matches!(err, AlsError::MalformedTree { .. }), "{text}");
        }
    }

    #[test]
    fn test_rejects_empty_and_multi_root_documents() {
        assert!(matches!(
            Document::parse("   ").unwrap_err(),
            AlsError::MalformedTree { .. }
        ));
        assert!(matches!(
            Document::parse("<A /><B />").unwrap_err(),
            AlsError::MalformedTree { .. }
        ));
    }
}
