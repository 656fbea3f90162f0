//! [`Document`] → document text.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use super::{Document, NodeId};
use crate::error::{AlsError, Result};

/// Layout of serialized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Put every element on its own line, tab indented.
    pub indent: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self { indent: true }
    }
}

impl Document {
    /// Serialize with the default layout.
    pub fn serialize(&self) -> Result<String> {
        self.serialize_with(PrintOptions::default())
    }

    /// Serialize the declaration and the element tree.
    ///
    /// Childless elements are written in self-closing form.
    pub fn serialize_with(&self, options: PrintOptions) -> Result<String> {
        let mut writer = if options.indent {
            Writer::new_with_indent(Vec::new(), b'\t', 1)
        } else {
            Writer::new(Vec::new())
        };
        if let Some(declaration) = &self.declaration {
            emit(
                &mut writer,
                Event::Decl(BytesDecl::new(
                    &declaration.version,
                    declaration.encoding.as_deref(),
                    None,
                )),
            )?;
        }
        self.write_node(&mut writer, self.root)?;

        let mut bytes = writer.into_inner();
        if options.indent {
            bytes.push(b'\n');
        }
        String::from_utf8(bytes).map_err(|e| AlsError::malformed(e.to_string()))
    }

    fn write_node<W: Write>(&self, writer: &mut Writer<W>, id: NodeId) -> Result<()> {
        let node = self.node(id);
        let mut start = BytesStart::new(node.name());
        for (key, value) in node.attributes() {
            start.push_attribute((key.as_str(), value.as_str()));
        }
        if self.first_child(id).is_none() {
            return emit(writer, Event::Empty(start));
        }
        emit(writer, Event::Start(start))?;
        for child in self.children(id) {
            self.write_node(writer, child)?;
        }
        emit(writer, Event::End(BytesEnd::new(node.name())))
    }
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| AlsError::Io(std::io::Error::other(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_document() -> Document {
        let mut doc = Document::new("Ableton");
        let root = doc.root();
        doc.set_attribute(root, "Creator", "Ableton Live 9.7.7");
        let live_set = doc.create_node("LiveSet");
        doc.append_child(root, live_set);
        let name = doc.create_node("Annotation");
        doc.set_attribute(name, "Value", "A < B & \"C\"");
        doc.append_child(live_set, name);
        doc
    }

    #[test]
    fn test_serialize_indented() {
        let text = small_document().serialize().unwrap();
        insta::assert_snapshot!(text, @r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <Ableton Creator="Ableton Live 9.7.7">
        	<LiveSet>
        		<Annotation Value="A &lt; B &amp; &quot;C&quot;"/>
        	</LiveSet>
        </Ableton>
        "#);
    }

    #[test]
    fn test_serialize_compact() {
        let text = small_document()
            .serialize_with(PrintOptions { indent: false })
            .unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?><Ableton"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_serialized_text_parses_back() {
        let doc = small_document();
        let text = doc.serialize().unwrap();
        let back = Document::parse(&text).unwrap();
        let live_set = back.first_child_named(back.root(), "LiveSet").unwrap();
        let annotation = back.first_child_named(live_set, "Annotation").unwrap();
        assert_eq!(back.attribute(annotation, "Value"), Some("A < B & \"C\""));
        assert_eq!(back.node_count(), doc.node_count());
    }
}
