//! Typed access to named children and attributes.
//!
//! Attribute text is coerced through [`AttrValue`]:
//!
//! | Type          | Accepted text                         | Rendered as        |
//! |---------------|---------------------------------------|--------------------|
//! | `bool`        | `true`, `1` / `false`, `0`            | `true` / `false`   |
//! | `String`      | anything, verbatim                    | verbatim           |
//! | `i32`, `u32`  | decimal integer within range          | decimal            |
//! | `f32`, `f64`  | decimal or scientific notation        | shortest exact     |
//!
//! Unsigned fields reject negative text instead of wrapping.

use crate::error::{AlsError, Result};
use crate::tree::{Document, NodeId};

/// A value that can be stored as attribute text.
pub trait AttrValue: Sized {
    /// Name of the type in error messages.
    const EXPECTED: &'static str;

    /// Parse attribute text, `None` when the text does not coerce.
    fn parse_attr(text: &str) -> Option<Self>;

    /// Canonical attribute text.
    fn render_attr(&self) -> String;
}

impl AttrValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn parse_attr(text: &str) -> Option<Self> {
        match text {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }

    fn render_attr(&self) -> String {
        String::from(if *self { "true" } else { "false" })
    }
}

impl AttrValue for String {
    const EXPECTED: &'static str = "string";

    fn parse_attr(text: &str) -> Option<Self> {
        Some(text.to_string())
    }

    fn render_attr(&self) -> String {
        self.clone()
    }
}

macro_rules! numeric_attr {
    ($($ty:ty => $expected:literal),* $(,)?) => {
        $(
            impl AttrValue for $ty {
                const EXPECTED: &'static str = $expected;

                fn parse_attr(text: &str) -> Option<Self> {
                    text.parse().ok()
                }

                fn render_attr(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

numeric_attr! {
    i32 => "32-bit signed integer",
    u32 => "32-bit unsigned integer",
    f32 => "single precision float",
    f64 => "double precision float",
}

/// First direct child named `name`.
pub fn child(document: &Document, node: NodeId, name: &str) -> Option<NodeId> {
    document.first_child_named(node, name)
}

/// All direct children, in document order.
pub fn children(document: &Document, node: NodeId) -> Vec<NodeId> {
    document.children(node).collect()
}

/// Read and coerce an attribute.
///
/// An absent attribute is a [`AlsError::MissingField`] naming
/// `path/@name`; text that does not coerce is an [`AlsError::InvalidValue`].
pub fn read<T: AttrValue>(document: &Document, node: NodeId, name: &str, path: &str) -> Result<T> {
    let text = document
        .attribute(node, name)
        .ok_or_else(|| AlsError::missing_field(format!("{path}/@{name}")))?;
    T::parse_attr(text)
        .ok_or_else(|| AlsError::invalid_value(format!("{path}/@{name}"), text, T::EXPECTED))
}

/// Read an attribute that may legitimately be absent.
pub fn read_optional<T: AttrValue>(
    document: &Document,
    node: NodeId,
    name: &str,
    path: &str,
) -> Result<Option<T>> {
    match document.attribute(node, name) {
        Some(_) => read(document, node, name, path).map(Some),
        None => Ok(None),
    }
}

/// Render and store an attribute.
pub fn write<T: AttrValue>(document: &mut Document, node: NodeId, name: &str, value: &T) {
    document.set_attribute(node, name, value.render_attr());
}

/// Append a new child element named `name`.
pub fn create_child(document: &mut Document, parent: NodeId, name: &str) -> NodeId {
    let child = document.create_node(name);
    document.append_child(parent, child);
    child
}
