//! Model → tree direction.

use super::{Schema, Tagged, ROOT_TAG};
use crate::access::{self, AttrValue};
use crate::error::Result;
use crate::tree::{Document, NodeId};
use crate::version::Version;

/// Grows a new document from the model.
pub(crate) struct Encoder {
    document: Document,
    version: Version,
    node: NodeId,
    path: Vec<String>,
}

impl Encoder {
    /// Start with an empty root element.
    pub(crate) fn new(version: Version) -> Self {
        let document = Document::new(ROOT_TAG);
        let node = document.root();
        Self {
            document,
            version,
            node,
            path: vec![ROOT_TAG.to_string()],
        }
    }

    /// The finished document.
    pub(crate) fn finish(self) -> Document {
        self.document
    }

    fn enter<F>(&mut self, name: &str, map: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let child = access::create_child(&mut self.document, self.node, name);
        let parent = std::mem::replace(&mut self.node, child);
        self.path.push(name.to_string());
        let result = map(self);
        self.path.pop();
        self.node = parent;
        result
    }
}

impl Schema for Encoder {
    fn version(&self) -> Version {
        self.version
    }

    fn is_decoding(&self) -> bool {
        false
    }

    fn path(&self) -> String {
        self.path.join("/")
    }

    fn attr<T: AttrValue>(&mut self, name: &str, value: &mut T) -> Result<()> {
        access::write(&mut self.document, self.node, name, value);
        Ok(())
    }

    fn element<F>(&mut self, name: &str, map: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.enter(name, map)
    }

    fn sequence<T, F>(&mut self, tag: &str, items: &mut Vec<T>, mut map: F) -> Result<()>
    where
        T: Default,
        F: FnMut(&mut Self, &mut T) -> Result<()>,
    {
        for item in items.iter_mut() {
            self.enter(tag, |s| map(s, item))?;
        }
        Ok(())
    }

    fn variants<T, F>(&mut self, items: &mut Vec<T>, mut map: F) -> Result<()>
    where
        T: Tagged,
        F: FnMut(&mut Self, &mut T) -> Result<()>,
    {
        for item in items.iter_mut() {
            self.enter(item.tag(), |s| map(s, item))?;
        }
        Ok(())
    }
}
