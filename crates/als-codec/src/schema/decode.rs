//! Tree → model direction.

use super::{Schema, Tagged};
use crate::access::{self, AttrValue};
use crate::error::{AlsError, Result};
use crate::tree::{Document, NodeId};
use crate::version::Version;

/// Walks an existing document, filling the model.
pub(crate) struct Decoder<'d> {
    document: &'d Document,
    version: Version,
    node: NodeId,
    path: Vec<String>,
}

impl<'d> Decoder<'d> {
    /// Start at the root element of `document`.
    pub(crate) fn new(document: &'d Document, version: Version) -> Self {
        let root = document.root();
        Self {
            document,
            version,
            node: root,
            path: vec![document.name(root).to_string()],
        }
    }

    fn enter<F>(&mut self, node: NodeId, map: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let parent = std::mem::replace(&mut self.node, node);
        self.path.push(self.document.name(node).to_string());
        let result = map(self);
        self.path.pop();
        self.node = parent;
        result
    }
}

impl Schema for Decoder<'_> {
    fn version(&self) -> Version {
        self.version
    }

    fn is_decoding(&self) -> bool {
        true
    }

    fn path(&self) -> String {
        self.path.join("/")
    }

    fn attr<T: AttrValue>(&mut self, name: &str, value: &mut T) -> Result<()> {
        *value = access::read(self.document, self.node, name, &self.path())?;
        Ok(())
    }

    fn element<F>(&mut self, name: &str, map: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let child = access::child(self.document, self.node, name)
            .ok_or_else(|| AlsError::missing_field(format!("{}/{name}", self.path())))?;
        self.enter(child, map)
    }

    fn sequence<T, F>(&mut self, tag: &str, items: &mut Vec<T>, mut map: F) -> Result<()>
    where
        T: Default,
        F: FnMut(&mut Self, &mut T) -> Result<()>,
    {
        items.clear();
        for child in access::children(self.document, self.node) {
            if self.document.name(child) != tag {
                continue;
            }
            let mut item = T::default();
            self.enter(child, |s| map(s, &mut item))?;
            items.push(item);
        }
        Ok(())
    }

    fn variants<T, F>(&mut self, items: &mut Vec<T>, mut map: F) -> Result<()>
    where
        T: Tagged,
        F: FnMut(&mut Self, &mut T) -> Result<()>,
    {
        items.clear();
        for child in access::children(self.document, self.node) {
            let mut item = T::from_tag(self.document.name(child))?;
            self.enter(child, |s| map(s, &mut item))?;
            items.push(item);
        }
        Ok(())
    }
}
