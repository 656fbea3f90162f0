//! Versioned mapping between a [`Document`] and a [`Project`].
//!
//! Each section of the document is described once, as a function generic
//! over [`Schema`]. The [`Decoder`] runs such a function against an existing
//! tree and fills the model; the [`Encoder`] runs the same function against
//! the model and grows a new tree. Import and export therefore visit the
//! same fields, in the same order, under the same tag names, for every
//! version.
//!
//! Version-gated fields are `Option`s whose presence is decided by a
//! [`Version`] predicate at the call site:
//!
//! * decoding a present field requires it in the tree, decoding an absent
//!   one yields `None`;
//! * encoding a present field requires `Some`, encoding an absent one skips
//!   it whatever the model holds.

mod clip;
mod conform;
mod decode;
mod encode;
mod project;
mod track;

use als_model::{Project, UserTrack};

use crate::access::AttrValue;
use crate::error::{AlsError, Result};
use crate::tree::Document;
use crate::version::Version;

pub use conform::conform;
pub(crate) use decode::Decoder;
pub(crate) use encode::Encoder;

/// Root element of every document.
pub const ROOT_TAG: &str = "Ableton";

/// One direction of the document walk.
pub(crate) trait Schema: Sized {
    /// Version the walk is performed for.
    fn version(&self) -> Version;

    fn is_decoding(&self) -> bool;

    /// Slash-joined element path of the current element.
    fn path(&self) -> String;

    /// Map attribute `name` of the current element.
    fn attr<T: AttrValue>(&mut self, name: &str, value: &mut T) -> Result<()>;

    /// Map child element `name` of the current element with `map`.
    fn element<F>(&mut self, name: &str, map: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>;

    /// Map every child element named `tag`, one item per element.
    fn sequence<T, F>(&mut self, tag: &str, items: &mut Vec<T>, map: F) -> Result<()>
    where
        T: Default,
        F: FnMut(&mut Self, &mut T) -> Result<()>;

    /// Map every child element, choosing the item variant by tag name.
    fn variants<T, F>(&mut self, items: &mut Vec<T>, map: F) -> Result<()>
    where
        T: Tagged,
        F: FnMut(&mut Self, &mut T) -> Result<()>;

    /// Map a `<name Value=".."/>` leaf.
    fn value<T: AttrValue>(&mut self, name: &str, value: &mut T) -> Result<()> {
        self.element(name, |s| s.attr("Value", value))
    }

    /// Map a list wrapper, an element holding a single `LomId`.
    fn list_wrapper(&mut self, name: &str, lom_id: &mut u32) -> Result<()> {
        self.element(name, |s| s.attr("LomId", lom_id))
    }

    fn optional_attr<T>(&mut self, name: &str, present: bool, value: &mut Option<T>) -> Result<()>
    where
        T: AttrValue + Default,
    {
        let label = format!("@{name}");
        gated(self, present, value, &label, |s, item| s.attr(name, item))
    }

    fn optional_value<T>(&mut self, name: &str, present: bool, value: &mut Option<T>) -> Result<()>
    where
        T: AttrValue + Default,
    {
        gated(self, present, value, name, |s, item| s.value(name, item))
    }
}

/// A sum type whose variant is named by the element tag.
pub(crate) trait Tagged: Sized {
    fn tag(&self) -> &'static str;

    fn from_tag(tag: &str) -> Result<Self>;
}

impl Tagged for UserTrack {
    fn tag(&self) -> &'static str {
        match self {
            Self::Audio(_) => "AudioTrack",
            Self::Midi(_) => "MidiTrack",
            Self::Group(_) => "GroupTrack",
            Self::Return(_) => "ReturnTrack",
        }
    }

    fn from_tag(tag: &str) -> Result<Self> {
        use als_model::TrackKind;

        let kind = match tag {
            "AudioTrack" => TrackKind::Audio,
            "MidiTrack" => TrackKind::Midi,
            "GroupTrack" => TrackKind::Group,
            "ReturnTrack" => TrackKind::Return,
            other => return Err(AlsError::invalid_track_kind(other)),
        };
        Ok(Self::new(kind))
    }
}

fn gated<S, T, F>(s: &mut S, present: bool, value: &mut Option<T>, label: &str, map: F) -> Result<()>
where
    S: Schema,
    T: Default,
    F: FnOnce(&mut S, &mut T) -> Result<()>,
{
    if !present {
        if s.is_decoding() {
            *value = None;
        }
        return Ok(());
    }
    if s.is_decoding() {
        let mut item = T::default();
        map(s, &mut item)?;
        *value = Some(item);
        return Ok(());
    }
    match value {
        Some(item) => map(s, item),
        None => Err(AlsError::missing_field(format!("{}/{label}", s.path()))),
    }
}

/// Map a whole document tree onto a project.
///
/// The root element must be `Ableton`; its `Creator` attribute selects the
/// version every gated field is decided against.
pub fn decode(document: &Document) -> Result<(Project, Version)> {
    let root = document.root();
    if document.name(root) != ROOT_TAG {
        return Err(AlsError::malformed(format!(
            "root element is {}, expected {ROOT_TAG}",
            document.name(root)
        )));
    }
    let creator: String = crate::access::read(document, root, "Creator", ROOT_TAG)?;
    let version = Version::detect(&creator)?;
    tracing::debug!(%version, creator = %creator, "detected document version");

    let mut project = Project::default();
    let mut decoder = Decoder::new(document, version);
    project::map_project(&mut decoder, &mut project)?;
    tracing::debug!(
        tracks = project.tracks.len(),
        scenes = project.scenes.len(),
        clips = project.clip_count(),
        "decoded project"
    );
    Ok((project, version))
}

/// Build a document tree for `project` in the layout of `version`.
pub fn encode(project: &Project, version: Version) -> Result<Document> {
    match Version::detect(&project.version_info.creator) {
        Ok(detected) if detected == version => {}
        _ => tracing::warn!(
            %version,
            creator = %project.version_info.creator,
            "creator string does not name the target version"
        ),
    }

    let mut project = project.clone();
    let mut encoder = Encoder::new(version);
    project::map_project(&mut encoder, &mut project)?;
    let document = encoder.finish();
    tracing::debug!(%version, nodes = document.node_count(), "encoded project");
    Ok(document)
}
