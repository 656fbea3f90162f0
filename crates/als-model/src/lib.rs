//! Typed model of a Live set.
//!
//! The model is plain data: every entity is default-constructible, owned by
//! value, and carries no I/O. Reading and writing `.als` containers lives in
//! the `als-codec` crate.
//!
//! Fields that only exist for some document versions are `Option`s; which
//! of them are populated is decided by the codec from the detected version.

pub mod clip;
pub mod project;
pub mod track;

pub use clip::{AudioClip, ClipLoop, FollowAction, WarpMarker};
pub use project::{
    Grid, GroovePool, ListWrappers, Point, Project, Quantization, ScaleInformation, Scene,
    SequencerNavigator, TimeSelection, Transport, VersionInfo, ViewPanels, ViewStates, WindowRect,
};
pub use track::{
    AudioTrack, AutomationLane, DeviceChain, EnvelopeChooser, GroupTrack, MainTrack, MidiTrack,
    Mixer, PlayerState, ReturnTrack, Routing, Track, TrackBase, TrackDelay, TrackKind, TrackName,
    UserTrack,
};
