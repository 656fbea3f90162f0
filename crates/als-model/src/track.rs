//! Mixer tracks.
//!
//! The four user-created track kinds form the closed sum type [`UserTrack`].
//! Every kind, including the master and pre-hear tracks, shares the
//! attributes held in [`TrackBase`] and a [`DeviceChain`]; the [`Track`]
//! trait exposes those parts uniformly so callers never need to match on
//! the variant just to reach a shared field.

use serde::{Deserialize, Serialize};

use crate::clip::AudioClip;

/// Track kind discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackKind {
    Audio,
    Midi,
    Group,
    Return,
}

impl TrackKind {
    /// All user track kinds, in display order.
    pub const ALL: [TrackKind; 4] = [Self::Audio, Self::Midi, Self::Group, Self::Return];

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Audio => "Audio",
            Self::Midi => "MIDI",
            Self::Group => "Group",
            Self::Return => "Return",
        }
    }
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Track delay compensation setting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackDelay {
    pub value: f64,
    /// Whether `value` is expressed in samples rather than milliseconds.
    pub is_value_sample_based: bool,
}

/// The naming triple of a track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackName {
    /// Name shown in the mixer (user name, or a generated one).
    pub effective_name: String,
    pub user_name: String,
    pub annotation: String,
    /// Only stored by versions that remember the first clip name.
    pub memorized_first_clip_name: Option<String>,
}

/// Attributes shared by every track kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackBase {
    pub lom_id: u32,
    pub lom_id_view: u32,
    pub envelope_mode_preferred: bool,
    pub delay: TrackDelay,
    pub name: TrackName,
    /// RGB color value. Set for versions that store colors directly.
    pub color: Option<u32>,
    /// Palette index. Set for versions that store palette colors.
    pub color_index: Option<u32>,
    /// Id of the enclosing group track, `-1` when the track is top level.
    pub track_group_id: i32,
    pub track_unfolded: bool,
    pub devices_list_wrapper_lom_id: u32,
    pub clip_slots_list_wrapper_lom_id: u32,
    /// Opaque view-state blob, carried through verbatim.
    pub view_data: String,
}

/// Playback and freeze state of audio, MIDI and group tracks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub saved_playing_slot: i32,
    pub saved_playing_offset: i32,
    pub midi_fold_in: bool,
    pub midi_prelisten: bool,
    pub freeze: bool,
    pub velocity_detail: u32,
    pub need_arranger_refreeze: bool,
    pub post_process_freeze_clips: u32,
    pub midi_target_prefers_fold_or_is_not_uniform: bool,
}

/// A single automation lane of the arrangement view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutomationLane {
    pub id: u32,
    pub selected_device: u32,
    pub selected_envelope: u32,
    pub is_content_selected: bool,
    pub lane_height: u32,
    pub fade_view_visible: bool,
}

/// Device/envelope selection of the clip envelope chooser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeChooser {
    pub selected_device: u32,
    pub selected_envelope: u32,
}

/// One input or output routing of a track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Routing {
    pub target: String,
    pub upper_display_string: String,
    pub lower_display_string: String,
}

/// Mixer block of a device chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mixer {
    pub lom_id: u32,
    pub lom_id_view: u32,
    pub is_expanded: bool,
}

/// Per-track signal chain state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceChain {
    pub automation_lanes: Vec<AutomationLane>,
    /// Folding flag of the lanes wrapper itself.
    pub additional_lanes_folded: bool,
    pub envelope_chooser: EnvelopeChooser,
    pub audio_input: Routing,
    pub midi_input: Routing,
    pub audio_output: Routing,
    pub midi_output: Routing,
    pub mixer: Mixer,
}

/// Uniform access to the parts every track kind has.
pub trait Track {
    /// Shared attributes.
    fn base(&self) -> &TrackBase;
    fn base_mut(&mut self) -> &mut TrackBase;

    fn device_chain(&self) -> &DeviceChain;
    fn device_chain_mut(&mut self) -> &mut DeviceChain;

    /// List id of a user track. Singleton tracks have none.
    fn id_mut(&mut self) -> Option<&mut u32> {
        None
    }

    /// Player state, for the kinds that have one.
    fn player(&self) -> Option<&PlayerState> {
        None
    }

    fn player_mut(&mut self) -> Option<&mut PlayerState> {
        None
    }

    /// Arrangement clips, for the kinds that hold audio clips.
    fn clips(&self) -> Option<&[AudioClip]> {
        None
    }

    fn clips_mut(&mut self) -> Option<&mut Vec<AudioClip>> {
        None
    }
}

/// An audio track with arrangement clips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioTrack {
    pub id: u32,
    pub base: TrackBase,
    pub player: PlayerState,
    pub device_chain: DeviceChain,
    pub clips: Vec<AudioClip>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MidiTrack {
    pub id: u32,
    pub base: TrackBase,
    pub player: PlayerState,
    pub device_chain: DeviceChain,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupTrack {
    pub id: u32,
    pub base: TrackBase,
    pub player: PlayerState,
    pub device_chain: DeviceChain,
}

/// A return (send effect) track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnTrack {
    pub id: u32,
    pub base: TrackBase,
    pub device_chain: DeviceChain,
}

/// Master and pre-hear tracks: base attributes and a device chain only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainTrack {
    pub base: TrackBase,
    pub device_chain: DeviceChain,
}

macro_rules! impl_track_parts {
    () => {
        fn base(&self) -> &TrackBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut TrackBase {
            &mut self.base
        }

        fn device_chain(&self) -> &DeviceChain {
            &self.device_chain
        }

        fn device_chain_mut(&mut self) -> &mut DeviceChain {
            &mut self.device_chain
        }
    };
}

impl Track for AudioTrack {
    impl_track_parts!();

    fn id_mut(&mut self) -> Option<&mut u32> {
        Some(&mut self.id)
    }

    fn player(&self) -> Option<&PlayerState> {
        Some(&self.player)
    }

    fn player_mut(&mut self) -> Option<&mut PlayerState> {
        Some(&mut self.player)
    }

    fn clips(&self) -> Option<&[AudioClip]> {
        Some(&self.clips)
    }

    fn clips_mut(&mut self) -> Option<&mut Vec<AudioClip>> {
        Some(&mut self.clips)
    }
}

impl Track for MidiTrack {
    impl_track_parts!();

    fn id_mut(&mut self) -> Option<&mut u32> {
        Some(&mut self.id)
    }

    fn player(&self) -> Option<&PlayerState> {
        Some(&self.player)
    }

    fn player_mut(&mut self) -> Option<&mut PlayerState> {
        Some(&mut self.player)
    }
}

impl Track for GroupTrack {
    impl_track_parts!();

    fn id_mut(&mut self) -> Option<&mut u32> {
        Some(&mut self.id)
    }

    fn player(&self) -> Option<&PlayerState> {
        Some(&self.player)
    }

    fn player_mut(&mut self) -> Option<&mut PlayerState> {
        Some(&mut self.player)
    }
}

impl Track for ReturnTrack {
    impl_track_parts!();

    fn id_mut(&mut self) -> Option<&mut u32> {
        Some(&mut self.id)
    }
}

impl Track for MainTrack {
    impl_track_parts!();
}

/// A user-created track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum UserTrack {
    Audio(AudioTrack),
    Midi(MidiTrack),
    Group(GroupTrack),
    Return(ReturnTrack),
}

impl UserTrack {
    /// Create an empty track of the given kind.
    #[must_use]
    pub fn new(kind: TrackKind) -> Self {
        match kind {
            TrackKind::Audio => Self::Audio(AudioTrack::default()),
            TrackKind::Midi => Self::Midi(MidiTrack::default()),
            TrackKind::Group => Self::Group(GroupTrack::default()),
            TrackKind::Return => Self::Return(ReturnTrack::default()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> TrackKind {
        match self {
            Self::Audio(_) => TrackKind::Audio,
            Self::Midi(_) => TrackKind::Midi,
            Self::Group(_) => TrackKind::Group,
            Self::Return(_) => TrackKind::Return,
        }
    }

    /// The variant payload as a [`Track`] trait object.
    pub fn as_track(&self) -> &dyn Track {
        match self {
            Self::Audio(track) => track,
            Self::Midi(track) => track,
            Self::Group(track) => track,
            Self::Return(track) => track,
        }
    }

    pub fn as_track_mut(&mut self) -> &mut dyn Track {
        match self {
            Self::Audio(track) => track,
            Self::Midi(track) => track,
            Self::Group(track) => track,
            Self::Return(track) => track,
        }
    }

    /// List id of the track element.
    #[must_use]
    pub fn id(&self) -> u32 {
        match self {
            Self::Audio(track) => track.id,
            Self::Midi(track) => track.id,
            Self::Group(track) => track.id,
            Self::Return(track) => track.id,
        }
    }

    #[must_use]
    pub fn base(&self) -> &TrackBase {
        self.as_track().base()
    }

    pub fn base_mut(&mut self) -> &mut TrackBase {
        self.as_track_mut().base_mut()
    }

    /// Effective (display) name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.base().name.effective_name
    }

    /// Number of arrangement clips on the track.
    #[must_use]
    pub fn clip_count(&self) -> usize {
        self.as_track().clips().map_or(0, <[AudioClip]>::len)
    }
}

impl Default for UserTrack {
    fn default() -> Self {
        Self::Audio(AudioTrack::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_fields_reachable_for_every_kind() {
        for kind in TrackKind::ALL {
            let mut track = UserTrack::new(kind);
            track.base_mut().name.effective_name = format!("{kind} 1");
            track.base_mut().track_group_id = -1;
            assert_eq!(track.kind(), kind);
            assert_eq!(track.name(), format!("{kind} 1"));
            assert_eq!(track.base().track_group_id, -1);
        }
    }

    #[test]
    fn test_player_state_only_on_player_kinds() {
        assert!(UserTrack::new(TrackKind::Audio).as_track().player().is_some());
        assert!(UserTrack::new(TrackKind::Midi).as_track().player().is_some());
        assert!(UserTrack::new(TrackKind::Group).as_track().player().is_some());
        assert!(UserTrack::new(TrackKind::Return).as_track().player().is_none());
        assert!(MainTrack::default().player().is_none());
    }

    #[test]
    fn test_only_audio_tracks_hold_clips() {
        let mut audio = UserTrack::new(TrackKind::Audio);
        if let Some(clips) = audio.as_track_mut().clips_mut() {
            clips.push(AudioClip::default());
        }
        assert_eq!(audio.clip_count(), 1);
        assert!(UserTrack::new(TrackKind::Midi).as_track().clips().is_none());
    }

    #[test]
    fn test_serde_tags_variant_kind() {
        let track = UserTrack::new(TrackKind::Group);
        let json = serde_json::to_value(&track).expect("serialize track");
        assert_eq!(json["kind"], "Group");
        let round: UserTrack = serde_json::from_value(json).expect("deserialize track");
        assert_eq!(round, track);
    }
}
