//! Root project aggregate and its project-level blocks.

use serde::{Deserialize, Serialize};

use crate::track::{MainTrack, TrackKind, UserTrack};

/// Header attributes of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub major_version: String,
    pub minor_version: String,
    /// Free-form producer string, e.g. `"Ableton Live 11.0.0"`.
    pub creator: String,
    pub revision: String,
    /// Only written by versions that count schema changes.
    pub schema_change_count: Option<String>,
}

/// A scene row of the session view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: u32,
    /// Display value (scene name).
    pub value: String,
    pub annotation: String,
    pub color_index: u32,
    pub lom_id: u32,
    pub clip_slots_list_wrapper_lom_id: u32,
}

/// Transport state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transport {
    pub phase_nudge_tempo: u32,
    pub loop_on: bool,
    pub loop_start: f64,
    pub loop_length: f64,
    pub loop_is_song_start: bool,
    pub current_time: f64,
    pub punch_in: bool,
    pub punch_out: bool,
    /// Absent in the oldest supported version.
    pub metronome_tick_duration: Option<u32>,
    pub draw_mode: bool,
    /// Dropped by the newest supported version.
    pub computer_keyboard_is_enabled: Option<bool>,
}

/// Grid and snapping settings, used by the arrangement and by clips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub fixed_numerator: u32,
    pub fixed_denominator: u32,
    pub grid_interval_pixel: u32,
    pub ntoles: u32,
    pub snap_to_grid: bool,
    pub fixed: bool,
}

/// Global and automatic quantization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quantization {
    pub global: u32,
    pub auto: u32,
}

/// Scale information of the set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleInformation {
    pub root_note: u32,
    pub name: String,
    /// Only stored by versions with scale awareness.
    pub in_key: Option<bool>,
}

/// Selected arrangement time range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSelection {
    pub anchor_time: f64,
    pub other_time: f64,
}

/// Integer 2-D position or size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Arrangement navigator state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequencerNavigator {
    pub current_zoom: f64,
    pub scroller_pos: Point,
    pub client_size: Point,
}

/// Version-gated panel and splitter flags.
///
/// The first four belong to older versions, the splitter flags to the
/// newest one; a given document carries one group or the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewPanels {
    pub launch_panel: Option<bool>,
    pub envelope_panel: Option<bool>,
    pub sample_panel: Option<bool>,
    pub content_splitter_properties_open: Option<bool>,
    pub content_splitter_properties_size: Option<u32>,
    pub is_content_splitter_open: Option<bool>,
    pub is_expression_splitter_open: Option<bool>,
}

/// Identity numbers of the project-level list wrappers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListWrappers {
    pub tracks: u32,
    pub visible_tracks: u32,
    pub return_tracks: u32,
    pub scenes: u32,
    pub cue_points: u32,
}

/// Groove pool. Grooves themselves are not modeled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroovePool {
    pub lom_id: u32,
}

/// Video window rectangle in screen coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

/// Section visibility counters of the session and arranger views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewStates {
    pub session_io: u32,
    pub session_sends: u32,
    pub session_returns: u32,
    pub session_mixer: u32,
    pub session_track_delay: u32,
    pub session_cross_fade: u32,
    pub session_show_over_view: u32,
    pub arranger_io: u32,
    pub arranger_returns: u32,
    pub arranger_mixer: u32,
    pub arranger_track_delay: u32,
    pub arranger_show_over_view: u32,
}

/// A Live set.
///
/// Owns every child entity by value. Track order is significant and is
/// preserved on round-trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub version_info: VersionInfo,
    pub overwrite_protection_number: i32,
    pub lom_id: u32,
    /// Only stored by the newest supported version.
    pub lom_id_view: Option<u32>,
    pub tracks: Vec<UserTrack>,
    pub master_track: MainTrack,
    pub pre_hear_track: MainTrack,
    /// Pre/post-fader send flag per return track.
    pub sends_pre: Vec<bool>,
    pub scenes: Vec<Scene>,
    pub transport: Transport,
    pub song_master_scroller_pos: Point,
    pub quantization: Quantization,
    pub grid: Grid,
    pub scale: ScaleInformation,
    pub smpte_format: u32,
    pub time_selection: TimeSelection,
    pub sequencer_navigator: SequencerNavigator,
    pub view_panels: ViewPanels,
    pub view_state_fx_slot_count: u32,
    pub view_state_session_mixer_height: u32,
    pub list_wrappers: ListWrappers,
    pub chooser_bar: u32,
    pub annotation: String,
    pub solo_or_pfl_saved_value: bool,
    pub solo_in_place: bool,
    pub crossfade_curve: u32,
    pub latency_compensation: u32,
    pub highlighted_track_index: i32,
    pub groove_pool: GroovePool,
    pub arrangement_overdub: bool,
    pub color_sequence_index: u32,
    pub auto_color_picker_for_player_and_group_tracks: u32,
    pub auto_color_picker_for_return_and_master_tracks: u32,
    /// Opaque view-state blob, carried through verbatim.
    pub view_data: String,
    pub use_warper_legacy_hiq_mode: bool,
    pub video_window_rect: WindowRect,
    pub show_video_window: bool,
    pub track_header_width: u32,
    pub arranger_has_detail: bool,
    pub session_has_detail: bool,
    pub detail_is_sample: bool,
    pub view_states: ViewStates,
}

impl Project {
    /// Tracks of the given kind, in document order.
    pub fn tracks_of_kind(&self, kind: TrackKind) -> impl Iterator<Item = &UserTrack> + '_ {
        self.tracks.iter().filter(move |track| track.kind() == kind)
    }

    /// Total number of arrangement clips over all tracks.
    #[must_use]
    pub fn clip_count(&self) -> usize {
        self.tracks.iter().map(UserTrack::clip_count).sum()
    }

    /// Find a user track by its effective name.
    #[must_use]
    pub fn find_track(&self, name: &str) -> Option<&UserTrack> {
        self.tracks.iter().find(|track| track.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::AudioClip;
    use crate::track::{AudioTrack, MidiTrack};

    fn sample_project() -> Project {
        let mut lead = AudioTrack::default();
        lead.base.name.effective_name = "Lead".to_string();
        lead.clips.push(AudioClip::default());
        lead.clips.push(AudioClip::default());
        let mut keys = MidiTrack::default();
        keys.base.name.effective_name = "Keys".to_string();
        Project {
            tracks: vec![UserTrack::Audio(lead), UserTrack::Midi(keys)],
            ..Project::default()
        }
    }

    #[test]
    fn test_tracks_of_kind() {
        let project = sample_project();
        assert_eq!(project.tracks_of_kind(TrackKind::Audio).count(), 1);
        assert_eq!(project.tracks_of_kind(TrackKind::Midi).count(), 1);
        assert_eq!(project.tracks_of_kind(TrackKind::Return).count(), 0);
    }

    #[test]
    fn test_clip_count_and_lookup() {
        let project = sample_project();
        assert_eq!(project.clip_count(), 2);
        assert_eq!(
            project.find_track("Keys").map(UserTrack::kind),
            Some(TrackKind::Midi)
        );
        assert!(project.find_track("Drums").is_none());
    }
}
