//! Arrangement audio clips.

use serde::{Deserialize, Serialize};

use crate::project::Grid;

/// Anchor point of the time-to-beat mapping used for time stretching.
///
/// Markers are expected to be monotonic in both domains, but that is not
/// checked: they are carried through as stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WarpMarker {
    pub id: u32,
    /// Position in the sample, in seconds.
    pub sec_time: f64,
    /// Position on the timeline, in beats.
    pub beat_time: f64,
}

impl WarpMarker {
    #[must_use]
    pub fn new(id: u32, sec_time: f64, beat_time: f64) -> Self {
        Self {
            id,
            sec_time,
            beat_time,
        }
    }
}

/// Loop and playback region of a clip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipLoop {
    pub loop_start: f64,
    pub loop_end: f64,
    pub start_relative: f64,
    pub loop_on: bool,
    pub out_marker: f64,
    pub hidden_loop_start: f64,
    pub hidden_loop_end: f64,
}

/// Follow action settings of a clip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FollowAction {
    pub follow_time: u32,
    pub action_a: u32,
    pub action_b: u32,
    pub chance_a: u32,
    pub chance_b: u32,
}

/// An audio clip placed on the arrangement timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioClip {
    pub id: u32,
    /// Timeline position of the clip start, in beats.
    pub time: f64,
    pub lom_id: u32,
    pub lom_id_view: u32,
    pub current_start: f64,
    pub current_end: f64,
    pub loop_region: ClipLoop,
    pub name: String,
    pub annotation: String,
    /// RGB color; present for the same versions as track colors.
    pub color: Option<u32>,
    /// Palette index; present for the same versions as track color indices.
    pub color_index: Option<u32>,
    pub launch_mode: u32,
    pub launch_quantisation: u32,
    pub scroller_left_time: f64,
    pub scroller_right_time: f64,
    pub time_selection_anchor: f64,
    pub time_selection_other: f64,
    pub legato: bool,
    pub ram: bool,
    pub disabled: bool,
    pub velocity_amount: f32,
    pub follow_action: FollowAction,
    pub grid: Grid,
    pub freeze_start: f64,
    pub freeze_end: f64,
    pub is_song_tempo_master: bool,
    pub is_warped: bool,
    pub warp_markers: Vec<WarpMarker>,
    pub markers_generated: bool,
}

impl AudioClip {
    /// Warp markers as `(seconds, beats)` pairs.
    pub fn warp_pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.warp_markers
            .iter()
            .map(|marker| (marker.sec_time, marker.beat_time))
    }

    /// Clip length on the timeline.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.current_end - self.current_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warp_pairs_keep_order() {
        let clip = AudioClip {
            warp_markers: vec![
                WarpMarker::new(0, 0.0, 0.0),
                WarpMarker::new(1, 2.0, 4.0),
            ],
            ..AudioClip::default()
        };
        let pairs: Vec<_> = clip.warp_pairs().collect();
        assert_eq!(pairs, vec![(0.0, 0.0), (2.0, 4.0)]);
    }

    #[test]
    fn test_length() {
        let clip = AudioClip {
            current_start: 4.0,
            current_end: 12.5,
            ..AudioClip::default()
        };
        assert_eq!(clip.length(), 8.5);
    }
}
