//! Arrangement audio clips.

use als_model::{AudioClip, WarpMarker};

use super::Schema;
use super::project::map_grid;
use super::track::map_color;
use crate::error::Result;

pub(crate) fn map_clip<S: Schema>(s: &mut S, clip: &mut AudioClip) -> Result<()> {
    s.attr("Id", &mut clip.id)?;
    s.attr("Time", &mut clip.time)?;
    s.value("LomId", &mut clip.lom_id)?;
    s.value("LomIdView", &mut clip.lom_id_view)?;
    s.value("CurrentStart", &mut clip.current_start)?;
    s.value("CurrentEnd", &mut clip.current_end)?;
    s.element("Loop", |s| {
        let region = &mut clip.loop_region;
        s.value("LoopStart", &mut region.loop_start)?;
        s.value("LoopEnd", &mut region.loop_end)?;
        s.value("StartRelative", &mut region.start_relative)?;
        s.value("LoopOn", &mut region.loop_on)?;
        s.value("OutMarker", &mut region.out_marker)?;
        s.value("HiddenLoopStart", &mut region.hidden_loop_start)?;
        s.value("HiddenLoopEnd", &mut region.hidden_loop_end)
    })?;
    s.value("Name", &mut clip.name)?;
    s.value("Annotation", &mut clip.annotation)?;
    map_color(s, &mut clip.color, &mut clip.color_index)?;
    s.value("LaunchMode", &mut clip.launch_mode)?;
    s.value("LaunchQuantisation", &mut clip.launch_quantisation)?;
    s.element("ScrollerTimePreserver", |s| {
        s.value("LeftTime", &mut clip.scroller_left_time)?;
        s.value("RightTime", &mut clip.scroller_right_time)
    })?;
    s.element("TimeSelection", |s| {
        s.value("AnchorTime", &mut clip.time_selection_anchor)?;
        s.value("OtherTime", &mut clip.time_selection_other)
    })?;
    s.value("Legato", &mut clip.legato)?;
    s.value("Ram", &mut clip.ram)?;
    s.value("Disabled", &mut clip.disabled)?;
    s.value("VelocityAmount", &mut clip.velocity_amount)?;

    let follow = &mut clip.follow_action;
    s.value("FollowTime", &mut follow.follow_time)?;
    s.value("FollowActionA", &mut follow.action_a)?;
    s.value("FollowActionB", &mut follow.action_b)?;
    s.value("FollowChanceA", &mut follow.chance_a)?;
    s.value("FollowChanceB", &mut follow.chance_b)?;

    s.element("Grid", |s| map_grid(s, &mut clip.grid))?;
    s.value("FreezeStart", &mut clip.freeze_start)?;
    s.value("FreezeEnd", &mut clip.freeze_end)?;
    s.value("IsSongTempoMaster", &mut clip.is_song_tempo_master)?;
    s.value("IsWarped", &mut clip.is_warped)?;
    s.element("WarpMarkers", |s| {
        s.sequence("WarpMarker", &mut clip.warp_markers, map_warp_marker)
    })?;
    s.value("MarkersGenerated", &mut clip.markers_generated)
}

fn map_warp_marker<S: Schema>(s: &mut S, marker: &mut WarpMarker) -> Result<()> {
    s.attr("Id", &mut marker.id)?;
    s.attr("SecTime", &mut marker.sec_time)?;
    s.attr("BeatTime", &mut marker.beat_time)
}
