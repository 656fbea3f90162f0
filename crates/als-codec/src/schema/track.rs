//! Track elements.
//!
//! A single generic routine maps every track kind. The kind-specific parts
//! (list id, player state, arrangement clips) are reached through the
//! [`Track`] accessors, which return `None` for kinds that lack them.

use als_model::{
    AutomationLane, DeviceChain, PlayerState, Routing, Track, TrackBase, UserTrack,
};

use super::Schema;
use super::clip::map_clip;
use crate::error::Result;

pub(crate) fn map_user_track<S: Schema>(s: &mut S, track: &mut UserTrack) -> Result<()> {
    map_track(s, track.as_track_mut())
}

/// Map any track element: id, shared base, player state, device chain.
pub(crate) fn map_track<S, T>(s: &mut S, track: &mut T) -> Result<()>
where
    S: Schema,
    T: Track + ?Sized,
{
    if let Some(id) = track.id_mut() {
        s.attr("Id", id)?;
    }
    map_base(s, track.base_mut())?;
    if let Some(player) = track.player_mut() {
        map_player(s, player)?;
    }
    s.element("DeviceChain", |s| {
        map_device_chain(s, track.device_chain_mut())?;
        match track.clips_mut() {
            Some(clips) => s.element("MainSequencer", |s| {
                s.element("Sample", |s| {
                    s.element("ArrangerAutomation", |s| {
                        s.element("Events", |s| s.sequence("AudioClip", clips, map_clip))
                    })
                })
            }),
            None => Ok(()),
        }
    })
}

fn map_base<S: Schema>(s: &mut S, base: &mut TrackBase) -> Result<()> {
    let version = s.version();
    s.value("LomId", &mut base.lom_id)?;
    s.value("LomIdView", &mut base.lom_id_view)?;
    s.value("EnvelopeModePreferred", &mut base.envelope_mode_preferred)?;
    s.element("TrackDelay", |s| {
        s.value("Value", &mut base.delay.value)?;
        s.value("IsValueSampleBased", &mut base.delay.is_value_sample_based)
    })?;
    s.element("Name", |s| {
        let name = &mut base.name;
        s.value("EffectiveName", &mut name.effective_name)?;
        s.value("UserName", &mut name.user_name)?;
        s.value("Annotation", &mut name.annotation)?;
        s.optional_value(
            "MemorizedFirstClipName",
            version.has_memorized_first_clip_name(),
            &mut name.memorized_first_clip_name,
        )
    })?;
    map_color(s, &mut base.color, &mut base.color_index)?;
    s.value("TrackGroupId", &mut base.track_group_id)?;
    s.value("TrackUnfolded", &mut base.track_unfolded)?;
    s.list_wrapper("DevicesListWrapper", &mut base.devices_list_wrapper_lom_id)?;
    s.list_wrapper("ClipSlotsListWrapper", &mut base.clip_slots_list_wrapper_lom_id)?;
    s.value("ViewData", &mut base.view_data)
}

/// `Color` for versions storing RGB values, `ColorIndex` otherwise.
pub(crate) fn map_color<S: Schema>(
    s: &mut S,
    color: &mut Option<u32>,
    color_index: &mut Option<u32>,
) -> Result<()> {
    let rgb = s.version().uses_rgb_color();
    s.optional_value("Color", rgb, color)?;
    s.optional_value("ColorIndex", !rgb, color_index)
}

fn map_player<S: Schema>(s: &mut S, player: &mut PlayerState) -> Result<()> {
    s.value("SavedPlayingSlot", &mut player.saved_playing_slot)?;
    s.value("SavedPlayingOffset", &mut player.saved_playing_offset)?;
    s.value("MidiFoldIn", &mut player.midi_fold_in)?;
    s.value("MidiPrelisten", &mut player.midi_prelisten)?;
    s.value("Freeze", &mut player.freeze)?;
    s.value("VelocityDetail", &mut player.velocity_detail)?;
    s.value("NeedArrangerRefreeze", &mut player.need_arranger_refreeze)?;
    s.value("PostProcessFreezeClips", &mut player.post_process_freeze_clips)?;
    s.value(
        "MidiTargetPrefersFoldOrIsNotUniform",
        &mut player.midi_target_prefers_fold_or_is_not_uniform,
    )
}

fn map_device_chain<S: Schema>(s: &mut S, chain: &mut DeviceChain) -> Result<()> {
    s.element("AutomationLanes", |s| {
        s.element("AutomationLanes", |s| {
            s.sequence("AutomationLane", &mut chain.automation_lanes, map_lane)
        })?;
        s.value(
            "AreAdditionalAutomationLanesFolded",
            &mut chain.additional_lanes_folded,
        )
    })?;
    s.element("ClipEnvelopeChooserViewState", |s| {
        s.value("SelectedDevice", &mut chain.envelope_chooser.selected_device)?;
        s.value("SelectedEnvelope", &mut chain.envelope_chooser.selected_envelope)
    })?;
    s.element("AudioInputRouting", |s| map_routing(s, &mut chain.audio_input))?;
    s.element("MidiInputRouting", |s| map_routing(s, &mut chain.midi_input))?;
    s.element("AudioOutputRouting", |s| map_routing(s, &mut chain.audio_output))?;
    s.element("MidiOutputRouting", |s| map_routing(s, &mut chain.midi_output))?;
    s.element("Mixer", |s| {
        s.value("LomId", &mut chain.mixer.lom_id)?;
        s.value("LomIdView", &mut chain.mixer.lom_id_view)?;
        s.value("IsExpanded", &mut chain.mixer.is_expanded)
    })
}

fn map_lane<S: Schema>(s: &mut S, lane: &mut AutomationLane) -> Result<()> {
    s.attr("Id", &mut lane.id)?;
    s.value("SelectedDevice", &mut lane.selected_device)?;
    s.value("SelectedEnvelope", &mut lane.selected_envelope)?;
    s.value("IsContentSelectedInDocument", &mut lane.is_content_selected)?;
    s.value("LaneHeight", &mut lane.lane_height)?;
    s.value("FadeViewVisible", &mut lane.fade_view_visible)
}

fn map_routing<S: Schema>(s: &mut S, routing: &mut Routing) -> Result<()> {
    s.value("Target", &mut routing.target)?;
    s.value("UpperDisplayString", &mut routing.upper_display_string)?;
    s.value("LowerDisplayString", &mut routing.lower_display_string)
}
