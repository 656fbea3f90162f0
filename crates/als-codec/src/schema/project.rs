//! Header, live set and project-level blocks.

use als_model::{
    Grid, Point, Project, Scene, SequencerNavigator, TimeSelection, Transport, VersionInfo,
    ViewPanels, ViewStates, WindowRect,
};

use super::Schema;
use super::track::{map_track, map_user_track};
use crate::error::Result;

pub(crate) fn map_project<S: Schema>(s: &mut S, project: &mut Project) -> Result<()> {
    map_header(s, &mut project.version_info)?;
    s.element("LiveSet", |s| map_live_set(s, project))
}

fn map_header<S: Schema>(s: &mut S, info: &mut VersionInfo) -> Result<()> {
    let version = s.version();
    s.attr("MajorVersion", &mut info.major_version)?;
    s.attr("MinorVersion", &mut info.minor_version)?;
    s.optional_attr(
        "SchemaChangeCount",
        version.has_schema_change_count(),
        &mut info.schema_change_count,
    )?;
    s.attr("Creator", &mut info.creator)?;
    s.attr("Revision", &mut info.revision)
}

fn map_live_set<S: Schema>(s: &mut S, p: &mut Project) -> Result<()> {
    let version = s.version();

    s.value("OverwriteProtectionNumber", &mut p.overwrite_protection_number)?;
    s.value("LomId", &mut p.lom_id)?;
    s.optional_value("LomIdView", version.has_live_set_lom_id_view(), &mut p.lom_id_view)?;
    s.element("Tracks", |s| s.variants(&mut p.tracks, map_user_track))?;
    s.element(version.master_track_tag(), |s| map_track(s, &mut p.master_track))?;
    s.element("PreHearTrack", |s| map_track(s, &mut p.pre_hear_track))?;
    s.element("SendsPre", |s| map_sends_pre(s, &mut p.sends_pre))?;
    s.element(version.scenes_tag(), |s| s.sequence("Scene", &mut p.scenes, map_scene))?;
    s.element("Transport", |s| map_transport(s, &mut p.transport))?;
    s.element("SongMasterValues", |s| {
        s.element("ScrollerPos", |s| map_point(s, &mut p.song_master_scroller_pos))
    })?;
    s.value("GlobalQuantisation", &mut p.quantization.global)?;
    s.value("AutoQuantisation", &mut p.quantization.auto)?;
    s.element("Grid", |s| map_grid(s, &mut p.grid))?;
    s.element("ScaleInformation", |s| {
        s.value("RootNote", &mut p.scale.root_note)?;
        s.value("Name", &mut p.scale.name)
    })?;
    s.optional_value("InKey", version.has_in_key(), &mut p.scale.in_key)?;
    s.value("SmpteFormat", &mut p.smpte_format)?;
    s.element("TimeSelection", |s| map_time_selection(s, &mut p.time_selection))?;
    s.element("SequencerNavigator", |s| {
        map_navigator(s, &mut p.sequencer_navigator)
    })?;
    map_view_panels(s, &mut p.view_panels)?;
    s.value("ViewStateFxSlotCount", &mut p.view_state_fx_slot_count)?;
    s.value(
        "ViewStateSessionMixerHeight",
        &mut p.view_state_session_mixer_height,
    )?;

    let wrappers = &mut p.list_wrappers;
    s.list_wrapper("TracksListWrapper", &mut wrappers.tracks)?;
    s.list_wrapper("VisibleTracksListWrapper", &mut wrappers.visible_tracks)?;
    s.list_wrapper("ReturnTracksListWrapper", &mut wrappers.return_tracks)?;
    s.list_wrapper("ScenesListWrapper", &mut wrappers.scenes)?;
    s.list_wrapper("CuePointsListWrapper", &mut wrappers.cue_points)?;

    s.value("ChooserBar", &mut p.chooser_bar)?;
    s.value("Annotation", &mut p.annotation)?;
    s.value("SoloOrPflSavedValue", &mut p.solo_or_pfl_saved_value)?;
    s.value("SoloInPlace", &mut p.solo_in_place)?;
    s.value("CrossfadeCurve", &mut p.crossfade_curve)?;
    s.value("LatencyCompensation", &mut p.latency_compensation)?;
    s.value("HighlightedTrackIndex", &mut p.highlighted_track_index)?;
    s.element("GroovePool", |s| s.value("LomId", &mut p.groove_pool.lom_id))?;
    s.value("ArrangementOverdub", &mut p.arrangement_overdub)?;
    s.value("ColorSequenceIndex", &mut p.color_sequence_index)?;
    s.value(
        "AutoColorPickerForPlayerAndGroupTracks",
        &mut p.auto_color_picker_for_player_and_group_tracks,
    )?;
    s.value(
        "AutoColorPickerForReturnAndMasterTracks",
        &mut p.auto_color_picker_for_return_and_master_tracks,
    )?;
    s.value("ViewData", &mut p.view_data)?;
    s.value("UseWarperLegacyHiqMode", &mut p.use_warper_legacy_hiq_mode)?;
    s.element("VideoWindowRect", |s| map_window_rect(s, &mut p.video_window_rect))?;
    s.value("ShowVideoWindow", &mut p.show_video_window)?;
    s.value("TrackHeaderWidth", &mut p.track_header_width)?;
    s.value("ViewStateArrangerHasDetail", &mut p.arranger_has_detail)?;
    s.value("ViewStateSessionHasDetail", &mut p.session_has_detail)?;
    s.value("ViewStateDetailIsSample", &mut p.detail_is_sample)?;
    s.element("ViewStates", |s| map_view_states(s, &mut p.view_states))
}

/// Pre-send flags, one `SendPreBool` per return track, in document order.
/// Source ids are not kept; export numbers them from zero.
fn map_sends_pre<S: Schema>(s: &mut S, sends: &mut Vec<bool>) -> Result<()> {
    let mut items: Vec<(u32, bool)> = (0u32..).zip(sends.iter().copied()).collect();
    s.sequence("SendPreBool", &mut items, |s, item| {
        s.attr("Id", &mut item.0)?;
        s.attr("Value", &mut item.1)
    })?;
    *sends = items.into_iter().map(|(_, flag)| flag).collect();
    Ok(())
}

fn map_scene<S: Schema>(s: &mut S, scene: &mut Scene) -> Result<()> {
    s.attr("Id", &mut scene.id)?;
    s.attr("Value", &mut scene.value)?;
    s.value("Annotation", &mut scene.annotation)?;
    s.value("ColorIndex", &mut scene.color_index)?;
    s.value("LomId", &mut scene.lom_id)?;
    s.list_wrapper("ClipSlotsListWrapper", &mut scene.clip_slots_list_wrapper_lom_id)
}

fn map_transport<S: Schema>(s: &mut S, transport: &mut Transport) -> Result<()> {
    let version = s.version();
    s.value("PhaseNudgeTempo", &mut transport.phase_nudge_tempo)?;
    s.value("LoopOn", &mut transport.loop_on)?;
    s.value("LoopStart", &mut transport.loop_start)?;
    s.value("LoopLength", &mut transport.loop_length)?;
    s.value("LoopIsSongStart", &mut transport.loop_is_song_start)?;
    s.value("CurrentTime", &mut transport.current_time)?;
    s.value("PunchIn", &mut transport.punch_in)?;
    s.value("PunchOut", &mut transport.punch_out)?;
    s.optional_value(
        "MetronomeTickDuration",
        version.has_metronome_tick_duration(),
        &mut transport.metronome_tick_duration,
    )?;
    s.value("DrawMode", &mut transport.draw_mode)?;
    s.optional_value(
        "ComputerKeyboardIsEnabled",
        version.has_computer_keyboard_toggle(),
        &mut transport.computer_keyboard_is_enabled,
    )
}

/// Grid block, shared by the live set and audio clips.
pub(crate) fn map_grid<S: Schema>(s: &mut S, grid: &mut Grid) -> Result<()> {
    s.value("FixedNumerator", &mut grid.fixed_numerator)?;
    s.value("FixedDenominator", &mut grid.fixed_denominator)?;
    s.value("GridIntervalPixel", &mut grid.grid_interval_pixel)?;
    s.value("Ntoles", &mut grid.ntoles)?;
    s.value("SnapToGrid", &mut grid.snap_to_grid)?;
    s.value("Fixed", &mut grid.fixed)
}

fn map_time_selection<S: Schema>(s: &mut S, selection: &mut TimeSelection) -> Result<()> {
    s.value("AnchorTime", &mut selection.anchor_time)?;
    s.value("OtherTime", &mut selection.other_time)
}

fn map_point<S: Schema>(s: &mut S, point: &mut Point) -> Result<()> {
    s.attr("X", &mut point.x)?;
    s.attr("Y", &mut point.y)
}

fn map_navigator<S: Schema>(s: &mut S, navigator: &mut SequencerNavigator) -> Result<()> {
    s.element("BeatTimeHelper", |s| {
        s.value("CurrentZoom", &mut navigator.current_zoom)
    })?;
    s.element("ScrollerPos", |s| map_point(s, &mut navigator.scroller_pos))?;
    s.element("ClientSize", |s| map_point(s, &mut navigator.client_size))
}

fn map_view_panels<S: Schema>(s: &mut S, panels: &mut ViewPanels) -> Result<()> {
    let version = s.version();
    let legacy = version.has_legacy_view_panels();
    s.optional_value("ViewStateLaunchPanel", legacy, &mut panels.launch_panel)?;
    s.optional_value("ViewStateEnvelopePanel", legacy, &mut panels.envelope_panel)?;
    s.optional_value("ViewStateSamplePanel", legacy, &mut panels.sample_panel)?;
    if legacy {
        s.element("ContentSplitterProperties", |s| {
            s.optional_value("Open", true, &mut panels.content_splitter_properties_open)?;
            s.optional_value("Size", true, &mut panels.content_splitter_properties_size)
        })?;
    } else if s.is_decoding() {
        panels.content_splitter_properties_open = None;
        panels.content_splitter_properties_size = None;
    }

    let splitters = version.has_splitter_flags();
    s.optional_value(
        "IsContentSplitterOpen",
        splitters,
        &mut panels.is_content_splitter_open,
    )?;
    s.optional_value(
        "IsExpressionSplitterOpen",
        splitters,
        &mut panels.is_expression_splitter_open,
    )
}

fn map_window_rect<S: Schema>(s: &mut S, rect: &mut WindowRect) -> Result<()> {
    s.attr("Top", &mut rect.top)?;
    s.attr("Left", &mut rect.left)?;
    s.attr("Bottom", &mut rect.bottom)?;
    s.attr("Right", &mut rect.right)
}

fn map_view_states<S: Schema>(s: &mut S, states: &mut ViewStates) -> Result<()> {
    s.value("SessionIO", &mut states.session_io)?;
    s.value("SessionSends", &mut states.session_sends)?;
    s.value("SessionReturns", &mut states.session_returns)?;
    s.value("SessionMixer", &mut states.session_mixer)?;
    s.value("SessionTrackDelay", &mut states.session_track_delay)?;
    s.value("SessionCrossFade", &mut states.session_cross_fade)?;
    s.value("SessionShowOverView", &mut states.session_show_over_view)?;
    s.value("ArrangerIO", &mut states.arranger_io)?;
    s.value("ArrangerReturns", &mut states.arranger_returns)?;
    s.value("ArrangerMixer", &mut states.arranger_mixer)?;
    s.value("ArrangerTrackDelay", &mut states.arranger_track_delay)?;
    s.value("ArrangerShowOverView", &mut states.arranger_show_over_view)
}
