//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::io::Cursor;

use als_codec::{Version, conform, export_project, import_project};
use als_codec::model::{
    AudioClip, AudioTrack, AutomationLane, ClipLoop, DeviceChain, FollowAction, Grid, GroupTrack,
    MidiTrack, Point, Project, ReturnTrack, Routing, Scene, TrackBase, UserTrack, WarpMarker,
};

/// Export then import through an in-memory container.
pub fn roundtrip(project: &Project, version: Version) -> (Project, Version) {
    let mut buffer = Vec::new();
    export_project(Cursor::new(&mut buffer), project, version).unwrap();
    import_project(Cursor::new(&buffer)).unwrap()
}

/// Document text of `project` as written for `version`.
pub fn document_text(project: &Project, version: Version) -> String {
    als_codec::encode(project, version)
        .unwrap()
        .serialize()
        .unwrap()
}

pub fn base(name: &str, lom_id: u32) -> TrackBase {
    let mut base = TrackBase {
        lom_id,
        lom_id_view: lom_id + 1,
        envelope_mode_preferred: true,
        track_group_id: -1,
        track_unfolded: true,
        devices_list_wrapper_lom_id: lom_id + 2,
        clip_slots_list_wrapper_lom_id: lom_id + 3,
        view_data: "{\"height\":68}".to_string(),
        ..TrackBase::default()
    };
    base.delay.value = 1.5;
    base.name.effective_name = name.to_string();
    base.name.user_name = name.to_string();
    base.name.annotation = format!("{name} notes");
    base.name.memorized_first_clip_name = Some(format!("{name} 1"));
    base.color = Some(0x00ff_8800);
    base.color_index = Some(4);
    base
}

pub fn device_chain() -> DeviceChain {
    DeviceChain {
        automation_lanes: vec![
            AutomationLane {
                id: 0,
                selected_device: 1,
                selected_envelope: 2,
                is_content_selected: true,
                lane_height: 68,
                fade_view_visible: false,
            },
            AutomationLane {
                id: 1,
                lane_height: 34,
                ..AutomationLane::default()
            },
        ],
        additional_lanes_folded: true,
        audio_input: Routing {
            target: "AudioIn/External/S0".to_string(),
            upper_display_string: "Ext. In".to_string(),
            lower_display_string: "1/2".to_string(),
        },
        audio_output: Routing {
            target: "AudioOut/Master".to_string(),
            upper_display_string: "Master".to_string(),
            lower_display_string: String::new(),
        },
        ..DeviceChain::default()
    }
}

pub fn clip(id: u32, time: f64) -> AudioClip {
    AudioClip {
        id,
        time,
        lom_id: 0,
        current_start: time,
        current_end: time + 8.0,
        loop_region: ClipLoop {
            loop_start: 0.0,
            loop_end: 8.0,
            start_relative: 0.0,
            loop_on: true,
            out_marker: 8.0,
            hidden_loop_start: 0.0,
            hidden_loop_end: 8.0,
        },
        name: format!("Clip {id}"),
        color: Some(0x0012_3456),
        color_index: Some(9),
        launch_quantisation: 4,
        scroller_left_time: -2.25,
        scroller_right_time: 18.5,
        velocity_amount: 0.75,
        follow_action: FollowAction {
            follow_time: 4,
            action_a: 4,
            action_b: 0,
            chance_a: 100,
            chance_b: 0,
        },
        grid: Grid {
            fixed_numerator: 1,
            fixed_denominator: 16,
            grid_interval_pixel: 20,
            ntoles: 2,
            snap_to_grid: true,
            fixed: false,
        },
        is_warped: true,
        warp_markers: vec![WarpMarker::new(0, 0.0, 0.0), WarpMarker::new(1, 2.0, 4.0)],
        ..AudioClip::default()
    }
}

/// A project with every field away from its default, conformed to
/// `version`.
pub fn populated_project(version: Version) -> Project {
    let mut drums = GroupTrack {
        id: 10,
        base: base("Drums", 100),
        device_chain: device_chain(),
        ..GroupTrack::default()
    };
    drums.player.saved_playing_slot = -1;
    drums.player.saved_playing_offset = 0;

    let mut lead = AudioTrack {
        id: 11,
        base: base("Lead", 110),
        device_chain: device_chain(),
        clips: vec![clip(0, 0.0), clip(1, 16.0)],
        ..AudioTrack::default()
    };
    lead.base.track_group_id = 10;
    lead.player.freeze = true;
    lead.player.velocity_detail = 2;

    let mut keys = MidiTrack {
        id: 12,
        base: base("Keys", 120),
        ..MidiTrack::default()
    };
    keys.player.midi_fold_in = true;
    keys.player.midi_target_prefers_fold_or_is_not_uniform = true;

    let reverb = ReturnTrack {
        id: 13,
        base: base("A-Reverb", 130),
        device_chain: device_chain(),
    };

    let mut project = Project {
        overwrite_protection_number: 2816,
        lom_id: 0,
        lom_id_view: Some(0),
        tracks: vec![
            UserTrack::Group(drums),
            UserTrack::Audio(lead),
            UserTrack::Midi(keys),
            UserTrack::Return(reverb),
        ],
        sends_pre: vec![true],
        scenes: vec![
            Scene {
                id: 0,
                value: "Intro".to_string(),
                annotation: "soft".to_string(),
                color_index: 3,
                lom_id: 200,
                clip_slots_list_wrapper_lom_id: 201,
            },
            Scene {
                id: 1,
                value: "Drop".to_string(),
                lom_id: 202,
                ..Scene::default()
            },
        ],
        song_master_scroller_pos: Point { x: 0, y: -12 },
        smpte_format: 1,
        annotation: "demo set".to_string(),
        highlighted_track_index: -1,
        view_data: "{}".to_string(),
        show_video_window: true,
        track_header_width: 93,
        detail_is_sample: true,
        ..Project::default()
    };
    project.version_info.major_version = "5".to_string();
    project.version_info.minor_version = "11.0_433".to_string();
    project.version_info.revision = "5094b92fa547974769f44cf233f1474777d9434a".to_string();
    project.version_info.schema_change_count = Some("3".to_string());
    project.master_track.base = base("Master", 300);
    project.master_track.device_chain = device_chain();
    project.pre_hear_track.base = base("PreHear", 310);
    project.transport.loop_on = true;
    project.transport.loop_start = 8.0;
    project.transport.loop_length = 16.0;
    project.transport.current_time = 3.25;
    project.transport.metronome_tick_duration = Some(0);
    project.transport.computer_keyboard_is_enabled = Some(true);
    project.quantization.global = 4;
    project.quantization.auto = 1;
    project.grid.fixed_numerator = 1;
    project.grid.fixed_denominator = 16;
    project.scale.root_note = 9;
    project.scale.name = "Minor".to_string();
    project.scale.in_key = Some(true);
    project.time_selection.anchor_time = 4.0;
    project.time_selection.other_time = 12.0;
    project.sequencer_navigator.current_zoom = 0.072_265_625;
    project.sequencer_navigator.scroller_pos = Point { x: -42, y: 0 };
    project.sequencer_navigator.client_size = Point { x: 1013, y: 457 };
    project.view_panels.launch_panel = Some(true);
    project.view_panels.content_splitter_properties_size = Some(80);
    project.view_panels.is_expression_splitter_open = Some(true);
    project.list_wrappers.tracks = 400;
    project.list_wrappers.cue_points = 404;
    project.groove_pool.lom_id = 500;
    project.video_window_rect.top = i32::MIN;
    project.video_window_rect.right = i32::MAX;
    project.view_states.session_io = 1;
    project.view_states.arranger_show_over_view = 1;

    conform(&mut project, version);
    project
}
