//! Re-targeting a project to another version.

use als_model::{AudioClip, Project, Track, TrackBase};

use crate::version::Version;

/// Make every version-gated field of `project` match `version`.
///
/// Fields the target does not store are cleared. Fields the target
/// requires but the project lacks take their default value and are
/// reported at `warn`. The creator string is rewritten to name the target.
pub fn conform(project: &mut Project, version: Version) {
    project.version_info.creator = version.creator();
    gate(
        &mut project.version_info.schema_change_count,
        version.has_schema_change_count(),
        "SchemaChangeCount",
    );
    gate(
        &mut project.lom_id_view,
        version.has_live_set_lom_id_view(),
        "LiveSet/LomIdView",
    );

    for track in &mut project.tracks {
        conform_track(track.as_track_mut(), version);
    }
    conform_track(&mut project.master_track, version);
    conform_track(&mut project.pre_hear_track, version);

    let transport = &mut project.transport;
    gate(
        &mut transport.metronome_tick_duration,
        version.has_metronome_tick_duration(),
        "Transport/MetronomeTickDuration",
    );
    gate(
        &mut transport.computer_keyboard_is_enabled,
        version.has_computer_keyboard_toggle(),
        "Transport/ComputerKeyboardIsEnabled",
    );
    gate(&mut project.scale.in_key, version.has_in_key(), "InKey");

    let panels = &mut project.view_panels;
    let legacy = version.has_legacy_view_panels();
    gate(&mut panels.launch_panel, legacy, "ViewStateLaunchPanel");
    gate(&mut panels.envelope_panel, legacy, "ViewStateEnvelopePanel");
    gate(&mut panels.sample_panel, legacy, "ViewStateSamplePanel");
    gate(
        &mut panels.content_splitter_properties_open,
        legacy,
        "ContentSplitterProperties/Open",
    );
    gate(
        &mut panels.content_splitter_properties_size,
        legacy,
        "ContentSplitterProperties/Size",
    );
    let splitters = version.has_splitter_flags();
    gate(
        &mut panels.is_content_splitter_open,
        splitters,
        "IsContentSplitterOpen",
    );
    gate(
        &mut panels.is_expression_splitter_open,
        splitters,
        "IsExpressionSplitterOpen",
    );
}

fn conform_track(track: &mut (impl Track + ?Sized), version: Version) {
    conform_base(track.base_mut(), version);
    if let Some(clips) = track.clips_mut() {
        for clip in clips {
            conform_clip(clip, version);
        }
    }
}

fn conform_base(base: &mut TrackBase, version: Version) {
    gate(
        &mut base.name.memorized_first_clip_name,
        version.has_memorized_first_clip_name(),
        "Name/MemorizedFirstClipName",
    );
    let rgb = version.uses_rgb_color();
    gate(&mut base.color, rgb, "Color");
    gate(&mut base.color_index, !rgb, "ColorIndex");
}

fn conform_clip(clip: &mut AudioClip, version: Version) {
    let rgb = version.uses_rgb_color();
    gate(&mut clip.color, rgb, "AudioClip/Color");
    gate(&mut clip.color_index, !rgb, "AudioClip/ColorIndex");
}

fn gate<T: Default>(value: &mut Option<T>, present: bool, field: &str) {
    match (present, value.is_some()) {
        (true, false) => {
            tracing::warn!(field, "field required by the target version, using default");
            *value = Some(T::default());
        }
        (false, true) => {
            tracing::debug!(field, "field not stored by the target version, dropping");
            *value = None;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use als_model::{AudioTrack, UserTrack};

    #[test]
    fn test_conform_swaps_color_representation() {
        let mut track = AudioTrack::default();
        track.base.color_index = Some(4);
        track.clips.push(AudioClip {
            color_index: Some(2),
            ..AudioClip::default()
        });
        let mut project = Project {
            tracks: vec![UserTrack::Audio(track)],
            ..Project::default()
        };

        conform(&mut project, Version::V12_0_0);

        let base = project.tracks[0].base();
        assert_eq!(base.color, Some(0));
        assert_eq!(base.color_index, None);
        let UserTrack::Audio(track) = &project.tracks[0] else {
            panic!("expected audio track");
        };
        assert_eq!(track.clips[0].color, Some(0));
        assert_eq!(track.clips[0].color_index, None);
        assert_eq!(project.master_track.base.color, Some(0));
        assert_eq!(project.version_info.creator, "Ableton Live 12.0.0");
    }

    #[test]
    fn test_conform_drops_fields_the_target_lacks() {
        let mut project = Project::default();
        project.version_info.schema_change_count = Some("3".to_string());
        project.transport.metronome_tick_duration = Some(1);

        conform(&mut project, Version::V9_0_0);

        assert_eq!(project.version_info.schema_change_count, None);
        assert_eq!(project.transport.metronome_tick_duration, None);
        assert_eq!(project.transport.computer_keyboard_is_enabled, Some(false));
        assert_eq!(project.view_panels.launch_panel, Some(false));
        assert_eq!(project.view_panels.is_content_splitter_open, None);
    }

    #[test]
    fn test_conform_keeps_existing_values() {
        let mut project = Project::default();
        project.version_info.schema_change_count = Some("7".to_string());
        conform(&mut project, Version::V11_0_0);
        assert_eq!(
            project.version_info.schema_change_count.as_deref(),
            Some("7")
        );
    }
}
