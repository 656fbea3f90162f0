//! Export-then-import tests across every supported version.

mod common;

use std::io::Cursor;

use als_codec::model::{Project, UserTrack};
use als_codec::{AlsReader, AlsWriter, AlsWriterOptions, Version};

use common::{document_text, populated_project, roundtrip};

#[test]
fn test_roundtrip_every_version() {
    for version in Version::ALL {
        let project = populated_project(version);
        let (read_back, detected) = roundtrip(&project, version);
        assert_eq!(detected, version);
        assert_eq!(read_back, project, "round trip differs for {version}");
    }
}

#[test]
fn test_reexport_is_identical_text() {
    for version in Version::ALL {
        let project = populated_project(version);
        let first = document_text(&project, version);
        let document = als_codec::tree::Document::parse(&first).unwrap();
        let (decoded, _) = als_codec::decode(&document).unwrap();
        assert_eq!(document_text(&decoded, version), first);
    }
}

#[test]
fn test_track_order_is_preserved() {
    let project = populated_project(Version::V11_0_0);
    let (read_back, _) = roundtrip(&project, Version::V11_0_0);
    let names: Vec<_> = read_back.tracks.iter().map(UserTrack::name).collect();
    assert_eq!(names, vec!["Drums", "Lead", "Keys", "A-Reverb"]);
    let ids: Vec<_> = read_back.tracks.iter().map(UserTrack::id).collect();
    assert_eq!(ids, vec![10, 11, 12, 13]);
}

#[test]
fn test_compact_low_compression_roundtrip() {
    let project = populated_project(Version::V9_7_7);
    let mut buffer = Vec::new();
    let options = AlsWriterOptions::new().with_compression(1).compact();
    AlsWriter::with_options(Cursor::new(&mut buffer), options)
        .write_project(&project, Version::V9_7_7)
        .unwrap();

    let document = AlsReader::new(Cursor::new(&buffer)).read_document().unwrap();
    assert_eq!(document.name(document.root()), "Ableton");
    let (read_back, _) = AlsReader::new(Cursor::new(&buffer)).read_project().unwrap();
    assert_eq!(read_back, project);
}

#[test]
fn test_convert_between_versions() {
    let source = populated_project(Version::V9_7_7);
    let mut converted: Project = source.clone();
    als_codec::conform(&mut converted, Version::V12_0_0);

    let (read_back, version) = roundtrip(&converted, Version::V12_0_0);
    assert_eq!(version, Version::V12_0_0);
    assert_eq!(read_back.tracks.len(), source.tracks.len());
    assert_eq!(read_back.tracks[1].base().color_index, None);
    assert_eq!(read_back.tracks[1].base().color, Some(0));
    assert_eq!(read_back.transport.computer_keyboard_is_enabled, None);
    assert_eq!(read_back.scale.in_key, Some(false));
}
