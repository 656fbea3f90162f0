//! Supported document versions.
//!
//! Versions form a closed, totally ordered set. Each ordinal is the decimal
//! code `1MMmp`: a leading product digit, then major, minor and patch.
//! Field presence is always decided through the predicates below, which
//! compare ordinals and never strings.

use std::fmt;
use std::str::FromStr;

use crate::error::{AlsError, Result};

/// A supported producer version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum Version {
    V9_0_0 = 10900,
    V9_1_0 = 10910,
    V9_2_0 = 10920,
    V9_7_7 = 10977,
    V11_0_0 = 11100,
    V12_0_0 = 11200,
}

impl Version {
    /// Every supported version, oldest first.
    pub const ALL: [Version; 6] = [
        Self::V9_0_0,
        Self::V9_1_0,
        Self::V9_2_0,
        Self::V9_7_7,
        Self::V11_0_0,
        Self::V12_0_0,
    ];

    /// Newest supported version.
    pub const LATEST: Version = Self::V12_0_0;

    /// Ordinal value used for ordering.
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// `(major, minor, patch)` release triple.
    #[must_use]
    pub const fn triple(self) -> (u32, u32, u32) {
        match self {
            Self::V9_0_0 => (9, 0, 0),
            Self::V9_1_0 => (9, 1, 0),
            Self::V9_2_0 => (9, 2, 0),
            Self::V9_7_7 => (9, 7, 7),
            Self::V11_0_0 => (11, 0, 0),
            Self::V12_0_0 => (12, 0, 0),
        }
    }

    /// Look up an exact release triple.
    #[must_use]
    pub fn from_triple(triple: (u32, u32, u32)) -> Option<Self> {
        Self::ALL.into_iter().find(|version| version.triple() == triple)
    }

    /// Detect the version from a creator string such as
    /// `"Ableton Live 11.0.0"`.
    ///
    /// The product name may contain spaces; the release triple is the last
    /// space-separated word. Anything that is not an exact match of a
    /// supported triple is [`AlsError::UnsupportedVersion`].
    pub fn detect(creator: &str) -> Result<Self> {
        let unsupported = || AlsError::unsupported_version(creator);
        let (product, release) = creator.trim().rsplit_once(' ').ok_or_else(unsupported)?;
        if product.trim().is_empty() {
            return Err(unsupported());
        }
        let triple = parse_triple(release).ok_or_else(unsupported)?;
        Self::from_triple(triple).ok_or_else(unsupported)
    }

    /// Creator string this library writes for the version.
    #[must_use]
    pub fn creator(self) -> String {
        format!("Ableton Live {self}")
    }

    /// Header carries a `SchemaChangeCount` attribute.
    #[must_use]
    pub fn has_schema_change_count(self) -> bool {
        self >= Self::V11_0_0
    }

    /// Live set carries a `LomIdView` next to its `LomId`.
    #[must_use]
    pub fn has_live_set_lom_id_view(self) -> bool {
        self >= Self::V12_0_0
    }

    /// Colors are stored as RGB `Color` rather than palette `ColorIndex`.
    #[must_use]
    pub fn uses_rgb_color(self) -> bool {
        self >= Self::V12_0_0
    }

    /// Track names carry `MemorizedFirstClipName`.
    #[must_use]
    pub fn has_memorized_first_clip_name(self) -> bool {
        self >= Self::V11_0_0
    }

    /// Tag name of the master track element.
    #[must_use]
    pub fn master_track_tag(self) -> &'static str {
        if self >= Self::V12_0_0 {
            "MainTrack"
        } else {
            "MasterTrack"
        }
    }

    /// Tag name of the scenes container.
    #[must_use]
    pub fn scenes_tag(self) -> &'static str {
        if self >= Self::V11_0_0 {
            "Scenes"
        } else {
            "SceneNames"
        }
    }

    /// Transport carries `MetronomeTickDuration`.
    #[must_use]
    pub fn has_metronome_tick_duration(self) -> bool {
        self > Self::V9_0_0
    }

    /// Transport carries `ComputerKeyboardIsEnabled`.
    #[must_use]
    pub fn has_computer_keyboard_toggle(self) -> bool {
        self < Self::V12_0_0
    }

    /// Live set carries `InKey` after the scale information.
    #[must_use]
    pub fn has_in_key(self) -> bool {
        self >= Self::V12_0_0
    }

    /// Launch/envelope/sample panel flags and content splitter properties.
    #[must_use]
    pub fn has_legacy_view_panels(self) -> bool {
        self < Self::V12_0_0
    }

    /// Content and expression splitter flags.
    #[must_use]
    pub fn has_splitter_flags(self) -> bool {
        self >= Self::V12_0_0
    }
}

fn parse_triple(text: &str) -> Option<(u32, u32, u32)> {
    let mut parts = text.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((major, minor, patch))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (major, minor, patch) = self.triple();
        write!(f, "{major}.{minor}.{patch}")
    }
}

impl FromStr for Version {
    type Err = AlsError;

    /// Parse a bare release triple such as `"9.7.7"`.
    fn from_str(text: &str) -> Result<Self> {
        parse_triple(text.trim())
            .and_then(Self::from_triple)
            .ok_or_else(|| AlsError::unsupported_version(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_table() {
        assert_eq!(Version::detect("Ableton Live 9.7.7").unwrap(), Version::V9_7_7);
        assert_eq!(Version::detect("Ableton Live 12.0.0").unwrap(), Version::V12_0_0);
        assert_eq!(Version::detect("Product 9.0.0").unwrap(), Version::V9_0_0);
        for version in Version::ALL {
            assert_eq!(Version::detect(&version.creator()).unwrap(), version);
        }
    }

    #[test]
    fn test_detect_rejects_unknown_and_malformed() {
        for creator in [
            "Ableton Live 7.0.0",
            "Ableton Live 11.0.12",
            "Ableton Live 11.0",
            "Ableton Live 11.0.0.1",
            "Ableton Live eleven",
            "11.0.0",
            "",
        ] {
            let err = Version::detect(creator).unwrap_err();
            assert!(
                matches!(err, AlsError::UnsupportedVersion { .. }),
                "{creator}: {err}"
            );
        }
    }

    #[test]
    fn test_order_follows_ordinals() {
        let mut shuffled = vec![
            Version::V12_0_0,
            Version::V9_1_0,
            Version::V11_0_0,
            Version::V9_0_0,
            Version::V9_7_7,
            Version::V9_2_0,
        ];
        shuffled.sort();
        assert_eq!(shuffled, Version::ALL.to_vec());
        assert!(Version::V9_7_7 < Version::V11_0_0);
        assert_eq!(Version::V11_0_0.ordinal(), 11100);
    }

    #[test]
    fn test_gates() {
        assert!(!Version::V9_7_7.has_schema_change_count());
        assert!(Version::V11_0_0.has_schema_change_count());
        assert!(!Version::V11_0_0.uses_rgb_color());
        assert!(Version::V12_0_0.uses_rgb_color());
        assert!(!Version::V9_0_0.has_metronome_tick_duration());
        assert!(Version::V9_1_0.has_metronome_tick_duration());
        assert_eq!(Version::V11_0_0.master_track_tag(), "MasterTrack");
        assert_eq!(Version::V12_0_0.master_track_tag(), "MainTrack");
        assert_eq!(Version::V9_7_7.scenes_tag(), "SceneNames");
    }

    #[test]
    fn test_from_str_and_display() {
        assert_eq!("9.2.0".parse::<Version>().unwrap(), Version::V9_2_0);
        assert!("10.1.0".parse::<Version>().is_err());
        assert_eq!(Version::V11_0_0.to_string(), "11.0.0");
    }
}
