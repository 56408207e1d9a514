//! Typed views over bit-coded DXF group values.

use bitflags::bitflags;

bitflags! {
    /// Standard table-record flags (group 70 on UCS/VPORT records).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StandardFlags: i16 {
        /// No flags.
        const NONE = 0;
        /// Record is externally dependent on an xref.
        const XREF_DEPENDENT = 16;
        /// Xref dependency has been resolved.
        const XREF_RESOLVED = 32;
        /// Record was referenced by at least one entity at last save.
        const REFERENCED = 64;
    }
}

bitflags! {
    /// Viewport view-mode flags (VPORT group 71).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ViewModeFlags: i16 {
        /// No flags.
        const NONE = 0;
        /// Perspective view active.
        const PERSPECTIVE = 1;
        /// Front clipping on.
        const FRONT_CLIPPING = 2;
        /// Back clipping on.
        const BACK_CLIPPING = 4;
        /// UCS-follow mode on.
        const UCS_FOLLOW = 8;
        /// Front clip plane not at the eye.
        const FRONT_CLIP_NOT_AT_EYE = 16;
    }
}

impl StandardFlags {
    /// Build from a decoded group-70 value, ignoring unknown bits.
    pub fn from_group_value(value: i16) -> Self {
        Self::from_bits_truncate(value)
    }
}

impl ViewModeFlags {
    /// Build from a decoded group-71 value, ignoring unknown bits.
    pub fn from_group_value(value: i16) -> Self {
        Self::from_bits_truncate(value)
    }
}
