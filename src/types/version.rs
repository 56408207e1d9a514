//! DXF version (AutoCAD release) enumeration.
//!
//! Versions are ordered, so release gating is a plain comparison:
//! `version >= DxfVersion::AC1015` asks "is this at least AutoCAD 2000".

use std::fmt;

/// DXF file format version, named by the `$ACADVER` header string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DxfVersion {
    /// AutoCAD R10
    AC1006,
    /// AutoCAD R11/R12
    AC1009,
    /// AutoCAD R13
    AC1012,
    /// AutoCAD R14
    AC1014,
    /// AutoCAD 2000
    AC1015,
    /// AutoCAD 2004
    AC1018,
    /// AutoCAD 2007
    AC1021,
    /// AutoCAD 2010
    AC1024,
    /// AutoCAD 2013
    AC1027,
    /// AutoCAD 2018
    AC1032,
}

impl DxfVersion {
    /// Alias: AutoCAD R13.
    pub const R13: DxfVersion = DxfVersion::AC1012;
    /// Alias: AutoCAD R14.
    pub const R14: DxfVersion = DxfVersion::AC1014;
    /// Alias: AutoCAD 2000.
    pub const R2000: DxfVersion = DxfVersion::AC1015;
    /// Alias: AutoCAD 2007.
    pub const R2007: DxfVersion = DxfVersion::AC1021;

    /// Parse a `$ACADVER` header value (e.g. `"AC1015"`).
    pub fn from_version_string(s: &str) -> Option<Self> {
        match s.trim() {
            "AC1006" => Some(DxfVersion::AC1006),
            "AC1009" => Some(DxfVersion::AC1009),
            "AC1012" => Some(DxfVersion::AC1012),
            "AC1014" => Some(DxfVersion::AC1014),
            "AC1015" => Some(DxfVersion::AC1015),
            "AC1018" => Some(DxfVersion::AC1018),
            "AC1021" => Some(DxfVersion::AC1021),
            "AC1024" => Some(DxfVersion::AC1024),
            "AC1027" => Some(DxfVersion::AC1027),
            "AC1032" => Some(DxfVersion::AC1032),
            _ => None,
        }
    }

    /// The `$ACADVER` header string for this version.
    pub fn version_string(&self) -> &'static str {
        match self {
            DxfVersion::AC1006 => "AC1006",
            DxfVersion::AC1009 => "AC1009",
            DxfVersion::AC1012 => "AC1012",
            DxfVersion::AC1014 => "AC1014",
            DxfVersion::AC1015 => "AC1015",
            DxfVersion::AC1018 => "AC1018",
            DxfVersion::AC1021 => "AC1021",
            DxfVersion::AC1024 => "AC1024",
            DxfVersion::AC1027 => "AC1027",
            DxfVersion::AC1032 => "AC1032",
        }
    }

    /// Marketing release name (e.g. `"R2000"`).
    pub fn release_name(&self) -> &'static str {
        match self {
            DxfVersion::AC1006 => "R10",
            DxfVersion::AC1009 => "R11/R12",
            DxfVersion::AC1012 => "R13",
            DxfVersion::AC1014 => "R14",
            DxfVersion::AC1015 => "R2000",
            DxfVersion::AC1018 => "R2004",
            DxfVersion::AC1021 => "R2007",
            DxfVersion::AC1024 => "R2010",
            DxfVersion::AC1027 => "R2013",
            DxfVersion::AC1032 => "R2018",
        }
    }

    /// True when this version is `other` or newer.
    #[inline]
    pub fn at_least(&self, other: DxfVersion) -> bool {
        *self >= other
    }
}

impl Default for DxfVersion {
    fn default() -> Self {
        DxfVersion::AC1032
    }
}

impl fmt::Display for DxfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.version_string(), self.release_name())
    }
}
