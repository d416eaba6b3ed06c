//! Canonical keys of the plugin env file.
//!
//! Centralized so nothing else in the crate spells a key or a default by
//! hand. Keys are case-sensitive; every lookup in the store is an exact
//! `KEY=` line-prefix match.

use std::fmt;

/// The five settings the renderer plugin reads from its env file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvKey {
    /// Gallium backend Mesa selects at load (`GALLIUM_DRIVER`)
    GalliumDriver,

    /// Forced reported OpenGL version (`MESA_GL_VERSION_OVERRIDE`)
    GlVersionOverride,

    /// Forced reported GLSL version (`MESA_GLSL_VERSION_OVERRIDE`)
    GlslVersionOverride,

    /// Plugin error logging to stderr (`OSM_PLUGIN_LOGE`)
    PluginLog,

    /// Resolve GL symbols through getProcAddress only (`ONLY_GET_PROC_ADDRESS`)
    OnlyGetProcAddress,
}

impl EnvKey {
    /// Canonical file order; a fresh env file carries the defaults in this
    /// order.
    pub const ALL: [EnvKey; 5] = [
        EnvKey::GalliumDriver,
        EnvKey::GlVersionOverride,
        EnvKey::GlslVersionOverride,
        EnvKey::PluginLog,
        EnvKey::OnlyGetProcAddress,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EnvKey::GalliumDriver => "GALLIUM_DRIVER",
            EnvKey::GlVersionOverride => "MESA_GL_VERSION_OVERRIDE",
            EnvKey::GlslVersionOverride => "MESA_GLSL_VERSION_OVERRIDE",
            EnvKey::PluginLog => "OSM_PLUGIN_LOGE",
            EnvKey::OnlyGetProcAddress => "ONLY_GET_PROC_ADDRESS",
        }
    }

    /// Value a read falls back to when the file or the line is missing.
    pub fn default_value(self) -> &'static str {
        match self {
            EnvKey::GalliumDriver => "zink",
            EnvKey::GlVersionOverride => "4.6",
            EnvKey::GlslVersionOverride => "460",
            EnvKey::PluginLog => "false",
            EnvKey::OnlyGetProcAddress => "false",
        }
    }

    /// Exact (case-sensitive) key name lookup.
    pub fn parse(s: &str) -> Option<EnvKey> {
        EnvKey::ALL.into_iter().find(|k| k.name() == s)
    }
}

impl fmt::Display for EnvKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Drivers the picker offers. The file itself takes any string; this set
/// constrains only the `driver` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalliumDriver {
    Zink,
    Freedreno,
    Panfrost,
}

impl GalliumDriver {
    pub const ALL: [GalliumDriver; 3] = [
        GalliumDriver::Zink,
        GalliumDriver::Freedreno,
        GalliumDriver::Panfrost,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GalliumDriver::Zink => "zink",
            GalliumDriver::Freedreno => "freedreno",
            GalliumDriver::Panfrost => "panfrost",
        }
    }

    pub fn parse(s: &str) -> Option<GalliumDriver> {
        GalliumDriver::ALL.into_iter().find(|d| d.as_str() == s)
    }
}

impl fmt::Display for GalliumDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_round_trip() {
        for key in EnvKey::ALL {
            assert_eq!(EnvKey::parse(key.name()), Some(key));
        }
        assert_eq!(EnvKey::parse("gallium_driver"), None);
        assert_eq!(EnvKey::parse("GALLIUM_DRIVER "), None);
    }

    #[test]
    fn driver_parse_is_exact() {
        assert_eq!(GalliumDriver::parse("zink"), Some(GalliumDriver::Zink));
        assert_eq!(GalliumDriver::parse("Zink"), None);
        assert_eq!(GalliumDriver::parse("softpipe"), None);
    }
}
