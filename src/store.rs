//! The env-file store: single point of truth for the renderer plugin's
//! configuration file.
//!
//! Every update is a full read-then-rewrite of the file with no locking.
//! Updates are user-triggered one at a time and the host renderer only reads
//! the file at its own startup, so there is at most one writer in flight.

use anyhow::{Context as _, Result};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::keys::EnvKey;
use crate::validate::{check_versions, VersionCheck};

#[derive(Debug, Clone)]
pub struct EnvStore {
    path: PathBuf,
}

/// Snapshot of the five known settings with defaults filled in.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub gallium_driver: String,
    pub gl_version_override: String,
    pub glsl_version_override: String,
    pub plugin_log: bool,
    pub only_get_proc_address: bool,
}

impl EnvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with the five defaults if it does not exist, parent
    /// directories included. Returns whether the file was created; a second
    /// call leaves an existing file byte-for-byte untouched.
    pub fn ensure_initialized(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let defaults = EnvKey::ALL
            .iter()
            .map(|k| format!("{}={}", k.name(), k.default_value()))
            .collect::<Vec<_>>()
            .join("\n");

        fs::write(&self.path, defaults)
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        debug!("created {} with defaults", self.path.display());
        Ok(true)
    }

    /// Value after `KEY=` on the first line carrying that exact prefix,
    /// trimmed. Falls back to the key's default when the file is missing,
    /// unreadable, or has no such line. A present-but-empty value is
    /// returned as the empty string, not the default.
    pub fn read_value(&self, key: EnvKey) -> String {
        let Ok(text) = fs::read_to_string(&self.path) else {
            return key.default_value().to_string();
        };

        let prefix = format!("{}=", key.name());
        text.lines()
            .find_map(|line| line.strip_prefix(prefix.as_str()))
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| key.default_value().to_string())
    }

    /// True iff some line, trimmed, is exactly `KEY=true`. Absence, `false`,
    /// any other spelling, and a missing file all read as false.
    pub fn read_bool(&self, key: EnvKey) -> bool {
        let Ok(text) = fs::read_to_string(&self.path) else {
            return false;
        };

        let wanted = format!("{}=true", key.name());
        text.lines().any(|line| line.trim() == wanted)
    }

    pub fn write_value(&self, key: EnvKey, value: &str) -> Result<()> {
        self.write_many(&[(key, value)])
    }

    /// Replace-or-append several keys in one read/rewrite pass: the first
    /// line prefixed `KEY=` is replaced per key, keys with no line are
    /// appended in the order given, and every other line is kept verbatim in
    /// position. Ensures the file exists first.
    pub fn write_many(&self, pairs: &[(EnvKey, &str)]) -> Result<()> {
        self.ensure_initialized()?;

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();

        for (key, value) in pairs {
            let prefix = format!("{}=", key.name());
            let entry = format!("{}{}", prefix, value);
            match lines.iter().position(|l| l.starts_with(&prefix)) {
                Some(i) => lines[i] = entry,
                None => lines.push(entry),
            }
        }

        fs::write(&self.path, lines.join("\n"))
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        debug!("updated {} key(s) in {}", pairs.len(), self.path.display());
        Ok(())
    }

    /// Joint GL/GLSL override update. Both fields are checked first; if
    /// either fails, nothing is written and the returned flags name the bad
    /// field(s) individually.
    pub fn update_versions(&self, gl: &str, glsl: &str) -> Result<VersionCheck> {
        let check = check_versions(gl, glsl);
        if check.accepted() {
            self.write_many(&[
                (EnvKey::GlVersionOverride, gl),
                (EnvKey::GlslVersionOverride, glsl),
            ])?;
        }
        Ok(check)
    }

    pub fn settings(&self) -> Settings {
        Settings {
            gallium_driver: self.read_value(EnvKey::GalliumDriver),
            gl_version_override: self.read_value(EnvKey::GlVersionOverride),
            glsl_version_override: self.read_value(EnvKey::GlslVersionOverride),
            plugin_log: self.read_bool(EnvKey::PluginLog),
            only_get_proc_address: self.read_bool(EnvKey::OnlyGetProcAddress),
        }
    }

    /// Every `KEY=VALUE` line in file order, unknown keys included; this is
    /// the view the native bridge exports into the renderer's environment.
    /// Blank lines, `#` comments, and lines without `=` are skipped; values
    /// split at the first `=`.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let Ok(text) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        for line in text.lines() {
            let s = line.trim();
            if s.is_empty() || s.starts_with('#') {
                continue;
            }
            let Some((k, v)) = s.split_once('=') else {
                continue;
            };
            let key = k.trim();
            if key.is_empty() {
                continue;
            }
            out.push((key.to_string(), v.trim().to_string()));
        }
        out
    }

    /// Best-effort "storage writable" gate for callers: heals the file, then
    /// probes an append-mode open. The store never requests permissions
    /// itself; on Android shared storage this stands in for the all-files
    /// access check the caller would otherwise make.
    pub fn is_writable(&self) -> bool {
        if self.ensure_initialized().is_err() {
            return false;
        }
        fs::OpenOptions::new()
            .append(true)
            .open(&self.path)
            .is_ok()
    }
}
