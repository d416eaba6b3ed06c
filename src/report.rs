use anyhow::{Context as _, Result};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::keys::EnvKey;
use crate::store::{EnvStore, Settings};

/// Human-readable dump of the file and the five settings, plus any keys the
/// file carries that this tool does not manage. Read-only.
pub fn text_summary(store: &EnvStore) -> String {
    let s = store.settings();
    let mut out = String::new();

    out.push_str("mesaenv settings\n");
    out.push_str("================\n");
    out.push_str(&format!("file: {}\n", store.path().display()));
    out.push('\n');

    line(&mut out, EnvKey::GalliumDriver, &s.gallium_driver);
    line(&mut out, EnvKey::GlVersionOverride, &s.gl_version_override);
    line(&mut out, EnvKey::GlslVersionOverride, &s.glsl_version_override);
    line(&mut out, EnvKey::PluginLog, s.plugin_log);
    line(&mut out, EnvKey::OnlyGetProcAddress, s.only_get_proc_address);

    let extras = extra_pairs(store);
    if !extras.is_empty() {
        out.push_str("\nextra keys\n");
        for (k, v) in &extras {
            out.push_str(&format!("  - {k}={v}\n"));
        }
    }

    out
}

pub fn json_summary(store: &EnvStore) -> Result<String> {
    #[derive(Serialize)]
    struct Report {
        file: String,
        settings: Settings,
        extra: BTreeMap<String, String>,
    }

    let report = Report {
        file: store.path().display().to_string(),
        settings: store.settings(),
        extra: extra_pairs(store),
    };

    serde_json::to_string_pretty(&report).context("failed to render settings as JSON")
}

fn line(out: &mut String, key: EnvKey, value: impl std::fmt::Display) {
    out.push_str(&format!("  {}={}\n", key.name(), value));
}

fn extra_pairs(store: &EnvStore) -> BTreeMap<String, String> {
    store
        .pairs()
        .into_iter()
        .filter(|(k, _)| EnvKey::parse(k).is_none())
        .collect()
}
