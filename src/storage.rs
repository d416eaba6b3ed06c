//! Where the renderer's env file lives on this machine.

use std::{
    collections::BTreeMap,
    env,
    path::{Path, PathBuf},
};

/// Root the native bridge hardcodes on device.
const SDCARD_ROOT: &str = "/sdcard";

/// Default location of the env file, `<storage root>/Mesa/env.txt`.
///
/// The root is picked to match what the renderer side will read:
/// `$EXTERNAL_STORAGE` when an Android shell exports it, `/sdcard` when it
/// exists, and the user's home directory everywhere else.
pub fn default_env_file() -> PathBuf {
    let vars: BTreeMap<String, String> = env::vars().collect();
    env_file_in(storage_root(&vars))
}

fn env_file_in(root: PathBuf) -> PathBuf {
    root.join("Mesa").join("env.txt")
}

fn storage_root(vars: &BTreeMap<String, String>) -> PathBuf {
    if let Some(root) = vars.get("EXTERNAL_STORAGE").filter(|v| !v.is_empty()) {
        return PathBuf::from(root);
    }
    if Path::new(SDCARD_ROOT).is_dir() {
        return PathBuf::from(SDCARD_ROOT);
    }
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_storage_wins() {
        let mut vars = BTreeMap::new();
        vars.insert(
            "EXTERNAL_STORAGE".to_string(),
            "/storage/emulated/0".to_string(),
        );
        assert_eq!(storage_root(&vars), PathBuf::from("/storage/emulated/0"));
    }

    #[test]
    fn empty_external_storage_is_ignored() {
        let mut vars = BTreeMap::new();
        vars.insert("EXTERNAL_STORAGE".to_string(), String::new());
        assert_eq!(storage_root(&vars), storage_root(&BTreeMap::new()));
    }

    #[test]
    fn env_file_sits_under_mesa() {
        assert_eq!(
            env_file_in(PathBuf::from("/storage/emulated/0")),
            PathBuf::from("/storage/emulated/0/Mesa/env.txt")
        );
    }
}
