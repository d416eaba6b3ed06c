pub mod emit;
pub mod keys;
pub mod report;
pub mod storage;
pub mod store;
pub mod validate;

// Convenience re-exports (optional, but nice)
pub use keys::{EnvKey, GalliumDriver};
pub use storage::default_env_file;
pub use store::{EnvStore, Settings};
pub use validate::{check_versions, VersionCheck};
