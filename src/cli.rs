use clap::{Parser, Subcommand, ValueEnum};
use std::{ffi::OsString, fmt, path::PathBuf};

#[derive(Parser, Debug)]
#[command(name = "mesaenv", version, about)]
pub struct Args {
    /// Path to env.txt (overrides MESAENV_FILE and the storage default)
    #[arg(long, global = true, env = "MESAENV_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the file path and the current settings
    Show {
        /// Emit JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Create the env file with defaults if it is missing
    Init,

    /// Print the env file path
    Path,

    /// Print one key's effective value
    Get {
        /// Key name, e.g. GALLIUM_DRIVER
        key: String,
    },

    /// Write one key verbatim, no validation
    Set {
        /// Key name, e.g. MESA_GL_VERSION_OVERRIDE
        key: String,
        /// Raw value to store
        value: String,
    },

    /// Select the Gallium driver, or list the known ones
    Driver {
        /// zink, freedreno or panfrost; omit to list
        name: Option<String>,
    },

    /// Update the GL and GLSL version overrides together
    Versions {
        /// Desktop GL version, e.g. 4.6
        gl: String,
        /// GLSL version, e.g. 460
        glsl: String,
    },

    /// Turn the plugin's logcat logging on or off
    Log { state: Toggle },

    /// Restrict symbol lookup to OSMesaGetProcAddress (not recommended)
    Gpa { state: Toggle },

    /// Print eval-able POSIX exports for every pair in the file
    Export,

    /// Run a command with every pair exported into its environment
    Run {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        command: Vec<OsString>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn as_bool(self) -> bool {
        matches!(self, Toggle::On)
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Toggle::On => "on",
            Toggle::Off => "off",
        })
    }
}
