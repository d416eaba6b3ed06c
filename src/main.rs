use anyhow::{bail, Context as _, Result};
use clap::Parser;
use std::ffi::OsString;
use std::process::Command as Process;
use tracing::warn;

mod cli;

use cli::{Args, Command, Toggle};
use mesaenv::validate::{GLSL_RANGE, GL_RANGE};
use mesaenv::{emit, report, EnvKey, EnvStore, GalliumDriver};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let path = args
        .file
        .clone()
        .unwrap_or_else(mesaenv::default_env_file);
    let store = EnvStore::new(path);

    match args.command {
        Command::Show { json } => show(&store, json),
        Command::Init => init(&store),
        Command::Path => {
            println!("{}", store.path().display());
            Ok(())
        }
        Command::Get { key } => {
            let key = parse_key(&key)?;
            println!("{}", store.read_value(key));
            Ok(())
        }
        Command::Set { key, value } => set(&store, &key, &value),
        Command::Driver { name } => driver(&store, name.as_deref()),
        Command::Versions { gl, glsl } => versions(&store, &gl, &glsl),
        Command::Log { state } => toggle(&store, EnvKey::PluginLog, state),
        Command::Gpa { state } => toggle(&store, EnvKey::OnlyGetProcAddress, state),
        Command::Export => {
            print!("{}", emit::export_posix(&store.pairs()));
            Ok(())
        }
        Command::Run { command } => run(&store, &command),
    }
}

fn show(store: &EnvStore, json: bool) -> Result<()> {
    // best effort: a missing or unwritable file still gets a defaults view
    if let Err(err) = store.ensure_initialized() {
        warn!("cannot create {}: {err:#}", store.path().display());
    }

    if json {
        println!("{}", report::json_summary(store)?);
    } else {
        print!("{}", report::text_summary(store));
    }
    Ok(())
}

fn init(store: &EnvStore) -> Result<()> {
    if store.ensure_initialized()? {
        eprintln!("Created {}", store.path().display());
    } else {
        eprintln!("Already exists: {}", store.path().display());
    }
    Ok(())
}

fn set(store: &EnvStore, key: &str, value: &str) -> Result<()> {
    let key = parse_key(key)?;
    require_writable(store)?;
    store.write_value(key, value)?;
    println!("{}={}", key.name(), store.read_value(key));
    Ok(())
}

fn driver(store: &EnvStore, name: Option<&str>) -> Result<()> {
    let Some(name) = name else {
        let current = store.read_value(EnvKey::GalliumDriver);
        for d in GalliumDriver::ALL {
            let marker = if d.as_str() == current { "*" } else { " " };
            println!("{marker} {d}");
        }
        return Ok(());
    };

    let Some(driver) = GalliumDriver::parse(name) else {
        let known = GalliumDriver::ALL.map(|d| d.as_str()).join(", ");
        bail!("unknown driver {name:?} (expected one of: {known})");
    };

    require_writable(store)?;
    store.write_value(EnvKey::GalliumDriver, driver.as_str())?;
    println!("{}={}", EnvKey::GalliumDriver.name(), driver);
    Ok(())
}

fn versions(store: &EnvStore, gl: &str, glsl: &str) -> Result<()> {
    let gl = gl.trim();
    let glsl = glsl.trim();

    require_writable(store)?;
    let check = store.update_versions(gl, glsl)?;

    if !check.accepted() {
        let mut bad = Vec::new();
        if !check.gl_ok {
            bad.push(format!(
                "GL version {gl:?} (expected {}..{} like 4.6)",
                GL_RANGE.0, GL_RANGE.1
            ));
        }
        if !check.glsl_ok {
            bad.push(format!(
                "GLSL version {glsl:?} (expected {}..{} like 460)",
                GLSL_RANGE.0, GLSL_RANGE.1
            ));
        }
        bail!("rejected: invalid {}", bad.join(" and "));
    }

    println!("{}={}", EnvKey::GlVersionOverride.name(), gl);
    println!("{}={}", EnvKey::GlslVersionOverride.name(), glsl);
    Ok(())
}

fn toggle(store: &EnvStore, key: EnvKey, state: Toggle) -> Result<()> {
    require_writable(store)?;
    store.write_value(key, if state.as_bool() { "true" } else { "false" })?;
    println!("{}={}", key.name(), state.as_bool());
    Ok(())
}

fn run(store: &EnvStore, command: &[OsString]) -> Result<()> {
    let (prog, rest) = command.split_first().context("missing command to run")?;

    let status = Process::new(prog)
        .args(rest)
        .envs(store.pairs())
        .status()
        .with_context(|| format!("failed to run {}", prog.to_string_lossy()))?;

    std::process::exit(status.code().unwrap_or(1));
}

fn parse_key(name: &str) -> Result<EnvKey> {
    EnvKey::parse(name).with_context(|| {
        let known = EnvKey::ALL.map(|k| k.name()).join(", ");
        format!("unknown key {name:?} (expected one of: {known})")
    })
}

fn require_writable(store: &EnvStore) -> Result<()> {
    if store.is_writable() {
        return Ok(());
    }
    bail!(
        "cannot write {} (is storage mounted and writable? grant file access or pass --file)",
        store.path().display()
    );
}
