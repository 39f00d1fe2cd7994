//! IconSwitch CLI - inspect geometry and replay pointer gestures.

#![allow(clippy::uninlined_format_args, clippy::doc_markdown)]

use clap::{Parser, Subcommand, ValueEnum};
use iconswitch::{
    compute_geometry, ConfigError, IconSwitch, PointerEvent, SwitchGeometry, SwitchStyle,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "iconswitch")]
#[command(about = "Inspect IconSwitch geometry and replay pointer gestures")]
#[command(version)]
struct Cli {
    /// Log gesture classification and settle progress
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the derived geometry for an icon size
    Geometry {
        /// Icon size in pixels (default: 18dp at the given density)
        #[arg(short, long)]
        icon_size: Option<i32>,

        /// Display density
        #[arg(short, long, default_value = "1.0")]
        density: f32,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Replay a YAML gesture script against a switch
    Replay {
        /// Gesture script: a list of pointer events
        script: PathBuf,

        /// Switch style (default style if omitted)
        #[arg(short, long)]
        style: Option<PathBuf>,

        /// Override inactive tints and thumb colors with one accent
        #[arg(long)]
        accent: Option<String>,

        /// Frame rate used to drive the settle animation
        #[arg(long, default_value = "60")]
        fps: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Yaml,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Geometry {
            icon_size,
            density,
            format,
        } => print_geometry(icon_size, density, format),
        Commands::Replay {
            script,
            style,
            accent,
            fps,
        } => replay(&script, style.as_deref(), accent.as_deref(), fps),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_geometry(icon_size: Option<i32>, density: f32, format: OutputFormat) -> Result<(), ConfigError> {
    let mut style = SwitchStyle::new().density(density);
    style.icon_size = icon_size;
    style.validate()?;

    let geometry = compute_geometry(style.icon_size_px(), style.min_icon_size_px())?;
    match format {
        OutputFormat::Text => print_geometry_text(&geometry),
        OutputFormat::Yaml => print!("{}", serde_yaml_ng::to_string(&geometry)?),
    }
    Ok(())
}

fn print_geometry_text(g: &SwitchGeometry) {
    let desired = g.desired_size();
    println!("Icon size:        {}px (min {}px)", g.icon_size, g.min_icon_size);
    println!("Switch:           {}x{}", g.switch_width, g.switch_height);
    println!("Measured:         {}x{}", desired.width, desired.height);
    println!("Icon offset:      {}", g.icon_offset);
    println!("Icon top/bottom:  {}/{}", g.icon_top, g.icon_bottom);
    println!("Thumb diameter:   {}", g.thumb_diameter);
    println!(
        "Thumb travel:     {} -> {} ({}px)",
        g.thumb_start_left, g.thumb_end_left, g.thumb_travel
    );
    println!("Overshoot pad:    {}", g.overshoot_padding());
}

fn replay(
    script: &Path,
    style_path: Option<&Path>,
    accent: Option<&str>,
    fps: u32,
) -> Result<(), ConfigError> {
    if fps == 0 {
        return Err(ConfigError::InvalidValue {
            field: "fps".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    let mut style = match style_path {
        Some(path) => SwitchStyle::load(path)?,
        None => SwitchStyle::default(),
    };
    if let Some(hex) = accent {
        style = style.accent_hex(hex)?;
    }

    let events: Vec<PointerEvent> = serde_yaml_ng::from_str(&fs::read_to_string(script)?)?;
    info!(events = events.len(), script = %script.display(), "replaying gesture script");

    let mut switch = IconSwitch::new(style)?;
    switch.set_listener(|checked| println!("listener: checked = {}", checked));

    let frame_ms = u64::from((1000 / fps).max(1));
    let mut now = 0;
    for event in &events {
        now = drive_frames(&mut switch, now, Some(event.timestamp_ms), frame_ms);
        now = now.max(event.timestamp_ms);
        let response = switch.handle_pointer(event);
        debug!(kind = ?event.kind, ?response, "event");
        println!(
            "{:>6}ms {:<6} left={:>7.2} position={:.3} checked={}",
            event.timestamp_ms,
            format!("{:?}", event.kind).to_lowercase(),
            switch.thumb_left(),
            switch.position(),
            switch.is_checked()
        );
    }
    drive_frames(&mut switch, now, None, frame_ms);

    let end = switch.frame();
    info!(checked = end.checked, position = end.position, "replay finished");
    Ok(())
}

/// Tick the settle animation until it rests or `until` is reached.
fn drive_frames(switch: &mut IconSwitch, mut now: u64, until: Option<u64>, frame_ms: u64) -> u64 {
    while switch.needs_frame() {
        let next = now + frame_ms;
        if until.is_some_and(|limit| next > limit) {
            break;
        }
        now = next;
        switch.on_frame(now);
        println!(
            "{:>6}ms frame  left={:>7.2} position={:.3} checked={}",
            now,
            switch.thumb_left(),
            switch.position(),
            switch.is_checked()
        );
    }
    now
}
