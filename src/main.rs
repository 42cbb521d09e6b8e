//! Perseid launcher: windowed demo of the projectile flight game.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use log::LevelFilter;
use perseid::logging::init_with_level;
use perseid::{fire_on_click_system, spawn_world_system, FlightPlugin, PresentationPlugin};

/// A small 2D planet-shooting arcade game
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    let level = if args.quiet {
        LevelFilter::Warn
    } else if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    init_with_level(level);

    App::new()
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .add_plugins((FlightPlugin, PresentationPlugin))
        .add_systems(Startup, spawn_world_system)
        .add_systems(Update, fire_on_click_system)
        .run();
}
