//! Command-line interface for the headless screen demos.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "navi-core",
    about = "Headless demos of the Navi screen-state runtime",
    version
)]
pub struct Cli {
    /// Path to a config file (defaults to the platform config dir).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub demo: Demo,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Demo {
    /// Nearby places: retryable load plus filtered projection.
    Places,
    /// Notification preferences, durable save, confirmed backup.
    Settings,
    /// Live position feed with a screen-scoped follower.
    Tracker,
    /// Share invite with local email validation.
    Invite,
}
