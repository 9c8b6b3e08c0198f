use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiTimings,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Timing knobs for transient UI feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiTimings {
    /// How long a transient notice stays visible, in milliseconds
    /// (default: 4000).
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u64,
}

/// Knobs for the scripted demo collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Simulated collaborator latency in milliseconds (default: 150).
    #[serde(default = "default_demo_latency_ms")]
    pub latency_ms: u64,
    /// Scripted failures before the demo fetch succeeds (default: 1).
    #[serde(default = "default_demo_failures")]
    pub fail_first: u32,
}

fn default_notice_ttl_ms() -> u64 {
    4_000
}

fn default_demo_latency_ms() -> u64 {
    150
}

fn default_demo_failures() -> u32 {
    1
}

impl UiTimings {
    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_ttl_ms)
    }
}

impl DemoConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for UiTimings {
    fn default() -> Self {
        Self {
            notice_ttl_ms: default_notice_ttl_ms(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_demo_latency_ms(),
            fail_first: default_demo_failures(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiTimings::default(),
            demo: DemoConfig::default(),
        }
    }
}
