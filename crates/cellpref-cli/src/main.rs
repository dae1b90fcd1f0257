//! cellpref
//!
//! Evaluates cellular settings snapshots described in TOML and prints the
//! resulting decisions as JSON.
//!
//! - `evaluate`   full row map and mode resolution for one subscription
//! - `tabs`       per-SIM tab decision between two subscription lists
//! - `resolve`    network-mode resolution only, optionally for another code
//! - `world-mode` world-mode switch parsing

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use cellpref_core::mode::NetworkMode;
use cellpref_core::resolver::{
    preferred_mode_summary, resolve_enabled_networks_entries, resolve_summary, ChoiceListVariant,
    ModeContext, PreferredModeSummary, ResolvedMode,
};
use cellpref_core::{
    DeviceConfig, EvaluationSnapshot, SettingsVisibilityEngine, SubscriptionInfo,
    SubscriptionSnapshot, TabDecision, TabSyncDecider,
};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cellpref", about = "Cellular settings decision core")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate every settings row for one subscription.
    Evaluate {
        /// Device configuration TOML (defaults apply when omitted).
        #[arg(long)]
        device: Option<PathBuf>,
        /// Evaluation snapshot TOML.
        #[arg(long)]
        snapshot: PathBuf,
    },

    /// Decide what happens to the per-SIM tabs.
    Tabs {
        #[arg(long)]
        device: Option<PathBuf>,
        /// Subscription list the tabs were last built from.
        #[arg(long)]
        previous: PathBuf,
        /// Fresh subscription list; omit when the platform could not report one.
        #[arg(long)]
        current: Option<PathBuf>,
    },

    /// Resolve the network mode shown by the selectors.
    Resolve {
        #[arg(long)]
        device: Option<PathBuf>,
        #[arg(long)]
        snapshot: PathBuf,
        /// Raw code to resolve instead of the stored one.
        #[arg(long, allow_negative_numbers = true)]
        mode: Option<i32>,
    },

    /// Check a world-mode configuration string against a SIM group id.
    WorldMode {
        #[arg(long)]
        config: String,
        #[arg(long, default_value = "")]
        gid1: String,
    },
}

/// `[[subscriptions]]` tables.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SubscriptionsFile {
    subscriptions: Vec<SubscriptionInfo>,
}

#[derive(Debug, Serialize)]
struct TabsOutput {
    #[serde(flatten)]
    decision: TabDecision,
    active_slot: usize,
}

#[derive(Debug, Serialize)]
struct ResolveOutput {
    raw: i32,
    context: ModeContext,
    choice_list: ChoiceListVariant,
    resolved: Option<ResolvedMode>,
    includes_lte: Option<bool>,
    preferred_summary: PreferredModeSummary,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Evaluate { device, snapshot } => {
            let device = load_device(device.as_deref())?;
            let snapshot: EvaluationSnapshot = load_toml(&snapshot)?;
            let result = SettingsVisibilityEngine::new(device)
                .evaluate(&snapshot)
                .with_context(|| format!("evaluating subscription {}", snapshot.sub_id))?;
            print_json(&result)
        }
        Command::Tabs {
            device,
            previous,
            current,
        } => {
            let device = load_device(device.as_deref())?;
            let previous = load_subscriptions(&previous)?;
            let current = current.as_deref().map(load_subscriptions).transpose()?;

            let decider = TabSyncDecider::from_config(&device);
            let decision = decider.decide(&previous, current.as_ref());
            let active_slot = decider.active_slot(&decision, current.as_ref(), None);
            print_json(&TabsOutput {
                decision,
                active_slot,
            })
        }
        Command::Resolve {
            device,
            snapshot,
            mode,
        } => {
            let device = load_device(device.as_deref())?;
            let snapshot: EvaluationSnapshot = load_toml(&snapshot)?;
            let ctx = ModeContext::new(
                &snapshot.radio,
                &snapshot.flags,
                &device,
                &snapshot.settings,
            );
            let raw = mode
                .or(snapshot.settings.preferred_network_mode)
                .unwrap_or_else(|| device.default_network_mode.as_raw());

            let choice_list = resolve_enabled_networks_entries(&ctx, raw)?;
            let resolved = match resolve_summary(&ctx, raw) {
                Ok(resolved) => Some(resolved),
                Err(err) => {
                    tracing::warn!(raw, %err, "cannot resolve network mode");
                    None
                }
            };
            print_json(&ResolveOutput {
                raw,
                context: ctx,
                choice_list,
                resolved,
                includes_lte: NetworkMode::from_raw(raw).ok().map(NetworkMode::has_lte),
                preferred_summary: preferred_mode_summary(&ctx, raw),
            })
        }
        Command::WorldMode { config, gid1 } => {
            let on = cellpref_core::resolver::is_world_mode(&config, &gid1);
            println!("{on}");
            Ok(())
        }
    }
}

fn load_toml<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn load_device(path: Option<&Path>) -> anyhow::Result<DeviceConfig> {
    let Some(path) = path else {
        return Ok(DeviceConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let device = DeviceConfig::from_toml_str(&text)
        .with_context(|| format!("invalid device config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded device config");
    Ok(device)
}

fn load_subscriptions(path: &Path) -> anyhow::Result<SubscriptionSnapshot> {
    let file: SubscriptionsFile = load_toml(path)?;
    Ok(SubscriptionSnapshot::new(file.subscriptions))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
