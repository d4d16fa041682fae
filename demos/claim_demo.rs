//! Claim demo: accrue -> commit -> prove -> verify -> submit.
//!
//! HOW TO RUN:
//! ===========
//!
//! ```bash
//! cargo run --example claim_demo -- --stake 2500 --apy-bps 1250 --elapsed-secs 2592000
//! ```
//!
//! The submission goes to the noop submitter, which only logs it. The
//! resulting claim is printed as JSON.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use secret_harvest::accrual::BasisPoints;
use secret_harvest::claim::NoopClaimSubmitter;
use secret_harvest::config::VaultConfig;
use secret_harvest::telemetry;
use secret_harvest::vault::RewardVault;

#[derive(Debug, Parser)]
#[command(about = "Build and self-check an encrypted reward claim")]
struct Args {
    /// Farm identifier.
    #[arg(long, default_value_t = 1)]
    farm_id: u64,

    /// Owner address.
    #[arg(long, default_value = "0x52908400098527886E0F7030069857D2E4169EE7")]
    owner: String,

    /// Staked amount as a decimal string.
    #[arg(long, default_value = "100")]
    stake: String,

    /// APY in basis points.
    #[arg(long, default_value_t = 1000)]
    apy_bps: i64,

    /// Seconds since the stake was made.
    #[arg(long, default_value_t = 31_536_000)]
    elapsed_secs: i64,

    /// Optional JSON config file (see `VaultConfig`).
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => VaultConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => VaultConfig::default(),
    };
    telemetry::init_from_config(&config);

    let vault = RewardVault::from_config(&config)?;
    info!(
        stake = %args.stake,
        apy = %BasisPoints::try_from_i64(args.apy_bps)?,
        elapsed_secs = args.elapsed_secs,
        "preparing claim"
    );

    let prepared = vault.prepare_claim(
        args.farm_id,
        &args.owner,
        &args.stake,
        args.apy_bps,
        args.elapsed_secs,
    )?;
    info!(reward = %prepared.reward, "reward accrued");

    vault.submit_claim(&args.owner, &prepared.request, &NoopClaimSubmitter)?;
    println!("{}", serde_json::to_string_pretty(&prepared)?);
    Ok(())
}
