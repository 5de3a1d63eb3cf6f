//! Trackbot: Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  HardwareAdapter          LogEventSink    JsonConfigFile     │
//! │  (Line+Distance+Motion)   (EventSink)     (ConfigPort)       │
//! │  ThreadDelay (DelayNs)    ctrlc → InterruptFlag              │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ──────────────────      │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │           DecisionLoop (pure logic)                    │  │
//! │  │  classify · obstacle latch · stop guarantee            │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{info, warn};
use rppal::gpio::Gpio;
use rppal::i2c::I2c;

use trackbot::adapters::config_file::JsonConfigFile;
use trackbot::adapters::hardware::HardwareAdapter;
use trackbot::adapters::log_sink::LogEventSink;
use trackbot::adapters::time::{ThreadDelay, Uptime};
use trackbot::app::controller::DecisionLoop;
use trackbot::app::events::RunOutcome;
use trackbot::app::interrupt::InterruptFlag;
use trackbot::app::ports::ConfigPort;
use trackbot::drivers::aux_motor::AuxMotorDriver;
use trackbot::pins;

/// Follow the track, pick up the obstacle, stop at the end marker.
#[derive(Parser, Debug)]
#[command(name = "trackbot", version, about)]
struct Args {
    /// JSON calibration file.  Missing keys (or a missing file) use defaults.
    #[arg(short, long, value_name = "PATH", default_value = "trackbot.json")]
    config: PathBuf,

    /// Print the effective configuration as JSON and exit without
    /// touching the hardware.
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // ── Configuration ─────────────────────────────────────────
    let config = JsonConfigFile::new(&args.config)
        .load()
        .with_context(|| format!("loading {}", args.config.display()))?;

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    info!(
        "Trackbot v{} | tick={}ms threshold={}cm",
        env!("CARGO_PKG_VERSION"),
        config.tick_interval_ms,
        config.obstacle_threshold_cm,
    );

    // ── Interrupt ─────────────────────────────────────────────
    let interrupt = InterruptFlag::new();
    {
        let interrupt = interrupt.clone();
        ctrlc::set_handler(move || interrupt.raise()).context("installing signal handler")?;
    }

    // ── Peripherals ───────────────────────────────────────────
    let bus = I2c::with_bus(pins::I2C_BUS)
        .with_context(|| format!("opening I2C bus {}", pins::I2C_BUS))?;
    let gpio = Gpio::new().context("opening GPIO")?;
    let ain1 = gpio
        .get(pins::AUX_AIN1_GPIO)
        .with_context(|| format!("claiming GPIO{}", pins::AUX_AIN1_GPIO))?
        .into_output_low();
    let ain2 = gpio
        .get(pins::AUX_AIN2_GPIO)
        .with_context(|| format!("claiming GPIO{}", pins::AUX_AIN2_GPIO))?
        .into_output_low();
    let aux = AuxMotorDriver::new(ain1, ain2).context("releasing aux motor")?;
    let hw = HardwareAdapter::new(bus, aux);
    info!("Peripherals ready");

    // ── Run ───────────────────────────────────────────────────
    let uptime = Uptime::new();
    let mut sink = LogEventSink::new();
    let mut decision_loop = DecisionLoop::new(hw, ThreadDelay::new(), config, interrupt);
    let result = decision_loop.run(&mut sink);

    let faults = decision_loop.hardware().bus_faults();
    if faults > 0 {
        warn!("{} transient bus faults absorbed", faults);
    }
    info!("Ran for {}s", uptime.secs());

    match result {
        Ok(RunOutcome::Completed) => info!("Done"),
        Ok(RunOutcome::Interrupted) => info!("Stopped by operator"),
        Err(e) => bail!("run aborted: {e}"),
    }
    Ok(())
}
