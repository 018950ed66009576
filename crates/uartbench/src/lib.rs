use anyhow::{bail, Result};
use typed_builder::TypedBuilder;
use uartbench_dut::{MemDevice, RAM_WORDS};
use uartbench_link::BusClient;

/// Default number of words swept.
pub const DEFAULT_WORDS: u32 = 16;

/// Default per-read tick budget before the device is declared dead.
///
/// A full eight-byte response occupies roughly 20k ticks on the wire, so
/// an order of magnitude on top of that is already damning.
pub const DEFAULT_READ_BUDGET: u64 = 200_000;

/// Data pattern written during a sweep.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Pattern {
    /// `addr * 0x01234567`, the classic counter ramp.
    Counter,
    /// Fresh random words each run.
    Random,
}

/// Options for one write/readback sweep.
#[derive(TypedBuilder)]
pub struct SweepConfig {
    #[builder(default = DEFAULT_WORDS)]
    pub words: u32,
    #[builder(default = Pattern::Counter)]
    pub pattern: Pattern,
    #[builder(default = DEFAULT_READ_BUDGET)]
    pub read_budget: u64,
}

/// Outcome of a sweep, for the caller to judge.
pub struct SweepReport {
    pub words: u32,
    pub mismatches: u32,
    pub ticks: u64,
}

/// Run a full write/readback sweep against the behavioral device model.
///
/// This is the orchestration layer the core stack leaves end-to-end
/// verification to: every write is checked against the device RAM
/// directly, and every readback against the value written. A device that
/// stays silent past the read budget is an error; mismatched readbacks
/// are counted and reported rather than aborting the sweep.
pub fn run(config: SweepConfig) -> Result<SweepReport> {
    if config.words as usize > RAM_WORDS {
        bail!(
            "sweep of {} words exceeds the {}-word device RAM",
            config.words,
            RAM_WORDS
        );
    }

    let mut client = BusClient::new(MemDevice::new());
    client.reset();
    log::info!(
        "sweeping {} words, pattern {:?}, read budget {} ticks",
        config.words,
        config.pattern,
        config.read_budget
    );

    let expected: Vec<u32> = (0..config.words)
        .map(|i| match config.pattern {
            Pattern::Counter => i.wrapping_mul(0x0123_4567),
            Pattern::Random => rand::random(),
        })
        .collect();

    for (i, &value) in expected.iter().enumerate() {
        let addr = i as u32;
        client.write(addr, value);
        let stored = client.dut().peek(addr);
        if stored != value {
            bail!(
                "store to word {} did not land: wrote {:#010x}, device holds {:#010x}",
                addr,
                value,
                stored
            );
        }
    }

    let mut mismatches = 0u32;
    for (i, &value) in expected.iter().enumerate() {
        let addr = i as u32;
        match client.read_within(addr, config.read_budget) {
            None => bail!(
                "device silent reading word {} after {} ticks",
                addr,
                config.read_budget
            ),
            Some(got) if got != value => {
                log::warn!(
                    "word {} read back {:#010x}, expected {:#010x}",
                    addr,
                    got,
                    value
                );
                mismatches += 1;
            }
            Some(_) => {}
        }
    }

    let ticks = client.link().ticks();
    log::info!(
        "sweep complete: {} words, {} mismatches, {} ticks",
        config.words,
        mismatches,
        ticks
    );
    Ok(SweepReport {
        words: config.words,
        mismatches,
        ticks,
    })
}
