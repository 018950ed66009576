use crate::fifo::RxQueue;
use crate::rx::SerialReceiver;
use uartbench_common::{Dut, SerialTiming};

/// Receive queue depth in bytes.
///
/// A read response is eight bytes, so this leaves generous headroom for a
/// chatty device; overflow drops bytes per the link rules.
pub const RX_QUEUE_CAPACITY: usize = 256;

/// Ticks to hold reset asserted before releasing the device.
const RESET_SETTLE_TICKS: u64 = 4;

/// Shared context for one serial session against a device.
///
/// Owns the device handle, the tick counter, the sampling receiver, and
/// the receive queue; nothing lives in globals. All tick advancement
/// funnels through [`Link::tick`], so the device and the receiver can
/// never drift apart.
pub struct Link<D: Dut> {
    dut: D,
    timing: SerialTiming,
    /// Monotonic count of half-clock steps since construction.
    ticks: u64,
    receiver: SerialReceiver,
    queue: RxQueue,
}

impl<D: Dut> Link<D> {
    pub fn new(dut: D) -> Self {
        Self::with_timing(dut, SerialTiming::default())
    }

    pub fn with_timing(dut: D, timing: SerialTiming) -> Self {
        Self {
            dut,
            timing,
            ticks: 0,
            receiver: SerialReceiver::new(timing),
            queue: RxQueue::new(RX_QUEUE_CAPACITY),
        }
    }

    #[inline]
    pub fn timing(&self) -> SerialTiming {
        self.timing
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn dut(&self) -> &D {
        &self.dut
    }

    #[inline]
    pub fn dut_mut(&mut self) -> &mut D {
        &mut self.dut
    }

    /// Advance the device one half clock edge and run one receiver
    /// sampling step.
    ///
    /// Completed bytes land in the receive queue. This is the producer
    /// side of the queue; a full queue drops the byte with no signal
    /// beyond a log line.
    pub fn tick(&mut self) {
        self.dut.step();
        self.ticks += 1;
        let line = self.dut.serial_out();
        if let Some(byte) = self.receiver.sample(line) {
            if !self.queue.push(byte) {
                log::warn!("rx queue full, dropped byte {:#04x}", byte);
            }
        }
    }

    /// Advance the tick loop `n` times.
    pub fn advance(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Drive the host-to-device serial line to `level`.
    #[inline]
    pub fn drive_serial_in(&mut self, level: bool) {
        self.dut.set_serial_in(level);
    }

    /// Consumer-side view of how many bytes are waiting.
    #[inline]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Consumer side of the receive queue.
    #[inline]
    pub fn pop_byte(&mut self) -> Option<u8> {
        self.queue.pop()
    }

    /// Pulse the device's reset input, then park the host-to-device line
    /// at idle mark before any further traffic. Host-side link state
    /// (receiver, queue) starts over as well.
    pub fn reset(&mut self) {
        self.dut.set_reset(true);
        self.advance(RESET_SETTLE_TICKS);
        self.dut.set_reset(false);
        self.dut.set_serial_in(true);
        self.receiver.reset();
        self.queue.clear();
    }
}
