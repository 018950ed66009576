use crate::link::Link;
use uartbench_common::{Dut, SerialTiming};

/// Host-side line driver for the asynchronous serial link.
///
/// Sends 8-N-1 frames by holding the device's serial input at each bit
/// level while the shared tick loop runs. Each bit time is realized as
/// two half-bit advances, matching the receiver's sampling granularity.
/// The blocking receive helpers live here too: waiting for bytes is just
/// more tick driving.
pub struct SerialTransmitter {
    timing: SerialTiming,
}

impl SerialTransmitter {
    pub fn new(timing: SerialTiming) -> Self {
        Self { timing }
    }

    /// Send one byte: start bit, eight data bits least-significant-first,
    /// stop bit.
    pub fn send<D: Dut>(&self, link: &mut Link<D>, byte: u8) {
        link.drive_serial_in(false);
        self.bit_time(link);
        for i in 0..8 {
            link.drive_serial_in((byte >> i) & 1 == 1);
            self.bit_time(link);
        }
        link.drive_serial_in(true);
        self.bit_time(link);
    }

    /// Send a byte sequence back to back, no inter-byte gap.
    pub fn send_bytes<D: Dut>(&self, link: &mut Link<D>, bytes: &[u8]) {
        for &byte in bytes {
            self.send(link, byte);
        }
    }

    /// Busy-wait on the tick loop until `n` bytes have arrived, then pop
    /// them in arrival order.
    ///
    /// There is no bound on the wait: a device that never answers blocks
    /// forever. Use [`SerialTransmitter::receive_exact_within`] when a
    /// tick budget is wanted.
    pub fn receive_exact<D: Dut>(&self, link: &mut Link<D>, n: usize) -> Vec<u8> {
        while link.queue_len() < n {
            link.tick();
        }
        self.drain(link, n)
    }

    /// Bounded variant of [`SerialTransmitter::receive_exact`]: gives up
    /// after `max_ticks` further ticks, leaving the queue untouched.
    pub fn receive_exact_within<D: Dut>(
        &self,
        link: &mut Link<D>,
        n: usize,
        max_ticks: u64,
    ) -> Option<Vec<u8>> {
        let mut spent = 0u64;
        while link.queue_len() < n {
            if spent >= max_ticks {
                return None;
            }
            link.tick();
            spent += 1;
        }
        Some(self.drain(link, n))
    }

    /// Hold the line for one bit time, as two half-bit tick runs.
    fn bit_time<D: Dut>(&self, link: &mut Link<D>) {
        link.advance(self.timing.half_bit as u64);
        link.advance(self.timing.half_bit as u64);
    }

    fn drain<D: Dut>(&self, link: &mut Link<D>, n: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.extend(link.pop_byte());
        }
        out
    }
}
