use crate::codec::{decode_read_response, Command, READ_RESPONSE_LEN};
use crate::link::Link;
use crate::tx::SerialTransmitter;
use uartbench_common::{Dut, SerialTiming};

/// Synchronous memory-bus client speaking the ASCII command protocol over
/// the serial link.
///
/// The protocol is single-shot and silent on failure: writes are not
/// acknowledged and reads carry no status. End-to-end verification (did
/// the store take? does the readback match?) belongs to whoever runs the
/// test, not to this layer.
pub struct BusClient<D: Dut> {
    link: Link<D>,
    tx: SerialTransmitter,
}

impl<D: Dut> BusClient<D> {
    pub fn new(dut: D) -> Self {
        Self::with_timing(dut, SerialTiming::default())
    }

    pub fn with_timing(dut: D, timing: SerialTiming) -> Self {
        Self {
            link: Link::with_timing(dut, timing),
            tx: SerialTransmitter::new(timing),
        }
    }

    #[inline]
    pub fn link(&self) -> &Link<D> {
        &self.link
    }

    #[inline]
    pub fn link_mut(&mut self) -> &mut Link<D> {
        &mut self.link
    }

    #[inline]
    pub fn dut(&self) -> &D {
        self.link.dut()
    }

    /// Pulse device reset and park the line at idle.
    pub fn reset(&mut self) {
        self.link.reset();
    }

    /// Store one word at `addr`.
    pub fn write(&mut self, addr: u32, data: u32) {
        let frame = Command::Write { addr, data }.encode();
        log::debug!("bus write [{:#010x}] <- {:#010x} ({})", addr, data, frame);
        self.tx.send_bytes(&mut self.link, frame.as_bytes());
    }

    /// Fetch the word at `addr`, driving the tick loop until the device
    /// has answered with all eight response digits. Blocks forever on a
    /// silent device.
    pub fn read(&mut self, addr: u32) -> u32 {
        let frame = Command::Read { addr }.encode();
        log::debug!("bus read [{:#010x}] ({})", addr, frame);
        self.tx.send_bytes(&mut self.link, frame.as_bytes());
        let reply = self.tx.receive_exact(&mut self.link, READ_RESPONSE_LEN);
        decode_read_response(&reply)
    }

    /// Bounded [`BusClient::read`]: `None` if the full response has not
    /// arrived within `max_ticks` after the request went out.
    pub fn read_within(&mut self, addr: u32, max_ticks: u64) -> Option<u32> {
        let frame = Command::Read { addr }.encode();
        log::debug!("bus read [{:#010x}] ({})", addr, frame);
        self.tx.send_bytes(&mut self.link, frame.as_bytes());
        let reply = self
            .tx
            .receive_exact_within(&mut self.link, READ_RESPONSE_LEN, max_ticks)?;
        Some(decode_read_response(&reply))
    }
}
