use crate::{BusClient, Link, SerialTransmitter, RX_QUEUE_CAPACITY};
use uartbench_common::{Dut, SerialTiming};

/// Test double wiring the host's transmit line straight back into its
/// receive line. Whatever the transmitter drives, the receiver samples.
struct Loopback {
    line: bool,
    reset: bool,
}

impl Loopback {
    fn new() -> Self {
        Self {
            line: true,
            reset: false,
        }
    }
}

impl Dut for Loopback {
    fn step(&mut self) {}

    fn set_reset(&mut self, asserted: bool) {
        self.reset = asserted;
    }

    fn set_serial_in(&mut self, level: bool) {
        self.line = level;
    }

    fn serial_out(&self) -> bool {
        self.line
    }
}

/// Test double that never drives its output away from idle mark.
struct DeadDevice;

impl Dut for DeadDevice {
    fn step(&mut self) {}
    fn set_reset(&mut self, _asserted: bool) {}
    fn set_serial_in(&mut self, _level: bool) {}
    fn serial_out(&self) -> bool {
        true
    }
}

#[test]
fn loopback_reproduces_any_byte_sequence_in_order() {
    let timing = SerialTiming::default();
    let mut link = Link::new(Loopback::new());
    let tx = SerialTransmitter::new(timing);

    let sent: Vec<u8> = vec![0x00, 0x41, 0x80, 0xFF, b'w', 0x55, 0xAA];
    tx.send_bytes(&mut link, &sent);

    let got = tx.receive_exact(&mut link, sent.len());
    assert_eq!(got, sent);
    assert_eq!(link.queue_len(), 0);
}

#[test]
fn loopback_holds_across_every_byte_value() {
    let timing = SerialTiming::default();
    let mut link = Link::new(Loopback::new());
    let tx = SerialTransmitter::new(timing);

    let sent: Vec<u8> = (0..=255).collect();
    tx.send_bytes(&mut link, &sent);

    assert_eq!(tx.receive_exact(&mut link, sent.len()), sent);
}

#[test]
fn queue_overflow_keeps_the_oldest_bytes() {
    let timing = SerialTiming::default();
    let mut link = Link::new(Loopback::new());
    let tx = SerialTransmitter::new(timing);

    // Four more frames than the queue can hold.
    let total = RX_QUEUE_CAPACITY + 4;
    for i in 0..total {
        tx.send(&mut link, i as u8);
    }

    assert_eq!(link.queue_len(), RX_QUEUE_CAPACITY);
    for i in 0..RX_QUEUE_CAPACITY {
        assert_eq!(link.pop_byte(), Some(i as u8));
    }
    assert_eq!(link.pop_byte(), None);
}

#[test]
fn bounded_receive_gives_up_on_a_silent_device() {
    let timing = SerialTiming::default();
    let mut link = Link::new(DeadDevice);
    let tx = SerialTransmitter::new(timing);

    let budget = 50_000;
    let before = link.ticks();
    assert_eq!(tx.receive_exact_within(&mut link, 8, budget), None);
    assert_eq!(link.ticks() - before, budget);
}

#[test]
fn write_advances_the_tick_loop_by_the_frame_length() {
    let timing = SerialTiming::default();
    let mut client = BusClient::new(Loopback::new());

    let before = client.link().ticks();
    client.write(0x00000001, 0x01234567);
    let elapsed = client.link().ticks() - before;

    // 19 frame bytes, 10 bits each, one bit time = two half-bit runs.
    let bit = 2 * timing.half_bit as u64;
    assert_eq!(elapsed, 19 * 10 * bit);
}

#[test]
fn reset_parks_the_line_at_idle_mark() {
    let mut link = Link::new(Loopback::new());
    link.drive_serial_in(false);
    link.reset();

    assert!(link.dut().serial_out(), "line must idle at mark after reset");
    assert!(!link.dut().reset, "reset must be deasserted");
    assert_eq!(link.queue_len(), 0);
}
