/// Reference clock of the synthesized design (25 MHz).
pub const CLOCK_HZ: u32 = 25_000_000;
/// Reference line rate of the asynchronous serial link.
pub const BAUD: u32 = 115_200;

/// Serial line timing expressed in simulation ticks.
///
/// There is no dedicated sampling clock anywhere in the harness; both ends
/// run off the shared tick loop, so bit boundaries are expressed as tick
/// counts derived from the clock/baud ratio. At the reference 25 MHz /
/// 115200 baud this comes out to 217 ticks per bit, 108 to mid-bit.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SerialTiming {
    /// Ticks spanning one full bit time on the wire.
    pub ticks_per_bit: u32,
    /// Ticks from a falling edge to the middle of the start bit.
    pub half_bit: u32,
}

impl SerialTiming {
    pub const fn from_clock_baud(clock_hz: u32, baud: u32) -> Self {
        let ticks_per_bit = clock_hz / baud;
        Self {
            ticks_per_bit,
            half_bit: ticks_per_bit / 2,
        }
    }
}

impl Default for SerialTiming {
    fn default() -> Self {
        Self::from_clock_baud(CLOCK_HZ, BAUD)
    }
}
