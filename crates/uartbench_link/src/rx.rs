use uartbench_common::SerialTiming;

/// Receiver state. `Byte(i)` waits out the boundary of data bit `i`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum RxState {
    Idle,
    StartBit,
    Byte(u8),
    StopBit,
}

/// Asynchronous 8-N-1 receiver, sampled once per simulation tick.
///
/// Byte framing is reconstructed from the tick counter alone. A falling
/// edge arms the receiver; the start bit is re-sampled at its midpoint so
/// a short glitch on the line never turns into a phantom byte. From that
/// midpoint, data and stop bits are sampled one full bit time apart,
/// landing each sample near the middle of its bit cell.
pub struct SerialReceiver {
    timing: SerialTiming,
    state: RxState,
    /// Ticks elapsed since the last state transition.
    counter: u32,
    /// Shift accumulator; bits arrive least-significant-first.
    shift: u8,
}

impl SerialReceiver {
    pub fn new(timing: SerialTiming) -> Self {
        Self {
            timing,
            state: RxState::Idle,
            counter: 0,
            shift: 0,
        }
    }

    /// Return to idle, discarding any partially assembled frame.
    pub fn reset(&mut self) {
        self.state = RxState::Idle;
        self.counter = 0;
        self.shift = 0;
    }

    /// Advance the receiver by one tick with the current line level.
    ///
    /// Returns a completed byte when a frame ends in a valid stop bit.
    /// Malformed frames are dropped with no signal to the caller.
    pub fn sample(&mut self, line: bool) -> Option<u8> {
        self.counter += 1;
        match self.state {
            RxState::Idle => {
                if !line {
                    self.counter = 0;
                    self.state = RxState::StartBit;
                }
            }
            RxState::StartBit => {
                if self.counter >= self.timing.half_bit {
                    if !line {
                        self.shift = 0;
                        self.counter = 0;
                        self.state = RxState::Byte(0);
                    } else {
                        // Line recovered before the midpoint: glitch.
                        self.state = RxState::Idle;
                    }
                }
            }
            RxState::Byte(bit) => {
                if self.counter >= self.timing.ticks_per_bit {
                    self.shift = (self.shift >> 1) | ((line as u8) << 7);
                    self.counter = 0;
                    self.state = if bit == 7 {
                        RxState::StopBit
                    } else {
                        RxState::Byte(bit + 1)
                    };
                }
            }
            RxState::StopBit => {
                if self.counter >= self.timing.ticks_per_bit {
                    self.state = RxState::Idle;
                    if line {
                        log::trace!("rx frame {:#04x}", self.shift);
                        return Some(self.shift);
                    }
                    // Stop bit read low: framing error, byte dropped.
                }
            }
        }
        None
    }
}
