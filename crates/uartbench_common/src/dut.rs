/// Pin-level contract for the device under test.
///
/// Whatever simulates the hardware behind this trait is opaque to the
/// harness; all the harness sees is the serial line pair, the reset input,
/// and a primitive that advances device state by one half clock edge.
/// Line levels follow the usual serial convention: `true` is mark (the
/// idle level), `false` is space.
pub trait Dut {
    /// Advance device state by one half clock edge.
    fn step(&mut self);

    /// Drive the device's reset input.
    fn set_reset(&mut self, asserted: bool);

    /// Drive the host-to-device serial line.
    fn set_serial_in(&mut self, level: bool);

    /// Sample the device-to-host serial line.
    fn serial_out(&self) -> bool;
}
