pub mod dut;
pub mod timing;

pub use dut::Dut;
pub use timing::{SerialTiming, BAUD, CLOCK_HZ};
