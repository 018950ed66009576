//! Behavioral model of the RAM-over-serial device the harness exercises.
//!
//! This is a software stand-in for the synthesized hardware: a word-wide
//! RAM reachable through an asynchronous serial link speaking the ASCII
//! command protocol. It implements the pin-level [`uartbench_common::Dut`]
//! contract, so the full host stack runs against it unchanged.

pub mod device;

pub use device::{MemDevice, RAM_WORDS};
