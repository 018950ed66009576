//! Host-side protocol stack for exercising a memory-over-serial device.
//!
//! The stack mirrors the layering of the link itself: [`SerialReceiver`]
//! reconstructs bytes from per-tick line samples, [`SerialTransmitter`]
//! drives the outgoing line bit by bit, [`RxQueue`] hands received bytes
//! from the sampling context to the consumer, and [`BusClient`] frames
//! read/write commands through the [`codec`] and runs them synchronously
//! against a device behind the shared [`Link`] context.

pub mod client;
pub mod codec;
pub mod fifo;
pub mod link;
pub mod rx;
pub mod tx;

pub use client::BusClient;
pub use codec::{decode_read_response, hex8, nibble_reverse, Command, READ_RESPONSE_LEN};
pub use fifo::{Fifo, RxQueue};
pub use link::{Link, RX_QUEUE_CAPACITY};
pub use rx::SerialReceiver;
pub use tx::SerialTransmitter;

#[cfg(test)]
mod tests;
