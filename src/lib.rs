//! Wake-on-LAN magic packet construction and broadcast transmission.
//!
//! The core is two small pieces: [`mac::MacAddr`] normalizes a hardware
//! address string, [`sender::send`] builds the 102-byte magic packet and
//! emits it once over a broadcast-enabled UDP socket. Everything else is
//! glue around that single operation.

pub mod config;
pub mod error;
pub mod mac;
pub mod menu;
pub mod packet;
pub mod sender;
