// Listening socket models

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Deduplicated set of listening TCP ports.
pub type ListeningPortSet = BTreeSet<u16>;

/// Connection state code for LISTEN in the kernel's TCP tables.
pub const TCP_LISTEN: &str = "0A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

/// One row of a socket table, already filtered to LISTEN.
/// `local_address` keeps the kernel's `HEXADDR:HEXPORT` encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketRecord {
    pub family: AddressFamily,
    pub local_address: String,
    pub state: String,
}
