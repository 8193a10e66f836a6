// Listening-port collection from the kernel's TCP socket tables

use crate::models::{AddressFamily, ListeningPortSet, SocketRecord, TCP_LISTEN};

/// Column holding the `HEXADDR:HEXPORT` local address.
const LOCAL_ADDRESS_FIELD: usize = 1;
/// Column holding the two-hex-digit connection state.
const STATE_FIELD: usize = 3;
const MIN_FIELDS: usize = 4;

/// Splits a `/proc/net/tcp{,6}` table into `(local_address, state)` pairs.
///
/// The header line and any row with fewer than four whitespace-separated
/// fields are skipped.
pub fn table_rows(table: &str) -> impl Iterator<Item = (&str, &str)> {
    table.lines().skip(1).filter_map(|line| {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            return None;
        }
        Some((fields[LOCAL_ADDRESS_FIELD], fields[STATE_FIELD]))
    })
}

/// LISTEN rows of one table, tagged with the address family.
pub fn listening_records(table: &str, family: AddressFamily) -> Vec<SocketRecord> {
    table_rows(table)
        .filter(|(_, state)| *state == TCP_LISTEN)
        .map(|(local_address, state)| SocketRecord {
            family,
            local_address: local_address.to_string(),
            state: state.to_string(),
        })
        .collect()
}

/// Port encoded after the single `:` of a `HEXADDR:HEXPORT` address.
pub fn local_port(local_address: &str) -> Option<u16> {
    let (addr, port) = local_address.split_once(':')?;
    if addr.contains(':') || port.contains(':') {
        return None;
    }
    u16::from_str_radix(port, 16).ok()
}

/// Ports of every LISTEN row, deduplicated.
///
/// Rows in any other state, or whose address does not split into exactly
/// one address and one hex port, are dropped.
pub fn collect<'a, I>(rows: I) -> ListeningPortSet
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    rows.into_iter()
        .filter(|(_, state)| *state == TCP_LISTEN)
        .filter_map(|(local_address, _)| local_port(local_address))
        .collect()
}

/// Convenience over [`collect`] for records returned by a counter source.
pub fn collect_records(records: &[SocketRecord]) -> ListeningPortSet {
    collect(
        records
            .iter()
            .map(|r| (r.local_address.as_str(), r.state.as_str())),
    )
}
