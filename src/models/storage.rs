// Filesystem usage model

use serde::{Deserialize, Serialize};

use crate::normalize::percent_used;

/// Block statistics for one mount path, normalized to bytes.
/// `free_bytes` is the space available to unprivileged users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskStats {
    pub total_bytes: u64,
    pub free_bytes: u64,
}

impl DiskStats {
    pub fn used_percent(&self) -> f64 {
        percent_used(self.total_bytes, self.free_bytes, true)
    }
}
