//! Per-statement consistency levels

use serde::{Deserialize, Serialize};

/// Replica acknowledgement required before a statement completes.
///
/// Storage adapters translate this into their driver's own type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Consistency {
    Any,
    One,
    Two,
    Three,
    Quorum,
    All,
    LocalQuorum,
    EachQuorum,
    LocalOne,
}

impl Consistency {
    /// Level used for tweet writes
    pub const DEFAULT_WRITE: Consistency = Consistency::Quorum;
    /// Level used for single-timeline reads. Weaker than writes, so a read
    /// right after a write may miss it.
    pub const DEFAULT_READ: Consistency = Consistency::One;
}

impl std::fmt::Display for Consistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Consistency::Any => write!(f, "any"),
            Consistency::One => write!(f, "one"),
            Consistency::Two => write!(f, "two"),
            Consistency::Three => write!(f, "three"),
            Consistency::Quorum => write!(f, "quorum"),
            Consistency::All => write!(f, "all"),
            Consistency::LocalQuorum => write!(f, "local_quorum"),
            Consistency::EachQuorum => write!(f, "each_quorum"),
            Consistency::LocalOne => write!(f, "local_one"),
        }
    }
}
