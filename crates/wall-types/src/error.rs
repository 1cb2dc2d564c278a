use thiserror::Error;

/// Errors from the wall configurator core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WallError {
    /// The configuration cannot produce positive panel widths. Surfaced
    /// to the caller before any geometry is built; the previous valid
    /// geometry stays on screen.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// The pivot-chain walk exceeded the expected section count during
    /// rotation propagation. A defect in chain construction, never an
    /// expected runtime condition.
    #[error("pivot chain walk exceeded {expected} links (walked {walked})")]
    ChainTraversalOverrun { expected: usize, walked: usize },
}
