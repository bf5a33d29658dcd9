// SPDX-License-Identifier: MIT

//! Aggregate result of one merge import.

/// Tally of a merge import, returned once all trips have been processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Trips newly inserted into the store
    pub imported_count: usize,
    /// Trips recognized as already present and skipped
    pub duplicate_count: usize,
    /// One human-readable message per trip that could not be processed,
    /// in processing order
    pub failed_messages: Vec<String>,
}

impl ImportSummary {
    pub fn has_failures(&self) -> bool {
        !self.failed_messages.is_empty()
    }
}
