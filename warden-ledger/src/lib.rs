pub mod memory;
pub mod model;

pub use memory::MemoryLedger;
pub use model::{REASON_NOT_PROVIDED, WarningRecord};

/// Moderation warning history, keyed by guild and then by member.
///
/// Records are append-only: there is no removal or expiry, and a member
/// without warnings has no entry at all.
pub trait WarningLedger: Send + Sync + std::fmt::Debug {
    /// Append a warning and return the stored record.
    ///
    /// A missing or blank reason is stored as [`REASON_NOT_PROVIDED`].
    fn record_warning(
        &self,
        guild_id: u64,
        member_id: u64,
        moderator_id: u64,
        reason: Option<&str>,
    ) -> WarningRecord {
        self.record_numbered_warning(guild_id, member_id, moderator_id, reason)
            .0
    }

    /// Append a warning and return it together with the member's total,
    /// both taken under the same write.
    fn record_numbered_warning(
        &self,
        guild_id: u64,
        member_id: u64,
        moderator_id: u64,
        reason: Option<&str>,
    ) -> (WarningRecord, usize);

    /// Return a member's warnings in issuance order.
    fn list_warnings(&self, guild_id: u64, member_id: u64) -> Vec<WarningRecord>;

    /// Number of warnings recorded for a member.
    fn warning_count(&self, guild_id: u64, member_id: u64) -> usize {
        self.list_warnings(guild_id, member_id).len()
    }
}
