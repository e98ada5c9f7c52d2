use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::WarningLedger;
use warden_utils::time::now_unix_secs;

use crate::model::WarningRecord;

type GuildWarnings = HashMap<u64, Vec<WarningRecord>>;

/// Process-local ledger. Everything is lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    guilds: RwLock<HashMap<u64, GuildWarnings>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn guild_count(&self) -> usize {
        self.guilds
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[cfg(test)]
    fn has_entry(&self, guild_id: u64, member_id: u64) -> bool {
        self.guilds
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&guild_id)
            .is_some_and(|members| members.contains_key(&member_id))
    }
}

impl WarningLedger for MemoryLedger {
    fn record_numbered_warning(
        &self,
        guild_id: u64,
        member_id: u64,
        moderator_id: u64,
        reason: Option<&str>,
    ) -> (WarningRecord, usize) {
        let record = WarningRecord::new(moderator_id, reason, now_unix_secs());

        let mut guilds = self.guilds.write().unwrap_or_else(PoisonError::into_inner);
        let history = guilds
            .entry(guild_id)
            .or_default()
            .entry(member_id)
            .or_default();
        history.push(record.clone());

        let total = history.len();
        debug!(guild_id, member_id, moderator_id, total, "warning recorded");
        (record, total)
    }

    fn list_warnings(&self, guild_id: u64, member_id: u64) -> Vec<WarningRecord> {
        self.guilds
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&guild_id)
            .and_then(|members| members.get(&member_id))
            .cloned()
            .unwrap_or_default()
    }

    fn warning_count(&self, guild_id: u64, member_id: u64) -> usize {
        self.guilds
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&guild_id)
            .and_then(|members| members.get(&member_id))
            .map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryLedger;
    use crate::{REASON_NOT_PROVIDED, WarningLedger};

    #[test]
    fn unknown_member_has_no_warnings_and_no_entry() {
        let ledger = MemoryLedger::new();

        assert!(ledger.list_warnings(1, 2).is_empty());
        assert_eq!(ledger.warning_count(1, 2), 0);
        assert!(!ledger.has_entry(1, 2));
        assert_eq!(ledger.guild_count(), 0);
    }

    #[test]
    fn records_are_returned_in_issuance_order() {
        let ledger = MemoryLedger::new();

        for index in 0..5 {
            ledger.record_warning(10, 20, 30, Some(&format!("reason {index}")));
        }

        let reasons: Vec<String> = ledger
            .list_warnings(10, 20)
            .into_iter()
            .map(|record| record.reason)
            .collect();
        assert_eq!(
            reasons,
            vec!["reason 0", "reason 1", "reason 2", "reason 3", "reason 4"]
        );
        assert_eq!(ledger.warning_count(10, 20), 5);
    }

    #[test]
    fn identical_warnings_are_not_merged() {
        let ledger = MemoryLedger::new();

        ledger.record_warning(1, 2, 3, Some("spam"));
        ledger.record_warning(1, 2, 3, Some("spam"));

        assert_eq!(ledger.list_warnings(1, 2).len(), 2);
    }

    #[test]
    fn missing_or_blank_reason_uses_sentinel() {
        let ledger = MemoryLedger::new();

        let first = ledger.record_warning(1, 2, 3, None);
        let second = ledger.record_warning(1, 2, 3, Some("   "));

        assert_eq!(first.reason, REASON_NOT_PROVIDED);
        assert_eq!(second.reason, REASON_NOT_PROVIDED);
        assert_eq!(REASON_NOT_PROVIDED, "not provided");
    }

    #[test]
    fn guilds_and_members_are_isolated() {
        let ledger = MemoryLedger::new();

        ledger.record_warning(1, 100, 9, Some("a"));
        ledger.record_warning(2, 100, 9, Some("b"));
        ledger.record_warning(1, 200, 9, Some("c"));

        assert_eq!(ledger.list_warnings(1, 100)[0].reason, "a");
        assert_eq!(ledger.list_warnings(2, 100)[0].reason, "b");
        assert_eq!(ledger.list_warnings(1, 200)[0].reason, "c");
        assert!(ledger.list_warnings(2, 200).is_empty());
        assert!(!ledger.has_entry(2, 200));
        assert_eq!(ledger.guild_count(), 2);
    }

    #[test]
    fn numbered_warnings_count_from_one() {
        let ledger = MemoryLedger::new();

        let (_, first) = ledger.record_numbered_warning(1, 2, 3, Some("spam"));
        let (_, second) = ledger.record_numbered_warning(1, 2, 3, None);
        let (_, other_member) = ledger.record_numbered_warning(1, 4, 3, None);

        assert_eq!((first, second, other_member), (1, 2, 1));
        assert_eq!(ledger.warning_count(1, 2), 2);
    }

    #[test]
    fn numbering_stays_unique_across_threads() {
        let ledger = std::sync::Arc::new(MemoryLedger::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ledger = std::sync::Arc::clone(&ledger);
                std::thread::spawn(move || {
                    (0..25)
                        .map(|_| ledger.record_numbered_warning(1, 2, 3, None).1)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut numbers: Vec<usize> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        numbers.sort_unstable();

        assert_eq!(numbers, (1..=200).collect::<Vec<_>>());
    }

    #[test]
    fn record_keeps_moderator_and_timestamp() {
        let ledger = MemoryLedger::new();

        let record = ledger.record_warning(1, 2, 77, Some("flooding"));

        assert_eq!(record.moderator_id, 77);
        assert!(record.issued_at > 0);
        assert_eq!(ledger.list_warnings(1, 2), vec![record]);
    }

    #[test]
    fn moderator_can_be_warned_by_themselves() {
        let ledger = MemoryLedger::new();

        let (record, total) = ledger.record_numbered_warning(1, 42, 42, Some("testing"));

        assert_eq!(record.moderator_id, 42);
        assert_eq!(total, 1);
        assert_eq!(ledger.warning_count(1, 42), 1);
    }
}
