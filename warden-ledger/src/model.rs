/// Reason stored when a moderator does not supply one.
pub const REASON_NOT_PROVIDED: &str = "not provided";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WarningRecord {
    pub moderator_id: u64,
    pub reason: String,
    pub issued_at: u64,
}

impl WarningRecord {
    pub fn new(moderator_id: u64, reason: Option<&str>, issued_at: u64) -> Self {
        let reason = reason
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(REASON_NOT_PROVIDED)
            .to_owned();

        Self {
            moderator_id,
            reason,
            issued_at,
        }
    }
}
