pub mod error;

use std::sync::Arc;
use std::time::Instant;

use warden_ledger::WarningLedger;

pub use error::{ActionResultExt, CommandFailure};

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub ledger: Arc<dyn WarningLedger>,
    pub started_at: Instant,
    pub credits: Option<String>,
}

impl Data {
    pub fn new(ledger: Arc<dyn WarningLedger>, credits: Option<String>) -> Self {
        Self {
            ledger,
            started_at: Instant::now(),
            credits,
        }
    }
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
