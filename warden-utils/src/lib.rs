/// Bounded arithmetic evaluator.
pub mod arith;
/// Generic embed builders shared across commands.
pub mod embed;
/// Shared formatting helpers (durations, mentions, limits).
pub mod formatting;
/// Prefix for the few commands that also accept message invocations.
pub const COMMAND_PREFIX: char = '/';
/// Pure parser helpers.
pub mod parse;
/// Permission helper utilities.
pub mod permissions;
/// Channel history purging.
pub mod purge;
/// Text transforms for the fun commands.
pub mod text;
/// Shared time helpers.
pub mod time;
