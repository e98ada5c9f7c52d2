pub mod audit;
pub mod ban;
pub mod clear_reactions;
pub(crate) mod embeds;
pub mod gate;
pub mod kick;
pub mod lock;
pub mod mute;
pub mod nick;
pub mod purge;
pub mod slowmode;
pub mod unban;
pub mod unmute;
pub mod warn;
pub mod warnings;

pub use gate::moderator_check;
