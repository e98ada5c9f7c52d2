pub mod fun;
pub mod general;
pub mod moderation;

use poise::serenity_prelude as serenity;

use warden_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    general::help::META,
    general::ping::META,
    general::say::META,
    general::avatar::META,
    general::userinfo::META,
    general::serverinfo::SERVERINFO_META,
    general::serverinfo::MEMBERCOUNT_META,
    general::botinfo::BOTINFO_META,
    general::botinfo::INVITE_META,
    general::botinfo::UPTIME_META,
    moderation::kick::META,
    moderation::ban::META,
    moderation::unban::META,
    moderation::purge::META,
    moderation::mute::META,
    moderation::unmute::META,
    moderation::lock::LOCK_META,
    moderation::lock::UNLOCK_META,
    moderation::slowmode::META,
    moderation::nick::META,
    moderation::clear_reactions::META,
    moderation::warn::META,
    moderation::warnings::META,
    fun::server::EMOJILIST_META,
    fun::server::ROLEINFO_META,
    fun::server::CHANNELINFO_META,
    fun::chance::EIGHTBALL_META,
    fun::chance::COLOR_META,
    fun::chance::ROLL_META,
    fun::chance::FLIP_META,
    fun::chance::CHOOSE_META,
    fun::poll::META,
    fun::countdown::META,
    fun::math::META,
    fun::text::REVERSE_META,
    fun::text::MOCK_META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        general::help::help(),
        general::ping::ping(),
        general::say::say(),
        general::avatar::avatar(),
        general::userinfo::userinfo(),
        general::serverinfo::serverinfo(),
        general::serverinfo::membercount(),
        general::botinfo::botinfo(),
        general::botinfo::invite(),
        general::botinfo::uptime(),
        moderation::kick::kick(),
        moderation::ban::ban(),
        moderation::unban::unban(),
        moderation::purge::purge(),
        moderation::mute::mute(),
        moderation::unmute::unmute(),
        moderation::lock::lock(),
        moderation::lock::unlock(),
        moderation::slowmode::slowmode(),
        moderation::nick::nick(),
        moderation::clear_reactions::clear_reactions(),
        moderation::warn::warn(),
        moderation::warnings::warnings(),
        fun::server::emojilist(),
        fun::server::roleinfo(),
        fun::server::channelinfo(),
        fun::chance::eightball(),
        fun::chance::color(),
        fun::chance::roll(),
        fun::chance::flip(),
        fun::chance::choose(),
        fun::poll::poll(),
        fun::countdown::countdown(),
        fun::math::math(),
        fun::text::reverse(),
        fun::text::mock(),
    ]
}

/// Plain reply that cannot ping anyone, for echoing user-supplied text.
pub fn quiet_reply(content: impl Into<String>) -> poise::CreateReply {
    poise::CreateReply::default()
        .content(content)
        .allowed_mentions(serenity::CreateAllowedMentions::new())
}
