pub mod avatar;
pub mod botinfo;
pub(crate) mod embeds;
pub mod help;
pub mod ping;
pub mod say;
pub mod serverinfo;
pub mod userinfo;
