use poise::serenity_prelude as serenity;

/// Prefix carried by every failure reply and by no success reply.
pub const FAILURE_PREFIX: &str = "❌";

pub const MISSING_ARGUMENT_REPLY: &str = "❌ Missing required argument.";
pub const MISSING_PERMISSION_REPLY: &str = "❌ You don't have the required permissions.";
pub const MODERATORS_ONLY_REPLY: &str = "❌ This command is only available to moderators.";
pub const UNKNOWN_COMMAND_REPLY: &str = "❌ Unknown command.";
pub const GUILD_ONLY_REPLY: &str = "❌ This command only works in servers.";

/// Expected handler failures. Anything else reaching the error hook is
/// treated as unexpected.
#[derive(Debug, thiserror::Error)]
pub enum CommandFailure {
    /// The invoker's input was rejected before any platform call.
    #[error("{0}")]
    Rejected(String),
    /// The platform refused the requested action.
    #[error("{message}")]
    Action {
        message: String,
        #[source]
        source: serenity::Error,
    },
}

impl CommandFailure {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    pub fn guild_only() -> Self {
        Self::rejected("This command only works in servers.")
    }
}

/// Attach a human-readable message to a failed platform call.
pub trait ActionResultExt<T> {
    fn or_action_failure(self, message: impl Into<String>) -> Result<T, CommandFailure>;
}

impl<T> ActionResultExt<T> for Result<T, serenity::Error> {
    fn or_action_failure(self, message: impl Into<String>) -> Result<T, CommandFailure> {
        self.map_err(|source| CommandFailure::Action {
            message: message.into(),
            source,
        })
    }
}

/// Invoker-facing text for a handler error.
pub fn error_reply(error: &anyhow::Error) -> String {
    match error.downcast_ref::<CommandFailure>() {
        Some(failure) => format!("{FAILURE_PREFIX} {failure}"),
        None => format!("{FAILURE_PREFIX} Something went wrong: `{error}`"),
    }
}

pub fn argument_reply(input: Option<&str>) -> String {
    match input {
        Some(input) if !input.trim().is_empty() => {
            format!("{MISSING_ARGUMENT_REPLY} Could not use `{}`.", input.trim())
        }
        _ => MISSING_ARGUMENT_REPLY.to_owned(),
    }
}

pub fn missing_bot_permissions_reply(missing: serenity::Permissions) -> String {
    format!("{FAILURE_PREFIX} I'm missing permissions for that: {missing}")
}
