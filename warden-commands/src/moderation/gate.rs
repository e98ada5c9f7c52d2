use tracing::debug;

use warden_core::{Context, Error};
use warden_utils::permissions::{may_moderate, resolve_user_permissions};

/// Framework check for privileged commands.
///
/// Always false outside a guild. Uses the permissions Discord attaches to
/// the interaction when present and resolves roles over HTTP otherwise.
pub async fn moderator_check(ctx: Context<'_>) -> Result<bool, Error> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(false);
    };

    let supplied = ctx
        .author_member()
        .await
        .and_then(|member| member.permissions);

    let perms = match supplied {
        Some(perms) => perms,
        None => resolve_user_permissions(ctx.http(), guild_id, ctx.author().id).await?,
    };

    let allowed = may_moderate(perms);
    if !allowed {
        debug!(
            guild_id = guild_id.get(),
            user_id = ctx.author().id.get(),
            command = %ctx.command().qualified_name,
            "moderator check denied"
        );
    }

    Ok(allowed)
}
