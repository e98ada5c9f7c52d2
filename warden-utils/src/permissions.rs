use poise::serenity_prelude as serenity;

/// Holding any one of these makes a member a moderator.
pub const MODERATOR_PERMISSIONS: serenity::Permissions = serenity::Permissions::ADMINISTRATOR
    .union(serenity::Permissions::KICK_MEMBERS)
    .union(serenity::Permissions::BAN_MEMBERS)
    .union(serenity::Permissions::MANAGE_MESSAGES)
    .union(serenity::Permissions::MODERATE_MEMBERS);

/// Whether a permission set qualifies for privileged commands.
pub fn may_moderate(perms: serenity::Permissions) -> bool {
    perms.intersects(MODERATOR_PERMISSIONS)
}

/// Resolve a member's effective guild permissions from their roles.
///
/// The guild owner implicitly holds every permission.
pub async fn resolve_user_permissions(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
) -> anyhow::Result<serenity::Permissions> {
    let guild = guild_id.to_partial_guild(http).await?;
    if guild.owner_id == user_id {
        return Ok(serenity::Permissions::all());
    }

    let member = guild_id.member(http, user_id).await?;
    let roles = guild_id.roles(http).await?;

    Ok(combine_role_permissions(
        guild_id,
        &member.roles,
        roles.values().map(|role| (role.id, role.permissions)),
    ))
}

/// Union of the `@everyone` role and every role the member holds.
fn combine_role_permissions<I>(
    guild_id: serenity::GuildId,
    member_roles: &[serenity::RoleId],
    guild_roles: I,
) -> serenity::Permissions
where
    I: IntoIterator<Item = (serenity::RoleId, serenity::Permissions)>,
{
    let everyone_role_id = serenity::RoleId::new(guild_id.get());

    guild_roles
        .into_iter()
        .filter(|(role_id, _)| *role_id == everyone_role_id || member_roles.contains(role_id))
        .fold(serenity::Permissions::empty(), |resolved, (_, perms)| resolved | perms)
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude as serenity;

    use super::{combine_role_permissions, may_moderate};

    const QUALIFYING: [serenity::Permissions; 5] = [
        serenity::Permissions::ADMINISTRATOR,
        serenity::Permissions::KICK_MEMBERS,
        serenity::Permissions::BAN_MEMBERS,
        serenity::Permissions::MANAGE_MESSAGES,
        serenity::Permissions::MODERATE_MEMBERS,
    ];

    #[test]
    fn empty_set_is_not_a_moderator() {
        assert!(!may_moderate(serenity::Permissions::empty()));
    }

    #[test]
    fn unrelated_permissions_are_not_enough() {
        let perms = serenity::Permissions::SEND_MESSAGES
            | serenity::Permissions::VIEW_CHANNEL
            | serenity::Permissions::MANAGE_NICKNAMES;
        assert!(!may_moderate(perms));
    }

    #[test]
    fn any_single_qualifying_permission_is_enough() {
        for perm in QUALIFYING {
            assert!(may_moderate(perm), "{perm:?}");
        }
    }

    #[test]
    fn adding_permissions_never_revokes() {
        for perm in QUALIFYING {
            let mut perms = perm;
            for extra in serenity::Permissions::all().iter() {
                perms |= extra;
                assert!(may_moderate(perms));
            }
        }
    }

    #[test]
    fn combines_everyone_and_member_roles_only() {
        let guild_id = serenity::GuildId::new(10);
        let everyone = serenity::RoleId::new(10);
        let helper = serenity::RoleId::new(11);
        let admin = serenity::RoleId::new(12);

        let perms = combine_role_permissions(
            guild_id,
            &[helper],
            [
                (everyone, serenity::Permissions::SEND_MESSAGES),
                (helper, serenity::Permissions::MANAGE_MESSAGES),
                (admin, serenity::Permissions::ADMINISTRATOR),
            ],
        );

        assert_eq!(
            perms,
            serenity::Permissions::SEND_MESSAGES | serenity::Permissions::MANAGE_MESSAGES
        );
    }
}
