use poise::serenity_prelude as serenity;
use tokio::time::{Duration, sleep};
use tracing::{error, warn};

use crate::time::now_unix_secs;

const BULK_DELETE_MAX_AGE_SECS: u64 = 14 * 24 * 60 * 60;
const BULK_DELETE_SAFETY_BUFFER_SECS: u64 = 60 * 60;
const HISTORY_PAGE_SIZE: u8 = 100;
const HISTORY_PAGE_DELAY_MS: u64 = 1100;

/// Delete up to `amount` of the most recent messages in a channel.
///
/// Messages young enough for bulk deletion go out in batches of up to 100,
/// older ones are deleted one by one. Failing to read the first page is an
/// error; later failures end the purge early and the count so far is returned.
pub async fn purge_recent_messages(
    http: &serenity::Http,
    channel_id: serenity::ChannelId,
    amount: u64,
) -> Result<u64, serenity::Error> {
    let bulk_delete_cutoff = now_unix_secs()
        .saturating_sub(BULK_DELETE_MAX_AGE_SECS.saturating_sub(BULK_DELETE_SAFETY_BUFFER_SECS))
        as i64;

    let mut remaining = amount;
    let mut deleted_count = 0_u64;
    let mut before: Option<serenity::MessageId> = None;

    while remaining > 0 {
        let limit = remaining.min(u64::from(HISTORY_PAGE_SIZE)) as u8;
        let get_messages = match before {
            Some(before_id) => serenity::GetMessages::new().before(before_id).limit(limit),
            None => serenity::GetMessages::new().limit(limit),
        };

        let messages = match channel_id.messages(http, get_messages).await {
            Ok(messages) => messages,
            Err(source) if before.is_none() => return Err(source),
            Err(source) => {
                warn!(?source, channel_id = channel_id.get(), "history fetch failed mid-purge");
                break;
            }
        };

        if messages.is_empty() {
            break;
        }

        before = messages.last().map(|message| message.id);
        remaining = remaining.saturating_sub(messages.len() as u64);

        let (bulk_ids, single_ids) = split_by_age(
            messages
                .iter()
                .map(|message| (message.id, message.timestamp.unix_timestamp())),
            bulk_delete_cutoff,
        );

        deleted_count += delete_in_bulk(http, channel_id, bulk_ids).await;

        for message_id in single_ids {
            if channel_id.delete_message(http, message_id).await.is_ok() {
                deleted_count = deleted_count.saturating_add(1);
            }
        }

        if remaining > 0 {
            sleep(Duration::from_millis(HISTORY_PAGE_DELAY_MS)).await;
        }
    }

    Ok(deleted_count)
}

async fn delete_in_bulk(
    http: &serenity::Http,
    channel_id: serenity::ChannelId,
    ids: Vec<serenity::MessageId>,
) -> u64 {
    match ids.as_slice() {
        [] => 0,
        [single] => u64::from(channel_id.delete_message(http, *single).await.is_ok()),
        _ => {
            let count = ids.len() as u64;
            match channel_id.delete_messages(http, ids.clone()).await {
                Ok(()) => count,
                Err(source) => {
                    error!(
                        ?source,
                        channel_id = channel_id.get(),
                        count,
                        "bulk delete failed, falling back to single delete"
                    );
                    let mut deleted = 0;
                    for message_id in ids {
                        if channel_id.delete_message(http, message_id).await.is_ok() {
                            deleted += 1;
                        }
                    }
                    deleted
                }
            }
        }
    }
}

/// Partition messages into (bulk-deletable, too-old) by creation time.
fn split_by_age<I>(messages: I, bulk_cutoff: i64) -> (Vec<serenity::MessageId>, Vec<serenity::MessageId>)
where
    I: IntoIterator<Item = (serenity::MessageId, i64)>,
{
    messages
        .into_iter()
        .fold((Vec::new(), Vec::new()), |(mut bulk, mut single), (id, created_at)| {
            if created_at >= bulk_cutoff {
                bulk.push(id);
            } else {
                single.push(id);
            }
            (bulk, single)
        })
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude as serenity;

    use super::split_by_age;

    #[test]
    fn splits_messages_around_cutoff() {
        let id = serenity::MessageId::new;
        let (bulk, single) = split_by_age(vec![(id(3), 500), (id(2), 100), (id(1), 99)], 100);

        assert_eq!(bulk, vec![id(3), id(2)]);
        assert_eq!(single, vec![id(1)]);
    }

    #[test]
    fn empty_history_splits_into_nothing() {
        let (bulk, single) = split_by_age(Vec::new(), 0);
        assert!(bulk.is_empty());
        assert!(single.is_empty());
    }
}
