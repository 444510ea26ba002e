use reqwest::Method;

use crate::{
    jellyfin::{ClientError, JellyfinClient},
    types::{Item, ItemsPage, PlaybackInfo},
};

/// Lists the child items of a library folder.
///
/// Uses the `Items` endpoint with a `ParentId` query parameter. The returned
/// order is whatever the server produced; no paging is performed.
///
/// # Arguments
///
/// * `client` - Client for the target server
/// * `parent_id` - Id of the library folder whose children are listed
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Item>)` - The folder's child items
/// - `Err(ClientError)` - Transport or decode failure
pub async fn children(
    client: &JellyfinClient,
    parent_id: &str,
) -> Result<Vec<Item>, ClientError> {
    let path = format!("Items?ParentId={}", parent_id);
    let page: ItemsPage = client.execute_as::<(), ItemsPage>(Method::GET, &path, None).await?;
    Ok(page.items)
}

/// Fetches the playback metadata for one item.
///
/// The response describes every playable media source of the item together
/// with its media streams (audio, video, subtitle) and their language tags.
pub async fn playback_info(
    client: &JellyfinClient,
    item_id: &str,
) -> Result<PlaybackInfo, ClientError> {
    let path = format!("Items/{}/PlaybackInfo", item_id);
    client.execute_as::<(), PlaybackInfo>(Method::GET, &path, None).await
}

/// Checks whether an item has an audio track in the given language.
///
/// Fetches the item's playback info and evaluates
/// [`PlaybackInfo::has_audio_language`]. An item without media sources does
/// not match; a fetch or decode failure is returned to the caller, which
/// decides whether "could not determine" counts as "does not match".
pub async fn has_audio_language(
    client: &JellyfinClient,
    item_id: &str,
    language: &str,
) -> Result<bool, ClientError> {
    let info = playback_info(client, item_id).await?;
    Ok(info.has_audio_language(language))
}
