use reqwest::Method;

use crate::{
    jellyfin::{ClientError, JellyfinClient},
    types::Item,
};

/// Creates a named collection, or fetches it if one already exists.
///
/// Jellyfin's `Collections` endpoint returns the existing collection when a
/// collection with the given name is already present, so this doubles as a
/// lookup. The name goes into the query string verbatim; callers passing
/// names with reserved characters are responsible for encoding them.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Item)` - The collection, with its id for subsequent insert calls
/// - `Err(ClientError)` - Transport or decode failure
pub async fn create(client: &JellyfinClient, name: &str) -> Result<Item, ClientError> {
    let path = format!("Collections?name={}", name);
    client.execute_as::<(), Item>(Method::POST, &path, None).await
}

/// Adds one item to a collection.
///
/// The server returns no meaningful body for this call, so only the raw
/// response is read and discarded.
pub async fn add_item(
    client: &JellyfinClient,
    collection_id: &str,
    item_id: &str,
) -> Result<(), ClientError> {
    let path = format!("Collections/{}/Items?ids={}", collection_id, item_id);
    client.execute::<()>(Method::POST, &path, None).await?;
    Ok(())
}
