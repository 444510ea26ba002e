use crate::{
    error, info,
    jellyfin::{self, JellyfinClient, ServerConfig},
    success,
};

/// Runs the audio-language check for a single item and reports the result.
///
/// Unlike the collect loop, a playback-info failure here is surfaced instead
/// of being treated as "does not match", so this command can be used to tell
/// the two cases apart.
pub async fn check(config: ServerConfig, item_id: String, language: String) {
    let client = JellyfinClient::new(config);

    match jellyfin::items::has_audio_language(&client, &item_id, &language).await {
        Ok(true) => success!("Item {} has a {} audio track.", item_id, language),
        Ok(false) => info!("Item {} has no {} audio track.", item_id, language),
        Err(e) => match e.raw_body() {
            Some(raw) => error!(
                "Could not decode playback info for {}. Err: {}\nServer said: {}",
                item_id, e, raw
            ),
            None => error!("Could not fetch playback info for {}. Err: {}", item_id, e),
        },
    }
}
