use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, info,
    jellyfin::{self, JellyfinClient, ServerConfig},
    success,
};

pub async fn collect(
    config: ServerConfig,
    collection_name: String,
    language: String,
    library_id: String,
) {
    let client = JellyfinClient::new(config);

    let collection = match jellyfin::collections::create(&client, &collection_name).await {
        Ok(collection) => collection,
        Err(e) => error!("Failed to create collection {}. Err: {}", collection_name, e),
    };

    let items = match jellyfin::items::children(&client, &library_id).await {
        Ok(items) => items,
        Err(e) => error!("Failed to list library items. Err: {}", e),
    };

    info!(
        "Scanning {} items for {} audio tracks...",
        items.len(),
        language
    );

    let pb = ProgressBar::new(items.len() as u64);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut added = 0;
    for item in items {
        pb.set_message(item.name.clone());

        // An item whose playback info cannot be fetched or decoded is
        // treated as not matching and skipped. Only the insert below is
        // fatal, like the setup calls above.
        let matches = jellyfin::items::has_audio_language(&client, &item.id, &language)
            .await
            .unwrap_or(false);

        if matches {
            pb.suspend(|| info!("{}", item.name));
            if let Err(e) =
                jellyfin::collections::add_item(&client, &collection.id, &item.id).await
            {
                pb.finish_and_clear();
                error!("Failed to add {} to the collection. Err: {}", item.name, e);
            }
            added += 1;
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    success!(
        "Added {} items with {} audio to collection {}.",
        added,
        language,
        collection_name
    );
}
