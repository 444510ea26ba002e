use tabled::Table;

use crate::{
    jellyfin::{self, JellyfinClient, ServerConfig},
    types::ItemTableRow,
    warning,
};

pub async fn list_items(config: ServerConfig, library_id: String, search: Option<String>) {
    let client = JellyfinClient::new(config);

    match jellyfin::items::children(&client, &library_id).await {
        Ok(items) => {
            // sort items by name
            let mut sorted_items = items.clone();
            sorted_items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

            if let Some(item_search) = search {
                let search_term = item_search.to_lowercase();
                sorted_items.retain(|i| i.name.to_lowercase().contains(&search_term));
            }

            // convert items to table rows
            let table_rows: Vec<ItemTableRow> = sorted_items
                .into_iter()
                .map(|i| ItemTableRow {
                    name: i.name,
                    id: i.id,
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => warning!("Failed to list items. Err: {}", e),
    }
}
