//! Grouping of raw deposited units into `(game, seller, price)` listings.

use std::collections::HashMap;

use crate::models::{ListingGroup, ListingKey, RawListing};

/// Group the records admitted by `filter` into one [`ListingGroup`] per
/// `(game_id, seller_id, price)`.
///
/// Prices compare by decimal value, so `"10.0"` and `"10"` share a group.
/// The output is sorted by `game_id`; groups with the same game keep the
/// order in which their first unit appeared in `records`.
pub fn group_listings<'a, I, F>(records: I, filter: F) -> Vec<ListingGroup>
where
    I: IntoIterator<Item = &'a RawListing>,
    F: Fn(&RawListing) -> bool,
{
    let mut index: HashMap<ListingKey, usize> = HashMap::new();
    let mut groups: Vec<ListingGroup> = Vec::new();

    for record in records.into_iter().filter(|r| filter(*r)) {
        let key = record.key();
        match index.get(&key) {
            Some(&i) => groups[i].count += 1,
            None => {
                index.insert(key, groups.len());
                groups.push(ListingGroup {
                    game_id: record.game_id,
                    seller_id: record.seller_id.clone(),
                    price: record.price_value(),
                    count: 1,
                    game_details: None,
                });
            }
        }
    }

    groups.sort_by_key(|g| g.game_id);
    tracing::debug!(groups = groups.len(), "grouped catalogue listings");
    groups
}
