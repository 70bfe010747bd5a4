use std::collections::hash_map::Entry;
use std::collections::HashMap;

use platefinder_common::VerifiedRestaurant;

/// Collapse verified records that resolved to the same authoritative URI,
/// keeping the variant backed by the strictly larger review count (ties keep
/// the first-seen variant).
///
/// The output is the input filtered to the retained entries — survivors keep
/// their original relative order. The model's ranking is the authoritative
/// order; deduplication must not disturb it by re-sorting.
pub fn dedupe(restaurants: Vec<VerifiedRestaurant>) -> Vec<VerifiedRestaurant> {
    let mut best: HashMap<String, usize> = HashMap::new();

    for (i, restaurant) in restaurants.iter().enumerate() {
        match best.entry(restaurant.maps_uri.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(i);
            }
            Entry::Occupied(mut slot) => {
                if restaurant.review_count > restaurants[*slot.get()].review_count {
                    slot.insert(i);
                }
            }
        }
    }

    restaurants
        .into_iter()
        .enumerate()
        .filter(|(i, restaurant)| best.get(&restaurant.maps_uri) == Some(i))
        .map(|(_, restaurant)| restaurant)
        .collect()
}
