//! Grouping and ordering shared by every section.

use std::cmp::Ordering;

/// A group key and the items bucketed under it, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouped<T> {
    pub key: String,
    pub items: Vec<T>,
}

/// Bucket items by key in first-seen order. Keys that are blank after
/// trimming fall into the section's `fallback` bucket.
pub fn group_by<T>(
    items: Vec<T>,
    key_fn: impl Fn(&T) -> &str,
    fallback: &str,
) -> Vec<Grouped<T>> {
    let mut groups: Vec<Grouped<T>> = Vec::new();
    for item in items {
        let key = {
            let k = key_fn(&item).trim();
            if k.is_empty() { fallback } else { k }.to_string()
        };
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.items.push(item),
            None => groups.push(Grouped {
                key,
                items: vec![item],
            }),
        }
    }
    groups
}

/// Order group keys: keys named in `priority` come first, in priority
/// order; the rest follow, ordered by the supplied locale comparator.
#[must_use]
pub fn order_group_keys(
    keys: &[String],
    priority: &[&str],
    collate: impl Fn(&str, &str) -> Ordering,
) -> Vec<String> {
    let mut known: Vec<String> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();
    for key in keys {
        if priority.contains(&key.as_str()) {
            known.push(key.clone());
        } else {
            unknown.push(key.clone());
        }
    }
    known.sort_by_key(|key| {
        priority
            .iter()
            .position(|p| *p == key.as_str())
            .unwrap_or(priority.len())
    });
    unknown.sort_by(|a, b| collate(a, b));
    known.extend(unknown);
    known
}

/// Reorder groups to match [`order_group_keys`] over their keys.
pub fn sort_groups<T>(
    groups: &mut [Grouped<T>],
    priority: &[&str],
    collate: impl Fn(&str, &str) -> Ordering,
) {
    let keys: Vec<String> = groups.iter().map(|g| g.key.clone()).collect();
    let ordered = order_group_keys(&keys, priority, collate);
    groups.sort_by_key(|group| {
        ordered
            .iter()
            .position(|key| *key == group.key)
            .unwrap_or(ordered.len())
    });
}

/// Stable ascending sort on the numeric order key; ties keep input order.
pub fn sort_by_order<T>(items: &mut [T], order: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| order(a).total_cmp(&order(b)));
}
