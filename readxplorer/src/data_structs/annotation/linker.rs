use hashbrown::HashMap;
use multimap::MultiMap;

use crate::data_structs::feature::{
    sort_features,
    Feature,
};

/// Builds the hierarchy from `Parent` identifiers instead of coordinates.
///
/// The first feature carrying a given identifier owns it. A feature is
/// attached to the first of its parent identifiers that resolves to another
/// feature; all other features are top-level. Features trapped in a parent
/// cycle are promoted to the top level, so nothing is dropped.
pub fn link_by_parent_ids(features: Vec<Feature>) -> Vec<Feature> {
    let n_features = features.len();

    let (children_map, has_parent) = {
        let mut id_map: HashMap<&str, usize> = HashMap::new();
        for (idx, feature) in features.iter().enumerate() {
            if let Some(id) = feature.identifier() {
                id_map.entry(id).or_insert(idx);
            }
        }

        let mut children_map: MultiMap<usize, usize> = MultiMap::new();
        let mut has_parent = vec![false; n_features];
        for (idx, feature) in features.iter().enumerate() {
            let parent_idx = feature
                .parent_ids()
                .iter()
                .filter_map(|parent| id_map.get(parent.as_str()).copied())
                .find(|parent_idx| *parent_idx != idx);
            if let Some(parent_idx) = parent_idx {
                children_map.insert(parent_idx, idx);
                has_parent[idx] = true;
            }
        }
        (children_map, has_parent)
    };

    let mut slots: Vec<Option<Feature>> =
        features.into_iter().map(Some).collect();
    let mut visited = vec![false; n_features];
    let mut top_level = Vec::new();
    for idx in (0..n_features).filter(|idx| !has_parent[*idx]) {
        if let Some(feature) =
            assemble(idx, &mut slots, &children_map, &mut visited)
        {
            top_level.push(feature);
        }
    }
    // Whatever is left was only reachable through a cycle.
    for idx in 0..n_features {
        if let Some(feature) =
            assemble(idx, &mut slots, &children_map, &mut visited)
        {
            top_level.push(feature);
        }
    }

    sort_features(&mut top_level);
    top_level
}

fn assemble(
    idx: usize,
    slots: &mut [Option<Feature>],
    children_map: &MultiMap<usize, usize>,
    visited: &mut [bool],
) -> Option<Feature> {
    if visited[idx] {
        return None;
    }
    visited[idx] = true;
    let mut feature = slots[idx].take()?;

    let mut children = children_map
        .get_vec(&idx)
        .into_iter()
        .flatten()
        .filter_map(|child| assemble(*child, slots, children_map, visited))
        .collect::<Vec<_>>();
    sort_features(&mut children);
    for child in children {
        feature.push_sub_feature(child);
    }
    Some(feature)
}
