//! Folder tree construction and sibling ordering.
//!
//! Everything in this module is a pure function over flat folder rows:
//! the hierarchy is rebuilt from scratch on every read instead of being
//! incrementally patched, so the same input always yields an identical
//! structure.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{Folder, MoveDirection};

/// A node in a folder tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder ID.
    pub id: Uuid,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (None for roots).
    pub parent_id: Option<Uuid>,
    /// Position among siblings.
    pub position: i32,
    /// Whether this is the workspace default folder.
    pub is_default: bool,
    /// Depth in the tree (0 for roots).
    pub depth: usize,
    /// Number of links associated with this folder.
    pub link_count: u64,
    /// Number of direct child folders.
    pub child_count: u64,
    /// Child folder nodes, sorted by `(position asc, name asc)`.
    pub children: Vec<FolderNode>,
}

/// A folder flattened out of the tree, paired with its depth.
///
/// Used by reorder and move-target UIs that render nested lists with
/// indentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatFolder {
    /// Folder ID.
    pub id: Uuid,
    /// Folder name.
    pub name: String,
    /// Parent folder ID.
    pub parent_id: Option<Uuid>,
    /// Whether this is the workspace default folder.
    pub is_default: bool,
    /// Depth in the tree (0 for roots).
    pub depth: usize,
}

/// Sort comparator for siblings: `(position asc, name asc)`.
fn sibling_order(a: &Folder, b: &Folder) -> std::cmp::Ordering {
    a.position.cmp(&b.position).then_with(|| a.name.cmp(&b.name))
}

/// Build a hierarchical view from a flat folder list.
///
/// Groups by `parent_id` and returns the root nodes, each with its
/// `children` recursively sorted by `(position asc, name asc)`. A folder
/// whose parent is not present in the input is treated as a root so it is
/// never silently dropped.
pub fn build_tree(folders: &[Folder]) -> Vec<FolderNode> {
    build_tree_with_counts(folders, &HashMap::new())
}

/// Build a hierarchical view, annotating each node with its link count.
pub fn build_tree_with_counts(
    folders: &[Folder],
    link_counts: &HashMap<Uuid, u64>,
) -> Vec<FolderNode> {
    let known: HashSet<Uuid> = folders.iter().map(|f| f.id).collect();

    let mut by_parent: HashMap<Option<Uuid>, Vec<&Folder>> = HashMap::new();
    for folder in folders {
        let key = match folder.parent_id {
            Some(parent_id) if known.contains(&parent_id) => Some(parent_id),
            _ => None,
        };
        by_parent.entry(key).or_default().push(folder);
    }
    for group in by_parent.values_mut() {
        group.sort_by(|a, b| sibling_order(a, b));
    }

    let roots = by_parent.get(&None).cloned().unwrap_or_default();
    roots
        .iter()
        .map(|root| build_node(root, 0, &by_parent, link_counts))
        .collect()
}

fn build_node(
    folder: &Folder,
    depth: usize,
    by_parent: &HashMap<Option<Uuid>, Vec<&Folder>>,
    link_counts: &HashMap<Uuid, u64>,
) -> FolderNode {
    let children: Vec<FolderNode> = by_parent
        .get(&Some(folder.id))
        .map(|group| {
            group
                .iter()
                .map(|child| build_node(child, depth + 1, by_parent, link_counts))
                .collect()
        })
        .unwrap_or_default();

    FolderNode {
        id: folder.id,
        name: folder.name.clone(),
        parent_id: folder.parent_id,
        position: folder.position,
        is_default: folder.is_default,
        depth,
        link_count: *link_counts.get(&folder.id).unwrap_or(&0),
        child_count: children.len() as u64,
        children,
    }
}

/// Compute the depth of a folder from the root (root = 0).
///
/// Walks `parent_id` pointers. Cycles are structurally prevented upstream,
/// but if one is encountered the walk short-circuits and returns 0 rather
/// than looping.
pub fn compute_level(folder_id: Uuid, folders: &[Folder]) -> usize {
    let parents: HashMap<Uuid, Option<Uuid>> =
        folders.iter().map(|f| (f.id, f.parent_id)).collect();

    let mut level = 0;
    let mut current = folder_id;
    let mut seen = HashSet::new();

    while let Some(Some(parent_id)) = parents.get(&current) {
        if !seen.insert(current) || level >= folders.len() {
            return 0;
        }
        level += 1;
        current = *parent_id;
    }

    level
}

/// Flatten a tree into pre-order depth-first `(folder, depth)` entries.
///
/// Preserves the hierarchical ordering produced by [`build_tree`].
pub fn flatten(nodes: &[FolderNode]) -> Vec<FlatFolder> {
    let mut out = Vec::new();
    flatten_into(nodes, &mut out);
    out
}

fn flatten_into(nodes: &[FolderNode], out: &mut Vec<FlatFolder>) {
    for node in nodes {
        out.push(FlatFolder {
            id: node.id,
            name: node.name.clone(),
            parent_id: node.parent_id,
            is_default: node.is_default,
            depth: node.depth,
        });
        flatten_into(&node.children, out);
    }
}

/// Plan a single-step sibling reorder.
///
/// Sorts the sibling set by `(position, name)`, swaps the target with its
/// adjacent sibling, then renumbers ALL siblings to sequential integers
/// starting at 1 so repeated partial swaps cannot drift positions.
///
/// Returns `None` if `folder_id` is not in the sibling set. Returns
/// `Some(changes)` with one `(id, new_position)` pair per sibling whose
/// position actually changed; an empty plan means the move was a boundary
/// no-op.
pub fn plan_reorder(
    siblings: &[Folder],
    folder_id: Uuid,
    direction: MoveDirection,
) -> Option<Vec<(Uuid, i32)>> {
    let mut ordered: Vec<&Folder> = siblings.iter().collect();
    ordered.sort_by(|a, b| sibling_order(a, b));

    let index = ordered.iter().position(|f| f.id == folder_id)?;

    let swap_with = match direction {
        MoveDirection::Up if index > 0 => index - 1,
        MoveDirection::Down if index + 1 < ordered.len() => index + 1,
        _ => return Some(Vec::new()),
    };
    ordered.swap(index, swap_with);

    let changes = ordered
        .iter()
        .enumerate()
        .filter_map(|(i, f)| {
            let new_position = (i + 1) as i32;
            (f.position != new_position).then_some((f.id, new_position))
        })
        .collect();

    Some(changes)
}
