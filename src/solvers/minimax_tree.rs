//! Synthetic minimax tree generation for visualization.
//!
//! Builds a complete k-ary tree whose levels alternate between
//! maximizing and minimizing roles, with random illustrative values on
//! the leaves. The output models tree *shape and alternation* for a
//! plotting frontend; leaf values are uniform samples, not computed
//! minimax outcomes.

use crate::error::SolverError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Inclusive bounds for random leaf values.
const LEAF_MIN: i32 = -10;
/// Inclusive bounds for random leaf values.
const LEAF_MAX: i32 = 10;

/// Role of a node, alternating by level parity (level 0 maximizes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    /// The player to move seeks the highest attainable score.
    Max,
    /// The player to move seeks the lowest attainable score.
    Min,
}

impl NodeRole {
    /// Role of a node at the given level.
    pub fn for_level(level: usize) -> Self {
        if level % 2 == 0 {
            NodeRole::Max
        } else {
            NodeRole::Min
        }
    }
}

/// A node in the generated tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Identifier encoding `"level_index"`.
    pub id: String,
    /// Depth level, root at 0.
    pub level: usize,
    /// Random sample carried by leaf nodes; `None` on internal nodes.
    pub value: Option<i32>,
    /// Max/min role for this node's level.
    pub role: NodeRole,
}

/// A parent-to-child edge between node identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEdge {
    /// Parent node id.
    pub from: String,
    /// Child node id.
    pub to: String,
}

/// Complete generated tree, ready for serialization to a plotting
/// frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreePlot {
    /// Nodes in level-major order.
    pub nodes: Vec<TreeNode>,
    /// Edges in parent order.
    pub edges: Vec<TreeEdge>,
    /// Requested depth, echoed for the caller.
    pub depth: usize,
    /// Requested branching factor, echoed for the caller.
    pub branching_factor: usize,
}

/// Generates a complete tree of the given depth and branching factor.
///
/// Level L holds `branching_factor^L` nodes with ids `"L_i"`; the
/// parent of node `i` at level L+1 is node `i / branching_factor` at
/// level L. Leaves (level = depth) carry a value drawn uniformly from
/// [-10, 10] using the supplied generator, so callers control
/// reproducibility.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] if `depth` or
/// `branching_factor` is zero.
#[instrument(skip(rng))]
pub fn generate_tree(
    depth: usize,
    branching_factor: usize,
    rng: &mut impl Rng,
) -> Result<TreePlot, SolverError> {
    if depth == 0 {
        return Err(SolverError::invalid_input("depth must be at least 1"));
    }
    if branching_factor == 0 {
        return Err(SolverError::invalid_input(
            "branching factor must be at least 1",
        ));
    }

    let mut nodes = Vec::new();
    for level in 0..=depth {
        let role = NodeRole::for_level(level);
        for index in 0..branching_factor.pow(level as u32) {
            let value = (level == depth).then(|| rng.random_range(LEAF_MIN..=LEAF_MAX));
            nodes.push(TreeNode {
                id: format!("{level}_{index}"),
                level,
                value,
                role,
            });
        }
    }

    let mut edges = Vec::new();
    for level in 0..depth {
        for parent in 0..branching_factor.pow(level as u32) {
            for child in 0..branching_factor {
                edges.push(TreeEdge {
                    from: format!("{level}_{parent}"),
                    to: format!("{}_{}", level + 1, parent * branching_factor + child),
                });
            }
        }
    }

    Ok(TreePlot {
        nodes,
        edges,
        depth,
        branching_factor,
    })
}

/// Generates a tree from a fixed seed; identical seeds yield identical
/// plots.
///
/// # Errors
///
/// Same validation as [`generate_tree`].
#[instrument]
pub fn generate_tree_seeded(
    depth: usize,
    branching_factor: usize,
    seed: u64,
) -> Result<TreePlot, SolverError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_tree(depth, branching_factor, &mut rng)
}
