//! Self-contained solver engines.

pub mod cryptarithmetic;
pub mod minimax_tree;
