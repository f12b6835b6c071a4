/// Binary operator evaluation logic.
///
/// Arithmetic with integer/real promotion, real and floor division, and the
/// six comparisons.
pub mod binary;

/// Unary sign evaluation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context that owns the variable store, the node
/// dispatch, variable access and statement sequencing.
pub mod core;

/// Evaluation of `IF`, `WHILE` and `FOR`.
///
/// Conditions must be boolean; loops honour the configured iteration guard.
pub mod control;
