//! Solution cost and feasibility checking.

mod evaluator;

pub use evaluator::SolutionEvaluator;
