//! Signal module: reduces book quotes to a classified liquidity signal.

pub mod evaluator;

pub use evaluator::{evaluate, Classification, Evaluation, Reason};
