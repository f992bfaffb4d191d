//! The step-by-step algebra engine behind solve4x.
//!
//! Input text is parsed into the value model in [`algebra`]. The [`solver`] then searches for a
//! sequence of rewrites, each performed by one of the [`algorithm`]s, that brings the input to a
//! finished form for the requested mode. Numeric leaves are combined by [`arithmetic`] under a
//! configurable [`RoundingPolicy`](arithmetic::RoundingPolicy).
//!
//! Every step records a human-readable [`Explanation`](algorithm::Explanation) of what was done.

pub mod algebra;
pub mod algorithm;
pub mod arithmetic;
pub mod error;
pub mod solver;
