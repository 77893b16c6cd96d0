//! The six planning flows.
//!
//! Each module defines one flow: an instruction template and the declarative
//! output schema, returned as a [`crate::invoker::FlowDefinition`]. Flows are
//! parameterizations of the same invoker, not distinct algorithms.

pub mod ai_dev_plan;
pub mod dev_plan;
pub mod features;
pub mod lean_canvas;
pub mod monetization;
pub mod personas;
pub mod problem_solution_fit;

/// Allowed values for complexity-style enum fields.
pub(crate) const LEVELS: &[&str] = &["Low", "Medium", "High"];
