// storefront/src/workflow/mod.rs

//! A small runner for store operations that are made of several dependent steps.
//!
//! A `Workflow<TData, Err>` is an ordered list of named steps. Handlers are bound
//! to step names and all operate on the same shared `ContextData<TData>`. Steps run
//! strictly in declaration order and the first handler error aborts the run.

pub mod context_data;
pub mod definition;
pub mod execution;

pub use context_data::ContextData;
pub use definition::{StepHandler, Workflow};
