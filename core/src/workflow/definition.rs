// storefront/src/workflow/definition.rs

//! The `Workflow<TData, Err>` struct and the registration of step handlers.

use super::context_data::ContextData;
use crate::error::WorkflowError;
use std::future::Future;
use std::pin::Pin;

/// A step handler: takes a handle on the shared context and resolves to
/// `Ok(())` to let the next step run, or `Err` to abort the workflow.
pub type StepHandler<TData, Err> =
  Box<dyn Fn(ContextData<TData>) -> Pin<Box<dyn Future<Output = Result<(), Err>> + Send>> + Send + Sync>;

pub(crate) struct StepDef<TData: Send + Sync + 'static, Err> {
  pub(crate) name: String,
  pub(crate) handlers: Vec<StepHandler<TData, Err>>,
}

pub struct Workflow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<WorkflowError> + Send + Sync + 'static,
{
  pub(crate) name: String,
  pub(crate) steps: Vec<StepDef<TData, Err>>,
}

impl<TData, Err> Workflow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<WorkflowError> + Send + Sync + 'static,
{
  /// Declares a workflow and the order of its steps. Handlers are attached with `on`.
  ///
  /// Panics on duplicate step names; that is a setup bug, not a runtime condition.
  pub fn new(name: impl Into<String>, step_names: &[&str]) -> Self {
    let name = name.into();
    let mut steps: Vec<StepDef<TData, Err>> = Vec::with_capacity(step_names.len());
    for step_name in step_names {
      if steps.iter().any(|s| s.name == *step_name) {
        panic!("Workflow '{}' declares step '{}' twice.", name, step_name);
      }
      steps.push(StepDef {
        name: (*step_name).to_string(),
        handlers: Vec::new(),
      });
    }
    Self { name, steps }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  /// Attaches a handler to `step_name`. Several handlers on one step run in
  /// registration order.
  ///
  /// Panics if the step was not declared in `new`.
  pub fn on<F>(&mut self, step_name: &str, handler_fn: impl Fn(ContextData<TData>) -> F + Send + Sync + 'static)
  where
    F: Future<Output = Result<(), Err>> + Send + 'static,
  {
    let workflow_name = self.name.clone();
    let step = self
      .steps
      .iter_mut()
      .find(|s| s.name == step_name)
      .unwrap_or_else(|| panic!("Workflow '{}' has no step named '{}'.", workflow_name, step_name));
    let handler: StepHandler<TData, Err> = Box::new(move |ctx_data| Box::pin(handler_fn(ctx_data)));
    step.handlers.push(handler);
  }
}
