// storefront/src/workflow/execution.rs

//! `Workflow::run()`: executes the declared steps in order against one context.

use super::context_data::ContextData;
use super::definition::Workflow;
use crate::error::WorkflowError;
use tracing::{event, instrument, span, Instrument, Level};

impl<TData, Err> Workflow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<WorkflowError> + Send + Sync + 'static,
{
  /// Runs every step in order. The first failing handler stops the run and its
  /// error is returned as-is; later steps are never entered.
  #[instrument(
    name = "Workflow::run",
    skip_all,
    fields(workflow = %self.name, num_steps = self.steps.len()),
    err(Display)
  )]
  pub async fn run(&self, ctx_data: ContextData<TData>) -> Result<(), Err> {
    event!(Level::DEBUG, "Workflow execution starting.");

    for (step_idx, step) in self.steps.iter().enumerate() {
      let step_span = span!(
        Level::INFO,
        "workflow_step",
        step_name = step.name.as_str(),
        step_index = step_idx
      );

      if step.handlers.is_empty() {
        step_span.in_scope(|| event!(Level::ERROR, "Step has no handlers."));
        return Err(Err::from(WorkflowError::HandlerMissing {
          workflow: self.name.clone(),
          step_name: step.name.clone(),
        }));
      }

      for handler_fn in &step.handlers {
        if let Err(e) = handler_fn(ctx_data.clone()).instrument(step_span.clone()).await {
          step_span.in_scope(|| event!(Level::WARN, error = %e, "Step failed, aborting workflow."));
          return Err(e);
        }
      }
      step_span.in_scope(|| event!(Level::DEBUG, "Step finished."));
    }

    event!(Level::DEBUG, "Workflow execution completed.");
    Ok(())
  }
}
