//! Stage-by-stage pipeline execution.

use std::sync::Arc;
use tracing::{debug, info};

use super::error::PipelineError;
use super::models::{ParsedQuery, PipelineOutcome, StageDescriptor, StageStep};
use super::selector::select;
use super::translate::translate_all;
use crate::kernel::{BaseInlineProvider, ServerDeps};

/// Runs parsed pipelines against inline providers.
///
/// Stages run strictly in order: each one is queried with the text selected
/// from the previous one. The chain stops at the last stage or as soon as a
/// stage does not narrow down to exactly one textual result.
pub struct PipelineExecutor {
    provider: Arc<dyn BaseInlineProvider>,
    self_id: i64,
}

impl PipelineExecutor {
    pub fn new(provider: Arc<dyn BaseInlineProvider>, self_id: i64) -> Self {
        Self { provider, self_id }
    }

    pub fn from_deps(deps: &ServerDeps) -> Self {
        Self::new(deps.provider.clone(), deps.self_id)
    }

    /// Run every stage of `query` on behalf of `user_id`.
    ///
    /// Only the terminal result set is translated to input form.
    pub async fn execute(
        &self,
        query: &ParsedQuery,
        user_id: i64,
    ) -> Result<PipelineOutcome, PipelineError> {
        let mut text = query.text.clone();
        let last = query.stages.len().saturating_sub(1);

        for (index, stage) in query.stages.iter().enumerate() {
            let step = self.run_stage(stage, &text, user_id, index == last).await?;

            match step {
                StageStep::ContinueWith(next) => {
                    debug!(stage = index, handle = %stage.provider_handle, "Piping result to next stage");
                    text = next;
                }
                StageStep::Terminate { results, gallery } => {
                    info!(stage = index, count = results.len(), "Pipeline resolved");
                    return Ok(PipelineOutcome::Results {
                        results: translate_all(results)?,
                        gallery,
                    });
                }
                StageStep::Redirect(switch_pm) => {
                    info!(stage = index, handle = %stage.provider_handle, "Provider redirected to private chat");
                    return Ok(PipelineOutcome::Redirect(switch_pm));
                }
                StageStep::AbortSelfReference => {
                    info!(stage = index, "Stage addresses this bot, aborting");
                    return Ok(PipelineOutcome::AbortedSelfReference);
                }
            }
        }

        Ok(PipelineOutcome::Results {
            results: Vec::new(),
            gallery: false,
        })
    }

    async fn run_stage(
        &self,
        stage: &StageDescriptor,
        text: &str,
        user_id: i64,
        is_last: bool,
    ) -> Result<StageStep, PipelineError> {
        if stage.is_self_referential() {
            return Ok(StageStep::AbortSelfReference);
        }

        let provider_error = |source| PipelineError::Provider {
            handle: stage.provider_handle.clone(),
            source,
        };

        let bot = self
            .provider
            .resolve_bot(&stage.provider_handle)
            .await
            .map_err(provider_error)?;
        if bot.id == self.self_id {
            return Ok(StageStep::AbortSelfReference);
        }

        let response = self
            .provider
            .query(&bot, user_id, text)
            .await
            .map_err(provider_error)?;
        debug!(
            handle = %bot.handle,
            count = response.results.len(),
            gallery = response.gallery,
            redirect = response.switch_pm.is_some(),
            "Provider response"
        );

        if let Some(switch_pm) = response.switch_pm {
            return Ok(StageStep::Redirect(switch_pm));
        }

        if let Some(game) = response.results.iter().find(|c| c.is_game()) {
            return Err(PipelineError::UnsupportedMedia {
                result_id: game.id().to_string(),
            });
        }

        let selection = select(response.results, &stage.selector);

        if !is_last {
            if let Some(next) = selection.handoff_text() {
                return Ok(StageStep::ContinueWith(next.to_string()));
            }
        }

        Ok(StageStep::Terminate {
            results: selection.into_results(),
            gallery: response.gallery,
        })
    }
}
