//! Answer inline queries by running their pipeline

use telegram::{BotInlineQuery, SendMessage};
use tracing::{error, info};

use crate::domains::inline::models::InlineAnswer;
use crate::domains::pipes::models::PipelineOutcome;
use crate::domains::pipes::{parse_query, PipelineError, PipelineExecutor};
use crate::kernel::ServerDeps;

/// Build the answer for an inline query.
///
/// Never fails: anything that goes wrong is reported to the operator and the
/// user gets the FAQ button instead.
pub async fn answer_inline_query(query: &BotInlineQuery, deps: &ServerDeps) -> InlineAnswer {
    info!(query_id = query.query_id, user_id = query.user_id, query = %query.query, "Got query");

    if query.query.is_empty() {
        return InlineAnswer::new(query.query_id).with_switch_pm(deps.faq.clone());
    }

    match run_pipeline(query, deps).await {
        Ok(answer) => answer,
        Err(e) => {
            let e = anyhow::Error::from(e);
            error!(query_id = query.query_id, error = %e, "Pipeline failed");
            report_failure(query, &e, deps).await;
            fallback_answer(query, deps)
        }
    }
}

/// Answer an inline query and deliver it, falling back to the FAQ answer if
/// delivery fails.
pub async fn handle_inline_query(query: &BotInlineQuery, deps: &ServerDeps) {
    let answer = answer_inline_query(query, deps).await;

    let Err(e) = deps.messenger.answer_inline_query(&answer).await else {
        return;
    };

    error!(query_id = query.query_id, error = %e, "Failed to deliver inline answer");
    report_failure(query, &e, deps).await;

    if let Err(e) = deps
        .messenger
        .answer_inline_query(&fallback_answer(query, deps))
        .await
    {
        error!(query_id = query.query_id, error = %e, "Failed to deliver fallback answer");
    }
}

async fn run_pipeline(
    query: &BotInlineQuery,
    deps: &ServerDeps,
) -> Result<InlineAnswer, PipelineError> {
    let answer = InlineAnswer::new(query.query_id).private();
    let parsed = parse_query(&query.query);

    let outcome = PipelineExecutor::from_deps(deps)
        .execute(&parsed, query.user_id)
        .await?;

    let answer = match outcome {
        PipelineOutcome::Redirect(switch_pm) => answer.with_switch_pm(switch_pm),
        PipelineOutcome::Results { results, .. } if results.is_empty() => {
            answer.with_switch_pm(deps.faq.clone())
        }
        PipelineOutcome::Results { results, gallery } => answer.with_results(results, gallery),
        PipelineOutcome::AbortedSelfReference => answer.with_switch_pm(deps.faq.clone()),
    };

    Ok(answer)
}

fn fallback_answer(query: &BotInlineQuery, deps: &ServerDeps) -> InlineAnswer {
    let answer = InlineAnswer::new(query.query_id).with_switch_pm(deps.faq.clone());
    if query.query.is_empty() {
        answer
    } else {
        answer.private()
    }
}

/// Send the full error chain to the operator. Delivery problems are only logged.
async fn report_failure(query: &BotInlineQuery, err: &anyhow::Error, deps: &ServerDeps) {
    let report = format!(
        "Inline query {} from {} failed\nQuery: {}\n\n{:?}",
        query.query_id, query.user_id, query.query, err
    );

    if let Err(e) = deps
        .messenger
        .send_message(SendMessage::new(deps.admin_peer.as_str(), report))
        .await
    {
        error!(admin = %deps.admin_peer, error = %e, "Failed to report failure to operator");
    }
}
