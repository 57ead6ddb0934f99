//! Fetched result -> resubmittable result.
//!
//! Applied once, to the final result set only. Intermediate selections keep
//! their fetched form.

use super::error::PipelineError;
use super::models::{
    BotInlineMessage, CandidateResult, EntityKind, GeoPoint, InlineResult, InputBotInlineMessage,
    InputGeoPoint, MessageEntity, ResubmittableResult,
};

/// Translate every final result, failing on the first game.
pub fn translate_all(
    candidates: Vec<CandidateResult>,
) -> Result<Vec<ResubmittableResult>, PipelineError> {
    candidates.into_iter().map(translate).collect()
}

pub fn translate(candidate: CandidateResult) -> Result<ResubmittableResult, PipelineError> {
    match candidate {
        CandidateResult::Text(body) => Ok(ResubmittableResult::Text(translate_body(body))),
        CandidateResult::Photo(body) => Ok(ResubmittableResult::Photo(translate_body(body))),
        CandidateResult::Document(body) => Ok(ResubmittableResult::Document(translate_body(body))),
        CandidateResult::Game(body) => Err(PipelineError::UnsupportedMedia { result_id: body.id }),
    }
}

fn translate_body(body: InlineResult<BotInlineMessage>) -> InlineResult<InputBotInlineMessage> {
    InlineResult {
        id: body.id,
        kind: body.kind,
        send_message: translate_message(body.send_message),
        rest: body.rest,
    }
}

fn translate_message(message: BotInlineMessage) -> InputBotInlineMessage {
    InputBotInlineMessage {
        kind: message.kind.input(),
        message: message.message,
        entities: message
            .entities
            .map(|entities| entities.into_iter().map(translate_entity).collect()),
        geo_point: message.geo.map(translate_geo),
        rest: message.rest,
    }
}

// The embedded user reference has to be restated in input form on resubmission
fn translate_entity(entity: MessageEntity) -> MessageEntity {
    match entity.kind {
        EntityKind::MentionName => MessageEntity {
            kind: EntityKind::InputMentionName,
            fields: entity.fields,
        },
        _ => entity,
    }
}

fn translate_geo(geo: GeoPoint) -> InputGeoPoint {
    InputGeoPoint {
        kind: geo.kind.input(),
        fields: geo.fields,
    }
}
