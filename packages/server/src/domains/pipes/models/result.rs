//! Inline result records, as fetched from a provider and as resubmitted.
//!
//! Wire records are TL-JSON objects tagged by `_`. Every record keeps the
//! fields the resolver does not interpret in a flattened `rest` map so they
//! survive translation untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Message payloads
// =============================================================================

/// Constructor of a fetched `send_message` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    #[serde(rename = "botInlineMessageMediaAuto")]
    MediaAuto,
    #[serde(rename = "botInlineMessageText")]
    Text,
    #[serde(rename = "botInlineMessageMediaGeo")]
    MediaGeo,
    #[serde(rename = "botInlineMessageMediaVenue")]
    MediaVenue,
    #[serde(rename = "botInlineMessageMediaContact")]
    MediaContact,
    #[serde(rename = "botInlineMessageMediaInvoice")]
    MediaInvoice,
    #[serde(rename = "botInlineMessageMediaWebPage")]
    MediaWebPage,
}

/// Constructor of a resubmittable `send_message` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMessageKind {
    #[serde(rename = "inputBotInlineMessageMediaAuto")]
    MediaAuto,
    #[serde(rename = "inputBotInlineMessageText")]
    Text,
    #[serde(rename = "inputBotInlineMessageMediaGeo")]
    MediaGeo,
    #[serde(rename = "inputBotInlineMessageMediaVenue")]
    MediaVenue,
    #[serde(rename = "inputBotInlineMessageMediaContact")]
    MediaContact,
    #[serde(rename = "inputBotInlineMessageMediaInvoice")]
    MediaInvoice,
    #[serde(rename = "inputBotInlineMessageMediaWebPage")]
    MediaWebPage,
}

impl MessageKind {
    /// The input constructor matching this one.
    pub fn input(self) -> InputMessageKind {
        match self {
            MessageKind::MediaAuto => InputMessageKind::MediaAuto,
            MessageKind::Text => InputMessageKind::Text,
            MessageKind::MediaGeo => InputMessageKind::MediaGeo,
            MessageKind::MediaVenue => InputMessageKind::MediaVenue,
            MessageKind::MediaContact => InputMessageKind::MediaContact,
            MessageKind::MediaInvoice => InputMessageKind::MediaInvoice,
            MessageKind::MediaWebPage => InputMessageKind::MediaWebPage,
        }
    }
}

/// Entity constructor. Only mentions-by-name need rewriting, every other
/// entity type is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityKind {
    MentionName,
    InputMentionName,
    Other(String),
}

impl From<String> for EntityKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "messageEntityMentionName" => EntityKind::MentionName,
            "inputMessageEntityMentionName" => EntityKind::InputMentionName,
            _ => EntityKind::Other(tag),
        }
    }
}

impl From<EntityKind> for String {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::MentionName => "messageEntityMentionName".to_string(),
            EntityKind::InputMentionName => "inputMessageEntityMentionName".to_string(),
            EntityKind::Other(tag) => tag,
        }
    }
}

/// Text annotation (bold span, link, mention...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "_")]
    pub kind: EntityKind,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeoKind {
    #[serde(rename = "geoPoint")]
    Point,
    #[serde(rename = "geoPointEmpty")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputGeoKind {
    #[serde(rename = "inputGeoPoint")]
    Point,
    #[serde(rename = "inputGeoPointEmpty")]
    Empty,
}

impl GeoKind {
    pub fn input(self) -> InputGeoKind {
        match self {
            GeoKind::Point => InputGeoKind::Point,
            GeoKind::Empty => InputGeoKind::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "_")]
    pub kind: GeoKind,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputGeoPoint {
    #[serde(rename = "_")]
    pub kind: InputGeoKind,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Fetched `send_message` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotInlineMessage {
    #[serde(rename = "_")]
    pub kind: MessageKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoPoint>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Resubmittable `send_message` payload. The location moves to `geo_point`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputBotInlineMessage {
    #[serde(rename = "_")]
    pub kind: InputMessageKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_point: Option<InputGeoPoint>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

// =============================================================================
// Results
// =============================================================================

/// Body shared by every inline result constructor, generic over the message
/// payload so fetched and resubmittable results have the same shape.
///
/// Title, thumbnail, media and the other display fields stay in `rest` as
/// sent, explicit nulls included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineResult<M> {
    pub id: String,

    /// Result type as declared by the provider ("article", "photo", "gif"...)
    #[serde(rename = "type")]
    pub kind: String,

    pub send_message: M,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl<M> InlineResult<M> {
    /// A pass-through field, if present and not null.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.rest.get(name).filter(|value| !value.is_null())
    }

    fn has(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

/// The two constructors a provider actually sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_")]
enum WireResult {
    #[serde(rename = "botInlineResult")]
    Result(InlineResult<BotInlineMessage>),
    #[serde(rename = "botInlineMediaResult")]
    Media(InlineResult<BotInlineMessage>),
}

/// A result returned by a provider query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireResult", into = "WireResult")]
pub enum CandidateResult {
    Text(InlineResult<BotInlineMessage>),
    Photo(InlineResult<BotInlineMessage>),
    Document(InlineResult<BotInlineMessage>),
    /// Never resubmittable
    Game(InlineResult<BotInlineMessage>),
}

impl TryFrom<WireResult> for CandidateResult {
    type Error = String;

    fn try_from(wire: WireResult) -> Result<Self, Self::Error> {
        match wire {
            WireResult::Result(body) => Ok(CandidateResult::Text(body)),
            WireResult::Media(body) if body.has("game") => Ok(CandidateResult::Game(body)),
            WireResult::Media(body) if body.has("document") => {
                Ok(CandidateResult::Document(body))
            }
            WireResult::Media(body) if body.has("photo") => Ok(CandidateResult::Photo(body)),
            WireResult::Media(body) => Err(format!(
                "media result {} carries neither photo, document nor game",
                body.id
            )),
        }
    }
}

impl From<CandidateResult> for WireResult {
    fn from(candidate: CandidateResult) -> Self {
        match candidate {
            CandidateResult::Text(body) => WireResult::Result(body),
            CandidateResult::Photo(body)
            | CandidateResult::Document(body)
            | CandidateResult::Game(body) => WireResult::Media(body),
        }
    }
}

impl CandidateResult {
    pub fn body(&self) -> &InlineResult<BotInlineMessage> {
        match self {
            CandidateResult::Text(body)
            | CandidateResult::Photo(body)
            | CandidateResult::Document(body)
            | CandidateResult::Game(body) => body,
        }
    }

    pub fn id(&self) -> &str {
        &self.body().id
    }

    pub fn is_game(&self) -> bool {
        matches!(self, CandidateResult::Game(_))
    }

    /// Text of the message this result would send, if it has one.
    pub fn text(&self) -> Option<&str> {
        match self {
            CandidateResult::Game(_) => None,
            _ => self.body().send_message.message.as_deref(),
        }
    }
}

/// A result in the form `messages.setInlineBotResults` accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum ResubmittableResult {
    #[serde(rename = "inputBotInlineResult")]
    Text(InlineResult<InputBotInlineMessage>),
    #[serde(rename = "inputBotInlineResultPhoto")]
    Photo(InlineResult<InputBotInlineMessage>),
    #[serde(rename = "inputBotInlineResultDocument")]
    Document(InlineResult<InputBotInlineMessage>),
}

impl ResubmittableResult {
    pub fn body(&self) -> &InlineResult<InputBotInlineMessage> {
        match self {
            ResubmittableResult::Text(body)
            | ResubmittableResult::Photo(body)
            | ResubmittableResult::Document(body) => body,
        }
    }
}

// =============================================================================
// Provider responses
// =============================================================================

/// Directive telling the client to open a private chat with the bot instead
/// of showing results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_", rename = "inlineBotSwitchPM")]
pub struct SwitchPm {
    pub text: String,
    pub start_param: String,
}

impl SwitchPm {
    pub fn new(text: impl Into<String>, start_param: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start_param: start_param.into(),
        }
    }
}

/// `messages.botResults` as returned for one provider query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotResults {
    #[serde(default)]
    pub gallery: bool,

    #[serde(default)]
    pub results: Vec<CandidateResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_pm: Option<SwitchPm>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl BotResults {
    pub fn new(results: Vec<CandidateResult>) -> Self {
        Self {
            gallery: false,
            results,
            switch_pm: None,
            rest: Map::new(),
        }
    }

    pub fn redirect(switch_pm: SwitchPm) -> Self {
        Self {
            switch_pm: Some(switch_pm),
            ..Self::new(Vec::new())
        }
    }

    pub fn gallery(mut self, gallery: bool) -> Self {
        self.gallery = gallery;
        self
    }
}
