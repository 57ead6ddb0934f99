use serde::{Deserialize, Serialize};

use crate::domains::pipes::models::{ResubmittableResult, SwitchPm};

/// `messages.setInlineBotResults` parameters for one inline query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineAnswer {
    pub query_id: i64,

    pub results: Vec<ResubmittableResult>,

    /// Always 0, pipelines are never cached
    pub cache_time: i32,

    /// Results are personal to the querying user
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub private: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub gallery: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_pm: Option<SwitchPm>,
}

impl InlineAnswer {
    /// An empty answer for `query_id`
    pub fn new(query_id: i64) -> Self {
        Self {
            query_id,
            results: Vec::new(),
            cache_time: 0,
            private: false,
            gallery: false,
            switch_pm: None,
        }
    }

    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    pub fn with_results(mut self, results: Vec<ResubmittableResult>, gallery: bool) -> Self {
        self.results = results;
        self.gallery = gallery;
        self
    }

    pub fn with_switch_pm(mut self, switch_pm: SwitchPm) -> Self {
        self.switch_pm = Some(switch_pm);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_fallback_answer() {
        let answer = InlineAnswer::new(5)
            .private()
            .with_switch_pm(SwitchPm::new("FAQ", "lel"));

        assert_eq!(
            serde_json::to_value(&answer).unwrap(),
            json!({
                "query_id": 5,
                "results": [],
                "cache_time": 0,
                "private": true,
                "switch_pm": { "_": "inlineBotSwitchPM", "text": "FAQ", "start_param": "lel" }
            })
        );
    }

    #[test]
    fn test_serialize_plain_answer_omits_flags() {
        let value = serde_json::to_value(InlineAnswer::new(1)).unwrap();
        assert!(value.get("private").is_none());
        assert!(value.get("gallery").is_none());
        assert!(value.get("switch_pm").is_none());
    }
}
