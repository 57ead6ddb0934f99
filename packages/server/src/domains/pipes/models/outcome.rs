use super::{CandidateResult, ResubmittableResult, SwitchPm};

/// What a selector picked from one stage's candidates.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// A single candidate, chosen by index or pattern
    One(CandidateResult),
    /// Everything the provider returned, unfiltered
    All(Vec<CandidateResult>),
    /// Nothing (index out of range)
    Empty,
}

impl Selection {
    /// Text to hand to the next stage. Only a single textual candidate
    /// continues the chain.
    pub fn handoff_text(&self) -> Option<&str> {
        match self {
            Selection::One(candidate) => candidate.text(),
            Selection::All(candidates) if candidates.len() == 1 => candidates[0].text(),
            _ => None,
        }
    }

    pub fn into_results(self) -> Vec<CandidateResult> {
        match self {
            Selection::One(candidate) => vec![candidate],
            Selection::All(candidates) => candidates,
            Selection::Empty => Vec::new(),
        }
    }
}

/// Decision taken after each stage.
#[derive(Debug, Clone, PartialEq)]
pub enum StageStep {
    /// Feed this text to the next stage
    ContinueWith(String),
    /// Stop here with these (untranslated) results
    Terminate {
        results: Vec<CandidateResult>,
        gallery: bool,
    },
    /// The provider asked for a private chat
    Redirect(SwitchPm),
    /// The stage addressed this bot
    AbortSelfReference,
}

/// Terminal state of one pipeline invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// A provider asked to switch to a private chat; nothing else is returned
    Redirect(SwitchPm),
    /// Final, translated results
    Results {
        results: Vec<ResubmittableResult>,
        gallery: bool,
    },
    /// A stage addressed this bot
    AbortedSelfReference,
}
