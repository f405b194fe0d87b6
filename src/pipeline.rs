//! One screening run: check the candidate set, score, rank.

use tracing::info;

use crate::config::Config;
use crate::document::Document;
use crate::ranking::{RunOutcome, rank};
use crate::scoring::{RelevanceScorer, ScoringError, build_scorer};

/// Runs the strategy selected by `config` over `candidates`.
///
/// An empty candidate set returns [`RunOutcome::NoCandidates`] before any
/// scorer (and so any model) is built. `source` names where candidates came
/// from and is only used for reporting.
pub fn screen(
    config: &Config,
    reference: &str,
    candidates: &[Document],
    source: &str,
) -> Result<RunOutcome, ScoringError> {
    if candidates.is_empty() {
        info!(source, "No candidates found");
        return Ok(RunOutcome::NoCandidates {
            source: source.to_string(),
        });
    }

    let scorer = build_scorer(config)?;
    screen_with(scorer.as_ref(), reference, candidates, source)
}

/// Runs an already constructed scorer over `candidates`.
pub fn screen_with(
    scorer: &dyn RelevanceScorer,
    reference: &str,
    candidates: &[Document],
    source: &str,
) -> Result<RunOutcome, ScoringError> {
    if candidates.is_empty() {
        info!(source, "No candidates found");
        return Ok(RunOutcome::NoCandidates {
            source: source.to_string(),
        });
    }

    info!(
        strategy = %scorer.strategy(),
        num_candidates = candidates.len(),
        "Scoring candidates"
    );

    let ranked = rank(scorer.score(reference, candidates)?);

    info!(
        strategy = %scorer.strategy(),
        top_score = ranked.records().first().map(|r| r.score),
        "Ranking complete"
    );

    Ok(RunOutcome::Ranked(ranked))
}
