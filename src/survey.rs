//! Survey response aggregation
//!
//! Responses arrive grouped in day buckets. A response counts at most once per
//! bucket, so the winner is the answer given on the most distinct days.

use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    #[error("no survey responses to aggregate")]
    EmptyInput,
}

/// Count, per distinct response, the number of buckets it appears in
pub fn bucket_frequencies<S: AsRef<str>>(buckets: &[Vec<S>]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();

    for bucket in buckets {
        let distinct: HashSet<&str> = bucket.iter().map(|s| s.as_ref()).collect();
        for response in distinct {
            *counts.entry(response).or_insert(0) += 1;
        }
    }

    counts
}

/// Return the response present in the most buckets
///
/// Ties go to the lexicographically smallest response (byte order).
/// Fails with [`SurveyError::EmptyInput`] when there is no response at all.
pub fn most_common_response<S: AsRef<str>>(buckets: &[Vec<S>]) -> Result<String, SurveyError> {
    let counts = bucket_frequencies(buckets);

    // BTreeMap iterates in ascending order; only a strictly greater count
    // replaces the current best, so the smallest string wins ties.
    let mut best: Option<(&str, usize)> = None;
    for (response, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((response, count)),
        }
    }

    best.map(|(response, _)| response.to_string())
        .ok_or(SurveyError::EmptyInput)
}
