//! Focus-relative ordering of result triples
//!
//! Rows where the focus is the subject come first, then predicate, then
//! object. Among subject rows, priority-namespace predicates lead. The sort is
//! stable: equal rows keep their input order.

use crate::priority::PrioritySet;
use crate::term::Triple;

/// Rank of a triple that does not mention the focus at all
pub const RANK_UNRELATED: u8 = 3;

pub struct FocusOrderingEngine;

impl FocusOrderingEngine {
    /// Order `triples` relative to `focus`.
    ///
    /// An absent or empty focus returns the input vector untouched.
    pub fn order(triples: Vec<Triple>, focus: Option<&str>, priority: &PrioritySet) -> Vec<Triple> {
        let focus = match focus {
            Some(f) if !f.is_empty() => f,
            _ => return triples,
        };

        let mut triples = triples;
        // sort_by_key is stable
        triples.sort_by_key(|t| {
            let rank = Self::rank(t, focus);
            let demoted = rank == 0 && !Self::is_priority(t, priority);
            (rank, demoted)
        });
        triples
    }

    /// 0 subject, 1 predicate, 2 object, 3 unrelated
    pub fn rank(triple: &Triple, focus: &str) -> u8 {
        if triple.subject.as_str() == focus {
            0
        } else if triple.predicate.as_str() == focus {
            1
        } else if triple.object.as_str() == focus {
            2
        } else {
            RANK_UNRELATED
        }
    }

    fn is_priority(triple: &Triple, priority: &PrioritySet) -> bool {
        let predicate = triple
            .predicate
            .iri()
            .unwrap_or_else(|| triple.predicate.as_str());
        priority.matches(predicate)
    }
}
