//! Search executor: candidate selection, filtering and result shaping.

use tracing::{debug, trace};

use crate::compiler::compile;
use crate::error::Error;
use crate::model::QueryContext;
use crate::selector::{Limit, Modifier, Selector, Splitter};

/// Run a single selector phase against a context.
///
/// The splitter picks the candidate set (`>` direct children, absent = all
/// descendants; `<` fails with [`Error::UnsupportedSplitter`]), the compiled
/// predicate filters it preserving relative order, the modifiers shape the
/// filtered set, and a fresh container is spawned over exactly the result.
pub fn search<C: QueryContext>(selector: &Selector, context: &C) -> Result<C, Error> {
    let predicate = compile(selector);

    let candidates = match selector.splitter {
        Some(Splitter::Child) => context.children(),
        Some(Splitter::Parent) => return Err(Error::UnsupportedSplitter),
        None => context.descendents(),
    };

    let candidate_count = candidates.len();
    let mut matched: Vec<C::Node> = candidates
        .into_iter()
        .filter(|node| predicate.matches(node))
        .collect();

    // Modifiers act on the already-filtered set only; the predicate never
    // runs again.
    apply_modifiers(&selector.modifier, &mut matched);

    trace!(
        candidates = candidate_count,
        matched = matched.len(),
        splitter = selector.splitter.map(Splitter::symbol),
        "selector phase evaluated"
    );

    Ok(context.spawn(matched))
}

/// Run a multi-phase selector chain, piping each phase's result container
/// into the next. An empty chain yields an empty container.
pub fn find<C: QueryContext>(selectors: &[Selector], context: &C) -> Result<C, Error> {
    let mut phases = selectors.iter();
    let Some(head) = phases.next() else {
        return Ok(context.spawn(Vec::new()));
    };

    let mut current = search(head, context)?;
    for (index, phase) in phases.enumerate() {
        debug!(phase = index + 1, "piping selector phase");
        current = search(phase, &current)?;
    }
    Ok(current)
}

/// Parse selector text and run the resulting chain.
pub fn find_str<C: QueryContext>(text: &str, context: &C) -> Result<C, Error> {
    let selectors = crate::parser::parse_selectors(text)?;
    find(&selectors, context)
}

/// Shape the filtered node set: `limit`, then `first`, else `last`.
fn apply_modifiers<N>(modifier: &Modifier, nodes: &mut Vec<N>) {
    if let Some(limit) = modifier.limit {
        match limit {
            Limit::Count(count) => nodes.truncate(count),
            Limit::Range(start, end) => {
                let end = end.min(nodes.len());
                let start = start.min(end);
                let kept: Vec<N> = nodes.drain(start..end).collect();
                *nodes = kept;
            }
        }
    }

    if modifier.first {
        nodes.truncate(1);
    } else if modifier.last
        && let Some(last) = nodes.pop()
    {
        nodes.clear();
        nodes.push(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shaped(modifier: &Modifier, len: usize) -> Vec<usize> {
        let mut nodes: Vec<usize> = (0..len).collect();
        apply_modifiers(modifier, &mut nodes);
        nodes
    }

    #[test]
    fn limit_count_keeps_prefix() {
        let m = Modifier {
            limit: Some(Limit::Count(2)),
            ..Modifier::default()
        };
        assert_eq!(shaped(&m, 5), vec![0, 1]);
        assert_eq!(shaped(&m, 1), vec![0]);
    }

    #[test]
    fn limit_range_is_half_open_and_clamped() {
        let m = Modifier {
            limit: Some(Limit::Range(1, 3)),
            ..Modifier::default()
        };
        assert_eq!(shaped(&m, 5), vec![1, 2]);
        assert_eq!(shaped(&m, 2), vec![1]);
        assert_eq!(shaped(&m, 0), Vec::<usize>::new());
    }

    #[test]
    fn first_wins_over_last() {
        let m = Modifier {
            first: true,
            last: true,
            ..Modifier::default()
        };
        assert_eq!(shaped(&m, 3), vec![0]);
    }

    #[test]
    fn first_and_last_are_noops_on_empty_sets() {
        let m = Modifier {
            first: true,
            ..Modifier::default()
        };
        assert_eq!(shaped(&m, 0), Vec::<usize>::new());
        let m = Modifier {
            last: true,
            ..Modifier::default()
        };
        assert_eq!(shaped(&m, 0), Vec::<usize>::new());
        assert_eq!(shaped(&m, 3), vec![2]);
    }

    #[test]
    fn limit_applies_before_last() {
        let m = Modifier {
            last: true,
            limit: Some(Limit::Count(2)),
            ..Modifier::default()
        };
        assert_eq!(shaped(&m, 5), vec![1]);
    }
}
