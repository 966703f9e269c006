//! Selector-to-predicate compiler.
//!
//! [`compile`] lowers a [`Selector`] once into a [`CompiledSelector`]:
//! numeric comparison targets are parsed and regex-based operators get their
//! patterns built (target escaped as a literal, `(?i)` for
//! case-insensitivity) up front, so evaluating a node is allocation-free
//! apart from scalar coercion. The compiled form is immutable and freely
//! shareable across threads.
//!
//! Matching walks the checks in a fixed order and short-circuits on the
//! first definitive failure:
//!
//! 1. wildcard escape: `tag == "*"` matches unconditionally (and under
//!    `:not` fails unconditionally);
//! 2. id, diggerid and tag mismatch tests, each negatable as a boolean;
//! 3. class membership, counted per required class;
//! 4. attribute filters, counted per filter;
//! 5. the hit-count-zero rule: a selector that expressed no constraint at
//!    all matches nothing.
//!
//! Negation works at two granularities. [`not_filter`] flips single boolean
//! checks. [`not_count`] flips each 0/1 contribution inside the multi-valued
//! checks before summing, so `:not` on `.a.b` matches nodes *missing* those
//! classes rather than nodes whose class set differs as a whole.

use fancy_regex::Regex;
use serde_json::Value;

use crate::model::QueryNode;
use crate::path::{value_number, value_text};
use crate::selector::{AttrFilter, AttrOp, Selector};

/// Apply the negation flag to a single boolean check.
fn not_filter(not: bool, value: bool) -> bool {
    if not { !value } else { value }
}

/// Apply the negation flag to one 0/1 contribution of a multi-valued check.
fn not_count(not: bool, hit: usize) -> usize {
    if not {
        usize::from(hit == 0)
    } else {
        hit
    }
}

#[derive(Debug, Clone, Copy)]
enum NumericCmp {
    Gt,
    Ge,
    Lt,
    Le,
}

impl NumericCmp {
    fn holds(self, left: f64, right: f64) -> bool {
        match self {
            NumericCmp::Gt => left > right,
            NumericCmp::Ge => left >= right,
            NumericCmp::Lt => left < right,
            NumericCmp::Le => left <= right,
        }
    }
}

/// One lowered attribute filter.
#[derive(Debug, Clone)]
enum AttrCheck {
    /// `[field]`: passes when the resolved value is present.
    Exists,
    /// `=` on canonical text.
    TextEquals(String),
    /// `!=` on canonical text.
    TextDiffers(String),
    /// Ordering operators. `None` means the target did not parse as a
    /// number; the check is then constant-false.
    Numeric(NumericCmp, Option<f64>),
    /// Regex-backed string operators. `None` means the pattern failed to
    /// build; the check is then constant-false.
    Pattern(Option<Regex>),
    /// Unrecognized operator: contributes nothing to the hit sum, not even
    /// through the not-count-filter.
    Skip,
}

impl AttrCheck {
    /// Lower a filter. Called once per query, never per node.
    fn lower(filter: &AttrFilter) -> Self {
        let Some(target) = filter.value.as_deref() else {
            return AttrCheck::Exists;
        };
        match &filter.operator {
            AttrOp::Equals => AttrCheck::TextEquals(target.to_string()),
            AttrOp::NotEquals => AttrCheck::TextDiffers(target.to_string()),
            AttrOp::Greater => AttrCheck::Numeric(NumericCmp::Gt, target.trim().parse().ok()),
            AttrOp::GreaterOrEqual => AttrCheck::Numeric(NumericCmp::Ge, target.trim().parse().ok()),
            AttrOp::Less => AttrCheck::Numeric(NumericCmp::Lt, target.trim().parse().ok()),
            AttrOp::LessOrEqual => AttrCheck::Numeric(NumericCmp::Le, target.trim().parse().ok()),
            AttrOp::StartsWith => Self::pattern(format!("(?i)^{}", fancy_regex::escape(target))),
            AttrOp::EndsWith => Self::pattern(format!("(?i){}$", fancy_regex::escape(target))),
            // The word test requires a non-word character on both sides, so
            // a hit at the very start or end of the value does not count.
            AttrOp::WholeWord => Self::pattern(format!(r"(?i)\W{}\W", fancy_regex::escape(target))),
            AttrOp::DashPrefix => Self::pattern(format!("(?i)^{}(?:-|$)", fancy_regex::escape(target))),
            AttrOp::Contains => Self::pattern(format!("(?i){}", fancy_regex::escape(target))),
            AttrOp::Unrecognized(_) => AttrCheck::Skip,
        }
    }

    fn pattern(pattern: String) -> Self {
        AttrCheck::Pattern(Regex::new(&pattern).ok())
    }

    /// Evaluate against a resolved attribute value. `Some(0|1)` is the
    /// filter's contribution; `None` means the filter contributes nothing.
    fn evaluate(&self, resolved: Option<&Value>) -> Option<usize> {
        let hit = match self {
            AttrCheck::Exists => resolved.is_some(),
            AttrCheck::TextEquals(target) => {
                resolved.and_then(value_text).is_some_and(|t| &t == target)
            }
            AttrCheck::TextDiffers(target) => {
                resolved.and_then(value_text).is_some_and(|t| &t != target)
            }
            AttrCheck::Numeric(cmp, target) => match (resolved.and_then(value_number), target) {
                (Some(check), Some(target)) => cmp.holds(check, *target),
                _ => false,
            },
            AttrCheck::Pattern(regex) => match (resolved.and_then(value_text), regex) {
                (Some(text), Some(regex)) => regex.is_match(&text).unwrap_or(false),
                _ => false,
            },
            AttrCheck::Skip => return None,
        };
        Some(usize::from(hit))
    }
}

#[derive(Debug, Clone)]
struct AttrTest {
    field: String,
    check: AttrCheck,
}

/// A selector lowered into directly evaluable form.
///
/// Stateless and immutable after construction; one instance can test any
/// number of nodes, concurrently if needed.
#[derive(Debug, Clone)]
pub struct CompiledSelector {
    wildcard: bool,
    not: bool,
    id: Option<String>,
    diggerid: Option<String>,
    tag: Option<String>,
    classes: Vec<String>,
    attr_tests: Vec<AttrTest>,
}

impl CompiledSelector {
    /// Test a single node against the selector.
    pub fn matches<N: QueryNode>(&self, node: &N) -> bool {
        if self.wildcard {
            return not_filter(self.not, true);
        }

        // Hits count constraint categories that were actually expressed;
        // zero at the end means the selector degenerated to a no-op.
        let mut hits = 0usize;

        if let Some(id) = &self.id {
            hits += 1;
            if not_filter(self.not, node.id() != Some(id.as_str())) {
                return false;
            }
        }

        if let Some(diggerid) = &self.diggerid {
            hits += 1;
            if not_filter(self.not, node.diggerid() != Some(diggerid.as_str())) {
                return false;
            }
        }

        if let Some(tag) = &self.tag {
            hits += 1;
            if not_filter(self.not, node.tag() != tag) {
                return false;
            }
        }

        if !self.classes.is_empty() {
            let mut count = 0usize;
            for class in &self.classes {
                hits += 1;
                count += not_count(self.not, usize::from(node.has_class(class)));
            }
            if count < self.classes.len() {
                return false;
            }
        }

        if !self.attr_tests.is_empty() {
            let mut count = 0usize;
            for test in &self.attr_tests {
                hits += 1;
                if let Some(hit) = test.check.evaluate(node.attr(&test.field)) {
                    count += not_count(self.not, hit);
                }
            }
            if count < self.attr_tests.len() {
                return false;
            }
        }

        hits > 0
    }

    /// Adapt the compiled selector into a plain predicate closure.
    pub fn into_fn<N: QueryNode>(self) -> impl Fn(&N) -> bool {
        move |node| self.matches(node)
    }
}

/// Compile a selector into a reusable match predicate.
///
/// Pure: no I/O, no shared state, no caching across calls. The splitter and
/// the result-shaping modifiers are executor concerns and are ignored here;
/// only `:not` affects matching.
pub fn compile(selector: &Selector) -> CompiledSelector {
    let not = selector.modifier.not;
    CompiledSelector {
        wildcard: selector.tag.as_deref() == Some("*"),
        not,
        id: selector.id.clone(),
        diggerid: selector.diggerid.clone(),
        tag: selector.tag.clone(),
        classes: selector.classes.to_vec(),
        attr_tests: selector
            .attrs
            .iter()
            .map(|filter| AttrTest {
                field: filter.field.clone(),
                check: AttrCheck::lower(filter),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_filter_flips_only_under_not() {
        assert!(not_filter(false, true));
        assert!(!not_filter(false, false));
        assert!(!not_filter(true, true));
        assert!(not_filter(true, false));
    }

    #[test]
    fn not_count_flips_each_contribution() {
        assert_eq!(not_count(false, 1), 1);
        assert_eq!(not_count(false, 0), 0);
        assert_eq!(not_count(true, 1), 0);
        assert_eq!(not_count(true, 0), 1);
    }
}
