//! Selector AST consumed by the compiler and the executor.
//!
//! A selector is an immutable value describing one phase of a query:
//! constraints (tag, id, diggerid, classes, attribute filters), the splitter
//! that selects the candidate set relative to the previous phase, and the
//! result-shaping modifiers. The raw-text parser produces these; hosts with
//! their own selector front end can construct them directly.

use smallvec::SmallVec;

/// How a phase selects its candidate nodes relative to its context.
///
/// An absent splitter means "all descendants".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Splitter {
    /// `>`: direct children of the context only.
    Child,
    /// `<`: direct parent. Recognized by the parser but rejected by the
    /// executor with [`crate::Error::UnsupportedSplitter`].
    Parent,
}

impl Splitter {
    pub fn symbol(self) -> &'static str {
        match self {
            Splitter::Child => ">",
            Splitter::Parent => "<",
        }
    }
}

/// Attribute comparison operators.
///
/// The set is closed; anything else is carried as [`AttrOp::Unrecognized`]
/// and contributes nothing to the attribute hit sum when matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrOp {
    /// `=`: textual equality, non-null.
    Equals,
    /// `!=`: textual inequality, non-null.
    NotEquals,
    /// `>`: numeric greater-than.
    Greater,
    /// `>=`: numeric greater-or-equal.
    GreaterOrEqual,
    /// `<`: numeric less-than.
    Less,
    /// `<=`: numeric less-or-equal.
    LessOrEqual,
    /// `^=`: value starts with the target (literal, case-insensitive).
    StartsWith,
    /// `$=`: value ends with the target.
    EndsWith,
    /// `~=`: target appears as a whole word bounded by non-word characters.
    WholeWord,
    /// `|=`: value equals the target or starts with `target-`.
    DashPrefix,
    /// `*=`: target appears anywhere as a substring.
    Contains,
    /// An operator outside the fixed table. Never matches, never errors.
    Unrecognized(String),
}

impl AttrOp {
    /// Map an operator symbol to its variant. Unknown symbols are preserved
    /// verbatim in [`AttrOp::Unrecognized`].
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "=" => AttrOp::Equals,
            "!=" => AttrOp::NotEquals,
            ">" => AttrOp::Greater,
            ">=" => AttrOp::GreaterOrEqual,
            "<" => AttrOp::Less,
            "<=" => AttrOp::LessOrEqual,
            "^=" => AttrOp::StartsWith,
            "$=" => AttrOp::EndsWith,
            "~=" => AttrOp::WholeWord,
            "|=" => AttrOp::DashPrefix,
            "*=" => AttrOp::Contains,
            other => AttrOp::Unrecognized(other.to_string()),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            AttrOp::Equals => "=",
            AttrOp::NotEquals => "!=",
            AttrOp::Greater => ">",
            AttrOp::GreaterOrEqual => ">=",
            AttrOp::Less => "<",
            AttrOp::LessOrEqual => "<=",
            AttrOp::StartsWith => "^=",
            AttrOp::EndsWith => "$=",
            AttrOp::WholeWord => "~=",
            AttrOp::DashPrefix => "|=",
            AttrOp::Contains => "*=",
            AttrOp::Unrecognized(s) => s,
        }
    }
}

/// One `[field op value]` filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrFilter {
    /// Dotted path into the node's attribute document, e.g. `size.value`.
    pub field: String,
    pub operator: AttrOp,
    /// Comparison target. `None` turns the filter into an existence check.
    pub value: Option<String>,
}

impl AttrFilter {
    /// Build a filter, normalizing an empty comparison value to `None`
    /// (an empty target means existence-only).
    pub fn new(field: impl Into<String>, operator: AttrOp, value: Option<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.filter(|v| !v.is_empty()),
        }
    }

    /// Existence-only filter: `[field]`.
    pub fn exists(field: impl Into<String>) -> Self {
        Self::new(field, AttrOp::Equals, None)
    }
}

/// Result-shaping limit: a plain prefix count or a half-open `[a, b)` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Count(usize),
    Range(usize, usize),
}

impl Limit {
    /// Parse a limit argument. A comma makes it a range; non-digit
    /// characters are stripped from each part and an empty part reads as 0.
    pub fn parse(text: &str) -> Self {
        if text.contains(',') {
            let mut parts = text.splitn(2, ',').map(digits);
            let start = parts.next().unwrap_or(0);
            let end = parts.next().unwrap_or(0);
            Limit::Range(start, end)
        } else {
            Limit::Count(digits(text))
        }
    }
}

fn digits(part: &str) -> usize {
    let filtered: String = part.chars().filter(char::is_ascii_digit).collect();
    filtered.parse().unwrap_or(0)
}

/// Selector modifiers: negation and result shaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifier {
    /// `:not`: negate the selector (see compiler docs for the exact
    /// per-check semantics).
    pub not: bool,
    /// `:first`: collapse a non-empty result to its first node.
    pub first: bool,
    /// `:last`: collapse a non-empty result to its last node. Ignored when
    /// `first` is also set.
    pub last: bool,
    /// `:limit(n)` / `:limit(a,b)`.
    pub limit: Option<Limit>,
}

/// One phase of a parsed selector expression.
///
/// All constraint fields are optional. A selector that populates none of
/// them matches nothing (the hit-count-zero rule); only the `*` wildcard tag
/// matches unconditionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selector {
    /// Tag name; `*` is the universal wildcard.
    pub tag: Option<String>,
    /// `#id`: exact match on the node id.
    pub id: Option<String>,
    /// `=diggerid`: exact match on the internal identifier namespace.
    pub diggerid: Option<String>,
    /// `.class` names, all of which must be present on the node.
    pub classes: SmallVec<[String; 4]>,
    /// `[field op value]` filters, all of which must pass.
    pub attrs: Vec<AttrFilter>,
    pub modifier: Modifier,
    /// Splitter relating this phase to its context; `None` = descendants.
    pub splitter: Option<Splitter>,
}

impl Selector {
    /// Selector constraining only the tag name.
    pub fn tag(name: impl Into<String>) -> Self {
        Self {
            tag: Some(name.into()),
            ..Self::default()
        }
    }

    /// The universal wildcard selector.
    pub fn wildcard() -> Self {
        Self::tag("*")
    }

    /// True when no constraint field is populated at all.
    pub fn is_unconstrained(&self) -> bool {
        self.tag.is_none()
            && self.id.is_none()
            && self.diggerid.is_none()
            && self.classes.is_empty()
            && self.attrs.is_empty()
    }
}

impl std::str::FromStr for Selector {
    type Err = crate::Error;

    /// Parse a single-phase selector. Multi-phase text is rejected; use
    /// [`crate::parse_selectors`] for chains.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut phases = crate::parser::parse_selectors(s)?;
        if phases.len() != 1 {
            return Err(crate::Error::Parse(format!(
                "expected a single selector phase, got {}: {s:?}",
                phases.len()
            )));
        }
        Ok(phases.remove(0))
    }
}
