//! Raw-text selector parser.
//!
//! Turns selector text such as `country[name^=U] > city.south:first` into a
//! chain of [`Selector`] phases. Splitters bind to the phase they precede,
//! so `a > b` yields two selectors with the second carrying
//! [`Splitter::Child`].
//!
//! The compiler and executor never re-parse; hosts that already hold a
//! structured selector can skip this module entirely.

use pest::Parser;
use pest::iterators::Pair;

use crate::error::Error;
use crate::selector::{AttrFilter, AttrOp, Limit, Modifier, Selector, Splitter};

#[derive(pest_derive::Parser)]
#[grammar = "selector.pest"]
struct SelectorParser;

/// Parse a selector string into its phase chain.
pub fn parse_selectors(input: &str) -> Result<Vec<Selector>, Error> {
    let mut pairs = SelectorParser::parse(Rule::selectors, input)
        .map_err(|e| Error::Parse(e.to_string()))?;
    let root = pairs
        .next()
        .ok_or_else(|| Error::Parse(format!("empty selector: {input:?}")))?;

    let mut phases = Vec::new();
    for phase in root.into_inner() {
        if phase.as_rule() == Rule::EOI {
            continue;
        }
        phases.push(build_phase(&phase)?);
    }
    Ok(phases)
}

fn build_phase(pair: &Pair<Rule>) -> Result<Selector, Error> {
    let mut selector = Selector::default();
    for part in pair.clone().into_inner() {
        match part.as_rule() {
            Rule::splitter => {
                selector.splitter = Some(match part.as_str() {
                    ">" => Splitter::Child,
                    _ => Splitter::Parent,
                });
            }
            Rule::unit => build_unit(&part, &mut selector)?,
            _ => {}
        }
    }
    Ok(selector)
}

fn build_unit(pair: &Pair<Rule>, selector: &mut Selector) -> Result<(), Error> {
    for part in pair.clone().into_inner() {
        match part.as_rule() {
            Rule::tag => selector.tag = Some(part.as_str().to_string()),
            Rule::id => selector.id = strip_marker(part.as_str(), '#'),
            Rule::diggerid => selector.diggerid = strip_marker(part.as_str(), '='),
            Rule::class => {
                if let Some(name) = strip_marker(part.as_str(), '.') {
                    selector.classes.push(name);
                }
            }
            Rule::attr => selector.attrs.push(build_attr(&part)),
            Rule::pseudo => build_pseudo(&part, &mut selector.modifier)?,
            _ => {}
        }
    }
    Ok(())
}

fn strip_marker(text: &str, marker: char) -> Option<String> {
    text.strip_prefix(marker).map(str::to_string)
}

fn build_attr(pair: &Pair<Rule>) -> AttrFilter {
    let mut field = String::new();
    let mut operator = AttrOp::Equals;
    let mut value = None;
    for part in pair.clone().into_inner() {
        match part.as_rule() {
            Rule::field => field = part.as_str().to_string(),
            Rule::operator => operator = AttrOp::from_symbol(part.as_str()),
            Rule::value => value = Some(unquote(part.as_str())),
            _ => {}
        }
    }
    AttrFilter::new(field, operator, value)
}

/// Strip one layer of matching quotes, if present.
fn unquote(text: &str) -> String {
    let stripped = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .or_else(|| text.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')));
    stripped.unwrap_or(text).to_string()
}

fn build_pseudo(pair: &Pair<Rule>, modifier: &mut Modifier) -> Result<(), Error> {
    let mut name = "";
    let mut args = None;
    for part in pair.clone().into_inner() {
        match part.as_rule() {
            Rule::pseudo_name => name = part.as_str(),
            Rule::pseudo_text => args = Some(part.as_str()),
            _ => {}
        }
    }
    match name {
        "not" => modifier.not = true,
        "first" => modifier.first = true,
        "last" => modifier.last = true,
        "limit" => {
            let Some(args) = args else {
                return Err(Error::Parse("':limit' requires an argument".to_string()));
            };
            modifier.limit = Some(Limit::parse(args));
        }
        other => return Err(Error::UnknownModifier(other.to_string())),
    }
    Ok(())
}
