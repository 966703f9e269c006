//! Selector/match engine for in-memory trees of tagged, attributed nodes.
//!
//! A CSS-like selector (`country[name^=U] > city.south:first`) is compiled
//! into a reusable predicate and evaluated against a container of nodes to
//! produce a filtered, possibly reshaped, result container.
//!
//! The engine is generic over the host tree via the [`QueryNode`] /
//! [`QueryContext`] traits; [`simple`] provides a ready-made in-memory
//! implementation.
//!
//! ```
//! use digger_search::simple::{node, SimpleContainer};
//!
//! let tree = SimpleContainer::new(vec![
//!     node("country")
//!         .attr("name", "USA")
//!         .child(node("city").class("south").attr("name", "Houston"))
//!         .child(node("city").class("north").attr("name", "Chicago"))
//!         .build(),
//! ]);
//!
//! let south = tree.find("city.south").unwrap();
//! assert_eq!(south.len(), 1);
//! ```
//!
//! Standalone node testing uses [`compile`] directly:
//!
//! ```
//! use digger_search::{compile, Selector};
//! use digger_search::simple::node;
//!
//! let selector: Selector = "city.south".parse().unwrap();
//! let predicate = compile(&selector);
//! let city = node("city").class("south").build();
//! assert!(predicate.matches(&city));
//! ```

pub mod compiler;
pub mod error;
pub mod model;
pub mod parser;
pub mod path;
pub mod search;
pub mod selector;
pub mod simple;

pub use compiler::{CompiledSelector, compile};
pub use error::Error;
pub use model::{QueryContext, QueryNode};
pub use parser::parse_selectors;
pub use search::{find, find_str, search};
pub use selector::{AttrFilter, AttrOp, Limit, Modifier, Selector, Splitter};
