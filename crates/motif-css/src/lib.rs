//! CSS selector construction for the motif crates.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector data** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Element, id, class, attribute, pseudo-class and pseudo-element slots
//!   - Serialization in the fixed compound order
//!   - Specificity calculation
//!
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling, subsequent-sibling
//!
//! - **Fluent builder**
//!   - Chainable fragment setters
//!   - Clear-on-render
//!   - Nested combination of rendered selectors
//!
//! # Not Implemented
//!
//! - Selector parsing or grammar validation
//! - Escaping of fragment values
//! - Multiple attribute selectors on one compound

/// Chainable selector builder and combination.
pub mod builder;
/// Selector data, combinators and specificity per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

pub use builder::{CombinedSelector, Render, SelectorBuilder, combine};
pub use selector::{Combinator, Selector, Specificity, UnknownCombinator};
