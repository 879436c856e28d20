//! Fluent selector builder
//!
//! A [`SelectorBuilder`] accumulates fragments, [`render`](Render::render)
//! turns them into selector text and leaves the builder empty again. Two
//! renderables joined by [`Render::combine`] produce a [`CombinedSelector`],
//! which is itself renderable, so combinations nest:
//!
//! ```
//! use motif_css::builder::{SelectorBuilder, combine};
//! use motif_css::selector::Combinator;
//!
//! let text = combine(
//!     &mut SelectorBuilder::new().with_element("div").with_id("main"),
//!     Combinator::Child,
//!     &mut combine(
//!         &mut SelectorBuilder::new().with_element("ul"),
//!         Combinator::Descendant,
//!         &mut SelectorBuilder::new().with_element("li").with_pseudo_class("first-child"),
//!     ),
//! )
//! .to_string();
//!
//! assert_eq!(text, "div#main > ul   li:first-child");
//! ```
//!
//! Rendering clears state, so a second `render()` with no new fragments
//! returns `""`. Use [`SelectorBuilder::selector`] (or the `Display` impls)
//! to read the text without consuming it.

use std::fmt;
use std::mem;

use motif_common::warning::warn_once;

use crate::selector::{Combinator, Selector, UnknownCombinator};

/// Something that can be turned into selector text exactly once.
///
/// After `render` the value is empty: rendering again yields `""` until new
/// fragments are added.
pub trait Render {
    /// Produce the selector text and clear the accumulated state.
    fn render(&mut self) -> String;

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// Render `self` and `other` and join them as `left <token> right`.
    /// Both sides are cleared. The descendant combinator's token is a space,
    /// so it yields three spaces between the sides.
    fn combine(&mut self, other: &mut dyn Render, combinator: Combinator) -> CombinedSelector {
        let left = self.render();
        let right = other.render();
        CombinedSelector::new(format!("{left} {combinator} {right}"))
    }

    /// Like [`combine`](Render::combine), with the combinator given as its token.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCombinator`] if `token` is not one of ` `, `>`, `+`, `~`.
    /// Neither side is rendered in that case.
    fn combine_token(
        &mut self,
        other: &mut dyn Render,
        token: &str,
    ) -> Result<CombinedSelector, UnknownCombinator> {
        let combinator = token.parse()?;
        Ok(self.combine(other, combinator))
    }
}

/// Join two renderables around a combinator: `left <token> right`.
#[must_use]
pub fn combine(
    left: &mut dyn Render,
    combinator: Combinator,
    right: &mut dyn Render,
) -> CombinedSelector {
    left.combine(right, combinator)
}

/// Chainable accumulator for a single compound selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    selector: Selector,
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selector: Selector::new(),
        }
    }

    /// Set the type selector, replacing any previous one.
    #[must_use]
    pub fn with_element(mut self, value: impl Into<String>) -> Self {
        set_single(&mut self.selector.element, "element", None, value.into());
        self
    }

    /// Set the ID selector (`#value`), replacing any previous one.
    #[must_use]
    pub fn with_id(mut self, value: impl Into<String>) -> Self {
        set_single(&mut self.selector.id, "id", Some("#"), value.into());
        self
    }

    /// Append a class selector (`.value`).
    #[must_use]
    pub fn with_class(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        warn_if_prefixed("class", ".", &value);
        self.selector.classes.push(value);
        self
    }

    /// Set the attribute selector (`[value]`), replacing any previous one.
    #[must_use]
    pub fn with_attribute(mut self, value: impl Into<String>) -> Self {
        set_single(&mut self.selector.attribute, "attribute", Some("["), value.into());
        self
    }

    /// Append a pseudo-class (`:value`).
    #[must_use]
    pub fn with_pseudo_class(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        warn_if_prefixed("pseudo-class", ":", &value);
        self.selector.pseudo_classes.push(value);
        self
    }

    /// Set the pseudo-element (`::value`), replacing any previous one.
    #[must_use]
    pub fn with_pseudo_element(mut self, value: impl Into<String>) -> Self {
        set_single(
            &mut self.selector.pseudo_element,
            "pseudo-element",
            Some(":"),
            value.into(),
        );
        self
    }

    /// The fragments accumulated so far. Does not clear anything.
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// True when nothing has been added since creation or the last render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selector.is_empty()
    }

    /// Produce the selector text and reset the builder to empty.
    pub fn render(&mut self) -> String {
        mem::take(&mut self.selector).to_string()
    }
}

impl Render for SelectorBuilder {
    fn render(&mut self) -> String {
        Self::render(self)
    }
}

impl From<Selector> for SelectorBuilder {
    fn from(selector: Selector) -> Self {
        Self { selector }
    }
}

/// An empty value unsets the slot, as if it had never been given.
fn set_single(slot: &mut Option<String>, name: &str, prefix: Option<&str>, value: String) {
    if let Some(prefix) = prefix {
        warn_if_prefixed(name, prefix, &value);
    }
    *slot = Some(value).filter(|value| !value.is_empty());
}

/// The message names the slot, never the value, so the registry stays bounded.
fn warn_if_prefixed(name: &str, prefix: &str, value: &str) {
    if value.starts_with(prefix) {
        let _ = warn_once(
            "CSS",
            &format!("{name} value already starts with '{prefix}'; it will be doubled"),
        );
    }
}

/// The result of joining two renderables with a combinator.
///
/// Holds the joined text; renders (once) to it and can be combined again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedSelector {
    text: String,
}

impl CombinedSelector {
    /// Wrap already-joined selector text.
    #[must_use]
    pub const fn new(text: String) -> Self {
        Self { text }
    }

    /// The joined text. Does not clear anything.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True after the value has been rendered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Render for CombinedSelector {
    fn render(&mut self) -> String {
        mem::take(&mut self.text)
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<CombinedSelector> for String {
    fn from(combined: CombinedSelector) -> Self {
        combined.text
    }
}
