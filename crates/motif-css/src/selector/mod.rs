//! Compound selector data, combinators, and specificity
//!
//! The slots and their serialization follow
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/). Fragment values
//! are stored verbatim: no escaping, no grammar validation.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator."
///
/// Each slot holds the bare fragment (`main`, not `#main`). Prefixes are
/// added when the selector is displayed, always in the order
/// element → id → classes → attribute → pseudo-classes → pseudo-element.
///
/// Example: `a#nav.item.active[href$=".png"]:focus:hover::before`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors), emitted bare.
    pub element: Option<String>,
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors), emitted as `#id`.
    pub id: Option<String>,
    /// [§ 6.6 Class selectors](https://www.w3.org/TR/selectors-4/#class-html), each emitted as `.class`.
    pub classes: Vec<String>,
    /// [§ 6.4 Attribute selector](https://www.w3.org/TR/selectors-4/#attribute-selectors), emitted as `[attr]`.
    pub attribute: Option<String>,
    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes), each emitted as `:name`.
    pub pseudo_classes: Vec<String>,
    /// [§ 3.6 Pseudo-element](https://www.w3.org/TR/selectors-4/#pseudo-elements), emitted as `::name`.
    pub pseudo_element: Option<String>,
}

impl Selector {
    /// Create an empty selector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            element: None,
            id: None,
            classes: Vec::new(),
            attribute: None,
            pseudo_classes: Vec::new(),
            pseudo_element: None,
        }
    }

    /// True when no slot holds a fragment; such a selector displays as `""`.
    ///
    /// A single-valued slot holding `Some("")` counts as unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        filled(self.element.as_ref()).is_none()
            && filled(self.id.as_ref()).is_none()
            && self.classes.is_empty()
            && filled(self.attribute.as_ref()).is_none()
            && self.pseudo_classes.is_empty()
            && filled(self.pseudo_element.as_ref()).is_none()
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// - A: ID selectors
    /// - B: class selectors, attribute selectors, and pseudo-classes
    /// - C: type selectors and pseudo-elements
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let a = u32::from(filled(self.id.as_ref()).is_some());
        let b = count(&self.classes)
            + u32::from(filled(self.attribute.as_ref()).is_some())
            + count(&self.pseudo_classes);
        let c = u32::from(filled(self.element.as_ref()).is_some())
            + u32::from(filled(self.pseudo_element.as_ref()).is_some());
        Specificity::new(a, b, c)
    }
}

fn filled(slot: Option<&String>) -> Option<&str> {
    slot.map(String::as_str).filter(|value| !value.is_empty())
}

fn count(fragments: &[String]) -> u32 {
    u32::try_from(fragments.len()).unwrap_or(u32::MAX)
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = filled(self.element.as_ref()) {
            f.write_str(element)?;
        }
        if let Some(id) = filled(self.id.as_ref()) {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        if let Some(attribute) = filled(self.attribute.as_ref()) {
            write!(f, "[{attribute}]")?;
        }
        for pseudo_class in &self.pseudo_classes {
            write!(f, ":{pseudo_class}")?;
        }
        if let Some(pseudo_element) = filled(self.pseudo_element.as_ref()) {
            write!(f, "::{pseudo_element}")?;
        }
        Ok(())
    }
}

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// All combinators, in the order they appear in Selectors Level 4 § 16.
    pub const ALL: [Self; 4] = [
        Self::Descendant,
        Self::Child,
        Self::NextSibling,
        Self::SubsequentSibling,
    ];

    /// The token written between the two sides.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A combinator token outside the fixed set (` `, `>`, `+`, `~`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown combinator {0:?}: expected one of ' ', '>', '+', '~'")]
pub struct UnknownCombinator(pub String);

impl FromStr for Combinator {
    type Err = UnknownCombinator;

    /// A non-empty all-whitespace token is the descendant combinator and is
    /// normalized to a single space. The punctuation combinators may carry
    /// surrounding whitespace. The empty string is not a combinator.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "" if !token.is_empty() => Ok(Self::Descendant),
            ">" => Ok(Self::Child),
            "+" => Ok(Self::NextSibling),
            "~" => Ok(Self::SubsequentSibling),
            _ => Err(UnknownCombinator(token.to_string())),
        }
    }
}
