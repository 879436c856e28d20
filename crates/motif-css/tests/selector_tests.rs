//! Integration tests for selector data, specificity, and combinator tokens.

use motif_css::selector::{Combinator, Selector, Specificity, UnknownCombinator};

fn selector(element: Option<&str>, id: Option<&str>, classes: &[&str]) -> Selector {
    Selector {
        element: element.map(str::to_string),
        id: id.map(str::to_string),
        classes: classes.iter().map(|c| (*c).to_string()).collect(),
        ..Selector::default()
    }
}

// ========== Display ==========

#[test]
fn test_display_empty() {
    assert!(Selector::new().is_empty());
    assert_eq!(Selector::new().to_string(), "");
}

#[test]
fn test_display_compound() {
    let sel = selector(Some("div"), Some("main"), &["a", "b"]);
    assert!(!sel.is_empty());
    assert_eq!(sel.to_string(), "div#main.a.b");
}

#[test]
fn test_display_pseudo_element_uses_double_colon() {
    let sel = Selector {
        element: Some("p".to_string()),
        pseudo_classes: vec!["first-child".to_string()],
        pseudo_element: Some("first-line".to_string()),
        ..Selector::default()
    };
    assert_eq!(sel.to_string(), "p:first-child::first-line");
}

#[test]
fn test_empty_single_slots_count_as_unset() {
    let sel = Selector {
        element: Some("div".to_string()),
        id: Some(String::new()),
        attribute: Some(String::new()),
        pseudo_element: Some(String::new()),
        ..Selector::default()
    };
    assert_eq!(sel.to_string(), "div");
    assert_eq!(sel.specificity(), Specificity(0, 0, 1));

    let blank = Selector {
        element: Some(String::new()),
        ..Selector::default()
    };
    assert!(blank.is_empty());
}

#[test]
fn test_display_serde_shape() {
    let sel = selector(Some("a"), None, &["x"]);
    let json = serde_json::to_string(&sel).unwrap();
    assert_eq!(
        json,
        r#"{"element":"a","id":null,"classes":["x"],"attribute":null,"pseudo_classes":[],"pseudo_element":null}"#
    );
}

// ========== Specificity ==========
// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)

#[test]
fn test_specificity_type_selector() {
    assert_eq!(
        selector(Some("body"), None, &[]).specificity(),
        Specificity(0, 0, 1)
    );
}

#[test]
fn test_specificity_id_and_classes() {
    assert_eq!(
        selector(None, Some("main"), &["container", "editable"]).specificity(),
        Specificity(1, 2, 0)
    );
}

#[test]
fn test_specificity_counts_attribute_and_pseudo_classes_as_b() {
    let sel = Selector {
        element: Some("a".to_string()),
        attribute: Some("href".to_string()),
        pseudo_classes: vec!["focus".to_string(), "hover".to_string()],
        pseudo_element: Some("after".to_string()),
        ..Selector::default()
    };
    assert_eq!(sel.specificity(), Specificity(0, 3, 2));
}

#[test]
fn test_specificity_ordering() {
    assert!(Specificity(1, 0, 0) > Specificity(0, 10, 10));
    assert!(Specificity(0, 1, 0) > Specificity(0, 0, 5));
    assert_eq!(Specificity::default(), Specificity::new(0, 0, 0));
    assert_eq!(Specificity(1, 2, 3).to_string(), "(1, 2, 3)");
}

// ========== Combinator ==========
// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

#[test]
fn test_combinator_tokens() {
    let tokens: Vec<&str> = Combinator::ALL.iter().map(|c| c.token()).collect();
    assert_eq!(tokens, [" ", ">", "+", "~"]);
}

#[test]
fn test_combinator_parse_round_trips_tokens() {
    for combinator in Combinator::ALL {
        assert_eq!(combinator.token().parse::<Combinator>(), Ok(combinator));
    }
}

#[test]
fn test_combinator_parse_whitespace_is_descendant() {
    assert_eq!("   ".parse::<Combinator>(), Ok(Combinator::Descendant));
    assert_eq!("\t".parse::<Combinator>(), Ok(Combinator::Descendant));
}

#[test]
fn test_combinator_parse_trims_punctuation() {
    assert_eq!(" > ".parse::<Combinator>(), Ok(Combinator::Child));
    assert_eq!(" ~".parse::<Combinator>(), Ok(Combinator::SubsequentSibling));
}

#[test]
fn test_combinator_parse_empty_is_unknown() {
    assert_eq!(
        "".parse::<Combinator>(),
        Err(UnknownCombinator(String::new()))
    );
}

#[test]
fn test_combinator_parse_unknown() {
    let err = "||".parse::<Combinator>().unwrap_err();
    assert_eq!(err, UnknownCombinator("||".to_string()));
    assert_eq!(
        err.to_string(),
        "unknown combinator \"||\": expected one of ' ', '>', '+', '~'"
    );
}
