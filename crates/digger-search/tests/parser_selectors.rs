use digger_search::{AttrOp, Error, Limit, Selector, Splitter, parse_selectors};

#[test]
fn parses_tag_and_classes() {
    let phases = parse_selectors("city.south.big").unwrap();
    assert_eq!(phases.len(), 1);
    let sel = &phases[0];
    assert_eq!(sel.tag.as_deref(), Some("city"));
    assert_eq!(sel.classes.to_vec(), vec!["south".to_string(), "big".to_string()]);
    assert_eq!(sel.splitter, None);
}

#[test]
fn parses_id_and_diggerid_namespaces() {
    let sel: Selector = "#home".parse().unwrap();
    assert_eq!(sel.id.as_deref(), Some("home"));
    assert_eq!(sel.diggerid, None);

    let sel: Selector = "=abc-123".parse().unwrap();
    assert_eq!(sel.diggerid.as_deref(), Some("abc-123"));
    assert_eq!(sel.id, None);
}

#[test]
fn parses_wildcard() {
    let sel: Selector = "*".parse().unwrap();
    assert_eq!(sel.tag.as_deref(), Some("*"));

    let sel: Selector = "*:not".parse().unwrap();
    assert!(sel.modifier.not);
}

#[test]
fn parses_attribute_filters() {
    let sel: Selector = "country[name^=U]".parse().unwrap();
    assert_eq!(sel.attrs.len(), 1);
    assert_eq!(sel.attrs[0].field, "name");
    assert_eq!(sel.attrs[0].operator, AttrOp::StartsWith);
    assert_eq!(sel.attrs[0].value.as_deref(), Some("U"));

    let sel: Selector = "[size.value>=100]".parse().unwrap();
    assert_eq!(sel.attrs[0].field, "size.value");
    assert_eq!(sel.attrs[0].operator, AttrOp::GreaterOrEqual);
    assert_eq!(sel.attrs[0].value.as_deref(), Some("100"));
}

#[test]
fn parses_existence_filter_without_value() {
    let sel: Selector = "[size]".parse().unwrap();
    assert_eq!(sel.attrs[0].field, "size");
    assert_eq!(sel.attrs[0].value, None);
}

#[test]
fn parses_quoted_values_literally() {
    let sel: Selector = r#"[name="some thing"]"#.parse().unwrap();
    assert_eq!(sel.attrs[0].value.as_deref(), Some("some thing"));

    let sel: Selector = "[name='other thing']".parse().unwrap();
    assert_eq!(sel.attrs[0].value.as_deref(), Some("other thing"));
}

#[test]
fn parses_modifiers() {
    let sel: Selector = "city.south:first".parse().unwrap();
    assert!(sel.modifier.first);
    assert!(!sel.modifier.last);

    let sel: Selector = "city:last".parse().unwrap();
    assert!(sel.modifier.last);

    let sel: Selector = "city:limit(2)".parse().unwrap();
    assert_eq!(sel.modifier.limit, Some(Limit::Count(2)));

    let sel: Selector = "city:limit(1,3)".parse().unwrap();
    assert_eq!(sel.modifier.limit, Some(Limit::Range(1, 3)));

    let sel: Selector = "city:not:first".parse().unwrap();
    assert!(sel.modifier.not && sel.modifier.first);
}

#[test]
fn parses_phase_chains_with_splitters() {
    let phases = parse_selectors("country[name^=U] > city.south area.poor").unwrap();
    assert_eq!(phases.len(), 3);
    assert_eq!(phases[0].tag.as_deref(), Some("country"));
    assert_eq!(phases[0].splitter, None);
    assert_eq!(phases[1].tag.as_deref(), Some("city"));
    assert_eq!(phases[1].splitter, Some(Splitter::Child));
    assert_eq!(phases[2].tag.as_deref(), Some("area"));
    assert_eq!(phases[2].splitter, None);
}

#[test]
fn parses_parent_splitter_shape() {
    // The parser accepts '<'; only the executor rejects it.
    let phases = parse_selectors("city < country").unwrap();
    assert_eq!(phases[1].splitter, Some(Splitter::Parent));
}

#[test]
fn splitters_bind_without_surrounding_whitespace() {
    let phases = parse_selectors("country>city").unwrap();
    assert_eq!(phases.len(), 2);
    assert_eq!(phases[1].splitter, Some(Splitter::Child));
}

#[test]
fn rejects_unknown_modifier() {
    let err = parse_selectors("city:frist").unwrap_err();
    assert_eq!(err, Error::UnknownModifier("frist".to_string()));
}

#[test]
fn rejects_limit_without_argument() {
    assert!(matches!(
        parse_selectors("city:limit"),
        Err(Error::Parse(_))
    ));
}

#[test]
fn rejects_garbage() {
    assert!(matches!(parse_selectors(""), Err(Error::Parse(_))));
    assert!(matches!(parse_selectors("[]"), Err(Error::Parse(_))));
    assert!(matches!(parse_selectors(">"), Err(Error::Parse(_))));
}

#[test]
fn single_phase_from_str_rejects_chains() {
    let err = "country > city".parse::<Selector>().unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}
