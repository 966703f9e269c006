use digger_search::model::QueryNode;
use digger_search::simple::{SimpleContainer, node};

fn cities() -> SimpleContainer {
    SimpleContainer::new(vec![
        node("region")
            .child(node("city").id("c1").class("south"))
            .child(node("city").id("c2").class("south"))
            .child(node("city").id("c3").class("south"))
            .child(node("city").id("c4").class("north"))
            .build(),
    ])
}

fn ids(container: &SimpleContainer) -> Vec<String> {
    container
        .nodes()
        .iter()
        .map(|n| n.id().unwrap_or("?").to_string())
        .collect()
}

#[test]
fn unmodified_search_returns_all_matches_in_order() {
    let found = cities().find("city.south").unwrap();
    assert_eq!(ids(&found), vec!["c1", "c2", "c3"]);
}

#[test]
fn first_collapses_to_the_first_match() {
    let found = cities().find("city.south:first").unwrap();
    assert_eq!(ids(&found), vec!["c1"]);
}

#[test]
fn last_collapses_to_the_last_match() {
    let found = cities().find("city.south:last").unwrap();
    assert_eq!(ids(&found), vec!["c3"]);
}

#[test]
fn first_and_last_are_noops_on_no_matches() {
    let tree = cities();
    assert!(tree.find("village:first").unwrap().is_empty());
    assert!(tree.find("village:last").unwrap().is_empty());
}

#[test]
fn limit_count_keeps_the_prefix() {
    let found = cities().find("city.south:limit(2)").unwrap();
    assert_eq!(ids(&found), vec!["c1", "c2"]);

    let found = cities().find("city.south:limit(9)").unwrap();
    assert_eq!(ids(&found), vec!["c1", "c2", "c3"]);
}

#[test]
fn limit_range_is_half_open() {
    let found = cities().find("city.south:limit(1,3)").unwrap();
    assert_eq!(ids(&found), vec!["c2", "c3"]);

    let found = cities().find("city.south:limit(0,2)").unwrap();
    assert_eq!(ids(&found), vec!["c1", "c2"]);
}

#[test]
fn limit_combines_with_last() {
    // limit slices first, then last collapses the sliced set
    let found = cities().find("city.south:limit(2):last").unwrap();
    assert_eq!(ids(&found), vec!["c2"]);
}

#[test]
fn each_search_returns_a_fresh_container() {
    let tree = cities();
    let a = tree.find("city.south:first").unwrap();
    let b = tree.find("city.south").unwrap();
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 3);
    // the source container is untouched
    assert_eq!(tree.find("city").unwrap().len(), 4);
}
