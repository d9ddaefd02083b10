use qlset::{
    core::{indices::KeyIndexState, store::RepeatedField},
    error::SetError,
    querylang::{QueryLang, QueryLangRecord},
    set::{QueryLangSet, SetIndex},
};
use serde_json::json;

fn tagged(name: &str, tag: &str) -> QueryLang {
    QueryLang::new(name).with_parameter("tag", tag)
}

fn tags(set: &QueryLangSet<'_>) -> Vec<String> {
    set.iter()
        .map(|q| q.parameters()["tag"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn end_to_end_append_build_reverse_delete() {
    let mut field = RepeatedField::<QueryLangRecord>::new();
    let mut set = QueryLangSet::new(&mut field);
    let a = tagged("x", "A");
    let b = tagged("y", "B");
    let c = tagged("x", "C");

    set.append(&a).unwrap();
    set.append(&b).unwrap();
    set.append(&c).unwrap();
    assert_eq!(set.len(), 3);

    set.build();
    assert_eq!(set.get_by_key("x").unwrap(), c);
    assert_eq!(set.get(1).unwrap(), b);

    set.reverse();
    assert_eq!(tags(&set), ["C", "B", "A"]);

    set.delete(1).unwrap();
    assert_eq!(tags(&set), ["C", "A"]);
    assert_eq!(set.len(), 2);
}

#[test]
fn lookup_before_build_is_key_not_found() {
    let mut field = RepeatedField::<QueryLangRecord>::new();
    let mut set = QueryLangSet::new(&mut field);
    set.append(&tagged("x", "A")).unwrap();

    assert_eq!(set.key_index().state(), KeyIndexState::Empty);
    assert_eq!(set.get_by_key("x"), Err(SetError::KeyNotFound("x".to_string())));
    assert_eq!(
        set.set_by_key("x", &tagged("x", "B")),
        Err(SetError::KeyNotFound("x".to_string()))
    );
}

#[test]
fn missing_key_after_build_is_key_not_found() {
    let mut field = RepeatedField::<QueryLangRecord>::new();
    let mut set = QueryLangSet::new(&mut field);
    set.append(&tagged("x", "A")).unwrap();
    set.build();

    assert_eq!(set.key_index().state(), KeyIndexState::Built);
    assert_eq!(set.get_by_key("nope"), Err(SetError::KeyNotFound("nope".to_string())));
}

#[test]
fn duplicate_keys_resolve_to_last_entry() {
    let mut field = RepeatedField::<QueryLangRecord>::new();
    let mut set = QueryLangSet::new(&mut field);
    for tag in ["A", "B", "C"] {
        set.append(&tagged("FilterQL", tag)).unwrap();
    }

    set.build();

    assert_eq!(set.key_index().len(), 1);
    assert_eq!(set.get_by_key("FilterQL").unwrap(), tagged("FilterQL", "C"));
}

#[test]
fn set_by_key_overwrites_in_place() {
    let mut field = RepeatedField::<QueryLangRecord>::new();
    let mut set = QueryLangSet::new(&mut field);
    set.append(&tagged("x", "A")).unwrap();
    set.append(&tagged("y", "B")).unwrap();
    set.build();

    set.set_by_key("y", &tagged("y", "Z")).unwrap();

    assert_eq!(tags(&set), ["A", "Z"]);
    assert_eq!(set.len(), 2);
}

#[test]
fn index_is_not_refreshed_by_mutations() {
    let mut field = RepeatedField::<QueryLangRecord>::new();
    let mut set = QueryLangSet::new(&mut field);
    set.append(&tagged("x", "A")).unwrap();
    set.append(&tagged("y", "B")).unwrap();
    set.build();

    set.reverse();
    // "y" still maps to position 1, which now holds the former first entry.
    assert_eq!(set.get_by_key("y").unwrap(), tagged("x", "A"));

    set.build();
    assert_eq!(set.get_by_key("y").unwrap(), tagged("y", "B"));
}

#[test]
fn clear_keeps_index_built_but_lookups_miss() {
    let mut field = RepeatedField::<QueryLangRecord>::new();
    let mut set = QueryLangSet::new(&mut field);
    set.append(&tagged("x", "A")).unwrap();
    set.build();

    set.clear();

    assert_eq!(set.key_index().state(), KeyIndexState::Built);
    assert_eq!(set.key_index().position("x"), Some(0));
    assert_eq!(set.get_by_key("x"), Err(SetError::KeyNotFound("x".to_string())));

    set.append(&tagged("y", "B")).unwrap();
    // Stale position 0 now names the new entry.
    assert_eq!(set.get_by_key("x").unwrap(), tagged("y", "B"));
}

#[test]
fn dynamic_index_dispatches_by_kind() {
    let mut field = RepeatedField::<QueryLangRecord>::new();
    let mut set = QueryLangSet::new(&mut field);
    set.append(&tagged("x", "A")).unwrap();
    set.append(&tagged("y", "B")).unwrap();
    set.build();

    assert_eq!(set.get_at(1usize).unwrap(), tagged("y", "B"));
    assert_eq!(set.get_at("x").unwrap(), tagged("x", "A"));

    let idx = SetIndex::try_from(&json!("y")).unwrap();
    set.set_at(idx, &tagged("y", "Z")).unwrap();
    let idx = SetIndex::try_from(&json!(0)).unwrap();
    set.set_at(idx, &tagged("x", "W")).unwrap();
    assert_eq!(tags(&set), ["W", "Z"]);
}

#[test]
fn dynamic_index_rejects_other_json_kinds() {
    for bad in [json!(1.5), json!(-1), json!(true), json!(null), json!([0]), json!({"k": 0})] {
        assert!(matches!(
            SetIndex::try_from(&bad),
            Err(SetError::UnsupportedIndexType(_))
        ));
    }
}
