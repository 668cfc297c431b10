use standout_bem::{ModifierValue, Naming, NodeKind, ResolveError, Tree};

#[test]
fn test_build_classes_end_to_end() {
    let mut tree = Tree::new();
    let test = tree.block("test");
    let node_a = tree.block("node-a");

    tree[test].add_class("js");
    tree[test].add_modifier("color", "red");
    tree[node_a].add_flag("hidden");
    tree[test].add_mix(node_a);

    assert_eq!(
        tree.build_classes(test).unwrap(),
        "test test--color_red node-a node-a--hidden js"
    );
}

#[test]
fn test_resolve_classes_end_to_end() {
    let mut tree = Tree::new();
    let test = tree.block("test");
    let node_a = tree.block("node_a");

    tree[test].add_mix(node_a);
    tree[test].add_modifier("color", "red");
    tree[test].add_class("js");

    assert_eq!(
        tree.resolve_classes(test).unwrap(),
        vec!["test", "test--color_red", "node_a", "js"]
    );
}

#[test]
fn test_resolve_mixes_classes_end_to_end() {
    let mut tree = Tree::new();
    let owner = tree.block("test");
    let node_a = tree.block("node_a");
    let node_b = tree.block("node_b");

    tree[node_a].add_modifier("color", "red").add_flag("hidden");
    tree[node_b].add_flag("0").add_flag("1");
    tree[owner].mix(node_a).mix(node_b);

    assert_eq!(
        tree.resolve_mixes_classes(owner).unwrap(),
        vec![
            "node_a",
            "node_a--color_red",
            "node_a--hidden",
            "node_b",
            "node_b--0",
            "node_b--1",
        ]
    );
}

#[test]
fn test_display_equals_build_classes() {
    let mut tree = Tree::new();
    let test = tree.block("test");
    assert_eq!(tree.display(test).to_string(), "test");

    tree[test].add_modifier("size", 3).add_class("js");
    assert_eq!(
        tree.display(test).to_string(),
        tree.build_classes(test).unwrap()
    );
}

#[test]
fn test_block_and_element_base_classes() {
    let mut tree = Tree::new();
    let block = tree.b("test");
    let elem = tree.e(block, "elem");

    assert_eq!(tree.resolve_base_class(block), "test");
    assert_eq!(tree.resolve_base_class(elem), "test__elem");
    assert_eq!(tree[elem].kind(), NodeKind::Element(block));
    assert_eq!(tree.block_of(elem), block);
}

#[test]
fn test_modifier_value_mapping() {
    let mut tree = Tree::new();
    let base = tree.block("base");
    tree[base]
        .m("on", true)
        .m("off", false)
        .m("gone", ())
        .m("tone", "dark")
        .m("level", 7);

    assert_eq!(
        tree.resolve_modifiers_classes(base),
        vec!["base--on", "base--tone_dark", "base--level_7"]
    );
    assert_eq!(tree[base].get_modifier("off"), Some(&ModifierValue::Flag(false)));
    assert_eq!(tree[base].get_modifier("gone"), Some(&ModifierValue::Null));
    assert_eq!(tree[base].get_modifier("missing"), None);
}

#[test]
fn test_first_write_wins() {
    let mut tree = Tree::new();
    let test = tree.block("test");
    tree[test].add_modifier("color", "red");
    tree[test].add_modifier("color", "blue");

    assert_eq!(
        tree[test].get_modifier("color"),
        Some(&ModifierValue::from("red"))
    );
    assert_eq!(tree.build_classes(test).unwrap(), "test test--color_red");
}

#[test]
fn test_has_and_remove_round_trip() {
    let mut tree = Tree::new();
    let test = tree.block("test");
    let other = tree.block("other");

    tree[test].add_flag("a").add_mix(other).add_class("c");
    assert!(tree[test].has_modifier("a"));
    assert!(tree[test].has_mix(other));
    assert!(tree[test].has_class("c"));

    tree[test].remove_modifier("a").remove_mix(other).remove_class("c");
    assert!(!tree[test].has_modifier("a"));
    assert!(!tree[test].has_mix(other));
    assert!(!tree[test].has_class("c"));

    let snapshot = tree[test].clone();
    tree[test].remove_modifier("a").remove_mix(other).remove_class("c");
    assert_eq!(tree[test], snapshot);
}

#[test]
fn test_set_classes_order_preserving_dedup() {
    let mut tree = Tree::new();
    let test = tree.block("test");
    tree[test].set_classes(["a", "b", "a", "c"]);
    assert_eq!(tree[test].classes(), &["a", "b", "c"]);
    assert_eq!(tree.build_classes(test).unwrap(), "test a b c");
}

#[test]
fn test_card_layout() {
    let mut tree = Tree::new();
    let card = tree.block("card");
    let title = tree.create_element(card, "title");
    let body = tree.create_element(card, "body");
    let typography = tree.block("typo");

    tree[typography].add_modifier("weight", "bold");
    tree[card].add_modifier("theme", "dark").add_flag("elevated");
    tree[title]
        .add_modifier("level", 2)
        .add_mix(typography)
        .add_class("js-title");
    tree[body].add_modifier("collapsed", false);

    assert_eq!(
        tree.build_classes(card).unwrap(),
        "card card--theme_dark card--elevated"
    );
    assert_eq!(
        tree.build_classes(title).unwrap(),
        "card__title card__title--level_2 typo typo--weight_bold js-title"
    );
    assert_eq!(tree.build_classes(body).unwrap(), "card__body");
}

#[test]
fn test_cycle_is_reported_not_overflowed() {
    let mut tree = Tree::new();
    let a = tree.block("a");
    let b = tree.block("b");
    tree[a].add_mix(b);
    tree[b].add_mix(a);

    let expected = ResolveError::CycleDetected {
        path: vec!["a".into(), "b".into(), "a".into()],
    };
    assert_eq!(tree.resolve_classes(a), Err(expected.clone()));
    assert_eq!(tree.validate(), Err(expected));
}

#[test]
fn test_naming_from_config() {
    let naming: Naming =
        serde_json::from_str(r#"{"element_separator": "-", "value_separator": "-"}"#).unwrap();
    let mut tree = Tree::with_naming(naming);
    let list = tree.block("list");
    let item = tree.create_element(list, "item");
    tree[item].add_modifier("state", "open");

    assert_eq!(
        tree.build_classes(item).unwrap(),
        "list-item list-item--state-open"
    );
}
