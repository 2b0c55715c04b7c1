// Integration tests for tree building, layout and morpheme tagging

use soussou_morph::types::MorphemeKind;
use soussou_morph::{EngineConfig, LayoutConfig, LookupProvider, RuleBasedLookup, TreeBuilder};

// ============ Segment Splitting ============

#[test]
fn test_connector_splits_into_two_children() {
    let builder = TreeBuilder::default();
    let tree = builder.build(1004, Some("wúlù kérén nŭn náání"));

    let texts: Vec<&str> = tree
        .children
        .iter()
        .filter_map(|c| c.text.as_deref())
        .collect();
    assert_eq!(texts, vec!["wúlù kérén", "náání"]);
    assert_eq!(tree.text.as_deref(), Some("wúlù kérén nŭn náání"));
    assert_eq!(tree.height(), 1);
}

#[test]
fn test_no_text_gives_root_only() {
    let builder = TreeBuilder::default();
    for n in [1, 57, 9999] {
        let tree = builder.build(n, None);
        assert_eq!(tree.node_count(), 1);
        assert!(tree.is_leaf());
        assert_eq!(tree.value, n);
    }
}

#[test]
fn test_malformed_text_never_fails() {
    let builder = TreeBuilder::default();

    let tree = builder.build(5, Some("súlí"));
    assert_eq!(tree.children.len(), 1);

    let tree = builder.build(5, Some("nŭn"));
    assert!(tree.children.is_empty());
    assert_eq!(tree.text.as_deref(), Some("nŭn"));

    let tree = builder.build(5, Some("xyz nŭn nŭn"));
    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].tokens[0].kind, MorphemeKind::Unknown);
}

#[test]
fn test_children_are_leaves() {
    let builder = TreeBuilder::default();
    let rules = RuleBasedLookup::default();
    for n in (1..=9999).step_by(37) {
        let text = rules.lookup(n);
        let tree = builder.build(n, text.as_deref());
        assert!(tree.children.iter().all(|c| c.is_leaf()));
        assert!(tree.height() <= 1);
    }
}

#[test]
fn test_child_values_sum_over_full_range() {
    let builder = TreeBuilder::default();
    let rules = RuleBasedLookup::default();
    for n in 1..=9999 {
        let tree = builder.build(n, rules.lookup(n).as_deref());
        let sum: u32 = tree.children.iter().map(|c| c.value).sum();
        assert_eq!(sum, n, "child values of {} do not sum back", n);
    }
}

// ============ Layout ============

#[test]
fn test_layout_is_deterministic() {
    let builder = TreeBuilder::default();
    let a = builder.build(35, Some("tòngó sàxán nŭn súlí"));
    let b = builder.build(35, Some("tòngó sàxán nŭn súlí"));
    assert_eq!(a, b);
}

#[test]
fn test_single_child_sits_under_root() {
    let builder = TreeBuilder::default();
    let tree = builder.build(200, Some("k̀ɛḿɛ fírín"));
    assert_eq!(tree.children[0].position.x, tree.position.x);
    assert_eq!(tree.children[0].position.y, tree.position.y + 90.0);
}

#[test]
fn test_custom_layout() {
    let mut config = EngineConfig::default();
    config.layout = LayoutConfig {
        root_x: 0.0,
        root_y: 0.0,
        level_height: 50.0,
        spread: 100.0,
        min_spacing: 80.0,
    };
    let builder = TreeBuilder::new(&config);
    let tree = builder.build(11, Some("fuú nŭn kérén"));

    // 100 / 2 = 50, raised to the 80 floor
    assert_eq!(tree.children[0].position.x, -40.0);
    assert_eq!(tree.children[1].position.x, 40.0);
    assert_eq!(tree.children[1].position.y, 50.0);
}

#[test]
fn test_custom_connector() {
    let mut config = EngineConfig::default();
    config.connector = "and".to_string();
    let builder = TreeBuilder::new(&config);
    let tree = builder.build(21, Some("twenty and one"));
    assert_eq!(tree.children.len(), 2);
    assert_eq!(tree.children[0].value, 20);
    assert_eq!(tree.children[1].value, 1);
}

// ============ Morpheme Tagging ============

#[test]
fn test_root_tokens_include_connector() {
    let builder = TreeBuilder::default();
    let tree = builder.build(1234, Some("wúlù kérén k̀ɛḿɛ fírín tòngó sàxán nŭn náání"));
    let kinds: Vec<MorphemeKind> = tree.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            MorphemeKind::Thousand,
            MorphemeKind::Unit(1),
            MorphemeKind::Hundred,
            MorphemeKind::Unit(2),
            MorphemeKind::TenFormer,
            MorphemeKind::Unit(3),
            MorphemeKind::Connector,
            MorphemeKind::Unit(4),
        ]
    );
}
