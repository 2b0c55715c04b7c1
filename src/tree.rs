// Soussou Morph Tree Builder
// Splits canonical text around the connector and lays the segments out as a tree

use crate::config::{EngineConfig, LayoutConfig};
use crate::decompose::{decompose_digits, tier_values};
use crate::lexicon::{tag_morphemes, Lexicon};
use crate::types::{MorphologicalNode, NodePosition};

/// Split text on the connector, trimming segments and dropping empty ones
///
/// # Examples
/// ```
/// # use soussou_morph::tree::split_segments;
/// let segments = split_segments("wúlù kérén nŭn náání", "nŭn");
/// assert_eq!(segments, vec!["wúlù kérén", "náání"]);
/// ```
pub fn split_segments<'t>(text: &'t str, connector: &str) -> Vec<&'t str> {
    if connector.is_empty() {
        let trimmed = text.trim();
        return if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed]
        };
    }

    text.split(connector)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Flat whitespace tokens of every segment, in order
pub fn flat_tokens<'t>(text: &'t str, connector: &str) -> Vec<&'t str> {
    split_segments(text, connector)
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect()
}

/// Horizontal distance between siblings
///
/// Shrinks as the sibling count grows but never drops below
/// `min_spacing`, so labels never collide.
#[inline]
pub fn sibling_spacing(count: usize, layout: &LayoutConfig) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (layout.spread / count as f64).max(layout.min_spacing)
}

/// Builds decomposition trees with layout coordinates
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    connector: String,
    layout: LayoutConfig,
    lexicon: Lexicon,
}

impl TreeBuilder {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            connector: config.connector.clone(),
            layout: config.layout,
            lexicon: config.lexicon.clone(),
        }
    }

    /// Build the tree for a number and its canonical text
    ///
    /// Absent or blank text yields a root-only tree. Text without the
    /// connector yields a single child. Never fails.
    pub fn build(&self, number: u32, canonical_text: Option<&str>) -> MorphologicalNode {
        let text = canonical_text.map(str::trim).filter(|t| !t.is_empty());

        let mut root = MorphologicalNode::leaf(
            number,
            text.map(str::to_string),
            text.map(|t| tag_morphemes(t, &self.lexicon, &self.connector))
                .unwrap_or_default(),
            0,
        );

        if let Some(text) = text {
            let segments = split_segments(text, &self.connector);
            let values = segment_values(number, segments.len());
            root.children = segments
                .iter()
                .zip(values)
                .map(|(segment, value)| {
                    MorphologicalNode::leaf(
                        value,
                        Some(segment.to_string()),
                        tag_morphemes(segment, &self.lexicon, &self.connector),
                        1,
                    )
                })
                .collect();
        }

        self.layout(&mut root);
        root
    }

    /// Assign coordinates to a whole tree, root at the configured anchor
    pub fn layout(&self, root: &mut MorphologicalNode) {
        root.position = NodePosition {
            x: self.layout.root_x,
            y: self.layout.root_y,
        };
        self.layout_children(root);
    }

    fn layout_children(&self, parent: &mut MorphologicalNode) {
        let count = parent.children.len();
        if count == 0 {
            return;
        }

        let spacing = sibling_spacing(count, &self.layout);
        let start_x = parent.position.x - spacing * (count - 1) as f64 / 2.0;
        let y = parent.position.y + self.layout.level_height;

        for (idx, child) in parent.children.iter_mut().enumerate() {
            child.level = parent.level + 1;
            child.position = NodePosition {
                x: start_x + spacing * idx as f64,
                y,
            };
            self.layout_children(child);
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

/// Numeric value carried by each of `count` segments, left to right
///
/// Segments are matched to non-zero tiers from the right: the last segment
/// takes the lowest tier value, the one before it the next, and so on. The
/// leftmost segment takes whatever remains, so values always sum to
/// `number`. Segments beyond the tier count take 0.
fn segment_values(number: u32, count: usize) -> Vec<u32> {
    if count == 0 {
        return Vec::new();
    }

    let mut ascending = decompose_digits(number)
        .map(|m| tier_values(&m))
        .unwrap_or_default();
    ascending.reverse();

    let mut values = vec![0u32; count];
    let mut assigned = 0u32;
    for from_right in 0..count - 1 {
        let value = ascending.get(from_right).copied().unwrap_or(0);
        values[count - 1 - from_right] = value;
        assigned += value;
    }
    values[0] = number.saturating_sub(assigned);
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MorphemeKind;

    #[test]
    fn test_split_drops_empty_segments() {
        assert_eq!(
            split_segments(" nŭn fuú nŭn  nŭn kérén nŭn ", "nŭn"),
            vec!["fuú", "kérén"]
        );
        assert!(split_segments("   ", "nŭn").is_empty());
        assert_eq!(split_segments("k̀ɛḿɛ", "nŭn"), vec!["k̀ɛḿɛ"]);
    }

    #[test]
    fn test_flat_tokens() {
        assert_eq!(
            flat_tokens("tòngó sàxán nŭn  súlí", "nŭn"),
            vec!["tòngó", "sàxán", "súlí"]
        );
    }

    #[test]
    fn test_segment_values() {
        assert_eq!(segment_values(1004, 2), vec![1000, 4]);
        assert_eq!(segment_values(1234, 2), vec![1230, 4]);
        assert_eq!(segment_values(11, 2), vec![10, 1]);
        assert_eq!(segment_values(100, 1), vec![100]);
        // more segments than tiers
        assert_eq!(segment_values(5, 3), vec![0, 0, 5]);
        assert!(segment_values(42, 0).is_empty());
    }

    #[test]
    fn test_spacing_has_floor() {
        let layout = LayoutConfig::default();
        assert_eq!(sibling_spacing(0, &layout), 0.0);
        assert_eq!(sibling_spacing(2, &layout), 300.0);
        assert_eq!(sibling_spacing(4, &layout), 150.0);
        assert_eq!(sibling_spacing(10, &layout), layout.min_spacing);
    }

    #[test]
    fn test_build_two_segments() {
        let builder = TreeBuilder::default();
        let tree = builder.build(1004, Some("wúlù kérén nŭn náání"));

        assert_eq!(tree.value, 1004);
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].text.as_deref(), Some("wúlù kérén"));
        assert_eq!(tree.children[1].text.as_deref(), Some("náání"));
        assert_eq!(tree.children[0].value, 1000);
        assert_eq!(tree.children[1].value, 4);
        assert!(tree.children.iter().all(|c| c.is_leaf() && c.level == 1));

        assert_eq!(tree.children[0].tokens[0].kind, MorphemeKind::Thousand);
        assert_eq!(tree.children[1].tokens[0].kind, MorphemeKind::Unit(4));
    }

    #[test]
    fn test_build_without_text() {
        let builder = TreeBuilder::default();
        for text in [None, Some(""), Some("   ")] {
            let tree = builder.build(42, text);
            assert_eq!(tree.node_count(), 1);
            assert!(tree.children.is_empty());
            assert_eq!(tree.text, None);
        }
    }

    #[test]
    fn test_build_without_connector() {
        let builder = TreeBuilder::default();
        let tree = builder.build(300, Some("k̀ɛḿɛ sàxán"));
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].text.as_deref(), Some("k̀ɛḿɛ sàxán"));
        assert_eq!(tree.children[0].value, 300);
    }

    #[test]
    fn test_layout_positions() {
        let builder = TreeBuilder::default();
        let layout = LayoutConfig::default();
        let tree = builder.build(11, Some("fuú nŭn kérén"));

        assert_eq!(tree.position, NodePosition { x: 400.0, y: 40.0 });
        assert_eq!(tree.children[0].position, NodePosition { x: 250.0, y: 130.0 });
        assert_eq!(tree.children[1].position, NodePosition { x: 550.0, y: 130.0 });

        // siblings centred on the parent
        let mid = (tree.children[0].position.x + tree.children[1].position.x) / 2.0;
        assert_eq!(mid, tree.position.x);
        assert_eq!(
            tree.children[1].position.y - tree.position.y,
            layout.level_height
        );
    }

    #[test]
    fn test_layout_recurses_into_deeper_levels() {
        let builder = TreeBuilder::default();
        let mut tree = builder.build(1234, Some("wúlù kérén k̀ɛḿɛ fírín tòngó sàxán nŭn náání"));
        let grandchildren: Vec<MorphologicalNode> = ["wúlù kérén", "k̀ɛḿɛ fírín", "tòngó sàxán"]
            .iter()
            .map(|t| MorphologicalNode::leaf(0, Some(t.to_string()), vec![], 0))
            .collect();
        tree.children[0].children = grandchildren;

        builder.layout(&mut tree);

        let first = &tree.children[0];
        assert_eq!(first.children.len(), 3);
        for (idx, gc) in first.children.iter().enumerate() {
            assert_eq!(gc.level, 2);
            assert_eq!(gc.position.y, first.position.y + 90.0);
            if idx > 0 {
                let gap = gc.position.x - first.children[idx - 1].position.x;
                assert_eq!(gap, 200.0);
            }
        }
        assert_eq!(first.children[1].position.x, first.position.x);
    }

    #[test]
    fn test_many_siblings_never_overlap() {
        let builder = TreeBuilder::default();
        let text = (0..12).map(|_| "kérén").collect::<Vec<_>>().join(" nŭn ");
        let tree = builder.build(9999, Some(&text));
        assert_eq!(tree.children.len(), 12);
        for pair in tree.children.windows(2) {
            assert!(pair[1].position.x - pair[0].position.x >= LayoutConfig::default().min_spacing);
        }
    }

    #[test]
    fn test_child_values_sum_to_root() {
        let builder = TreeBuilder::default();
        let tree = builder.build(2519, Some("wúlù fírín k̀ɛḿɛ súlí nŭn fuú nŭn sólómánáání"));
        let sum: u32 = tree.children.iter().map(|c| c.value).sum();
        assert_eq!(sum, 2519);
        assert_eq!(tree.children.len(), 3);
        assert_eq!(tree.children[2].value, 9);
        assert_eq!(tree.children[1].value, 10);
        assert_eq!(tree.children[0].value, 2500);
    }
}
