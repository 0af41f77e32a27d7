//! Indentation of rendered text recovers the structural depth of the tree.

use config::constants::INDENT_WIDTH;
use eo_tree::{CopyExpr, Dot, EoNode};

/// Builds a tree whose lines record their own depth in their names:
/// `d0`, then its arguments `d1`, and so on.
fn tree(depth: usize, max: usize, fanout: usize) -> Box<dyn EoNode> {
    let target = Box::new(Dot::name(format!("d{depth}")));
    if depth == max {
        return target;
    }
    let args = (0..fanout).map(|_| tree(depth + 1, max, fanout)).collect();
    Box::new(CopyExpr::new(target, args))
}

fn leading_levels(line: &str) -> usize {
    let spaces = line.len() - line.trim_start_matches(' ').len();
    assert_eq!(spaces % INDENT_WIDTH, 0, "misaligned line {line:?}");
    spaces / INDENT_WIDTH
}

#[test]
fn indentation_matches_depth() {
    for base in 0..3 {
        for max in 0..4 {
            let rendered = tree(0, max, 2).render(base);
            for line in rendered.lines() {
                let depth: usize = line.trim_start()[1..].parse().unwrap();
                assert_eq!(leading_levels(line), base + depth, "{rendered}");
            }
        }
    }
}

#[test]
fn dot_suffix_keeps_depths() {
    let chained = Dot::with_src(tree(0, 2, 2), "field");
    let rendered = chained.render(1);
    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some("  d0.field"));
    for line in lines {
        let depth: usize = line.trim_start()[1..].parse().unwrap();
        assert_eq!(leading_levels(line), 1 + depth);
    }
}

#[test]
fn line_count_matches_node_count() {
    // 1 + 3 + 9 nodes
    let rendered = tree(0, 2, 3).render(0);
    assert_eq!(rendered.lines().count(), 13);
}
