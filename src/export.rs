//! Textual inspection and export of graph state.
//!
//! The TikZ exporter emits one `\node` declaration per node and one
//! `\draw` connector per stored edge, suitable for pasting into a LaTeX
//! document. Output is a pure function of graph state: identical insertion
//! histories produce byte-identical text. Coordinates are emitted literally
//! with no escaping or round-trip contract.

use crate::graph::SpringGraph;

/// Render the graph as a TikZ picture.
///
/// `node_settings` is appended verbatim to every node declaration (for
/// example `[circle,draw]`); pass `""` for bare nodes. Nodes appear in
/// insertion order, edges in canonical storage order (owner node first).
///
/// Coordinates use Rust's shortest float form, so whole values render as
/// `-10` rather than `-10.0`. TikZ accepts both; only the exact text of a
/// declaration differs for whole-number coordinates.
pub fn to_tikz(graph: &SpringGraph, node_settings: &str) -> String {
    let mut out = String::new();
    out.push_str("\\begin{tikzpicture}\n");
    out.push_str("    % the nodes\n");
    for (i, position) in graph.positions().iter().enumerate() {
        out.push_str(&format!(
            "    \\node (n{i}){node_settings} at {position} {{ }} ;\n"
        ));
    }
    out.push_str("    % the edges\n");
    for (owner, older) in graph.edges() {
        out.push_str(&format!(
            "    \\draw (n{}) -- (n{}) ;\n",
            owner.raw(),
            older.raw()
        ));
    }
    out.push_str("\\end{tikzpicture}\n");
    out
}

/// Dump node positions, one `(x,y)` line per node in insertion order.
///
/// Debugging aid only; the format carries no parsing contract.
pub fn dump_positions(graph: &SpringGraph) -> String {
    let mut out = String::new();
    for position in graph.positions() {
        out.push_str(&format!("{position}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    fn triangle_with_tail() -> SpringGraph {
        let mut g = SpringGraph::new();
        let a = g.insert_node(Vec2::new(-10.0, 0.0));
        let b = g.insert_node(Vec2::new(10.0, 0.0));
        let c = g.insert_node(Vec2::new(0.0, 5.0));
        g.insert_edge(a, b).unwrap();
        g.insert_edge(c, a).unwrap();
        g
    }

    #[test]
    fn test_tikz_snapshot() {
        let g = triangle_with_tail();
        insta::assert_snapshot!(to_tikz(&g, ""), @r"
        \begin{tikzpicture}
            % the nodes
            \node (n0) at (-10,0) { } ;
            \node (n1) at (10,0) { } ;
            \node (n2) at (0,5) { } ;
            % the edges
            \draw (n1) -- (n0) ;
            \draw (n2) -- (n0) ;
        \end{tikzpicture}
        ");
    }

    #[test]
    fn test_tikz_node_settings_are_appended() {
        let mut g = SpringGraph::new();
        g.insert_node(Vec2::new(1.0, 2.0));

        let out = to_tikz(&g, "[circle,draw]");
        assert!(out.contains("\\node (n0)[circle,draw] at (1,2) { } ;"));
    }

    #[test]
    fn test_tikz_empty_graph() {
        let g = SpringGraph::new();
        let out = to_tikz(&g, "");
        assert!(out.starts_with("\\begin{tikzpicture}\n"));
        assert!(out.ends_with("\\end{tikzpicture}\n"));
        assert!(!out.contains("\\node"));
        assert!(!out.contains("\\draw"));
    }

    #[test]
    fn test_tikz_is_deterministic() {
        let a = to_tikz(&triangle_with_tail(), "");
        let b = to_tikz(&triangle_with_tail(), "");
        assert_eq!(a, b);
    }

    #[test]
    fn test_dump_positions() {
        let mut g = SpringGraph::new();
        g.insert_node(Vec2::new(-10.0, 0.0));
        g.insert_node(Vec2::new(0.25, -3.0));

        assert_eq!(dump_positions(&g), "(-10,0)\n(0.25,-3)\n");
    }
}
