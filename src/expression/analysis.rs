//! Structural analysis: operator counts, statistics and tree descriptions
//!
//! The tree description is a flat list of labelled nodes plus parent→child edges, so
//! any external renderer can draw it. [`TreeDescription::to_dot`] renders it in DOT
//! format, which can be visualised with Graphviz tools like `dot`.

use super::{Expr, ExprNode};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of an expression tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    /// A variable
    Symbol,
    /// A constant
    Constant,
    /// Logical NOT
    Not,
    /// Logical AND
    And,
    /// Logical OR
    Or,
    /// Implication
    Implies,
    /// Exclusive OR
    Xor,
}

impl NodeKind {
    /// Whether nodes of this kind are operators (as opposed to leaves)
    pub fn is_operator(self) -> bool {
        !matches!(self, NodeKind::Symbol | NodeKind::Constant)
    }

    /// Upper-case operator name, as used for tree labels
    pub fn operator_name(self) -> Option<&'static str> {
        match self {
            NodeKind::Symbol | NodeKind::Constant => None,
            NodeKind::Not => Some("NOT"),
            NodeKind::And => Some("AND"),
            NodeKind::Or => Some("OR"),
            NodeKind::Implies => Some("IMPLIES"),
            NodeKind::Xor => Some("XOR"),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Symbol => write!(f, "symbol"),
            NodeKind::Constant => write!(f, "constant"),
            other => write!(f, "{}", other.operator_name().unwrap_or_default()),
        }
    }
}

/// Summary statistics of an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprStats {
    /// Number of operator nodes
    pub operators: usize,
    /// Number of distinct variables
    pub variables: usize,
    /// Number of leaf nodes (variable occurrences and constants)
    pub leaves: usize,
    /// Length of the longest root-to-leaf path, counted in nodes
    pub depth: usize,
    /// Operator nodes per kind
    pub operator_counts: BTreeMap<NodeKind, usize>,
}

/// A node of a [`TreeDescription`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Unique identifier, equal to the node's position in pre-order
    pub id: usize,
    /// Operator name (`AND`, `OR`, `NOT`, `IMPLIES`, `XOR`), variable name, or `True`/`False`
    pub label: String,
    /// Kind of the node
    pub kind: NodeKind,
}

/// A labelled tree structure for rendering an expression
///
/// Nodes are listed in pre-order; node `0` is the root. Each edge is a
/// `(parent, child)` pair of node ids, children in left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeDescription {
    nodes: Vec<TreeNode>,
    edges: Vec<(usize, usize)>,
}

impl TreeDescription {
    /// All nodes, in pre-order
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// All `(parent, child)` edges
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// The root node
    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }

    /// Look up a node by id
    pub fn node(&self, id: usize) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// Ids of the children of a node, in left-to-right order
    pub fn children(&self, id: usize) -> Vec<usize> {
        self.edges
            .iter()
            .filter(|(parent, _)| *parent == id)
            .map(|&(_, child)| child)
            .collect()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Render the tree in DOT (Graphviz) format
    ///
    /// Operators are drawn as ellipses, variables as boxes and constants as plain text.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_table::Expr;
    ///
    /// let tree = Expr::parse("~A").unwrap().build_tree();
    /// let dot = tree.to_dot().unwrap();
    /// assert!(dot.starts_with("digraph expression {"));
    /// assert!(dot.contains("n0 -> n1;"));
    /// // Write to file and render with: dot -Tpng tree.dot -o tree.png
    /// ```
    pub fn to_dot(&self) -> Result<String, fmt::Error> {
        use std::fmt::Write as _;

        let mut dot = String::new();
        writeln!(dot, "digraph expression {{")?;
        writeln!(dot, "node [fontname=\"Helvetica\"];")?;
        for node in &self.nodes {
            let shape = match node.kind {
                NodeKind::Symbol => "box",
                NodeKind::Constant => "plaintext",
                _ => "ellipse",
            };
            writeln!(
                dot,
                "n{} [label=\"{}\", shape={}];",
                node.id,
                escape_label(&node.label),
                shape
            )?;
        }
        for (parent, child) in &self.edges {
            writeln!(dot, "n{} -> n{};", parent, child)?;
        }
        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

impl Expr {
    /// The kind of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Symbol(_) => NodeKind::Symbol,
            Expr::Constant(_) => NodeKind::Constant,
            Expr::Not(_) => NodeKind::Not,
            Expr::And(_) => NodeKind::And,
            Expr::Or(_) => NodeKind::Or,
            Expr::Implies(..) => NodeKind::Implies,
            Expr::Xor(_) => NodeKind::Xor,
        }
    }

    /// Count operator nodes (NOT, AND, OR, IMPLIES, XOR), including nested ones
    ///
    /// A bare variable or constant counts 0. An n-ary node counts once no matter
    /// how many children it has.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_table::Expr;
    ///
    /// assert_eq!(Expr::symbol("A").count_operators(), 0);
    /// assert_eq!(Expr::parse("A & (B | C)").unwrap().count_operators(), 2);
    /// ```
    pub fn count_operators(&self) -> usize {
        self.fold::<usize, _>(|node| match node {
            ExprNode::Symbol(_) | ExprNode::Constant(_) => 0,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::Implies(l, r) => l + r + 1,
            ExprNode::And(children) | ExprNode::Or(children) | ExprNode::Xor(children) => {
                children.iter().sum::<usize>() + 1
            }
        })
    }

    /// Count distinct variables
    pub fn count_variables(&self) -> usize {
        self.variables().len()
    }

    /// Length of the longest root-to-leaf path, counted in nodes
    pub fn depth(&self) -> usize {
        self.fold::<usize, _>(|node| match node {
            ExprNode::Symbol(_) | ExprNode::Constant(_) => 1,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::Implies(l, r) => l.max(r) + 1,
            ExprNode::And(children) | ExprNode::Or(children) | ExprNode::Xor(children) => {
                children.into_iter().max().unwrap_or(0) + 1
            }
        })
    }

    /// Collect summary statistics
    pub fn stats(&self) -> ExprStats {
        let mut operator_counts = BTreeMap::new();
        let mut leaves = 0;
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            let kind = expr.kind();
            if kind.is_operator() {
                *operator_counts.entry(kind).or_insert(0) += 1;
            } else {
                leaves += 1;
            }
            stack.extend(expr.children());
        }

        ExprStats {
            operators: operator_counts.values().sum(),
            variables: self.count_variables(),
            leaves,
            depth: self.depth(),
            operator_counts,
        }
    }

    /// Build a labelled tree description for external rendering
    ///
    /// Every node is visited exactly once, in pre-order, and its id is its visiting
    /// position, so ids are unique and run from `0` to `len() - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_table::Expr;
    ///
    /// let tree = Expr::parse("A & (B | C)").unwrap().build_tree();
    /// let labels: Vec<&str> = tree.nodes().iter().map(|n| n.label.as_str()).collect();
    /// assert_eq!(labels, vec!["AND", "A", "OR", "B", "C"]);
    /// assert_eq!(tree.edges(), &[(0, 1), (0, 2), (2, 3), (2, 4)]);
    /// ```
    pub fn build_tree(&self) -> TreeDescription {
        let mut tree = TreeDescription {
            nodes: Vec::new(),
            edges: Vec::new(),
        };
        self.describe_into(&mut tree, None);
        tree
    }

    fn describe_into(&self, tree: &mut TreeDescription, parent: Option<usize>) {
        let id = tree.nodes.len();
        let kind = self.kind();
        let label = match self {
            Expr::Symbol(symbol) => symbol.to_string(),
            Expr::Constant(value) => (if *value { "True" } else { "False" }).to_string(),
            _ => kind.operator_name().unwrap_or_default().to_string(),
        };
        tree.nodes.push(TreeNode { id, label, kind });
        if let Some(parent) = parent {
            tree.edges.push((parent, id));
        }
        for child in self.children() {
            child.describe_into(tree, Some(id));
        }
    }
}

/// Escape a label for a DOT quoted string; backslashes first, then quotes
fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Symbol;
    use std::collections::BTreeSet;
    use std::sync::Arc;

    #[test]
    fn test_count_operators() {
        assert_eq!(Expr::symbol("A").count_operators(), 0);
        assert_eq!(Expr::constant(true).count_operators(), 0);
        assert_eq!(Expr::parse("A & (B | C)").unwrap().count_operators(), 2);
        assert_eq!(Expr::parse("(P >> Q) & ~Q").unwrap().count_operators(), 3);
        assert_eq!(Expr::parse("~(A | B) >> C").unwrap().count_operators(), 3);
        assert_eq!(Expr::parse("~~A").unwrap().count_operators(), 2);
        // A chain is one n-ary node
        assert_eq!(Expr::parse("A & B & C").unwrap().count_operators(), 1);
    }

    #[test]
    fn test_stats() {
        let stats = Expr::parse("(P >> Q) & ~Q").unwrap().stats();
        assert_eq!(stats.operators, 3);
        assert_eq!(stats.variables, 2);
        assert_eq!(stats.leaves, 3);
        assert_eq!(stats.depth, 3);
        assert_eq!(stats.operator_counts.get(&NodeKind::And), Some(&1));
        assert_eq!(stats.operator_counts.get(&NodeKind::Implies), Some(&1));
        assert_eq!(stats.operator_counts.get(&NodeKind::Not), Some(&1));
        assert_eq!(stats.operator_counts.get(&NodeKind::Or), None);
    }

    #[test]
    fn test_depth() {
        assert_eq!(Expr::symbol("A").depth(), 1);
        assert_eq!(Expr::parse("~(A | (B & ~C))").unwrap().depth(), 5);
    }

    #[test]
    fn test_tree_visits_every_node_once() {
        let expr = Expr::parse("~(A | B) >> (C ^ A ^ True)").unwrap();
        let tree = expr.build_tree();

        // IMPLIES, NOT, OR, A, B, XOR, C, A, True
        assert_eq!(tree.len(), 9);
        let ids: BTreeSet<usize> = tree.nodes().iter().map(|n| n.id).collect();
        assert_eq!(ids, (0..9).collect());
        assert_eq!(tree.edges().len(), tree.len() - 1);

        assert_eq!(tree.root().label, "IMPLIES");
        assert_eq!(tree.children(0), vec![1, 5]);
        assert_eq!(tree.children(5), vec![6, 7, 8]);
        assert_eq!(tree.node(8).map(|n| n.kind), Some(NodeKind::Constant));

        let operators = tree.nodes().iter().filter(|n| n.kind.is_operator()).count();
        assert_eq!(operators, expr.count_operators());
    }

    #[test]
    fn test_single_node_tree() {
        let tree = Expr::symbol("X").build_tree();
        assert_eq!(tree.len(), 1);
        assert!(tree.edges().is_empty());
        assert_eq!(tree.root().kind, NodeKind::Symbol);
    }

    #[test]
    fn test_dot_output() {
        let dot = Expr::parse("A & ~B").unwrap().build_tree().to_dot().unwrap();
        assert!(dot.contains("n0 [label=\"AND\", shape=ellipse];"));
        assert!(dot.contains("n1 [label=\"A\", shape=box];"));
        assert!(dot.contains("n2 -> n3;"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_dot_escapes_labels() {
        assert_eq!(escape_label(r#"a\b"c"#), r#"a\\b\"c"#);
        assert_eq!(escape_label(r"end\"), r"end\\");

        let name: Arc<str> = Arc::from(r#"x\"y"#);
        let odd = Expr::Symbol(Symbol::from(name));
        let dot = odd.build_tree().to_dot().unwrap();
        assert!(dot.contains(r#"n0 [label="x\\\"y", shape=box];"#));
    }
}
