use std::fs;
use tempfile::TempDir;
use truth_table::{truth_table, Expr, Notation, TableFormat};

#[test]
fn test_table_file_matches_string() {
    let table = truth_table("A ^ B").unwrap();
    let dir = TempDir::new().unwrap();

    for (format, name) in [
        (TableFormat::Text, "table.txt"),
        (TableFormat::Csv, "table.csv"),
        (TableFormat::Markdown, "table.md"),
    ] {
        let path = dir.path().join(name);
        table.to_table_file(&path, format).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, table.to_table_string(format).unwrap());
        assert_eq!(written.lines().count(), 6);
    }
}

#[test]
fn test_csv_content() {
    let table = truth_table("P >> Q").unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("implication.csv");

    table.to_table_file(&path, TableFormat::Csv).unwrap();
    let written = fs::read_to_string(&path).unwrap();

    assert_eq!(
        written,
        "P,Q,Result\n\
         False,False,True\n\
         False,True,True\n\
         True,False,False\n\
         True,True,True\n"
    );
}

#[test]
fn test_write_into_missing_directory_fails() {
    let table = truth_table("A").unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("table.txt");

    assert!(table.to_table_file(&path, TableFormat::Text).is_err());
}

#[test]
fn test_renderings() {
    let expr = Expr::parse("A & (B | C)").unwrap();
    assert_eq!(expr.render(Notation::Ascii), "A & (B | C)");
    assert_eq!(expr.render(Notation::Unicode), "A ∧ (B ∨ C)");
    assert_eq!(
        expr.render(Notation::Latex),
        r"A \wedge \left(B \vee C\right)"
    );
}

#[test]
fn test_tree_and_dot() {
    let expr = Expr::parse("~(P ^ Q) | R").unwrap();
    assert_eq!(expr.count_operators(), 3);

    let tree = expr.build_tree();
    assert_eq!(tree.len(), 6);
    assert_eq!(tree.edges().len(), 5);
    for (id, node) in tree.nodes().iter().enumerate() {
        assert_eq!(node.id, id);
    }
    assert_eq!(tree.root().label, "OR");

    let dot = tree.to_dot().unwrap();
    assert!(dot.starts_with("digraph expression {"));
    assert!(dot.contains("n0 -> n1;"));
    assert!(dot.trim_end().ends_with('}'));
}
