use truth_table::{
    generate_table, parse, truth_table, truth_table_with_config, Expr, ExpressionParseError,
    TableConfig, TableError, TruthTable, TruthTableError,
};

fn row_of(table: &TruthTable, values: &[bool]) -> bool {
    table
        .rows()
        .iter()
        .find(|row| row.values() == values)
        .map(|row| row.result())
        .expect("row present")
}

#[test]
fn test_table_dimensions() {
    for input in ["A", "A | B", "A & (B | C)", "(A ^ B) >> (C & D)", "x1 & x2 & x3 & x4 & x5"] {
        let expr = parse(input).unwrap();
        let vars = expr.variables().len();
        let table = generate_table(&expr).unwrap();

        assert_eq!(table.num_rows(), 1 << vars, "{}", input);
        assert_eq!(table.num_columns(), vars + 1, "{}", input);
        assert_eq!(table.columns().last().map(String::as_str), Some("Result"));
    }
}

#[test]
fn test_and_row_order() {
    let table = truth_table("A & B").unwrap();
    let rows: Vec<(bool, bool, bool)> = table
        .rows()
        .iter()
        .map(|r| (r.values()[0], r.values()[1], r.result()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (false, false, false),
            (false, true, false),
            (true, false, false),
            (true, true, true),
        ]
    );
}

#[test]
fn test_and_of_or_scenario() {
    let table = truth_table("A & (B | C)").unwrap();
    assert_eq!(table.columns(), vec!["A", "B", "C", "Result"]);
    assert!(row_of(&table, &[true, false, true]));
    assert!(!row_of(&table, &[false, true, true]));
    assert_eq!(table.minterms(), vec![5, 6, 7]);
}

#[test]
fn test_modus_tollens_scenario() {
    let unicode = parse("(P → Q) ∧ ¬Q").unwrap();
    let ascii = parse("(P >> Q) & ~Q").unwrap();
    assert_eq!(unicode, ascii);

    let table = generate_table(&unicode).unwrap();
    assert!(!row_of(&table, &[true, true]));
    assert!(row_of(&table, &[false, false]));
    assert_eq!(table, generate_table(&ascii).unwrap());
}

#[test]
fn test_invalid_inputs() {
    match parse("A +") {
        Err(ExpressionParseError::InvalidSyntax { input, .. }) => assert_eq!(&*input, "A +"),
        other => panic!("expected InvalidSyntax, got {:?}", other),
    }
    match parse("A + 1") {
        Err(ExpressionParseError::NotBoolean { fragment, .. }) => {
            assert_eq!(&*fragment, "A + 1")
        }
        other => panic!("expected NotBoolean, got {:?}", other),
    }
    assert!(parse("").is_err());
    assert!(parse("(A & B").is_err());
    assert!(parse("A B").is_err());
}

#[test]
fn test_constant_expression() {
    let table = truth_table("True ^ False").unwrap();
    assert_eq!(table.num_rows(), 1);
    assert_eq!(table.columns(), vec!["Result"]);
    assert_eq!(table.results(), vec![true]);
}

#[test]
fn test_variable_limit() {
    // 17 variables exceed the default limit of 16
    let input = (0..17)
        .map(|i| format!("v{}", i))
        .collect::<Vec<_>>()
        .join(" | ");

    match truth_table(&input) {
        Err(TruthTableError::TooManyVariables { count, limit }) => {
            assert_eq!(count, 17);
            assert_eq!(limit, 16);
        }
        other => panic!("expected TooManyVariables, got {:?}", other.map(|t| t.num_rows())),
    }

    let raised = TableConfig::new().with_max_variables(17);
    let expr = Expr::parse(&input).unwrap();
    assert_eq!(
        TruthTable::generate_with_config(&expr, &TableConfig::new().with_max_variables(3)),
        Err(TableError::TooManyVariables { count: 17, limit: 3 })
    );
    assert_eq!(
        truth_table_with_config(&input, &raised).unwrap().num_rows(),
        1 << 17
    );
}

#[test]
fn test_classification() {
    assert!(truth_table("P | ~P").unwrap().is_tautology());
    assert!(truth_table("P & ~P").unwrap().is_contradiction());
    assert!(truth_table("((P >> Q) & P) >> Q").unwrap().is_tautology());

    let table = truth_table("P >> Q").unwrap();
    assert!(table.is_satisfiable());
    assert!(!table.is_tautology());
    assert_eq!(table.satisfying_assignments().len(), 3);
}

#[test]
fn test_case_sensitive_symbols() {
    let table = truth_table("a & A").unwrap();
    assert_eq!(table.columns(), vec!["A", "a", "Result"]);
}
