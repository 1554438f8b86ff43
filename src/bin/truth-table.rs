//! Truth Table - Command Line Interface
//!
//! Prints the truth table of one or more propositional formulas, optionally with
//! a normal form, structural statistics and a tree rendering.

use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, info};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use truth_table::{
    Expr, NormalForm, Notation, TableConfig, TableFormat, TreeDescription, TruthTable,
    TruthTableError, DEFAULT_MAX_VARIABLES,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Aligned plain-text columns
    Text,
    /// Comma-separated values
    Csv,
    /// Markdown table
    Markdown,
}

impl From<FormatArg> for TableFormat {
    fn from(val: FormatArg) -> Self {
        match val {
            FormatArg::Text => TableFormat::Text,
            FormatArg::Csv => TableFormat::Csv,
            FormatArg::Markdown => TableFormat::Markdown,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NormalFormArg {
    /// Negation normal form
    Nnf,
    /// Conjunctive normal form
    Cnf,
    /// Disjunctive normal form
    Dnf,
}

impl From<NormalFormArg> for NormalForm {
    fn from(val: NormalFormArg) -> Self {
        match val {
            NormalFormArg::Nnf => NormalForm::Negation,
            NormalFormArg::Cnf => NormalForm::Conjunctive,
            NormalFormArg::Dnf => NormalForm::Disjunctive,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NotationArg {
    /// ASCII operators (`& | ~ >> ^`)
    Ascii,
    /// Unicode logic symbols
    Unicode,
    /// LaTeX math
    Latex,
}

impl From<NotationArg> for Notation {
    fn from(val: NotationArg) -> Self {
        match val {
            NotationArg::Ascii => Notation::Ascii,
            NotationArg::Unicode => Notation::Unicode,
            NotationArg::Latex => Notation::Latex,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "truth-table")]
#[command(about = "Truth tables and normal forms for propositional logic", long_about = None)]
#[command(version)]
struct Args {
    /// Formula to analyse, e.g. "(P >> Q) & ~Q"
    #[arg(value_name = "EXPRESSION", required_unless_present = "file")]
    expression: Option<String>,

    /// Read formulas from a file, one per line (blank lines and `#` comments are skipped)
    #[arg(short = 'f', long = "file", conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Table output format
    #[arg(long = "format", value_enum, default_value = "text")]
    format: FormatArg,

    /// Also print the formula in this normal form
    #[arg(short = 'n', long = "normal-form", value_enum)]
    normal_form: Option<NormalFormArg>,

    /// Notation for printed formulas
    #[arg(long = "notation", value_enum, default_value = "ascii")]
    notation: NotationArg,

    /// Print the expression tree
    #[arg(short = 't', long = "tree")]
    tree: bool,

    /// Print the expression tree in Graphviz DOT format
    #[arg(long = "dot")]
    dot: bool,

    /// Print structural statistics and satisfiability
    #[arg(short = 's', long = "stats")]
    stats: bool,

    /// Refuse formulas with more variables than this
    #[arg(long = "max-variables", default_value_t = DEFAULT_MAX_VARIABLES)]
    max_variables: usize,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    if let Err(e) = simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Warning: could not initialise logging: {}", e);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), TruthTableError> {
    let formulas = match (&args.expression, &args.file) {
        (_, Some(path)) => {
            let text = fs::read_to_string(path)?;
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(String::from)
                .collect()
        }
        (Some(expression), None) => vec![expression.clone()],
        (None, None) => Vec::new(),
    };
    info!("processing {} formula(s)", formulas.len());

    let config = TableConfig::new().with_max_variables(args.max_variables);

    match &args.output_file {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            report_all(&mut out, &formulas, &config, args)?;
            out.flush()?;
            info!("wrote output to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            report_all(&mut out, &formulas, &config, args)?;
        }
    }
    Ok(())
}

fn report_all<W: Write>(
    out: &mut W,
    formulas: &[String],
    config: &TableConfig,
    args: &Args,
) -> Result<(), TruthTableError> {
    for (index, text) in formulas.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        report(out, text, config, args)?;
    }
    Ok(())
}

fn report<W: Write>(
    out: &mut W,
    text: &str,
    config: &TableConfig,
    args: &Args,
) -> Result<(), TruthTableError> {
    let notation = Notation::from(args.notation);
    let expr = Expr::parse(text)?;
    debug!("parsed {:?} as {:?}", text, expr);

    let table = TruthTable::generate_with_config(&expr, config)?;

    writeln!(out, "Expression: {}", expr.render(notation))?;
    writeln!(out)?;
    table.write_table(out, args.format.into())?;

    if let Some(form) = args.normal_form {
        let form = NormalForm::from(form);
        let converted = expr.to_normal_form(form);
        let label = match form {
            NormalForm::Negation => "NNF",
            NormalForm::Conjunctive => "CNF",
            NormalForm::Disjunctive => "DNF",
        };
        writeln!(out)?;
        writeln!(out, "{}: {}", label, converted.render(notation))?;
    }

    if args.stats {
        let stats = expr.stats();
        writeln!(out)?;
        writeln!(out, "Operators:  {}", stats.operators)?;
        for (kind, count) in &stats.operator_counts {
            writeln!(out, "  {:<8}  {}", kind.to_string(), count)?;
        }
        writeln!(out, "Variables:  {}", stats.variables)?;
        writeln!(out, "Leaves:     {}", stats.leaves)?;
        writeln!(out, "Depth:      {}", stats.depth)?;
        let verdict = if table.is_tautology() {
            "tautology"
        } else if table.is_contradiction() {
            "contradiction"
        } else {
            "satisfiable"
        };
        writeln!(out, "Verdict:    {}", verdict)?;
        writeln!(out, "Minterms:   {:?}", table.minterms())?;
    }

    let tree = (args.tree || args.dot).then(|| expr.build_tree());
    if let Some(tree) = &tree {
        if args.tree {
            writeln!(out)?;
            write_tree(out, tree, 0, 0)?;
        }
        if args.dot {
            let dot = tree.to_dot().map_err(io::Error::other)?;
            writeln!(out)?;
            write!(out, "{}", dot)?;
        }
    }

    Ok(())
}

/// Indented outline of the tree below `id`
fn write_tree<W: Write>(
    out: &mut W,
    tree: &TreeDescription,
    id: usize,
    depth: usize,
) -> io::Result<()> {
    if let Some(node) = tree.node(id) {
        writeln!(out, "{}{}", "  ".repeat(depth), node.label)?;
        for child in tree.children(id) {
            write_tree(out, tree, child, depth + 1)?;
        }
    }
    Ok(())
}
