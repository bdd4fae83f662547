use clap::Parser;

use truthtab::table::TruthTable;

/// Evaluate a truth table on an input vector.
#[derive(Parser)]
struct Args {
    /// Output column, e.g. "0110".
    column: String,

    /// Input bits, e.g. 1 0.
    inputs: Vec<u8>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Args::parse();

    let table: TruthTable = args.column.parse()?;
    println!("table = {} (arity {})", table, table.arity());
    if let Some(name) = table.name() {
        println!("name = {}", name);
    }

    let output = table.apply(&args.inputs)?;
    println!("apply({:?}) = {}", args.inputs, output);

    let compiled = table.compile()?;
    println!(
        "compiled({:?}) = {} ({} nodes)",
        args.inputs,
        compiled.eval(&args.inputs),
        compiled.size()
    );

    Ok(())
}
