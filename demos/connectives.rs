use truthtab::ops;
use truthtab::table::TruthTable;

fn print_table(table: &TruthTable) {
    let arity = table.arity();
    let name = table.name().unwrap_or("?");
    println!("{} = {} (arity {})", name, table, arity);

    for row in 0..table.len() {
        let inputs: Vec<u8> = (0..arity)
            .map(|position| ((row >> (arity - 1 - position)) & 1) as u8)
            .collect();
        let output = table.get(row).unwrap();
        println!("  {:?} -> {}", inputs, output);
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    for arity in 0..=2 {
        println!("=== arity {} ===", arity);
        for table in ops::enumerate(arity) {
            print_table(&table);
        }
    }

    println!("{} connectives in total", ops::EVERY.len());

    Ok(())
}
