//! Resolve a command line against a small rule table.

use flagline::{FlagRule, FlagTable, parse_line};

fn main() {
    let table = FlagTable::new(vec![
        FlagRule::new("SIZE", "SHORT")
            .aliases(["-s", "--short"])
            .required(),
        FlagRule::new("SIZE", "LONG").aliases(["-l", "--long"]),
        FlagRule::new("OUTPUT", "FILE")
            .aliases(["-o", "--output"])
            .optional(),
    ])
    .expect("rule table is valid");

    let line = "summarize --short \"three lines\" -o notes";
    let resolution = parse_line(line, &table).expect("parse failed");

    println!("Line: {line}");
    for config in resolution.configs.values() {
        println!(
            "  {} = {} (argument: {})",
            config.config_name, config.config_value, config.argument
        );
    }
    println!("Residual: {}", flagline::format(&resolution.residual));
}
