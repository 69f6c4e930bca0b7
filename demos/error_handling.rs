//! Demonstrate error handling for invalid command lines.

use flagline::{FlagRule, FlagTable, parse_line};

fn main() {
    let table = FlagTable::new(vec![
        FlagRule::new("SIZE", "SHORT")
            .aliases(["-s", "--short"])
            .required(),
        FlagRule::new("SIZE", "LONG").aliases(["-l", "--long"]),
    ])
    .expect("rule table is valid");

    for line in ["copy ---all", "say \"unclosed", "run -s", "run -s \"x\" --long"] {
        match parse_line(line, &table) {
            Ok(_) => println!("{line}: parsed OK (unexpected)"),
            Err(flagline::Error::Lex(e)) => {
                println!("{line}: lex error: {e}");
                println!("  Kind: {:?}", e.kind);
            }
            Err(flagline::Error::Resolve(e)) => {
                println!("{line}: resolve error: {e}");
                println!("  Kind: {:?}", e.kind);
            }
            Err(flagline::Error::Rule(e)) => println!("{line}: table error: {e}"),
        }
    }

    // The framed form, as written to stderr by the CLI.
    if let Err(e) = parse_line("a#b", &table) {
        print!("{}", e.framed());
    }

    // Table construction is validated too.
    let err = FlagTable::new(vec![
        FlagRule::new("SIZE", "SHORT").alias("-s"),
        FlagRule::new("SPEED", "SLOW").alias("-s"),
    ])
    .unwrap_err();
    print!("{}", flagline::Error::from(err).framed());
}
