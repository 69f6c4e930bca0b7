//! Flag resolution against the sample rule table.

mod common;

use common::{Setting, Value, sample_rules, sample_table, shape};
use flagline::{FlagArgument, ResolveErrorKind, TokenKind, format, resolve, tokenize};

// -----------------------------------------------------------
// Argument policies.
// -----------------------------------------------------------

#[test]
fn resolve_required_argument() {
    let tokens = tokenize("-s \"big\"").expect("tokenize");
    let res = resolve(tokens, &sample_rules()).expect("resolve");

    assert_eq!(res.configs.len(), 1);
    let size = res.get(&Setting::Size).expect("size");
    assert_eq!(size.config_name, Setting::Size);
    assert_eq!(size.config_value, Value::Short);
    assert_eq!(size.argument, FlagArgument::Text("big".to_string()));
    assert!(res.residual.is_empty());
}

#[test]
fn resolve_required_argument_keeps_padding() {
    let tokens = tokenize("--short \" big \"").expect("tokenize");
    let res = resolve(tokens, &sample_rules()).expect("resolve");
    assert_eq!(
        res.get(&Setting::Size).and_then(|c| c.argument.as_text()),
        Some(" big ")
    );
}

#[test]
fn resolve_required_argument_missing_at_end() {
    let tokens = tokenize("run -s").expect("tokenize");
    let err = resolve(tokens, &sample_rules()).unwrap_err();
    assert_eq!(
        err.kind,
        ResolveErrorKind::MissingRequiredArgument {
            config_name: "SIZE".to_string(),
            flag: "-s".to_string(),
        }
    );
    assert_eq!(err.column, 4);
}

#[test]
fn resolve_required_argument_followed_by_flag() {
    let tokens = tokenize("-s -c").expect("tokenize");
    let err = resolve(tokens, &sample_rules()).unwrap_err();
    assert!(matches!(
        err.kind,
        ResolveErrorKind::MissingRequiredArgument { .. }
    ));
}

#[test]
fn resolve_forbidden_is_switch() {
    let tokens = tokenize("--long").expect("tokenize");
    let res = resolve(tokens, &sample_rules()).expect("resolve");
    let size = res.get(&Setting::Size).expect("size");
    assert_eq!(size.config_value, Value::Long);
    assert!(size.argument.is_switch());
    assert_eq!(size.argument, FlagArgument::Switch(true));
}

#[test]
fn resolve_forbidden_does_not_consume_string() {
    let tokens = tokenize("-c \"red\"").expect("tokenize");
    let res = resolve(tokens, &sample_rules()).expect("resolve");
    assert_eq!(
        shape(&res.residual),
        vec![(TokenKind::StringLiteral, "red".to_string())]
    );
}

#[test]
fn resolve_optional_with_and_without_argument() {
    let tokens = tokenize("-o \"out.txt\"").expect("tokenize");
    let res = resolve(tokens, &sample_rules()).expect("resolve");
    assert_eq!(
        res.get(&Setting::Output).and_then(|c| c.argument.as_text()),
        Some("out.txt")
    );

    let tokens = tokenize("-o name").expect("tokenize");
    let res = resolve(tokens, &sample_rules()).expect("resolve");
    assert_eq!(
        res.get(&Setting::Output).map(|c| &c.argument),
        Some(&FlagArgument::Text(String::new()))
    );
    assert_eq!(format(&res.residual), "name");
}

// -----------------------------------------------------------
// Duplicates and pass-through.
// -----------------------------------------------------------

#[test]
fn resolve_duplicate_configuration_either_order() {
    for line in ["-l -s \"x\"", "-s \"x\" -l", "-l --long"] {
        let tokens = tokenize(line).expect("tokenize");
        let err = resolve(tokens, &sample_rules()).unwrap_err();
        assert!(
            matches!(
                &err.kind,
                ResolveErrorKind::DuplicateConfiguration { config_name, .. }
                if config_name == "SIZE"
            ),
            "{line:?} should be a duplicate"
        );
    }
}

#[test]
fn resolve_duplicate_reports_second_flag() {
    let tokens = tokenize("-s \"x\" --long").expect("tokenize");
    let err = resolve(tokens, &sample_rules()).unwrap_err();
    assert_eq!(err.column, 7);
    assert_eq!(
        err.to_string(),
        "duplicate configuration assignment for SIZE (flag `--long`) at column 7"
    );
}

#[test]
fn resolve_unknown_flags_pass_through() {
    let tokens = tokenize("--dry \"x\" -z").expect("tokenize");
    let res = resolve(tokens, &sample_rules()).expect("resolve");
    assert!(res.is_empty());
    assert_eq!(format(&res.residual), "--dry \"x\" -z");
}

#[test]
fn resolve_residual_keeps_order_and_columns() {
    let tokens = tokenize("copy -l a \"b\" -o \"c\" d").expect("tokenize");
    let res = resolve(tokens, &sample_rules()).expect("resolve");

    assert_eq!(res.configs.len(), 2);
    let columns: Vec<_> = res.residual.iter().map(|t| t.column).collect();
    assert_eq!(format(&res.residual), "copy a \"b\" d");
    assert_eq!(columns, [0, 8, 10, 21]);
}

#[test]
fn resolve_flag_free_line_is_identity() {
    let tokens = tokenize("move \"a\" to b").expect("tokenize");
    let res = resolve(tokens.clone(), &sample_rules()).expect("resolve");
    assert!(res.is_empty());
    assert_eq!(res.residual, tokens);
}

#[test]
fn resolve_against_empty_rules() {
    let tokens = tokenize("-s \"x\" --long").expect("tokenize");
    let rules: Vec<flagline::FlagRule<Setting, Value>> = Vec::new();
    let res = resolve(tokens.clone(), &rules).expect("resolve");
    assert!(res.is_empty());
    assert_eq!(res.residual, tokens);
}

#[test]
fn sorted_configs_orders_by_name() {
    let tokens = tokenize("-c -o \"f\" -l").expect("tokenize");
    let res = resolve(tokens, &sample_rules()).expect("resolve");
    let names: Vec<_> = res.sorted_configs().iter().map(|c| c.config_name).collect();
    assert_eq!(names, [Setting::Size, Setting::Output, Setting::Color]);
}

#[test]
fn resolve_through_table() {
    let tokens = tokenize("-c -o").expect("tokenize");
    let (configs, residual) = sample_table().resolve(tokens).expect("resolve").into_parts();
    assert_eq!(configs.len(), 2);
    assert!(residual.is_empty());
}
