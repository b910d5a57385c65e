//! Property-based tests for the jpoet renderer
//!
//! These tests use proptest to verify invariants across many randomly
//! generated declaration trees, catching edge cases that hand-written tests might miss.

use std::collections::HashSet;

use jpoet::{Decision, JavaFile, RenderConfig};
use jpoet_core::lang::keywords;
use jpoet_syntax::{Arg, ClassName, CodeBlock, PackageName, ParameterSpec, TypeName, TypeSpec};
use proptest::prelude::*;

const TARGET_PACKAGE: &str = "example.person";

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,8}".prop_filter("not a keyword", |s| !keywords::is_keyword(s))
}

fn class_strategy() -> impl Strategy<Value = ClassName> {
    let packages = prop::sample::select(vec!["com.alpha", "com.beta", "java.util", "java.lang", TARGET_PACKAGE]);
    let names = prop::sample::select(vec!["List", "Map", "String", "Widget"]);
    (packages, names).prop_map(|(package, name)| ClassName::new(package, name).unwrap())
}

fn type_strategy() -> impl Strategy<Value = TypeName> {
    prop_oneof![
        class_strategy().prop_map(TypeName::from),
        Just(TypeName::INT),
        class_strategy().prop_map(TypeName::array_of),
        (class_strategy(), class_strategy()).prop_map(|(raw, arg)| TypeName::parameterized(raw, [arg.into()])),
    ]
}

fn record_strategy() -> impl Strategy<Value = TypeSpec> {
    prop::collection::vec((ident_strategy(), type_strategy()), 0..6).prop_map(|components| {
        components.into_iter().fold(TypeSpec::record("Person").unwrap(), |spec, (name, type_name)| {
            spec.add_record_component(ParameterSpec::new(&name, type_name).unwrap())
        })
    })
}

fn file(spec: TypeSpec) -> JavaFile {
    JavaFile::new(PackageName::parse(TARGET_PACKAGE).unwrap(), spec)
}

// =============================================================================
// Rendering properties
// =============================================================================

proptest! {
    /// Property: rendering the same tree twice yields byte-identical text
    #[test]
    fn rendering_is_idempotent(spec in record_strategy(), skip in any::<bool>()) {
        let config = RenderConfig::default().with_skip_java_lang_imports(skip);
        let file = file(spec);
        prop_assert_eq!(file.render(&config).unwrap(), file.render(&config).unwrap());
        // A fresh file with a cold import cache renders the same text
        prop_assert_eq!(file.clone().render(&config).unwrap(), file.render(&config).unwrap());
    }

    /// Property: the output starts with the package line and ends with a newline
    #[test]
    fn header_comes_first(spec in record_strategy()) {
        let text = file(spec).render(&RenderConfig::default()).unwrap();
        prop_assert!(text.starts_with("package example.person;\n\n"));
        prop_assert!(text.ends_with("}\n"), "{}", text);
    }

    /// Property: imports never hold implicit symbols or duplicate simple names
    #[test]
    fn imports_are_minimal(spec in record_strategy(), skip in any::<bool>()) {
        let config = RenderConfig::default().with_skip_java_lang_imports(skip);
        let table = file(spec).imports(&config.import_options()).unwrap();

        let mut simple_names = HashSet::new();
        for class in table.imports() {
            prop_assert!(simple_names.insert(class.simple_name().to_string()), "duplicate {}", class);
            prop_assert_ne!(class.package().to_string(), TARGET_PACKAGE);
            prop_assert!(!(skip && class.package().is_java_lang()), "java.lang import {}", class);
            prop_assert_eq!(table.decision(class), Some(Decision::Simple));
        }
        let sorted = table.imports().windows(2).all(|w| w[0].canonical_name() <= w[1].canonical_name());
        prop_assert!(sorted);
    }

    /// Property: of two classes sharing a simple name, the first referenced is imported and the other qualified
    #[test]
    fn collisions_resolve_to_first_seen(name in prop::sample::select(vec!["List", "Widget", "Node"]), flip in any::<bool>()) {
        let alpha = ClassName::new("com.alpha", name).unwrap();
        let beta = ClassName::new("com.beta", name).unwrap();
        let (first, second) = if flip { (beta, alpha) } else { (alpha, beta) };
        let spec = TypeSpec::record("Person")
            .unwrap()
            .add_record_component(ParameterSpec::new("a", first.clone()).unwrap())
            .add_record_component(ParameterSpec::new("b", second.clone()).unwrap());

        let text = file(spec).render(&RenderConfig::default()).unwrap();
        let first_import = format!("import {first};\n");
        let second_import = format!("import {second};\n");
        let components = format!("({name} a, {second} b)");
        prop_assert!(text.contains(&first_import));
        prop_assert!(!text.contains(&second_import));
        prop_assert!(text.contains(&components), "{}", text);
    }
}

// =============================================================================
// Fragment properties
// =============================================================================

proptest! {
    /// Property: a fragment is well formed exactly when placeholders and arguments agree in number
    #[test]
    fn fragment_arity_is_checked(placeholders in 0usize..6, args in 0usize..6) {
        let format = "$L ".repeat(placeholders);
        let result = CodeBlock::of(&format, (0..args).map(|i| Arg::lit(i.to_string())));
        prop_assert_eq!(result.is_ok(), placeholders == args);
    }

    /// Property: a placeholder never accepts an argument of another kind
    #[test]
    fn fragment_kinds_are_checked(placeholder in prop::sample::select(vec!['L', 'S', 'T', 'N']), arg_kind in 0usize..4) {
        let list = ClassName::new("java.util", "List").unwrap();
        let arg = match arg_kind {
            0 => Arg::lit("x"),
            1 => Arg::string("x"),
            2 => Arg::ty(list),
            _ => Arg::name("x"),
        };
        let expected = ['L', 'S', 'T', 'N'][arg_kind] == placeholder;
        let result = CodeBlock::of(&format!("${placeholder}"), [arg]);
        prop_assert_eq!(result.is_ok(), expected);
    }

    /// Property: arbitrary format text either scans or fails, without panicking
    #[test]
    fn fragment_scanner_never_panics(format in ".{0,40}") {
        let _ = CodeBlock::of(&format, []);
    }

    /// Property: `$$` always scans to a literal dollar sign
    #[test]
    fn escaped_dollar_is_accepted(prefix in "[a-z ]{0,10}", suffix in "[a-z ]{0,10}") {
        let format = format!("{prefix}$${suffix}");
        prop_assert!(CodeBlock::of(&format, []).is_ok());
    }
}
