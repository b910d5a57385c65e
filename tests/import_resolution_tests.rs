//! End-to-end import resolution: what the import block holds and how each use site prints.

use jpoet::{Decision, ImportOptions, JavaFile, RenderConfig, RenderError};
use jpoet_syntax::{
    Arg, ClassName, FieldSpec, MethodSpec, PackageName, SyntaxError, TypeName, TypeSpec, TypeVariableName,
};

fn package() -> PackageName {
    PackageName::parse("com.example").unwrap()
}

fn field(name: &str, type_name: impl Into<TypeName>) -> FieldSpec {
    FieldSpec::new(name, type_name).unwrap()
}

fn render(spec: TypeSpec, config: &RenderConfig) -> String {
    JavaFile::new(package(), spec).render(config).unwrap()
}

// ============================================================================
// Collisions
// ============================================================================

#[test]
fn first_seen_symbol_wins_a_simple_name() {
    let util_list = ClassName::new("java.util", "List").unwrap();
    let awt_list = ClassName::new("java.awt", "List").unwrap();
    let spec = TypeSpec::class("Widgets")
        .unwrap()
        .add_field(field("a", util_list.clone()))
        .add_field(field("b", awt_list.clone()));

    assert_eq!(
        render(spec.clone(), &RenderConfig::default()),
        "package com.example;\n\
         \n\
         import java.util.List;\n\
         \n\
         class Widgets {\n  \
           List a;\n\
         \n  \
           java.awt.List b;\n\
         }\n"
    );

    let table = JavaFile::new(package(), spec).imports(&ImportOptions::default()).unwrap();
    assert_eq!(table.decision(&util_list), Some(Decision::Simple));
    assert_eq!(table.decision(&awt_list), Some(Decision::Qualified));
}

#[test]
fn loser_is_qualified_at_every_use_site() {
    let util_list = ClassName::new("java.util", "List").unwrap();
    let awt_list = ClassName::new("java.awt", "List").unwrap();
    let method = MethodSpec::method("convert")
        .unwrap()
        .returns(awt_list.clone())
        .add_statement("$T copy = new $T()", [Arg::ty(awt_list.clone()), Arg::ty(awt_list)])
        .unwrap()
        .add_statement("return copy", [])
        .unwrap();
    let spec = TypeSpec::class("Converter")
        .unwrap()
        .add_field(field("source", util_list))
        .add_method(method);

    let text = render(spec, &RenderConfig::default());
    assert_eq!(text.matches("import ").count(), 1, "{text}");
    assert!(text.contains("  java.awt.List convert() {\n"), "{text}");
    assert!(text.contains("    java.awt.List copy = new java.awt.List();\n"), "{text}");
}

#[test]
fn java_lang_names_are_reserved_for_java_lang() {
    let foreign = ClassName::new("com.other", "String").unwrap();
    let spec = TypeSpec::class("Holder")
        .unwrap()
        .add_field(field("foreign", foreign))
        .add_field(field("text", ClassName::java_lang("String").unwrap()));

    let config = RenderConfig::default().with_skip_java_lang_imports(true);
    assert_eq!(
        render(spec, &config),
        "package com.example;\n\
         \n\
         class Holder {\n  \
           com.other.String foreign;\n\
         \n  \
           String text;\n\
         }\n"
    );
}

// ============================================================================
// Nested and local types
// ============================================================================

#[test]
fn nested_local_type_wins_over_import() {
    let outer = ClassName::new("com.example", "Outer").unwrap();
    let local_list = outer.nested("List").unwrap();
    let util_list = ClassName::new("java.util", "List").unwrap();
    let spec = TypeSpec::class("Outer")
        .unwrap()
        .add_field(field("items", util_list.clone()))
        .add_field(field("local", local_list.clone()))
        .add_type(TypeSpec::class("List").unwrap());

    assert_eq!(
        render(spec.clone(), &RenderConfig::default()),
        "package com.example;\n\
         \n\
         class Outer {\n  \
           java.util.List items;\n\
         \n  \
           List local;\n\
         \n  \
           class List {\n  \
           }\n\
         }\n"
    );

    let table = JavaFile::new(package(), spec).imports(&ImportOptions::default()).unwrap();
    assert_eq!(table.decision(&util_list), Some(Decision::Qualified));
    assert_eq!(table.decision(&local_list), Some(Decision::Implicit));
    assert!(table.imports().is_empty());
}

#[test]
fn same_package_types_need_no_import() {
    let sibling = ClassName::new("com.example", "Sibling").unwrap();
    let spec = TypeSpec::class("Holder").unwrap().add_field(field("sibling", sibling));
    assert_eq!(
        render(spec, &RenderConfig::default()),
        "package com.example;\n\nclass Holder {\n  Sibling sibling;\n}\n"
    );
}

#[test]
fn always_qualify_keeps_names_out_of_the_import_block() {
    let list = ClassName::new("java.util", "List").unwrap();
    let map = ClassName::new("java.util", "Map").unwrap();
    let spec = TypeSpec::class("Holder")
        .unwrap()
        .add_field(field("list", list))
        .add_field(field("map", map));

    let config = RenderConfig::default().with_always_qualify("List");
    let text = render(spec, &config);
    assert!(text.contains("import java.util.Map;\n\n"), "{text}");
    assert!(!text.contains("import java.util.List;"), "{text}");
    assert!(text.contains("  java.util.List list;\n"), "{text}");
    assert!(text.contains("  Map map;\n"), "{text}");
}

#[test]
fn symbols_inside_fragments_are_imported() {
    let objects = ClassName::new("java.util", "Objects").unwrap();
    let method = MethodSpec::method("check")
        .unwrap()
        .add_statement("$T.requireNonNull(this)", [Arg::ty(objects)])
        .unwrap();
    let spec = TypeSpec::class("Checker").unwrap().add_method(method);
    assert_eq!(
        render(spec, &RenderConfig::default()),
        "package com.example;\n\
         \n\
         import java.util.Objects;\n\
         \n\
         class Checker {\n  \
           void check() {\n    \
             Objects.requireNonNull(this);\n  \
           }\n\
         }\n"
    );
}

// ============================================================================
// Validation
// ============================================================================

fn invalid_name(err: RenderError) -> String {
    match err {
        RenderError::Syntax(SyntaxError::InvalidIdentifier { name, .. }) => name,
        other => panic!("expected an invalid identifier, got {other:?}"),
    }
}

#[test]
fn type_variables_at_use_sites_are_validated() {
    let spec = TypeSpec::class("A")
        .unwrap()
        .add_field(field("x", TypeVariableName::new("not valid!")));
    let err = JavaFile::new(package(), spec).render(&RenderConfig::default()).unwrap_err();
    assert_eq!(invalid_name(err), "not valid!");

    let list = ClassName::new("java.util", "List").unwrap();
    let method = MethodSpec::method("make")
        .unwrap()
        .add_statement("new $T()", [Arg::ty(TypeName::parameterized(list, [TypeVariableName::new("class").into()]))])
        .unwrap();
    let spec = TypeSpec::class("B").unwrap().add_method(method);
    let err = JavaFile::new(package(), spec).render(&RenderConfig::default()).unwrap_err();
    assert_eq!(invalid_name(err), "class");
}

#[test]
fn type_variables_from_declaration_files_are_validated() {
    let file: JavaFile = serde_json::from_str(
        r#"{"type_spec": {"name": "A", "fields": [{"name": "x", "type": {"variable": {"name": "not valid!"}}}]}}"#,
    )
    .unwrap();
    let err = file.render(&RenderConfig::default()).unwrap_err();
    assert_eq!(invalid_name(err), "not valid!");
}
