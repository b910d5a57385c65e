//! Import resolution: decide, before any text is written, how every referenced class prints.
//!
//! Resolution is a pure function of the declaration tree, the target package and [`ImportOptions`]:
//!
//! 1. Walk the tree in emission order and collect every [`ClassName`] that can be printed (type positions, javadoc
//!    and code fragments, anonymous class bodies), in first-seen order.
//! 2. Group the symbols by simple name. Within a group the first *eligible* symbol wins the name; every other member
//!    of the group is [`Decision::Qualified`].
//! 3. The sorted list of winners that need an import line is the file's import block.
//!
//! A symbol is not eligible for its simple name when:
//! - a different type with that simple name is declared inside the file (types of the file always win),
//! - the name is listed in [`ImportOptions::always_qualify`],
//! - it is not from `java.lang` but the name is one `java.lang` predeclares.
//!
//! ## Notes
//! - Collection is a static over-approximation: a symbol inside a fragment that ends up unused is still collected.
//! - Declared names are validated here, so a tree loaded from JSON fails before any text is produced.

use std::collections::{BTreeSet, HashMap, HashSet};

use indexmap::{IndexMap, IndexSet};
use jpoet_core::lang::java_lang;
use jpoet_syntax::errors::check_identifier;
use jpoet_syntax::{
    AnnotationSpec, ClassName, CodeBlock, CodePart, FieldSpec, Literal, MethodSpec, PackageName, ParameterSpec,
    TypeName, TypeSpec, TypeVariableName,
};

use super::errors::RenderError;

/// How a class prints at its use sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Printed by simple name; the class appears in the import block.
    Simple,
    /// Printed by canonical name; no import line.
    Qualified,
    /// Printed by simple name without an import: same package, `java.lang`, or declared in this file.
    Implicit,
}

/// Render settings that change import decisions. This is the key of the per-file import cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImportOptions {
    pub skip_java_lang_imports: bool,
    pub always_qualify: BTreeSet<String>,
}

/// The resolved import decisions of one file.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportTable {
    decisions: IndexMap<ClassName, Decision>,
    imports: Vec<ClassName>,
    local_types: HashSet<ClassName>,
    /// Simple name to the non-local class that owns it (Simple or Implicit winners).
    winners: HashMap<String, ClassName>,
}

impl ImportTable {
    /// Decision for `class`, or `None` when it was never collected.
    pub fn decision(&self, class: &ClassName) -> Option<Decision> {
        self.decisions.get(class).copied()
    }

    /// Classes to import, sorted by canonical name.
    pub fn imports(&self) -> &[ClassName] {
        &self.imports
    }

    /// Whether `class` is the root type or a type nested in it.
    pub fn is_local(&self, class: &ClassName) -> bool {
        self.local_types.contains(class)
    }

    /// The imported or implicitly visible class that owns `simple_name`.
    pub fn visible(&self, simple_name: &str) -> Option<&ClassName> {
        self.winners.get(simple_name)
    }

    /// Every collected symbol with its decision, in first-seen order.
    pub fn symbols(&self) -> impl Iterator<Item = (&ClassName, Decision)> {
        self.decisions.iter().map(|(class, decision)| (class, *decision))
    }
}

/// Resolve the imports of a file whose top-level declaration is `root` in `package`.
///
/// ## Parameters
/// - `root`: the top-level declaration; it must be named.
/// - `package`: the target package (possibly the default package).
/// - `options`: import-affecting render settings.
///
/// ## Returns
/// - The import table, or an error when a declared name is not a valid identifier or the root is anonymous.
///
/// ## Examples
/// ```rust
/// use jpoet::emit::imports::{Decision, ImportOptions, resolve};
/// use jpoet_syntax::{ClassName, PackageName, ParameterSpec, TypeSpec};
///
/// let string = ClassName::java_lang("String").unwrap();
/// let person = TypeSpec::record("Person")
///     .unwrap()
///     .add_record_component(ParameterSpec::new("name", string.clone()).unwrap());
/// let package = PackageName::parse("example.person").unwrap();
///
/// let table = resolve(&person, &package, &ImportOptions::default()).unwrap();
/// assert_eq!(table.decision(&string), Some(Decision::Simple));
/// assert_eq!(table.imports(), [string]);
/// ```
#[tracing::instrument(skip_all, fields(package = %package, skip_java_lang = options.skip_java_lang_imports))]
pub fn resolve(root: &TypeSpec, package: &PackageName, options: &ImportOptions) -> Result<ImportTable, RenderError> {
    let name = root.name.as_deref().ok_or(RenderError::AnonymousRoot)?;
    check_identifier(name)?;
    let root_class = ClassName::in_package(package, name)?;

    let mut collector = SymbolCollector::default();
    collector.scan_type(root, Some(&root_class))?;

    let table = decide(collector, package, options);
    tracing::debug!(
        symbols = table.decisions.len(),
        imports = table.imports.len(),
        "resolved imports"
    );
    Ok(table)
}

/// The class an anonymous body instantiates: its first interface, else its superclass, else `Object`.
pub(crate) fn anonymous_supertype(spec: &TypeSpec) -> Result<TypeName, RenderError> {
    if let Some(interface) = spec.superinterfaces.first() {
        return Ok(interface.clone());
    }
    if let Some(superclass) = &spec.superclass {
        return Ok(superclass.clone());
    }
    Ok(ClassName::java_lang("Object")?.into())
}

// ============================================================================
// Collection
// ============================================================================

#[derive(Default)]
struct SymbolCollector {
    symbols: IndexSet<ClassName>,
    local_types: HashSet<ClassName>,
    /// Simple names of every named type declared in the file, including inside anonymous bodies.
    local_names: HashSet<String>,
}

impl SymbolCollector {
    /// Scan a named declaration. `class` is its class name when it is reachable by name from outside.
    fn scan_type(&mut self, spec: &TypeSpec, class: Option<&ClassName>) -> Result<(), RenderError> {
        if let Some(name) = &spec.name {
            check_identifier(name)?;
            self.local_names.insert(name.clone());
        }
        if let Some(class) = class {
            self.local_types.insert(class.clone());
        }

        self.scan_code(&spec.javadoc)?;
        for component in &spec.record_components {
            self.scan_code(&component.javadoc)?;
        }
        self.scan_annotations(&spec.annotations)?;
        self.scan_type_variables(&spec.type_variables)?;
        for component in &spec.record_components {
            self.scan_parameter(component)?;
        }
        if let Some(superclass) = &spec.superclass {
            self.scan_type_name(superclass)?;
        }
        for interface in spec.superinterfaces.iter().chain(&spec.permitted_subclasses) {
            self.scan_type_name(interface)?;
        }
        self.scan_members(spec, class)
    }

    fn scan_anonymous(&mut self, spec: &TypeSpec) -> Result<(), RenderError> {
        self.scan_type_name(&anonymous_supertype(spec)?)?;
        self.scan_code(&spec.anonymous_type_arguments)?;
        self.scan_members(spec, None)
    }

    fn scan_members(&mut self, spec: &TypeSpec, class: Option<&ClassName>) -> Result<(), RenderError> {
        for (name, constant) in &spec.enum_constants {
            check_identifier(name)?;
            self.scan_code(&constant.javadoc)?;
            self.scan_annotations(&constant.annotations)?;
            self.scan_code(&constant.anonymous_type_arguments)?;
            self.scan_members(constant, None)?;
        }
        for field in spec.static_fields() {
            self.scan_field(field)?;
        }
        self.scan_code(&spec.static_block)?;
        for field in spec.instance_fields() {
            self.scan_field(field)?;
        }
        self.scan_code(&spec.initializer_block)?;
        for method in spec.iter_constructors().chain(spec.iter_methods()) {
            self.scan_method(method)?;
        }
        for nested in &spec.type_specs {
            let nested_class = match (class, &nested.name) {
                (Some(enclosing), Some(name)) => {
                    check_identifier(name)?;
                    Some(enclosing.nested(name)?)
                }
                _ => None,
            };
            self.scan_type(nested, nested_class.as_ref())?;
        }
        Ok(())
    }

    fn scan_field(&mut self, field: &FieldSpec) -> Result<(), RenderError> {
        check_identifier(&field.name)?;
        self.scan_code(&field.javadoc)?;
        self.scan_annotations(&field.annotations)?;
        self.scan_type_name(&field.type_name)?;
        if let Some(initializer) = &field.initializer {
            self.scan_code(initializer)?;
        }
        Ok(())
    }

    fn scan_method(&mut self, method: &MethodSpec) -> Result<(), RenderError> {
        if !method.is_constructor() {
            check_identifier(&method.name)?;
        }
        self.scan_code(&method.javadoc)?;
        for parameter in &method.parameters {
            self.scan_code(&parameter.javadoc)?;
        }
        self.scan_annotations(&method.annotations)?;
        self.scan_type_variables(&method.type_variables)?;
        if let Some(return_type) = &method.return_type {
            if !method.is_constructor() {
                self.scan_type_name(return_type)?;
            }
        }
        for parameter in &method.parameters {
            self.scan_parameter(parameter)?;
        }
        if let Some(default_value) = &method.default_value {
            self.scan_code(default_value)?;
        }
        for exception in &method.exceptions {
            self.scan_type_name(exception)?;
        }
        self.scan_code(&method.code)
    }

    fn scan_parameter(&mut self, parameter: &ParameterSpec) -> Result<(), RenderError> {
        check_identifier(&parameter.name)?;
        self.scan_annotations(&parameter.annotations)?;
        self.scan_type_name(&parameter.type_name)?;
        Ok(())
    }

    fn scan_annotations(&mut self, annotations: &[AnnotationSpec]) -> Result<(), RenderError> {
        for annotation in annotations {
            self.add(&annotation.type_name);
            for (member, values) in &annotation.members {
                check_identifier(member)?;
                for value in values {
                    self.scan_code(value)?;
                }
            }
        }
        Ok(())
    }

    fn scan_type_variables(&mut self, variables: &[TypeVariableName]) -> Result<(), RenderError> {
        for variable in variables {
            check_identifier(&variable.name)?;
            for bound in &variable.bounds {
                self.scan_type_name(bound)?;
            }
        }
        Ok(())
    }

    fn scan_code(&mut self, code: &CodeBlock) -> Result<(), RenderError> {
        for part in code.parts() {
            match part {
                CodePart::Type(type_name) => self.scan_type_name(type_name)?,
                CodePart::Literal(Literal::Code(nested)) => self.scan_code(nested)?,
                CodePart::Literal(Literal::Anonymous(spec)) => self.scan_anonymous(spec)?,
                _ => {}
            }
        }
        Ok(())
    }

    fn scan_type_name(&mut self, type_name: &TypeName) -> Result<(), RenderError> {
        let mut names = Vec::new();
        type_name.visit_variables(&mut |variable: &TypeVariableName| names.push(variable.name.clone()));
        for name in &names {
            check_identifier(name)?;
        }
        type_name.visit_classes(&mut |class: &ClassName| self.add(class));
        Ok(())
    }

    fn add(&mut self, class: &ClassName) {
        if !self.symbols.contains(class) {
            self.symbols.insert(class.clone());
        }
    }
}

// ============================================================================
// Decisions
// ============================================================================

fn decide(collector: SymbolCollector, package: &PackageName, options: &ImportOptions) -> ImportTable {
    let SymbolCollector {
        symbols,
        local_types,
        local_names,
    } = collector;

    let mut groups: IndexMap<&str, Vec<&ClassName>> = IndexMap::new();
    for class in &symbols {
        groups.entry(class.simple_name()).or_default().push(class);
    }

    let mut decisions: IndexMap<ClassName, Decision> = IndexMap::with_capacity(symbols.len());
    let mut winners: HashMap<String, ClassName> = HashMap::new();
    for (simple_name, members) in &groups {
        let mut winner: Option<&ClassName> = None;
        for class in members {
            let decision = if local_types.contains(*class) {
                Decision::Implicit
            } else if local_names.contains(*simple_name)
                || options.always_qualify.contains(*simple_name)
                || winner.is_some()
                || (java_lang::is_java_lang_type(simple_name) && !class.package().is_java_lang())
            {
                Decision::Qualified
            } else {
                winner = Some(*class);
                if is_implicitly_visible(class, package, options) {
                    Decision::Implicit
                } else {
                    Decision::Simple
                }
            };
            tracing::debug!(class = %class, ?decision, "import decision");
            decisions.insert((*class).clone(), decision);
        }
        if let Some(winner) = winner {
            winners.insert(simple_name.to_string(), winner.clone());
        }
    }

    let mut imports: Vec<ClassName> = decisions
        .iter()
        .filter(|(_, decision)| **decision == Decision::Simple)
        .map(|(class, _)| class.clone())
        .collect();
    imports.sort_by_key(|class| class.canonical_name());

    ImportTable {
        decisions,
        imports,
        local_types,
        winners,
    }
}

/// Only top-level classes are visible without an import: same package, the default package, or (when
/// requested) `java.lang`.
fn is_implicitly_visible(class: &ClassName, package: &PackageName, options: &ImportOptions) -> bool {
    if !class.is_top_level() {
        return false;
    }
    class.package() == package
        || class.package().is_default()
        || (options.skip_java_lang_imports && class.package().is_java_lang())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jpoet_syntax::Arg;

    fn package() -> PackageName {
        PackageName::parse("com.example").unwrap()
    }

    fn class(package: &str, name: &str) -> ClassName {
        ClassName::new(package, name).unwrap()
    }

    fn field(name: &str, type_name: impl Into<TypeName>) -> FieldSpec {
        FieldSpec::new(name, type_name).unwrap()
    }

    fn resolve_default(spec: &TypeSpec) -> ImportTable {
        resolve(spec, &package(), &ImportOptions::default()).unwrap()
    }

    fn import_names(table: &ImportTable) -> Vec<String> {
        table.imports().iter().map(ClassName::canonical_name).collect()
    }

    // ========================================================================
    // Basic decisions
    // ========================================================================

    #[test]
    fn test_imports_are_sorted_and_deduplicated() {
        let spec = TypeSpec::class("Holder")
            .unwrap()
            .add_field(field("b", class("java.util", "Set")))
            .add_field(field("a", class("java.util", "List")))
            .add_field(field("c", class("java.util", "List")));
        let table = resolve_default(&spec);
        assert_eq!(import_names(&table), ["java.util.List", "java.util.Set"]);
    }

    #[test]
    fn test_same_package_is_implicit() {
        let sibling = class("com.example", "Sibling");
        let spec = TypeSpec::class("Holder").unwrap().add_field(field("s", sibling.clone()));
        let table = resolve_default(&spec);
        assert_eq!(table.decision(&sibling), Some(Decision::Implicit));
        assert!(table.imports().is_empty());
    }

    #[test]
    fn test_java_lang_is_imported_unless_skipped() {
        let string = ClassName::java_lang("String").unwrap();
        let spec = TypeSpec::class("Holder").unwrap().add_field(field("s", string.clone()));

        let table = resolve_default(&spec);
        assert_eq!(table.decision(&string), Some(Decision::Simple));

        let options = ImportOptions {
            skip_java_lang_imports: true,
            ..ImportOptions::default()
        };
        let table = resolve(&spec, &package(), &options).unwrap();
        assert_eq!(table.decision(&string), Some(Decision::Implicit));
        assert!(table.imports().is_empty());
    }

    #[test]
    fn test_foreign_nested_class_in_same_package_is_imported() {
        let entry = class("com.example", "Registry").nested("Entry").unwrap();
        let spec = TypeSpec::class("Holder").unwrap().add_field(field("e", entry.clone()));
        let table = resolve_default(&spec);
        assert_eq!(table.decision(&entry), Some(Decision::Simple));
        assert_eq!(import_names(&table), ["com.example.Registry.Entry"]);
    }

    // ========================================================================
    // Collisions
    // ========================================================================

    #[test]
    fn test_first_seen_wins_collision() {
        let util_list = class("java.util", "List");
        let awt_list = class("java.awt", "List");
        let spec = TypeSpec::class("Holder")
            .unwrap()
            .add_field(field("a", util_list.clone()))
            .add_field(field("b", awt_list.clone()));
        let table = resolve_default(&spec);
        assert_eq!(table.decision(&util_list), Some(Decision::Simple));
        assert_eq!(table.decision(&awt_list), Some(Decision::Qualified));
        assert_eq!(import_names(&table), ["java.util.List"]);
    }

    #[test]
    fn test_static_fields_are_collected_before_instance_fields() {
        let util_list = class("java.util", "List");
        let awt_list = class("java.awt", "List");
        let spec = TypeSpec::class("Holder")
            .unwrap()
            .add_field(field("a", util_list.clone()))
            .add_field(field("B", awt_list.clone()).add_modifiers([jpoet_syntax::Modifier::Static]));
        let table = resolve_default(&spec);
        assert_eq!(table.decision(&awt_list), Some(Decision::Simple));
        assert_eq!(table.decision(&util_list), Some(Decision::Qualified));
    }

    #[test]
    fn test_java_lang_names_are_not_shadowed_by_imports() {
        let foreign_string = class("com.other", "String");
        let string = ClassName::java_lang("String").unwrap();
        let spec = TypeSpec::class("Holder")
            .unwrap()
            .add_field(field("a", foreign_string.clone()))
            .add_field(field("b", string.clone()));
        let table = resolve_default(&spec);
        assert_eq!(table.decision(&foreign_string), Some(Decision::Qualified));
        assert_eq!(table.decision(&string), Some(Decision::Simple));
    }

    #[test]
    fn test_local_nested_type_wins_over_imports() {
        let util_list = class("java.util", "List");
        let local_list = class("com.example", "Holder").nested("List").unwrap();
        let spec = TypeSpec::class("Holder")
            .unwrap()
            .add_field(field("a", util_list.clone()))
            .add_field(field("b", local_list.clone()))
            .add_type(TypeSpec::class("List").unwrap());
        let table = resolve_default(&spec);
        assert_eq!(table.decision(&util_list), Some(Decision::Qualified));
        assert_eq!(table.decision(&local_list), Some(Decision::Implicit));
        assert!(table.is_local(&local_list));
        assert!(table.imports().is_empty());
    }

    #[test]
    fn test_always_qualify() {
        let list = class("java.util", "List");
        let spec = TypeSpec::class("Holder").unwrap().add_field(field("a", list.clone()));
        let options = ImportOptions {
            always_qualify: ["List".to_string()].into_iter().collect(),
            ..ImportOptions::default()
        };
        let table = resolve(&spec, &package(), &options).unwrap();
        assert_eq!(table.decision(&list), Some(Decision::Qualified));
    }

    // ========================================================================
    // Collection reach
    // ========================================================================

    #[test]
    fn test_symbols_inside_fragments_and_anonymous_bodies() {
        let runnable = ClassName::java_lang("Runnable").unwrap();
        let system = ClassName::java_lang("System").unwrap();
        let run = MethodSpec::method("run")
            .unwrap()
            .add_statement("$T.out.println()", [Arg::ty(system.clone())])
            .unwrap();
        let body = TypeSpec::anonymous(CodeBlock::new())
            .add_superinterface(runnable.clone())
            .add_method(run);
        let init = CodeBlock::of("$L", [Arg::from(body)]).unwrap();
        let spec = TypeSpec::class("Holder")
            .unwrap()
            .add_field(field("task", runnable.clone()).with_initializer(init));

        let table = resolve_default(&spec);
        let seen: Vec<_> = table.symbols().map(|(class, _)| class.simple_name().to_string()).collect();
        assert_eq!(seen, ["Runnable", "System"]);
    }

    #[test]
    fn test_invalid_declared_name_is_rejected() {
        let mut spec = TypeSpec::class("Holder").unwrap();
        spec.fields.push(FieldSpec {
            name: "not valid".to_string(),
            ..field("ok", TypeName::INT)
        });
        let err = resolve(&spec, &package(), &ImportOptions::default()).unwrap_err();
        assert!(matches!(err, RenderError::Syntax(_)));
    }

    #[test]
    fn test_anonymous_root_is_rejected() {
        let spec = TypeSpec::anonymous(CodeBlock::new());
        let err = resolve(&spec, &package(), &ImportOptions::default()).unwrap_err();
        assert!(matches!(err, RenderError::AnonymousRoot));
    }
}
