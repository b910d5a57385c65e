//! The code writer: turns a resolved declaration tree into text.
//!
//! [`CodeWriter`] owns the transient state of one render: the [`LineWriter`] (indentation, columns, wrap points),
//! the stack of types being emitted (for nested-name visibility) and the lexical scope stack (for shadowing). The
//! import decisions are read-only here; the writer never changes them, it only falls back to a canonical name when a
//! simple name would refer to the wrong entity at a particular use site.
//!
//! ## Notes
//! - Declaration-specific emission (types, members, parameters) lives in [`super::decls`].
//! - Every method returns `Result`; an error aborts the render and the partial buffer is dropped.

use std::collections::{BTreeSet, HashMap};

use jpoet_syntax::{AnnotationSpec, ClassName, CodeBlock, Modifier, NameResolver, PackageName, ParameterSpec, Token};
use jpoet_syntax::{TypeName, TypeSpec, TypeVariableName};

use super::errors::RenderError;
use super::imports::{Decision, ImportTable};
use crate::format::{LinePrefix, LineWriter, RenderConfig};

/// What a name in a lexical scope frame denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Binding {
    TypeVariable,
    Local,
}

/// Stateful Java emitter for one render.
pub struct CodeWriter<'t> {
    pub(crate) out: LineWriter,
    imports: &'t ImportTable,
    /// Types currently being emitted, outermost first. Anonymous bodies carry no class name.
    pub(crate) type_stack: Vec<(Option<ClassName>, &'t TypeSpec)>,
    scopes: Vec<HashMap<String, Binding>>,
}

impl<'t> CodeWriter<'t> {
    pub fn new(config: &RenderConfig, imports: &'t ImportTable) -> Self {
        Self {
            out: LineWriter::new(config),
            imports,
            type_stack: Vec::new(),
            scopes: Vec::new(),
        }
    }

    pub fn finish(self) -> String {
        self.out.finish()
    }

    /// Emit a whole compilation unit: file comment, package line, imports, then the top-level type.
    pub fn emit_file(
        &mut self,
        file_comment: &'t CodeBlock,
        package: &PackageName,
        root: &'t TypeSpec,
        root_class: &ClassName,
    ) -> Result<(), RenderError> {
        if !file_comment.is_empty() {
            self.out.set_prefix(LinePrefix::Comment);
            self.emit_code(file_comment)?;
            self.ensure_line_start();
            self.out.set_prefix(LinePrefix::None);
            self.out.newline();
        }

        if !package.is_default() {
            self.out.writeln(&format!("package {package};"));
            self.out.newline();
        }

        let imports = self.imports.imports();
        for class in imports {
            self.out.writeln(&format!("import {};", class.canonical_name()));
        }
        if !imports.is_empty() {
            self.out.newline();
        }

        self.emit_type(root, Some(root_class), &BTreeSet::new())
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    pub(crate) fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    pub(crate) fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    pub(crate) fn declare(&mut self, name: &str, binding: Binding) {
        if let Some(frame) = self.scopes.last_mut() {
            frame.insert(name.to_string(), binding);
        }
    }

    fn is_shadowed(&self, name: &str) -> bool {
        self.scopes.iter().any(|frame| frame.contains_key(name))
    }

    /// Name of the innermost named type, for error messages.
    pub(crate) fn context(&self) -> String {
        self.type_stack
            .iter()
            .rev()
            .find_map(|(class, _)| class.as_ref())
            .map_or_else(|| "the file header".to_string(), ClassName::canonical_name)
    }

    // ========================================================================
    // Name lookup
    // ========================================================================

    /// The text printed for `class` at the current position.
    ///
    /// ## Notes
    /// - Simple, Implicit and local classes print the shortest suffix of their nested path that resolves back to
    ///   them from here (`Inner` inside `Outer`, `Map.Entry` when only `Map` is imported).
    /// - If that suffix starts with a name bound in a lexical scope, or no suffix resolves, the canonical name is
    ///   printed instead.
    pub(crate) fn lookup(&self, class: &ClassName) -> String {
        let nameable = self.imports.is_local(class)
            || matches!(
                self.imports.decision(class),
                Some(Decision::Simple | Decision::Implicit)
            );
        if nameable {
            if let Some(suffix) = self.visible_suffix(class) {
                return suffix;
            }
        }
        class.canonical_name()
    }

    fn visible_suffix(&self, class: &ClassName) -> Option<String> {
        let names: Vec<&str> = class.simple_names().collect();
        let mut candidate = Some(class.clone());
        while let Some(current) = candidate {
            if self.resolve_visible(current.simple_name()).as_ref() == Some(&current) {
                let offset = current.depth() - 1;
                if self.is_shadowed(names[offset]) {
                    return None;
                }
                return Some(names[offset..].join("."));
            }
            candidate = current.enclosing_class_name();
        }
        None
    }

    /// The class a bare simple name denotes here: a member type of an enclosing type, the top-level type, or an
    /// imported/implicit class.
    fn resolve_visible(&self, simple_name: &str) -> Option<ClassName> {
        for (class, spec) in self.type_stack.iter().rev() {
            let Some(class) = class else { continue };
            if spec.type_specs.iter().any(|nested| nested.name.as_deref() == Some(simple_name)) {
                return class.nested(simple_name).ok();
            }
        }
        if let Some((Some(root), _)) = self.type_stack.first() {
            if root.simple_name() == simple_name {
                return Some(root.clone());
            }
        }
        self.imports.visible(simple_name).cloned()
    }

    pub(crate) fn type_text(&self, type_name: &TypeName) -> String {
        type_name.render(&mut |class: &ClassName| self.lookup(class))
    }

    pub(crate) fn write_type(&mut self, type_name: &TypeName) {
        let text = self.type_text(type_name);
        self.out.write(&text);
    }

    // ========================================================================
    // Fragments
    // ========================================================================

    /// Substitute and emit a fragment.
    pub(crate) fn emit_code(&mut self, code: &'t CodeBlock) -> Result<(), RenderError> {
        let tokens = code.substitute(self);
        for token in tokens {
            match token {
                Token::Text(text) => self.out.write(&text),
                Token::Quoted(text) | Token::Symbol(text) | Token::Identifier(text) => self.out.write(&text),
                Token::WrappingSpace => self.out.wrapping_space(),
                Token::ZeroWidthSpace => self.out.zero_width_space(),
                Token::Indent => self.out.indent(),
                Token::Unindent => {
                    if self.out.current_indent() == 0 {
                        return Err(RenderError::UnbalancedIndent { context: self.context() });
                    }
                    self.out.dedent();
                }
                Token::TypeDecl(spec) => self.emit_anonymous(spec)?,
            }
        }
        Ok(())
    }

    pub(crate) fn ensure_line_start(&mut self) {
        if !self.out.is_at_line_start() {
            self.out.newline();
        }
    }

    /// Emit a javadoc block, followed by `@param` lines for every documented parameter.
    pub(crate) fn emit_javadoc(&mut self, javadoc: &'t CodeBlock, parameters: &'t [ParameterSpec]) -> Result<(), RenderError> {
        let documented: Vec<&'t ParameterSpec> = parameters.iter().filter(|p| !p.javadoc.is_empty()).collect();
        if javadoc.is_empty() && documented.is_empty() {
            return Ok(());
        }

        self.out.writeln("/**");
        self.out.set_prefix(LinePrefix::Javadoc);
        self.emit_code(javadoc)?;
        self.ensure_line_start();
        if !javadoc.is_empty() && !documented.is_empty() {
            self.out.newline();
        }
        for parameter in documented {
            self.out.write(&format!("@param {} ", parameter.name));
            self.emit_code(&parameter.javadoc)?;
            self.ensure_line_start();
        }
        self.out.set_prefix(LinePrefix::None);
        self.out.writeln(" */");
        Ok(())
    }

    /// Emit annotations, each on its own line, or inline followed by a space.
    pub(crate) fn emit_annotations(&mut self, annotations: &'t [AnnotationSpec], inline: bool) -> Result<(), RenderError> {
        for annotation in annotations {
            self.emit_annotation(annotation, inline)?;
            if inline {
                self.out.write(" ");
            } else {
                self.out.newline();
            }
        }
        Ok(())
    }

    fn emit_annotation(&mut self, annotation: &'t AnnotationSpec, inline: bool) -> Result<(), RenderError> {
        let name = self.lookup(&annotation.type_name);
        self.out.write(&format!("@{name}"));

        let members = &annotation.members;
        if members.is_empty() {
            return Ok(());
        }
        if members.len() == 1 {
            if let Some(values) = members.get("value") {
                self.out.write("(");
                self.emit_annotation_values(values)?;
                self.out.write(")");
                return Ok(());
            }
        }

        let (open, separator, close) = if inline { ("(", ", ", ")") } else { ("(\n", ",\n", "\n)") };
        self.out.write(open);
        if !inline {
            self.out.indent();
            self.out.indent();
        }
        for (i, (member, values)) in members.iter().enumerate() {
            if i > 0 {
                self.out.write(separator);
            }
            self.out.write(&format!("{member} = "));
            self.emit_annotation_values(values)?;
        }
        if !inline {
            self.out.dedent();
            self.out.dedent();
        }
        self.out.write(close);
        Ok(())
    }

    fn emit_annotation_values(&mut self, values: &'t [CodeBlock]) -> Result<(), RenderError> {
        if let [single] = values {
            return self.emit_code(single);
        }
        self.out.write("{");
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.out.write(", ");
            }
            self.emit_code(value)?;
        }
        self.out.write("}");
        Ok(())
    }

    /// Emit `modifiers` in canonical order, skipping the ones implied by the context.
    pub(crate) fn emit_modifiers(&mut self, modifiers: &BTreeSet<Modifier>, implicit: &BTreeSet<Modifier>) {
        for modifier in modifiers.difference(implicit) {
            self.out.write(modifier.as_str());
            self.out.write(" ");
        }
    }

    /// Emit `<T extends A & B, U>` and bind the variables in the innermost scope.
    pub(crate) fn emit_type_variables(&mut self, variables: &'t [TypeVariableName]) {
        if variables.is_empty() {
            return;
        }
        for variable in variables {
            self.declare(&variable.name, Binding::TypeVariable);
        }
        self.out.write("<");
        for (i, variable) in variables.iter().enumerate() {
            if i > 0 {
                self.out.write(", ");
            }
            self.out.write(&variable.name);
            for (j, bound) in variable.bounds.iter().enumerate() {
                self.out.write(if j == 0 { " extends " } else { " & " });
                self.write_type(bound);
            }
        }
        self.out.write(">");
    }
}

impl NameResolver for CodeWriter<'_> {
    fn resolve_symbol(&mut self, class: &ClassName) -> String {
        self.lookup(class)
    }

    fn resolve_identifier(&mut self, name: &str) -> String {
        self.declare(name, Binding::Local);
        name.to_string()
    }
}
