//! Emit declarations: types, enum constants, anonymous classes, fields, methods and parameters.
//!
//! ## Notes
//! - Members are separated by exactly one blank line; the line after an opening brace is never blank.
//! - Member order is fixed: enum constants, static fields, static block, instance fields, initializer block,
//!   constructors, methods, nested types.
//! - Modifiers implied by the enclosing kind are dropped (an interface method is already `public abstract`).

use std::collections::BTreeSet;

use jpoet_syntax::{
    ClassName, CodeBlock, FieldSpec, MethodKind, MethodSpec, Modifier, ParameterSpec, TypeKind, TypeName, TypeSpec,
};

use super::errors::RenderError;
use super::imports::anonymous_supertype;
use super::writer::{Binding, CodeWriter};

impl<'t> CodeWriter<'t> {
    /// Emit a named type declaration followed by a newline.
    #[tracing::instrument(level = "trace", skip_all, fields(name = spec.name.as_deref().unwrap_or_default()))]
    pub(crate) fn emit_type(
        &mut self,
        spec: &'t TypeSpec,
        class: Option<&ClassName>,
        implicit_modifiers: &BTreeSet<Modifier>,
    ) -> Result<(), RenderError> {
        let Some(name) = spec.name.as_deref() else {
            return Err(RenderError::MissingName {
                what: "nested type",
                context: self.context(),
            });
        };

        self.type_stack.push((class.cloned(), spec));
        self.push_scope();

        self.emit_javadoc(&spec.javadoc, &spec.record_components)?;
        self.emit_annotations(&spec.annotations, false)?;
        let mut implicit = implicit_modifiers.clone();
        implicit.extend(spec.kind.as_member_modifiers());
        self.emit_modifiers(&spec.modifiers, &implicit);
        self.out.write(spec.kind.keyword());
        self.out.write(" ");
        self.out.write(name);
        self.emit_type_variables(&spec.type_variables);

        if spec.kind == TypeKind::Record {
            self.emit_record_header(spec)?;
        }
        self.emit_supertype_clauses(spec);

        self.out.write(" {\n");
        self.emit_body(spec, class)?;
        self.out.write("}\n");

        self.pop_scope();
        self.type_stack.pop();
        Ok(())
    }

    fn emit_record_header(&mut self, spec: &'t TypeSpec) -> Result<(), RenderError> {
        self.out.write("(");
        let count = spec.record_components.len();
        for (i, component) in spec.record_components.iter().enumerate() {
            if i > 0 {
                self.out.write(",");
                self.out.wrapping_space();
            }
            self.emit_parameter(component, spec.record_varargs && i + 1 == count)?;
        }
        self.out.write(")");
        Ok(())
    }

    fn emit_supertype_clauses(&mut self, spec: &'t TypeSpec) {
        let object: Option<TypeName> = ClassName::java_lang("Object").ok().map(TypeName::from);
        let superclass = spec.superclass.iter().filter(|superclass| Some(*superclass) != object.as_ref());
        let (extends, implements): (Vec<&TypeName>, Vec<&TypeName>) = match spec.kind {
            TypeKind::Interface => (spec.superinterfaces.iter().collect(), Vec::new()),
            TypeKind::Annotation => (Vec::new(), Vec::new()),
            TypeKind::Class | TypeKind::Enum | TypeKind::Record => {
                (superclass.collect(), spec.superinterfaces.iter().collect())
            }
        };
        let permits: Vec<&TypeName> = spec.permitted_subclasses.iter().collect();

        for (keyword, types) in [(" extends", extends), (" implements", implements), (" permits", permits)] {
            if types.is_empty() {
                continue;
            }
            self.out.write(keyword);
            for (i, type_name) in types.into_iter().enumerate() {
                if i > 0 {
                    self.out.write(",");
                }
                self.out.write(" ");
                self.write_type(type_name);
            }
        }
    }

    /// Emit the members between the braces of `spec`, one level deeper than the current indentation.
    fn emit_body(&mut self, spec: &'t TypeSpec, class: Option<&ClassName>) -> Result<(), RenderError> {
        self.out.indent();
        let mut first = true;

        let has_other_members = !spec.fields.is_empty()
            || !spec.static_block.is_empty()
            || !spec.initializer_block.is_empty()
            || !spec.methods.is_empty()
            || !spec.type_specs.is_empty();
        let constant_count = spec.enum_constants.len();
        for (i, (name, constant)) in spec.enum_constants.iter().enumerate() {
            self.member_separator(&mut first);
            self.emit_enum_constant(name, constant)?;
            if i + 1 < constant_count {
                self.out.write(",\n");
            } else if has_other_members {
                self.out.write(";\n");
            } else {
                self.out.newline();
            }
        }

        let field_modifiers = spec.kind.implicit_field_modifiers();
        for field in spec.static_fields() {
            self.member_separator(&mut first);
            self.emit_field(field, &field_modifiers)?;
        }
        if !spec.static_block.is_empty() {
            self.member_separator(&mut first);
            self.emit_block("static {\n", &spec.static_block)?;
        }
        for field in spec.instance_fields() {
            self.member_separator(&mut first);
            self.emit_field(field, &field_modifiers)?;
        }
        if !spec.initializer_block.is_empty() {
            self.member_separator(&mut first);
            self.emit_block("{\n", &spec.initializer_block)?;
        }

        for method in spec.iter_constructors().chain(spec.iter_methods()) {
            self.member_separator(&mut first);
            self.emit_method(method, spec)?;
        }

        let type_modifiers = spec.kind.implicit_type_modifiers();
        for nested in &spec.type_specs {
            self.member_separator(&mut first);
            let nested_class = match (class, nested.name.as_deref()) {
                (Some(enclosing), Some(name)) => Some(enclosing.nested(name)?),
                _ => None,
            };
            self.emit_type(nested, nested_class.as_ref(), &type_modifiers)?;
        }

        self.out.dedent();
        Ok(())
    }

    fn member_separator(&mut self, first: &mut bool) {
        if !*first {
            self.out.newline();
        }
        *first = false;
    }

    /// Emit `opening`, the indented fragment, and a closing brace line. Used for static and instance initializers.
    fn emit_block(&mut self, opening: &str, code: &'t CodeBlock) -> Result<(), RenderError> {
        self.out.write(opening);
        self.out.indent();
        self.push_scope();
        self.emit_code(code)?;
        self.ensure_line_start();
        self.pop_scope();
        self.out.dedent();
        self.out.write("}\n");
        Ok(())
    }

    /// Emit `NAME`, `NAME(args)` or `NAME(args) { ... }`, without a trailing separator.
    fn emit_enum_constant(&mut self, name: &str, constant: &'t TypeSpec) -> Result<(), RenderError> {
        self.emit_javadoc(&constant.javadoc, &[])?;
        self.emit_annotations(&constant.annotations, false)?;
        self.out.write(name);
        if !constant.anonymous_type_arguments.is_empty() {
            self.out.write("(");
            self.emit_code(&constant.anonymous_type_arguments)?;
            self.out.write(")");
        }
        if !constant.has_members() {
            return Ok(());
        }
        self.out.write(" {\n");
        self.emit_anonymous_body(constant)?;
        self.out.write("}");
        Ok(())
    }

    /// Emit an anonymous class expression, `new Supertype(args) { ... }`, without a trailing newline.
    pub(crate) fn emit_anonymous(&mut self, spec: &'t TypeSpec) -> Result<(), RenderError> {
        let supertype = anonymous_supertype(spec)?;
        self.out.write("new ");
        self.write_type(&supertype);
        self.out.write("(");
        self.emit_code(&spec.anonymous_type_arguments)?;
        self.out.write(") {\n");
        self.emit_anonymous_body(spec)?;
        self.out.write("}");
        Ok(())
    }

    fn emit_anonymous_body(&mut self, spec: &'t TypeSpec) -> Result<(), RenderError> {
        self.type_stack.push((None, spec));
        self.push_scope();
        self.emit_body(spec, None)?;
        self.pop_scope();
        self.type_stack.pop();
        Ok(())
    }

    fn emit_field(&mut self, field: &'t FieldSpec, implicit_modifiers: &BTreeSet<Modifier>) -> Result<(), RenderError> {
        self.emit_javadoc(&field.javadoc, &[])?;
        self.emit_annotations(&field.annotations, false)?;
        self.emit_modifiers(&field.modifiers, implicit_modifiers);
        self.write_type(&field.type_name);
        self.out.write(" ");
        self.out.write(&field.name);
        if let Some(initializer) = &field.initializer {
            self.out.write(" = ");
            self.push_scope();
            self.emit_code(initializer)?;
            self.pop_scope();
        }
        self.out.write(";\n");
        Ok(())
    }

    fn emit_method(&mut self, method: &'t MethodSpec, enclosing: &'t TypeSpec) -> Result<(), RenderError> {
        self.push_scope();
        self.emit_javadoc(&method.javadoc, &method.parameters)?;
        self.emit_annotations(&method.annotations, false)?;
        self.emit_modifiers(&method.modifiers, &enclosing.kind.implicit_method_modifiers());
        if !method.type_variables.is_empty() {
            self.emit_type_variables(&method.type_variables);
            self.out.write(" ");
        }

        match method.kind {
            MethodKind::Method => {
                self.write_type(method.return_type.as_ref().unwrap_or(&TypeName::VOID));
                self.out.write(" ");
                self.out.write(&method.name);
                self.emit_parameter_list(method)?;
            }
            MethodKind::Constructor => {
                let name = self.enclosing_name(enclosing)?;
                self.out.write(name);
                self.emit_parameter_list(method)?;
            }
            MethodKind::CompactConstructor => {
                let name = self.enclosing_name(enclosing)?;
                self.out.write(name);
            }
        }

        if let Some(default_value) = method.default_value.as_ref().filter(|value| !value.is_empty()) {
            self.out.write(" default ");
            self.emit_code(default_value)?;
        }

        if !method.exceptions.is_empty() {
            self.out.wrapping_space();
            self.out.write("throws");
            for (i, exception) in method.exceptions.iter().enumerate() {
                if i > 0 {
                    self.out.write(",");
                }
                self.out.wrapping_space();
                self.write_type(exception);
            }
        }

        if has_body(method, enclosing.kind) {
            self.out.write(" {\n");
            self.out.indent();
            self.emit_code(&method.code)?;
            self.ensure_line_start();
            self.out.dedent();
            self.out.write("}\n");
        } else {
            self.out.write(";\n");
        }
        self.pop_scope();
        Ok(())
    }

    fn enclosing_name(&self, enclosing: &'t TypeSpec) -> Result<&'t str, RenderError> {
        enclosing.name.as_deref().ok_or_else(|| RenderError::MissingName {
            what: "enclosing type of a constructor",
            context: self.context(),
        })
    }

    fn emit_parameter_list(&mut self, method: &'t MethodSpec) -> Result<(), RenderError> {
        self.out.write("(");
        self.out.zero_width_space();
        let count = method.parameters.len();
        for (i, parameter) in method.parameters.iter().enumerate() {
            if i > 0 {
                self.out.write(",");
                self.out.wrapping_space();
            }
            self.emit_parameter(parameter, method.varargs && i + 1 == count)?;
        }
        self.out.write(")");
        Ok(())
    }

    /// Emit a parameter or record component; `varargs` prints an array type as `T...`.
    fn emit_parameter(&mut self, parameter: &'t ParameterSpec, varargs: bool) -> Result<(), RenderError> {
        self.emit_annotations(&parameter.annotations, true)?;
        self.emit_modifiers(&parameter.modifiers, &BTreeSet::new());
        let type_text = if varargs {
            parameter.type_name.render_varargs(&mut |class: &ClassName| self.lookup(class))
        } else {
            self.type_text(&parameter.type_name)
        };
        self.out.write(&type_text);
        self.out.write(" ");
        self.out.write(&parameter.name);
        self.declare(&parameter.name, Binding::Local);
        Ok(())
    }
}

/// Whether a method prints a `{ ... }` body rather than ending in `;`.
fn has_body(method: &MethodSpec, kind: TypeKind) -> bool {
    if method.modifiers.contains(&Modifier::Abstract) || method.modifiers.contains(&Modifier::Native) {
        return false;
    }
    if kind.is_interface_like() {
        return [Modifier::Default, Modifier::Static, Modifier::Private]
            .iter()
            .any(|modifier| method.modifiers.contains(modifier));
    }
    true
}
