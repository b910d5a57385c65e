//! Declarations: the nodes of the tree rendered into one compilation unit.
//!
//! Every node owns its children outright (`Vec`, `IndexMap`, `Box`), so a [`TypeSpec`] is a strict ownership tree
//! with a single deterministic traversal order. Fields are public for reading; construction goes through the
//! validating `new` functions and the consuming `add_*` / `with_*` helpers.
//!
//! ## Notes
//! - Member emission order is fixed: enum constants, static fields, static block, instance fields, initializer
//!   block, constructors, methods, nested types. Symbol collection walks the tree in the same order.
//! - Names that arrive through deserialization are not validated here; the emitter checks them before it writes
//!   anything.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use jpoet_core::{Modifier, TypeKind};
use serde::Deserialize;

use crate::code::{Arg, CodeBlock};
use crate::errors::{SyntaxError, check_identifier};
use crate::names::ClassName;
use crate::types::{TypeName, TypeVariableName};

// ============================================================================
// Annotations
// ============================================================================

/// An annotation use: `@Type` or `@Type(member = value, ...)`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnotationSpec {
    #[serde(rename = "type")]
    pub type_name: ClassName,
    /// Member values in insertion order. More than one value per member prints as an array initializer.
    #[serde(default)]
    pub members: IndexMap<String, Vec<CodeBlock>>,
}

impl AnnotationSpec {
    pub fn new(type_name: ClassName) -> Self {
        Self {
            type_name,
            members: IndexMap::new(),
        }
    }

    pub fn add_member(mut self, name: &str, value: CodeBlock) -> Result<Self, SyntaxError> {
        check_identifier(name)?;
        self.members.entry(name.to_string()).or_default().push(value);
        Ok(self)
    }
}

// ============================================================================
// Parameters, record components and fields
// ============================================================================

/// A method parameter or a record component.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: TypeName,
    #[serde(default)]
    pub modifiers: BTreeSet<Modifier>,
    #[serde(default)]
    pub annotations: Vec<AnnotationSpec>,
    /// Emitted as an `@param` line in the enclosing declaration's javadoc.
    #[serde(default)]
    pub javadoc: CodeBlock,
}

impl ParameterSpec {
    pub fn new(name: &str, type_name: impl Into<TypeName>) -> Result<Self, SyntaxError> {
        check_identifier(name)?;
        Ok(Self {
            name: name.to_string(),
            type_name: type_name.into(),
            modifiers: BTreeSet::new(),
            annotations: Vec::new(),
            javadoc: CodeBlock::new(),
        })
    }

    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn add_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_javadoc(mut self, javadoc: CodeBlock) -> Self {
        self.javadoc = javadoc;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: TypeName,
    #[serde(default)]
    pub modifiers: BTreeSet<Modifier>,
    #[serde(default)]
    pub annotations: Vec<AnnotationSpec>,
    #[serde(default)]
    pub javadoc: CodeBlock,
    #[serde(default)]
    pub initializer: Option<CodeBlock>,
}

impl FieldSpec {
    pub fn new(name: &str, type_name: impl Into<TypeName>) -> Result<Self, SyntaxError> {
        check_identifier(name)?;
        Ok(Self {
            name: name.to_string(),
            type_name: type_name.into(),
            modifiers: BTreeSet::new(),
            annotations: Vec::new(),
            javadoc: CodeBlock::new(),
            initializer: None,
        })
    }

    pub fn add_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn add_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_javadoc(mut self, javadoc: CodeBlock) -> Self {
        self.javadoc = javadoc;
        self
    }

    pub fn with_initializer(mut self, initializer: CodeBlock) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

// ============================================================================
// Methods
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    #[default]
    Method,
    Constructor,
    /// A record's canonical constructor written without a parameter list.
    CompactConstructor,
}

/// Name carried by constructors; they print the enclosing type's name instead.
pub const CONSTRUCTOR_NAME: &str = "<init>";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodSpec {
    #[serde(default = "constructor_name")]
    pub name: String,
    #[serde(default)]
    pub kind: MethodKind,
    #[serde(default)]
    pub modifiers: BTreeSet<Modifier>,
    #[serde(default)]
    pub annotations: Vec<AnnotationSpec>,
    #[serde(default)]
    pub javadoc: CodeBlock,
    #[serde(default)]
    pub type_variables: Vec<TypeVariableName>,
    /// `None` prints `void`; ignored for constructors.
    #[serde(default)]
    pub return_type: Option<TypeName>,
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
    /// The last parameter (an array) is printed as `T... name`.
    #[serde(default)]
    pub varargs: bool,
    #[serde(default)]
    pub exceptions: Vec<TypeName>,
    #[serde(default)]
    pub code: CodeBlock,
    /// Annotation-type member default: `String value() default "";`.
    #[serde(default)]
    pub default_value: Option<CodeBlock>,
}

fn constructor_name() -> String {
    CONSTRUCTOR_NAME.to_string()
}

impl MethodSpec {
    pub fn method(name: &str) -> Result<Self, SyntaxError> {
        check_identifier(name)?;
        Ok(Self::with_kind(name.to_string(), MethodKind::Method))
    }

    pub fn constructor() -> Self {
        Self::with_kind(constructor_name(), MethodKind::Constructor)
    }

    pub fn compact_constructor() -> Self {
        Self::with_kind(constructor_name(), MethodKind::CompactConstructor)
    }

    fn with_kind(name: String, kind: MethodKind) -> Self {
        Self {
            name,
            kind,
            modifiers: BTreeSet::new(),
            annotations: Vec::new(),
            javadoc: CodeBlock::new(),
            type_variables: Vec::new(),
            return_type: None,
            parameters: Vec::new(),
            varargs: false,
            exceptions: Vec::new(),
            code: CodeBlock::new(),
            default_value: None,
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.kind != MethodKind::Method
    }

    pub fn add_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn add_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_javadoc(mut self, javadoc: CodeBlock) -> Self {
        self.javadoc = javadoc;
        self
    }

    pub fn add_type_variable(mut self, variable: TypeVariableName) -> Self {
        self.type_variables.push(variable);
        self
    }

    pub fn returns(mut self, return_type: impl Into<TypeName>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn add_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_varargs(mut self, varargs: bool) -> Self {
        self.varargs = varargs;
        self
    }

    pub fn add_exception(mut self, exception: impl Into<TypeName>) -> Self {
        self.exceptions.push(exception.into());
        self
    }

    pub fn with_code(mut self, code: CodeBlock) -> Self {
        self.code = code;
        self
    }

    pub fn add_statement(mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Result<Self, SyntaxError> {
        self.code.add_statement(format, args)?;
        Ok(self)
    }

    pub fn with_default_value(mut self, value: CodeBlock) -> Self {
        self.default_value = Some(value);
        self
    }
}

// ============================================================================
// Types
// ============================================================================

/// A class, interface, enum, record or annotation type; or, without a name, an anonymous class body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeSpec {
    #[serde(default = "default_kind")]
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    /// Constructor arguments of an anonymous class or enum constant: the `(args)` in `new Base(args) {`.
    #[serde(default)]
    pub anonymous_type_arguments: CodeBlock,
    #[serde(default)]
    pub modifiers: BTreeSet<Modifier>,
    #[serde(default)]
    pub annotations: Vec<AnnotationSpec>,
    #[serde(default)]
    pub javadoc: CodeBlock,
    #[serde(default)]
    pub type_variables: Vec<TypeVariableName>,
    #[serde(default)]
    pub superclass: Option<TypeName>,
    #[serde(default)]
    pub superinterfaces: Vec<TypeName>,
    #[serde(default)]
    pub permitted_subclasses: Vec<TypeName>,
    #[serde(default)]
    pub record_components: Vec<ParameterSpec>,
    #[serde(default)]
    pub record_varargs: bool,
    /// Constant name to optional body; an empty anonymous spec means a bare constant.
    #[serde(default)]
    pub enum_constants: IndexMap<String, TypeSpec>,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    #[serde(default)]
    pub static_block: CodeBlock,
    #[serde(default)]
    pub initializer_block: CodeBlock,
    #[serde(default)]
    pub methods: Vec<MethodSpec>,
    #[serde(default)]
    pub type_specs: Vec<TypeSpec>,
}

fn default_kind() -> TypeKind {
    TypeKind::Class
}

impl TypeSpec {
    /// A named declaration of `kind`.
    pub fn new(kind: TypeKind, name: &str) -> Result<Self, SyntaxError> {
        check_identifier(name)?;
        Ok(Self::empty(kind, Some(name.to_string())))
    }

    pub fn class(name: &str) -> Result<Self, SyntaxError> {
        Self::new(TypeKind::Class, name)
    }

    pub fn interface(name: &str) -> Result<Self, SyntaxError> {
        Self::new(TypeKind::Interface, name)
    }

    pub fn enumeration(name: &str) -> Result<Self, SyntaxError> {
        Self::new(TypeKind::Enum, name)
    }

    pub fn record(name: &str) -> Result<Self, SyntaxError> {
        Self::new(TypeKind::Record, name)
    }

    pub fn annotation(name: &str) -> Result<Self, SyntaxError> {
        Self::new(TypeKind::Annotation, name)
    }

    /// An anonymous class body, constructed with `arguments`.
    pub fn anonymous(arguments: CodeBlock) -> Self {
        let mut spec = Self::empty(TypeKind::Class, None);
        spec.anonymous_type_arguments = arguments;
        spec
    }

    fn empty(kind: TypeKind, name: Option<String>) -> Self {
        Self {
            kind,
            name,
            anonymous_type_arguments: CodeBlock::new(),
            modifiers: BTreeSet::new(),
            annotations: Vec::new(),
            javadoc: CodeBlock::new(),
            type_variables: Vec::new(),
            superclass: None,
            superinterfaces: Vec::new(),
            permitted_subclasses: Vec::new(),
            record_components: Vec::new(),
            record_varargs: false,
            enum_constants: IndexMap::new(),
            fields: Vec::new(),
            static_block: CodeBlock::new(),
            initializer_block: CodeBlock::new(),
            methods: Vec::new(),
            type_specs: Vec::new(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }

    /// Whether an anonymous or enum-constant body has anything to print between braces.
    pub fn has_members(&self) -> bool {
        !self.enum_constants.is_empty()
            || !self.fields.is_empty()
            || !self.static_block.is_empty()
            || !self.initializer_block.is_empty()
            || !self.methods.is_empty()
            || !self.type_specs.is_empty()
    }

    pub fn add_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn add_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_javadoc(mut self, javadoc: CodeBlock) -> Self {
        self.javadoc = javadoc;
        self
    }

    pub fn add_type_variable(mut self, variable: TypeVariableName) -> Self {
        self.type_variables.push(variable);
        self
    }

    pub fn with_superclass(mut self, superclass: impl Into<TypeName>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn add_superinterface(mut self, interface: impl Into<TypeName>) -> Self {
        self.superinterfaces.push(interface.into());
        self
    }

    pub fn add_permitted_subclass(mut self, subclass: impl Into<TypeName>) -> Self {
        self.permitted_subclasses.push(subclass.into());
        self
    }

    pub fn add_record_component(mut self, component: ParameterSpec) -> Self {
        self.record_components.push(component);
        self
    }

    pub fn with_record_varargs(mut self, varargs: bool) -> Self {
        self.record_varargs = varargs;
        self
    }

    pub fn add_enum_constant(self, name: &str) -> Result<Self, SyntaxError> {
        self.add_enum_constant_with(name, TypeSpec::anonymous(CodeBlock::new()))
    }

    /// An enum constant with constructor arguments and/or a class body.
    pub fn add_enum_constant_with(mut self, name: &str, body: TypeSpec) -> Result<Self, SyntaxError> {
        check_identifier(name)?;
        self.enum_constants.insert(name.to_string(), body);
        Ok(self)
    }

    pub fn add_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn add_static_block(mut self, block: &CodeBlock) -> Self {
        self.static_block.add_code(block);
        self
    }

    pub fn add_initializer_block(mut self, block: &CodeBlock) -> Self {
        self.initializer_block.add_code(block);
        self
    }

    pub fn add_method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    pub fn add_type(mut self, nested: TypeSpec) -> Self {
        self.type_specs.push(nested);
        self
    }

    /// Whether `field` is static, either explicitly or because this kind makes every field static.
    pub fn is_static_field(&self, field: &FieldSpec) -> bool {
        field.modifiers.contains(&Modifier::Static) || self.kind.implicit_field_modifiers().contains(&Modifier::Static)
    }

    pub fn static_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| self.is_static_field(f))
    }

    pub fn instance_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| !self.is_static_field(f))
    }

    pub fn iter_constructors(&self) -> impl Iterator<Item = &MethodSpec> {
        self.methods.iter().filter(|m| m.is_constructor())
    }

    pub fn iter_methods(&self) -> impl Iterator<Item = &MethodSpec> {
        self.methods.iter().filter(|m| !m.is_constructor())
    }
}
