//! Type references.
//!
//! A [`TypeName`] is anything that can appear in a type position: a primitive, a class, a parameterized class, an
//! array, a type variable or a wildcard. Rendering is delegated to a caller-supplied resolver for every
//! [`ClassName`] so the same tree prints `List`, `java.util.List` or `Outer.Inner` depending on import decisions.

use jpoet_core::PrimitiveType;
use serde::Deserialize;

use crate::names::ClassName;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeName {
    Primitive(PrimitiveType),
    Class(ClassName),
    Parameterized(ParameterizedTypeName),
    Array(Box<TypeName>),
    Variable(TypeVariableName),
    Wildcard(WildcardTypeName),
}

/// A generic class applied to type arguments (`Map<String, Integer>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ParameterizedTypeName {
    pub raw: ClassName,
    #[serde(default)]
    pub type_arguments: Vec<TypeName>,
}

/// A type variable. Bounds are only printed where the variable is declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct TypeVariableName {
    pub name: String,
    #[serde(default)]
    pub bounds: Vec<TypeName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WildcardTypeName {
    Unbounded,
    Extends(Box<TypeName>),
    Super(Box<TypeName>),
}

impl TypeName {
    pub const VOID: TypeName = TypeName::Primitive(PrimitiveType::Void);
    pub const BOOLEAN: TypeName = TypeName::Primitive(PrimitiveType::Boolean);
    pub const BYTE: TypeName = TypeName::Primitive(PrimitiveType::Byte);
    pub const SHORT: TypeName = TypeName::Primitive(PrimitiveType::Short);
    pub const INT: TypeName = TypeName::Primitive(PrimitiveType::Int);
    pub const LONG: TypeName = TypeName::Primitive(PrimitiveType::Long);
    pub const CHAR: TypeName = TypeName::Primitive(PrimitiveType::Char);
    pub const FLOAT: TypeName = TypeName::Primitive(PrimitiveType::Float);
    pub const DOUBLE: TypeName = TypeName::Primitive(PrimitiveType::Double);

    pub fn array_of(component: impl Into<TypeName>) -> Self {
        TypeName::Array(Box::new(component.into()))
    }

    pub fn parameterized(raw: ClassName, type_arguments: impl IntoIterator<Item = TypeName>) -> Self {
        TypeName::Parameterized(ParameterizedTypeName {
            raw,
            type_arguments: type_arguments.into_iter().collect(),
        })
    }

    pub fn variable(name: impl Into<String>) -> Self {
        TypeName::Variable(TypeVariableName::new(name))
    }

    pub fn wildcard() -> Self {
        TypeName::Wildcard(WildcardTypeName::Unbounded)
    }

    pub fn wildcard_extends(bound: impl Into<TypeName>) -> Self {
        TypeName::Wildcard(WildcardTypeName::Extends(Box::new(bound.into())))
    }

    pub fn wildcard_super(bound: impl Into<TypeName>) -> Self {
        TypeName::Wildcard(WildcardTypeName::Super(Box::new(bound.into())))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeName::Primitive(p) if *p != PrimitiveType::Void)
    }

    /// The element type if this is an array.
    pub fn array_component(&self) -> Option<&TypeName> {
        match self {
            TypeName::Array(component) => Some(component),
            _ => None,
        }
    }

    /// Call `f` for every class name printed when this type is rendered, in textual order.
    ///
    /// Type variable bounds are not visited: they are printed at the declaration, not at the use site.
    pub fn visit_classes<F: FnMut(&ClassName)>(&self, f: &mut F) {
        match self {
            TypeName::Primitive(_) | TypeName::Variable(_) => {}
            TypeName::Class(class) => f(class),
            TypeName::Parameterized(p) => {
                f(&p.raw);
                for arg in &p.type_arguments {
                    arg.visit_classes(f);
                }
            }
            TypeName::Array(component) => component.visit_classes(f),
            TypeName::Wildcard(WildcardTypeName::Unbounded) => {}
            TypeName::Wildcard(WildcardTypeName::Extends(bound) | WildcardTypeName::Super(bound)) => {
                bound.visit_classes(f)
            }
        }
    }

    /// Call `f` for every type variable used inside this type, including those in type arguments and bounds.
    pub fn visit_variables<F: FnMut(&TypeVariableName)>(&self, f: &mut F) {
        match self {
            TypeName::Primitive(_) | TypeName::Class(_) | TypeName::Wildcard(WildcardTypeName::Unbounded) => {}
            TypeName::Variable(variable) => f(variable),
            TypeName::Parameterized(p) => {
                for arg in &p.type_arguments {
                    arg.visit_variables(f);
                }
            }
            TypeName::Array(component) => component.visit_variables(f),
            TypeName::Wildcard(WildcardTypeName::Extends(bound) | WildcardTypeName::Super(bound)) => {
                bound.visit_variables(f)
            }
        }
    }

    /// Render the type, asking `resolve` for the text of every class name.
    pub fn render<F: FnMut(&ClassName) -> String>(&self, resolve: &mut F) -> String {
        let mut out = String::new();
        self.render_into(&mut out, resolve);
        out
    }

    /// Render the type as the element of a varargs parameter (`String...` for `String[]`).
    pub fn render_varargs<F: FnMut(&ClassName) -> String>(&self, resolve: &mut F) -> String {
        match self.array_component() {
            Some(component) => format!("{}...", component.render(resolve)),
            None => self.render(resolve),
        }
    }

    fn render_into<F: FnMut(&ClassName) -> String>(&self, out: &mut String, resolve: &mut F) {
        match self {
            TypeName::Primitive(p) => out.push_str(p.as_str()),
            TypeName::Class(class) => out.push_str(&resolve(class)),
            TypeName::Parameterized(p) => {
                out.push_str(&resolve(&p.raw));
                if !p.type_arguments.is_empty() {
                    out.push('<');
                    for (i, arg) in p.type_arguments.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        arg.render_into(out, resolve);
                    }
                    out.push('>');
                }
            }
            TypeName::Array(component) => {
                component.render_into(out, resolve);
                out.push_str("[]");
            }
            TypeName::Variable(v) => out.push_str(&v.name),
            TypeName::Wildcard(WildcardTypeName::Unbounded) => out.push('?'),
            TypeName::Wildcard(WildcardTypeName::Extends(bound)) => {
                out.push_str("? extends ");
                bound.render_into(out, resolve);
            }
            TypeName::Wildcard(WildcardTypeName::Super(bound)) => {
                out.push_str("? super ");
                bound.render_into(out, resolve);
            }
        }
    }
}

impl From<ClassName> for TypeName {
    fn from(class: ClassName) -> Self {
        TypeName::Class(class)
    }
}

impl From<PrimitiveType> for TypeName {
    fn from(primitive: PrimitiveType) -> Self {
        TypeName::Primitive(primitive)
    }
}

impl From<TypeVariableName> for TypeName {
    fn from(variable: TypeVariableName) -> Self {
        TypeName::Variable(variable)
    }
}

impl TypeVariableName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn with_bound(mut self, bound: impl Into<TypeName>) -> Self {
        self.bounds.push(bound.into());
        self
    }
}
