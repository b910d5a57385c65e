//! The templated code fragment language.
//!
//! A [`CodeBlock`] is a format string with typed placeholders, scanned once at construction into a sequence of
//! [`CodePart`]s. Argument-consuming placeholders:
//! - `$L` emits a [`Literal`] verbatim (text, integer, boolean, nested block, anonymous class body),
//! - `$S` emits a quoted Java string literal (`null` for a missing string),
//! - `$T` emits a type reference, resolved against the file's import decisions,
//! - `$N` emits an identifier, registered in the current lexical scope.
//!
//! Control placeholders consume nothing: `$$` is a literal `$`, `$W` is a space or a line break, `$Z` is a
//! zero-width wrap point, and `$>` / `$<` raise and lower the indentation.
//!
//! ## Notes
//! - Scanning is strict: a count or kind mismatch between placeholders and arguments is a
//!   [`SyntaxError::MalformedFragment`]. A `CodeBlock` value is therefore always well-formed.
//! - Emission goes through [`CodeBlock::substitute`], which produces [`Token`]s rather than text so line wrapping can
//!   be decided by the writer afterwards.

use std::borrow::Cow;

use serde::Deserialize;

use crate::decl::TypeSpec;
use crate::errors::{FragmentProblem, SyntaxError, check_identifier};
use crate::names::ClassName;
use crate::types::TypeName;

/// A value spliced in by `$L`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Text(String),
    Int(i64),
    Bool(bool),
    Code(CodeBlock),
    Anonymous(Box<TypeSpec>),
}

/// One argument of a fragment. In JSON each argument is keyed by its placeholder letter: `{"T": {"class": ...}}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum Arg {
    #[serde(rename = "L")]
    Literal(Literal),
    #[serde(rename = "S")]
    String(Option<String>),
    #[serde(rename = "T")]
    Type(TypeName),
    #[serde(rename = "N")]
    Name(String),
}

impl Arg {
    pub fn lit(text: impl Into<String>) -> Self {
        Arg::Literal(Literal::Text(text.into()))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Arg::String(Some(value.into()))
    }

    pub fn null_string() -> Self {
        Arg::String(None)
    }

    pub fn name(name: impl Into<String>) -> Self {
        Arg::Name(name.into())
    }

    pub fn ty(type_name: impl Into<TypeName>) -> Self {
        Arg::Type(type_name.into())
    }

    /// Human-readable kind, used in mismatch diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Arg::Literal(_) => "a literal",
            Arg::String(_) => "a string",
            Arg::Type(_) => "a type",
            Arg::Name(_) => "a name",
        }
    }
}

impl From<ClassName> for Arg {
    fn from(class: ClassName) -> Self {
        Arg::Type(class.into())
    }
}

impl From<TypeName> for Arg {
    fn from(type_name: TypeName) -> Self {
        Arg::Type(type_name)
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Literal(Literal::Int(value))
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Literal(Literal::Int(i64::from(value)))
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Literal(Literal::Bool(value))
    }
}

impl From<CodeBlock> for Arg {
    fn from(code: CodeBlock) -> Self {
        Arg::Literal(Literal::Code(code))
    }
}

impl From<TypeSpec> for Arg {
    fn from(anonymous: TypeSpec) -> Self {
        Arg::Literal(Literal::Anonymous(Box::new(anonymous)))
    }
}

/// A scanned piece of a fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum CodePart {
    Text(String),
    Literal(Literal),
    Str(Option<String>),
    Type(TypeName),
    Name(String),
    WrappingSpace,
    ZeroWidthSpace,
    Indent,
    Unindent,
}

/// A well-formed code fragment.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "RawCodeBlock")]
pub struct CodeBlock {
    parts: Vec<CodePart>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCodeBlock {
    Format(String),
    Template {
        format: String,
        #[serde(default)]
        args: Vec<Arg>,
    },
}

impl TryFrom<RawCodeBlock> for CodeBlock {
    type Error = SyntaxError;

    fn try_from(raw: RawCodeBlock) -> Result<Self, Self::Error> {
        match raw {
            RawCodeBlock::Format(format) => CodeBlock::of(&format, []),
            RawCodeBlock::Template { format, args } => CodeBlock::of(&format, args),
        }
    }
}

/// Symbol and identifier lookup used while substituting a fragment.
///
/// The writer implements this over its import table and lexical scope stack.
pub trait NameResolver {
    /// Text to print for a class reference at the current position.
    fn resolve_symbol(&mut self, class: &ClassName) -> String;

    /// Text to print for an identifier reference; implementations may record the binding in the current scope.
    fn resolve_identifier(&mut self, name: &str) -> String;
}

/// A unit of substituted output.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// Plain code text; may contain newlines.
    Text(Cow<'a, str>),
    /// A quoted string literal; never split across lines.
    Quoted(String),
    /// A resolved type reference.
    Symbol(String),
    /// An identifier reference.
    Identifier(String),
    WrappingSpace,
    ZeroWidthSpace,
    Indent,
    Unindent,
    /// An anonymous class body to be emitted in place.
    TypeDecl(&'a TypeSpec),
}

impl CodeBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `format` against `args`.
    ///
    /// ## Parameters
    /// - `format`: the format string.
    /// - `args`: one argument per `$L`, `$S`, `$T` or `$N`, in order.
    ///
    /// ## Returns
    /// - The fragment, or [`SyntaxError::MalformedFragment`] when placeholders and arguments disagree in number or
    ///   kind, or [`SyntaxError::InvalidIdentifier`] when a `$N` argument is not a Java identifier.
    ///
    /// ## Examples
    /// ```rust
    /// use jpoet_syntax::{Arg, CodeBlock};
    ///
    /// assert!(CodeBlock::of("int $N = $L", [Arg::name("count"), Arg::from(0)]).is_ok());
    /// assert!(CodeBlock::of("int $N = $L", [Arg::name("count")]).is_err());
    /// assert!(CodeBlock::of("cost: $$5", []).is_ok());
    /// ```
    pub fn of(format: &str, args: impl IntoIterator<Item = Arg>) -> Result<Self, SyntaxError> {
        let mut block = CodeBlock::new();
        block.add(format, args)?;
        Ok(block)
    }

    pub fn parts(&self) -> &[CodePart] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Append a scanned fragment.
    pub fn add(&mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Result<&mut Self, SyntaxError> {
        for part in scan(format, args.into_iter().collect())? {
            self.push(part);
        }
        Ok(self)
    }

    /// Append a statement: the fragment followed by `;` and a newline.
    pub fn add_statement(
        &mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<&mut Self, SyntaxError> {
        self.add(format, args)?;
        self.push(CodePart::Text(";\n".to_string()));
        Ok(self)
    }

    /// Open a braced control-flow block such as `if (x) {` and indent what follows.
    pub fn begin_control_flow(
        &mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<&mut Self, SyntaxError> {
        self.add(format, args)?;
        self.push(CodePart::Text(" {\n".to_string()));
        self.push(CodePart::Indent);
        Ok(self)
    }

    /// Close the current block and open a sibling: `} else {`, `} catch (E e) {`.
    pub fn next_control_flow(
        &mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<&mut Self, SyntaxError> {
        self.push(CodePart::Unindent);
        self.push(CodePart::Text("} ".to_string()));
        self.add(format, args)?;
        self.push(CodePart::Text(" {\n".to_string()));
        self.push(CodePart::Indent);
        Ok(self)
    }

    pub fn end_control_flow(&mut self) -> &mut Self {
        self.push(CodePart::Unindent);
        self.push(CodePart::Text("}\n".to_string()));
        self
    }

    /// Close the current block with a trailing clause, as in `} while (more);`.
    pub fn end_control_flow_with(
        &mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<&mut Self, SyntaxError> {
        self.push(CodePart::Unindent);
        self.push(CodePart::Text("} ".to_string()));
        self.add(format, args)?;
        self.push(CodePart::Text(";\n".to_string()));
        Ok(self)
    }

    /// Append another fragment's parts.
    pub fn add_code(&mut self, other: &CodeBlock) -> &mut Self {
        for part in &other.parts {
            self.push(part.clone());
        }
        self
    }

    /// Append text without placeholder scanning.
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        self.push(CodePart::Text(text.to_string()));
        self
    }

    /// Join fragments with a plain-text separator.
    pub fn join<'b>(blocks: impl IntoIterator<Item = &'b CodeBlock>, separator: &str) -> CodeBlock {
        let mut joined = CodeBlock::new();
        for (i, block) in blocks.into_iter().enumerate() {
            if i > 0 {
                joined.add_text(separator);
            }
            joined.add_code(block);
        }
        joined
    }

    /// Resolve every placeholder into a token stream.
    ///
    /// Nested `$L` blocks are flattened in place. Anonymous class bodies are handed back as
    /// [`Token::TypeDecl`] for the writer to emit.
    pub fn substitute<'a, R: NameResolver + ?Sized>(&'a self, resolver: &mut R) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        self.substitute_into(resolver, &mut tokens);
        tokens
    }

    fn substitute_into<'a, R: NameResolver + ?Sized>(&'a self, resolver: &mut R, tokens: &mut Vec<Token<'a>>) {
        for part in &self.parts {
            match part {
                CodePart::Text(text) => tokens.push(Token::Text(Cow::Borrowed(text.as_str()))),
                CodePart::Literal(Literal::Text(text)) => tokens.push(Token::Text(Cow::Borrowed(text.as_str()))),
                CodePart::Literal(Literal::Int(value)) => tokens.push(Token::Text(Cow::Owned(value.to_string()))),
                CodePart::Literal(Literal::Bool(value)) => tokens.push(Token::Text(Cow::Owned(value.to_string()))),
                CodePart::Literal(Literal::Code(code)) => code.substitute_into(resolver, tokens),
                CodePart::Literal(Literal::Anonymous(spec)) => tokens.push(Token::TypeDecl(spec)),
                CodePart::Str(Some(value)) => tokens.push(Token::Quoted(jpoet_core::strings::quote_string(value))),
                CodePart::Str(None) => tokens.push(Token::Text(Cow::Borrowed("null"))),
                CodePart::Type(type_name) => {
                    let text = type_name.render(&mut |class: &ClassName| resolver.resolve_symbol(class));
                    tokens.push(Token::Symbol(text));
                }
                CodePart::Name(name) => tokens.push(Token::Identifier(resolver.resolve_identifier(name))),
                CodePart::WrappingSpace => tokens.push(Token::WrappingSpace),
                CodePart::ZeroWidthSpace => tokens.push(Token::ZeroWidthSpace),
                CodePart::Indent => tokens.push(Token::Indent),
                CodePart::Unindent => tokens.push(Token::Unindent),
            }
        }
    }

    fn push(&mut self, part: CodePart) {
        if let CodePart::Text(text) = &part {
            if text.is_empty() {
                return;
            }
            if let Some(CodePart::Text(last)) = self.parts.last_mut() {
                last.push_str(text);
                return;
            }
        }
        self.parts.push(part);
    }
}

fn scan(format: &str, args: Vec<Arg>) -> Result<Vec<CodePart>, SyntaxError> {
    let supplied = args.len();
    let mut args = args.into_iter();
    let mut consumed = 0;
    let mut parts = Vec::new();
    let mut text = String::new();
    let mut chars = format.char_indices();

    while let Some((position, c)) = chars.next() {
        if c != '$' {
            text.push(c);
            continue;
        }
        let Some((_, tag)) = chars.next() else {
            return Err(SyntaxError::malformed(format, FragmentProblem::DanglingMarker { position }));
        };
        let part = match tag {
            '$' => {
                text.push('$');
                continue;
            }
            'W' => CodePart::WrappingSpace,
            'Z' => CodePart::ZeroWidthSpace,
            '>' => CodePart::Indent,
            '<' => CodePart::Unindent,
            'L' | 'S' | 'T' | 'N' => {
                let Some(arg) = args.next() else {
                    let problem = FragmentProblem::MissingArgument {
                        placeholder: tag,
                        position,
                        supplied,
                    };
                    return Err(SyntaxError::malformed(format, problem));
                };
                consumed += 1;
                bind(format, tag, arg)?
            }
            other => {
                let problem = FragmentProblem::UnknownPlaceholder { tag: other, position };
                return Err(SyntaxError::malformed(format, problem));
            }
        };
        if !text.is_empty() {
            parts.push(CodePart::Text(std::mem::take(&mut text)));
        }
        parts.push(part);
    }

    if consumed < supplied {
        let problem = FragmentProblem::UnusedArguments {
            consumed,
            supplied,
            unused: supplied - consumed,
        };
        return Err(SyntaxError::malformed(format, problem));
    }
    if !text.is_empty() {
        parts.push(CodePart::Text(text));
    }
    Ok(parts)
}

fn bind(format: &str, placeholder: char, arg: Arg) -> Result<CodePart, SyntaxError> {
    let expected = match placeholder {
        'L' => "a literal",
        'S' => "a string",
        'T' => "a type",
        _ => "a name",
    };
    match (placeholder, arg) {
        ('L', Arg::Literal(literal)) => Ok(CodePart::Literal(literal)),
        ('S', Arg::String(value)) => Ok(CodePart::Str(value)),
        ('T', Arg::Type(type_name)) => Ok(CodePart::Type(type_name)),
        ('N', Arg::Name(name)) => {
            check_identifier(&name)?;
            Ok(CodePart::Name(name))
        }
        (_, other) => {
            let problem = FragmentProblem::ArgumentMismatch {
                placeholder,
                expected,
                found: other.kind_name(),
            };
            Err(SyntaxError::malformed(format, problem))
        }
    }
}
