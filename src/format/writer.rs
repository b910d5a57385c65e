//! Output writer with indentation tracking and deferred line wrapping
//!
//! Text is appended line by line. Indentation (and a comment prefix, inside javadoc or `//` comments) is written
//! lazily at the start of each non-empty line, so blank lines carry no trailing whitespace.
//!
//! Wrap points (`$W`, `$Z`) are deferred: text after a wrap point is buffered until it is known whether it fits on
//! the current line. If it fits, the wrap point becomes a single space (or nothing); if it overflows, the wrap point
//! becomes a newline followed by the indentation in effect at the wrap point plus one level. Inside a javadoc or
//! `//` comment the continuation line keeps the comment's indentation and repeats its prefix instead.
//!
//! ## Notes
//! - Columns count Unicode scalar values, not bytes.
//! - A newline always settles a pending wrap point.
//! - Nothing ever breaks inside an appended string; only wrap points turn into line breaks.

use super::config::RenderConfig;

/// What a pending wrap point turns into when it is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flush {
    /// A newline and continuation indentation.
    Wrap,
    /// A single space.
    Space,
    /// Nothing.
    Empty,
}

/// Text written at the start of every line after the indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePrefix {
    #[default]
    None,
    /// ` * ` (or ` *` on a blank line).
    Javadoc,
    /// `// ` (or `//` on a blank line).
    Comment,
}

impl LinePrefix {
    /// Text written after the indentation on a non-empty line
    fn marker(self) -> &'static str {
        match self {
            LinePrefix::None => "",
            LinePrefix::Javadoc => " * ",
            LinePrefix::Comment => "// ",
        }
    }
}

/// Writer that tracks indentation and columns and builds formatted output
pub struct LineWriter {
    /// The output buffer
    out: String,
    /// Text held back behind a pending wrap point
    buffer: String,
    /// The pending wrap point, if any
    next_flush: Option<Flush>,
    /// Indentation level to continue at if the pending wrap point becomes a line break
    wrap_indent: usize,
    /// Prefix in effect at the pending wrap point
    wrap_prefix: LinePrefix,
    /// Current column, including buffered text
    column: usize,
    /// Current indentation level
    indent_level: usize,
    /// Whether nothing has been written on the current line yet
    at_line_start: bool,
    prefix: LinePrefix,
    indent: String,
    line_length: usize,
}

impl LineWriter {
    /// Create a new writer using the layout settings of `config`
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            out: String::new(),
            buffer: String::new(),
            next_flush: None,
            wrap_indent: 0,
            wrap_prefix: LinePrefix::None,
            column: 0,
            indent_level: 0,
            at_line_start: true,
            prefix: LinePrefix::None,
            indent: config.indent.clone(),
            line_length: config.line_length,
        }
    }

    /// Settle any pending wrap point and return the output
    pub fn finish(mut self) -> String {
        if let Some(flush) = self.next_flush {
            self.flush(flush);
        }
        self.out
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Get current indentation level
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get the current column
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// Set the prefix written at the start of each following line
    pub fn set_prefix(&mut self, prefix: LinePrefix) {
        self.prefix = prefix;
    }

    /// Write text, which may contain newlines, indenting each non-empty line
    pub fn write(&mut self, s: &str) {
        for (i, line) in s.split('\n').enumerate() {
            if i > 0 {
                if self.at_line_start {
                    self.write_blank_line_prefix();
                }
                self.append("\n");
                self.at_line_start = true;
            }
            if line.is_empty() {
                continue;
            }
            if self.at_line_start {
                self.write_line_start();
            }
            self.append(line);
            self.at_line_start = false;
        }
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.write("\n");
    }

    /// Emit a space that becomes a line break if the text following it overflows the line
    pub fn wrapping_space(&mut self) {
        self.start_wrap_point(Flush::Space);
        self.column += 1;
    }

    /// Emit a point where a line break may be inserted if the text following it overflows the line
    pub fn zero_width_space(&mut self) {
        if self.column == 0 {
            return;
        }
        self.start_wrap_point(Flush::Empty);
    }

    fn start_wrap_point(&mut self, flush: Flush) {
        if let Some(pending) = self.next_flush {
            self.flush(pending);
        }
        if self.at_line_start {
            self.write_line_start();
            self.at_line_start = false;
        }
        self.next_flush = Some(flush);
        self.wrap_prefix = self.prefix;
        self.wrap_indent = match self.prefix {
            LinePrefix::None => self.indent_level + 1,
            LinePrefix::Javadoc | LinePrefix::Comment => self.indent_level,
        };
    }

    fn write_line_start(&mut self) {
        for _ in 0..self.indent_level {
            let indent = self.indent.clone();
            self.append(&indent);
        }
        let marker = self.prefix.marker();
        if !marker.is_empty() {
            self.append(marker);
        }
    }

    fn write_blank_line_prefix(&mut self) {
        let marker = match self.prefix {
            LinePrefix::None => return,
            LinePrefix::Javadoc => " *",
            LinePrefix::Comment => "//",
        };
        for _ in 0..self.indent_level {
            let indent = self.indent.clone();
            self.append(&indent);
        }
        self.append(marker);
    }

    /// Append raw text, deciding any pending wrap point once the outcome is known
    fn append(&mut self, s: &str) {
        if let Some(pending) = self.next_flush {
            let next_newline = s.find('\n').map(|byte| s[..byte].chars().count());
            let width = s.chars().count();
            if next_newline.is_none() && self.column + width <= self.line_length {
                self.buffer.push_str(s);
                self.column += width;
                return;
            }
            let wrap = match next_newline {
                None => true,
                Some(prefix_width) => self.column + prefix_width > self.line_length,
            };
            self.flush(if wrap { Flush::Wrap } else { pending });
        }

        self.out.push_str(s);
        match s.rfind('\n') {
            Some(byte) => self.column = s[byte + 1..].chars().count(),
            None => self.column += s.chars().count(),
        }
    }

    fn flush(&mut self, flush: Flush) {
        match flush {
            Flush::Wrap => {
                self.out.push('\n');
                for _ in 0..self.wrap_indent {
                    self.out.push_str(&self.indent);
                }
                let marker = self.wrap_prefix.marker();
                self.out.push_str(marker);
                self.column = self.wrap_indent * self.indent.chars().count() + marker.chars().count();
                self.column += self.buffer.chars().count();
            }
            Flush::Space => self.out.push(' '),
            Flush::Empty => {}
        }
        self.out.push_str(&self.buffer);
        self.buffer.clear();
        self.next_flush = None;
    }
}
