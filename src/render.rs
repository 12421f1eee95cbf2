//! Terminal rendering using crossterm
//!
//! Writes highlighted lines as 24-bit ANSI styled text.

use std::io::Write;

use codelight::syntax::{parse_hex_color, FontStyle, FontWeight, TokenStyle};
use codelight::{HighlightedLine, Highlighter, Result};
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

/// Writes highlighted code to any output stream
pub struct Renderer<'a> {
    highlighter: &'a Highlighter,
    show_line_numbers: bool,
}

impl<'a> Renderer<'a> {
    pub fn new(highlighter: &'a Highlighter, show_line_numbers: bool) -> Self {
        Self {
            highlighter,
            show_line_numbers,
        }
    }

    /// Render every line, followed by a newline each
    pub fn render<W: Write>(&self, out: &mut W, lines: &[HighlightedLine]) -> Result<()> {
        let gutter = lines.len().to_string().len();

        for line in lines {
            if self.show_line_numbers {
                self.render_gutter(out, line.line_number, gutter)?;
            }
            for token in &line.tokens {
                let style = self.highlighter.style_for_token_type(token.token_type.name());
                self.render_text(out, &token.value, &style)?;
            }
            queue!(out, Print("\n"))?;
        }

        out.flush()?;
        Ok(())
    }

    fn render_gutter<W: Write>(&self, out: &mut W, number: usize, width: usize) -> Result<()> {
        let color = terminal_color(&self.highlighter.theme().punctuation);
        queue!(
            out,
            SetForegroundColor(color),
            SetAttribute(Attribute::Dim),
            Print(format!("{number:>width$} │ ")),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        Ok(())
    }

    fn render_text<W: Write>(&self, out: &mut W, text: &str, style: &TokenStyle) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        queue!(out, SetForegroundColor(terminal_color(&style.color)))?;
        // Terminals only have bold; 500/600 weights render as regular.
        if style.font_weight == Some(FontWeight::Bold) {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if style.font_style == Some(FontStyle::Italic) {
            queue!(out, SetAttribute(Attribute::Italic))?;
        }
        queue!(out, Print(text))?;
        if !style.is_plain() {
            queue!(out, SetAttribute(Attribute::Reset))?;
        }
        queue!(out, ResetColor)?;
        Ok(())
    }
}

/// Map a theme color string to a terminal color
fn terminal_color(value: &str) -> Color {
    match parse_hex_color(value) {
        Some((r, g, b)) => Color::Rgb { r, g, b },
        None => Color::Reset,
    }
}
