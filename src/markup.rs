// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Inline markup understood by the bundled backends.

Styled text may carry tags like `[bold red]` which push a style, and `[/red]` or `[/]` which pop
the most recent one.  A literal bracket is written `\[`.  Any bracket group that isn't a valid tag
is rendered as-is, brackets included.

Because `[` is reserved, text that did not come from the program itself (message bodies, source
names) must go through [`escape`] before it reaches [`RenderBackend::write_styled`](crate::RenderBackend::write_styled).

```
use minlog::markup::{escape, parse};
use anstyle::Style;

let spans = parse(&escape("[red]not a tag"), Style::new());
assert_eq!(spans.len(), 1);
assert_eq!(spans[0].text, "[red]not a tag");
```
*/

use anstyle::{AnsiColor, Color, Effects, Style};
use std::borrow::Cow;

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

/// Escapes every opening bracket so that the text renders literally.
pub fn escape(text: &str) -> Cow<'_, str> {
    if text.contains('[') {
        Cow::Owned(text.replace('[', "\\["))
    } else {
        Cow::Borrowed(text)
    }
}

/// Splits `text` into styled spans, starting from `base`.
///
/// Adjacent text with the same style is merged into one span, and empty spans are dropped.
pub fn parse(text: &str, base: Style) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    let mut stack: Vec<(String, Style)> = Vec::new();
    let mut current = String::new();
    let mut rest = text;

    let style_of = |stack: &[(String, Style)]| stack.last().map(|(_, s)| *s).unwrap_or(base);

    while let Some(idx) = rest.find(['\\', '[']) {
        current.push_str(&rest[..idx]);
        let tail = &rest[idx..];
        if let Some(after) = tail.strip_prefix("\\[") {
            current.push('[');
            rest = after;
            continue;
        }
        if tail.starts_with('\\') {
            current.push('\\');
            rest = &tail[1..];
            continue;
        }
        let Some(close) = tail.find(']') else {
            current.push_str(tail);
            rest = "";
            break;
        };
        let inner = &tail[1..close];
        match parse_tag(inner) {
            Some(Tag::Open(overlay)) => {
                push_span(&mut spans, std::mem::take(&mut current), style_of(&stack));
                let merged = merge(style_of(&stack), overlay);
                stack.push((inner.trim().to_string(), merged));
            }
            Some(Tag::Close(name)) => {
                let position = match name {
                    None => stack.len().checked_sub(1),
                    Some(name) => stack.iter().rposition(|(n, _)| n == name),
                };
                match position {
                    Some(p) => {
                        push_span(&mut spans, std::mem::take(&mut current), style_of(&stack));
                        stack.truncate(p);
                    }
                    //closing a tag that was never opened
                    None => current.push_str(&tail[..=close]),
                }
            }
            None => current.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }
    current.push_str(rest);
    push_span(&mut spans, current, style_of(&stack));
    spans
}

/// Concatenates the visible text of `spans`.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

fn push_span(spans: &mut Vec<Span>, text: String, style: Style) {
    if text.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(last) if last.style == style => last.text.push_str(&text),
        _ => spans.push(Span { text, style }),
    }
}

enum Tag<'a> {
    Open(Style),
    Close(Option<&'a str>),
}

fn parse_tag(inner: &str) -> Option<Tag<'_>> {
    let inner = inner.trim();
    if let Some(name) = inner.strip_prefix('/') {
        let name = name.trim();
        return Some(Tag::Close(if name.is_empty() { None } else { Some(name) }));
    }
    if inner.is_empty() {
        return None;
    }
    let mut style = Style::new();
    for word in inner.split_whitespace() {
        style = match word {
            "bold" => style.bold(),
            "dim" => style.dimmed(),
            "italic" => style.italic(),
            "underline" => style.underline(),
            _ => {
                if let Some(bg) = word.strip_prefix("on_") {
                    style.bg_color(Some(Color::Ansi(color_named(bg)?)))
                } else {
                    style.fg_color(Some(Color::Ansi(color_named(word)?)))
                }
            }
        };
    }
    Some(Tag::Open(style))
}

fn color_named(name: &str) -> Option<AnsiColor> {
    let color = match name {
        "black" => AnsiColor::Black,
        "red" => AnsiColor::Red,
        "green" => AnsiColor::Green,
        "yellow" => AnsiColor::Yellow,
        "blue" => AnsiColor::Blue,
        "magenta" => AnsiColor::Magenta,
        "cyan" => AnsiColor::Cyan,
        "white" => AnsiColor::White,
        "bright_black" => AnsiColor::BrightBlack,
        "bright_red" => AnsiColor::BrightRed,
        "bright_green" => AnsiColor::BrightGreen,
        "bright_yellow" => AnsiColor::BrightYellow,
        "bright_blue" => AnsiColor::BrightBlue,
        "bright_magenta" => AnsiColor::BrightMagenta,
        "bright_cyan" => AnsiColor::BrightCyan,
        "bright_white" => AnsiColor::BrightWhite,
        _ => return None,
    };
    Some(color)
}

/// Layers `overlay` on top of `base`.  Colors set in the overlay win; effects accumulate.
pub(crate) fn merge(base: Style, overlay: Style) -> Style {
    let effects: Effects = base.get_effects() | overlay.get_effects();
    base.fg_color(overlay.get_fg_color().or(base.get_fg_color()))
        .bg_color(overlay.get_bg_color().or(base.get_bg_color()))
        .effects(effects)
}
