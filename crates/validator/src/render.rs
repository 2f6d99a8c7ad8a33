//! Positional message templates.
//!
//! Templates use the message-format convention: `{0}`, `{1}`, ... are
//! replaced by the parameter at that index. A format type after a comma
//! (`{0,number}`) is accepted and ignored. A single quote starts or ends a
//! literal section in which braces are plain text, and `''` is one quote.
//!
//! Rendering is total. Placeholders without a matching parameter are kept as
//! `{n}`, and braces that do not form a placeholder are copied verbatim.

use crate::message::Param;

/// Renders `template`, substituting positional placeholders from `params`.
///
/// # Examples
///
/// ```rust
/// use valtree::{Param, render};
///
/// let text = render("Expected {0}, got {1}", &[Param::from(3), Param::from("x")]);
/// assert_eq!(text, "Expected 3, got x");
/// ```
pub fn render(template: &str, params: &[Param]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut quoted = false;
    let mut rest = template;

    while let Some(c) = rest.chars().next() {
        let width = c.len_utf8();
        match c {
            '\'' => {
                if rest[width..].starts_with('\'') {
                    out.push('\'');
                    rest = &rest[2..];
                    continue;
                }
                quoted = !quoted;
            }
            '{' if !quoted => {
                if let Some(close) = rest.find('}') {
                    let body = &rest[1..close];
                    match argument_index(body) {
                        Some(index) => match params.get(index) {
                            Some(param) => out.push_str(param.text()),
                            None => {
                                out.push('{');
                                out.push_str(&index.to_string());
                                out.push('}');
                            }
                        },
                        None => out.push_str(&rest[..=close]),
                    }
                    rest = &rest[close + 1..];
                    continue;
                }
                out.push('{');
            }
            _ => out.push(c),
        }
        rest = &rest[width..];
    }

    out
}

fn argument_index(body: &str) -> Option<usize> {
    let index = body.split(',').next()?.trim();
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    index.parse().ok()
}
