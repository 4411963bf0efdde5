//! Escaping of reserved markup characters

use std::borrow::Cow;

/// Replaces `&`, `"`, `'`, `<` and `>` with their predefined entities.
///
/// The result is the same as replacing `&` first and the remaining four
/// characters afterwards, so entities produced here are never escaped twice.
/// The input is returned borrowed when it contains nothing to escape.
///
/// ```
/// use lwdom::escape_text;
///
/// assert_eq!(escape_text("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
/// assert_eq!(escape_text("plain"), "plain");
/// ```
pub fn escape_text(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(is_reserved) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len() + 16);
    let (head, tail) = input.split_at(first);
    out.push_str(head);
    for c in tail.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn is_reserved(c: char) -> bool {
    matches!(c, '&' | '"' | '\'' | '<' | '>')
}
