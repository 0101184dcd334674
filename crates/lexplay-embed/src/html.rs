//! HTML generation for embedded examples.

use std::fmt::Write;

/// Escape HTML special characters.
pub(crate) fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Build the collapsible example box for a saved session.
pub(crate) fn example_box(
    session_url: &str,
    title: &str,
    language: Option<&str>,
    listing: &str,
) -> String {
    let mut out = String::new();

    out.push_str(r#"<details class="godbolt-example">"#);
    write!(out, "<summary>{}</summary>", escape_html(title)).unwrap();
    write!(
        out,
        r#"<a href="{}" target="_blank">Try on Compiler Explorer</a>"#,
        escape_html(session_url)
    )
    .unwrap();

    if let Some(language) = language {
        write!(
            out,
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(language),
            escape_html(listing)
        )
        .unwrap();
    } else {
        write!(out, "<pre><code>{}</code></pre>", escape_html(listing)).unwrap();
    }

    out.push_str("</details>");
    out
}
