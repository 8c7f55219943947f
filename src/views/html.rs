/// Escapes text for use in element content and quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Anchor opening in a new window.
pub fn external_link(href: &str, class: &str, text: &str) -> String {
    format!(
        "<a href=\"{}\" class=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a>",
        escape(href),
        class,
        escape(text)
    )
}

/// Anchor handled by the client-side router.
pub fn route_link(path: &str, class: &str, text: &str) -> String {
    format!(
        "<a href=\"{0}\" class=\"{1}\" data-route=\"{0}\">{2}</a>",
        path,
        class,
        escape(text)
    )
}
