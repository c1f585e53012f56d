//! Server-rendered HTML pages.
//!
//! Every piece of user-supplied text goes through [`escape`] before it is
//! written into markup.
mod edit;
mod index;

pub use edit::edit_page;
pub use index::index_page;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="/static/styles.css">
</head>
<body>
  <div class="container">
{body}
  </div>
</body>
</html>
"#,
        title = escape(title),
    )
}
