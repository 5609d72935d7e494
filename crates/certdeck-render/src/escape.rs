//! HTML text and attribute escaping.

/// Escape `&`, `<`, `>`, `"` and `'` so `text` is safe inside element content
/// and double- or single-quoted attribute values.
pub fn escape_html(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&'  => out.push_str("&amp;"),
      '<'  => out.push_str("&lt;"),
      '>'  => out.push_str("&gt;"),
      '"'  => out.push_str("&quot;"),
      '\'' => out.push_str("&#039;"),
      _    => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escapes_all_five() {
    assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#039;&amp;&#039;&lt;/a&gt;");
  }

  #[test]
  fn leaves_plain_text_alone() {
    assert_eq!(escape_html("Azure Fundamentals — 2024"), "Azure Fundamentals — 2024");
    assert_eq!(escape_html(""), "");
  }

  #[test]
  fn does_not_double_decode() {
    assert_eq!(escape_html("&amp;"), "&amp;amp;");
  }
}
