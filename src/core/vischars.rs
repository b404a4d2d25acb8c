// src/core/vischars.rs
// Visible-text character iterator for a markup fragment.
// Skips tags (<...>), maps the few entities scorer blocks use, collapses
// ASCII whitespace to a single ' '. Scorer blocks wrap every character
// in its own <span>, so this is what turns them back into text.

pub struct VisChars<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
}

impl<'a> VisChars<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, b: s.as_bytes(), i: 0, n: s.len() }
    }

    /// Step past a tag starting at `<`. A `>` inside a quoted attribute
    /// value does not close it.
    fn skip_tag(&mut self) {
        let mut quote: Option<u8> = None;
        self.i += 1;
        while let Some(&b) = self.b.get(self.i) {
            self.i += 1;
            match (quote, b) {
                (None, b'>') => return,
                (None, b'\'' | b'"') => quote = Some(b),
                (Some(q), _) if q == b => quote = None,
                _ => {}
            }
        }
    }

    /// Called when current byte is '&'. Unknown entities read as a space;
    /// a bare '&' with no ';' nearby is kept literally.
    #[inline]
    fn entity(&mut self) -> char {
        let rest = &self.s[self.i..];
        let end = match rest.find(';') {
            Some(e) if e <= 10 => e,
            _ => { self.i += 1; return '&'; }
        };
        let name = &rest[1..end];
        self.i += end + 1;
        match name {
            "amp" => '&',
            "apos" | "#39" | "#x27" | "rsquo" | "#8217" | "prime" | "#8242" => '\'',
            "lpar" | "#40" => '(',
            "rpar" | "#41" => ')',
            "plus" | "#43" => '+',
            "comma" | "#44" => ',',
            _ => ' ',
        }
    }

    #[inline]
    fn next_char(&mut self) -> Option<char> {
        let ch = self.s[self.i..].chars().next()?;
        self.i += ch.len_utf8();
        Some(ch)
    }
}

impl<'a> Iterator for VisChars<'a> {
    type Item = char;
    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.n {
            match self.b[self.i] {
                b'<' => { self.skip_tag(); continue; }
                b'&' => return Some(self.entity()),
                b if b.is_ascii_whitespace() => {
                    while self.b.get(self.i).is_some_and(u8::is_ascii_whitespace) {
                        self.i += 1;
                    }
                    return Some(' ');
                }
                _ => return self.next_char(),
            }
        }
        None
    }
}

/// Visible text of a fragment, whitespace-normalized.
/// Text with no markup comes back unchanged apart from whitespace.
pub fn visible_text(s: &str) -> String {
    let raw: String = VisChars::new(s).collect();
    super::sanitize::normalize_ws(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_character_spans_join_up() {
        let html = "<span>4</span><span>5</span><span>&#39;</span><span>+</span><span>2</span>";
        assert_eq!(visible_text(html), "45'+2");
    }

    #[test]
    fn quoted_gt_inside_tag_is_skipped() {
        let html = r#"<span title="a > b">9</span><span data-x='>'>0</span>"#;
        assert_eq!(visible_text(html), "90");
    }

    #[test]
    fn entities_and_bare_ampersand() {
        assert_eq!(visible_text("12&rsquo;&nbsp;(pen)"), "12' (pen)");
        assert_eq!(visible_text("Brighton & Hove"), "Brighton & Hove");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(visible_text("  Dismissed at 67' "), "Dismissed at 67'");
    }
}
