// src/csv.rs
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
/// Blank lines are dropped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    parse_rows_numbered(text, sep).into_iter().map(|(_, row)| row).collect()
}

/// Same as `parse_rows`, but each row carries the 1-based line it started on.
pub fn parse_rows_numbered(text: &str, sep: char) -> Vec<(usize, Vec<String>)> {
    parse_rows_with(text, sep, None)
}

/// Numbered rows, dropping lines whose first non-blank char is `comment`.
/// Comments are cut before quote handling, so a stray `"` in one cannot
/// open a field that swallows the lines after it.
pub fn parse_rows_skipping_comments(text: &str, sep: char, comment: char) -> Vec<(usize, Vec<String>)> {
    parse_rows_with(text, sep, Some(comment))
}

fn parse_rows_with(text: &str, sep: char, comment: Option<char>) -> Vec<(usize, Vec<String>)> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut row_line = 1usize;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if comment == Some(ch) && !in_quotes && row.is_empty() && field.trim().is_empty() {
            for rest in chars.by_ref() {
                if rest == '\n' {
                    break;
                }
            }
            field.clear();
            line += 1;
            row_line = line;
            continue;
        }

        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push((row_line, take(&mut row)));
                } else {
                    row.clear();
                }
                line += 1;
                row_line = line;
            }
            '\n' => { field.push(ch); line += 1; }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    if !(row.len() == 1 && row[0].is_empty()) {
        rows.push((row_line, row));
    }

    rows
}

/// Drop a leading header row if its first cell equals `first_header`.
pub fn strip_header(mut rows: Vec<Vec<String>>, first_header: &str) -> Vec<Vec<String>> {
    let is_header = rows
        .first()
        .and_then(|r| r.first())
        .is_some_and(|c| c.trim().eq_ignore_ascii_case(first_header));
    if is_header {
        rows.remove(0);
    }
    rows
}

/* ---------------- Writing ---------------- */

/// Quote a cell when it holds the separator, a quote or a line break.
fn push_cell(out: &mut String, cell: &str, sep: char) {
    if cell.contains([sep, '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&cell.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(cell);
    }
}

/// Append one newline-terminated row.
pub fn push_row(out: &mut String, row: &[String], sep: char) {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            out.push(sep);
        }
        push_cell(out, cell, sep);
    }
    out.push('\n');
}

/// Whole table as text, for the store, Copy and Export alike.
pub fn to_export_string(
    headers: &[String],
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut out = String::new();
    if include_headers {
        push_row(&mut out, headers, sep);
    }
    for r in rows {
        push_row(&mut out, r, sep);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_fields_keep_separators() {
        let rows = parse_rows("event,\"Son, H\",\"(12'12', 80'80')\"\r\n\nleague,x\n", ',');
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["event", "Son, H", "(12'12', 80'80')"]);
        assert_eq!(rows[1], vec!["league", "x"]);
    }

    #[test]
    fn line_numbers_skip_blank_lines() {
        let rows = parse_rows_numbered("a,b\n\n\nc,\"d\nd\"\ne", ',');
        let lines: Vec<usize> = rows.iter().map(|(l, _)| *l).collect();
        assert_eq!(lines, vec![1, 4, 6]);
        assert_eq!(rows[1].1, vec!["c", "d\nd"]);
    }

    #[test]
    fn comment_lines_are_cut_before_quotes() {
        let rows = parse_rows_skipping_comments("a,#b\n  # it's \"odd\r\n\"c\",d\n#\ne", ',', '#');
        assert_eq!(
            rows,
            vec![(1, cells!["a", "#b"]), (3, cells!["c", "d"]), (5, cells!["e"])]
        );
    }

    #[test]
    fn export_string_quotes_when_needed() {
        let headers = cells!["Player", "Minute"];
        let rows = vec![cells!["O'Neil, J", 45], cells!["Say \"hi\"", 3]];
        let out = to_export_string(&headers, &rows, true, ',');
        assert_eq!(out, "Player,Minute\n\"O'Neil, J\",45\n\"Say \"\"hi\"\"\",3\n");

        let tsv = to_export_string(&headers, &rows, false, '\t');
        assert_eq!(tsv, "O'Neil, J\t45\n\"Say \"\"hi\"\"\"\t3\n");
    }

    #[test]
    fn header_is_stripped_only_when_present() {
        let rows = vec![cells!["Date", "x"], cells!["2019-02-23", "y"]];
        assert_eq!(strip_header(rows.clone(), "date").len(), 1);
        assert_eq!(strip_header(rows[1..].to_vec(), "date").len(), 1);
    }
}
