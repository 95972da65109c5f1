// src/core/html.rs
//
// Hand-rolled, case-insensitive tag-block scanning. The source page is
// generated markup with inconsistent casing and attribute noise, so we
// match tag names case-insensitively and never assume attribute order.

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Find the next `<open ...> ... </close>` block at or after `from`.
/// Returns byte offsets (start of open tag, end of close tag).
pub fn next_tag_block_ci(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(open);
    let cl = to_lower(close);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + close.len();
    Some((start, end))
}

/// Inner content of a block: everything between the end of the opening
/// tag and the start of the closing tag.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Drop all tags, keep text content, collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// All `<table>…</table>` blocks in document order.
/// Nested tables are not recursed into; the first matching close tag
/// ends a block, which is enough for the pages we scrape.
pub fn table_blocks(doc: &str) -> Vec<&str> {
    let mut tables = Vec::new();
    let mut pos = 0usize;
    while let Some((t_s, t_e)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        tables.push(&doc[t_s..t_e]);
        pos = t_e;
    }
    tables
}

/// All `<tr>…</tr>` blocks within a table block.
pub fn row_blocks(table: &str) -> Vec<&str> {
    let mut rows = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        rows.push(&table[tr_s..tr_e]);
        pos = tr_e;
    }
    rows
}

/// Text content of each `<td>`/`<th>` cell in a row, cleaned up.
pub fn cell_texts(tr: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    loop {
        let td = next_tag_block_ci(tr, "<td", "</td>", pos);
        let th = next_tag_block_ci(tr, "<th", "</th>", pos);
        let (c_s, c_e) = match (td, th) {
            (Some(a), Some(b)) => {
                if a.0 <= b.0 {
                    a
                } else {
                    b
                }
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => break,
        };
        let inner = inner_after_open_tag(&tr[c_s..c_e]);
        cells.push(strip_tags(normalize_entities(&inner)));
        pos = c_e;
    }
    cells
}

/// Rendered text of a whole table, for heuristic matching.
pub fn table_text(table: &str) -> String {
    strip_tags(normalize_entities(table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_tables_in_document_order() {
        let doc = r#"<body><TABLE id=a><tr><td>1</td></tr></TABLE>
                     <p>x</p><table class="b"><tr><td>2</td></tr></table></body>"#;
        let tables = table_blocks(doc);
        assert_eq!(tables.len(), 2);
        assert!(tables[0].contains(">1<"));
        assert!(tables[1].contains(">2<"));
    }

    #[test]
    fn no_tables_yields_empty() {
        assert!(table_blocks("<div>nothing here</div>").is_empty());
    }

    #[test]
    fn cells_handle_td_and_th_mixed_case() {
        let tr = r#"<tr><TH>Data</TH><td class=x><b>6,00</b></td></tr>"#;
        assert_eq!(cell_texts(tr), vec!["Data", "6,00"]);
    }

    #[test]
    fn strip_tags_collapses_whitespace() {
        assert_eq!(strip_tags("<td> 01.08.2025\n </td>"), "01.08.2025");
    }

    #[test]
    fn row_blocks_split() {
        let table = "<table><tr><td>a</td></tr><tr><td>b</td></tr></table>";
        assert_eq!(row_blocks(table).len(), 2);
    }
}
