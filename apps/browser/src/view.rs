//! Plain-text rendering of pages, counts and query fields.

use std::io::{self, Write};
use symbol_search::{Page, QueryFields};

pub fn render_count(out: &mut impl Write, total: usize) -> io::Result<()> {
    match total {
        1 => writeln!(out, "1 symbol found"),
        n => writeln!(out, "{n} symbols found"),
    }
}

/// Replaces the previous list: a header line, then one row per item.
pub fn render_page(
    out: &mut impl Write,
    page: &Page<'_>,
    total: usize,
    page_size: usize,
) -> io::Result<()> {
    if page.is_empty() {
        writeln!(out, "── no symbols to show ──")?;
        return Ok(());
    }

    let first = page.offset + 1;
    let last = page.offset + page.len();
    writeln!(out, "── page {} · {first}-{last} of {total} ──", page.number)?;
    for (i, item) in page.items.iter().enumerate() {
        writeln!(out, "{:>7}  {}", first + i, item.label())?;
    }
    if page.has_more() {
        writeln!(out, "Next {page_size} ->  (type `next`)")?;
    }
    Ok(())
}

pub fn render_fields(out: &mut impl Write, fields: &QueryFields) -> io::Result<()> {
    for (field, value) in fields.iter() {
        if value.is_empty() {
            writeln!(out, "{:>9}: <any>", field.to_string())?;
        } else {
            writeln!(out, "{:>9}: {value:?}", field.to_string())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use symbol_search::{ResultItem, ResultPager, ResultSet, SearchField};

    fn render(pager: &ResultPager) -> String {
        let mut out = Vec::new();
        render_page(&mut out, &pager.page(), pager.total_count(), pager.page_size()).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn results(len: usize) -> ResultSet {
        (0..len)
            .map(|i| ResultItem::new(format!("{i}"), format!("Symbol {i}")))
            .collect()
    }

    #[test]
    fn test_count() {
        let mut out = Vec::new();
        render_count(&mut out, 0).unwrap();
        render_count(&mut out, 1).unwrap();
        render_count(&mut out, 250).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0 symbols found\n1 symbol found\n250 symbols found\n"
        );
    }

    #[test]
    fn test_first_page_offers_next() {
        let mut pager = ResultPager::default();
        pager.load(results(150));

        let text = render(&pager);
        assert!(text.starts_with("── page 1 · 1-100 of 150 ──\n"));
        assert!(text.contains("      1  Symbol 0 [0]\n"));
        assert!(text.ends_with("Next 100 ->  (type `next`)\n"));
    }

    #[test]
    fn test_last_page_has_no_next() {
        let mut pager = ResultPager::default();
        pager.load(results(150));
        pager.next_page();

        let text = render(&pager);
        assert!(text.starts_with("── page 2 · 101-150 of 150 ──\n"));
        assert!(!text.contains("Next"));
        assert_eq!(text.lines().count(), 51);
    }

    #[test]
    fn test_empty_page() {
        let pager = ResultPager::default();
        assert_eq!(render(&pager), "── no symbols to show ──\n");
    }

    #[test]
    fn test_fields() {
        let fields = QueryFields::default().with(SearchField::Name, "tank");
        let mut out = Vec::new();
        render_fields(&mut out, &fields).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("     name: \"tank\"\n"));
        assert!(text.contains("    class: <any>\n"));
        assert_eq!(text.lines().count(), 5);
    }
}
