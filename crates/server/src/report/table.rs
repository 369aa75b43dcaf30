//! Generic HTML table rendering for the activity reports.

use crate::report::row::Cell;
use askama::Template;

/// Assembled dashboard table, totals row first, handed to the HTML template.
#[derive(Debug, Template)]
#[template(path = "activity_table.html")]
pub struct ActivityTable {
    pub title: String,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl ActivityTable {
    /// Render the full page. Text cells are HTML-escaped by the template;
    /// link cells are inserted verbatim.
    #[tracing::instrument(skip(self), fields(rows = self.rows.len()))]
    pub fn render_page(&self) -> Result<String, askama::Error> {
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headers_rows_and_escapes_text() {
        let table = ActivityTable {
            title: "Remote servers".into(),
            columns: vec!["ID", "Hostname", "Links"],
            rows: vec![vec![
                Cell::Int(1),
                Cell::text("a&b.example.com"),
                Cell::Html(r#"<a href="https://admin.example.com/x">stats</a>"#.into()),
            ]],
        };
        let page = table.render_page().expect("render");
        assert!(page.contains("<h1>Remote servers</h1>"));
        assert!(page.contains("<th>Hostname</th>"));
        assert!(page.contains("a&amp;b.example.com"));
        assert!(page.contains(r#"<a href="https://admin.example.com/x">stats</a>"#));
    }
}
