use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A list entry with a fixed column layout for `--format table`.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// A page as text: banner lines, then rows or the empty-state text.
pub struct Listing<'a, R> {
    pub preamble: Vec<String>,
    pub rows: &'a [R],
    pub empty_text: Option<&'a str>,
}

/// Print a page. JSON formats print `view` whole; the table format prints
/// the listing.
pub fn output_listing<T: Serialize, R: TableRow>(
    view: &T,
    listing: &Listing<'_, R>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json | OutputFormat::Raw => output(view, format),
        OutputFormat::Table => {
            println!("{}", render_listing(listing));
            Ok(())
        }
    }
}

fn render_listing<R: TableRow>(listing: &Listing<'_, R>) -> String {
    let mut out = listing.preamble.clone();
    if listing.rows.is_empty() {
        out.push(listing.empty_text.unwrap_or("(no rows)").to_string());
    } else {
        let rows = listing.rows.iter().map(TableRow::cells).collect::<Vec<_>>();
        out.push(table::render_entity_table(R::HEADERS, &rows, table_options()));
    }
    out.join("\n")
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();

    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, table_options());
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{Listing, TableRow, render, render_listing};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: i64,
        title: &'static str,
    }

    impl TableRow for Example {
        const HEADERS: &'static [&'static str] = &["id", "title"];

        fn cells(&self) -> Vec<String> {
            vec![self.id.to_string(), self.title.to_string()]
        }
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Example { id: 3, title: "x" }, OutputFormat::Raw).expect("render");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], 3);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn object_table_lists_keys() {
        let out = render(&Example { id: 3, title: "x" }, OutputFormat::Table).expect("render");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("title"));
    }

    #[test]
    fn empty_listing_prints_empty_text_after_banner() {
        let listing: Listing<'_, Example> = Listing {
            preamble: vec!["Live Disputes".into()],
            rows: &[],
            empty_text: Some("No disputes found"),
        };
        assert_eq!(render_listing(&listing), "Live Disputes\nNo disputes found");
    }

    #[test]
    fn listing_uses_row_headers_in_order() {
        let rows = [Example { id: 12, title: "Pipes" }];
        let listing = Listing {
            preamble: Vec::new(),
            rows: &rows,
            empty_text: None,
        };
        let out = render_listing(&listing);
        let header = out.lines().next().expect("header line");
        assert!(header.find("id") < header.find("title"));
        assert!(out.contains("Pipes"));
    }
}
