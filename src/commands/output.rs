//! Terminal rendering of resources
//!
//! Lists come out as aligned columns, single resources as a sorted
//! property/value listing with nested documents pretty-printed.

use serde_json::Value;

use crate::resource::Resource;

/// Render one cell. Nested documents collapse to compact JSON; absent
/// values render as a dash.
fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.replace('\r', " "),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => serde_json::to_string(other).unwrap_or_default(),
    }
}

/// Print resources as a column-aligned table over the given fields.
pub fn print_list(resources: &[Resource], fields: &[&str]) {
    let rows: Vec<Vec<String>> = resources
        .iter()
        .map(|r| fields.iter().map(|f| cell(r.attr(f))).collect())
        .collect();

    let mut widths: Vec<usize> = fields.iter().map(|f| f.len()).collect();
    for row in &rows {
        for (i, value) in row.iter().enumerate() {
            widths[i] = widths[i].max(value.len());
        }
    }

    let header: Vec<String> = fields
        .iter()
        .zip(&widths)
        .map(|(f, &w)| format!("{f:<w$}"))
        .collect();
    println!("{}", header.join("  "));
    println!(
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(v, &w)| format!("{v:<w$}"))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}

/// Print one resource as sorted property/value lines.
pub fn print_resource(resource: &Resource) {
    let map = resource.to_map();
    let width = map.keys().map(String::len).max().unwrap_or(0);

    // Map iteration is insertion-ordered; show properties sorted instead
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    for key in keys {
        let value = &map[key.as_str()];
        let rendered = match value {
            Value::Object(_) | Value::Array(_) => {
                let pretty = serde_json::to_string_pretty(value).unwrap_or_default();
                indent_continuation(&pretty, width + 2)
            }
            other => cell(Some(other)),
        };
        println!("{key:<width$}  {rendered}");
    }
}

fn indent_continuation(text: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line.to_string()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
