//! Document Tree Walking
//!
//! A document tree is the nested JSON the document service returns:
//! `body.content[]` holds block elements, each either a `paragraph` with
//! `elements[].textRun.content`, or a `table` with
//! `tableRows[].tableCells[].content[]` of further block elements.
//!
//! Absent or mistyped keys anywhere below the root read as empty.

use serde_json::Value;

use crate::types::{Result, Table, ValidationError, json_array, json_object, json_string};

/// Top-level block elements of the document body.
fn body_elements(tree: &Value) -> Result<&[Value]> {
    if !tree.is_object() {
        return Err(ValidationError::wrong_type("object", tree)
            .with_field("document")
            .into());
    }
    Ok(json_object(tree, "body")
        .map(|body| json_array(body, "content"))
        .unwrap_or(&[]))
}

/// Text runs of one paragraph, in order.
fn paragraph_runs(paragraph: &Value) -> impl Iterator<Item = &str> {
    json_array(paragraph, "elements")
        .iter()
        .filter_map(|element| element.get("textRun")?.get("content")?.as_str())
}

/// Text runs of every paragraph nested directly in a cell.
fn cell_runs(cell: &Value) -> impl Iterator<Item = &str> {
    json_array(cell, "content")
        .iter()
        .filter_map(|block| block.get("paragraph"))
        .flat_map(paragraph_runs)
}

fn table_rows(table: &Value) -> impl Iterator<Item = &[Value]> {
    json_array(table, "tableRows")
        .iter()
        .map(|row| json_array(row, "tableCells"))
}

fn parse_table(table: &Value) -> Table {
    let cells: Vec<Vec<String>> = table_rows(table)
        .map(|row| {
            row.iter()
                .map(|cell| cell_runs(cell).collect::<String>().trim().to_string())
                .collect()
        })
        .collect();

    Table {
        row_count: cells.len(),
        column_count: cells.first().map_or(0, Vec::len),
        cells,
    }
}

/// Every table among the top-level body elements, in document order.
pub fn extract_tables(tree: &Value) -> Result<Vec<Table>> {
    Ok(body_elements(tree)?
        .iter()
        .filter_map(|element| element.get("table"))
        .map(parse_table)
        .collect())
}

/// Plain text of the document: paragraph runs and table cell runs,
/// concatenated without separators.
pub fn extract_text(tree: &Value) -> Result<String> {
    let mut text = String::new();

    for element in body_elements(tree)? {
        if let Some(paragraph) = element.get("paragraph") {
            text.extend(paragraph_runs(paragraph));
        } else if let Some(table) = element.get("table") {
            for row in table_rows(table) {
                for cell in row {
                    text.extend(cell_runs(cell));
                }
            }
        }
    }

    Ok(text)
}

/// The document's title, when the tree carries one.
pub fn document_title(tree: &Value) -> Option<String> {
    json_string(tree, "title")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(text: &str) -> Value {
        json!({"textRun": {"content": text}})
    }

    fn cell(runs: &[&str]) -> Value {
        json!({"content": [{"paragraph": {"elements": runs.iter().map(|r| run(r)).collect::<Vec<_>>()}}]})
    }

    fn sample_tree() -> Value {
        json!({
            "title": "Quarterly Report",
            "body": {"content": [
                {"sectionBreak": {}},
                {"paragraph": {"elements": [run("Intro "), run("text\n")]}},
                {"table": {"tableRows": [
                    {"tableCells": [cell(&["Na", "me "]), cell(&[" Score\n"])]},
                    {"tableCells": [cell(&["Ada"]), cell(&["42"])]}
                ]}},
                {"paragraph": {"elements": [run("Outro\n"), {"inlineObjectElement": {}}]}}
            ]}
        })
    }

    #[test]
    fn test_extract_tables() {
        let tables = extract_tables(&sample_tree()).unwrap();
        assert_eq!(tables.len(), 1);
        let table = &tables[0];
        assert_eq!(table.row_count, 2);
        assert_eq!(table.column_count, 2);
        assert_eq!(
            table.cells,
            vec![
                vec!["Name".to_string(), "Score".to_string()],
                vec!["Ada".to_string(), "42".to_string()],
            ]
        );
    }

    #[test]
    fn test_missing_keys_are_empty() {
        assert!(extract_tables(&json!({})).unwrap().is_empty());
        assert!(extract_tables(&json!({"body": {}})).unwrap().is_empty());

        let tables = extract_tables(&json!({"body": {"content": [{"table": {}}]}})).unwrap();
        assert_eq!(tables, vec![Table::default()]);

        let tables =
            extract_tables(&json!({"body": {"content": [{"table": {"tableRows": [{}]}}]}}))
                .unwrap();
        assert_eq!(tables[0].row_count, 1);
        assert_eq!(tables[0].column_count, 0);
    }

    #[test]
    fn test_non_object_root_is_invalid() {
        let err = extract_tables(&json!("not a tree")).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(extract_text(&json!([1])).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_extract_text() {
        let text = extract_text(&sample_tree()).unwrap();
        assert_eq!(text, "Intro text\nName  Score\nAda42Outro\n");
    }

    #[test]
    fn test_document_title() {
        assert_eq!(
            document_title(&sample_tree()),
            Some("Quarterly Report".to_string())
        );
        assert_eq!(document_title(&json!({})), None);
    }
}
