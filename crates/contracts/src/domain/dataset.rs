use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One recorded comparison row with a server-defined shape.
///
/// The backend owns the dataset schema and may change it at any time, so the
/// client keeps whatever keys arrive, in arrival order (`serde_json` is built
/// with `preserve_order`), and renders columns from the first row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetRow(pub Map<String, Value>);

impl DatasetRow {
    /// Column names of this row, in key order
    pub fn columns(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    /// Cell text for a column.
    ///
    /// A missing key renders as an empty cell; string values render without
    /// JSON quoting.
    pub fn cell(&self, column: &str) -> String {
        match self.0.get(column) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(value) => value.to_string(),
        }
    }

    /// Values of keys this row has beyond the header's column set, in key
    /// order. Rendered as untitled trailing cells.
    pub fn extra_cells(&self, columns: &[String]) -> Vec<String> {
        self.0
            .iter()
            .filter(|(key, _)| !columns.iter().any(|c| c == *key))
            .map(|(key, _)| self.cell(key))
            .collect()
    }
}

/// Column set for a whole response: the first row decides.
pub fn infer_columns(rows: &[DatasetRow]) -> Vec<String> {
    rows.first().map(DatasetRow::columns).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(json: &str) -> Vec<DatasetRow> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_columns_from_first_row_in_key_order() {
        let rows = rows(r#"[{"a":1,"b":2},{"a":3,"b":4}]"#);
        assert_eq!(infer_columns(&rows), vec!["a", "b"]);
        assert_eq!(rows[0].cell("a"), "1");
        assert_eq!(rows[0].cell("b"), "2");
        assert_eq!(rows[1].cell("a"), "3");
        assert_eq!(rows[1].cell("b"), "4");
    }

    #[test]
    fn test_empty_response_has_no_columns() {
        assert!(infer_columns(&[]).is_empty());
    }

    #[test]
    fn test_missing_key_renders_blank() {
        let rows = rows(r#"[{"a":1,"b":2},{"a":3}]"#);
        let columns = infer_columns(&rows);
        assert_eq!(rows[1].cell("b"), "");
        assert!(rows[1].extra_cells(&columns).is_empty());
    }

    #[test]
    fn test_extra_keys_render_as_trailing_cells() {
        let rows = rows(r#"[{"a":1},{"a":2,"z":"extra","y":null}]"#);
        let columns = infer_columns(&rows);
        assert_eq!(columns, vec!["a"]);
        assert_eq!(rows[1].extra_cells(&columns), vec!["extra", ""]);
    }

    #[test]
    fn test_scalar_rendering() {
        let rows = rows(r#"[{"name":"resume_1.pdf","score":88.5,"ok":true,"note":null}]"#);
        assert_eq!(rows[0].cell("name"), "resume_1.pdf");
        assert_eq!(rows[0].cell("score"), "88.5");
        assert_eq!(rows[0].cell("ok"), "true");
        assert_eq!(rows[0].cell("note"), "");
    }
}
