use serde_json::Value;

pub trait IntoRows {
    fn into_rows(self) -> Vec<Vec<String>>;
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl IntoRows for Vec<Vec<Value>> {
    fn into_rows(self) -> Vec<Vec<String>> {
        self.into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect()
    }
}
