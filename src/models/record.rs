use std::collections::HashMap;

/// One call-log row as reported by the device: a plain mapping from column
/// name to the raw string value found in the dump.
///
/// No key is guaranteed to be present; accessors supply the documented
/// defaults so a partial row still renders. Inserting the same key twice
/// keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallRecord {
    fields: HashMap<String, String>,
}

impl CallRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Raw value for `key`, or `default` when the device omitted the column.
    pub fn field_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn number(&self) -> &str {
        self.field_or("number", "Unknown")
    }

    pub fn name(&self) -> &str {
        self.field_or("name", "Unknown")
    }

    pub fn type_code(&self) -> &str {
        self.field_or("type", "Unknown")
    }

    /// Epoch-milliseconds string; "0" when the column is absent.
    pub fn date_millis(&self) -> &str {
        self.field_or("date", "0")
    }

    /// Duration-in-seconds string; "0" when the column is absent.
    pub fn duration_secs(&self) -> &str {
        self.field_or("duration", "0")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
