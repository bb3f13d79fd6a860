use crate::history::record::ConversionRecord;
use serde::Serialize;

/// Append-only list of completed conversions, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConversionHistory {
    records: Vec<ConversionRecord>,
}

impl ConversionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: ConversionRecord) {
        self.records.push(record);
    }

    pub fn all(&self) -> &[ConversionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConversionRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&ConversionRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Export the records as a JSON array, oldest first
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records)
    }
}

impl<'a> IntoIterator for &'a ConversionHistory {
    type Item = &'a ConversionRecord;
    type IntoIter = std::slice::Iter<'a, ConversionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
