//! Search criteria and the filter applied to note descriptors.

use crate::domain::{DateFilter, NoteDescriptor, ParseDateError};

/// Optional filters for a note search, combined with AND.
///
/// Name and path queries are stored lowercased; matching is
/// case-insensitive substring containment. Empty queries count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    name: Option<String>,
    path: Option<String>,
    date: Option<DateFilter>,
}

impl SearchCriteria {
    /// Criteria that match every note.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds criteria from raw request inputs, parsing the date once.
    ///
    /// # Errors
    ///
    /// Returns `ParseDateError` if `date` is present, non-empty and malformed.
    pub fn parse(
        name: Option<&str>,
        path: Option<&str>,
        date: Option<&str>,
    ) -> Result<Self, ParseDateError> {
        let mut criteria = Self::new();
        if let Some(name) = name {
            criteria = criteria.name(name);
        }
        if let Some(path) = path {
            criteria = criteria.path(path);
        }
        if let Some(date) = date.filter(|d| !d.is_empty()) {
            criteria = criteria.date(DateFilter::parse(date)?);
        }
        Ok(criteria)
    }

    pub fn name(mut self, query: &str) -> Self {
        self.name = non_empty_lowercase(query);
        self
    }

    pub fn path(mut self, query: &str) -> Self {
        self.path = non_empty_lowercase(query);
        self
    }

    pub fn date(mut self, filter: DateFilter) -> Self {
        self.date = Some(filter);
        self
    }

    /// Returns true if the note satisfies every supplied filter.
    pub fn matches(&self, note: &NoteDescriptor) -> bool {
        if let Some(query) = &self.name {
            if !note.name().to_lowercase().contains(query.as_str()) {
                return false;
            }
        }

        if let Some(query) = &self.path {
            if !note
                .path()
                .to_string_lossy()
                .to_lowercase()
                .contains(query.as_str())
            {
                return false;
            }
        }

        if let Some(filter) = &self.date {
            if !filter.matches(&note.modified()) {
                return false;
            }
        }

        true
    }

    /// Keeps the matching notes, preserving their order.
    pub fn filter(&self, mut notes: Vec<NoteDescriptor>) -> Vec<NoteDescriptor> {
        notes.retain(|n| self.matches(n));
        notes
    }
}

fn non_empty_lowercase(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_lowercase())
}
