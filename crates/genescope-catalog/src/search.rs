use genescope_core::record::GeneRecord;

/// Records matching a query, in store order. Each entry keeps its store index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet<'a> {
    hits: Vec<(usize, &'a GeneRecord)>,
}

impl<'a> ResultSet<'a> {
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn hits(&self) -> &[(usize, &'a GeneRecord)] {
        &self.hits
    }

    pub fn records(&self) -> impl Iterator<Item = &'a GeneRecord> + '_ {
        self.hits.iter().map(|(_, r)| *r)
    }

    /// Store indices of the matching records.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.hits.iter().map(|(i, _)| *i)
    }
}

/// Outcome of one search. An empty query is not the same as zero matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    EmptyQuery,
    NoMatches { query: String },
    Matches(ResultSet<'a>),
}

impl<'a> SearchOutcome<'a> {
    pub fn results(&self) -> Option<&ResultSet<'a>> {
        match self {
            SearchOutcome::Matches(results) => Some(results),
            _ => None,
        }
    }

    pub fn match_count(&self) -> usize {
        self.results().map(ResultSet::len).unwrap_or(0)
    }
}

/// Trimmed, case-folded form of a query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// True if any present field of `record` contains `needle` (already normalized).
pub fn record_matches(record: &GeneRecord, needle: &str) -> bool {
    record
        .values()
        .any(|(_, value)| value.to_lowercase().contains(needle))
}

/// Case-insensitive substring search over every text field of every record.
///
/// Stable: matches keep their order in `records`. No index, no ranking.
pub fn search<'a>(query: &str, records: &'a [GeneRecord]) -> SearchOutcome<'a> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return SearchOutcome::EmptyQuery;
    }

    let hits: Vec<(usize, &GeneRecord)> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(record, &needle))
        .collect();

    tracing::debug!(query = %needle, matches = hits.len(), scanned = records.len(), "search");

    if hits.is_empty() {
        SearchOutcome::NoMatches { query: needle }
    } else {
        SearchOutcome::Matches(ResultSet { hits })
    }
}
