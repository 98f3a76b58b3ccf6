use std::num::NonZeroUsize;

use genescope_core::record::GeneRecord;
use genescope_formats::{export, FormatError};

use crate::paginate::{page_window, paginate, Page, PageMarker};
use crate::search::{search, SearchOutcome};
use crate::CatalogError;

/// Browsing state for one user: the active query, its results and the page shown.
///
/// Each session owns its state, so independent sessions over the same
/// records never interfere.
#[derive(Debug, Clone)]
pub struct SearchSession<'a> {
    records: &'a [GeneRecord],
    page_size: NonZeroUsize,
    outcome: SearchOutcome<'a>,
    page_index: usize,
}

impl<'a> SearchSession<'a> {
    pub fn new(records: &'a [GeneRecord], page_size: NonZeroUsize) -> Self {
        Self {
            records,
            page_size,
            outcome: SearchOutcome::EmptyQuery,
            page_index: 1,
        }
    }

    /// Replace the active query, recomputing results and returning to page 1.
    pub fn set_query(&mut self, query: &str) -> &SearchOutcome<'a> {
        self.outcome = search(query, self.records);
        self.page_index = 1;
        &self.outcome
    }

    pub fn outcome(&self) -> &SearchOutcome<'a> {
        &self.outcome
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// The page currently shown, if the active query has matches.
    pub fn current_page(&self) -> Option<Page<'_, (usize, &'a GeneRecord)>> {
        self.outcome
            .results()
            .map(|results| paginate(results.hits(), self.page_index, self.page_size))
    }

    pub fn total_pages(&self) -> usize {
        self.current_page().map(|p| p.total_pages).unwrap_or(0)
    }

    /// Move to `page`; only targets offered by [`Self::navigation`] are valid.
    pub fn go_to_page(&mut self, page: usize) -> Result<(), CatalogError> {
        let total = self.total_pages();
        if page == 0 || page > total {
            return Err(CatalogError::PageOutOfRange { page, total });
        }
        self.page_index = page;
        Ok(())
    }

    pub fn next_page(&mut self) -> Result<(), CatalogError> {
        self.go_to_page(self.page_index + 1)
    }

    pub fn previous_page(&mut self) -> Result<(), CatalogError> {
        self.go_to_page(self.page_index.saturating_sub(1))
    }

    /// Navigation markers for the current page; empty without matches.
    pub fn navigation(&self) -> Vec<PageMarker> {
        match self.total_pages() {
            0 => Vec::new(),
            total => page_window(self.page_index, total),
        }
    }

    /// CSV of every record matching the active query (all pages).
    pub fn export(&self) -> Result<String, FormatError> {
        match self.outcome.results() {
            Some(results) => export::to_delimited_text(results.records()),
            None => Err(FormatError::EmptyExport),
        }
    }
}
