//! Flat, JSON-friendly DTOs for `--json` output.

use genescope_catalog::{Page, PageMarker};
use genescope_core::record::{GeneRecord, RecordField};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RecordDto {
    pub index: usize,
    pub fields: Vec<FieldDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldDto {
    pub key: &'static str,
    pub label: &'static str,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub query: String,
    pub page_index: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items: Vec<RecordDto>,
    pub navigation: Vec<PageMarker>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchDto {
    EmptyQuery,
    NoMatches { query: String },
    Page(PageDto),
}

impl From<(usize, &GeneRecord)> for RecordDto {
    fn from((index, record): (usize, &GeneRecord)) -> Self {
        RecordDto {
            index,
            fields: RecordField::ALL
                .iter()
                .map(|f| FieldDto {
                    key: f.key(),
                    label: f.label(),
                    value: record.get(*f).map(str::to_string),
                })
                .collect(),
        }
    }
}

impl PageDto {
    pub fn new(
        query: &str,
        page: &Page<'_, (usize, &GeneRecord)>,
        navigation: Vec<PageMarker>,
    ) -> Self {
        PageDto {
            query: query.to_string(),
            page_index: page.page_index,
            total_pages: page.total_pages,
            total_items: page.total_items,
            items: page.items.iter().map(|(i, r)| RecordDto::from((*i, *r))).collect(),
            navigation,
        }
    }
}
