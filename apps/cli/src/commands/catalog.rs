use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use genescope_catalog::{CatalogConfig, PageMarker, RecordStore, SearchOutcome, SearchSession};
use genescope_core::record::{GeneRecord, RecordField};
use genescope_formats::{export as csv_export, FormatError};

use crate::dto::{PageDto, RecordDto, SearchDto};

pub const EMPTY_QUERY_PROMPT: &str =
    "Enter a gene, disease, mechanism or biomaterial to search the catalogue.";

/// Load the record file once. Failure is fatal for every catalogue command.
pub fn load_store(config: &CatalogConfig) -> anyhow::Result<RecordStore> {
    RecordStore::open(&config.records_path).with_context(|| {
        format!(
            "Could not load gene records from {}",
            config.records_path.display()
        )
    })
}

/// One-line summary of a record for result listings.
fn summary(record: &GeneRecord) -> String {
    format!(
        "{} | {} | {}",
        record.display(RecordField::GeneName),
        record.display(RecordField::Variant),
        record.display(RecordField::Disease)
    )
}

fn render_navigation(markers: &[PageMarker], current: usize) -> String {
    markers
        .iter()
        .map(|m| match m {
            PageMarker::Page(n) if *n == current => format!("[{}]", n),
            PageMarker::Page(n) => n.to_string(),
            PageMarker::Gap => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn search(
    store: &RecordStore,
    config: &CatalogConfig,
    query: &str,
    page: usize,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut session = SearchSession::new(store.records()?, config.page_size);
    session.set_query(query);

    if session.outcome().results().is_some() {
        session
            .go_to_page(page)
            .with_context(|| format!("Cannot show page {}", page))?;
    }

    let navigation = session.navigation();
    match (session.outcome(), session.current_page()) {
        (SearchOutcome::Matches(_), Some(current)) => {
            if json {
                let dto = SearchDto::Page(PageDto::new(query.trim(), &current, navigation));
                serde_json::to_writer_pretty(&mut *out, &dto)?;
                writeln!(out)?;
                return Ok(());
            }

            if let Some((first, last)) = current.item_range() {
                writeln!(
                    out,
                    "Showing {}-{} of {} results",
                    first, last, current.total_items
                )?;
            }
            for (index, record) in current.items {
                writeln!(out, "{:>4}  {}", index, summary(record))?;
            }
            if current.total_pages > 1 {
                writeln!(
                    out,
                    "Pages: {}",
                    render_navigation(&navigation, current.page_index)
                )?;
            }
        }
        (SearchOutcome::NoMatches { query }, _) => {
            if json {
                serde_json::to_writer_pretty(
                    &mut *out,
                    &SearchDto::NoMatches {
                        query: query.clone(),
                    },
                )?;
                writeln!(out)?;
            } else {
                writeln!(
                    out,
                    "No results found for \"{}\". Try a different search term.",
                    query
                )?;
            }
        }
        _ => {
            if json {
                serde_json::to_writer_pretty(&mut *out, &SearchDto::EmptyQuery)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", EMPTY_QUERY_PROMPT)?;
            }
        }
    }
    Ok(())
}

/// Write the CSV for `query` into `dir` under today's dated file name.
pub fn export(
    store: &RecordStore,
    config: &CatalogConfig,
    query: &str,
    dir: &Path,
) -> anyhow::Result<PathBuf> {
    let mut session = SearchSession::new(store.records()?, config.page_size);
    session.set_query(query);

    let text = match session.export() {
        Ok(text) => text,
        Err(FormatError::EmptyExport) => {
            bail!("Nothing to export: run a search that has matching results first")
        }
        Err(e) => return Err(e.into()),
    };

    let path = dir.join(csv_export::export_file_name_today());
    std::fs::write(&path, text)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), records = session.outcome().match_count(), "export written");
    Ok(path)
}

pub fn show(
    store: &RecordStore,
    index: usize,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let record = store.get(index)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &RecordDto::from((index, record)))?;
        writeln!(out)?;
        return Ok(());
    }

    let width = RecordField::ALL
        .iter()
        .map(|f| f.label().len())
        .max()
        .unwrap_or(0);
    for field in RecordField::ALL {
        writeln!(out, "{:<width$}  {}", field.label(), record.display(field))?;
    }
    Ok(())
}
