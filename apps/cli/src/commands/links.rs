use std::io::Write;

use anyhow::bail;
use clap::ValueEnum;
use genescope_formats::links::ExternalService;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceArg {
    /// NCBI BLAST nucleotide search
    Blast,
    /// KEGG pathway lookup
    Pathway,
    /// UniProt protein search
    Protein,
    /// PubChem compound search
    Compound,
}

impl From<ServiceArg> for ExternalService {
    fn from(arg: ServiceArg) -> Self {
        match arg {
            ServiceArg::Blast => ExternalService::AlignmentSearch,
            ServiceArg::Pathway => ExternalService::PathwayLookup,
            ServiceArg::Protein => ExternalService::ProteinDatabase,
            ServiceArg::Compound => ExternalService::CompoundDatabase,
        }
    }
}

/// Host capability that opens a URL outside this process.
pub trait ExternalOpener {
    fn open(&mut self, service: ExternalService, url: &str) -> anyhow::Result<()>;
}

/// Terminal implementation: prints the URL for the user to follow.
pub struct PrintOpener<W: Write> {
    out: W,
}

impl<W: Write> PrintOpener<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ExternalOpener for PrintOpener<W> {
    fn open(&mut self, service: ExternalService, url: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{}: {}", service.display_name(), url)?;
        Ok(())
    }
}

pub fn open_service(
    opener: &mut impl ExternalOpener,
    service: ExternalService,
    text: &str,
) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        bail!("Please enter a search term for {}", service.display_name());
    }
    let url = service.url_for(text);
    tracing::debug!(?service, %url, "opening external service");
    opener.open(service, &url)
}
