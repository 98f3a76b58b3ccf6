//! Request URLs for the external analysis services.
//!
//! Only the URL is produced here; opening it is left to the host.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalService {
    /// Nucleotide alignment search (NCBI BLAST).
    AlignmentSearch,
    /// Pathway lookup (KEGG).
    PathwayLookup,
    /// Protein database (UniProt).
    ProteinDatabase,
    /// Compound database (PubChem).
    CompoundDatabase,
}

impl ExternalService {
    pub const ALL: [ExternalService; 4] = [
        ExternalService::AlignmentSearch,
        ExternalService::PathwayLookup,
        ExternalService::ProteinDatabase,
        ExternalService::CompoundDatabase,
    ];

    fn template(&self) -> &'static str {
        match self {
            ExternalService::AlignmentSearch => {
                "https://blast.ncbi.nlm.nih.gov/Blast.cgi?PROGRAM=blastn&PAGE_TYPE=BlastSearch&QUERY="
            }
            ExternalService::PathwayLookup => {
                "https://www.kegg.jp/kegg-bin/search_pathway_text?map=map&mode=1&keyword="
            }
            ExternalService::ProteinDatabase => "https://www.uniprot.org/uniprotkb?query=",
            ExternalService::CompoundDatabase => "https://pubchem.ncbi.nlm.nih.gov/#query=",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExternalService::AlignmentSearch => "NCBI BLAST",
            ExternalService::PathwayLookup => "KEGG Pathway",
            ExternalService::ProteinDatabase => "UniProt",
            ExternalService::CompoundDatabase => "PubChem",
        }
    }

    /// Percent-encode `query` into this service's request URL.
    pub fn url_for(&self, query: &str) -> String {
        format!("{}{}", self.template(), urlencoding::encode(query.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_url() {
        let url = ExternalService::AlignmentSearch.url_for("ATGC");
        assert!(url.starts_with("https://blast.ncbi.nlm.nih.gov/"));
        assert!(url.ends_with("&QUERY=ATGC"));
    }

    #[test]
    fn test_query_is_percent_encoded() {
        let url = ExternalService::ProteinDatabase.url_for(" amyloid beta & tau ");
        assert_eq!(
            url,
            "https://www.uniprot.org/uniprotkb?query=amyloid%20beta%20%26%20tau"
        );
    }

    #[test]
    fn test_every_service_is_https() {
        for service in ExternalService::ALL {
            assert!(service.url_for("APOE").starts_with("https://"));
            assert!(service.url_for("APOE").ends_with("APOE"));
        }
    }
}
