//! Single entry point for the sequence tools: raw user text in, structured result out.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::codon::CodonTable;
use crate::operations;
use crate::primer::{design_primers, PrimerPair};
use crate::ToolkitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceTool {
    Complement,
    ReverseComplement,
    Transcribe,
    Translate,
    GcContent,
    MeltingTemp,
    Primers { primer_length: usize },
    Chunks { chunk_size: NonZeroUsize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolOutput {
    Sequence { input: String, output: String },
    Percent { input: String, value: u32 },
    Temperature { input: String, celsius: u32 },
    Primers(PrimerPair),
    Chunks { input: String, groups: Vec<String> },
}

impl SequenceTool {
    /// Clean `raw`, reject empty input, and run the tool.
    pub fn apply(&self, raw: &str) -> Result<ToolOutput, ToolkitError> {
        let input = operations::clean(raw);
        if input.is_empty() {
            return Err(ToolkitError::InvalidInput(
                "please enter a sequence".to_string(),
            ));
        }

        let output = match *self {
            SequenceTool::Complement => ToolOutput::Sequence {
                output: operations::complement(&input),
                input,
            },
            SequenceTool::ReverseComplement => ToolOutput::Sequence {
                output: operations::reverse_complement(&input),
                input,
            },
            SequenceTool::Transcribe => ToolOutput::Sequence {
                output: operations::transcribe(&input),
                input,
            },
            SequenceTool::Translate => ToolOutput::Sequence {
                output: operations::translate(&input, CodonTable::standard()),
                input,
            },
            SequenceTool::GcContent => ToolOutput::Percent {
                value: operations::gc_percent(&input),
                input,
            },
            SequenceTool::MeltingTemp => ToolOutput::Temperature {
                celsius: operations::melting_temp_c(&input),
                input,
            },
            SequenceTool::Primers { primer_length } => {
                ToolOutput::Primers(design_primers(&input, primer_length)?)
            }
            SequenceTool::Chunks { chunk_size } => ToolOutput::Chunks {
                groups: operations::chunks(&input, chunk_size)
                    .map(str::to_string)
                    .collect(),
                input,
            },
        };
        Ok(output)
    }
}
