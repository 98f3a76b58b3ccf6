use std::io::Write;
use std::num::NonZeroUsize;

use clap::Subcommand;
use genescope_catalog::CatalogConfig;
use genescope_core::operations::chunks;
use genescope_core::tool::{SequenceTool, ToolOutput};
use genescope_core::Primer;

#[derive(Subcommand, Debug, Clone)]
pub enum SeqCommand {
    /// Complement (A<->T, C<->G, U->A, other->N)
    Complement { sequence: String },
    /// Reverse complement
    ReverseComplement { sequence: String },
    /// DNA to RNA (T->U)
    Transcribe { sequence: String },
    /// Translate with the standard genetic code
    Translate { sequence: String },
    /// GC content in percent
    Gc { sequence: String },
    /// Wallace-rule melting temperature of a short primer
    Tm { sequence: String },
    /// Forward and reverse primers from the template ends
    Primers { sequence: String },
    /// Split into display groups of --chunk-size
    Chunks { sequence: String },
}

impl SeqCommand {
    fn tool(&self, config: &CatalogConfig) -> (SequenceTool, &str) {
        match self {
            SeqCommand::Complement { sequence } => (SequenceTool::Complement, sequence.as_str()),
            SeqCommand::ReverseComplement { sequence } => {
                (SequenceTool::ReverseComplement, sequence.as_str())
            }
            SeqCommand::Transcribe { sequence } => (SequenceTool::Transcribe, sequence.as_str()),
            SeqCommand::Translate { sequence } => (SequenceTool::Translate, sequence.as_str()),
            SeqCommand::Gc { sequence } => (SequenceTool::GcContent, sequence.as_str()),
            SeqCommand::Tm { sequence } => (SequenceTool::MeltingTemp, sequence.as_str()),
            SeqCommand::Primers { sequence } => (
                SequenceTool::Primers {
                    primer_length: config.primer_length,
                },
                sequence.as_str(),
            ),
            SeqCommand::Chunks { sequence } => (
                SequenceTool::Chunks {
                    chunk_size: config.chunk_size,
                },
                sequence.as_str(),
            ),
        }
    }
}

fn grouped(seq: &str, size: NonZeroUsize) -> String {
    chunks(seq, size).collect::<Vec<_>>().join(" ")
}

fn write_primer(out: &mut impl Write, label: &str, primer: &Primer) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<8} 5'-{}-3'  {} bp  GC {}%  Tm {} °C",
        label, primer.sequence, primer.length_bp, primer.gc_percent, primer.melting_temp_c
    )
}

pub fn run(
    command: &SeqCommand,
    config: &CatalogConfig,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let (tool, input) = command.tool(config);
    let output = tool.apply(input)?;
    tracing::debug!(?tool, "sequence tool applied");

    if json {
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
        return Ok(());
    }

    match &output {
        ToolOutput::Sequence { output, .. } => {
            writeln!(out, "{}", grouped(output, config.chunk_size))?;
        }
        ToolOutput::Percent { value, .. } => writeln!(out, "{}%", value)?,
        ToolOutput::Temperature { celsius, .. } => writeln!(out, "{} °C", celsius)?,
        ToolOutput::Primers(pair) => {
            write_primer(out, "Forward", &pair.forward)?;
            write_primer(out, "Reverse", &pair.reverse)?;
        }
        ToolOutput::Chunks { groups, .. } => {
            for (i, group) in groups.iter().enumerate() {
                writeln!(out, "{:>6}  {}", i * config.chunk_size.get() + 1, group)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_text(command: SeqCommand) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(&command, &CatalogConfig::default(), false, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_reverse_complement_grouped() {
        let text = run_text(SeqCommand::ReverseComplement {
            sequence: "aaaaa ccccc gggggg".to_string(),
        })
        .unwrap();
        assert_eq!(text, "CCCCCCGGGG GTTTTT\n");
    }

    #[test]
    fn test_translate() {
        let text = run_text(SeqCommand::Translate {
            sequence: "ATGAAATTTTAA".to_string(),
        })
        .unwrap();
        assert_eq!(text, "MKF*\n");
    }

    #[test]
    fn test_gc_and_tm() {
        assert_eq!(run_text(SeqCommand::Gc { sequence: "GGCC".into() }).unwrap(), "100%\n");
        assert_eq!(
            run_text(SeqCommand::Tm { sequence: "ATGCATGCAT".into() }).unwrap(),
            "28 °C\n"
        );
    }

    #[test]
    fn test_primers_too_short() {
        let err = run_text(SeqCommand::Primers {
            sequence: "A".repeat(39),
        })
        .unwrap_err();
        assert!(err.to_string().contains("at least 40 bp"));
    }

    #[test]
    fn test_primers() {
        let text = run_text(SeqCommand::Primers {
            sequence: format!("{}{}", "A".repeat(20), "C".repeat(20)),
        })
        .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Forward  5'-AAAAAAAAAAAAAAAAAAAA-3'"));
        assert!(lines[1].starts_with("Reverse  5'-GGGGGGGGGGGGGGGGGGGG-3'"));
        assert!(lines[1].ends_with("GC 100%  Tm 80 °C"));
    }

    #[test]
    fn test_empty_sequence() {
        assert!(run_text(SeqCommand::Complement { sequence: " ".into() }).is_err());
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        let cmd = SeqCommand::Gc {
            sequence: "ATGC".into(),
        };
        run(&cmd, &CatalogConfig::default(), true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["kind"], "percent");
        assert_eq!(value["value"], 50);
    }
}
