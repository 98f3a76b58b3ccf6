use serde::{Deserialize, Serialize};

use crate::operations::{gc_percent, melting_temp_c, reverse_complement};
use crate::ToolkitError;

pub const DEFAULT_PRIMER_LENGTH: usize = 20;

/// A designed primer with its derived properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Primer {
    pub sequence: String,
    pub length_bp: usize,
    pub gc_percent: u32,
    pub melting_temp_c: u32,
}

impl Primer {
    pub fn new(sequence: impl Into<String>) -> Self {
        let sequence = sequence.into();
        Self {
            length_bp: sequence.chars().count(),
            gc_percent: gc_percent(&sequence),
            melting_temp_c: melting_temp_c(&sequence),
            sequence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimerPair {
    pub forward: Primer,
    pub reverse: Primer,
}

/// Minimum template length accepted for a given primer length, or `None`
/// when it does not fit in `usize`.
pub fn min_template_length(primer_length: usize) -> Option<usize> {
    primer_length.checked_mul(2)
}

/// Design a forward/reverse primer pair flanking the template.
///
/// The forward primer is the first `primer_length` bases; the reverse primer
/// is the reverse complement of the last `primer_length` bases.
pub fn design_primers(seq: &str, primer_length: usize) -> Result<PrimerPair, ToolkitError> {
    if primer_length == 0 {
        return Err(ToolkitError::InvalidInput(
            "primer length must be at least 1".to_string(),
        ));
    }

    let required = min_template_length(primer_length).ok_or_else(|| {
        ToolkitError::InvalidInput(format!("primer length {} is too large", primer_length))
    })?;
    let bases: Vec<char> = seq.chars().collect();
    if bases.len() < required {
        return Err(ToolkitError::InvalidInput(format!(
            "sequence must be at least {} bp for {} bp primers (got {})",
            required,
            primer_length,
            bases.len()
        )));
    }

    let forward: String = bases[..primer_length].iter().collect();
    let tail: String = bases[bases.len() - primer_length..].iter().collect();

    Ok(PrimerPair {
        forward: Primer::new(forward),
        reverse: Primer::new(reverse_complement(&tail)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE_40: &str = "ATGCATGCATGGGCCCAAATTTGGGCCCATATATCGCGTA";

    #[test]
    fn test_primer_properties() {
        let p = Primer::new("ATGCATGCAT");
        assert_eq!(p.length_bp, 10);
        assert_eq!(p.gc_percent, 40);
        assert_eq!(p.melting_temp_c, 28);
    }

    #[test]
    fn test_too_short() {
        let seq = &TEMPLATE_40[..39];
        let err = design_primers(seq, DEFAULT_PRIMER_LENGTH).unwrap_err();
        assert!(matches!(err, ToolkitError::InvalidInput(_)));
    }

    #[test]
    fn test_exact_minimum() {
        assert_eq!(TEMPLATE_40.len(), 40);
        let pair = design_primers(TEMPLATE_40, DEFAULT_PRIMER_LENGTH).unwrap();
        assert_eq!(pair.forward.sequence, &TEMPLATE_40[..20]);
        assert_eq!(pair.reverse.sequence, reverse_complement(&TEMPLATE_40[20..]));
        assert_eq!(pair.forward.length_bp, 20);
        assert_eq!(pair.reverse.length_bp, 20);
    }

    #[test]
    fn test_longer_template_uses_ends() {
        let seq = format!("{}{}{}", "A".repeat(20), "G".repeat(15), "C".repeat(20));
        let pair = design_primers(&seq, 20).unwrap();
        assert_eq!(pair.forward.sequence, "A".repeat(20));
        assert_eq!(pair.reverse.sequence, "G".repeat(20));
        assert_eq!(pair.reverse.gc_percent, 100);
        assert_eq!(pair.reverse.melting_temp_c, 80);
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(design_primers(TEMPLATE_40, 0).is_err());
    }

    #[test]
    fn test_oversized_length_rejected() {
        assert_eq!(min_template_length(usize::MAX), None);
        let err = design_primers("ATGC", usize::MAX).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
