use std::collections::HashMap;
use std::sync::LazyLock;

/// Residue emitted for stop codons.
pub const STOP: char = '*';
/// Residue emitted for any triplet outside the table.
pub const UNKNOWN_RESIDUE: char = 'X';

static STANDARD: LazyLock<CodonTable> = LazyLock::new(CodonTable::build_standard);

/// RNA codon to one-letter amino acid mapping
pub struct CodonTable {
    table: HashMap<[char; 3], char>,
}

impl CodonTable {
    /// Standard genetic code (NCBI table 1), built once per process.
    pub fn standard() -> &'static CodonTable {
        &STANDARD
    }

    fn build_standard() -> Self {
        let codons: [(&[u8; 3], char); 64] = [
            (b"UUU", 'F'), (b"UUC", 'F'), (b"UUA", 'L'), (b"UUG", 'L'),
            (b"CUU", 'L'), (b"CUC", 'L'), (b"CUA", 'L'), (b"CUG", 'L'),
            (b"AUU", 'I'), (b"AUC", 'I'), (b"AUA", 'I'), (b"AUG", 'M'),
            (b"GUU", 'V'), (b"GUC", 'V'), (b"GUA", 'V'), (b"GUG", 'V'),
            (b"UCU", 'S'), (b"UCC", 'S'), (b"UCA", 'S'), (b"UCG", 'S'),
            (b"CCU", 'P'), (b"CCC", 'P'), (b"CCA", 'P'), (b"CCG", 'P'),
            (b"ACU", 'T'), (b"ACC", 'T'), (b"ACA", 'T'), (b"ACG", 'T'),
            (b"GCU", 'A'), (b"GCC", 'A'), (b"GCA", 'A'), (b"GCG", 'A'),
            (b"UAU", 'Y'), (b"UAC", 'Y'), (b"UAA", STOP), (b"UAG", STOP),
            (b"CAU", 'H'), (b"CAC", 'H'), (b"CAA", 'Q'), (b"CAG", 'Q'),
            (b"AAU", 'N'), (b"AAC", 'N'), (b"AAA", 'K'), (b"AAG", 'K'),
            (b"GAU", 'D'), (b"GAC", 'D'), (b"GAA", 'E'), (b"GAG", 'E'),
            (b"UGU", 'C'), (b"UGC", 'C'), (b"UGA", STOP), (b"UGG", 'W'),
            (b"CGU", 'R'), (b"CGC", 'R'), (b"CGA", 'R'), (b"CGG", 'R'),
            (b"AGU", 'S'), (b"AGC", 'S'), (b"AGA", 'R'), (b"AGG", 'R'),
            (b"GGU", 'G'), (b"GGC", 'G'), (b"GGA", 'G'), (b"GGG", 'G'),
        ];

        CodonTable {
            table: codons
                .iter()
                .map(|(codon, aa)| ((**codon).map(char::from), *aa))
                .collect(),
        }
    }

    /// Translate a single RNA codon to an amino acid
    pub fn translate_codon(&self, codon: &[char]) -> char {
        let Ok(key) = <[char; 3]>::try_from(codon) else {
            return UNKNOWN_RESIDUE;
        };
        self.table
            .get(&key.map(|c| c.to_ascii_uppercase()))
            .copied()
            .unwrap_or(UNKNOWN_RESIDUE)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
