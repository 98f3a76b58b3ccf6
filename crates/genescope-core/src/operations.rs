use crate::codon::CodonTable;

/// Basic cleanup applied to user-supplied sequence text: drop whitespace, uppercase.
pub fn clean(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Complement a single nucleotide. RNA `U` pairs with `A`; anything else becomes `N`.
pub fn complement_base(base: char) -> char {
    match base.to_ascii_uppercase() {
        'A' => 'T',
        'T' => 'A',
        'U' => 'A',
        'G' => 'C',
        'C' => 'G',
        _ => 'N',
    }
}

pub fn complement(seq: &str) -> String {
    seq.chars().map(complement_base).collect()
}

/// Reverse complement of a DNA sequence
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement_base).collect()
}

/// DNA to RNA: every `T` becomes `U`, all other symbols pass through.
pub fn transcribe(seq: &str) -> String {
    seq.chars().map(|c| if c == 'T' { 'U' } else { c }).collect()
}

/// Translate a nucleotide sequence to one-letter residues.
///
/// Input still containing `T` is transcribed first; input without any `T`
/// is taken as RNA as-is, without further validation. Reading starts at
/// position 0 and a trailing partial codon is dropped.
pub fn translate(seq: &str, table: &CodonTable) -> String {
    let rna = if seq.contains('T') {
        transcribe(seq)
    } else {
        seq.to_string()
    };

    let symbols: Vec<char> = rna.chars().collect();
    symbols
        .chunks_exact(3)
        .map(|codon| table.translate_codon(codon))
        .collect()
}

fn count_matching(seq: &str, symbols: &[char]) -> usize {
    seq.chars()
        .filter(|c| symbols.contains(&c.to_ascii_uppercase()))
        .count()
}

/// GC content as a rounded percentage. Empty input yields 0.
pub fn gc_percent(seq: &str) -> u32 {
    let len = seq.chars().count();
    if len == 0 {
        return 0;
    }
    let gc = count_matching(seq, &['G', 'C']);
    (100.0 * gc as f64 / len as f64).round() as u32
}

/// Wallace-rule melting temperature estimate in °C: `2(A+T) + 4(G+C)`.
///
/// Only meaningful for short primers (roughly 15-25 nt); there is no salt
/// or length correction.
pub fn melting_temp_c(primer: &str) -> u32 {
    let at = count_matching(primer, &['A', 'T']);
    let gc = count_matching(primer, &['G', 'C']);
    (2 * at + 4 * gc) as u32
}

/// Split a sequence into display groups of `size` symbols, last one possibly shorter.
pub fn chunks(seq: &str, size: std::num::NonZeroUsize) -> Chunks<'_> {
    Chunks {
        rest: seq,
        size: size.get(),
    }
}

/// Lazy chunk iterator returned by [`chunks`]. Clone it to restart.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    rest: &'a str,
    size: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let split = self
            .rest
            .char_indices()
            .nth(self.size)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(split);
        self.rest = tail;
        Some(head)
    }
}
