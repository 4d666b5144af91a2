use rand::seq::SliceRandom;
use rand::Rng;

/// The fixed pool random sequences and option fills are drawn from.
pub const ALL_EMOJIS: [&str; 15] = [
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🦁", "🐵", "🦄", "🐸", "🐷", "🐤", "🦖",
];

pub const SEQUENCE_LEN: usize = 4;
pub const OPTIONS_LEN: usize = 6;

/// Draws a fresh target sequence from the pool, without replacement.
pub fn random_sequence<R: Rng>(rng: &mut R) -> Vec<String> {
    ALL_EMOJIS
        .choose_multiple(rng, SEQUENCE_LEN)
        .map(|e| e.to_string())
        .collect()
}

/// The sequence plus enough extra pool emojis (at least one) to reach six
/// options in total, shuffled.
pub fn fill_options<R: Rng>(sequence: &[String], rng: &mut R) -> Vec<String> {
    let pool: Vec<&str> = ALL_EMOJIS
        .iter()
        .copied()
        .filter(|e| !sequence.iter().any(|s| s == e))
        .collect();
    let extra = std::cmp::max(1, OPTIONS_LEN.saturating_sub(sequence.len()));

    let mut options: Vec<String> = sequence.to_vec();
    options.extend(pool.choose_multiple(rng, extra).map(|e| e.to_string()));
    options.shuffle(rng);
    options
}

/// Deduplicates supplied options (keeping first occurrences) and appends any
/// sequence element the options were missing.
pub fn cover_sequence(options: Vec<String>, sequence: &[String]) -> Vec<String> {
    let mut covered: Vec<String> = Vec::with_capacity(options.len());
    for option in options {
        if !covered.contains(&option) {
            covered.push(option);
        }
    }
    for needed in sequence {
        if !covered.contains(needed) {
            covered.push(needed.clone());
        }
    }
    covered
}
