//! Entropy-based letter scoring
//!
//! Implements Shannon entropy over letter position partitions, blended with
//! document frequency. This is the primary scorer whenever the corpus still
//! holds candidates.

mod calculator;
mod selector;

pub use calculator::{
    LetterMetrics, calculate_entropy, calculate_metrics, document_frequency, shannon_entropy,
};
pub use selector::{score_letters, select_best_letter};
