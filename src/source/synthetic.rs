//! Synthetic document generator

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::DocumentSource;
use crate::error::SourceError;
use crate::types::{Document, DocumentId, DocumentType, Position, POSITION_MAX, POSITION_MIN};
use crate::validation::STANDARD_THEMES;

/// Number of documents per batch
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Institutions a synthetic document can come from
pub const SOURCES: &[&str] = &[
    "Cour de cassation",
    "Conseil d'État",
    "Codes",
    "Revue",
    "Doctrine",
];

/// Theme tags, one of which is assigned to each synthetic document
pub const THEMES: &[&str] = STANDARD_THEMES;

const MONTHS: &[&str] = &[
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

const CODES: &[&str] = &["C. civ.", "C. pén.", "C. com.", "C. trav.", "CJA"];

/// How the initial `explored` flag of generated documents is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExploredPolicy {
    /// Coin flip per document
    #[default]
    Random,
    /// Same value for every document
    Fixed(bool),
}

/// Generates a fixed-size batch of random documents per call
///
/// With [`SyntheticGenerator::seeded`] the sequence of batches is fully
/// determined by the seed.
pub struct SyntheticGenerator {
    rng: Mutex<StdRng>,
    batch_size: usize,
    explored: ExploredPolicy,
}

impl SyntheticGenerator {
    /// Deterministic generator for tests and demos
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            batch_size: DEFAULT_BATCH_SIZE,
            explored: ExploredPolicy::default(),
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_explored(mut self, explored: ExploredPolicy) -> Self {
        self.explored = explored;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Generate one batch with ids `1..=batch_size`
    pub fn generate(&self, query: &str) -> Vec<Document> {
        let mut rng = self.rng.lock();
        (1..=self.batch_size as DocumentId)
            .map(|id| self.generate_one(&mut rng, id, query))
            .collect()
    }

    fn generate_one(&self, rng: &mut StdRng, id: DocumentId, query: &str) -> Document {
        let doc_type = DocumentType::ALL[rng.random_range(0..DocumentType::ALL.len())];
        let source = SOURCES[rng.random_range(0..SOURCES.len())];
        let theme_slot = rng.random_range(0..THEMES.len());
        let theme = THEMES[theme_slot];
        let position = Position::new(
            rng.random_range(POSITION_MIN..=POSITION_MAX),
            rng.random_range(POSITION_MIN..=POSITION_MAX),
        );
        let explored = match self.explored {
            ExploredPolicy::Random => rng.random_bool(0.5),
            ExploredPolicy::Fixed(value) => value,
        };

        let title = match doc_type {
            DocumentType::CaseLaw => format!(
                "{}, {} {} {}",
                source,
                rng.random_range(1..=28),
                MONTHS[rng.random_range(0..MONTHS.len())],
                rng.random_range(1990..=2024)
            ),
            DocumentType::Code => format!(
                "Article {} {}",
                rng.random_range(1..=2500),
                CODES[theme_slot]
            ),
            DocumentType::Doctrine => format!("Étude n° {} - droit {}", id, theme.to_lowercase()),
        };

        let abstract_text = if query.trim().is_empty() {
            format!("Document de droit {} n° {}", theme.to_lowercase(), id)
        } else {
            format!(
                "Document de droit {} en rapport avec « {} »",
                theme.to_lowercase(),
                query.trim()
            )
        };

        let reference_count = rng.random_range(0..=2);
        let references: Vec<String> = (0..reference_count)
            .map(|_| format!("art. {} {}", rng.random_range(1..=2500), CODES[theme_slot]))
            .collect();

        Document::new(id, doc_type, title, source, abstract_text, position)
            .with_themes([theme])
            .with_references(references)
            .with_explored(explored)
    }
}

#[async_trait]
impl DocumentSource for SyntheticGenerator {
    async fn fetch(&self, query: &str) -> Result<Vec<Document>, SourceError> {
        Ok(self.generate(query))
    }

    fn name(&self) -> &str {
        "synthetic"
    }
}
