pub mod best_result;
pub use best_result::BestResult;

pub mod candidate;
pub use candidate::{Candidate, CandidateSourceKind, CellPosition, NormalizedNumber};

pub mod candidate_producer;
pub use candidate_producer::{CandidateProducer, RegexCandidateProducer};

pub mod candidate_scanner;
pub use candidate_scanner::CandidateScanner;

pub mod candidate_validator;
pub use candidate_validator::CandidateValidator;

pub mod config;
pub use config::SnifferConfig;

pub mod document_aggregator;
pub use document_aggregator::DocumentAggregator;

pub mod error;
pub use error::Error;

pub mod false_positive_filter;
pub use false_positive_filter::FalsePositiveFilter;

pub mod magnitude_table;
pub use magnitude_table::{MagnitudeEntry, MagnitudeTable};

pub mod number_normalizer;
pub use number_normalizer::NumberNormalizer;

pub mod page;
pub use page::Page;

pub mod question_answering_producer;
pub use question_answering_producer::{AnswerModel, QuestionAnsweringProducer};
