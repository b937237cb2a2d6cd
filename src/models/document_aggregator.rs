use crate::models::{
    BestResult, CandidateProducer, CandidateValidator, NumberNormalizer, Page,
    RegexCandidateProducer, SnifferConfig,
};
use crate::types::PageIndex;
use crate::Error;
use log::{debug, info};
use rayon::prelude::*;

/// Runs a producer's candidates through validation and normalization and
/// keeps the single largest value across a document.
pub struct DocumentAggregator<P: CandidateProducer> {
    producer: P,
    validator: CandidateValidator,
    normalizer: NumberNormalizer,
}

impl DocumentAggregator<RegexCandidateProducer> {
    /// An aggregator that scans tables and text with the regex producer.
    pub fn with_regex_producer(config: &SnifferConfig) -> Result<Self, Error> {
        let producer = RegexCandidateProducer::new(&config.magnitude_table)?;

        Self::new(producer, config)
    }
}

impl<P: CandidateProducer> DocumentAggregator<P> {
    pub fn new(producer: P, config: &SnifferConfig) -> Result<Self, Error> {
        Ok(Self {
            producer,
            validator: CandidateValidator::new(),
            normalizer: NumberNormalizer::new(
                &config.magnitude_table,
                config.apply_negative_sign,
            )?,
        })
    }

    /// Scans pages in order and returns the largest value found.
    ///
    /// A later value replaces the best only if strictly greater, so ties go
    /// to whatever was seen first.
    ///
    /// # Errors
    /// `Error::NoNumericDataFound` if no candidate anywhere in the document
    /// validates and normalizes. Producer errors abort the scan.
    pub fn find_largest(&self, pages: &[Page]) -> Result<BestResult, Error> {
        let mut best: Option<BestResult> = None;

        for (page_index, page) in pages.iter().enumerate() {
            if let Some(page_best) = self.find_largest_in_page(page_index, page)? {
                BestResult::offer_result(&mut best, page_best);
            }
        }

        self.finish(best, pages.len())
    }

    /// Returns the largest value on a single page, or `None` if the page
    /// holds no valid candidate.
    pub fn find_largest_in_page(
        &self,
        page_index: PageIndex,
        page: &Page,
    ) -> Result<Option<BestResult>, Error> {
        let mut best: Option<BestResult> = None;

        for candidate in self.producer.produce(page_index, page)? {
            if !self.validator.is_valid(&candidate.raw_text) {
                continue;
            }

            match self.normalizer.normalize_candidate(candidate) {
                Ok(number) => {
                    BestResult::offer(&mut best, number);
                }
                // Validated text always parses
                Err(Error::MalformedCandidate(raw_text)) => {
                    debug!("Skipping malformed candidate {:?}", raw_text);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(best)
    }

    fn finish(&self, best: Option<BestResult>, total_pages: usize) -> Result<BestResult, Error> {
        match best {
            Some(best) => {
                info!(
                    "Largest number {} ({:?}) on page {} of {}",
                    best.value, best.text, best.page_index, total_pages
                );
                Ok(best)
            }
            None => {
                info!("No numeric data found in {} pages", total_pages);
                Err(Error::NoNumericDataFound)
            }
        }
    }
}

impl<P: CandidateProducer + Sync> DocumentAggregator<P> {
    /// Scans pages on the rayon thread pool.
    ///
    /// Each page keeps its own best; the partial results are reduced with
    /// `BestResult::merge`, which yields exactly what `find_largest` does.
    pub fn find_largest_parallel(&self, pages: &[Page]) -> Result<BestResult, Error> {
        let page_bests = pages
            .par_iter()
            .enumerate()
            .map(|(page_index, page)| self.find_largest_in_page(page_index, page))
            .collect::<Result<Vec<Option<BestResult>>, Error>>()?;

        let best = page_bests.into_iter().flatten().reduce(BestResult::merge);

        self.finish(best, pages.len())
    }
}
