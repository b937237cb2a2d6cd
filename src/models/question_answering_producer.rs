use crate::constants::DEFAULT_LARGEST_NUMBER_PROMPT;
use crate::models::{Candidate, CandidateProducer, Page};
use crate::types::PageIndex;
use crate::Error;
use log::debug;

/// An extractive question-answering backend.
///
/// Given a question and a context passage, returns the short span of the
/// context it believes answers the question.
pub trait AnswerModel {
    fn answer(&self, question: &str, context: &str) -> Result<String, Error>;
}

impl<F> AnswerModel for F
where
    F: Fn(&str, &str) -> Result<String, Error>,
{
    fn answer(&self, question: &str, context: &str) -> Result<String, Error> {
        self(question, context)
    }
}

/// Asks an `AnswerModel` for the largest number on each page.
///
/// The model already isolates a single phrase, so its answer becomes the
/// page's only candidate and skips false-positive filtering and scanning.
pub struct QuestionAnsweringProducer<'a, M: AnswerModel> {
    model: &'a M,
    prompt: String,
}

impl<'a, M: AnswerModel> QuestionAnsweringProducer<'a, M> {
    pub fn new(model: &'a M, prompt: &str) -> Self {
        Self {
            model,
            prompt: prompt.to_string(),
        }
    }

    /// Uses the few-shot prompt.
    pub fn with_default_prompt(model: &'a M) -> Self {
        Self::new(model, DEFAULT_LARGEST_NUMBER_PROMPT)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

impl<M: AnswerModel> CandidateProducer for QuestionAnsweringProducer<'_, M> {
    fn produce(&self, page_index: PageIndex, page: &Page) -> Result<Vec<Candidate>, Error> {
        if page.text.trim().is_empty() {
            return Ok(vec![]);
        }

        let answer = self.model.answer(&self.prompt, &page.text)?;
        let answer = answer.trim().to_string();

        debug!("Page {} answer: {:?}", page_index, answer);

        if answer.is_empty() {
            return Ok(vec![]);
        }

        Ok(vec![Candidate::from_text_block(answer, page_index)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LARGEST_NUMBER_PROMPT_BASIC;

    #[test]
    fn test_answer_becomes_single_candidate() {
        let model = |_question: &str, _context: &str| -> Result<String, Error> {
            Ok("  $321 Billion ".to_string())
        };
        let producer = QuestionAnsweringProducer::with_default_prompt(&model);

        let candidates = producer.produce(4, &Page::from_text("text")).unwrap();

        assert_eq!(
            candidates,
            vec![Candidate::from_text_block("$321 Billion".to_string(), 4)]
        );
    }

    #[test]
    fn test_prompt_and_context_are_passed_through() {
        let model = |question: &str, context: &str| -> Result<String, Error> {
            assert_eq!(question, LARGEST_NUMBER_PROMPT_BASIC);
            assert_eq!(context, "the page");
            Ok("1".to_string())
        };
        let producer = QuestionAnsweringProducer::new(&model, LARGEST_NUMBER_PROMPT_BASIC);

        assert_eq!(producer.produce(0, &Page::from_text("the page")).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_answers_and_pages_produce_nothing() {
        let model = |_question: &str, _context: &str| -> Result<String, Error> {
            Ok("   ".to_string())
        };
        let producer = QuestionAnsweringProducer::with_default_prompt(&model);

        assert!(producer.produce(0, &Page::from_text("text")).unwrap().is_empty());
        assert!(producer.produce(0, &Page::default()).unwrap().is_empty());
    }

    #[test]
    fn test_model_errors_propagate() {
        let model = |_question: &str, _context: &str| -> Result<String, Error> {
            Err(Error::AnswerModelError("offline".to_string()))
        };
        let producer = QuestionAnsweringProducer::with_default_prompt(&model);

        assert!(matches!(
            producer.produce(0, &Page::from_text("text")),
            Err(Error::AnswerModelError(_))
        ));
    }
}
