use crate::models::{CandidateSourceKind, CellPosition, NormalizedNumber};
use crate::types::{PageIndex, RawText};

/// The largest number found so far, with the literal text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct BestResult {
    pub value: f64,
    pub text: RawText,
    pub page_index: PageIndex,
    pub source_kind: CandidateSourceKind,
    pub cell_position: Option<CellPosition>,
}

impl BestResult {
    /// Folds a normalized number into an optional running best.
    ///
    /// Replaces the best only when `number` is strictly greater, so the
    /// earliest-found value wins ties. Returns `true` when replaced.
    pub fn offer(best: &mut Option<BestResult>, number: NormalizedNumber) -> bool {
        Self::offer_result(best, BestResult::from(number))
    }

    /// Same as `offer`, for a result that is already a `BestResult`.
    pub fn offer_result(best: &mut Option<BestResult>, candidate: BestResult) -> bool {
        let is_better = match best {
            Some(current) => candidate.value > current.value,
            None => true,
        };

        if is_better {
            *best = Some(candidate);
        }

        is_better
    }

    /// Associative, commutative merge of two partial results.
    ///
    /// Picks the greater value; ties go to the lower page index. Page-local
    /// bests already carry first-found tie-breaking within their page, so
    /// reducing them with this merge reproduces a sequential scan.
    pub fn merge(a: BestResult, b: BestResult) -> BestResult {
        if b.value > a.value || (b.value == a.value && b.page_index < a.page_index) {
            b
        } else {
            a
        }
    }
}

impl From<NormalizedNumber> for BestResult {
    fn from(number: NormalizedNumber) -> Self {
        Self {
            value: number.value,
            text: number.origin.raw_text,
            page_index: number.origin.page_index,
            source_kind: number.origin.source_kind,
            cell_position: number.origin.cell_position,
        }
    }
}
