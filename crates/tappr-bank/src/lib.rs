//! # tappr-bank
//!
//! The static compatibility-question catalog plus sampling, validation, and
//! statistics operations.
//!
//! The bank is compiled-in immutable data, so validation failures are
//! reported rather than thrown: the bank still loads and a non-valid bank
//! only surfaces through [`validate_bank`] / [`system_health`].

mod catalog;

use std::collections::{BTreeMap, HashSet};

use rand::Rng;
use rand::seq::SliceRandom;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use tappr_core::entities::CompatibilityQuestion;
use tappr_core::enums::QuestionCategory;

/// The full immutable catalog, source order preserved.
#[must_use]
pub fn all_questions() -> &'static [CompatibilityQuestion] {
    &catalog::CATALOG
}

/// Catalog-order subsequence for one category.
#[must_use]
pub fn questions_by_category(category: QuestionCategory) -> Vec<CompatibilityQuestion> {
    all_questions()
        .iter()
        .filter(|q| q.category == category)
        .cloned()
        .collect()
}

/// `count` distinct questions chosen uniformly at random from the whole
/// catalog, no category balancing. Under-fills (never errors) if the
/// catalog has fewer entries than requested.
#[must_use]
pub fn random_questions(count: usize) -> Vec<CompatibilityQuestion> {
    random_questions_with_rng(count, &mut rand::thread_rng())
}

/// Deterministic variant of [`random_questions`] for tests.
pub fn random_questions_with_rng<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Vec<CompatibilityQuestion> {
    let mut picked: Vec<CompatibilityQuestion> =
        all_questions().choose_multiple(rng, count).cloned().collect();
    picked.shuffle(rng);
    picked
}

/// `count` questions spread as evenly as possible across the categories.
///
/// Each category contributes `count / num_categories` questions; the first
/// `count % num_categories` categories in declared order contribute one
/// extra. Within a category the pick is a uniform without-replacement
/// subset, and the combined list is shuffled before being returned.
///
/// A category short of its quota contributes everything it has; the result
/// then under-fills below `count` rather than backfilling from elsewhere.
#[must_use]
pub fn balanced_random_questions(count: usize) -> Vec<CompatibilityQuestion> {
    balanced_random_questions_with_rng(count, &mut rand::thread_rng())
}

/// Deterministic variant of [`balanced_random_questions`] for tests.
pub fn balanced_random_questions_with_rng<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Vec<CompatibilityQuestion> {
    let num_categories = QuestionCategory::ALL.len();
    let per_category = count / num_categories;
    let remainder = count % num_categories;

    let mut selected = Vec::with_capacity(count);
    for (index, category) in QuestionCategory::ALL.iter().enumerate() {
        let quota = per_category + usize::from(index < remainder);
        let pool = questions_by_category(*category);
        selected.extend(pool.choose_multiple(rng, quota).cloned());
    }

    selected.shuffle(rng);
    selected
}

/// Outcome of a bank integrity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BankValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Integrity check over the shipped catalog.
///
/// Checks: no duplicate identifiers, required fields populated, and 2–6
/// options per question. Violations are reported as error strings, not
/// treated as fatal.
#[must_use]
pub fn validate_bank() -> BankValidation {
    let mut errors = Vec::new();

    let ids: HashSet<&str> = all_questions().iter().map(|q| q.id.as_str()).collect();
    if ids.len() != all_questions().len() {
        errors.push("Duplicate question IDs found".to_string());
    }

    for (index, q) in all_questions().iter().enumerate() {
        if q.id.is_empty() || q.question.is_empty() || q.options.is_empty() || q.emoji.is_empty() {
            errors.push(format!("Question at index {index} is missing required fields"));
        }

        if q.options.len() < 2 {
            errors.push(format!("Question \"{}\" has less than 2 options", q.id));
        }

        if q.options.len() > 6 {
            errors.push(format!(
                "Question \"{}\" has more than 6 options (may not display well)",
                q.id
            ));
        }
    }

    BankValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Aggregate counts over the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BankStats {
    pub total: usize,
    /// Per-category counts, for categories actually present in the catalog.
    pub categories: BTreeMap<QuestionCategory, usize>,
    pub average_options_per_question: f64,
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bank_stats() -> BankStats {
    let mut categories = BTreeMap::new();
    for q in all_questions() {
        *categories.entry(q.category).or_insert(0) += 1;
    }

    let total = all_questions().len();
    let option_sum: usize = all_questions().iter().map(|q| q.options.len()).sum();

    BankStats {
        total,
        categories,
        average_options_per_question: option_sum as f64 / total as f64,
    }
}

/// Readiness snapshot of the discovery system's static data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SystemHealth {
    pub question_bank: BankValidation,
    pub ready: bool,
}

#[must_use]
pub fn system_health() -> SystemHealth {
    let question_bank = validate_bank();
    let ready = question_bank.is_valid;
    SystemHealth {
        question_bank,
        ready,
    }
}
