//! Compatibility scoring and insight generation.
//!
//! Pure functions over a session's question snapshot and the two answer
//! maps. The engine calls these once, when the target submits; the result
//! is returned to the caller synchronously and persisted on the session.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::CompatibilityQuestion;

/// Per-question comparison of the two parties' answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnswerComparison {
    /// The question's prompt text.
    pub question: String,
    pub initiator_answer: Option<String>,
    pub target_answer: Option<String>,
    pub is_match: bool,
}

/// The computed compatibility outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompatibilityResult {
    /// Integer percentage 0–100. With 5 questions: 0, 20, 40, 60, 80, 100.
    pub score: u8,
    pub matches: Vec<AnswerComparison>,
    pub insights: Vec<String>,
}

/// Compare both answer sets question by question and score the session.
///
/// Answers are compared with exact string equality: case-sensitive, no
/// trimming or normalization. A question neither party answered compares
/// equal on both sides and therefore counts as a match.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn calculate_compatibility(
    questions: &[CompatibilityQuestion],
    initiator_answers: &BTreeMap<String, String>,
    target_answers: &BTreeMap<String, String>,
) -> CompatibilityResult {
    let matches: Vec<AnswerComparison> = questions
        .iter()
        .map(|q| {
            let initiator_answer = initiator_answers.get(&q.id).cloned();
            let target_answer = target_answers.get(&q.id).cloned();
            let is_match = initiator_answer == target_answer;
            AnswerComparison {
                question: q.question.clone(),
                initiator_answer,
                target_answer,
                is_match,
            }
        })
        .collect();

    let match_count = matches.iter().filter(|m| m.is_match).count();
    let score = if questions.is_empty() {
        0
    } else {
        ((match_count as f64 / questions.len() as f64) * 100.0).round() as u8
    };

    let insights = generate_insights(score, &matches);

    CompatibilityResult {
        score,
        matches,
        insights,
    }
}

/// Insight strings for the results page.
///
/// Exactly one tier message (thresholds evaluated top-down), then the first
/// matched question's prompt if any answers matched, then the first
/// mismatched question's prompt if the outcome was mixed.
fn generate_insights(score: u8, matches: &[AnswerComparison]) -> Vec<String> {
    let mut insights = Vec::new();

    if score >= 80 {
        insights.push(
            "🎯 You're incredibly compatible! You share similar values and preferences."
                .to_string(),
        );
    } else if score >= 60 {
        insights.push(
            "✨ Great compatibility! You have a solid foundation with some interesting differences."
                .to_string(),
        );
    } else if score >= 40 {
        insights.push(
            "🤔 Mixed compatibility. You have some things in common but also unique perspectives."
                .to_string(),
        );
    } else {
        insights
            .push("🌈 Different perspectives! You might learn a lot from each other.".to_string());
    }

    if let Some(first_match) = matches.iter().find(|m| m.is_match) {
        insights.push(format!("🤝 You both agreed on: \"{}\"", first_match.question));
    }

    let difference_count = matches.iter().filter(|m| !m.is_match).count();
    if difference_count > 0 && difference_count < matches.len() {
        if let Some(first_difference) = matches.iter().find(|m| !m.is_match) {
            insights.push(format!(
                "💭 Different views on: \"{}\" - could make for interesting conversations!",
                first_difference.question
            ));
        }
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::QuestionCategory;
    use pretty_assertions::assert_eq;

    fn question(id: &str, prompt: &str) -> CompatibilityQuestion {
        CompatibilityQuestion {
            id: id.to_string(),
            question: prompt.to_string(),
            category: QuestionCategory::Lifestyle,
            options: vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()],
            emoji: "🌅".to_string(),
        }
    }

    fn five_questions() -> Vec<CompatibilityQuestion> {
        (1..=5)
            .map(|i| question(&format!("q{i}"), &format!("Question {i}?")))
            .collect()
    }

    fn answers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn three_of_five_matches_scores_sixty() {
        let questions = five_questions();
        let initiator = answers(&[("q1", "A"), ("q2", "A"), ("q3", "B"), ("q4", "B"), ("q5", "C")]);
        let target = answers(&[("q1", "A"), ("q2", "B"), ("q3", "B"), ("q4", "B"), ("q5", "D")]);

        let result = calculate_compatibility(&questions, &initiator, &target);
        assert_eq!(result.score, 60);
        let matched: Vec<bool> = result.matches.iter().map(|m| m.is_match).collect();
        assert_eq!(matched, vec![true, false, true, true, false]);
    }

    #[test]
    fn identical_answers_score_one_hundred() {
        let questions = five_questions();
        let both = answers(&[("q1", "A"), ("q2", "B"), ("q3", "C"), ("q4", "D"), ("q5", "A")]);

        let result = calculate_compatibility(&questions, &both, &both);
        assert_eq!(result.score, 100);
        assert!(result.insights[0].contains("incredibly compatible"));
        assert!(!result.insights.iter().any(|i| i.contains("Mixed compatibility")));
        assert!(!result.insights.iter().any(|i| i.contains("Different perspectives")));
        // All matched, none mismatched: no "different views" insight either.
        assert!(!result.insights.iter().any(|i| i.contains("Different views")));
    }

    #[test]
    fn zero_matches_score_zero() {
        let questions = five_questions();
        let initiator = answers(&[("q1", "A"), ("q2", "A"), ("q3", "A"), ("q4", "A"), ("q5", "A")]);
        let target = answers(&[("q1", "B"), ("q2", "B"), ("q3", "B"), ("q4", "B"), ("q5", "B")]);

        let result = calculate_compatibility(&questions, &initiator, &target);
        assert_eq!(result.score, 0);
        assert!(result.insights[0].contains("Different perspectives"));
        assert!(!result.insights.iter().any(|i| i.contains("You both agreed")));
        // All mismatched: the mixed "different views" insight is suppressed.
        assert!(!result.insights.iter().any(|i| i.contains("Different views")));
    }

    #[test]
    fn scoring_is_symmetric_under_relabeling() {
        let questions = five_questions();
        let a = answers(&[("q1", "A"), ("q2", "B"), ("q3", "C"), ("q4", "D"), ("q5", "A")]);
        let b = answers(&[("q1", "A"), ("q2", "C"), ("q3", "C"), ("q4", "A"), ("q5", "A")]);

        let forward = calculate_compatibility(&questions, &a, &b);
        let reversed = calculate_compatibility(&questions, &b, &a);
        assert_eq!(forward.score, reversed.score);
    }

    #[test]
    fn first_match_and_first_difference_are_cited_in_list_order() {
        let questions = five_questions();
        let initiator = answers(&[("q1", "A"), ("q2", "A"), ("q3", "B"), ("q4", "B"), ("q5", "C")]);
        let target = answers(&[("q1", "A"), ("q2", "B"), ("q3", "B"), ("q4", "B"), ("q5", "D")]);

        let result = calculate_compatibility(&questions, &initiator, &target);
        assert!(result.insights[1].contains("Question 1?"));
        assert!(result.insights[2].contains("Question 2?"));
    }

    #[test]
    fn tier_boundaries() {
        let questions = five_questions();
        // 4/5 = 80: highly compatible tier.
        let initiator = answers(&[("q1", "A"), ("q2", "A"), ("q3", "A"), ("q4", "A"), ("q5", "A")]);
        let target = answers(&[("q1", "A"), ("q2", "A"), ("q3", "A"), ("q4", "A"), ("q5", "B")]);
        let result = calculate_compatibility(&questions, &initiator, &target);
        assert_eq!(result.score, 80);
        assert!(result.insights[0].contains("incredibly compatible"));

        // 2/5 = 40: mixed tier.
        let target = answers(&[("q1", "A"), ("q2", "A"), ("q3", "B"), ("q4", "B"), ("q5", "B")]);
        let result = calculate_compatibility(&questions, &initiator, &target);
        assert_eq!(result.score, 40);
        assert!(result.insights[0].contains("Mixed compatibility"));
    }

    #[test]
    fn mutually_unanswered_question_counts_as_match() {
        let questions = vec![question("q1", "Question 1?")];
        let empty = BTreeMap::new();
        let result = calculate_compatibility(&questions, &empty, &empty);
        assert_eq!(result.score, 100);
        assert!(result.matches[0].is_match);
        assert_eq!(result.matches[0].initiator_answer, None);
    }

    #[test]
    fn empty_question_list_scores_zero() {
        let result = calculate_compatibility(&[], &BTreeMap::new(), &BTreeMap::new());
        assert_eq!(result.score, 0);
        assert!(result.matches.is_empty());
    }
}
