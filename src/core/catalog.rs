//! Built-in question catalog: the starter quiz and the dynamic follow-up
//! templates. Ids are assigned sequentially so the catalog guarantees
//! unique question ids within a phase.

use crate::models::Question;

fn question(
    text: &str,
    left: (&str, &[&str]),
    right: (&str, &[&str]),
    skip: &str,
) -> Question {
    Question {
        id: 0, // assigned by with_ids
        text: text.to_string(),
        left_choice: left.0.to_string(),
        right_choice: right.0.to_string(),
        skip_choice: skip.to_string(),
        left_tags: left.1.iter().map(|t| t.to_string()).collect(),
        right_tags: right.1.iter().map(|t| t.to_string()).collect(),
    }
}

/// Assign sequential ids starting at 1
pub fn with_ids(mut questions: Vec<Question>) -> Vec<Question> {
    for (index, q) in questions.iter_mut().enumerate() {
        q.id = index as u32 + 1;
    }
    questions
}

/// The fixed opening quiz shown to every user
pub fn starter_questions() -> Vec<Question> {
    with_ids(vec![
        question(
            "Full meal or a light snack today?",
            ("Meal", &["meal"]),
            ("Snack", &["snack"]),
            "Either",
        ),
        question(
            "Light or rich flavors?",
            ("Light", &["light"]),
            ("Rich", &["heavy"]),
            "Either",
        ),
        question(
            "Preferred price range?",
            ("Budget", &["budget"]),
            ("Upscale", &["high"]),
            "No preference",
        ),
    ])
}

/// Follow-up question templates, trimmed by profile confidence
pub fn dynamic_question_templates() -> Vec<Question> {
    vec![
        question(
            "Which cuisine today?",
            ("Japanese", &["japanese"]),
            ("Chinese", &["chinese"]),
            "Either",
        ),
        question(
            "Portions or texture?",
            ("Portions", &["heavy"]),
            ("Texture", &["light"]),
            "Either",
        ),
        question(
            "Closer or further away?",
            ("Near", &["near"]),
            ("Far", &["far"]),
            "Either",
        ),
        question(
            "Dining atmosphere?",
            ("Casual", &["casual"]),
            ("Date night", &["date"]),
            "Either",
        ),
        question(
            "Dessert or drinks?",
            ("Dessert", &["sweet"]),
            ("Cafe drinks", &["cafe"]),
            "Either",
        ),
    ]
}

/// The full catalog with catalog-wide unique ids, used when a caller ranks
/// without supplying its own question set
pub fn all_questions() -> Vec<Question> {
    let mut questions = starter_questions();
    questions.extend(dynamic_question_templates());
    with_ids(questions)
}

/// Build the dynamic question set for a session
///
/// High-confidence profiles get a shorter follow-up round.
pub fn dynamic_questions(confidence: f64) -> Vec<Question> {
    let count = if confidence >= 0.8 { 3 } else { 5 };
    let mut templates = dynamic_question_templates();
    templates.truncate(count);
    with_ids(templates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_ids_unique_and_sequential() {
        let questions = starter_questions();
        let ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_dynamic_count_by_confidence() {
        assert_eq!(dynamic_questions(0.9).len(), 3);
        assert_eq!(dynamic_questions(0.8).len(), 3);
        assert_eq!(dynamic_questions(0.5).len(), 5);
    }

    #[test]
    fn test_all_questions_ids_unique() {
        let questions = all_questions();
        let mut ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), questions.len());
    }

    #[test]
    fn test_every_question_has_both_tag_sets() {
        for q in starter_questions().into_iter().chain(dynamic_questions(0.0)) {
            assert!(!q.left_tags.is_empty(), "question {} missing left tags", q.id);
            assert!(!q.right_tags.is_empty(), "question {} missing right tags", q.id);
        }
    }
}
