//! Heuristic quiz question generation
//!
//! Questions are synthesized from a node's own title, content, and
//! category; no external service is involved. Question type and
//! distractor picks come from an injected random source, so a seeded
//! generator produces reproducible quizzes.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::knowledge::KnowledgeNode;

use super::models::{Difficulty, QuestionKind, QuizQuestion};

/// Distractors used when the collection has too few other nodes
const GENERIC_DISTRACTORS: [&str; 3] = [
    "A completely different concept",
    "An unrelated topic",
    "Something else entirely",
];

const BLANK: &str = "_____";

/// Generate one question for a node.
///
/// `other_titles` are the titles of every other node in the collection,
/// used as multiple-choice distractors. `index` becomes part of the
/// question id, keeping ids unique within one quiz.
pub fn generate_question<R: Rng>(
    node: &KnowledgeNode,
    other_titles: &[&str],
    index: usize,
    difficulty: Difficulty,
    rng: &mut R,
) -> QuizQuestion {
    match rng.gen_range(0..3) {
        0 => multiple_choice(node, other_titles, index, difficulty, rng),
        1 => true_false(node, index, difficulty),
        _ => fill_blank(node, index, difficulty),
    }
}

/// Multiple choice: asks for the main concept of the node; the correct
/// answer is the first sentence of its content, distractors are other
/// nodes' titles.
pub fn multiple_choice<R: Rng>(
    node: &KnowledgeNode,
    other_titles: &[&str],
    index: usize,
    difficulty: Difficulty,
    rng: &mut R,
) -> QuizQuestion {
    let correct = first_sentence(&node.content);

    let mut pool: Vec<&str> = other_titles.to_vec();
    pool.shuffle(rng);

    let mut options = vec![correct.clone()];
    for title in pool {
        if options.len() == 4 {
            break;
        }
        if !options.iter().any(|o| o.as_str() == title) {
            options.push(title.to_string());
        }
    }
    for filler in GENERIC_DISTRACTORS {
        if options.len() == 4 {
            break;
        }
        if !options.iter().any(|o| o == filler) {
            options.push(filler.to_string());
        }
    }
    options.shuffle(rng);

    QuizQuestion {
        id: format!("q{}", index),
        kind: QuestionKind::MultipleChoice,
        question: format!("What is the main concept discussed in \"{}\"?", node.title),
        options: Some(options),
        correct_answer: correct,
        explanation: Some(format!(
            "This question is based on the content of \"{}\".",
            node.title
        )),
        difficulty,
        node_id: node.id.clone(),
        category: node.category,
    }
}

/// True/false: the statement names the node's real category, so the
/// expected answer is always "True".
pub fn true_false(node: &KnowledgeNode, index: usize, difficulty: Difficulty) -> QuizQuestion {
    QuizQuestion {
        id: format!("q{}", index),
        kind: QuestionKind::TrueFalse,
        question: format!(
            "\"{}\" belongs to the {} category.",
            node.title,
            node.category.name()
        ),
        options: Some(vec!["True".to_string(), "False".to_string()]),
        correct_answer: "True".to_string(),
        explanation: None,
        difficulty,
        node_id: node.id.clone(),
        category: node.category,
    }
}

/// Fill in the blank: the middle word of the title is removed and the
/// user supplies it.
pub fn fill_blank(node: &KnowledgeNode, index: usize, difficulty: Difficulty) -> QuizQuestion {
    let mut words: Vec<String> = node.title.split_whitespace().map(String::from).collect();
    if words.is_empty() {
        words.push(node.title.clone());
    }
    let blank_index = words.len() / 2;
    let answer = words[blank_index].clone();
    words[blank_index] = BLANK.to_string();

    QuizQuestion {
        id: format!("q{}", index),
        kind: QuestionKind::FillBlank,
        question: format!("Fill in the blank: \"{}\"", words.join(" ")),
        options: None,
        correct_answer: answer,
        explanation: None,
        difficulty,
        node_id: node.id.clone(),
        category: node.category,
    }
}

/// Content up to and including the first period; the whole content with
/// a period appended when it has none.
fn first_sentence(content: &str) -> String {
    match content.split_once('.') {
        Some((head, _)) => format!("{}.", head),
        None => format!("{}.", content),
    }
}
