//! Prompt templates for node drafting and enhancement

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Prompt for drafting a title from existing content
pub fn draft_title(content: &str) -> String {
    format!(
        "Generate a concise, engaging title for this knowledge: \"{}\". Return only the title, no quotes or extra text.",
        content
    )
}

/// Prompt for drafting content from a title
pub fn draft_content(title: &str) -> String {
    format!(
        "Expand and enhance this knowledge topic: \"{}\". Provide detailed, educational content that explains the concept clearly. Include key points, examples, and practical applications.",
        title
    )
}

/// Prompt for suggesting tags from a title and content
pub fn draft_tags(title: &str, content: &str) -> String {
    format!(
        "Generate relevant tags for this knowledge: Title: \"{}\", Content: \"{}\". Return 3-5 tags separated by commas, no extra text.",
        title, content
    )
}

/// Ways an existing field can be rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enhancement {
    CreativeTitle,
    DescriptiveTitle,
    QuestionTitle,
    ExpandContent,
    AddExamples,
    SuggestConnections,
}

impl Enhancement {
    pub const ALL: [Enhancement; 6] = [
        Enhancement::CreativeTitle,
        Enhancement::DescriptiveTitle,
        Enhancement::QuestionTitle,
        Enhancement::ExpandContent,
        Enhancement::AddExamples,
        Enhancement::SuggestConnections,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Enhancement::CreativeTitle => "creative-title",
            Enhancement::DescriptiveTitle => "descriptive-title",
            Enhancement::QuestionTitle => "question-title",
            Enhancement::ExpandContent => "expand-content",
            Enhancement::AddExamples => "add-examples",
            Enhancement::SuggestConnections => "suggest-connections",
        }
    }
}

impl fmt::Display for Enhancement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug)]
#[error("Unknown enhancement '{0}'")]
pub struct UnknownEnhancement(String);

impl FromStr for Enhancement {
    type Err = UnknownEnhancement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Enhancement::ALL
            .iter()
            .find(|e| e.id() == s.to_lowercase())
            .copied()
            .ok_or_else(|| UnknownEnhancement(s.to_string()))
    }
}

/// Prompt for rewriting an existing field value
pub fn enhance(kind: Enhancement, current: &str) -> String {
    match kind {
        Enhancement::CreativeTitle => format!(
            "Create a creative, engaging title for: \"{}\". Make it catchy and memorable.",
            current
        ),
        Enhancement::DescriptiveTitle => format!(
            "Create a clear, descriptive title for: \"{}\". Focus on accuracy and clarity.",
            current
        ),
        Enhancement::QuestionTitle => format!(
            "Turn this into a thought-provoking question: \"{}\". Start with What, How, Why, or When.",
            current
        ),
        Enhancement::ExpandContent => format!(
            "Expand this content with more details and examples: \"{}\". Add depth and practical insights.",
            current
        ),
        Enhancement::AddExamples => format!(
            "Add concrete examples and case studies to this content: \"{}\". Make it more practical and relatable.",
            current
        ),
        Enhancement::SuggestConnections => format!(
            "Suggest how this knowledge connects to other fields and concepts: \"{}\". Highlight interdisciplinary relationships.",
            current
        ),
    }
}
