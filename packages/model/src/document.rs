use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Template used for the name of a freshly added lesson
pub const DEFAULT_LESSON_NAME_TEMPLATE: &str = "Bài {n}";

/// Difficulty level of a course
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// Root document: one AI-generated course outline under review
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub lessons: Vec<Arc<Lesson>>,
}

/// A single lesson: one video and one quiz
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// 1-based position in the document
    #[serde(default)]
    pub lesson_number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub video: VideoSpec,
    #[serde(default)]
    pub quiz: QuizSpec,
}

/// Descriptive record for the lesson video and its practice drill
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drill_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drill_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drill_practice_sets: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Arc<Question>>,
}

/// Multiple-choice question
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
}

/// Answer option of a question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_correct: bool,
}

impl AnswerOption {
    pub fn new(content: impl Into<String>, is_correct: bool) -> Self {
        Self {
            content: content.into(),
            is_correct,
        }
    }

    /// Empty, non-correct option
    pub fn blank() -> Self {
        Self::default()
    }

    /// Whether the option has non-whitespace content
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

impl Question {
    pub fn new(title: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            title: title.into(),
            explanation: None,
            options,
        }
    }

    /// Question added from the editor: empty title and two empty options
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            explanation: None,
            options: vec![AnswerOption::blank(), AnswerOption::blank()],
        }
    }

    /// Options with non-blank content
    pub fn valid_options(&self) -> impl Iterator<Item = &AnswerOption> {
        self.options.iter().filter(|o| o.has_content())
    }

    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|o| o.is_correct).count()
    }
}

impl Lesson {
    /// Empty lesson named from `template`, where `{n}` is the lesson number
    pub fn placeholder(lesson_number: u32, template: &str) -> Self {
        Self {
            lesson_number,
            name: template.replace("{n}", &lesson_number.to_string()),
            ..Self::default()
        }
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.quiz.questions.get(index).map(Arc::as_ref)
    }
}

impl CurriculumDocument {
    pub fn new(name: impl Into<String>, description: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            level,
            lessons: Vec::new(),
        }
    }

    pub fn lesson(&self, index: usize) -> Option<&Lesson> {
        self.lessons.get(index).map(Arc::as_ref)
    }

    pub fn question(&self, lesson_index: usize, question_index: usize) -> Option<&Question> {
        self.lesson(lesson_index)?.question(question_index)
    }

    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    /// Total number of questions across all lessons
    pub fn question_count(&self) -> usize {
        self.lessons.iter().map(|l| l.quiz.questions.len()).sum()
    }

    /// True when lesson numbers are exactly 1..=n in order
    pub fn is_densely_numbered(&self) -> bool {
        self.lessons
            .iter()
            .enumerate()
            .all(|(i, lesson)| lesson.lesson_number as usize == i + 1)
    }

    /// Set every `lesson_number` to its 1-based position, copying only the
    /// lessons whose number changes
    pub fn renumber_lessons(&mut self) {
        for (position, lesson) in self.lessons.iter_mut().enumerate() {
            let number = position as u32 + 1;
            if lesson.lesson_number != number {
                Arc::make_mut(lesson).lesson_number = number;
            }
        }
    }
}
