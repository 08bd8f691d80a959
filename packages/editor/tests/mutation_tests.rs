//! Comprehensive mutation tests

use curriculum_editor::{
    DocumentField, EditorOptions, LessonField, Mutation, MutationError, MutationOutcome,
    OptionField, QuestionField, QuizField, Refusal, VideoField,
};
use curriculum_model::{AnswerOption, CurriculumDocument, Lesson, Level, Question};
use std::sync::Arc;

fn course() -> CurriculumDocument {
    let mut doc = CurriculumDocument::new("Tennis 101", "Fundamentals", Level::Beginner);
    for n in 1..=3 {
        let mut lesson = Lesson::placeholder(n, "Bài {n}");
        lesson.quiz.questions.push(Arc::new(Question::new(
            format!("Lesson {} question", n),
            vec![
                AnswerOption::new("A", true),
                AnswerOption::new("B", false),
                AnswerOption::new("C", false),
            ],
        )));
        doc.lessons.push(Arc::new(lesson));
    }
    doc
}

fn applied(doc: &CurriculumDocument, mutation: Mutation) -> CurriculumDocument {
    match mutation.apply(doc).unwrap() {
        MutationOutcome::Applied(next) => next,
        MutationOutcome::Refused(reason) => panic!("unexpected refusal: {}", reason),
    }
}

#[test]
fn test_update_document_fields() {
    let doc = course();
    let next = applied(
        &doc,
        Mutation::UpdateDocument {
            field: DocumentField::Level(Level::Advanced),
        },
    );

    assert_eq!(next.level, Level::Advanced);
    assert_eq!(next.name, doc.name);
    for (before, after) in doc.lessons.iter().zip(&next.lessons) {
        assert!(Arc::ptr_eq(before, after));
    }
}

#[test]
fn test_update_lesson_copies_only_that_lesson() {
    let doc = course();
    let next = applied(
        &doc,
        Mutation::UpdateLesson {
            lesson_index: 1,
            field: LessonField::Name("Serve".to_string()),
        },
    );

    assert_eq!(next.lessons[1].name, "Serve");
    assert_eq!(doc.lessons[1].name, "Bài 2");
    assert!(Arc::ptr_eq(&doc.lessons[0], &next.lessons[0]));
    assert!(!Arc::ptr_eq(&doc.lessons[1], &next.lessons[1]));
    assert!(Arc::ptr_eq(&doc.lessons[2], &next.lessons[2]));

    // The untouched quiz question is still shared with the old lesson
    assert!(Arc::ptr_eq(
        &doc.lessons[1].quiz.questions[0],
        &next.lessons[1].quiz.questions[0]
    ));
}

#[test]
fn test_update_video_fields() {
    let doc = course();
    let next = applied(
        &doc,
        Mutation::UpdateVideo {
            lesson_index: 0,
            field: VideoField::Tags(vec!["serve".to_string(), "toss".to_string()]),
        },
    );
    let next = applied(
        &next,
        Mutation::UpdateVideo {
            lesson_index: 0,
            field: VideoField::DrillPracticeSets(Some("3 x 15".to_string())),
        },
    );

    let video = &next.lessons[0].video;
    assert_eq!(video.tags, vec!["serve", "toss"]);
    assert_eq!(video.drill_practice_sets.as_deref(), Some("3 x 15"));
    assert_eq!(video.drill_name, None);
}

#[test]
fn test_update_quiz_title() {
    let doc = course();
    let next = applied(
        &doc,
        Mutation::UpdateQuiz {
            lesson_index: 2,
            field: QuizField::Title("Volley check".to_string()),
        },
    );
    assert_eq!(next.lessons[2].quiz.title, "Volley check");
    assert_eq!(next.lessons[2].quiz.questions.len(), 1);
}

#[test]
fn test_add_lesson_appends_placeholder() {
    let doc = course();
    let next = applied(&doc, Mutation::AddLesson);

    let added = next.lessons.last().unwrap();
    assert_eq!(added.lesson_number, 4);
    assert_eq!(added.name, "Bài 4");
    assert!(added.quiz.questions.is_empty());
    assert!(added.video.title.is_empty());
}

#[test]
fn test_remove_middle_lesson_renumbers() {
    let doc = course();
    let next = applied(&doc, Mutation::RemoveLesson { lesson_index: 1 });

    let names: Vec<&str> = next.lessons.iter().map(|l| l.name.as_str()).collect();
    let numbers: Vec<u32> = next.lessons.iter().map(|l| l.lesson_number).collect();

    assert_eq!(names, vec!["Bài 1", "Bài 3"]);
    assert_eq!(numbers, vec![1, 2]);
    assert!(next.is_densely_numbered());
}

#[test]
fn test_add_and_remove_question() {
    let doc = course();
    let next = applied(&doc, Mutation::AddQuestion { lesson_index: 0 });

    let added = next.question(0, 1).unwrap();
    assert!(added.title.is_empty());
    assert_eq!(added.explanation, None);
    assert_eq!(added.options, vec![AnswerOption::blank(), AnswerOption::blank()]);

    let next = applied(
        &next,
        Mutation::RemoveQuestion {
            lesson_index: 0,
            question_index: 0,
        },
    );
    assert_eq!(next.lessons[0].quiz.questions.len(), 1);
    assert!(next.question(0, 0).unwrap().title.is_empty());
}

#[test]
fn test_update_question_fields() {
    let doc = course();
    let next = applied(
        &doc,
        Mutation::UpdateQuestion {
            lesson_index: 0,
            question_index: 0,
            field: QuestionField::Explanation(Some("Because".to_string())),
        },
    );

    let question = next.question(0, 0).unwrap();
    assert_eq!(question.explanation.as_deref(), Some("Because"));
    assert_eq!(question.title, "Lesson 1 question");
    assert_eq!(question.options.len(), 3);
}

#[test]
fn test_add_option() {
    let doc = course();
    let next = applied(
        &doc,
        Mutation::AddOption {
            lesson_index: 2,
            question_index: 0,
        },
    );

    let options = &next.question(2, 0).unwrap().options;
    assert_eq!(options.len(), 4);
    assert_eq!(options[3], AnswerOption::blank());
}

#[test]
fn test_remove_option_keeps_order() {
    let doc = course();
    let next = applied(
        &doc,
        Mutation::RemoveOption {
            lesson_index: 0,
            question_index: 0,
            option_index: 1,
        },
    );

    let contents: Vec<&str> = next
        .question(0, 0)
        .unwrap()
        .options
        .iter()
        .map(|o| o.content.as_str())
        .collect();
    assert_eq!(contents, vec!["A", "C"]);
}

#[test]
fn test_remove_last_option_is_refused() {
    let mut doc = course();
    for _ in 0..2 {
        doc = applied(
            &doc,
            Mutation::RemoveOption {
                lesson_index: 0,
                question_index: 0,
                option_index: 0,
            },
        );
    }
    assert_eq!(doc.question(0, 0).unwrap().options.len(), 1);

    let outcome = Mutation::RemoveOption {
        lesson_index: 0,
        question_index: 0,
        option_index: 0,
    }
    .apply(&doc)
    .unwrap();

    assert_eq!(
        outcome,
        MutationOutcome::Refused(Refusal::LastOption {
            lesson_index: 0,
            question_index: 0
        })
    );
}

#[test]
fn test_setting_correct_clears_siblings() {
    let doc = course();
    let next = applied(
        &doc,
        Mutation::UpdateOption {
            lesson_index: 0,
            question_index: 0,
            option_index: 2,
            field: OptionField::IsCorrect(true),
        },
    );

    let flags: Vec<bool> = next
        .question(0, 0)
        .unwrap()
        .options
        .iter()
        .map(|o| o.is_correct)
        .collect();
    assert_eq!(flags, vec![false, false, true]);
}

#[test]
fn test_clearing_correct_leaves_siblings() {
    let doc = course();
    let next = applied(
        &doc,
        Mutation::UpdateOption {
            lesson_index: 0,
            question_index: 0,
            option_index: 0,
            field: OptionField::IsCorrect(false),
        },
    );
    assert_eq!(next.question(0, 0).unwrap().correct_count(), 0);
}

#[test]
fn test_option_content_does_not_touch_flags() {
    let doc = course();
    let next = applied(
        &doc,
        Mutation::UpdateOption {
            lesson_index: 1,
            question_index: 0,
            option_index: 1,
            field: OptionField::Content("Backhand".to_string()),
        },
    );

    let options = &next.question(1, 0).unwrap().options;
    assert_eq!(options[1].content, "Backhand");
    assert!(options[0].is_correct);
    assert!(!options[1].is_correct);
}

#[test]
fn test_out_of_range_leaves_document_alone() {
    let doc = course();
    let err = Mutation::UpdateQuestion {
        lesson_index: 0,
        question_index: 5,
        field: QuestionField::Title("x".to_string()),
    }
    .apply(&doc)
    .unwrap_err();

    assert_eq!(
        err,
        MutationError::QuestionOutOfRange {
            lesson_index: 0,
            index: 5,
            count: 1
        }
    );
    assert_eq!(doc, course());
}

#[test]
fn test_add_lesson_with_custom_template() {
    let options = EditorOptions {
        lesson_name_template: "Lesson {n}".to_string(),
    };
    let next = Mutation::AddLesson
        .apply_with(&options, &course())
        .unwrap()
        .into_document()
        .unwrap();

    assert_eq!(next.lessons[3].name, "Lesson 4");
    assert_eq!(next.lessons[3].lesson_number, 4);
}
