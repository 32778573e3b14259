use booknest_core::{
    BookStore, MemoryCatalog, NewBook, NewQuestion, QuestionPatch, QuestionStore,
};

fn seeded_book(catalog: &mut MemoryCatalog) -> u64 {
    catalog
        .create_book(NewBook {
            title: "Quizzable".to_string(),
            author: "A".to_string(),
            category: "X".to_string(),
            description: None,
            cover_url: None,
            published_year: None,
        })
        .id
}

#[test]
fn create_and_list_questions_for_one_book() {
    let mut catalog = MemoryCatalog::new();
    let book_id = seeded_book(&mut catalog);
    let other_id = seeded_book(&mut catalog);

    let created = catalog.create_question(NewQuestion {
        book_id,
        question: "What color is the cover?".to_string(),
        answer: "Blue".to_string(),
    });
    catalog.create_question(NewQuestion {
        book_id: other_id,
        question: "Unrelated?".to_string(),
        answer: "Yes".to_string(),
    });

    assert_eq!(created.id, 1);
    let listed = catalog.list_questions_for_book(book_id);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].question, "What color is the cover?");
}

#[test]
fn update_question_merges_only_patched_fields() {
    let mut catalog = MemoryCatalog::new();
    let book_id = seeded_book(&mut catalog);
    let created = catalog.create_question(NewQuestion {
        book_id,
        question: "Draft?".to_string(),
        answer: "Old".to_string(),
    });

    let updated = catalog
        .update_question(
            created.id,
            QuestionPatch {
                answer: Some("New".to_string()),
                ..QuestionPatch::default()
            },
        )
        .expect("existing question should update");

    assert_eq!(updated.question, "Draft?");
    assert_eq!(updated.answer, "New");
    assert_eq!(updated.book_id, book_id);
}

#[test]
fn update_missing_question_returns_none() {
    let mut catalog = MemoryCatalog::new();
    assert!(catalog
        .update_question(404, QuestionPatch::default())
        .is_none());
}

#[test]
fn delete_question_reports_whether_it_existed() {
    let mut catalog = MemoryCatalog::new();
    let book_id = seeded_book(&mut catalog);
    let created = catalog.create_question(NewQuestion {
        book_id,
        question: "Q".to_string(),
        answer: "A".to_string(),
    });

    assert!(catalog.delete_question(created.id));
    assert!(!catalog.delete_question(created.id));
    assert!(catalog.list_questions_for_book(book_id).is_empty());
}
