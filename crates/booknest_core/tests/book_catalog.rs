use booknest_core::{
    BookPatch, BookStore, LikeAdd, MemoryCatalog, NewBook, NewQuestion, NewReview,
    QuestionStore, ReviewStore, ShelfAdd, ShelfStore,
};

fn new_book(title: &str, author: &str, category: &str) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: author.to_string(),
        category: category.to_string(),
        description: None,
        cover_url: None,
        published_year: None,
    }
}

#[test]
fn create_book_starts_with_zeroed_aggregates() {
    let mut catalog = MemoryCatalog::new();

    let book = catalog.create_book(new_book("Dune", "Frank Herbert", "Sci-Fi"));

    assert_eq!(book.id, 1);
    assert_eq!(book.average_rating, 0);
    assert_eq!(book.total_reviews, 0);
}

#[test]
fn book_ids_are_not_reused_after_deletion() {
    let mut catalog = MemoryCatalog::new();

    let first = catalog.create_book(new_book("One", "A", "X"));
    assert!(catalog.delete_book(first.id));
    let second = catalog.create_book(new_book("Two", "B", "X"));

    assert!(second.id > first.id);
}

#[test]
fn update_book_merges_fields_and_keeps_aggregates() {
    let mut catalog = MemoryCatalog::new();
    let book = catalog.create_book(new_book("Draft", "A", "X"));

    let updated = catalog
        .update_book(
            book.id,
            BookPatch {
                title: Some("Final".to_string()),
                description: Some("Now with a blurb.".to_string()),
                ..BookPatch::default()
            },
        )
        .expect("existing book should update");

    assert_eq!(updated.title, "Final");
    assert_eq!(updated.author, "A");
    assert_eq!(updated.description.as_deref(), Some("Now with a blurb."));
    assert_eq!(updated.total_reviews, 0);
}

#[test]
fn delete_missing_book_returns_false() {
    let mut catalog = MemoryCatalog::new();
    assert!(!catalog.delete_book(42));
}

#[test]
fn delete_book_cascades_to_all_dependent_records() {
    let mut catalog = MemoryCatalog::new();
    let doomed = catalog.create_book(new_book("Doomed", "A", "X"));
    let kept = catalog.create_book(new_book("Kept", "B", "X"));

    catalog.create_question(NewQuestion {
        book_id: doomed.id,
        question: "Who dies first?".to_string(),
        answer: "Nobody".to_string(),
    });
    catalog.create_review(NewReview {
        book_id: doomed.id,
        user_id: 1,
        rating: 5,
        text: "great".to_string(),
    });
    let kept_review = catalog.create_review(NewReview {
        book_id: kept.id,
        user_id: 1,
        rating: 4,
        text: "fine".to_string(),
    });
    catalog.add_to_reading_list(ShelfAdd {
        user_id: 1,
        book_id: doomed.id,
        progress: None,
    });
    catalog.like_book(LikeAdd {
        user_id: 1,
        book_id: doomed.id,
    });

    assert!(catalog.delete_book(doomed.id));

    assert!(catalog.get_book(doomed.id).is_none());
    assert!(catalog.list_questions_for_book(doomed.id).is_empty());
    assert!(catalog.list_reviews_for_book(doomed.id).is_empty());
    assert!(catalog.reading_list(1).unwrap().is_empty());
    assert!(catalog.liked_books(1).unwrap().is_empty());

    // Unrelated records survive the cascade.
    assert!(catalog.get_book(kept.id).is_some());
    assert!(catalog.get_review(kept_review.id).is_some());
}

#[test]
fn list_books_by_category_matches_exactly_and_case_insensitively() {
    let mut catalog = MemoryCatalog::new();
    catalog.create_book(new_book("Dune", "Frank Herbert", "Sci-Fi"));
    catalog.create_book(new_book("Emma", "Jane Austen", "Classic"));

    let hits = catalog.list_books_by_category("sci-fi");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Dune");

    // Substring category values must not match.
    assert!(catalog.list_books_by_category("sci").is_empty());
}

#[test]
fn search_books_matches_author_only_substring() {
    let mut catalog = MemoryCatalog::new();
    catalog.create_book(NewBook {
        description: Some("A hobbit goes on an adventure.".to_string()),
        ..new_book("The Hobbit", "J.R.R. Tolkien", "Fantasy")
    });
    catalog.create_book(new_book("Emma", "Jane Austen", "Classic"));

    let by_author = catalog.search_books("tolkien");
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].title, "The Hobbit");

    let by_description = catalog.search_books("ADVENTURE");
    assert_eq!(by_description.len(), 1);

    assert!(catalog.search_books("dickens").is_empty());
}
