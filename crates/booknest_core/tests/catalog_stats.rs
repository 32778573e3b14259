use booknest_core::{
    BookStore, MemoryCatalog, NewBook, NewReview, NewUser, ReviewStore, StatsStore, UserStore,
};

fn new_user(email: &str, is_active: Option<bool>) -> NewUser {
    NewUser {
        name: email.to_string(),
        email: email.to_string(),
        password: "pw".to_string(),
        is_admin: false,
        is_active,
    }
}

fn new_book(title: &str) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: "A".to_string(),
        category: "X".to_string(),
        description: None,
        cover_url: None,
        published_year: None,
    }
}

#[test]
fn fresh_catalog_stats_count_only_seeded_admin() {
    let catalog = MemoryCatalog::new();

    let stats = catalog.stats();
    assert_eq!(stats.total_users, 1);
    assert_eq!(stats.active_users, 1);
    assert_eq!(stats.total_books, 0);
    assert_eq!(stats.total_reviews, 0);
}

#[test]
fn stats_reflect_live_counts_across_all_tables() {
    let mut catalog = MemoryCatalog::new();

    catalog.create_user(new_user("a@example.com", None));
    catalog.create_user(new_user("b@example.com", None));
    catalog.create_user(new_user("inactive@example.com", Some(false)));

    let first = catalog.create_book(new_book("First"));
    let second = catalog.create_book(new_book("Second"));

    for (book_id, rating) in [
        (first.id, 5),
        (first.id, 4),
        (first.id, 3),
        (second.id, 2),
        (second.id, 1),
    ] {
        catalog.create_review(NewReview {
            book_id,
            user_id: 2,
            rating,
            text: String::new(),
        });
    }

    let stats = catalog.stats();
    // Three created users plus the seeded admin; one of them inactive.
    assert_eq!(stats.total_users, 4);
    assert_eq!(stats.active_users, 3);
    assert_eq!(stats.total_books, 2);
    assert_eq!(stats.total_reviews, 5);
}

#[test]
fn stats_are_not_cached_across_mutations() {
    let mut catalog = MemoryCatalog::new();
    let book = catalog.create_book(new_book("Ephemeral"));
    assert_eq!(catalog.stats().total_books, 1);

    catalog.delete_book(book.id);
    assert_eq!(catalog.stats().total_books, 0);
}
