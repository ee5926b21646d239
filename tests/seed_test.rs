mod helpers;

use aidex::db::seed::{seed_database, SeedMode, DEFAULT_CATEGORIES, DEFAULT_TAGS};

#[test]
fn fresh_database_seeds_expected_counts() {
    let conn = helpers::seeded_db(SeedMode::Standard);

    assert_eq!(helpers::count(&conn, "categories"), 7);
    assert_eq!(helpers::count(&conn, "tags"), 9);
    assert_eq!(helpers::count(&conn, "websites"), 0);
}

#[test]
fn development_seed_inserts_sample_websites() {
    let conn = helpers::seeded_db(SeedMode::Development);

    assert_eq!(helpers::count(&conn, "categories"), 7);
    assert_eq!(helpers::count(&conn, "tags"), 9);
    assert_eq!(helpers::count(&conn, "websites"), 12);
}

#[test]
fn seeded_names_and_ordering_are_stable() {
    let conn = helpers::seeded_db(SeedMode::Standard);

    let names: Vec<String> = conn
        .prepare("SELECT name FROM categories ORDER BY id")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let expected: Vec<String> = DEFAULT_CATEGORIES
        .iter()
        .map(|(name, _)| name.to_string())
        .collect();
    assert_eq!(names, expected);

    let tag_names: Vec<String> = conn
        .prepare("SELECT name FROM tags ORDER BY id")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let expected_tags: Vec<String> = DEFAULT_TAGS.iter().map(|n| n.to_string()).collect();
    assert_eq!(tag_names, expected_tags);
}

#[test]
fn reseeding_after_one_insert_does_not_duplicate() {
    let conn = helpers::seeded_db(SeedMode::Standard);

    conn.execute(
        "INSERT INTO categories (name, icon_name) VALUES ('自定义', 'star')",
        [],
    )
    .unwrap();
    seed_database(&conn, SeedMode::Standard).unwrap();

    // seeded defaults plus the one inserted, nothing more
    assert_eq!(helpers::count(&conn, "categories"), 8);
}

#[test]
fn sample_website_references_stay_within_seeded_ranges() {
    let conn = helpers::seeded_db(SeedMode::Development);

    let rows: Vec<(String, String)> = conn
        .prepare("SELECT category_ids, tag_ids FROM websites")
        .unwrap()
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(rows.len(), 12);

    for (category_ids, tag_ids) in rows {
        let categories: Vec<i64> = serde_json::from_str(&category_ids).unwrap();
        let tags: Vec<i64> = serde_json::from_str(&tag_ids).unwrap();
        assert!(!categories.is_empty());
        assert!(categories.iter().all(|id| (1..=7).contains(id)));
        assert!(tags.iter().all(|id| (1..=9).contains(id)));
    }
}

#[test]
fn total_deletion_reseeds_on_next_run() {
    let conn = helpers::seeded_db(SeedMode::Standard);
    conn.execute("DELETE FROM categories", []).unwrap();

    // count-based check: a coincidental zero count reseeds
    seed_database(&conn, SeedMode::Standard).unwrap();
    assert_eq!(helpers::count(&conn, "categories"), 7);
}

#[test]
fn seeding_skips_nonempty_collections_independently() {
    let conn = helpers::test_db();
    conn.execute("INSERT INTO tags (name, count) VALUES ('自定义', 0)", [])
        .unwrap();

    seed_database(&conn, SeedMode::Standard).unwrap();

    // tags untouched, categories still seeded
    assert_eq!(helpers::count(&conn, "tags"), 1);
    assert_eq!(helpers::count(&conn, "categories"), 7);
}

#[test]
fn sample_icons_are_empty_buffers() {
    let conn = helpers::seeded_db(SeedMode::Development);

    let max_len: i64 = conn
        .query_row("SELECT MAX(LENGTH(icon)) FROM websites", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(max_len, 0);
}
