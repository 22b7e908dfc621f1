//! Page tests for the list, add, edit, and delete routes.

mod common;

use axum::http::StatusCode;
use common::{fixtures, TestFixture};
use marquee_core::{CatalogError, MovieStore};

// ============================================================================
// List view
// ============================================================================

#[tokio::test]
async fn test_home_empty_list() {
    let fixture = TestFixture::new();

    let response = fixture.get("/").await;
    assert_status!(response, StatusCode::OK);
    assert!(response.body.contains("No movies yet"));
}

#[tokio::test]
async fn test_home_lists_movies_in_ranking_order() {
    let fixture = TestFixture::new();
    fixture.store.insert(&fixtures::new_movie("Alien", 3)).unwrap();
    fixture.store.insert(&fixtures::new_movie("Blade Runner", 1)).unwrap();
    fixture.store.insert(&fixtures::new_movie("Casablanca", 2)).unwrap();

    let response = fixture.get("/").await;
    assert_status!(response, StatusCode::OK);

    let blade = response.body.find("Blade Runner").unwrap();
    let casablanca = response.body.find("Casablanca").unwrap();
    let alien = response.body.find("Alien").unwrap();
    assert!(blade < casablanca && casablanca < alien);
}

#[tokio::test]
async fn test_home_reflects_out_of_band_writes() {
    let fixture = TestFixture::new();

    // Write directly to the store; the list view refreshes the snapshot
    // on every read, so the new row is visible immediately.
    fixture.store.insert(&fixtures::new_movie("Alien", 1)).unwrap();

    let response = fixture.get("/").await;
    assert!(response.body.contains("Alien"));
}

// ============================================================================
// Add
// ============================================================================

fn add_fields<'a>(token: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("title", "Phone Booth"),
        ("year", "2002"),
        ("description", "Trapped in a phone booth."),
        ("rating", "7.3"),
        ("ranking", "10"),
        ("review", "Tense."),
        ("img_url", "https://image.tmdb.org/t/p/w500/booth.jpg"),
        ("token", token),
    ]
}

#[tokio::test]
async fn test_add_form_renders() {
    let fixture = TestFixture::new();

    let response = fixture.get("/add").await;
    assert_status!(response, StatusCode::OK);
    assert!(response.body.contains("Add Movie"));
    assert!(response.body.contains(fixture.token()));
}

#[tokio::test]
async fn test_add_submit_inserts_and_renders_list() {
    let fixture = TestFixture::new();
    let token = fixture.token().to_string();

    let response = fixture.post_form("/add", &add_fields(&token)).await;
    assert_status!(response, StatusCode::OK);
    assert!(response.body.contains("Phone Booth"));

    let movies = fixture.store.list_all().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Phone Booth");
    assert_eq!(movies[0].rating, Some(7.3));
}

#[tokio::test]
async fn test_add_rejects_rating_over_ten_without_mutation() {
    let fixture = TestFixture::new();
    let token = fixture.token().to_string();
    let mut fields = add_fields(&token);
    fields[3] = ("rating", "11");

    let response = fixture.post_form("/add", &fields).await;
    assert_status!(response, StatusCode::OK);
    assert!(response.body.contains("Rating must be between 0 and 10"));

    assert!(fixture.store.list_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_rejects_year_before_1900_without_mutation() {
    let fixture = TestFixture::new();
    let token = fixture.token().to_string();
    let mut fields = add_fields(&token);
    fields[1] = ("year", "1800");

    let response = fixture.post_form("/add", &fields).await;
    assert_status!(response, StatusCode::OK);
    assert!(response.body.contains("Year must be 1900 or later"));

    assert!(fixture.store.list_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_rejects_bad_poster_url() {
    let fixture = TestFixture::new();
    let token = fixture.token().to_string();
    let mut fields = add_fields(&token);
    fields[6] = ("img_url", "not a url");

    let response = fixture.post_form("/add", &fields).await;
    assert_status!(response, StatusCode::OK);
    assert!(response.body.contains("Must be a valid URL"));
}

#[tokio::test]
async fn test_add_re_renders_form_with_entered_values() {
    let fixture = TestFixture::new();
    let token = fixture.token().to_string();
    let mut fields = add_fields(&token);
    fields[3] = ("rating", "11");

    let response = fixture.post_form("/add", &fields).await;
    // The rejected form keeps what the user typed.
    assert!(response.body.contains("Phone Booth"));
    assert!(response.body.contains("Trapped in a phone booth."));
}

#[tokio::test]
async fn test_add_duplicate_title_is_conflict_page() {
    let fixture = TestFixture::new();
    fixture
        .store
        .insert(&fixtures::new_movie("Phone Booth", 1))
        .unwrap();
    let token = fixture.token().to_string();

    let response = fixture.post_form("/add", &add_fields(&token)).await;
    assert_status!(response, StatusCode::CONFLICT);
    assert!(response.body.contains("already in your list"));
}

#[tokio::test]
async fn test_add_with_bad_token_is_rejected() {
    let fixture = TestFixture::new();

    let response = fixture.post_form("/add", &add_fields("wrong-token")).await;
    assert_status!(response, StatusCode::BAD_REQUEST);
    assert!(fixture.store.list_all().unwrap().is_empty());
}

// ============================================================================
// Edit
// ============================================================================

#[tokio::test]
async fn test_edit_form_is_prefilled() {
    let fixture = TestFixture::new();
    let movie = fixture.store.insert(&fixtures::new_movie("Alien", 1)).unwrap();

    let response = fixture.get(&format!("/edit/{}", movie.id)).await;
    assert_status!(response, StatusCode::OK);
    assert!(response.body.contains("Alien"));
    assert!(response.body.contains("Seen it twice."));
}

#[tokio::test]
async fn test_edit_form_missing_id_is_404_page() {
    let fixture = TestFixture::new();

    let response = fixture.get("/edit/999").await;
    assert_status!(response, StatusCode::NOT_FOUND);
    assert!(response.body.contains("No movie with id 999"));
}

#[tokio::test]
async fn test_edit_submit_overwrites_all_fields() {
    let fixture = TestFixture::new();
    let movie = fixture.store.insert(&fixtures::new_movie("Alien", 5)).unwrap();
    let token = fixture.token().to_string();

    let response = fixture
        .post_form(
            &format!("/edit/{}", movie.id),
            &[
                ("title", "Alien"),
                ("year", "1979"),
                ("description", "In space no one can hear you scream."),
                ("rating", "9.5"),
                ("ranking", "1"),
                ("review", "A classic."),
                ("img_url", "https://image.tmdb.org/t/p/w500/alien.jpg"),
                ("token", &token),
            ],
        )
        .await;
    assert_status!(response, StatusCode::OK);

    let updated = fixture.store.get(movie.id).unwrap();
    assert_eq!(updated.year, 1979);
    assert_eq!(updated.rating, Some(9.5));
    assert_eq!(updated.ranking, Some(1));
    assert_eq!(updated.review.as_deref(), Some("A classic."));
    assert_eq!(
        updated.description,
        "In space no one can hear you scream."
    );
}

#[tokio::test]
async fn test_edit_submit_missing_id_is_404_page() {
    let fixture = TestFixture::new();
    let token = fixture.token().to_string();

    let response = fixture
        .post_form(
            "/edit/999",
            &[
                ("title", "Ghost"),
                ("year", "1990"),
                ("description", "Not here."),
                ("img_url", "https://example.com/p.jpg"),
                ("token", &token),
            ],
        )
        .await;
    assert_status!(response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_allows_rating_outside_add_range() {
    let fixture = TestFixture::new();
    let movie = fixture.store.insert(&fixtures::new_movie("Alien", 1)).unwrap();
    let token = fixture.token().to_string();

    // The [0,10] check applies to the add form only.
    let response = fixture
        .post_form(
            &format!("/edit/{}", movie.id),
            &[
                ("title", "Alien"),
                ("year", "1979"),
                ("description", "Scream."),
                ("rating", "11"),
                ("img_url", "https://example.com/p.jpg"),
                ("token", &token),
            ],
        )
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(fixture.store.get(movie.id).unwrap().rating, Some(11.0));
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_removes_movie_and_renders_list() {
    let fixture = TestFixture::new();
    let movie = fixture.store.insert(&fixtures::new_movie("Alien", 1)).unwrap();

    let response = fixture.get(&format!("/delete/{}", movie.id)).await;
    assert_status!(response, StatusCode::OK);
    assert!(!response.body.contains("Alien"));

    let result = fixture.store.get(movie.id);
    assert!(matches!(result, Err(CatalogError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_missing_id_is_404_page() {
    let fixture = TestFixture::new();

    let response = fixture.get("/delete/999").await;
    assert_status!(response, StatusCode::NOT_FOUND);
}
