//! Form structs and their validation.
//!
//! Each form is an explicit mapping struct: fields arrive as strings
//! from the browser, and `validate` either produces the typed store
//! shape or a map of per-field error messages. A failing form never
//! reaches the store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use marquee_core::NewMovie;

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

// ============================================================================
// Add form
// ============================================================================

/// The manual-add form. Every field is required here, and rating and
/// year carry range checks that the edit form does not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub ranking: String,
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub token: String,
}

impl AddForm {
    pub fn validate(&self) -> Result<NewMovie, FieldErrors> {
        let mut errors = FieldErrors::new();

        require(&mut errors, "title", &self.title);
        require(&mut errors, "description", &self.description);
        require(&mut errors, "review", &self.review);

        let year = parse_year(&mut errors, &self.year);
        if let Some(y) = year {
            if y < 1900 {
                errors.insert("year", "Year must be 1900 or later".to_string());
            }
        }

        let rating = parse_rating(&mut errors, &self.rating, true);
        if let Some(r) = rating {
            if !(0.0..=10.0).contains(&r) {
                errors.insert("rating", "Rating must be between 0 and 10".to_string());
            }
        }

        let ranking = parse_ranking(&mut errors, &self.ranking, true);

        check_url(&mut errors, &self.img_url);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewMovie {
            title: self.title.trim().to_string(),
            year: year.unwrap(),
            description: self.description.trim().to_string(),
            rating,
            ranking,
            review: Some(self.review.trim().to_string()),
            img_url: self.img_url.trim().to_string(),
        })
    }
}

// ============================================================================
// Edit form
// ============================================================================

/// The edit form. Identity fields travel as hidden inputs; rating,
/// ranking, and review are the editable ones and are optional. Range
/// checks are deliberately absent here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub ranking: String,
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub token: String,
}

impl EditForm {
    /// Pre-fill from an existing record.
    pub fn from_movie(movie: &marquee_core::Movie) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.year.to_string(),
            description: movie.description.clone(),
            rating: movie.rating.map(|r| r.to_string()).unwrap_or_default(),
            ranking: movie.ranking.map(|r| r.to_string()).unwrap_or_default(),
            review: movie.review.clone().unwrap_or_default(),
            img_url: movie.img_url.clone(),
            token: String::new(),
        }
    }

    pub fn validate(&self) -> Result<NewMovie, FieldErrors> {
        let mut errors = FieldErrors::new();

        require(&mut errors, "title", &self.title);
        require(&mut errors, "description", &self.description);

        let year = parse_year(&mut errors, &self.year);
        let rating = parse_rating(&mut errors, &self.rating, false);
        let ranking = parse_ranking(&mut errors, &self.ranking, false);

        check_url(&mut errors, &self.img_url);

        if !errors.is_empty() {
            return Err(errors);
        }

        let review = self.review.trim();
        Ok(NewMovie {
            title: self.title.trim().to_string(),
            year: year.unwrap(),
            description: self.description.trim().to_string(),
            rating,
            ranking,
            review: if review.is_empty() {
                None
            } else {
                Some(review.to_string())
            },
            img_url: self.img_url.trim().to_string(),
        })
    }
}

// ============================================================================
// Search form
// ============================================================================

/// The TMDB search form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub token: String,
}

impl SearchForm {
    pub fn validate(&self) -> Result<String, FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "title", &self.title);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(self.title.trim().to_string())
    }
}

// ============================================================================
// Field helpers
// ============================================================================

fn require(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, "This field is required".to_string());
    }
}

fn parse_year(errors: &mut FieldErrors, value: &str) -> Option<i32> {
    let value = value.trim();
    if value.is_empty() {
        errors.insert("year", "This field is required".to_string());
        return None;
    }
    match value.parse() {
        Ok(y) => Some(y),
        Err(_) => {
            errors.insert("year", "Year must be a whole number".to_string());
            None
        }
    }
}

fn parse_rating(errors: &mut FieldErrors, value: &str, required: bool) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        if required {
            errors.insert("rating", "This field is required".to_string());
        }
        return None;
    }
    match value.parse() {
        Ok(r) => Some(r),
        Err(_) => {
            errors.insert("rating", "Rating must be a number".to_string());
            None
        }
    }
}

fn parse_ranking(errors: &mut FieldErrors, value: &str, required: bool) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        if required {
            errors.insert("ranking", "This field is required".to_string());
        }
        return None;
    }
    match value.parse() {
        Ok(r) => Some(r),
        Err(_) => {
            errors.insert("ranking", "Ranking must be a whole number".to_string());
            None
        }
    }
}

fn check_url(errors: &mut FieldErrors, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        errors.insert("img_url", "This field is required".to_string());
        return;
    }
    if Url::parse(value).is_err() {
        errors.insert("img_url", "Must be a valid URL".to_string());
    }
}
