use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub mod movie_library;

pub use movie_library::MovieLibrary;

/// A movie booked into the program, identified by a store-issued id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub duration_minutes: u32,
    pub genre: String,
    pub rating: MovieRating,
    pub poster_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovieRating {
    G,
    PG,
    #[serde(rename = "PG-13")]
    PG13,
    R,
    #[serde(rename = "NC-17")]
    NC17,
}

impl std::fmt::Display for MovieRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovieRating::G => write!(f, "G"),
            MovieRating::PG => write!(f, "PG"),
            MovieRating::PG13 => write!(f, "PG-13"),
            MovieRating::R => write!(f, "R"),
            MovieRating::NC17 => write!(f, "NC-17"),
        }
    }
}

/// Master data for a title, before it is booked into a venue's program.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MovieProfile {
    pub slug: String,
    pub title: String,
    pub duration_minutes: u32,
    pub genre: String,
    pub rating: MovieRating,
    pub poster_url: String,
}

impl std::fmt::Display for MovieProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} min, {})", self.title, self.duration_minutes, self.rating)
    }
}

impl Movie {
    pub fn new(id: u64, profile: &MovieProfile) -> Self {
        Movie {
            id,
            title: profile.title.clone(),
            duration_minutes: profile.duration_minutes,
            genre: profile.genre.clone(),
            rating: profile.rating,
            poster_url: profile.poster_url.clone(),
        }
    }
}

/// Movies currently in the program, keyed by id.
pub type MovieIndex = HashMap<u64, Movie>;
