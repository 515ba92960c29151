use std::collections::HashMap;

use crate::{MovieProfile, MovieRating};

#[derive(Default)]
pub struct MovieLibrary {
    pub profiles: HashMap<String, MovieProfile>,
}

impl MovieLibrary {
    pub fn new() -> Self {
        let mut profiles = HashMap::new();

        // Define the distributor catalog. Note in the future we'll load this from disk.
        profiles.insert(
            "spider-man-no-way-home".to_string(),
            MovieProfile {
                slug: "spider-man-no-way-home".to_string(),
                title: "Spider-Man: No Way Home".to_string(),
                duration_minutes: 148,
                genre: "Sci-Fi".to_string(),
                rating: MovieRating::PG13,
                poster_url: "/posters/spider-man-no-way-home.jpg".to_string(),
            },
        );

        profiles.insert(
            "captain-america".to_string(),
            MovieProfile {
                slug: "captain-america".to_string(),
                title: "Captain America".to_string(),
                duration_minutes: 175,
                genre: "Action".to_string(),
                rating: MovieRating::PG13,
                poster_url: "/posters/captain-america.jpg".to_string(),
            },
        );

        profiles.insert(
            "the-conjuring".to_string(),
            MovieProfile {
                slug: "the-conjuring".to_string(),
                title: "The Conjuring".to_string(),
                duration_minutes: 81,
                genre: "Horror".to_string(),
                rating: MovieRating::R,
                poster_url: "/posters/the-conjuring.jpg".to_string(),
            },
        );

        profiles.insert(
            "paddington-2".to_string(),
            MovieProfile {
                slug: "paddington-2".to_string(),
                title: "Paddington 2".to_string(),
                duration_minutes: 103,
                genre: "Family".to_string(),
                rating: MovieRating::G,
                poster_url: "/posters/paddington-2.jpg".to_string(),
            },
        );

        profiles.insert(
            "dune-part-two".to_string(),
            MovieProfile {
                slug: "dune-part-two".to_string(),
                title: "Dune: Part Two".to_string(),
                duration_minutes: 166,
                genre: "Sci-Fi".to_string(),
                rating: MovieRating::PG13,
                poster_url: "/posters/dune-part-two.jpg".to_string(),
            },
        );

        MovieLibrary { profiles }
    }

    pub fn get(&self, slug: &str) -> Option<&MovieProfile> {
        self.profiles.get(slug)
    }

    pub fn slugs(&self) -> Vec<&str> {
        let mut slugs: Vec<&str> = self.profiles.keys().map(|s| s.as_str()).collect();
        slugs.sort();
        slugs
    }
}
