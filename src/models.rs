use crate::entities::movie;

#[derive(Clone, Debug, PartialEq)]
pub struct RankedMovie {
    pub rank: u32,
    pub movie: movie::Model,
}

// Input comes already ordered (rating descending, unrated last); ranks
// are the 1-based positions in that order.
pub fn rank_by_rating(movies: Vec<movie::Model>) -> Vec<RankedMovie> {
    movies
        .into_iter()
        .zip(1u32..)
        .map(|(movie, rank)| RankedMovie { rank, movie })
        .collect()
}
