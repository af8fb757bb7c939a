use crate::models::{Answer, AxisScores, Effect, GenreScores};

/// Tallies one count per answer toward the letter its option names
///
/// Options without a letter effect do not count toward any axis.
pub fn score_axes(answers: &[Answer<'_>]) -> AxisScores {
    let mut scores = AxisScores::new();

    for answer in answers {
        if let Effect::Letter(letter) = answer.option.effect {
            scores.increment(letter);
        }
    }

    scores
}

/// Accumulates every option's genre bumps into a fresh score table
pub fn score_genres(answers: &[Answer<'_>]) -> GenreScores {
    let mut scores = GenreScores::new();

    for answer in answers {
        if let Effect::Genres(bumps) = answer.option.effect {
            for (genre, weight) in bumps {
                scores.add(*genre, *weight);
            }
        }
    }

    scores
}
