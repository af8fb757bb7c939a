/// Maps a classification onto a single recommended genre
///
/// Personality codes go through a fixed rule table: one unconditional rule per chosen
/// letter, then confidence bonuses that only fire when the raw answer counts lean
/// clearly toward the chosen letter. Mood answers carry their genre weights directly.
use crate::models::{Answer, AxisScores, Effect, Genre, GenreScores, Letter, PersonalityCode};

use super::scoring::score_genres;

/// Selected genre with the table and reasons behind it
#[derive(Debug, Clone, PartialEq)]
pub struct GenreMapping {
    pub genre: Genre,
    pub scores: GenreScores,
    pub reasons: Vec<String>,
}

struct LetterRule {
    letter: Letter,
    bumps: &'static [(Genre, u32)],
    reason: &'static str,
}

struct ConfidenceRule {
    letter: Letter,
    min_gap: u32,
    bumps: &'static [(Genre, u32)],
    reason: &'static str,
}

const LETTER_RULES: &[LetterRule] = &[
    LetterRule {
        letter: Letter::E,
        bumps: &[(Genre::Action, 2), (Genre::Comedy, 2)],
        reason: "외향형(E): 에너지 넘치는 액션과 함께 웃을 수 있는 코미디가 잘 맞아요.",
    },
    LetterRule {
        letter: Letter::I,
        bumps: &[(Genre::Drama, 2), (Genre::Fantasy, 1)],
        reason: "내향형(I): 혼자 깊이 몰입할 수 있는 드라마와 판타지가 잘 맞아요.",
    },
    LetterRule {
        letter: Letter::S,
        bumps: &[(Genre::Action, 1), (Genre::Drama, 1)],
        reason: "감각형(S): 현실감 있는 액션과 드라마에 끌리는 편이에요.",
    },
    LetterRule {
        letter: Letter::N,
        bumps: &[(Genre::SciFi, 2), (Genre::Fantasy, 2)],
        reason: "직관형(N): 상상력을 자극하는 SF와 판타지 세계관을 좋아해요.",
    },
    LetterRule {
        letter: Letter::T,
        bumps: &[(Genre::SciFi, 2), (Genre::Action, 1)],
        reason: "사고형(T): 치밀한 설정의 SF와 전개가 빠른 액션을 즐겨요.",
    },
    LetterRule {
        letter: Letter::F,
        bumps: &[(Genre::Romance, 2), (Genre::Drama, 1)],
        reason: "감정형(F): 감정선이 살아 있는 로맨스와 드라마에 공감해요.",
    },
    LetterRule {
        letter: Letter::J,
        bumps: &[(Genre::Drama, 1), (Genre::Action, 1)],
        reason: "판단형(J): 구조가 탄탄한 드라마와 목표가 분명한 액션이 어울려요.",
    },
    LetterRule {
        letter: Letter::P,
        bumps: &[(Genre::Comedy, 1), (Genre::Fantasy, 1), (Genre::Romance, 1)],
        reason: "인식형(P): 예측할 수 없는 코미디, 판타지, 로맨스를 가볍게 즐겨요.",
    },
];

/// Applied in this order after the letter rules
const CONFIDENCE_RULES: &[ConfidenceRule] = &[
    ConfidenceRule {
        letter: Letter::N,
        min_gap: 2,
        bumps: &[(Genre::SciFi, 1), (Genre::Fantasy, 1)],
        reason: "직관 성향이 뚜렷해서 SF와 판타지에 가산점을 더했어요.",
    },
    ConfidenceRule {
        letter: Letter::F,
        min_gap: 1,
        bumps: &[(Genre::Romance, 1)],
        reason: "감정 성향이 앞서서 로맨스에 가산점을 더했어요.",
    },
    ConfidenceRule {
        letter: Letter::E,
        min_gap: 2,
        bumps: &[(Genre::Comedy, 1)],
        reason: "외향 성향이 뚜렷해서 코미디에 가산점을 더했어요.",
    },
];

fn apply(scores: &mut GenreScores, bumps: &[(Genre, u32)]) {
    for (genre, weight) in bumps {
        scores.add(*genre, *weight);
    }
}

/// Maps a personality code and the counts it came from to a genre
pub fn map_personality(code: PersonalityCode, axis_scores: &AxisScores) -> GenreMapping {
    let mut scores = GenreScores::new();
    let mut reasons = Vec::new();

    for letter in code.letters() {
        if let Some(rule) = LETTER_RULES.iter().find(|rule| rule.letter == letter) {
            apply(&mut scores, rule.bumps);
            reasons.push(rule.reason.to_string());
        }
    }

    for rule in CONFIDENCE_RULES {
        let axis = rule.letter.axis();
        if code.letter(axis) == rule.letter && axis_scores.gap(axis) >= rule.min_gap {
            apply(&mut scores, rule.bumps);
            reasons.push(rule.reason.to_string());
        }
    }

    GenreMapping {
        genre: scores.best(),
        scores,
        reasons,
    }
}

/// Scores mood answers and picks the heaviest genre
///
/// Each answer contributes one reason naming the option and the bumps it applied.
pub fn map_mood(answers: &[Answer<'_>]) -> GenreMapping {
    let scores = score_genres(answers);

    let reasons = answers
        .iter()
        .filter_map(|answer| match answer.option.effect {
            Effect::Genres(bumps) => {
                let applied: Vec<String> = bumps
                    .iter()
                    .map(|(genre, weight)| format!("{} +{}", genre, weight))
                    .collect();
                Some(format!("'{}' → {}", answer.option.label, applied.join(", ")))
            }
            Effect::Letter(_) => None,
        })
        .collect();

    GenreMapping {
        genre: scores.best(),
        scores,
        reasons,
    }
}
