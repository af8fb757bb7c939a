/// Fixed question tables and answer resolution
///
/// Questions are declarative records; scoring only ever reads the `Effect` attached to
/// the chosen option, so tests can run the scorer against synthetic tables.
use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    models::{Answer, AnswerOption, AnswerSet, Axis, Effect, Genre, Letter, Question, QuestionTag},
};

const fn letter(label: &'static str, letter: Letter) -> AnswerOption {
    AnswerOption {
        label,
        effect: Effect::Letter(letter),
    }
}

const fn genres(label: &'static str, bumps: &'static [(Genre, u32)]) -> AnswerOption {
    AnswerOption {
        label,
        effect: Effect::Genres(bumps),
    }
}

/// Personality questionnaire: three EI, three SN, two TF and two JP questions
pub const PERSONALITY_QUESTIONS: &[Question] = &[
    Question {
        id: "q1",
        tag: QuestionTag::Axis(Axis::EI),
        prompt: "주말에 에너지를 충전하는 방법은?",
        options: &[
            letter("친구들과 약속을 잡는다", Letter::E),
            letter("집에서 혼자 쉰다", Letter::I),
        ],
    },
    Question {
        id: "q2",
        tag: QuestionTag::Axis(Axis::EI),
        prompt: "처음 보는 사람들과의 자리에서 나는?",
        options: &[
            letter("먼저 말을 건다", Letter::E),
            letter("상대가 말을 걸 때까지 기다린다", Letter::I),
        ],
    },
    Question {
        id: "q3",
        tag: QuestionTag::Axis(Axis::EI),
        prompt: "영화를 보고 난 뒤 나는?",
        options: &[
            letter("바로 감상을 나누고 싶다", Letter::E),
            letter("혼자 곱씹어 본다", Letter::I),
        ],
    },
    Question {
        id: "q4",
        tag: QuestionTag::Axis(Axis::SN),
        prompt: "영화를 고를 때 더 끌리는 것은?",
        options: &[
            letter("실화나 현실적인 이야기", Letter::S),
            letter("상상력 넘치는 세계관", Letter::N),
        ],
    },
    Question {
        id: "q5",
        tag: QuestionTag::Axis(Axis::SN),
        prompt: "설명을 들을 때 나는?",
        options: &[
            letter("구체적인 예시가 좋다", Letter::S),
            letter("전체적인 그림이 좋다", Letter::N),
        ],
    },
    Question {
        id: "q6",
        tag: QuestionTag::Axis(Axis::SN),
        prompt: "여행지에서 더 끌리는 것은?",
        options: &[
            letter("검증된 맛집과 명소", Letter::S),
            letter("새롭고 낯선 경험", Letter::N),
        ],
    },
    Question {
        id: "q7",
        tag: QuestionTag::Axis(Axis::TF),
        prompt: "친구가 고민을 털어놓으면 나는?",
        options: &[
            letter("해결 방법을 함께 찾는다", Letter::T),
            letter("먼저 마음에 공감해 준다", Letter::F),
        ],
    },
    Question {
        id: "q8",
        tag: QuestionTag::Axis(Axis::TF),
        prompt: "영화의 결말에서 더 중요한 것은?",
        options: &[
            letter("논리적으로 맞아떨어지는 전개", Letter::T),
            letter("마음을 울리는 감정선", Letter::F),
        ],
    },
    Question {
        id: "q9",
        tag: QuestionTag::Axis(Axis::JP),
        prompt: "여행을 떠날 때 나는?",
        options: &[
            letter("일정을 꼼꼼히 짜 둔다", Letter::J),
            letter("발길 닿는 대로 움직인다", Letter::P),
        ],
    },
    Question {
        id: "q10",
        tag: QuestionTag::Axis(Axis::JP),
        prompt: "마감이 있는 일을 할 때 나는?",
        options: &[
            letter("미리미리 끝낸다", Letter::J),
            letter("마감 직전에 몰아서 한다", Letter::P),
        ],
    },
];

/// Mood questionnaire; every option bumps genres directly
pub const MOOD_QUESTIONS: &[Question] = &[
    Question {
        id: "m1",
        tag: QuestionTag::Category("activity"),
        prompt: "지금 가장 하고 싶은 일은?",
        options: &[
            genres("친구들과 수다", &[(Genre::Comedy, 2), (Genre::Romance, 1)]),
            genres("혼자 조용히 휴식", &[(Genre::Drama, 2)]),
            genres("새로운 곳으로 모험", &[(Genre::Action, 2), (Genre::Fantasy, 1)]),
            genres("엉뚱한 공상", &[(Genre::SciFi, 2), (Genre::Fantasy, 1)]),
        ],
    },
    Question {
        id: "m2",
        tag: QuestionTag::Category("element"),
        prompt: "영화에서 가장 기대하는 것은?",
        options: &[
            genres("웃음", &[(Genre::Comedy, 2)]),
            genres("감동", &[(Genre::Drama, 2), (Genre::Romance, 1)]),
            genres("스릴", &[(Genre::Action, 2)]),
            genres("상상력", &[(Genre::SciFi, 1), (Genre::Fantasy, 2)]),
        ],
    },
    Question {
        id: "m3",
        tag: QuestionTag::Category("trait"),
        prompt: "나를 가장 잘 표현하는 단어는?",
        options: &[
            genres("유쾌함", &[(Genre::Comedy, 2)]),
            genres("따뜻함", &[(Genre::Romance, 2), (Genre::Drama, 1)]),
            genres("대담함", &[(Genre::Action, 2)]),
            genres("호기심", &[(Genre::SciFi, 2)]),
        ],
    },
    Question {
        id: "m4",
        tag: QuestionTag::Category("atmosphere"),
        prompt: "오늘 끌리는 분위기는?",
        options: &[
            genres("가볍고 밝음", &[(Genre::Comedy, 2)]),
            genres("잔잔하고 깊음", &[(Genre::Drama, 2)]),
            genres("긴장감 넘침", &[(Genre::Action, 1), (Genre::SciFi, 1)]),
            genres("몽환적임", &[(Genre::Fantasy, 2), (Genre::Romance, 1)]),
        ],
    },
];

/// Resolves submitted labels into an ordered answer set
///
/// The result follows question order. Every question must be answered with one of its
/// own option labels, and no unknown question ids may be present.
pub fn resolve_answers<'a>(
    questions: &'a [Question],
    submitted: &HashMap<String, String>,
) -> AppResult<AnswerSet<'a>> {
    let mut unknown: Vec<&str> = submitted
        .keys()
        .map(String::as_str)
        .filter(|id| !questions.iter().any(|question| question.id == *id))
        .collect();
    if !unknown.is_empty() {
        unknown.sort_unstable();
        return Err(AppError::InvalidInput(format!(
            "알 수 없는 질문입니다: {}",
            unknown.join(", ")
        )));
    }

    let missing: Vec<&str> = questions
        .iter()
        .filter(|question| {
            submitted
                .get(question.id)
                .map_or(true, |label| label.trim().is_empty())
        })
        .map(|question| question.id)
        .collect();
    if !missing.is_empty() {
        return Err(AppError::MissingInput(format!(
            "모든 질문에 답해 주세요: {}",
            missing.join(", ")
        )));
    }

    questions
        .iter()
        .map(|question| {
            let label = submitted.get(question.id).map(String::as_str).unwrap_or_default();
            let option = question.option(label).ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "{} 질문에 없는 선택지입니다: {}",
                    question.id, label
                ))
            })?;
            Ok(Answer { question, option })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_options(questions: &[Question]) -> HashMap<String, String> {
        questions
            .iter()
            .map(|q| (q.id.to_string(), q.options[0].label.to_string()))
            .collect()
    }

    #[test]
    fn test_personality_axis_distribution() {
        let count = |axis: Axis| {
            PERSONALITY_QUESTIONS
                .iter()
                .filter(|q| q.tag == QuestionTag::Axis(axis))
                .count()
        };
        assert_eq!(PERSONALITY_QUESTIONS.len(), 10);
        assert_eq!(count(Axis::EI), 3);
        assert_eq!(count(Axis::SN), 3);
        assert_eq!(count(Axis::TF), 2);
        assert_eq!(count(Axis::JP), 2);
    }

    #[test]
    fn test_personality_options_match_question_axis() {
        for question in PERSONALITY_QUESTIONS {
            let QuestionTag::Axis(axis) = question.tag else {
                panic!("{} is not axis tagged", question.id);
            };
            assert_eq!(question.options.len(), 2);
            let (first, second) = axis.letters();
            assert_eq!(question.options[0].effect, Effect::Letter(first));
            assert_eq!(question.options[1].effect, Effect::Letter(second));
        }
    }

    #[test]
    fn test_mood_options_bump_one_to_three_genres() {
        assert_eq!(MOOD_QUESTIONS.len(), 4);
        for question in MOOD_QUESTIONS {
            assert!((2..=6).contains(&question.options.len()));
            for option in question.options {
                let Effect::Genres(bumps) = option.effect else {
                    panic!("{} has a non-genre option", question.id);
                };
                assert!((1..=3).contains(&bumps.len()));
            }
        }
    }

    #[test]
    fn test_question_ids_are_unique() {
        let mut ids: Vec<&str> = PERSONALITY_QUESTIONS
            .iter()
            .chain(MOOD_QUESTIONS)
            .map(|q| q.id)
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_resolve_answers_in_question_order() {
        let submitted = first_options(PERSONALITY_QUESTIONS);
        let answers = resolve_answers(PERSONALITY_QUESTIONS, &submitted).unwrap();
        assert_eq!(answers.len(), 10);
        let ids: Vec<&str> = answers.iter().map(|a| a.question.id).collect();
        let expected: Vec<&str> = PERSONALITY_QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_resolve_answers_missing_question() {
        let mut submitted = first_options(MOOD_QUESTIONS);
        submitted.remove("m3");
        let result = resolve_answers(MOOD_QUESTIONS, &submitted);
        assert!(matches!(result, Err(AppError::MissingInput(msg)) if msg.contains("m3")));
    }

    #[test]
    fn test_resolve_answers_blank_label_counts_as_missing() {
        let mut submitted = first_options(MOOD_QUESTIONS);
        submitted.insert("m1".to_string(), "  ".to_string());
        let result = resolve_answers(MOOD_QUESTIONS, &submitted);
        assert!(matches!(result, Err(AppError::MissingInput(_))));
    }

    #[test]
    fn test_resolve_answers_unknown_option() {
        let mut submitted = first_options(MOOD_QUESTIONS);
        submitted.insert("m2".to_string(), "공포".to_string());
        let result = resolve_answers(MOOD_QUESTIONS, &submitted);
        assert!(matches!(result, Err(AppError::InvalidInput(msg)) if msg.contains("공포")));
    }

    #[test]
    fn test_resolve_answers_unknown_question() {
        let mut submitted = first_options(MOOD_QUESTIONS);
        submitted.insert("q99".to_string(), "웃음".to_string());
        let result = resolve_answers(MOOD_QUESTIONS, &submitted);
        assert!(matches!(result, Err(AppError::InvalidInput(msg)) if msg.contains("q99")));
    }
}
