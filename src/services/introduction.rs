use crate::{
    error::{AppError, AppResult},
    models::{
        introduction::{INTERESTS, MOODS, NO_INTERESTS_TEXT},
        IntroductionOptions, IntroductionRequest, IntroductionResponse, PersonalityCode,
    },
};

const SUCCESS_MESSAGE: &str = "소개가 생성되었습니다!";
const MISSING_NAME_OR_MAJOR: &str = "이름과 학과는 꼭 입력해 주세요!";
const MISSING_MBTI_OR_MOOD: &str = "MBTI와 오늘의 기분을 골라 주세요!";

/// Choice lists the introduction form offers
pub fn introduction_options() -> IntroductionOptions {
    IntroductionOptions {
        mbti: PersonalityCode::all().iter().map(ToString::to_string).collect(),
        interests: INTERESTS.to_vec(),
        moods: MOODS.to_vec(),
    }
}

/// Builds a one-paragraph self introduction from the submitted form
///
/// Name and major are required; every categorical field must come from its fixed list.
pub fn introduce(request: &IntroductionRequest) -> AppResult<IntroductionResponse> {
    let name = request.name.trim();
    let major = request.major.trim();
    if name.is_empty() || major.is_empty() {
        return Err(AppError::MissingInput(MISSING_NAME_OR_MAJOR.to_string()));
    }
    if request.mbti.trim().is_empty() || request.mood.trim().is_empty() {
        return Err(AppError::MissingInput(MISSING_MBTI_OR_MOOD.to_string()));
    }

    let mbti: PersonalityCode = request
        .mbti
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("알 수 없는 MBTI입니다: {}", request.mbti)))?;

    let mood = MOODS
        .iter()
        .find(|mood| **mood == request.mood.trim())
        .ok_or_else(|| AppError::InvalidInput(format!("알 수 없는 기분입니다: {}", request.mood)))?;

    let mut interests: Vec<&str> = Vec::new();
    for interest in &request.interests {
        let interest = *INTERESTS
            .iter()
            .find(|known| **known == interest.trim())
            .ok_or_else(|| {
                AppError::InvalidInput(format!("알 수 없는 관심 분야입니다: {}", interest))
            })?;
        if !interests.contains(&interest) {
            interests.push(interest);
        }
    }

    let interests_text = if interests.is_empty() {
        NO_INTERESTS_TEXT.to_string()
    } else {
        interests.join(", ")
    };

    let introduction = format!(
        "안녕하세요! 저는 {}에 재학 중인 {}입니다. MBTI는 {}이고, 관심 분야는 {}예요. \
         오늘은 기분이 {} 😊 앞으로 잘 부탁드려요!",
        major, name, mbti, interests_text, mood
    );

    Ok(IntroductionResponse {
        message: SUCCESS_MESSAGE.to_string(),
        introduction,
    })
}
