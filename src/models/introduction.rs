use serde::{Deserialize, Serialize};

/// Interests offered on the introduction form
pub const INTERESTS: [&str; 5] = ["AI", "웹개발", "데이터분석", "게임", "디자인"];

/// Mood labels offered on the introduction form
pub const MOODS: [&str; 6] = [
    "아주 좋아요 😄",
    "좋아요 🙂",
    "그냥 그래요 😐",
    "피곤해요 😴",
    "우울해요 😢",
    "스트레스 받아요 😖",
];

/// Shown in place of interests when none were picked
pub const NO_INTERESTS_TEXT: &str = "아직 탐색 중이에요";

/// Form submission for a self introduction
#[derive(Debug, Clone, Deserialize)]
pub struct IntroductionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub mbti: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub mood: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IntroductionResponse {
    pub message: String,
    pub introduction: String,
}

/// Choice lists for the introduction form
#[derive(Debug, Clone, Serialize)]
pub struct IntroductionOptions {
    pub mbti: Vec<String>,
    pub interests: Vec<&'static str>,
    pub moods: Vec<&'static str>,
}
