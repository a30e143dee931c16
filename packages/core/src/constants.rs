/// Number of name candidates requested per generation call
pub const CANDIDATE_COUNT: usize = 6;

/// The single user-facing message shown for any generation failure
pub const GENERATION_FAILED_MESSAGE: &str = "名字生成失败，请稍后重试。";

/// Shown when the birth year on a person request is not a positive year
pub const INVALID_BIRTH_YEAR_MESSAGE: &str = "出生年份无效";
