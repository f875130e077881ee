pub mod inspect;
pub mod matching;
