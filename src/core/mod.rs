//! 문자 분류 공통 모듈

pub mod unicode;

pub use unicode::{split_blocks, split_other, Block};
