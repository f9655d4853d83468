//! 분기(branch)/티 연결부 보강 계산 모듈 모음.

pub mod reinforcement;
pub mod tee;

pub use reinforcement::*;
pub use tee::*;
