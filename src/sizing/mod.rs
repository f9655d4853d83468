//! 배관 최소 두께 계산 모듈 모음 (직관, 벤드, 리듀서).

pub mod bend;
pub mod reducer;
pub mod straight_pipe;

pub use bend::*;
pub use reducer::*;
pub use straight_pipe::*;
