//! EN 13480-3 배관 두께/분기 보강 계산 로직을 라이브러리로 분리하여
//! CLI 뿐 아니라 추후 다른 표현 계층(배치 평가 등)에서도 재사용하기 쉽게 한다.
//! 계산 모듈은 전역 가변 상태 없이 입력에 대한 순수 함수로만 구성한다.

pub mod app;
pub mod branch;
pub mod config;
pub mod material_db;
pub mod report;
pub mod sizing;
pub mod test_pressure;
pub mod ui_cli;
