/// 계산 요약을 파라미터/값 표로 모아 CSV 텍스트로 내보낸다.
/// 파일 쓰기는 표현 계층(CLI)의 몫이고 여기서는 문자열만 만든다.

#[derive(Debug, Clone)]
pub struct ReportRow {
    pub parameter: String,
    pub value: String,
}

/// 한 세션 동안 수행한 계산의 요약 표.
#[derive(Debug, Clone, Default)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, parameter: impl Into<String>, value: impl Into<String>) {
        self.rows.push(ReportRow {
            parameter: parameter.into(),
            value: value.into(),
        });
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Parameter,Value 헤더를 포함한 CSV 텍스트를 만든다.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("Parameter,Value\n");
        for row in &self.rows {
            out.push_str(&csv_field(&row.parameter));
            out.push(',');
            out.push_str(&csv_field(&row.value));
            out.push('\n');
        }
        out
    }
}

/// 쉼표/따옴표/줄바꿈이 들어간 필드는 따옴표로 감싼다.
fn csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        let escaped = s.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}
