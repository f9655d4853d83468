use en13480_toolbox::report::Report;

#[test]
fn empty_report_has_header_only() {
    let r = Report::new();
    assert!(r.is_empty());
    assert_eq!(r.to_csv(), "Parameter,Value\n");
}

#[test]
fn csv_quotes_fields_with_commas_and_quotes() {
    let mut r = Report::new();
    r.push("재질", "P235GH, 탄소강");
    r.push("비고", "두께 \"공칭\" 기준");
    r.push("판정", "합격");
    let csv = r.to_csv();
    assert!(csv.starts_with("Parameter,Value\n"));
    assert!(csv.contains("\"P235GH, 탄소강\""));
    assert!(csv.contains("\"두께 \"\"공칭\"\" 기준\""));
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn rows_keep_insertion_order() {
    let mut r = Report::new();
    r.push("설계압력 P", "1.00 MPa");
    r.push("직관 e_min", "0.56 mm");
    let rows = r.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].parameter, "설계압력 P");
    assert_eq!(rows[1].value, "0.56 mm");
}
