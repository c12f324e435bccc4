use tick::output::Report;

#[test]
fn render_shows_headline_fields_rows_and_hint() {
    let mut report = Report::new("Tasks");
    report.field("total", "2");
    report.field("filter", "pending");
    report.row("[ ] 01HV3Q0XNCW9 Buy milk");
    report.row("[x] 01HV3Q1A2B3C Call mom");
    report.hint("tick add <title>");

    let expected = [
        "Tasks",
        "  total: 2",
        "  filter: pending",
        "",
        "[ ] 01HV3Q0XNCW9 Buy milk",
        "[x] 01HV3Q1A2B3C Call mom",
        "",
        "hint: tick add <title>",
    ]
    .join("\n");
    assert_eq!(report.render(), expected);
}

#[test]
fn render_of_bare_headline_is_just_the_headline() {
    assert_eq!(Report::new("Theme").render(), "Theme");
}

#[test]
fn render_without_rows_has_no_trailing_blank_lines() {
    let mut report = Report::new("Task added");
    report.field("id", "01HV3Q0XNCW9");

    assert_eq!(report.render(), "Task added\n  id: 01HV3Q0XNCW9");
}
