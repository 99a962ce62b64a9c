use ingest::{Suite, Totals};

pub fn grand_totals(suites: &[Suite]) -> Totals {
    suites.iter().fold(Totals::default(), |mut totals, suite| {
        totals += &suite.totals;
        totals
    })
}

pub fn format_totals(label: &str, totals: &Totals) -> String {
    format!(
        "{}: {} tests, {} passed, {} skipped, {} failed, {} errored in {:.3}s",
        label,
        totals.tests,
        totals.passed,
        totals.skipped,
        totals.failed,
        totals.error,
        totals.duration.as_secs_f64()
    )
}

pub fn summary_lines(suites: &[Suite]) -> Vec<String> {
    suites
        .iter()
        .map(|suite| {
            let label = if suite.name.is_empty() {
                "<unnamed suite>"
            } else {
                suite.name.as_str()
            };
            format_totals(label, &suite.totals)
        })
        .chain(std::iter::once(format_totals(
            "Total",
            &grand_totals(suites),
        )))
        .collect()
}

pub fn print_summary(suites: &[Suite]) {
    for line in summary_lines(suites) {
        println!("{}", line);
    }
}
