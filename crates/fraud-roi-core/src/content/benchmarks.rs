use serde::Serialize;

/// Headline industry statistic shown alongside the calculator.
#[derive(Debug, Clone, Serialize)]
pub struct Benchmark {
    pub stat: &'static str,
    pub label: &'static str,
    pub source: &'static str,
}

static BENCHMARKS: [Benchmark; 3] = [
    Benchmark {
        stat: "95%",
        label: "of AML alerts are false positives",
        source: "Flagright, LexisNexis, Global Investigations Review",
    },
    Benchmark {
        stat: "$274B",
        label: "global financial crime compliance spend",
        source: "LexisNexis",
    },
    Benchmark {
        stat: "30%+",
        label: "annual fraud analyst turnover",
        source: "Salary.com, Glassdoor (2025)",
    },
];

pub fn industry_benchmarks() -> &'static [Benchmark] {
    &BENCHMARKS
}
