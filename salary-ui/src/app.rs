use std::{fmt, io};

use salary_core::{
    CalculatorAction, CalculatorState, Comparison, NumberLocale, format_currency,
    format_whole_percent,
    share::{CTA_BODY, CTA_FOOTNOTE, CTA_HEADLINE},
};

/// Form values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct StartupInput {
    pub preset: Option<String>,
    pub role: Option<String>,
    pub salary: Option<String>,
}

/// Builds the state the window (or report) starts from.
///
/// A preset is applied first so `--role` / `--salary` can override either of
/// its fields. The form is submitted only when something was supplied.
pub fn initial_state(startup: StartupInput) -> CalculatorState {
    let submit = startup.preset.is_some() || startup.role.is_some() || startup.salary.is_some();

    let mut actions = Vec::new();
    if let Some(preset) = startup.preset {
        actions.push(CalculatorAction::SelectPreset(Some(preset)));
    }
    if let Some(role) = startup.role {
        actions.push(CalculatorAction::EditRoleTitle(role));
    }
    if let Some(salary) = startup.salary {
        actions.push(CalculatorAction::EditSalary(salary));
    }
    if submit {
        actions.push(CalculatorAction::Submit);
    }

    actions
        .into_iter()
        .fold(CalculatorState::new(), CalculatorState::reduce)
}

/// Plain-text rendering of a comparison, used by `--report`.
pub struct ComparisonReport<'a> {
    comparison: &'a Comparison,
    locale: &'a NumberLocale,
}

impl<'a> ComparisonReport<'a> {
    pub fn new(
        comparison: &'a Comparison,
        locale: &'a NumberLocale,
    ) -> Self {
        Self { comparison, locale }
    }
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let comparison = self.comparison;
        writeln!(f, "Hiring Cost Comparison for {}", comparison.role_title())?;
        write!(
            f,
            "Based on a U.S. salary of {}",
            format_currency(comparison.us_salary(), self.locale)
        )?;

        for result in &comparison.results {
            let region = &result.region;
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "{} {} ({})", region.flag, region.name, region.description)?;
            writeln!(f, "  {} | {}", region.timezone, region.english)?;
            writeln!(
                f,
                "  Estimated local salary: {}",
                format_currency(result.local_salary, self.locale)
            )?;
            writeln!(
                f,
                "  Annual savings:         {}",
                format_currency(result.savings, self.locale)
            )?;
            write!(
                f,
                "  Cost reduction:         {}",
                format_whole_percent(result.savings_percentage)
            )?;
        }

        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "{CTA_HEADLINE}")?;
        writeln!(f, "{CTA_BODY}")?;
        write!(f, "{CTA_FOOTNOTE}")
    }
}

/// Writes the report to `out`, newline terminated. Independent of logging.
pub fn write_report(
    out: &mut impl io::Write,
    comparison: &Comparison,
    locale: &NumberLocale,
) -> io::Result<()> {
    writeln!(out, "{}", ComparisonReport::new(comparison, locale))?;
    out.flush()
}
