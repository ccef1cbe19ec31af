//! Calculator form state and its transitions.
//!
//! [`CalculatorState`] is never mutated in place: each user event becomes a
//! [`CalculatorAction`] and [`CalculatorState::reduce`] returns the next state.
//! Results are not stored; [`CalculatorState::comparison`] derives them from
//! the current fields whenever the view renders.

use std::fmt;

use tracing::{debug, info};

use crate::{
    CalculationInput, Comparison, compute_comparison, find_preset, lead::EmailAddress,
};

/// One-line acknowledgment shown after a side-channel action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ReportSent,
    LinkCopied,
    InvalidEmail,
}

impl fmt::Display for Notice {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(match self {
            Self::ReportSent => "Report sent to your inbox!",
            Self::LinkCopied => "Link copied to clipboard!",
            Self::InvalidEmail => "Please enter a valid email address.",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorAction {
    /// A preset title was picked, or `None` for the blank option.
    SelectPreset(Option<String>),
    EditRoleTitle(String),
    EditSalary(String),
    Submit,
    ToggleEmailCapture,
    EditEmail(String),
    SubmitEmail,
    LinkCopied,
    DismissNotice,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    selected_preset: Option<String>,
    role_title: String,
    us_salary: String,
    show_results: bool,
    show_email_capture: bool,
    email: String,
    notice: Option<Notice>,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `action` and returns the resulting state.
    pub fn reduce(
        self,
        action: CalculatorAction,
    ) -> Self {
        debug!(?action, "calculator action");
        match action {
            CalculatorAction::SelectPreset(title) => self.select_preset(title),
            CalculatorAction::EditRoleTitle(role_title) => Self { role_title, ..self },
            CalculatorAction::EditSalary(us_salary) => Self { us_salary, ..self },
            CalculatorAction::Submit => self.submit(),
            CalculatorAction::ToggleEmailCapture => Self {
                show_email_capture: !self.show_email_capture,
                ..self
            },
            CalculatorAction::EditEmail(email) => Self { email, ..self },
            CalculatorAction::SubmitEmail => self.submit_email(),
            CalculatorAction::LinkCopied => Self {
                notice: Some(Notice::LinkCopied),
                ..self
            },
            CalculatorAction::DismissNotice => Self {
                notice: None,
                ..self
            },
        }
    }

    fn select_preset(
        self,
        title: Option<String>,
    ) -> Self {
        let Some(title) = title.filter(|t| !t.is_empty()) else {
            return Self {
                selected_preset: None,
                ..self
            };
        };
        match find_preset(&title) {
            Some(preset) => Self {
                selected_preset: Some(title),
                role_title: preset.title.to_string(),
                us_salary: preset.salary_field_value(),
                ..self
            },
            None => Self {
                selected_preset: Some(title),
                ..self
            },
        }
    }

    fn submit(self) -> Self {
        match self.input() {
            Ok(input) => {
                info!(%input, "showing comparison");
                Self {
                    show_results: true,
                    ..self
                }
            }
            Err(error) => {
                debug!(%error, "submission ignored");
                self
            }
        }
    }

    fn submit_email(self) -> Self {
        match EmailAddress::parse(&self.email) {
            Ok(_) => Self {
                show_email_capture: false,
                email: String::new(),
                notice: Some(Notice::ReportSent),
                ..self
            },
            Err(error) => {
                debug!(%error, "email submission rejected");
                Self {
                    notice: Some(Notice::InvalidEmail),
                    ..self
                }
            }
        }
    }

    /// Validated view of the current role title and salary fields.
    pub fn input(&self) -> Result<CalculationInput, crate::InputError> {
        CalculationInput::parse(&self.role_title, &self.us_salary)
    }

    /// The comparison to display, if results are shown and the fields are valid.
    pub fn comparison(&self) -> Option<Comparison> {
        if !self.show_results {
            return None;
        }
        self.input().ok().map(|input| compute_comparison(&input))
    }

    pub fn selected_preset(&self) -> Option<&str> {
        self.selected_preset.as_deref()
    }

    pub fn role_title(&self) -> &str {
        &self.role_title
    }

    pub fn us_salary(&self) -> &str {
        &self.us_salary
    }

    pub fn show_results(&self) -> bool {
        self.show_results
    }

    pub fn show_email_capture(&self) -> bool {
        self.show_email_capture
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn state_with(actions: impl IntoIterator<Item = CalculatorAction>) -> CalculatorState {
        actions
            .into_iter()
            .fold(CalculatorState::new(), CalculatorState::reduce)
    }

    #[test]
    fn selecting_preset_fills_title_and_salary() {
        let state = state_with([CalculatorAction::SelectPreset(Some(
            "Software Engineer".to_string(),
        ))]);

        assert_eq!(state.selected_preset(), Some("Software Engineer"));
        assert_eq!(state.role_title(), "Software Engineer");
        assert_eq!(state.us_salary(), "120000");
    }

    #[test]
    fn selecting_blank_preset_keeps_manual_edits() {
        let state = state_with([
            CalculatorAction::SelectPreset(Some("Content Writer".to_string())),
            CalculatorAction::EditRoleTitle("Staff Writer".to_string()),
            CalculatorAction::SelectPreset(None),
        ]);

        assert_eq!(state.selected_preset(), None);
        assert_eq!(state.role_title(), "Staff Writer");
        assert_eq!(state.us_salary(), "65000");
    }

    #[test]
    fn selecting_unknown_preset_leaves_fields_alone() {
        let state = state_with([
            CalculatorAction::EditRoleTitle("Analyst".to_string()),
            CalculatorAction::SelectPreset(Some("Astronaut".to_string())),
        ]);

        assert_eq!(state.selected_preset(), Some("Astronaut"));
        assert_eq!(state.role_title(), "Analyst");
        assert_eq!(state.us_salary(), "");
    }

    #[test]
    fn submit_with_invalid_input_keeps_results_hidden() {
        let cases = [
            ("", "80000"),
            ("  ", "80000"),
            ("Designer", ""),
            ("Designer", "abc"),
            ("Designer", "0"),
            ("Designer", "-10"),
        ];

        for (title, salary) in cases {
            let state = state_with([
                CalculatorAction::EditRoleTitle(title.to_string()),
                CalculatorAction::EditSalary(salary.to_string()),
                CalculatorAction::Submit,
            ]);

            assert!(!state.show_results(), "{title:?} / {salary:?}");
            assert_eq!(state.comparison(), None);
        }
    }

    #[test]
    fn submit_with_valid_input_shows_results() {
        let state = state_with([
            CalculatorAction::EditRoleTitle("Product Designer".to_string()),
            CalculatorAction::EditSalary("80000".to_string()),
            CalculatorAction::Submit,
        ]);

        let comparison = state.comparison().unwrap();

        assert!(state.show_results());
        assert_eq!(comparison.role_title(), "Product Designer");
        assert_eq!(comparison.results.len(), 3);
    }

    #[test]
    fn results_follow_current_fields_after_submit() {
        let state = state_with([
            CalculatorAction::SelectPreset(Some("Product Designer".to_string())),
            CalculatorAction::Submit,
            CalculatorAction::EditSalary("100000".to_string()),
        ]);

        assert_eq!(
            state.comparison().unwrap().us_salary(),
            rust_decimal_macros::dec!(100000)
        );

        let cleared = state.reduce(CalculatorAction::EditSalary(String::new()));
        assert!(cleared.show_results());
        assert_eq!(cleared.comparison(), None);
    }

    #[test]
    fn email_panel_toggles_independently_of_results() {
        let state = state_with([CalculatorAction::ToggleEmailCapture]);
        assert!(state.show_email_capture());
        assert!(!state.show_results());

        let state = state.reduce(CalculatorAction::ToggleEmailCapture);
        assert!(!state.show_email_capture());
    }

    #[test]
    fn valid_email_submission_closes_panel_and_acknowledges() {
        let state = state_with([
            CalculatorAction::ToggleEmailCapture,
            CalculatorAction::EditEmail("ceo@example.com".to_string()),
            CalculatorAction::SubmitEmail,
        ]);

        assert!(!state.show_email_capture());
        assert_eq!(state.email(), "");
        assert_eq!(state.notice(), Some(Notice::ReportSent));
    }

    #[test]
    fn invalid_email_submission_keeps_panel_open() {
        let state = state_with([
            CalculatorAction::ToggleEmailCapture,
            CalculatorAction::EditEmail("ceo-at-example".to_string()),
            CalculatorAction::SubmitEmail,
        ]);

        assert!(state.show_email_capture());
        assert_eq!(state.email(), "ceo-at-example");
        assert_eq!(state.notice(), Some(Notice::InvalidEmail));
    }

    #[test]
    fn link_copied_notice_can_be_dismissed() {
        let state = state_with([CalculatorAction::LinkCopied]);
        assert_eq!(state.notice(), Some(Notice::LinkCopied));
        assert_eq!(state.notice().unwrap().to_string(), "Link copied to clipboard!");

        let state = state.reduce(CalculatorAction::DismissNotice);
        assert_eq!(state.notice(), None);
    }
}
