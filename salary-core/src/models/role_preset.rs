use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::format::{NumberLocale, format_currency};

/// A predefined role title and its typical U.S. salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RolePreset {
    pub title: &'static str,
    pub salary: Decimal,
}

impl RolePreset {
    /// Label shown in the preset selector, e.g. `"Software Engineer - $120,000"`.
    pub fn option_label(
        &self,
        locale: &NumberLocale,
    ) -> String {
        format!("{} - {}", self.title, format_currency(self.salary, locale))
    }

    /// The salary as it is written into the salary field: plain digits, no grouping.
    pub fn salary_field_value(&self) -> String {
        self.salary.normalize().to_string()
    }
}

pub const ROLE_PRESETS: [RolePreset; 8] = [
    RolePreset {
        title: "Sales Development Rep (SDR)",
        salary: dec!(70000),
    },
    RolePreset {
        title: "Revenue Operations Manager",
        salary: dec!(90000),
    },
    RolePreset {
        title: "Customer Success Manager",
        salary: dec!(85000),
    },
    RolePreset {
        title: "Executive Assistant",
        salary: dec!(60000),
    },
    RolePreset {
        title: "Product Designer",
        salary: dec!(80000),
    },
    RolePreset {
        title: "Software Engineer",
        salary: dec!(120000),
    },
    RolePreset {
        title: "Marketing Manager",
        salary: dec!(75000),
    },
    RolePreset {
        title: "Content Writer",
        salary: dec!(65000),
    },
];

/// Placeholder entry at the top of the preset selector. Choosing it selects no preset.
pub const BLANK_PRESET_LABEL: &str = "Select a common SaaS role...";

/// Selector entries: the blank placeholder followed by every preset label.
pub fn preset_options(locale: &NumberLocale) -> Vec<String> {
    std::iter::once(BLANK_PRESET_LABEL.to_string())
        .chain(ROLE_PRESETS.iter().map(|preset| preset.option_label(locale)))
        .collect()
}

/// Maps a selector entry back to its preset. The blank entry and unknown
/// labels map to `None`.
pub fn preset_for_option_label(
    label: &str,
    locale: &NumberLocale,
) -> Option<&'static RolePreset> {
    ROLE_PRESETS
        .iter()
        .find(|preset| preset.option_label(locale) == label)
}

/// Looks up a preset by its exact title.
pub fn find_preset(title: &str) -> Option<&'static RolePreset> {
    ROLE_PRESETS.iter().find(|preset| preset.title == title)
}
