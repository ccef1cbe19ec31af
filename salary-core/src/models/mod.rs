mod calculation_input;
mod region;
mod region_result;
mod role_preset;

pub use calculation_input::{CalculationInput, InputError, parse_salary};
pub use region::{REGIONS, Region};
pub use region_result::{CalculationResult, Comparison};
pub use role_preset::{
    BLANK_PRESET_LABEL, ROLE_PRESETS, RolePreset, find_preset, preset_for_option_label,
    preset_options,
};
