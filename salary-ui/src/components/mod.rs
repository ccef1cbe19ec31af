pub mod calculator;
pub mod region_card;

use gpui::{
    App, ClickEvent, Div, Entity, IntoElement, ParentElement, Pixels, SharedString, Size, Styled,
    TextAlign, Window, div, px,
};
use gpui_component::{
    Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputState},
};

pub use calculator::CalculatorView;
pub use region_card::region_card;

use crate::config::WindowConfig;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self::from(&WindowConfig::default())
    }
}

impl WindowPreferences {
    pub fn new(
        width: impl Into<Pixels>,
        height: impl Into<Pixels>,
    ) -> Self {
        Self {
            size: Size {
                width: width.into(),
                height: height.into(),
            },
        }
    }
}

impl From<&WindowConfig> for WindowPreferences {
    fn from(config: &WindowConfig) -> Self {
        Self::new(px(config.width), px(config.height))
    }
}

/// Creates a primary-styled button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .label(label.into())
        .on_click(on_click)
}

/// A labeled row holding a text input.
pub fn make_input_row(
    state: &Entity<InputState>,
    input_label: impl Into<SharedString>,
) -> Div {
    make_labeled_row(input_label).child(Input::new(state).flex_grow())
}

/// A labeled row holding an already-built dropdown, aligned with [`make_input_row`].
pub fn make_select_row(
    label: impl Into<SharedString>,
    select_element: impl IntoElement,
) -> Div {
    make_labeled_row(label).child(select_element)
}

fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex()
        .items_center()
        .gap_5()
        .p(px(2.))
        .child(
            div()
                .min_w(px(180.))
                .text_align(TextAlign::Right)
                .child(label.into()),
        )
}
