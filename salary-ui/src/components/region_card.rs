use gpui::{App, Div, ParentElement, SharedString, Styled, div, px, relative};
use gpui_component::{ActiveTheme, StyledExt, h_flex, v_flex};
use rust_decimal::prelude::ToPrimitive;
use salary_core::{CalculationResult, NumberLocale, format_currency, format_whole_percent};

/// Card showing one region's estimated local salary, savings and cost reduction.
pub fn region_card(
    result: &CalculationResult,
    locale: &NumberLocale,
    cx: &App,
) -> Div {
    let theme = cx.theme();
    let region = &result.region;
    let percent = format_whole_percent(result.savings_percentage);
    let bar_fraction = (result.savings_percentage.to_f32().unwrap_or(0.0) / 100.0).clamp(0.0, 1.0);

    v_flex()
        .flex_1()
        .gap_3()
        .p_4()
        .rounded_lg()
        .border_1()
        .border_color(theme.border)
        .child(
            h_flex()
                .gap_3()
                .items_center()
                .child(div().text_2xl().child(region.flag))
                .child(
                    v_flex()
                        .child(div().text_lg().font_semibold().child(region.name))
                        .child(
                            div()
                                .text_sm()
                                .text_color(theme.muted_foreground)
                                .child(region.description),
                        ),
                ),
        )
        .child(
            h_flex()
                .gap_2()
                .child(make_badge(format!("🕐 {}", region.timezone), cx))
                .child(make_badge(format!("💬 {}", region.english), cx)),
        )
        .child(make_figure(
            "Estimated Local Salary",
            format_currency(result.local_salary, locale),
            cx,
        ))
        .child(make_figure(
            "Annual Savings",
            format_currency(result.savings, locale),
            cx,
        ))
        .child(make_figure("Cost Reduction", percent.clone(), cx))
        .child(
            div()
                .w_full()
                .h(px(10.))
                .rounded_full()
                .bg(theme.secondary)
                .child(
                    div()
                        .h_full()
                        .w(relative(bar_fraction))
                        .rounded_full()
                        .bg(theme.primary),
                ),
        )
        .child(
            div()
                .text_xs()
                .text_color(theme.muted_foreground)
                .child(format!("{percent} reduction vs U.S. hiring")),
        )
}

fn make_figure(
    label: &'static str,
    value: impl Into<SharedString>,
    cx: &App,
) -> Div {
    v_flex()
        .child(
            div()
                .text_sm()
                .text_color(cx.theme().muted_foreground)
                .child(label),
        )
        .child(div().text_2xl().font_semibold().child(value.into()))
}

fn make_badge(
    text: String,
    cx: &App,
) -> Div {
    div()
        .px_2()
        .py_1()
        .rounded_full()
        .text_xs()
        .bg(cx.theme().secondary)
        .child(text)
}
