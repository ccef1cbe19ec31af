use gpui::{
    App, AppContext, ClickEvent, ClipboardItem, Context, Div, Entity, FontWeight,
    InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Subscription, Window, div,
};
use gpui_component::{
    ActiveTheme, IndexPath,
    input::{InputEvent, InputState, MaskPattern},
    select::{Select, SelectEvent, SelectState},
    h_flex, v_flex,
};
use salary_core::{
    BLANK_PRESET_LABEL, CalculatorAction, CalculatorState, Comparison, NumberLocale,
    ROLE_PRESETS, format_currency,
    lead::{EmailAddress, Lead, LeadSink, TracingLeadSink},
    preset_for_option_label, preset_options,
    share::{
        BRAND_NAME, BRAND_TAGLINE, CTA_BODY, CTA_FOOTNOTE, CTA_HEADLINE, FOOTER_NOTE, ShareLinks,
    },
};
use tracing::{info, warn};

use crate::components::{make_button, make_input_row, make_select_row, region_card};

type PresetSelect = SelectState<Vec<SharedString>>;

/// The calculator page: preset picker, form, region cards and share panel.
///
/// All page state lives in [`CalculatorState`]. Role title and salary edits
/// are forwarded to it as they happen; the email field is read on send.
pub struct CalculatorView {
    state: CalculatorState,
    locale: NumberLocale,
    share: ShareLinks,
    lead_sink: Box<dyn LeadSink>,

    preset: Entity<PresetSelect>,
    role_title: Entity<InputState>,
    us_salary: Entity<InputState>,
    email: Entity<InputState>,

    _subscriptions: Vec<Subscription>,
}

impl CalculatorView {
    pub fn new(
        state: CalculatorState,
        locale: NumberLocale,
        share: ShareLinks,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let labels: Vec<SharedString> = preset_options(&locale)
            .into_iter()
            .map(SharedString::from)
            .collect();
        // Row 0 is the blank entry.
        let selected_index = state
            .selected_preset()
            .and_then(|title| ROLE_PRESETS.iter().position(|preset| preset.title == title))
            .map(|i| IndexPath::default().row(i + 1));
        let preset = cx.new(|cx| SelectState::new(labels, selected_index, window, cx));

        let role_title = make_text_input(
            "e.g., Senior Software Engineer",
            state.role_title(),
            window,
            cx,
        );
        let us_salary = make_salary_input(state.us_salary(), window, cx);
        let email = make_text_input("Enter your email", state.email(), window, cx);

        let subscriptions = vec![
            cx.subscribe_in(&preset, window, Self::on_preset_event),
            cx.subscribe_in(&role_title, window, Self::on_role_title_event),
            cx.subscribe_in(&us_salary, window, Self::on_salary_event),
            cx.on_window_closed(|cx: &mut App| {
                info!("Main window closed");
                cx.quit();
            }),
        ];

        Self {
            state,
            locale,
            share,
            lead_sink: Box::new(TracingLeadSink),
            preset,
            role_title,
            us_salary,
            email,
            _subscriptions: subscriptions,
        }
    }

    fn dispatch(
        &mut self,
        action: CalculatorAction,
        cx: &mut Context<Self>,
    ) {
        self.state = std::mem::take(&mut self.state).reduce(action);
        cx.notify();
    }

    fn on_preset_event(
        &mut self,
        _: &Entity<PresetSelect>,
        event: &SelectEvent<Vec<SharedString>>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let SelectEvent::Confirm(label) = event else {
            return;
        };
        let preset = label
            .as_ref()
            .and_then(|label| preset_for_option_label(label.as_str(), &self.locale));

        let Some(preset) = preset else {
            // Blank entry or cleared selection: the fields keep what was typed.
            self.dispatch(CalculatorAction::SelectPreset(None), cx);
            return;
        };

        self.dispatch(
            CalculatorAction::SelectPreset(Some(preset.title.to_string())),
            cx,
        );
        let role_title = self.state.role_title().to_string();
        let us_salary = self.state.us_salary().to_string();
        self.role_title
            .update(cx, |input, cx| input.set_value(role_title, window, cx));
        self.us_salary
            .update(cx, |input, cx| input.set_value(us_salary, window, cx));
    }

    fn on_role_title_event(
        &mut self,
        input: &Entity<InputState>,
        event: &InputEvent,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if matches!(event, InputEvent::Change { .. }) {
            let role_title = input.read(cx).value().to_string();
            self.dispatch(CalculatorAction::EditRoleTitle(role_title), cx);
        }
    }

    fn on_salary_event(
        &mut self,
        input: &Entity<InputState>,
        event: &InputEvent,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if matches!(event, InputEvent::Change { .. }) {
            let us_salary = input.read(cx).value().to_string();
            self.dispatch(CalculatorAction::EditSalary(us_salary), cx);
        }
    }

    fn on_calculate(
        &mut self,
        _: &ClickEvent,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.dispatch(CalculatorAction::Submit, cx);
    }

    fn log_cta(
        &self,
        action: &'static str,
    ) {
        info!(action, role = self.state.role_title(), "call to action clicked");
    }

    fn on_toggle_email(
        &mut self,
        _: &ClickEvent,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.dispatch(CalculatorAction::ToggleEmailCapture, cx);
    }

    fn on_send_email(
        &mut self,
        _: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let email = self.email.read(cx).value().to_string();
        self.dispatch(CalculatorAction::EditEmail(email), cx);

        if let Ok(address) = EmailAddress::parse(self.state.email()) {
            let lead = Lead {
                email: address,
                comparison: self.state.comparison(),
            };
            if let Err(error) = self.lead_sink.submit(&lead) {
                warn!(%error, "lead was not accepted");
                return;
            }
        }
        self.dispatch(CalculatorAction::SubmitEmail, cx);

        if self.state.email().is_empty() {
            self.email
                .update(cx, |input, cx| input.set_value("", window, cx));
        }
    }

    fn on_copy_link(
        &mut self,
        _: &ClickEvent,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        cx.write_to_clipboard(ClipboardItem::new_string(self.share.share_text()));
        self.dispatch(CalculatorAction::LinkCopied, cx);
    }

    fn on_share_twitter(
        &mut self,
        _: &ClickEvent,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let url = self.share.twitter_url();
        info!(%url, "opening share link");
        cx.open_url(url.as_str());
    }

    fn on_share_linkedin(
        &mut self,
        _: &ClickEvent,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let url = self.share.linkedin_url();
        info!(%url, "opening share link");
        cx.open_url(url.as_str());
    }

    fn on_dismiss_notice(
        &mut self,
        _: &ClickEvent,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.dispatch(CalculatorAction::DismissNotice, cx);
    }

    fn render_header(
        &self,
        cx: &Context<Self>,
    ) -> Div {
        let brand = h_flex()
            .gap_3()
            .items_center()
            .pb_4()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(brand_mark(cx).size_10().text_lg())
            .child(
                v_flex()
                    .child(div().text_2xl().font_weight(FontWeight::SEMIBOLD).child(BRAND_NAME))
                    .child(
                        div()
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child(BRAND_TAGLINE),
                    ),
            );

        v_flex()
            .gap_6()
            .child(brand)
            .child(
                v_flex()
                    .items_center()
                    .gap_1()
                    .child(
                        div()
                            .text_2xl()
                            .font_weight(FontWeight::BOLD)
                            .child("Calculate Your Hiring Savings"),
                    )
                    .child(
                        div()
                            .text_color(cx.theme().muted_foreground)
                            .child(format!(
                                "Discover how much you can save by hiring world-class talent from global markets through {BRAND_NAME}"
                            )),
                    ),
            )
    }

    fn render_form(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        v_flex()
            .gap_2()
            .child(make_select_row(
                "Choose a role:",
                Select::new(&self.preset)
                    .placeholder(BLANK_PRESET_LABEL)
                    .w_full(),
            ))
            .child(make_input_row(&self.role_title, "Role title:"))
            .child(make_input_row(&self.us_salary, "U.S. salary (annual): $"))
            .child(h_flex().justify_center().child(make_button(
                "calculate",
                "Calculate Savings",
                cx.listener(Self::on_calculate),
            )))
    }

    fn render_results(
        &self,
        comparison: &Comparison,
        cx: &mut Context<Self>,
    ) -> Div {
        v_flex()
            .gap_4()
            .child(
                v_flex()
                    .items_center()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::BOLD)
                            .child(format!(
                                "Hiring Cost Comparison for {}",
                                comparison.role_title()
                            )),
                    )
                    .child(
                        div()
                            .text_color(cx.theme().muted_foreground)
                            .child(format!(
                                "Based on a U.S. salary of {}",
                                format_currency(comparison.us_salary(), &self.locale)
                            )),
                    ),
            )
            .child(
                h_flex().gap_4().items_start().children(
                    comparison
                        .results
                        .iter()
                        .map(|result| region_card(result, &self.locale, cx)),
                ),
            )
            .child(self.render_share_panel(cx))
            .child(self.render_cta(cx))
    }

    fn render_cta(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        v_flex()
            .items_center()
            .gap_4()
            .p_8()
            .rounded_2xl()
            .bg(cx.theme().primary)
            .text_color(cx.theme().primary_foreground)
            .child(div().text_2xl().font_weight(FontWeight::BOLD).child(CTA_HEADLINE))
            .child(div().text_lg().child(CTA_BODY))
            .child(
                h_flex()
                    .gap_4()
                    .justify_center()
                    .child(make_button(
                        "cta-find-hire",
                        "🎯 Find Your First Offshore Hire",
                        cx.listener(|this, _: &ClickEvent, _, _| this.log_cta("find_first_hire")),
                    ))
                    .child(make_button(
                        "cta-talk-strategist",
                        "📞 Talk to a Hiring Strategist",
                        cx.listener(|this, _: &ClickEvent, _, _| this.log_cta("talk_to_strategist")),
                    )),
            )
            .child(div().text_sm().child(CTA_FOOTNOTE))
    }

    fn render_footer(
        &self,
        cx: &Context<Self>,
    ) -> Div {
        h_flex()
            .justify_between()
            .items_center()
            .pt_8()
            .border_t_1()
            .border_color(cx.theme().border)
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(brand_mark(cx).size_6().text_sm())
                    .child(div().font_weight(FontWeight::SEMIBOLD).child(BRAND_NAME)),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(FOOTER_NOTE),
            )
    }

    fn render_share_panel(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        let buttons = h_flex()
            .gap_3()
            .justify_center()
            .child(make_button(
                "send-email",
                "📧 Send to Email",
                cx.listener(Self::on_toggle_email),
            ))
            .child(make_button(
                "copy-link",
                "📋 Copy Link",
                cx.listener(Self::on_copy_link),
            ))
            .child(make_button(
                "share-twitter",
                "🐦 Share on Twitter",
                cx.listener(Self::on_share_twitter),
            ))
            .child(make_button(
                "share-linkedin",
                "💼 Share on LinkedIn",
                cx.listener(Self::on_share_linkedin),
            ));

        let email_form = self.state.show_email_capture().then(|| {
            make_input_row(&self.email, "Email:").child(make_button(
                "submit-email",
                "Send",
                cx.listener(Self::on_send_email),
            ))
        });

        v_flex()
            .gap_3()
            .p_4()
            .rounded_lg()
            .bg(cx.theme().secondary)
            .child(
                div()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child("💡 Want to save this report?"),
            )
            .child(buttons)
            .children(email_form)
    }

    fn render_notice(
        &self,
        cx: &mut Context<Self>,
    ) -> Option<Div> {
        let notice = self.state.notice()?;
        Some(
            h_flex()
                .gap_3()
                .justify_center()
                .items_center()
                .child(notice.to_string())
                .child(make_button(
                    "dismiss-notice",
                    "OK",
                    cx.listener(Self::on_dismiss_notice),
                )),
        )
    }
}

impl Render for CalculatorView {
    fn render(
        &mut self,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let comparison = self.state.comparison();

        v_flex()
            .id("calculator")
            .size_full()
            .overflow_y_scroll()
            .p_5()
            .gap_6()
            .child(self.render_header(cx))
            .child(self.render_form(cx))
            .children(self.render_notice(cx))
            .children(comparison.map(|comparison| self.render_results(&comparison, cx)))
            .child(self.render_footer(cx))
    }
}

fn brand_mark(cx: &App) -> Div {
    div()
        .flex()
        .items_center()
        .justify_center()
        .rounded_lg()
        .bg(cx.theme().primary)
        .text_color(cx.theme().primary_foreground)
        .font_weight(FontWeight::BOLD)
        .child("S")
}

fn make_text_input(
    placeholder: &'static str,
    value: &str,
    window: &mut Window,
    cx: &mut Context<CalculatorView>,
) -> Entity<InputState> {
    let value = value.to_string();
    cx.new(|input_cx| {
        InputState::new(window, input_cx)
            .placeholder(placeholder)
            .default_value(value)
    })
}

fn make_salary_input(
    value: &str,
    window: &mut Window,
    cx: &mut Context<CalculatorView>,
) -> Entity<InputState> {
    let pattern = MaskPattern::Number {
        separator: Some(','),
        fraction: Some(0),
    };
    let value = value.to_string();

    cx.new(|input_cx| {
        InputState::new(window, input_cx)
            .mask_pattern(pattern)
            .placeholder("120000")
            .default_value(value)
    })
}
