use gpui::{
    AnyView, App, AppContext, Application, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use gpui_component::Root;
use salary_core::CalculatorState;
use tracing::{error, info};

use crate::{
    Quit,
    components::{CalculatorView, WindowPreferences},
    config::AppConfig,
    quit,
};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Salary Calculator".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the calculator window and runs the event loop until the app quits.
pub fn run(
    config: AppConfig,
    state: CalculatorState,
) -> anyhow::Result<()> {
    let share = config.share_links()?;
    let locale = config.locale();
    let preferences = WindowPreferences::from(&config.window);

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |app_cx: &mut App| {
            setup_app(app_cx);

            let options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                    None,
                    preferences.size,
                    app_cx,
                ))),
                titlebar: Some(TitlebarOptions {
                    title: Some("Global Hiring Calculator".into()),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let opened = app_cx.open_window(options, |window, cx| {
                let view = cx.new(|view_cx| {
                    CalculatorView::new(state, locale, share, window, view_cx)
                });
                cx.new(|root_cx| Root::new(AnyView::from(view), window, root_cx))
            });

            match opened {
                Ok(_) => info!("Calculator window opened"),
                Err(error) => {
                    error!(?error, "failed to open calculator window");
                    app_cx.quit();
                }
            }
        });

    Ok(())
}
