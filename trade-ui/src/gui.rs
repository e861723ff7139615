use anyhow::Context as _;
use gpui::{
    AnyElement, AnyView, App, AppContext, Bounds, Context, IntoElement, KeyBinding, Menu,
    MenuItem, ParentElement, Styled, TitlebarOptions, Window, WindowBounds, WindowOptions,
};
use gpui_component::{Root, v_flex};
use tracing::info;

use trade_core::{TradingConfig, TradingForm, sinks::build_sink};

use crate::{
    Quit,
    components::{AppWindow, TradingPanel, WindowPreferences},
    quit,
};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Trading Desk".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the trading window described by `config`.
pub fn open_main_window(
    app_cx: &mut App,
    config: &TradingConfig,
) -> anyhow::Result<()> {
    let sink = build_sink(&config.sink).context("Failed to open action sink")?;
    let form = TradingForm::new(config.session(), sink);
    let prefs = WindowPreferences::from(&config.window);

    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None, prefs.size, app_cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some("Trading Desk".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    app_cx.open_window(options, move |window, cx| {
        let content = build_main_content(window, cx, form);
        let app_window = cx.new(|window_cx: &mut Context<AppWindow>| {
            let mut app_window = AppWindow::new(window_cx);
            app_window.set_content(content);
            app_window
        });
        cx.new(|root_cx| Root::new(AnyView::from(app_window), window, root_cx))
    })?;

    info!("Main window opened");
    Ok(())
}

/// Builds the primary window content.
///
/// Returns a closure suitable for passing to `AppWindow::set_content`,
/// rendering the trading panel on each frame.
pub fn build_main_content(
    window: &mut Window,
    app_cx: &mut App,
    form: TradingForm,
) -> impl Fn() -> AnyElement + 'static {
    let panel = app_cx.new(|panel_cx: &mut Context<TradingPanel>| {
        TradingPanel::new(form, window, panel_cx)
    });

    move || {
        v_flex()
            .size_full()
            .p_5()
            .gap_4()
            .child(panel.clone())
            .into_any_element()
    }
}
