pub mod trading_panel;
pub mod window;

use gpui::{App, ClickEvent, Div, ParentElement, SharedString, Styled, TextAlign, Window, div};
use gpui::{Pixels, Size, px};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{Sizable, h_flex};
use trade_core::config::WindowConfig;

pub use trading_panel::TradingPanel;
pub use window::AppWindow;

#[derive(Debug, Clone, Copy, PartialEq)]
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
        .w(px(140.))
        .label(label.into())
        .on_click(on_click)
}

/// Creates the common outer container and right-aligned label used by every
/// form row.
pub fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex()
        .items_center()
        .gap_5()
        .p(px(2.))
        .rounded_md()
        .border_1()
        .child(
            div()
                .min_w(px(180.))
                .text_align(TextAlign::Right)
                .child(label.into()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_preferences_follow_config() {
        let config = WindowConfig {
            width: 640.0,
            height: 480.0,
        };
        let prefs = WindowPreferences::from(&config);
        assert_eq!(prefs.size.width, px(640.0));
        assert_eq!(prefs.size.height, px(480.0));
    }

    #[test]
    fn test_default_preferences_match_default_config() {
        assert_eq!(
            WindowPreferences::default(),
            WindowPreferences::new(px(720.0), px(560.0))
        );
    }
}
