// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Two tabs switch between the practices catalogue and the accessibility
//! settings screen.

use crate::accessibility::AccessibilityPreferences;
use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    widget::{button, container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
    pub colors: ColorScheme,
    pub preferences: &'a AccessibilityPreferences,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenPractices,
    OpenAccessibility,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, active: Screen) -> Event {
    let target = match message {
        Message::OpenPractices => Screen::Practices,
        Message::OpenAccessibility => Screen::Accessibility,
    };
    if target == active {
        Event::None
    } else {
        Event::Navigate(target)
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tab = |label: String, screen: Screen, message: Message| {
        button(
            Text::new(label)
                .size(ctx.preferences.text(typography::BODY_LG))
                .center(),
        )
        .on_press(message)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOUCH_TARGET))
        .padding(spacing::XS)
        .style(styles::button::nav(ctx.colors, ctx.active == screen))
    };

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(tab(
            ctx.i18n.tr("navbar-practices"),
            Screen::Practices,
            Message::OpenPractices,
        ))
        .push(tab(
            ctx.i18n.tr("navbar-accessibility"),
            Screen::Accessibility,
            Message::OpenAccessibility,
        ));

    container(row)
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::navbar(ctx.colors))
        .into()
}
