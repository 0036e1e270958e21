// SPDX-License-Identifier: MPL-2.0
//! Accessibility settings screen.
//!
//! The screen edits a draft copy of the preferences. Save hands the draft to
//! the application, Cancel restores the last saved values. Language changes
//! apply immediately.

use crate::accessibility::{AccessibilityPreferences, FontSize};
use crate::config::{MAX_MAGNIFICATION, MIN_MAGNIFICATION};
use crate::i18n::fluent::I18n;
use crate::magnifier::MagnificationFactor;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, container, scrollable, slider, toggler, Column, Container, Row, Text},
    Element, Font, Length,
};
use unic_langid::LanguageIdentifier;

/// Slider increment for the magnification factor.
const MAGNIFICATION_STEP: f32 = 0.1;

/// Draft and saved preferences.
#[derive(Debug, Clone, Default)]
pub struct State {
    draft: AccessibilityPreferences,
    saved: AccessibilityPreferences,
}

impl State {
    pub fn new(preferences: AccessibilityPreferences) -> Self {
        Self {
            draft: preferences,
            saved: preferences,
        }
    }

    /// Replaces both copies, dropping unsaved edits.
    pub fn reset_to(&mut self, preferences: AccessibilityPreferences) {
        self.draft = preferences;
        self.saved = preferences;
    }

    pub fn draft(&self) -> &AccessibilityPreferences {
        &self.draft
    }

    /// Whether the draft differs from the saved preferences.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.saved
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub colors: ColorScheme,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    FontSizeSelected(FontSize),
    HighContrastToggled(bool),
    MagnifierToggled(bool),
    MagnificationChanged(f32),
    LanguageSelected(LanguageIdentifier),
    Save,
    Cancel,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Saved(AccessibilityPreferences),
    Cancelled,
    LanguageChanged(LanguageIdentifier),
}

/// Process a settings message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FontSizeSelected(size) => {
            state.draft.font_size = size;
            Event::None
        }
        Message::HighContrastToggled(enabled) => {
            state.draft.high_contrast = enabled;
            Event::None
        }
        Message::MagnifierToggled(enabled) => {
            state.draft.magnifier_enabled = enabled;
            Event::None
        }
        Message::MagnificationChanged(value) => {
            state.draft.magnification = MagnificationFactor::new(value);
            Event::None
        }
        Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
        Message::Save => {
            state.saved = state.draft;
            Event::Saved(state.draft)
        }
        Message::Cancel => {
            state.draft = state.saved;
            Event::Cancelled
        }
    }
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let draft = ctx.state.draft;
    // The screen previews its own draft so edits are visible before saving
    let colors = if draft.high_contrast {
        ColorScheme::high_contrast()
    } else {
        ctx.colors
    };

    let header = Container::new(
        Text::new(ctx.i18n.tr("settings-title"))
            .size(draft.text(typography::TITLE_LG))
            .font(bold()),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::header(colors));

    let sections = Column::new()
        .spacing(spacing::MD)
        .push(build_font_size_section(&ctx, colors))
        .push(build_toggle_section(
            &ctx,
            colors,
            "settings-high-contrast",
            "settings-high-contrast-description",
            draft.high_contrast,
            Message::HighContrastToggled,
        ))
        .push(build_toggle_section(
            &ctx,
            colors,
            "settings-magnifier",
            "settings-magnifier-description",
            draft.magnifier_enabled,
            Message::MagnifierToggled,
        ))
        .push(build_magnification_section(&ctx, colors))
        .push(build_language_section(&ctx, colors))
        .push(build_preview_section(&ctx, colors))
        .push(build_actions(&ctx, colors));

    let body = Container::new(sections)
        .padding(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .width(Length::Fill);

    let content = Column::new()
        .push(header)
        .push(scrollable(container(body).center_x(Length::Fill)).height(Length::Fill));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(colors))
        .into()
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::default()
    }
}

fn section_card<'a>(
    ctx: &ViewContext<'a>,
    colors: ColorScheme,
    content: Column<'a, Message>,
) -> Element<'a, Message> {
    Container::new(content.spacing(spacing::SM))
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card(
            colors,
            ctx.state.draft.high_contrast,
        ))
        .into()
}

fn section_title<'a>(ctx: &ViewContext<'a>, key: &str) -> Text<'a> {
    Text::new(ctx.i18n.tr(key))
        .size(ctx.state.draft.text(typography::TITLE_SM))
        .font(bold())
}

fn build_font_size_section<'a>(ctx: &ViewContext<'a>, colors: ColorScheme) -> Element<'a, Message> {
    let draft = ctx.state.draft;
    let mut options = Row::new().spacing(spacing::XS);
    for size in FontSize::ALL {
        let label = Text::new(ctx.i18n.tr(size.label_key()))
            .size(size.points())
            .center();
        options = options.push(
            button(label)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::TOUCH_TARGET))
                .style(styles::button::option(colors, draft.font_size == size))
                .on_press(Message::FontSizeSelected(size)),
        );
    }

    section_card(
        ctx,
        colors,
        Column::new()
            .push(section_title(ctx, "settings-font-size"))
            .push(
                Text::new(ctx.i18n.tr("settings-font-size-description"))
                    .size(draft.text(typography::BODY))
                    .color(colors.text_secondary),
            )
            .push(options),
    )
}

fn build_toggle_section<'a>(
    ctx: &ViewContext<'a>,
    colors: ColorScheme,
    title_key: &str,
    description_key: &str,
    value: bool,
    on_toggle: fn(bool) -> Message,
) -> Element<'a, Message> {
    let draft = ctx.state.draft;
    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .width(Length::Fill)
                .push(section_title(ctx, title_key))
                .push(
                    Text::new(ctx.i18n.tr(description_key))
                        .size(draft.text(typography::BODY))
                        .color(colors.text_secondary),
                ),
        )
        .push(toggler(value).on_toggle(on_toggle).size(sizing::ICON_MD));

    section_card(ctx, colors, Column::new().push(row))
}

fn build_magnification_section<'a>(
    ctx: &ViewContext<'a>,
    colors: ColorScheme,
) -> Element<'a, Message> {
    let draft = ctx.state.draft;
    let factor = draft.magnification.value();
    let title = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(section_title(ctx, "settings-magnification").width(Length::Fill))
        .push(Text::new(format!("{factor:.1}×")).size(draft.text(typography::BODY_LG)));

    let control = slider(
        MIN_MAGNIFICATION..=MAX_MAGNIFICATION,
        factor,
        Message::MagnificationChanged,
    )
    .step(MAGNIFICATION_STEP);

    section_card(ctx, colors, Column::new().push(title).push(control))
}

fn build_language_section<'a>(ctx: &ViewContext<'a>, colors: ColorScheme) -> Element<'a, Message> {
    let mut options = Column::new().spacing(spacing::XS);
    for locale in &ctx.i18n.available_locales {
        let key = format!("language-name-{locale}");
        let translated = ctx.i18n.tr(&key);
        let label = if translated.starts_with("MISSING:") {
            locale.to_string()
        } else {
            format!("{translated} ({locale})")
        };
        let selected = ctx.i18n.current_locale() == locale;
        options = options.push(
            button(Text::new(label).size(ctx.state.draft.text(typography::BODY_LG)))
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::button::option(colors, selected))
                .on_press(Message::LanguageSelected(locale.clone())),
        );
    }

    section_card(
        ctx,
        colors,
        Column::new()
            .push(section_title(ctx, "settings-language"))
            .push(options),
    )
}

fn build_preview_section<'a>(ctx: &ViewContext<'a>, colors: ColorScheme) -> Element<'a, Message> {
    let draft = ctx.state.draft;
    section_card(
        ctx,
        colors,
        Column::new()
            .push(section_title(ctx, "settings-preview"))
            .push(Text::new(ctx.i18n.tr("settings-preview-text")).size(draft.text(typography::BODY_LG)))
            .push(
                Text::new(ctx.i18n.tr("settings-preview-subtext"))
                    .size(draft.text(typography::BODY))
                    .color(colors.text_secondary),
            ),
    )
}

fn build_actions<'a>(ctx: &ViewContext<'a>, colors: ColorScheme) -> Element<'a, Message> {
    let size = ctx.state.draft.text(typography::BODY_LG);
    let save = button(Text::new(ctx.i18n.tr("settings-save")).size(size).center())
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOUCH_TARGET))
        .style(styles::button::primary(colors))
        .on_press_maybe(ctx.state.is_dirty().then_some(Message::Save));
    let cancel = button(Text::new(ctx.i18n.tr("settings-cancel")).size(size).center())
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOUCH_TARGET))
        .style(styles::button::secondary(colors))
        .on_press(Message::Cancel);

    Row::new()
        .spacing(spacing::SM)
        .push(cancel)
        .push(save)
        .into()
}
