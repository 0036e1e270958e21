// SPDX-License-Identifier: MPL-2.0
//! Practices screen listing the integrative health catalogue.
//!
//! Cards collapse to name and definition; expanding one reveals origin,
//! application, indications, benefits and contraindications. A search field
//! filters the list by name.

use crate::accessibility::AccessibilityPreferences;
use crate::catalogue::{self, Practice};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, container, scrollable, text_input, Column, Container, Row, Text},
    Element, Font, Length,
};
use std::collections::HashSet;

/// State for the practices screen.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Ids of expanded cards.
    expanded: HashSet<&'static str>,
    query: String,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Toggle a card's expanded state. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) {
        let Some(practice) = catalogue::find(id) else {
            return;
        };
        if !self.expanded.remove(practice.id) {
            self.expanded.insert(practice.id);
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Practices matching the current search query.
    pub fn visible(&self) -> Vec<&'static Practice> {
        catalogue::search(&self.query)
    }
}

/// Contextual data needed to render the practices screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub preferences: &'a AccessibilityPreferences,
    pub colors: ColorScheme,
}

/// Messages emitted by the practices screen.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    ToggleCard(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
}

/// Process a practices screen message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SearchChanged(query) => {
            state.query = query;
        }
        Message::ToggleCard(id) => state.toggle(id),
    }
    Event::None
}

/// Render the practices screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let prefs = ctx.preferences;
    let practices = ctx.state.visible();

    let title = Text::new(ctx.i18n.tr("practices-title"))
        .size(prefs.text(typography::TITLE_LG))
        .font(bold());
    let subtitle = Text::new(ctx.i18n.tr("practices-subtitle")).size(prefs.text(typography::BODY));
    let count = ctx
        .i18n
        .tr_with_args("practices-count", &[("count", &practices.len().to_string())]);

    let header = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(title)
            .push(subtitle)
            .push(Text::new(count).size(prefs.text(typography::CAPTION))),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::header(ctx.colors));

    let search = text_input(&ctx.i18n.tr("practices-search-placeholder"), ctx.state.query())
        .on_input(Message::SearchChanged)
        .size(prefs.text(typography::BODY_LG))
        .padding(spacing::SM);

    let mut list = Column::new().spacing(spacing::MD).push(search);

    if practices.is_empty() {
        list = list.push(
            Text::new(ctx.i18n.tr("practices-empty")).size(prefs.text(typography::BODY)),
        );
    }
    for practice in practices {
        list = list.push(build_card(&ctx, practice));
    }

    let body = Container::new(list)
        .padding(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .width(Length::Fill);

    let content = Column::new()
        .push(header)
        .push(scrollable(container(body).center_x(Length::Fill)).height(Length::Fill));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(ctx.colors))
        .into()
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::default()
    }
}

fn build_card<'a>(ctx: &ViewContext<'a>, practice: &'static Practice) -> Element<'a, Message> {
    let prefs = ctx.preferences;
    let is_expanded = ctx.state.is_expanded(practice.id);

    let indicator = Text::new(if is_expanded { "▼" } else { "▶" })
        .size(prefs.text(typography::BODY));

    let heading = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(indicator)
        .push(
            Text::new(practice.name)
                .size(prefs.text(typography::TITLE_MD))
                .font(bold()),
        );

    let header = button(heading)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button::card(ctx.colors))
        .on_press(Message::ToggleCard(practice.id));

    let mut card = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(Text::new(practice.definition).size(prefs.text(typography::BODY)));

    if is_expanded {
        let sections = [
            ("practice-origin", practice.origin),
            ("practice-application", practice.application),
            ("practice-indications", practice.indications),
            ("practice-benefits", practice.benefits),
            ("practice-contraindications", practice.contraindications),
        ];
        for (key, body) in sections {
            card = card.push(build_detail(ctx, ctx.i18n.tr(key), body));
        }
    }

    Container::new(card)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card(ctx.colors, prefs.high_contrast))
        .into()
}

fn build_detail<'a>(ctx: &ViewContext<'a>, label: String, body: &'static str) -> Element<'a, Message> {
    let prefs = ctx.preferences;
    let tag = Container::new(Text::new(label).size(prefs.text(typography::CAPTION)))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::tag(ctx.colors));

    Column::new()
        .spacing(spacing::XXS)
        .push(tag)
        .push(Text::new(body).size(prefs.text(typography::BODY)))
        .into()
}
