// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! A header above the three panels, with the toast overlay stacked on top.

use super::{Message, ResultMeta};
use crate::application::session::Session;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::scheme;
use crate::ui::{personalization_panel, result_panel, source_panel};
use iced::widget::{image, Column, Container, Row, Stack, Text};
use iced::{Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub notifications: &'a notifications::Manager,
    pub source_preview: Option<&'a image::Handle>,
    pub result_preview: Option<&'a image::Handle>,
    pub result_meta: Option<&'a ResultMeta>,
    pub spinner_rotation: f32,
    pub theme: &'a Theme,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let state = ctx.session.state();
    let settings = ctx.session.settings();
    let colors = scheme(ctx.theme);

    let source = source_panel::view(source_panel::ViewContext {
        i18n: ctx.i18n,
        preview: ctx.source_preview,
        analysis: state.analysis.as_ref(),
        is_analyzing: state.is_analyzing,
        spinner_rotation: ctx.spinner_rotation,
        colors: colors.clone(),
    })
    .map(Message::Source);

    let personalization = personalization_panel::view(personalization_panel::ViewContext {
        i18n: ctx.i18n,
        settings,
        has_analysis: state.analysis.is_some(),
        can_generate: ctx.session.can_generate(),
        is_generating: state.is_generating,
    })
    .map(Message::Personalization);

    let result = result_panel::view(result_panel::ViewContext {
        i18n: ctx.i18n,
        result: ctx.result_preview,
        is_transparent: ctx.result_meta.is_some_and(|meta| meta.transparent),
        is_generating: state.is_generating,
        error: state.error,
        spinner_rotation: ctx.spinner_rotation,
        colors,
    })
    .map(Message::Result);

    let header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("app-tagline")).size(typography::BODY_SM));

    let panels = Row::new()
        .spacing(spacing::MD)
        .height(Length::Fill)
        .push(source)
        .push(personalization)
        .push(result);

    let content = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(panels),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(content).push(toasts).into()
}
