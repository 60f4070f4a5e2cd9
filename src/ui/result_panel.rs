// SPDX-License-Identifier: MPL-2.0
//! Panel 03: the generated image, progress and the current error.

use crate::application::session::SessionError;
use crate::i18n::fluent::I18n;
use crate::ui::components::{busy_indicator, checkerboard};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, image, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the result panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub result: Option<&'a image::Handle>,
    pub is_transparent: bool,
    pub is_generating: bool,
    pub error: Option<SessionError>,
    pub spinner_rotation: f32,
    pub colors: ColorScheme,
}

#[derive(Debug, Clone)]
pub enum Message {
    Save,
    DismissError,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    SaveRequested,
    ErrorDismissed,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Save => Event::SaveRequested,
        Message::DismissError => Event::ErrorDismissed,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let save_label = Text::new(ctx.i18n.tr("save-button")).size(typography::BODY_SM);
    let save = if ctx.result.is_some() && !ctx.is_generating {
        button(save_label)
            .on_press(Message::Save)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::secondary)
    } else {
        button(save_label)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::secondary)
    };

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr("panel-result-title")).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(save);

    let mut column = Column::new().spacing(spacing::MD).push(header);
    if let Some(error) = ctx.error {
        column = column.push(error_banner(ctx.i18n, error));
    }
    column = column.push(output(&ctx));

    Container::new(column)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn output<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.result {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Text::new(ctx.i18n.tr("result-placeholder"))
            .size(typography::BODY_SM)
            .into(),
    };

    let framed = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let backdrop: Element<'a, Message> = if ctx.result.is_some() && ctx.is_transparent {
        checkerboard::wrap(framed)
    } else {
        framed.style(styles::container::preview_frame).into()
    };

    if ctx.is_generating {
        Stack::new()
            .push(backdrop)
            .push(busy_indicator::overlay(
                ctx.i18n.tr("result-generating"),
                ctx.spinner_rotation,
                &ctx.colors,
            ))
            .into()
    } else {
        backdrop
    }
}

fn error_banner<'a>(i18n: &I18n, error: SessionError) -> Element<'a, Message> {
    let dismiss = button(Text::new("×").size(typography::BODY))
        .on_press(Message::DismissError)
        .padding(spacing::XXS)
        .style(styles::button::secondary);

    Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new(i18n.tr(error.i18n_key()))
                    .size(typography::BODY_SM)
                    .width(Length::Fill),
            )
            .push(dismiss),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .style(styles::container::error_banner)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_map_to_events() {
        assert_eq!(update(&Message::Save), Event::SaveRequested);
        assert_eq!(update(&Message::DismissError), Event::ErrorDismissed);
    }

    #[test]
    fn every_error_has_a_translation() {
        let i18n = I18n::new(Some("en-US"), None);
        for error in [
            SessionError::Upload,
            SessionError::Analysis,
            SessionError::Generation,
            SessionError::Validation,
        ] {
            assert!(!i18n.tr(error.i18n_key()).starts_with("MISSING"));
        }
    }

    #[test]
    fn panel_renders_in_each_state() {
        let i18n = I18n::default();
        let handle = image::Handle::from_rgba(1, 1, vec![255, 0, 0, 128]);
        for (result, generating, error) in [
            (None, false, None),
            (Some(&handle), false, None),
            (Some(&handle), true, Some(SessionError::Generation)),
        ] {
            let _element = view(ViewContext {
                i18n: &i18n,
                result,
                is_transparent: true,
                is_generating: generating,
                error,
                spinner_rotation: 0.5,
                colors: ColorScheme::dark(),
            });
        }
    }
}
