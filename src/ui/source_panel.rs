// SPDX-License-Identifier: MPL-2.0
//! Panel 01: the uploaded sample and what the analysis found in it.

use crate::domain::style::{parse_hex_color, StyleAnalysis};
use crate::i18n::fluent::I18n;
use crate::ui::components::busy_indicator;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, image, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Color, Element, Length};

/// Contextual data needed to render the source panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub preview: Option<&'a image::Handle>,
    pub analysis: Option<&'a StyleAnalysis>,
    pub is_analyzing: bool,
    pub spinner_rotation: f32,
    pub colors: ColorScheme,
}

#[derive(Debug, Clone)]
pub enum Message {
    ChooseFile,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenFileDialog,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ChooseFile => Event::OpenFileDialog,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("panel-source-title")).size(typography::TITLE_SM);

    let choose_label = if ctx.preview.is_some() {
        ctx.i18n.tr("source-replace-button")
    } else {
        ctx.i18n.tr("source-choose-button")
    };
    let choose = button(Text::new(choose_label).size(typography::BODY_SM))
        .on_press(Message::ChooseFile)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(choose);

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(preview(&ctx));

    if let Some(analysis) = ctx.analysis {
        column = column.push(analysis_summary(ctx.i18n, analysis));
    }

    Container::new(column)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn preview<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.preview {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new("⬆").size(typography::TITLE_LG))
            .push(Text::new(ctx.i18n.tr("source-drop-prompt")).size(typography::BODY))
            .push(Text::new(ctx.i18n.tr("source-formats-hint")).size(typography::CAPTION))
            .into(),
    };

    let frame = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .padding(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::preview_frame);

    if ctx.is_analyzing {
        Stack::new()
            .push(frame)
            .push(busy_indicator::overlay(
                ctx.i18n.tr("source-analyzing"),
                ctx.spinner_rotation,
                &ctx.colors,
            ))
            .into()
    } else {
        frame.into()
    }
}

fn analysis_summary<'a>(i18n: &I18n, analysis: &StyleAnalysis) -> Element<'a, Message> {
    let colors = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(swatch(&analysis.primary_color))
        .push(swatch(&analysis.secondary_color))
        .push(
            Text::new(format!(
                "{} / {}",
                analysis.primary_color, analysis.secondary_color
            ))
            .size(typography::CAPTION),
        );

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("analysis-title")).size(typography::BODY))
        .push(field(i18n.tr("analysis-font"), analysis.font_family.clone()))
        .push(field(
            i18n.tr("analysis-lighting"),
            i18n.tr(analysis.lighting_type.i18n_key()),
        ))
        .push(field(i18n.tr("analysis-depth"), analysis.extrusion_depth.clone()))
        .push(field(i18n.tr("analysis-texture"), analysis.texture_details.clone()))
        .push(field(i18n.tr("analysis-glow"), analysis.glow_effect.clone()))
        .push(field(i18n.tr("analysis-shadow"), analysis.shadow_angle.clone()))
        .push(colors)
        .into()
}

fn field<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(Text::new(label).size(typography::CAPTION).width(Length::Fixed(90.0)))
        .push(Text::new(value).size(typography::BODY_SM))
        .into()
}

/// A square filled with `hex`, or an outlined empty square when it does not parse.
pub(crate) fn swatch<'a, M: 'a>(hex: &str) -> Element<'a, M> {
    let color = parse_hex_color(hex).map(|rgb| Color::from_rgb8(rgb.r, rgb.g, rgb.b));
    Container::new(Space::new())
        .width(Length::Fixed(sizing::SWATCH))
        .height(Length::Fixed(sizing::SWATCH))
        .style(styles::container::swatch(color))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::style::LightingType;

    fn analysis() -> StyleAnalysis {
        StyleAnalysis {
            font_family: "Rounded sans".to_string(),
            extrusion_depth: "deep".to_string(),
            lighting_type: LightingType::Neon,
            primary_color: "#ff00aa".to_string(),
            secondary_color: "not a color".to_string(),
            glow_effect: "pink halo".to_string(),
            texture_details: "glass tubes".to_string(),
            shadow_angle: "bottom".to_string(),
        }
    }

    #[test]
    fn choose_file_requests_dialog() {
        assert_eq!(update(&Message::ChooseFile), Event::OpenFileDialog);
    }

    #[test]
    fn empty_panel_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            preview: None,
            analysis: None,
            is_analyzing: false,
            spinner_rotation: 0.0,
            colors: ColorScheme::dark(),
        });
    }

    #[test]
    fn analyzed_panel_renders_with_overlay() {
        let i18n = I18n::default();
        let handle = image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]);
        let analysis = analysis();
        let _element = view(ViewContext {
            i18n: &i18n,
            preview: Some(&handle),
            analysis: Some(&analysis),
            is_analyzing: true,
            spinner_rotation: 1.0,
            colors: ColorScheme::light(),
        });
    }
}
