// SPDX-License-Identifier: MPL-2.0
//! Panel 02: target word, sliders and style overrides.
//!
//! Messages mutate the [`Session`] settings directly; the only thing the
//! parent has to act on is [`Event::GenerateRequested`].

use crate::application::session::Session;
use crate::domain::generation::{GenerationSettings, Percent, TexturePreset};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::source_panel::swatch;
use crate::ui::styles;
use crate::ui::widgets::control_slider;
use iced::widget::{
    button, scrollable, text_input, toggler, Column, Container, Row, Space, Text,
};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the personalization panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub settings: &'a GenerationSettings,
    pub has_analysis: bool,
    pub can_generate: bool,
    pub is_generating: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    WordChanged(String),
    TextureSelected(&'static str),
    PrimaryColorChanged(String),
    SecondaryColorChanged(String),
    ResetColors,
    IntensityChanged(i32),
    BrightnessChanged(i32),
    OutlineChanged(i32),
    TransparencyToggled(bool),
    Generate,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    GenerateRequested,
}

/// Applies a panel message to the session settings.
pub fn update(session: &mut Session, message: Message) -> Event {
    match message {
        Message::WordChanged(word) => session.set_word(word),
        Message::TextureSelected(id) => session.set_texture(id.to_string()),
        Message::PrimaryColorChanged(color) => session.set_primary_color(color),
        Message::SecondaryColorChanged(color) => session.set_secondary_color(color),
        Message::ResetColors => session.reset_colors(),
        Message::IntensityChanged(value) => session.set_intensity_3d(Percent::from_slider(value)),
        Message::BrightnessChanged(value) => session.set_brightness(Percent::from_slider(value)),
        Message::OutlineChanged(value) => {
            session.set_outline_thickness(Percent::from_slider(value));
        }
        Message::TransparencyToggled(enabled) => session.set_transparent(enabled),
        Message::Generate => return Event::GenerateRequested,
    }
    Event::None
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let settings = ctx.settings;

    let word = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("word-label")).size(typography::CAPTION))
        .push(
            text_input(&i18n.tr("word-placeholder"), &settings.new_word)
                .on_input(Message::WordChanged)
                .on_submit(Message::Generate)
                .size(typography::TITLE_SM)
                .padding(spacing::XS),
        );

    let sliders = Column::new()
        .spacing(spacing::SM)
        .push(control_slider(
            i18n.tr("slider-intensity"),
            settings.intensity_3d,
            Message::IntensityChanged,
        ))
        .push(control_slider(
            i18n.tr("slider-brightness"),
            settings.brightness,
            Message::BrightnessChanged,
        ))
        .push(control_slider(
            i18n.tr("slider-outline"),
            settings.outline_thickness,
            Message::OutlineChanged,
        ));

    let transparency = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr("transparent-background")).size(typography::BODY_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            toggler(settings.is_transparent)
                .on_toggle(Message::TransparencyToggled)
                .size(20.0),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(i18n.tr("panel-personalization-title")).size(typography::TITLE_SM))
        .push(word)
        .push(color_overrides(&ctx))
        .push(texture_grid(i18n, &settings.custom_texture))
        .push(sliders)
        .push(transparency)
        .push(generate_button(&ctx));

    Container::new(scrollable(content).height(Length::Fill))
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn color_overrides<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let settings = ctx.settings;

    let reset_label = Text::new(i18n.tr("reset-colors-button")).size(typography::CAPTION);
    let reset = if ctx.has_analysis {
        button(reset_label)
            .on_press(Message::ResetColors)
            .style(styles::button::secondary)
    } else {
        button(reset_label).style(styles::button::secondary)
    };

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr("colors-label")).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(reset);

    let primary = color_row(
        i18n.tr("color-primary"),
        &settings.custom_primary_color,
        Message::PrimaryColorChanged,
    );
    let secondary = color_row(
        i18n.tr("color-secondary"),
        &settings.custom_secondary_color,
        Message::SecondaryColorChanged,
    );

    Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(primary)
        .push(secondary)
        .into()
}

fn color_row<'a>(
    label: String,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(swatch(value))
        .push(
            text_input(&label, value)
                .on_input(on_input)
                .size(typography::BODY_SM)
                .padding(spacing::XXS),
        )
        .into()
}

fn texture_grid<'a>(i18n: &I18n, selected: &str) -> Element<'a, Message> {
    const PER_ROW: usize = 4;

    let catalog = TexturePreset::CATALOG;
    let rows = catalog.chunks(PER_ROW).map(|chunk| {
        let tiles = chunk.iter().map(|preset| -> Element<'a, Message> {
            let label = Column::new()
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(preset.glyph).size(typography::TITLE_SM))
                .push(Text::new(i18n.tr(preset.label_key)).size(typography::CAPTION));
            button(label)
                .width(Length::Fixed(sizing::TEXTURE_TILE_WIDTH))
                .padding(spacing::XXS)
                .on_press(Message::TextureSelected(preset.id))
                .style(styles::button::tile(is_selected(preset, selected)))
                .into()
        });
        Element::from(Row::with_children(tiles).spacing(spacing::XS))
    });

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("texture-label")).size(typography::CAPTION))
        .push(Column::with_children(rows).spacing(spacing::XS))
        .into()
}

/// The auto preset is selected for any blank override.
fn is_selected(preset: &TexturePreset, selected: &str) -> bool {
    if preset.is_auto() {
        selected.trim().is_empty()
    } else {
        preset.id == selected
    }
}

fn generate_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = if ctx.is_generating {
        ctx.i18n.tr("generate-button-busy")
    } else {
        ctx.i18n.tr("generate-button")
    };
    let content = Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let generate = button(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::primary);

    if ctx.can_generate {
        generate.on_press(Message::Generate).into()
    } else {
        generate.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image::EncodedImage;
    use crate::domain::style::StyleAnalysis;
    use std::sync::Arc;

    fn analyzed_session() -> Session {
        let mut session = Session::default();
        let ticket = session.begin_upload(EncodedImage::new(Arc::new(vec![1]), "image/png", 1, 1));
        session.finish_analysis(
            ticket,
            Ok(StyleAnalysis {
                primary_color: "#112233".to_string(),
                secondary_color: "#445566".to_string(),
                ..StyleAnalysis::default()
            }),
        );
        session
    }

    #[test]
    fn slider_messages_clamp() {
        let mut session = Session::default();
        update(&mut session, Message::IntensityChanged(140));
        update(&mut session, Message::BrightnessChanged(-5));
        update(&mut session, Message::OutlineChanged(42));
        assert_eq!(session.settings().intensity_3d.value(), 100);
        assert_eq!(session.settings().brightness.value(), 0);
        assert_eq!(session.settings().outline_thickness.value(), 42);
    }

    #[test]
    fn generate_is_forwarded() {
        let mut session = Session::default();
        assert_eq!(update(&mut session, Message::Generate), Event::GenerateRequested);
        assert_eq!(
            update(&mut session, Message::WordChanged("NEON".to_string())),
            Event::None
        );
        assert_eq!(session.settings().new_word, "NEON");
    }

    #[test]
    fn reset_restores_analyzed_colors() {
        let mut session = analyzed_session();
        update(&mut session, Message::PrimaryColorChanged("#ffffff".to_string()));
        update(&mut session, Message::TextureSelected("Neon Plasma"));
        update(&mut session, Message::ResetColors);
        assert_eq!(session.settings().custom_primary_color, "#112233");
        assert_eq!(session.settings().custom_texture, "Neon Plasma");
    }

    #[test]
    fn auto_tile_matches_blank_override() {
        assert!(is_selected(&TexturePreset::AUTO, ""));
        assert!(is_selected(&TexturePreset::AUTO, "  "));
        assert!(!is_selected(&TexturePreset::AUTO, "Frosted Glass"));
        let glass = TexturePreset::find("Frosted Glass").expect("catalog entry");
        assert!(is_selected(&glass, "Frosted Glass"));
    }

    #[test]
    fn panel_renders() {
        let i18n = I18n::default();
        let session = analyzed_session();
        let _element = view(ViewContext {
            i18n: &i18n,
            settings: session.settings(),
            has_analysis: true,
            can_generate: session.can_generate(),
            is_generating: false,
        });
    }
}
