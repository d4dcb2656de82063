// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The demo page renders in normal flow with the flash region at the top;
//! the toast stack and the busy overlay are layered above it so they never
//! disturb the page layout.

use super::message::{Message, SimulatedOp};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::flash::FlashKind;
use crate::ui::notifications::{BusyIndicator, FlashCenter, Kind, ToastCenter};
use crate::ui::styles::button as button_styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub theme_mode: ThemeMode,
    pub toasts: &'a ToastCenter,
    pub flash: &'a FlashCenter,
    pub busy: &'a BusyIndicator,
}

/// Renders the demo page with the feedback layers stacked above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = demo_page(ctx.theme_mode, ctx.flash);
    let toast_layer = ctx.toasts.view().map(Message::Toast);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(toast_layer);

    if ctx.busy.is_active() {
        layers = layers.push(ctx.busy.view());
    }

    layers.into()
}

fn demo_page<'a>(theme_mode: ThemeMode, flash: &'a FlashCenter) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new("Alankara Studio").size(typography::TITLE_MD))
                .width(Length::Fill),
        )
        .push(
            button(Text::new(theme_label(theme_mode)).size(typography::BODY))
                .on_press(Message::CycleTheme)
                .padding(spacing::XXS)
                .style(button_styles::quiet),
        );

    let flash_region = flash.view().map(Message::Flash);

    let operations = section(
        "Studio actions",
        Row::new()
            .spacing(spacing::SM)
            .push(action_button(
                "Save design",
                Message::StartOperation(SimulatedOp::SaveDesign),
            ))
            .push(action_button(
                "Upload room photo",
                Message::StartOperation(SimulatedOp::UploadPhoto),
            ))
            .push(action_button(
                "Run style analysis",
                Message::StartOperation(SimulatedOp::StyleAnalysis),
            ))
            .into(),
    );

    let toast_samples = section(
        "Toast samples",
        Row::new()
            .spacing(spacing::SM)
            .push(action_button("Success", Message::ShowToast(Kind::Success)))
            .push(action_button("Info", Message::ShowToast(Kind::Info)))
            .push(action_button("Warning", Message::ShowToast(Kind::Warning)))
            .push(action_button("Error", Message::ShowToast(Kind::Error)))
            .into(),
    );

    let flash_samples = section(
        "Flash samples",
        Row::new()
            .spacing(spacing::SM)
            .push(action_button(
                "Success",
                Message::ShowFlash(FlashKind::Success),
            ))
            .push(action_button("Error", Message::ShowFlash(FlashKind::Error)))
            .push(action_button("Info", Message::ShowFlash(FlashKind::Info)))
            .push(action_button("Persistent", Message::ShowPersistentFlash))
            .into(),
    );

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::DEMO_CONTENT_WIDTH)
        .push(header)
        .push(flash_region)
        .push(operations)
        .push(toast_samples)
        .push(flash_samples);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XL)
        .into()
}

fn section<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(body)
        .into()
}

fn action_button(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(typography::BODY))
        .on_press(message)
        .padding(spacing::XS)
        .style(button_styles::primary)
        .into()
}

fn theme_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Theme: Light",
        ThemeMode::Dark => "Theme: Dark",
        ThemeMode::System => "Theme: System",
    }
}
