// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a stack of layers: the landing page itself, the dimming
//! overlay and enlarged hero while expanded, then the toast layer on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::hero;
use crate::ui::illustration::{self, Illustration};
use crate::ui::notifications::{Notifier, Toast};
use crate::ui::signin;
use crate::ui::solar_objects;
use iced::{
    alignment,
    widget::{svg, text, Column, Container, Row, Stack, Text},
    Element, Length, Size,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub notifier: &'a Notifier,
    pub sign_in: &'a signin::State,
    pub hero: &'a hero::State,
    pub solar_objects: &'a solar_objects::State,
    pub illustration: &'a Illustration,
    pub brand_icon: &'a svg::Handle,
    pub window_size: Option<Size>,
}

/// Renders the landing page with its overlay and toast layers.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let expanded = ctx.hero.is_expanded();

    let hero_slot: Element<'_, Message> = if expanded {
        // Keeps the page layout stable while the hero is lifted out.
        Container::new(text(""))
            .width(Length::Fixed(sizing::HERO_WIDTH))
            .into()
    } else {
        view_hero(&ctx)
    };

    let form = signin::view(signin::ViewContext {
        i18n: ctx.i18n,
        state: ctx.sign_in,
    })
    .map(Message::SignIn);

    let body = Row::new()
        .spacing(spacing::XXL)
        .align_y(alignment::Vertical::Center)
        .push(hero_slot)
        .push(form);

    let page = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .push(view_header(ctx.i18n, ctx.brand_icon))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        );

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if ctx.hero.shows_overlay() {
        layers = layers
            .push(hero::overlay().map(Message::Hero))
            .push(view_hero(&ctx));
    }

    layers
        .push(Toast::view_overlay(ctx.notifier, ctx.i18n).map(Message::Notification))
        .into()
}

fn view_header<'a>(i18n: &I18n, brand_icon: &svg::Handle) -> Element<'a, Message> {
    let icon = svg::Svg::new(brand_icon.clone())
        .width(Length::Fixed(sizing::ICON_LG))
        .height(Length::Fixed(sizing::ICON_LG));

    let name = Text::new(i18n.tr("brand-name"))
        .size(typography::TITLE_MD)
        .color(palette::SUN_500);

    let tagline = Text::new(i18n.tr("brand-tagline")).size(typography::CAPTION);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(name)
        .push(tagline)
        .into()
}

/// Hero content inside its frame, scaled up while expanded.
fn view_hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let scale = ctx.hero.scale();

    let content = Column::new()
        .spacing(spacing::SM * scale)
        .push(illustration::view(ctx.illustration, ctx.i18n, scale))
        .push(Text::new(ctx.i18n.tr("hero-title")).size(typography::TITLE_LG * scale))
        .push(Text::new(ctx.i18n.tr("hero-subtitle")).size(typography::BODY_LG * scale))
        .push(solar_objects::view(ctx.solar_objects, scale).map(Message::SolarObject));

    hero::frame(
        content.into(),
        hero::trigger(ctx.hero, ctx.i18n).map(Message::Hero),
        ctx.hero.is_expanded(),
        ctx.window_size,
    )
}
