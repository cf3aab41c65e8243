// SPDX-License-Identifier: MPL-2.0
//! Carousel track with navigation arrows and pagination bullets.
//!
//! The track is wrapped in a mouse area so that drags and wheel scrolls
//! page the carousel. Presses captured by swatch buttons never start a drag.

use super::card;
use super::component::{Message, State};
use super::ViewContext;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::SLIDE_SPACING;
use crate::ui::styles;
use iced::widget::{button, mouse_area, tooltip, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let carousel = state.carousel();
    let range = carousel.visible_range();
    let visible = state.products().get(range).unwrap_or_default();

    let mut slides = Row::new().spacing(SLIDE_SPACING).width(Length::Fill);
    for product in visible {
        let variant = state.selection().variant_for(&product.name);
        let image = product
            .image_for(&variant)
            .and_then(|url| state.image(url));
        slides = slides.push(card::view(product, &variant, image, ctx.i18n));
    }
    // Keep slide widths stable on a short last page.
    for _ in visible.len()..carousel.per_view() {
        slides = slides.push(Container::new(Text::new("")).width(Length::Fill));
    }

    let track = mouse_area(slides)
        .on_move(Message::PointerMoved)
        .on_press(Message::PointerPressed)
        .on_release(Message::PointerReleased)
        .on_exit(Message::PointerExited)
        .on_scroll(Message::Scrolled);

    let previous = nav_button(
        "‹",
        ctx.i18n.tr("carousel-previous"),
        carousel.can_go_previous().then_some(Message::PreviousSlide),
    );
    let next = nav_button(
        "›",
        ctx.i18n.tr("carousel-next"),
        carousel.can_go_next().then_some(Message::NextSlide),
    );

    let body = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(previous)
        .push(track)
        .push(next);

    Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(body)
        .push(bullets(carousel.bullet_count(), carousel.start()))
        .into()
}

fn nav_button<'a>(glyph: &'a str, label: String, on_press: Option<Message>) -> Element<'a, Message> {
    let arrow = button(
        Container::new(Text::new(glyph).size(typography::TITLE_LG))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .padding(0)
    .style(styles::button::carousel_nav)
    .on_press_maybe(on_press);

    styles::tooltip::styled(arrow, label, tooltip::Position::Bottom).into()
}

/// One bullet per start position; hidden when everything fits on one page.
fn bullets<'a>(count: usize, active: usize) -> Element<'a, Message> {
    if count <= 1 {
        return Row::new().into();
    }

    (0..count)
        .fold(Row::new().spacing(spacing::XS), |row, index| {
            row.push(
                button(Text::new(""))
                    .width(Length::Fixed(sizing::BULLET))
                    .height(Length::Fixed(sizing::BULLET))
                    .padding(0)
                    .style(styles::button::bullet(index == active))
                    .on_press(Message::GoToSlide(index)),
            )
        })
        .into()
}
