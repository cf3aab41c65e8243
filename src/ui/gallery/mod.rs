// SPDX-License-Identifier: MPL-2.0
//! Product gallery: a carousel of product cards.
//!
//! Each card shows the image of its selected metal variant, the price, a
//! star rating and the variant swatches. The [`component`] module owns the
//! state and update logic; the other modules are views.

pub mod card;
pub mod carousel;
pub mod component;
pub mod empty_state;
pub mod rating;
pub mod swatches;

pub use component::{Effect, LoadState, Message, State};

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Environment required to render the gallery.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Title above the carousel, or a status view while nothing can be shown.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body = if *state.load_state() == LoadState::Loaded && !state.products().is_empty() {
        carousel::view(state, ctx)
    } else {
        empty_state::view(state.load_state(), ctx.i18n)
    };

    let title = Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG);

    Container::new(
        Column::new()
            .spacing(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(body),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::XL)
    .into()
}
