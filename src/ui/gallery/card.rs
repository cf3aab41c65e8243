// SPDX-License-Identifier: MPL-2.0
//! Product card: image, name, price, rating and swatches.

use super::component::Message;
use super::{rating, swatches};
use crate::domain::catalog::{Product, Variant};
use crate::i18n::I18n;
use crate::media::ImageEntry;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{image::Image, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

/// What the image area of a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Ready,
    Loading,
    /// No URL for the selected variant, or the download failed.
    Unavailable,
}

impl ImageSlot {
    #[must_use]
    pub fn from_entry(entry: Option<&ImageEntry>, has_url: bool) -> Self {
        match entry {
            Some(ImageEntry::Ready(_)) => ImageSlot::Ready,
            Some(ImageEntry::Failed) => ImageSlot::Unavailable,
            Some(ImageEntry::Loading) => ImageSlot::Loading,
            None if has_url => ImageSlot::Loading,
            None => ImageSlot::Unavailable,
        }
    }
}

pub fn view<'a>(
    product: &'a Product,
    selected: &Variant,
    image: Option<&'a ImageEntry>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let has_url = product.image_for(selected).is_some();
    let picture: Element<'a, Message> = match image {
        Some(ImageEntry::Ready(data)) if has_url => Image::new(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .into(),
        _ => {
            let key = match ImageSlot::from_entry(image, has_url) {
                ImageSlot::Loading => "image-loading",
                ImageSlot::Ready | ImageSlot::Unavailable => "image-unavailable",
            };
            Container::new(
                Text::new(i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::image_placeholder)
            .into()
        }
    };

    let name = Text::new(product.name.as_str()).size(typography::TITLE_SM);
    let price = Text::new(product.price_label())
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(picture)
        .push(name)
        .push(price)
        .push(swatches::view(&product.name, selected, i18n))
        .push(rating::view(product.rating()));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}
