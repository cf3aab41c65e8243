// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating state and update logic.

use crate::diagnostics::{
    AppOperation, DiagnosticsHandle, ErrorEvent, ErrorType, UserAction, WarningEvent,
    WarningType,
};
use crate::domain::catalog::{Product, Variant};
use crate::error::{CatalogError, Error};
use crate::media::{ImageData, ImageEntry, RemoteImageCache};
use crate::ui::state::{CarouselState, SelectionState, SwipeDirection, SwipeState};
use iced::{mouse, Point, Task};
use std::collections::HashSet;
use std::time::Instant;

/// Slides beyond each edge of the visible range whose images are fetched
/// ahead of time.
const PREFETCH_MARGIN: usize = 1;

/// Progress of the product list request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(CatalogError),
}

/// Messages emitted by gallery widgets and routed from the application.
#[derive(Debug, Clone)]
pub enum Message {
    RetryRequested,
    ProductsLoaded(Result<Vec<Product>, CatalogError>),
    VariantSelected {
        product: String,
        variant: Variant,
    },
    NextSlide,
    PreviousSlide,
    GoToSlide(usize),
    PointerMoved(Point),
    PointerPressed,
    PointerReleased,
    PointerExited,
    Scrolled(mouse::ScrollDelta),
    ImageLoaded {
        url: String,
        result: Result<ImageData, Error>,
        duration_ms: u64,
    },
    /// Window width changed.
    ViewportResized(f32),
}

/// Side effects the application should perform after a gallery message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Issue the product list request.
    FetchProducts,
    /// Download these image URLs. Each is already marked as loading.
    LoadImages(Vec<String>),
    /// The product list arrived; start downloading the first images.
    CatalogLoaded {
        product_count: usize,
        images: Vec<String>,
    },
    /// The product list request failed.
    CatalogFailed(CatalogError),
}

/// Gallery state: products, selections, paging and image cache.
#[derive(Debug, Default)]
pub struct State {
    products: Vec<Product>,
    selection: SelectionState,
    load_state: LoadState,
    carousel: CarouselState,
    swipe: SwipeState,
    cursor: Option<Point>,
    images: RemoteImageCache,
    /// `(product, variant tag)` pairs already reported as missing.
    reported_missing: HashSet<(String, String)>,
    fetch_started: Option<Instant>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Moves to `Loading` and asks for the product list.
    ///
    /// Returns [`Effect::None`] while a request is already in flight.
    pub fn request_products(&mut self) -> Effect {
        if self.load_state == LoadState::Loading {
            return Effect::None;
        }
        self.load_state = LoadState::Loading;
        self.fetch_started = Some(Instant::now());
        Effect::FetchProducts
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        let effect = match message {
            Message::RetryRequested => {
                self.log_action(UserAction::RetryFetch);
                self.request_products()
            }
            Message::ProductsLoaded(result) => self.on_products_loaded(result),
            Message::VariantSelected { product, variant } => {
                self.log_action(UserAction::SelectVariant {
                    product: product.clone(),
                    variant: variant.tag().to_string(),
                });
                self.selection = self.selection.with_selection(&product, variant);
                self.image_effect()
            }
            Message::NextSlide => self.page(SwipeDirection::Forward),
            Message::PreviousSlide => self.page(SwipeDirection::Backward),
            Message::GoToSlide(index) => {
                self.log_action(UserAction::GoToSlide { index });
                self.carousel.go_to(index);
                self.image_effect()
            }
            Message::PointerMoved(position) => {
                self.cursor = Some(position);
                self.swipe.track(position);
                Effect::None
            }
            Message::PointerPressed => {
                if let Some(position) = self.cursor {
                    self.swipe.start(position);
                }
                Effect::None
            }
            Message::PointerReleased => match self.swipe.finish() {
                Some(direction) => self.page(direction),
                None => Effect::None,
            },
            Message::PointerExited => {
                self.swipe.cancel();
                self.cursor = None;
                Effect::None
            }
            Message::Scrolled(delta) => match self.swipe.wheel(delta) {
                Some(direction) => self.page(direction),
                None => Effect::None,
            },
            Message::ImageLoaded {
                url,
                result,
                duration_ms,
            } => {
                self.on_image_loaded(url, result, duration_ms);
                Effect::None
            }
            Message::ViewportResized(width) => {
                if self.carousel.set_viewport_width(width) {
                    self.image_effect()
                } else {
                    Effect::None
                }
            }
        };
        (effect, Task::none())
    }

    fn on_products_loaded(&mut self, result: Result<Vec<Product>, CatalogError>) -> Effect {
        #[allow(clippy::cast_possible_truncation)]
        let duration_ms = self
            .fetch_started
            .take()
            .map_or(0, |started| started.elapsed().as_millis() as u64);

        match result {
            Ok(products) => {
                let product_count = products.len();
                self.log_operation(AppOperation::FetchCatalog {
                    duration_ms,
                    product_count,
                    success: true,
                });

                self.selection = SelectionState::for_products(&products);
                self.products = products;
                self.carousel.set_len(product_count);
                self.carousel.go_to(0);
                self.reported_missing.clear();
                self.load_state = LoadState::Loaded;

                Effect::CatalogLoaded {
                    product_count,
                    images: self.pending_images(),
                }
            }
            Err(error) => {
                self.log_operation(AppOperation::FetchCatalog {
                    duration_ms,
                    product_count: 0,
                    success: false,
                });
                self.log_error(ErrorEvent::new(
                    ErrorType::for_catalog(&error),
                    error.to_string(),
                ));

                self.products.clear();
                self.selection = SelectionState::default();
                self.carousel.set_len(0);
                self.load_state = LoadState::Failed(error.clone());
                Effect::CatalogFailed(error)
            }
        }
    }

    fn on_image_loaded(&mut self, url: String, result: Result<ImageData, Error>, duration_ms: u64) {
        self.log_operation(AppOperation::LoadImage {
            duration_ms,
            success: result.is_ok(),
        });

        match result {
            Ok(image) => self.images.insert_ready(url, image),
            Err(err) => {
                let warning_type = match err {
                    Error::Catalog(_) => WarningType::NetworkError,
                    _ => WarningType::UnsupportedFormat,
                };
                self.log_warning(WarningEvent::new(warning_type, format!("{url}: {err}")));
                self.images.insert_failed(url);
            }
        }
    }

    fn page(&mut self, direction: SwipeDirection) -> Effect {
        let moved = match direction {
            SwipeDirection::Forward => self.carousel.next(),
            SwipeDirection::Backward => self.carousel.previous(),
        };
        if !moved {
            return Effect::None;
        }

        self.log_action(match direction {
            SwipeDirection::Forward => UserAction::NextSlide,
            SwipeDirection::Backward => UserAction::PreviousSlide,
        });
        self.image_effect()
    }

    fn image_effect(&mut self) -> Effect {
        let urls = self.pending_images();
        if urls.is_empty() {
            Effect::None
        } else {
            Effect::LoadImages(urls)
        }
    }

    /// Collects image URLs for the visible cards (plus a margin) that are
    /// neither cached nor in flight, marking them as loading. Cached URLs in
    /// that range become most recently used.
    ///
    /// Cards whose selected variant has no image are reported once as a
    /// `MissingImage` warning.
    fn pending_images(&mut self) -> Vec<String> {
        let range = self.carousel.visible_range();
        let start = range.start.saturating_sub(PREFETCH_MARGIN);
        let end = (range.end + PREFETCH_MARGIN).min(self.products.len());

        let mut urls = Vec::new();
        let mut missing = Vec::new();
        for product in self.products.get(start..end).unwrap_or_default() {
            let variant = self.selection.variant_for(&product.name);
            match product.image_for(&variant) {
                Some(url) if !self.images.touch(url) && !urls.iter().any(|u| u == url) => {
                    urls.push(url.to_string());
                }
                Some(_) => {}
                None => missing.push((product.name.clone(), variant.tag().to_string())),
            }
        }

        for url in &urls {
            self.images.mark_loading(url);
        }
        for key in missing {
            if self.reported_missing.insert(key.clone()) {
                let (product, tag) = key;
                self.log_warning(WarningEvent::new(
                    WarningType::MissingImage,
                    format!("{product} has no '{tag}' image"),
                ));
            }
        }
        urls
    }

    fn log_action(&self, action: UserAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }

    fn log_warning(&self, event: WarningEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log_warning(event);
        }
    }

    fn log_error(&self, event: ErrorEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log_error(event);
        }
    }

    fn log_operation(&self, operation: AppOperation) {
        if let Some(handle) = &self.diagnostics {
            handle.log_operation(operation);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    #[must_use]
    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Cached state of an image URL, without touching LRU order.
    #[must_use]
    pub fn image(&self, url: &str) -> Option<&ImageEntry> {
        self.images.peek(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use std::collections::HashMap;

    fn product(name: &str, variants: &[&str]) -> Product {
        Product {
            name: name.to_string(),
            price: 120.0,
            popularity_score: 4.5,
            images: variants
                .iter()
                .map(|tag| {
                    (
                        (*tag).to_string(),
                        format!("https://cdn.test/{name}-{tag}.jpg"),
                    )
                })
                .collect::<HashMap<_, _>>(),
        }
    }

    fn catalog(count: usize) -> Vec<Product> {
        (0..count)
            .map(|i| product(&format!("ring-{i}"), &["yellow", "white", "rose"]))
            .collect()
    }

    fn loaded(count: usize, width: f32) -> State {
        let mut state = State::new();
        let _ = state.handle_message(Message::ViewportResized(width));
        assert_eq!(state.request_products(), Effect::FetchProducts);
        let _ = state.handle_message(Message::ProductsLoaded(Ok(catalog(count))));
        state
    }

    #[test]
    fn request_is_not_repeated_while_loading() {
        let mut state = State::new();
        assert_eq!(state.request_products(), Effect::FetchProducts);
        assert!(state.is_loading());
        assert_eq!(state.request_products(), Effect::None);
        let (effect, _) = state.handle_message(Message::RetryRequested);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn successful_load_selects_yellow_everywhere() {
        let state = loaded(6, 1280.0);

        assert_eq!(state.load_state(), &LoadState::Loaded);
        assert_eq!(state.products().len(), 6);
        assert_eq!(state.selection().len(), 6);
        assert!(state
            .selection()
            .iter()
            .all(|(_, variant)| *variant == Variant::Yellow));
    }

    #[test]
    fn successful_load_requests_visible_images() {
        let mut state = State::new();
        let _ = state.handle_message(Message::ViewportResized(1280.0));
        let _ = state.request_products();
        let (effect, _) = state.handle_message(Message::ProductsLoaded(Ok(catalog(8))));

        match effect {
            Effect::CatalogLoaded {
                product_count,
                images,
            } => {
                assert_eq!(product_count, 8);
                // Four visible plus one ahead.
                assert_eq!(images.len(), 5);
                assert_eq!(images[0], "https://cdn.test/ring-0-yellow.jpg");
                assert!(matches!(state.image(&images[0]), Some(ImageEntry::Loading)));
            }
            other => panic!("expected CatalogLoaded, got {other:?}"),
        }
    }

    #[test]
    fn failed_load_leaves_list_empty() {
        let mut state = State::new();
        let _ = state.request_products();
        let error = CatalogError::Network("connection refused".to_string());
        let (effect, _) = state.handle_message(Message::ProductsLoaded(Err(error.clone())));

        assert_eq!(effect, Effect::CatalogFailed(error.clone()));
        assert!(state.products().is_empty());
        assert!(state.selection().is_empty());
        assert_eq!(state.load_state(), &LoadState::Failed(error));

        let (retry, _) = state.handle_message(Message::RetryRequested);
        assert_eq!(retry, Effect::FetchProducts);
    }

    #[test]
    fn failed_load_logs_the_cause() {
        let mut collector = DiagnosticsCollector::default();
        let mut state = State::new();
        state.set_diagnostics(collector.handle());
        let _ = state.request_products();
        let _ = state.handle_message(Message::ProductsLoaded(Err(CatalogError::Decode(
            "expected a sequence".to_string(),
        ))));
        collector.process_pending();

        let logged = collector.iter().find_map(|event| match &event.kind {
            DiagnosticEventKind::Error { event } => Some(event.clone()),
            _ => None,
        });
        let logged = logged.expect("fetch failure should be logged");
        assert_eq!(logged.error_type, ErrorType::DecodeError);
        assert!(logged.message.contains("expected a sequence"));
    }

    #[test]
    fn selecting_a_variant_changes_only_that_product() {
        let mut state = loaded(3, 1280.0);
        let before = state.selection().clone();

        let (effect, _) = state.handle_message(Message::VariantSelected {
            product: "ring-1".to_string(),
            variant: Variant::Rose,
        });

        assert_eq!(
            effect,
            Effect::LoadImages(vec!["https://cdn.test/ring-1-rose.jpg".to_string()])
        );
        assert_eq!(state.selection().selected("ring-1"), Some(&Variant::Rose));
        assert_eq!(state.selection().selected("ring-0"), Some(&Variant::Yellow));
        assert_eq!(before.selected("ring-1"), Some(&Variant::Yellow));

        let (again, _) = state.handle_message(Message::VariantSelected {
            product: "ring-1".to_string(),
            variant: Variant::Rose,
        });
        assert_eq!(again, Effect::None);
    }

    #[test]
    fn missing_variant_image_is_reported_once() {
        let mut collector = DiagnosticsCollector::default();
        let mut state = State::new();
        state.set_diagnostics(collector.handle());
        let _ = state.handle_message(Message::ViewportResized(1280.0));
        let _ = state.request_products();
        let _ = state.handle_message(Message::ProductsLoaded(Ok(vec![product(
            "solo",
            &["yellow"],
        )])));

        for _ in 0..2 {
            let (effect, _) = state.handle_message(Message::VariantSelected {
                product: "solo".to_string(),
                variant: Variant::from_tag("platinum"),
            });
            assert_eq!(effect, Effect::None);
        }
        collector.process_pending();

        let missing = collector
            .iter()
            .filter(|event| {
                matches!(
                    &event.kind,
                    DiagnosticEventKind::Warning { event } if event.warning_type == WarningType::MissingImage
                )
            })
            .count();
        assert_eq!(missing, 1);
    }

    #[test]
    fn navigation_is_clamped_and_fetches_new_images() {
        let mut state = loaded(6, 1280.0);

        let (effect, _) = state.handle_message(Message::NextSlide);
        assert_eq!(
            effect,
            Effect::LoadImages(vec!["https://cdn.test/ring-5-yellow.jpg".to_string()])
        );
        let _ = state.handle_message(Message::NextSlide);
        let (at_end, _) = state.handle_message(Message::NextSlide);
        assert_eq!(at_end, Effect::None);
        assert_eq!(state.carousel().start(), 2);

        let _ = state.handle_message(Message::GoToSlide(0));
        assert_eq!(state.carousel().start(), 0);
        let (at_start, _) = state.handle_message(Message::PreviousSlide);
        assert_eq!(at_start, Effect::None);
    }

    #[test]
    fn swipe_left_pages_forward() {
        let mut state = loaded(6, 500.0);
        let _ = state.handle_message(Message::PointerMoved(Point::new(300.0, 200.0)));
        let _ = state.handle_message(Message::PointerPressed);
        let _ = state.handle_message(Message::PointerMoved(Point::new(200.0, 205.0)));
        let _ = state.handle_message(Message::PointerReleased);
        assert_eq!(state.carousel().start(), 1);

        let _ = state.handle_message(Message::Scrolled(mouse::ScrollDelta::Lines {
            x: 0.0,
            y: 1.0,
        }));
        assert_eq!(state.carousel().start(), 0);
    }

    #[test]
    fn image_results_update_cache() {
        let mut state = loaded(1, 500.0);
        let ok_url = "https://cdn.test/ring-0-yellow.jpg".to_string();
        let _ = state.handle_message(Message::ImageLoaded {
            url: ok_url.clone(),
            result: Ok(ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])),
            duration_ms: 3,
        });
        assert!(matches!(state.image(&ok_url), Some(ImageEntry::Ready(_))));

        let bad_url = "https://cdn.test/broken.jpg".to_string();
        let _ = state.handle_message(Message::ImageLoaded {
            url: bad_url.clone(),
            result: Err(Error::Image("truncated".to_string())),
            duration_ms: 3,
        });
        assert!(matches!(state.image(&bad_url), Some(ImageEntry::Failed)));
    }

    #[test]
    fn narrowing_window_keeps_start_in_range() {
        let mut state = loaded(6, 500.0);
        let _ = state.handle_message(Message::GoToSlide(5));
        let _ = state.handle_message(Message::ViewportResized(1280.0));
        assert_eq!(state.carousel().start(), 2);
    }
}
