// SPDX-License-Identifier: MPL-2.0
//! Full-screen lightbox with zoom, pan, and keyboard navigation.
//!
//! Opens over the page with the whole gallery (renders first, then plans).
//! Zoom is stepped by wheel or toolbar buttons and clamped to 1x-3x; panning
//! is available once zoomed in. Changing the displayed image resets both.

use crate::config::{BUTTON_ZOOM_STEP, MIN_ZOOM_LEVEL, WHEEL_ZOOM_STEP};
use crate::content::{self, ImageEntry};
use crate::i18n::fluent::I18n;
use crate::ui::components::placeholder;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::state::{DragState, ZoomLevel};
use crate::ui::{format, icons, styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, mouse_area, text, tooltip, Container, Row, Space, Stack};
use iced::{keyboard, mouse, ContentFit, Element, Length, Padding, Point, Vector};

/// Nominal size of the image viewport before zoom is applied.
const CANVAS_WIDTH: f32 = 880.0;
const CANVAS_HEIGHT: f32 = 560.0;

/// Lightbox state.
#[derive(Debug, Clone)]
pub struct State {
    images: Vec<ImageEntry>,
    index: usize,
    zoom: ZoomLevel,
    offset: Vector,
    drag: DragState,
    cursor_position: Option<Point>,
    is_open: bool,
}

/// Messages emitted by the lightbox widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Next,
    Previous,
    ZoomIn,
    ZoomOut,
    ResetView,
    /// Click on the dimmed area around the content.
    BackdropPressed,
    /// Click on the content itself; swallowed so it does not close.
    ContentPressed,
    /// Window event routed here while the lightbox is open.
    RawEvent(iced::Event),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The lightbox closed; the page scroll lock can be released.
    Closed,
}

impl State {
    #[must_use]
    pub fn new(images: Vec<ImageEntry>) -> Self {
        Self {
            images,
            index: 0,
            zoom: ZoomLevel::default(),
            offset: Vector::default(),
            drag: DragState::default(),
            cursor_position: None,
            is_open: false,
        }
    }

    /// Opens the lightbox at the given image, with zoom and pan reset.
    ///
    /// Out-of-range indices wrap into the gallery. An empty gallery stays
    /// closed.
    pub fn open(&mut self, start_index: usize) {
        if self.images.is_empty() {
            return;
        }
        self.index = start_index % self.images.len();
        self.reset_view();
        self.drag.stop();
        self.is_open = true;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Close | Message::BackdropPressed => self.close(),
            Message::ContentPressed => Event::None,
            Message::Next => {
                self.next();
                Event::None
            }
            Message::Previous => {
                self.previous();
                Event::None
            }
            Message::ZoomIn => {
                self.zoom = self.zoom.zoom_in(BUTTON_ZOOM_STEP);
                Event::None
            }
            Message::ZoomOut => {
                self.zoom = self.zoom.zoom_out(BUTTON_ZOOM_STEP);
                Event::None
            }
            Message::ResetView => {
                self.reset_view();
                Event::None
            }
            Message::RawEvent(event) => self.handle_raw_event(event),
        }
    }

    fn close(&mut self) -> Event {
        if !self.is_open {
            return Event::None;
        }
        self.is_open = false;
        self.drag.stop();
        Event::Closed
    }

    fn next(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.images.len();
        self.reset_view();
    }

    fn previous(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.index = (self.index + self.images.len() - 1) % self.images.len();
        self.reset_view();
    }

    fn reset_view(&mut self) {
        self.zoom = ZoomLevel::default();
        self.offset = Vector::default();
    }

    pub(crate) fn handle_raw_event(&mut self, event: iced::Event) -> Event {
        if !self.is_open {
            return Event::None;
        }

        match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) => self.handle_key(named),
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                self.handle_wheel_zoom(delta);
                Event::None
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = self.cursor_position {
                    self.handle_mouse_button_pressed(position);
                }
                Event::None
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.drag.stop();
                Event::None
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor_position = Some(position);
                if self.drag.is_dragging {
                    if let Some(offset) = self.drag.calculate_offset(position) {
                        self.offset = offset;
                    }
                }
                Event::None
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                self.cursor_position = None;
                self.drag.stop();
                Event::None
            }
            _ => Event::None,
        }
    }

    fn handle_key(&mut self, key: keyboard::key::Named) -> Event {
        match key {
            keyboard::key::Named::Escape => self.close(),
            keyboard::key::Named::ArrowRight => {
                self.next();
                Event::None
            }
            keyboard::key::Named::ArrowLeft => {
                self.previous();
                Event::None
            }
            _ => Event::None,
        }
    }

    /// One wheel notch steps the zoom by a fixed amount, regardless of how
    /// far the platform reports the wheel travelled.
    fn handle_wheel_zoom(&mut self, delta: mouse::ScrollDelta) {
        let steps = scroll_steps(&delta);
        if steps.abs() < f32::EPSILON {
            return;
        }

        self.zoom = if steps > 0.0 {
            self.zoom.zoom_in(WHEEL_ZOOM_STEP)
        } else {
            self.zoom.zoom_out(WHEEL_ZOOM_STEP)
        };
    }

    fn handle_mouse_button_pressed(&mut self, position: Point) {
        // Panning only applies to a zoomed-in image.
        if self.zoom.factor() <= MIN_ZOOM_LEVEL {
            return;
        }
        self.drag.start(position, self.offset);
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let backdrop = mouse_area(
            Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::overlay::backdrop),
        )
        .on_press(Message::BackdropPressed);

        let content_interaction = if self.drag.is_dragging {
            mouse::Interaction::Grabbing
        } else if self.zoom.factor() > MIN_ZOOM_LEVEL {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        };

        let content = mouse_area(self.image_canvas(i18n))
            .on_press(Message::ContentPressed)
            .interaction(content_interaction);

        let content_layer = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);

        Stack::new()
            .push(backdrop)
            .push(content_layer)
            .push(self.nav_control(
                icons::chevron_left(),
                Message::Previous,
                Horizontal::Left,
                i18n.tr("lightbox-previous"),
            ))
            .push(self.nav_control(
                icons::chevron_right(),
                Message::Next,
                Horizontal::Right,
                i18n.tr("lightbox-next"),
            ))
            .push(self.close_control(i18n))
            .push(self.toolbar(i18n))
            .into()
    }

    fn image_canvas<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let Some(entry) = self.images.get(self.index) else {
            return placeholder::view(i18n.tr("lightbox-missing-image"));
        };

        let zoomed_width = CANVAS_WIDTH * self.zoom.factor();
        let zoomed_height = CANVAS_HEIGHT * self.zoom.factor();

        let picture: Element<'a, Message> = match content::image_handle(entry.file) {
            Some(handle) => image(handle)
                .width(Length::Fixed(zoomed_width))
                .height(Length::Fixed(zoomed_height))
                .content_fit(ContentFit::Contain)
                .into(),
            None => Container::new(placeholder::view(i18n.tr(entry.label_key)))
                .width(Length::Fixed(zoomed_width))
                .height(Length::Fixed(zoomed_height))
                .into(),
        };

        Container::new(picture)
            .width(Length::Fixed(CANVAS_WIDTH))
            .height(Length::Fixed(CANVAS_HEIGHT))
            .padding(pan_padding(self.offset))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .clip(true)
            .into()
    }

    fn close_control<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let close = button(icons::sized(icons::cross(), sizing::ICON_MD))
            .padding(spacing::XS)
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_SUBTLE,
                opacity::OVERLAY_MEDIUM,
            ))
            .on_press(Message::Close);

        Container::new(styles::tooltip::styled(
            close,
            i18n.tr("lightbox-close"),
            tooltip::Position::Bottom,
        ))
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Right)
        .into()
    }

    fn nav_control<'a>(
        &self,
        glyph: iced::widget::Text<'a>,
        message: Message,
        side: Horizontal,
        tip: String,
    ) -> Element<'a, Message> {
        let arrow = button(glyph.size(typography::TITLE_LG))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_SUBTLE,
                opacity::OVERLAY_MEDIUM,
            ))
            .on_press(message);

        Container::new(styles::tooltip::styled(arrow, tip, tooltip::Position::Top))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(side)
            .align_y(Vertical::Center)
            .into()
    }

    fn toolbar<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let control_style = || {
            styles::button::overlay(
                palette::WHITE,
                opacity::TRANSPARENT,
                opacity::OVERLAY_MEDIUM,
            )
        };

        let zoom_out = styles::tooltip::styled(
            button(icons::sized(icons::minus(), sizing::ICON_SM))
                .padding(spacing::XXS)
                .style(control_style())
                .on_press(Message::ZoomOut),
            i18n.tr("lightbox-zoom-out"),
            tooltip::Position::Top,
        );

        let readout = text(format::zoom_percent(self.zoom.factor()))
            .size(typography::BODY)
            .color(palette::WHITE);

        let zoom_in = styles::tooltip::styled(
            button(icons::sized(icons::plus(), sizing::ICON_SM))
                .padding(spacing::XXS)
                .style(control_style())
                .on_press(Message::ZoomIn),
            i18n.tr("lightbox-zoom-in"),
            tooltip::Position::Top,
        );

        let reset = button(
            text(i18n.tr("lightbox-reset"))
                .size(typography::BODY)
                .color(palette::WHITE),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(control_style())
        .on_press(Message::ResetView);

        let current = (self.index + 1).to_string();
        let total = self.images.len().to_string();
        let counter = text(i18n.tr_with_args(
            "lightbox-counter",
            &[("current", current.as_str()), ("total", total.as_str())],
        ))
        .size(typography::BODY)
        .color(palette::WHITE);

        let bar = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(zoom_out)
            .push(readout)
            .push(zoom_in)
            .push(reset)
            .push(Space::new().width(Length::Fixed(spacing::LG)))
            .push(counter);

        Container::new(
            Container::new(bar)
                .padding([spacing::XS, spacing::MD])
                .style(styles::overlay::indicator(radius::FULL)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(content::lightbox_images())
    }
}

/// Translation of a centered child via one-sided padding. The centering
/// splits any extra padding in half, so doubling the offset gives a
/// pixel-exact shift. Each side stays non-negative.
fn pan_padding(offset: Vector) -> Padding {
    Padding {
        top: (2.0 * offset.y).max(0.0),
        right: (-2.0 * offset.x).max(0.0),
        bottom: (-2.0 * offset.y).max(0.0),
        left: (2.0 * offset.x).max(0.0),
    }
}

/// Normalizes mouse wheel units (lines vs. pixels) into abstract step values
/// so zooming feels consistent across platforms.
fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}

const _: () = {
    assert!(CANVAS_WIDTH > 0.0);
    assert!(CANVAS_HEIGHT > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_ZOOM_LEVEL;

    fn gallery(count: usize) -> Vec<ImageEntry> {
        content::lightbox_images().into_iter().take(count).collect()
    }

    fn wheel(y: f32) -> iced::Event {
        iced::Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y },
        })
    }

    fn press() -> iced::Event {
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    fn release() -> iced::Event {
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    fn cursor(x: f32, y: f32) -> iced::Event {
        iced::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        })
    }

    #[test]
    fn open_starts_at_index_with_view_reset() {
        let mut state = State::new(gallery(5));
        state.open(2);

        assert!(state.is_open());
        assert_eq!(state.current_index(), 2);
        assert_eq!(state.zoom(), ZoomLevel::default());
        assert_eq!(state.offset(), Vector::default());
    }

    #[test]
    fn open_on_empty_gallery_stays_closed() {
        let mut state = State::new(Vec::new());
        state.open(0);
        assert!(!state.is_open());
    }

    #[test]
    fn open_wraps_out_of_range_start_index() {
        let mut state = State::new(gallery(3));
        state.open(7);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn navigation_wraps_in_both_directions() {
        let mut state = State::new(gallery(5));
        state.open(0);

        state.update(Message::Previous);
        assert_eq!(state.current_index(), 4);

        state.update(Message::Next);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn changing_image_resets_zoom_and_pan() {
        let mut state = State::new(gallery(3));
        state.open(0);

        state.update(Message::ZoomIn);
        state.handle_raw_event(cursor(100.0, 100.0));
        state.handle_raw_event(press());
        state.handle_raw_event(cursor(140.0, 120.0));
        assert_ne!(state.offset(), Vector::default());

        state.update(Message::Next);
        assert_eq!(state.zoom(), ZoomLevel::default());
        assert_eq!(state.offset(), Vector::default());
    }

    #[test]
    fn wheel_zoom_steps_and_saturates() {
        let mut state = State::new(gallery(3));
        state.open(0);

        state.handle_raw_event(wheel(1.0));
        assert!((state.zoom().factor() - (1.0 + WHEEL_ZOOM_STEP)).abs() < 1e-5);

        for _ in 0..50 {
            state.handle_raw_event(wheel(1.0));
        }
        assert_eq!(state.zoom().factor(), MAX_ZOOM_LEVEL);

        state.handle_raw_event(wheel(-1.0));
        assert!(state.zoom().factor() < MAX_ZOOM_LEVEL);
    }

    #[test]
    fn button_zoom_uses_coarser_step() {
        let mut state = State::new(gallery(3));
        state.open(0);

        state.update(Message::ZoomIn);
        assert!((state.zoom().factor() - (1.0 + BUTTON_ZOOM_STEP)).abs() < 1e-5);

        state.update(Message::ZoomOut);
        assert_eq!(state.zoom(), ZoomLevel::default());
    }

    #[test]
    fn pan_requires_zoom() {
        let mut state = State::new(gallery(3));
        state.open(0);

        state.handle_raw_event(cursor(100.0, 100.0));
        state.handle_raw_event(press());
        state.handle_raw_event(cursor(150.0, 150.0));
        assert_eq!(state.offset(), Vector::default());

        state.update(Message::ZoomIn);
        state.handle_raw_event(press());
        state.handle_raw_event(cursor(180.0, 160.0));
        assert_eq!(state.offset(), Vector::new(30.0, 10.0));
    }

    #[test]
    fn release_ends_pan() {
        let mut state = State::new(gallery(3));
        state.open(0);
        state.update(Message::ZoomIn);

        state.handle_raw_event(cursor(100.0, 100.0));
        state.handle_raw_event(press());
        state.handle_raw_event(cursor(120.0, 100.0));
        state.handle_raw_event(release());
        state.handle_raw_event(cursor(300.0, 300.0));

        assert_eq!(state.offset(), Vector::new(20.0, 0.0));
    }

    #[test]
    fn cursor_leaving_window_ends_pan() {
        let mut state = State::new(gallery(3));
        state.open(0);
        state.update(Message::ZoomIn);

        state.handle_raw_event(cursor(100.0, 100.0));
        state.handle_raw_event(press());
        state.handle_raw_event(iced::Event::Mouse(mouse::Event::CursorLeft));
        state.handle_raw_event(cursor(300.0, 300.0));

        assert_eq!(state.offset(), Vector::default());
    }

    #[test]
    fn pan_survives_zoom_changes() {
        let mut state = State::new(gallery(3));
        state.open(0);
        state.update(Message::ZoomIn);

        state.handle_raw_event(cursor(100.0, 100.0));
        state.handle_raw_event(press());
        state.handle_raw_event(cursor(150.0, 130.0));
        state.handle_raw_event(release());

        state.handle_raw_event(wheel(1.0));
        assert_eq!(state.offset(), Vector::new(50.0, 30.0));
    }

    #[test]
    fn reset_view_clears_zoom_and_pan() {
        let mut state = State::new(gallery(3));
        state.open(0);
        state.update(Message::ZoomIn);
        state.handle_raw_event(cursor(100.0, 100.0));
        state.handle_raw_event(press());
        state.handle_raw_event(cursor(160.0, 140.0));

        state.update(Message::ResetView);
        assert_eq!(state.zoom(), ZoomLevel::default());
        assert_eq!(state.offset(), Vector::default());
    }

    #[test]
    fn every_close_path_reports_closed() {
        let mut state = State::new(gallery(3));

        state.open(0);
        assert_eq!(state.update(Message::Close), Event::Closed);

        state.open(0);
        assert_eq!(state.update(Message::BackdropPressed), Event::Closed);

        state.open(0);
        assert_eq!(state.handle_key(keyboard::key::Named::Escape), Event::Closed);

        assert!(!state.is_open());
    }

    #[test]
    fn content_press_does_not_close() {
        let mut state = State::new(gallery(3));
        state.open(0);

        assert_eq!(state.update(Message::ContentPressed), Event::None);
        assert!(state.is_open());
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut state = State::new(gallery(5));
        state.open(2);

        state.handle_key(keyboard::key::Named::ArrowLeft);
        assert_eq!(state.current_index(), 1);

        state.handle_key(keyboard::key::Named::ArrowRight);
        state.handle_key(keyboard::key::Named::ArrowRight);
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn raw_events_are_ignored_while_closed() {
        let mut state = State::new(gallery(3));

        assert_eq!(state.handle_raw_event(wheel(1.0)), Event::None);
        assert_eq!(state.zoom(), ZoomLevel::default());
        assert_eq!(state.handle_key(keyboard::key::Named::Escape), Event::None);
    }

    #[test]
    fn pan_padding_maps_signs_to_sides() {
        let padding = pan_padding(Vector::new(10.0, -5.0));
        assert_eq!(padding.left, 20.0);
        assert_eq!(padding.right, 0.0);
        assert_eq!(padding.top, 0.0);
        assert_eq!(padding.bottom, 10.0);
    }
}
