// SPDX-License-Identifier: MPL-2.0
//! A wrapper around a `Scrollable` that reports its geometry when the content
//! fits without scrolling.
//!
//! `iced` only notifies `on_scroll` for content that overflows, so a short
//! policy would never produce a sample. The probe fills that gap: on each
//! redraw it compares the scrollable's bounds with its content bounds and
//! publishes a zero-offset [`ScrollSample`] when nothing can scroll. A new
//! `generation` forces a fresh report even if the sizes did not change.

use crate::application::port::{ScrollSample, VisibilityRoot};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{window, Element, Event, Length, Rectangle, Size};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct ProbeState {
    last: Option<Measurement>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Measurement {
    generation: u64,
    viewport_height: f32,
    content_height: f32,
}

pub struct ScrollProbe<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    root: VisibilityRoot,
    generation: u64,
    on_fit: Box<dyn Fn(ScrollSample) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> ScrollProbe<'a, Message, Theme, Renderer> {
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        root: VisibilityRoot,
        generation: u64,
        on_fit: impl Fn(ScrollSample) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            root,
            generation,
            on_fit: Box::new(on_fit),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ScrollProbe<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<ProbeState>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(ProbeState::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if matches!(event, Event::Window(window::Event::RedrawRequested(_))) {
            let viewport_height = layout.bounds().height;
            let content_height = layout
                .children()
                .next()
                .map_or(viewport_height, |content| content.bounds().height);
            let measurement = Measurement {
                generation: self.generation,
                viewport_height,
                content_height,
            };

            let state = tree.state.downcast_mut::<ProbeState>();
            if let Some(sample) = fitting_sample(state, measurement, self.root) {
                shell.publish((self.on_fit)(sample));
            }
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<ScrollProbe<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(probe: ScrollProbe<'a, Message, Theme, Renderer>) -> Self {
        Self::new(probe)
    }
}

/// Wraps a scrollable so non-overflowing content still yields a sample.
pub fn scroll_probe<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    root: VisibilityRoot,
    generation: u64,
    on_fit: impl Fn(ScrollSample) -> Message + 'a,
) -> ScrollProbe<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    ScrollProbe::new(content, root, generation, on_fit)
}

/// Records `measurement` and returns a sample if it is new and fits.
fn fitting_sample(
    state: &mut ProbeState,
    measurement: Measurement,
    root: VisibilityRoot,
) -> Option<ScrollSample> {
    if state.last == Some(measurement) {
        return None;
    }
    state.last = Some(measurement);

    let sample = ScrollSample {
        root,
        viewport_height: measurement.viewport_height,
        content_height: measurement.content_height,
        offset_y: 0.0,
    };
    (!sample.overflows()).then_some(sample)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(generation: u64, content_height: f32) -> Measurement {
        Measurement {
            generation,
            viewport_height: 500.0,
            content_height,
        }
    }

    #[test]
    fn fitting_content_is_reported_once() {
        let mut state = ProbeState::default();
        let sample = fitting_sample(&mut state, measurement(1, 300.0), VisibilityRoot::ContentPane)
            .expect("fitting content should be reported");
        assert_eq!(sample.offset_y, 0.0);
        assert_eq!(sample.root, VisibilityRoot::ContentPane);

        assert!(
            fitting_sample(&mut state, measurement(1, 300.0), VisibilityRoot::ContentPane)
                .is_none()
        );
    }

    #[test]
    fn new_generation_reports_again() {
        let mut state = ProbeState::default();
        let _ = fitting_sample(&mut state, measurement(1, 300.0), VisibilityRoot::Viewport);
        assert!(
            fitting_sample(&mut state, measurement(2, 300.0), VisibilityRoot::Viewport).is_some()
        );
    }

    #[test]
    fn overflowing_content_is_left_to_on_scroll() {
        let mut state = ProbeState::default();
        assert!(
            fitting_sample(&mut state, measurement(1, 900.0), VisibilityRoot::ContentPane)
                .is_none()
        );
        assert_eq!(state.last, Some(measurement(1, 900.0)));
    }
}
