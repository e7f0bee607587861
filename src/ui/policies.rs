// SPDX-License-Identifier: MPL-2.0
//! Policies screen: tab selection, the reading pane and the agreement footer.
//!
//! The screen owns the reading gate for the tab on display. Every activation
//! (tab change, layout flip, returning from the payment screen) re-arms the
//! gate before a new sentinel observation is attached, then snaps the active
//! scrollable back to its start.

use crate::app::config::{ReadingConfig, DEFAULT_NARROW_BOTTOM_MARGIN, DEFAULT_VISIBILITY_THRESHOLD};
use crate::application::port::{
    ObservationId, ObserveOptions, RootMargin, ScrollSample, SentinelGeometry, VisibilityObserver,
    VisibilityRoot,
};
use crate::content::policies::{first_tab, find_tab, BodyLine, LocalizedSection};
use crate::content::{PolicyTab, POLICY_TABS};
use crate::i18n::Localizer;
use crate::infrastructure::GeometryObserver;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{ConsentRecord, ConsentScope, LayoutMode, ReadingGate, ReadingProgress};
use crate::ui::styles::{
    button as button_styles, container as container_styles, text as text_styles,
};
use crate::ui::text_alignment;
use crate::ui::widgets::scroll_probe;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{
    button, operation, progress_bar, Column, Container, Id, Row, Scrollable, Space, Text,
};
use iced::{Element, Length, Task};

/// Scrollable holding the policy text in the split layout.
pub const PANE_SCROLL_ID: &str = "policies-pane";

/// Scrollable holding the whole screen in the single layout.
pub const PAGE_SCROLL_ID: &str = "policies-page";

/// Padding around the policy text.
const PANE_PADDING: f32 = spacing::LG;

/// Vertical gap standing in for an empty policy line.
const GAP_HEIGHT: f32 = spacing::SM;

/// Distance between the sentinel and the end of the page in the single
/// layout: one column gap, the footer, then the bottom page padding.
const SINGLE_LAYOUT_TRAILING: f32 = spacing::LG + sizing::FOOTER_HEIGHT + spacing::LG;

/// Largest bottom margin that still lets the whole sentinel into the root
/// once the page is scrolled to its end.
const MAX_SINGLE_LAYOUT_MARGIN: f32 = SINGLE_LAYOUT_TRAILING - sizing::SENTINEL_HEIGHT;

const _: () = assert!(MAX_SINGLE_LAYOUT_MARGIN > 0.0);

/// Reading parameters taken from the settings file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingSettings {
    pub threshold: f32,
    pub narrow_bottom_margin: f32,
}

impl Default for ReadingSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
            narrow_bottom_margin: DEFAULT_NARROW_BOTTOM_MARGIN,
        }
    }
}

impl From<&ReadingConfig> for ReadingSettings {
    fn from(config: &ReadingConfig) -> Self {
        Self {
            threshold: config.visibility_threshold(),
            narrow_bottom_margin: config.narrow_bottom_margin(),
        }
    }
}

/// Contextual data needed to render the policies screen.
pub struct ViewContext<'a> {
    pub localizer: Localizer<'a>,
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(&'static str),
    Scrolled(ScrollSample),
    Agree,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Agreed,
}

/// Policies screen state.
#[derive(Debug)]
pub struct State<O = GeometryObserver> {
    selected: &'static PolicyTab,
    gate: ReadingGate,
    progress: ReadingProgress,
    consent: ConsentRecord,
    layout: LayoutMode,
    settings: ReadingSettings,
    observer: O,
}

impl State<GeometryObserver> {
    #[must_use]
    pub fn new(scope: ConsentScope, settings: ReadingSettings, layout: LayoutMode) -> Self {
        Self::with_observer(GeometryObserver::new(), scope, settings, layout)
    }
}

impl<O: VisibilityObserver> State<O> {
    /// Creates the screen with the first tab active and its gate armed.
    pub fn with_observer(
        observer: O,
        scope: ConsentScope,
        settings: ReadingSettings,
        layout: LayoutMode,
    ) -> Self {
        let mut state = Self {
            selected: first_tab(),
            gate: ReadingGate::new(),
            progress: ReadingProgress::default(),
            consent: ConsentRecord::new(scope),
            layout,
            settings,
            observer,
        };
        state.rearm();
        state
    }

    /// Re-arms the gate for the selected tab and scrolls back to the top.
    pub fn activate(&mut self) -> Task<Message> {
        self.rearm();
        operation::snap_to(
            Id::new(self.scroll_id()),
            RelativeOffset { x: 0.0, y: 0.0 },
        )
    }

    /// Detaches the sentinel observation when the screen is left.
    ///
    /// The gate keeps its state; [`State::activate`] re-arms it on return.
    pub fn deactivate(&mut self) {
        self.gate.deactivate(&mut self.observer);
    }

    /// Applies a new layout; a change of mode re-activates the tab.
    pub fn set_layout(&mut self, layout: LayoutMode) -> Task<Message> {
        if layout == self.layout {
            return Task::none();
        }
        tracing::debug!(?layout, "policies layout changed");
        self.layout = layout;
        self.activate()
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::SelectTab(id) => {
                let Some(tab) = find_tab(id) else {
                    tracing::warn!(tab = id, "ignoring unknown policy tab");
                    return (Event::None, Task::none());
                };
                self.selected = tab;
                tracing::debug!(tab = tab.id, "policy tab selected");
                (Event::None, self.activate())
            }
            Message::Scrolled(sample) => {
                self.handle_scroll(&sample);
                (Event::None, Task::none())
            }
            Message::Agree => {
                if self.can_agree() {
                    tracing::info!(tab = self.selected.id, "policy agreed");
                    (Event::Agreed, Task::none())
                } else {
                    (Event::None, Task::none())
                }
            }
        }
    }

    /// Feeds one scroll sample through the observer. Returns `true` if the
    /// gate opened.
    pub fn handle_scroll(&mut self, sample: &ScrollSample) -> bool {
        if sample.root != self.observe_options().root {
            return false;
        }
        self.progress.record(sample);

        let Some(change) = self.observer.process(sample) else {
            return false;
        };
        let opened = self.gate.handle_change(&change);
        if opened {
            self.consent.mark_read(self.selected.id);
        }
        opened
    }

    /// Observation parameters for the current layout.
    #[must_use]
    pub fn observe_options(&self) -> ObserveOptions {
        match self.layout {
            LayoutMode::Split => ObserveOptions {
                root: VisibilityRoot::ContentPane,
                threshold: self.settings.threshold,
                margin: RootMargin::ZERO,
                sentinel: SentinelGeometry {
                    height: sizing::SENTINEL_HEIGHT,
                    trailing: 0.0,
                },
            },
            LayoutMode::Single => ObserveOptions {
                root: VisibilityRoot::Viewport,
                threshold: self.settings.threshold,
                margin: RootMargin::bottom(
                    -self.settings.narrow_bottom_margin.min(MAX_SINGLE_LAYOUT_MARGIN),
                ),
                sentinel: SentinelGeometry {
                    height: sizing::SENTINEL_HEIGHT,
                    trailing: SINGLE_LAYOUT_TRAILING,
                },
            },
        }
    }

    /// Whether the agreement button is enabled.
    #[must_use]
    pub fn can_agree(&self) -> bool {
        self.consent
            .allows(self.gate.is_read(), POLICY_TABS.iter().map(|tab| tab.id))
    }

    #[must_use]
    pub fn selected(&self) -> &'static PolicyTab {
        self.selected
    }

    #[must_use]
    pub fn gate(&self) -> &ReadingGate {
        &self.gate
    }

    #[must_use]
    pub fn consent(&self) -> &ConsentRecord {
        &self.consent
    }

    #[must_use]
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress.fraction()
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn rearm(&mut self) {
        self.progress.reset();
        let options = self.observe_options();
        self.gate.activate(&mut self.observer, options);
    }

    fn scroll_id(&self) -> &'static str {
        match self.layout {
            LayoutMode::Split => PANE_SCROLL_ID,
            LayoutMode::Single => PAGE_SCROLL_ID,
        }
    }

    fn generation(&self) -> u64 {
        self.gate.observation().map_or(0, ObservationId::value)
    }

    /// Render the policies screen.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        match self.layout {
            LayoutMode::Split => self.view_split(ctx.localizer),
            LayoutMode::Single => self.view_single(ctx.localizer),
        }
    }

    fn view_split<'a>(&'a self, localizer: Localizer<'a>) -> Element<'a, Message> {
        let pane_content = Column::new()
            .push(Container::new(self.policy_body(localizer)).padding(PANE_PADDING))
            .push(sentinel());

        let pane = Scrollable::new(pane_content)
            .id(Id::new(PANE_SCROLL_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport| {
                Message::Scrolled(sample_from(VisibilityRoot::ContentPane, &viewport))
            });

        let reader = Column::new()
            .spacing(spacing::MD)
            .height(Length::Fill)
            .push(reading_progress(self.progress()))
            .push(
                Container::new(scroll_probe(
                    pane,
                    VisibilityRoot::ContentPane,
                    self.generation(),
                    Message::Scrolled,
                ))
                .height(Length::Fill)
                .style(container_styles::panel),
            )
            .push(self.footer(localizer));

        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .height(Length::Fill)
            .push(self.hero(localizer))
            .push(reader)
            .into()
    }

    fn view_single<'a>(&'a self, localizer: Localizer<'a>) -> Element<'a, Message> {
        let policy = Column::new()
            .push(Container::new(self.policy_body(localizer)).padding(PANE_PADDING))
            .push(sentinel());

        let page_content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(self.hero(localizer))
            .push(Container::new(policy).style(container_styles::panel))
            .push(self.footer(localizer));

        let page = Scrollable::new(page_content)
            .id(Id::new(PAGE_SCROLL_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport| Message::Scrolled(sample_from(VisibilityRoot::Viewport, &viewport)));

        Column::new()
            .height(Length::Fill)
            .push(reading_progress(self.progress()))
            .push(scroll_probe(
                page,
                VisibilityRoot::Viewport,
                self.generation(),
                Message::Scrolled,
            ))
            .into()
    }

    fn hero<'a>(&'a self, localizer: Localizer<'a>) -> Element<'a, Message> {
        let align = text_alignment(localizer.language());

        let heading = Column::new()
            .spacing(spacing::XS)
            .width(Length::Fill)
            .push(
                Text::new(localizer.tr("Live translation"))
                    .size(typography::CAPTION)
                    .width(Length::Fill)
                    .align_x(align),
            )
            .push(
                Text::new(localizer.tr("Service & Policy Selection"))
                    .size(typography::TITLE_LG)
                    .width(Length::Fill)
                    .align_x(align),
            )
            .push(
                Text::new(localizer.tr("Select a category and review the corresponding policy"))
                    .size(typography::BODY)
                    .width(Length::Fill)
                    .align_x(align),
            );

        let language_badge = Container::new(
            Text::new(localizer.language().to_string()).size(typography::BODY_SM),
        )
        .padding([spacing::XS, spacing::MD])
        .style(container_styles::chip(false));

        let top = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(heading)
            .push(language_badge);

        let tabs = POLICY_TABS.iter().fold(
            Row::new().spacing(spacing::SM),
            |row, tab| {
                let style = if tab.id == self.selected.id {
                    button_styles::selected
                } else {
                    button_styles::unselected
                };
                row.push(
                    button(Text::new(localizer.tr(tab.label)).size(typography::BODY_SM))
                        .padding([spacing::XS, spacing::MD])
                        .on_press(Message::SelectTab(tab.id))
                        .style(style),
                )
            },
        );

        Container::new(
            Column::new()
                .spacing(spacing::LG)
                .push(top)
                .push(tabs.wrap()),
        )
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(container_styles::hero)
        .into()
    }

    fn policy_body<'a>(&'a self, localizer: Localizer<'a>) -> Element<'a, Message> {
        let align = text_alignment(localizer.language());
        let tab = self.selected;

        let step_chip = Container::new(
            Text::new(localizer.tr("Step 1 · Review Policies")).size(typography::BODY_SM),
        )
        .padding([spacing::XS, spacing::MD])
        .style(container_styles::chip(false));

        let language_chip = Container::new(
            Text::new(format!(
                "{}: {}",
                localizer.tr("Language"),
                localizer.language().label()
            ))
            .size(typography::BODY_SM),
        )
        .padding([spacing::XS, spacing::MD])
        .style(container_styles::chip(false));

        let header = Column::new()
            .spacing(spacing::XS)
            .push(
                Text::new(localizer.tr(tab.label))
                    .size(typography::CAPTION)
                    .width(Length::Fill)
                    .align_x(align)
                    .style(text_styles::muted),
            )
            .push(
                Text::new(localizer.tr(tab.title))
                    .size(typography::TITLE_LG)
                    .width(Length::Fill)
                    .align_x(align),
            )
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(step_chip)
                    .push(language_chip)
                    .wrap(),
            );

        tab.sections
            .iter()
            .map(|section| section.localized(localizer))
            .fold(
                Column::new().spacing(spacing::XL).push(header),
                |column, section| column.push(section_view(section, align)),
            )
            .into()
    }

    fn footer<'a>(&'a self, localizer: Localizer<'a>) -> Element<'a, Message> {
        let unlocked = self.can_agree();

        let agree = button(
            Text::new(format!("✓  {}", localizer.tr("I AGREE TO THE POLICY")))
                .size(typography::TITLE_SM)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .on_press_maybe(unlocked.then_some(Message::Agree))
        .style(button_styles::primary);

        let mut content = Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(agree);
        if !unlocked {
            content = content.push(
                Text::new(localizer.tr("Please scroll to the bottom to continue"))
                    .size(typography::BODY_SM)
                    .style(text_styles::muted),
            );
        }

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::FOOTER_HEIGHT))
            .padding(spacing::MD)
            .align_y(Vertical::Center)
            .style(container_styles::footer)
            .into()
    }
}

fn section_view<'a>(section: LocalizedSection<'a>, align: Horizontal) -> Element<'a, Message> {
    let heading = Text::new(section.heading)
        .size(typography::BODY_SM)
        .width(Length::Fill)
        .align_x(align)
        .style(text_styles::muted);

    let body = section.lines.into_iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, line| match line {
            BodyLine::Text(line) => column.push(
                Text::new(line)
                    .size(typography::BODY_LG)
                    .width(Length::Fill)
                    .align_x(align),
            ),
            BodyLine::Gap => column.push(Space::new().height(Length::Fixed(GAP_HEIGHT))),
        },
    );

    Container::new(Column::new().spacing(spacing::MD).push(heading).push(body))
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(container_styles::section)
        .into()
}

/// End-of-content marker observed by the reading gate.
fn sentinel<'a>() -> Element<'a, Message> {
    Space::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SENTINEL_HEIGHT))
        .into()
}

fn reading_progress<'a>(fraction: f32) -> Element<'a, Message> {
    progress_bar(0.0..=1.0, fraction)
        .girth(sizing::PROGRESS_BAR_HEIGHT)
        .into()
}

fn sample_from(root: VisibilityRoot, viewport: &Viewport) -> ScrollSample {
    ScrollSample {
        root,
        viewport_height: viewport.bounds().height,
        content_height: viewport.content_bounds().height,
        offset_y: viewport.absolute_offset().y,
    }
}
