#![forbid(unsafe_code)]

//! Scene controller tying layout, responsive sizing, and scrolling together.
//!
//! A [`DialogueView`] owns the scene and the loaded content. Every relayout
//! (on load and on resize) follows the same order:
//!
//! 1. Pick the column width from the viewport width.
//! 2. Lay out and mount the dialogue, obtaining its total height.
//! 3. Reset the content node to its rest offset (`padding`).
//! 4. Detach and drop the previous scroller, then attach a fresh one built
//!    from the new height, on narrow viewports only.

use chatter_core::event::TouchEvent;
use chatter_core::geometry::{Point, Rect, Size};
use chatter_core::surface::InputSurface;
use chatter_render::{NodeId, Scene};
use chatter_text::TextMeasurer;

use crate::dialogue::{Columns, DialogueMetrics, DialogueRenderer};
use crate::payload::DialogueContent;
use crate::responsive::ColumnPolicy;
use crate::scroll::{EventOutcome, ScrollConfig, ScrollViewport};

/// Dialogue scene with responsive layout and touch scrolling.
#[derive(Debug)]
pub struct DialogueView<M> {
    scene: Scene,
    content: NodeId,
    renderer: DialogueRenderer<M>,
    policy: ColumnPolicy,
    scroll_config: ScrollConfig,
    data: Option<DialogueContent>,
    viewport: Size,
    scroller: Option<ScrollViewport>,
    content_height: f32,
}

impl<M: TextMeasurer> DialogueView<M> {
    pub fn new(measurer: M, viewport: Size) -> Self {
        let mut scene = Scene::new();
        let root = scene.root();
        let content = scene.add_group(root, Point::ZERO).unwrap_or(root);
        Self {
            scene,
            content,
            renderer: DialogueRenderer::new(measurer),
            policy: ColumnPolicy::default(),
            scroll_config: ScrollConfig::default(),
            data: None,
            viewport,
            scroller: None,
            content_height: 0.0,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ColumnPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: DialogueMetrics) -> Self {
        self.renderer = self.renderer.with_metrics(metrics);
        self
    }

    #[must_use]
    pub fn with_scroll_config(mut self, config: ScrollConfig) -> Self {
        self.scroll_config = config;
        self
    }

    /// Replace the displayed content and lay it out.
    pub fn load(&mut self, surface: &mut dyn InputSurface, content: DialogueContent) {
        self.data = Some(content);
        self.relayout(surface);
    }

    /// Apply a new viewport size. Lays out again only if content is loaded.
    pub fn resize(&mut self, surface: &mut dyn InputSurface, viewport: Size) {
        self.viewport = viewport;
        if self.data.is_some() {
            self.relayout(surface);
        }
    }

    /// Forward a touch event to the active scroller, if any.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> EventOutcome {
        match self.scroller.as_mut() {
            Some(scroller) => scroller.handle_touch(event, &mut self.scene),
            None => EventOutcome::Ignored,
        }
    }

    /// Detach the scroller. The scene keeps its last layout.
    pub fn teardown(&mut self, surface: &mut dyn InputSurface) {
        if let Some(mut scroller) = self.scroller.take() {
            scroller.detach(surface);
        }
    }

    /// Visible region of the content for the current viewport.
    #[must_use]
    pub fn clip_rect(&self) -> Rect {
        self.policy.clip_rect(self.viewport)
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn content_node(&self) -> NodeId {
        self.content
    }

    /// Total height of the last layout; zero before anything is loaded.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    #[must_use]
    pub fn scroller(&self) -> Option<&ScrollViewport> {
        self.scroller.as_ref()
    }

    #[must_use]
    pub fn policy(&self) -> &ColumnPolicy {
        &self.policy
    }

    fn relayout(&mut self, surface: &mut dyn InputSurface) {
        let Some(data) = self.data.as_ref() else {
            return;
        };
        let width = self.viewport.width;
        let columns = Columns::new(self.policy.column_width(width), width);

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "dialogue_relayout",
            viewport_width = width,
            viewport_height = self.viewport.height,
            column = columns.available_width
        )
        .entered();

        self.content_height = self.renderer.render(
            &mut self.scene,
            self.content,
            &data.entries,
            columns,
            &data.avatars,
            &data.icons,
        );
        self.scene.set_y(self.content, self.policy.padding);

        if let Some(mut old) = self.scroller.take() {
            old.detach(surface);
        }
        if self.policy.touch_scroll_enabled(width) {
            let mut scroller = ScrollViewport::new(
                self.content,
                self.viewport.height,
                self.policy.padding,
                self.content_height,
            )
            .with_config(self.scroll_config);
            scroller.attach(surface);
            self.scroller = Some(scroller);
        }
    }
}
