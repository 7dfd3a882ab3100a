use std::collections::VecDeque;

use egui::{PointerButton, Pos2, Response};

use crate::canvas::CanvasState;
use crate::stroke::{Point, Segment};

/// Pointer activity on the canvas, independent of the windowing toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer moved to this position with the drawing button held
    Drag(Point),
    /// The drawing button was released, ending the stroke
    Release,
}

/// Anything that can hand pointer events to the input handler, one at a
/// time, in the order they happened.
pub trait PointerSource {
    fn next_event(&mut self) -> Option<PointerEvent>;
}

/// Where the handler is within a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    Drawing {
        last: Point,
    },
}

/// Turns drag samples into committed segments.
///
/// The first sample of a stroke only records where the stroke begins; each
/// later sample commits a segment from the previous sample with whatever pen
/// is active at that moment.
#[derive(Debug, Default)]
pub struct InputHandler {
    state: StrokeState,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    /// The last recorded point of the stroke in progress, if any
    pub fn last_point(&self) -> Option<Point> {
        match self.state {
            StrokeState::Idle => None,
            StrokeState::Drawing { last } => Some(last),
        }
    }

    /// Applies one event, returning the segment it committed if it committed one
    pub fn handle(&mut self, event: PointerEvent, canvas: &mut CanvasState) -> Option<Segment> {
        match event {
            PointerEvent::Drag(point) => {
                let committed = self
                    .last_point()
                    .map(|last| canvas.commit_segment(last, point));

                if committed.is_none() {
                    log::debug!("Stroke started at ({}, {})", point.x, point.y);
                }
                self.state = StrokeState::Drawing { last: point };
                committed
            }
            PointerEvent::Release => {
                if self.state != StrokeState::Idle {
                    log::debug!("Stroke finished");
                }
                self.state = StrokeState::Idle;
                None
            }
        }
    }

    /// Applies a whole sequence of events and collects the segments committed
    pub fn drive<I>(&mut self, events: I, canvas: &mut CanvasState) -> Vec<Segment>
    where
        I: IntoIterator<Item = PointerEvent>,
    {
        events
            .into_iter()
            .filter_map(|event| self.handle(event, canvas))
            .collect()
    }

    /// Drains everything the source has queued
    pub fn pump(&mut self, source: &mut dyn PointerSource, canvas: &mut CanvasState) -> Vec<Segment> {
        self.drive(std::iter::from_fn(|| source.next_event()), canvas)
    }
}

/// Maps a screen position to integer canvas pixels relative to the canvas'
/// top-left corner.
pub fn canvas_point(pos: Pos2, origin: Pos2) -> Point {
    let local = pos - origin;
    Point::new(local.x.floor() as i32, local.y.floor() as i32)
}

/// Collects primary-button drags on the canvas widget as pointer events.
///
/// A sample is queued only when the pointer lands on a new pixel, so a
/// button held still doesn't produce zero-length segments every frame.
#[derive(Debug, Default)]
pub struct EguiPointerSource {
    pending: VecDeque<PointerEvent>,
    last_sample: Option<Point>,
}

impl EguiPointerSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads this frame's interaction with the canvas widget
    pub fn observe(&mut self, response: &Response) {
        if response.dragged_by(PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                self.sample(canvas_point(pos, response.rect.min));
            }
        }

        if response.drag_stopped_by(PointerButton::Primary) {
            self.release();
        }
    }

    pub fn sample(&mut self, point: Point) {
        if self.last_sample != Some(point) {
            self.last_sample = Some(point);
            self.pending.push_back(PointerEvent::Drag(point));
        }
    }

    pub fn release(&mut self) {
        self.last_sample = None;
        self.pending.push_back(PointerEvent::Release);
    }
}

impl PointerSource for EguiPointerSource {
    fn next_event(&mut self) -> Option<PointerEvent> {
        self.pending.pop_front()
    }
}
