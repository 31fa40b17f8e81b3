//! A mounted grid: navigation, gestures, overlay and content for one view.
//!
//! `GridView` is the single owner of all mutable grid state. Host input
//! reaches it through [`InputSink`]; renderers read [`VisibleGrid`] and the
//! sidebar entries. Discrete controls apply immediately and drop any
//! partial wheel gesture. Dropping the view cancels its cooldown.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use memgrid_types::config::GridConfig;
use memgrid_types::error::Result;
use memgrid_types::input::{Button, InputEvent};

use crate::cursor::Cursor;
use crate::drag::{Track, TrackDrag};
use crate::layout::GridLayout;
use crate::memory::{Memory, MemoryEdit, MemoryStore};
use crate::navigator::{GridNavigator, NavCommand, SlotActivation};
use crate::overlay::Overlay;
use crate::router::{InputRouter, InputSink, SinkRef, Subscription};
use crate::slot::{GlobalSlotId, SlotAddress};
use crate::visible::{SidebarEntry, VisibleGrid, sidebar_entries};
use crate::wheel::WheelTranslator;


pub struct GridView {
    navigator: GridNavigator,
    wheel: WheelTranslator,
    category_track: Option<TrackDrag>,
    item_track: Option<TrackDrag>,
    overlay: Overlay,
    store: MemoryStore,
    last_tick_ms: Option<u64>,
}

impl GridView {
    /// Validate `config` and mount a view with placeholder content.
    pub fn mount(config: &GridConfig) -> Result<Self> {
        let layout = GridLayout::from_config(config)?;
        Ok(Self::new(layout))
    }

    pub fn new(layout: GridLayout) -> Self {
        let store = MemoryStore::placeholders(&layout);
        let wheel = WheelTranslator::new(layout.wheel);
        let navigator = GridNavigator::new(layout);
        log::info!(
            "Grid view mounted: {} categories x {} items at {:?}",
            navigator.layout().category_count(),
            navigator.layout().items_per_category(),
            navigator.cursor(),
        );
        Self {
            navigator,
            wheel,
            category_track: None,
            item_track: None,
            overlay: Overlay::Closed,
            store,
            last_tick_ms: None,
        }
    }

    pub fn layout(&self) -> &GridLayout {
        self.navigator.layout()
    }

    pub fn cursor(&self) -> Cursor {
        self.navigator.cursor()
    }

    pub fn navigator(&self) -> &GridNavigator {
        &self.navigator
    }

    pub fn wheel(&self) -> &WheelTranslator {
        &self.wheel
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Editable draft of the open overlay.
    pub fn draft_mut(&mut self) -> Option<&mut MemoryEdit> {
        self.overlay.draft_mut()
    }

    pub fn category_track(&self) -> Option<&TrackDrag> {
        self.category_track.as_ref()
    }

    pub fn item_track(&self) -> Option<&TrackDrag> {
        self.item_track.as_ref()
    }

    /// Place the two slider tracks on screen.
    pub fn set_tracks(&mut self, category: Track, item: Track) {
        let cursor = self.cursor();
        let category_count = self.layout().category_count();
        let items_per_category = self.layout().items_per_category();
        self.category_track = Some(TrackDrag::new(category, category_count, cursor.category));
        self.item_track = Some(TrackDrag::new(item, items_per_category, cursor.item));
    }

    pub fn visible_grid(&self) -> VisibleGrid {
        VisibleGrid::compute(self.layout(), self.cursor())
    }

    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        sidebar_entries(self.layout(), self.cursor())
    }

    /// Content for the tile at `addr`, if the tile is inside the grid.
    pub fn memory_at(&self, addr: SlotAddress) -> Option<&Memory> {
        let slot = self.layout().resolve(self.cursor(), addr)?;
        self.store.get(slot)
    }

    pub fn active_memory(&self) -> Option<&Memory> {
        self.memory_at(SlotAddress::CENTER)
    }

    /// Apply a discrete command (button, key, click, drag jump).
    /// Returns `true` if the cursor moved.
    pub fn command(&mut self, command: NavCommand) -> bool {
        if let NavCommand::ActivateSlot(addr) = command {
            return matches!(self.activate_slot(addr), SlotActivation::Moved(_));
        }
        self.wheel.reset_accumulation();
        self.navigate(command)
    }

    /// Click on a tile: move to it, or open the overlay for the center.
    pub fn activate_slot(&mut self, addr: SlotAddress) -> SlotActivation {
        self.wheel.reset_accumulation();
        let outcome = self.navigator.activate_slot(addr);
        match outcome {
            SlotActivation::Moved(_) => self.sync_tracks(),
            SlotActivation::OpenDetail(_) => {
                self.open_detail();
            },
            SlotActivation::Ignored => {},
        }
        outcome
    }

    /// Open the overlay on the active tile and suspend wheel navigation.
    /// A slider drag in progress ends here; its release goes to the overlay.
    pub fn open_detail(&mut self) -> bool {
        let slot = self.navigator.active_slot();
        if !self.overlay.open(slot, &self.store) {
            return false;
        }
        self.wheel.suspend();
        self.wheel.reset_accumulation();
        self.on_pointer_up();
        log::debug!("Detail overlay opened on slot {slot}");
        true
    }

    /// Discard the overlay draft. Wheel input resumes immediately.
    pub fn close_detail(&mut self) {
        self.overlay.close();
        self.wheel.resume();
    }

    /// Save the overlay draft into the store and close.
    pub fn save_detail(&mut self) -> Result<Option<GlobalSlotId>> {
        let saved = self.overlay.save(&mut self.store);
        self.wheel.resume();
        saved
    }

    /// Host clock advanced: expire the cooldown and animate handles.
    pub fn tick(&mut self, now_ms: u64) {
        self.wheel.tick(now_ms);
        let dt = now_ms.saturating_sub(self.last_tick_ms.unwrap_or(now_ms));
        self.last_tick_ms = Some(now_ms);
        let dt = u32::try_from(dt).unwrap_or(u32::MAX);
        for track in [self.category_track.as_mut(), self.item_track.as_mut()]
            .into_iter()
            .flatten()
        {
            track.tick(dt);
        }
    }

    fn navigate(&mut self, command: NavCommand) -> bool {
        let moved = self.navigator.apply(command);
        if moved {
            self.sync_tracks();
        }
        moved
    }

    fn sync_tracks(&mut self) {
        let cursor = self.navigator.cursor();
        if let Some(track) = self.category_track.as_mut() {
            track.sync(cursor.category);
        }
        if let Some(track) = self.item_track.as_mut() {
            track.sync(cursor.item);
        }
    }

    fn on_wheel(&mut self, dx: f32, dy: f32, timestamp_ms: u64) -> bool {
        match self.wheel.feed(dx, dy, timestamp_ms) {
            Some(command) => {
                self.navigate(command);
                true
            },
            None => !self.wheel.is_suspended(),
        }
    }

    fn on_pointer_down(&mut self, x: f32, y: f32) -> bool {
        let jump = self
            .category_track
            .as_mut()
            .and_then(|t| t.press(x, y))
            .or_else(|| self.item_track.as_mut().and_then(|t| t.press(x, y)));
        match jump {
            Some(command) => {
                self.command(command);
                true
            },
            None => false,
        }
    }

    fn on_pointer_move(&mut self, x: f32, y: f32) -> bool {
        let jump = [self.category_track.as_mut(), self.item_track.as_mut()]
            .into_iter()
            .flatten()
            .find_map(|t| t.drag_to(x, y));
        match jump {
            Some(command) => {
                self.command(command);
                true
            },
            None => false,
        }
    }

    fn on_pointer_up(&mut self) -> bool {
        let mut released = false;
        for track in [self.category_track.as_mut(), self.item_track.as_mut()]
            .into_iter()
            .flatten()
        {
            released |= track.release();
        }
        if released {
            self.sync_tracks();
        }
        released
    }

    fn on_button(&mut self, button: Button) -> bool {
        let command = match button {
            Button::Up => NavCommand::PrevCategory,
            Button::Down => NavCommand::NextCategory,
            Button::Left => NavCommand::PrevItem,
            Button::Right => NavCommand::NextItem,
            Button::Confirm => return self.open_detail(),
            Button::Cancel => return false,
        };
        self.command(command);
        true
    }

    fn on_overlay_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::ButtonPress(Button::Cancel) => {
                self.close_detail();
                true
            },
            InputEvent::ButtonPress(Button::Confirm) => {
                if let Err(e) = self.save_detail() {
                    log::error!("Failed to save memory: {e}");
                }
                true
            },
            InputEvent::Tick { now_ms } => {
                self.tick(*now_ms);
                false
            },
            _ => false,
        }
    }

    /// Stop the cooldown and end any drag.
    fn cancel_gestures(&mut self) {
        if self.wheel.is_cooling() {
            log::debug!("Cancelling wheel cooldown on unmount");
        }
        self.wheel.cancel();
        for track in [self.category_track.as_mut(), self.item_track.as_mut()]
            .into_iter()
            .flatten()
        {
            track.release();
        }
    }
}

impl InputSink for GridView {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        if self.overlay.is_open() {
            return self.on_overlay_input(event);
        }
        match event {
            InputEvent::Wheel {
                dx,
                dy,
                timestamp_ms,
            } => self.on_wheel(*dx, *dy, *timestamp_ms),
            InputEvent::PointerDown { x, y } => self.on_pointer_down(*x, *y),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(*x, *y),
            InputEvent::PointerUp { .. } => self.on_pointer_up(),
            InputEvent::ButtonPress(button) => self.on_button(*button),
            InputEvent::Tick { now_ms } => {
                self.tick(*now_ms);
                false
            },
        }
    }
}

impl Drop for GridView {
    fn drop(&mut self) {
        self.cancel_gestures();
        log::info!("Grid view unmounted at {:?}", self.navigator.cursor());
    }
}

/// A view attached to a router for as long as this value lives.
///
/// Dropping it releases the subscription and cancels pending gestures,
/// even if a [`handle`](MountedGrid::handle) keeps the view itself alive.
pub struct MountedGrid {
    _subscription: Subscription,
    view: Rc<RefCell<GridView>>,
}

impl MountedGrid {
    pub fn mount(router: &InputRouter, view: GridView) -> Self {
        let view = Rc::new(RefCell::new(view));
        let subscription = router.subscribe(Rc::clone(&view) as SinkRef);
        Self {
            _subscription: subscription,
            view,
        }
    }

    pub fn view(&self) -> Ref<'_, GridView> {
        self.view.borrow()
    }

    pub fn view_mut(&self) -> RefMut<'_, GridView> {
        self.view.borrow_mut()
    }

    /// Shared handle to the view; keeps it alive past unmount.
    pub fn handle(&self) -> Rc<RefCell<GridView>> {
        Rc::clone(&self.view)
    }
}

impl Drop for MountedGrid {
    fn drop(&mut self) {
        match self.view.try_borrow_mut() {
            Ok(mut view) => view.cancel_gestures(),
            Err(_) => log::warn!("Grid view borrowed during unmount; gestures not cancelled"),
        }
    }
}
