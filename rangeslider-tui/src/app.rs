//! Application state: single-owner, main-thread only.
//!
//! The slider's `valueChanged` listener pushes into a shared queue that the
//! event loop drains after each input event.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use ratatui::layout::Rect;

use rangeslider_core::{RangeSelection, RangeSlider, SliderConfig};

use crate::theme::Theme;
use crate::ui::widgets::slider::CellGrid;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// A catalogue entry the price filter applies to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub price: f64,
}

pub const CATALOG: &[Product] = &[
    Product { name: "Espresso cup", price: 12.0 },
    Product { name: "Pour-over kettle", price: 48.0 },
    Product { name: "Hand grinder", price: 95.0 },
    Product { name: "Digital scale", price: 39.0 },
    Product { name: "Milk frother", price: 74.0 },
    Product { name: "Moka pot", price: 29.0 },
    Product { name: "Drip machine", price: 139.0 },
    Product { name: "Burr grinder", price: 219.0 },
    Product { name: "Cold brew tower", price: 185.0 },
    Product { name: "Espresso machine", price: 449.0 },
    Product { name: "Roaster", price: 389.0 },
    Product { name: "Knock box", price: 22.0 },
];

/// Configuration used when no `slider.toml` exists: a 0–500 price filter.
pub fn default_price_filter() -> SliderConfig {
    SliderConfig {
        minimum_value: 0.0,
        maximum_value: 500.0,
        lower_value: 50.0,
        upper_value: 350.0,
        ..SliderConfig::default()
    }
}

pub struct AppState {
    pub slider: RangeSlider,
    /// Configuration the slider was built from; `r` resets to it.
    pub config: SliderConfig,
    pub grid: CellGrid,
    pub theme: Theme,
    pub running: bool,
    pub status_message: Option<(String, StatusLevel)>,
    pub value_changed_total: usize,
    pub state_path: PathBuf,
    pending: Rc<RefCell<Vec<RangeSelection>>>,
}

impl AppState {
    pub fn new(config: SliderConfig, state_path: PathBuf) -> Result<Self> {
        let mut slider = config.build()?;
        let pending = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&pending);
        slider.on_value_changed(move |selection| sink.borrow_mut().push(selection));

        Ok(Self {
            slider,
            config,
            grid: CellGrid::default(),
            theme: Theme::default(),
            running: true,
            status_message: None,
            value_changed_total: 0,
            state_path,
            pending,
        })
    }

    /// Record where the slider was laid out; resizes the control when the area changes.
    pub fn layout(&mut self, slider_area: Rect) {
        if self.grid.area == slider_area {
            return;
        }
        self.grid = CellGrid::new(slider_area);
        let (width, height) = self.grid.size_px();
        self.slider.on_bounds_changed(width, height);
    }

    /// Consume queued `valueChanged` notifications. Returns the latest, if any.
    pub fn drain_changes(&mut self) -> Option<RangeSelection> {
        let mut pending = self.pending.borrow_mut();
        self.value_changed_total += pending.len();
        pending.drain(..).last()
    }

    pub fn selection(&self) -> RangeSelection {
        self.slider.selection()
    }

    /// Catalogue entries inside the selected price range.
    pub fn matching_products(&self) -> Vec<Product> {
        let selection = self.selection();
        CATALOG
            .iter()
            .filter(|p| p.price >= selection.lower && p.price <= selection.upper)
            .copied()
            .collect()
    }

    /// Restore the configured selection.
    pub fn reset(&mut self) {
        match self.slider.apply_config(&self.config) {
            Ok(_) => self.set_status("Selection reset"),
            Err(e) => self.set_error(format!("Reset failed: {e}")),
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}
