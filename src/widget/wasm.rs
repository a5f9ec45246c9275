//! JavaScript binding for [`GridWidget`].
//!
//! The renderer registers one element per cell and header, forwards pointer
//! and key events by coordinate, and receives batches of [`WidgetEvent`]s
//! through the render callback. Events are delivered after the internal
//! borrow is released, so the callback may call straight back into the
//! widget.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::{GridWidget, WidgetEvent};
use crate::editor::RenameTarget;
use crate::geometry::ElementRegistry;
use crate::types::{CellCoord, GridTarget, MediaRef, WidgetConfig};

struct SharedState {
    widget: GridWidget,
    registry: ElementRegistry,
    render_callback: Option<Function>,
}

#[wasm_bindgen]
pub struct TableWidget {
    state: Rc<RefCell<SharedState>>,
    pending: Rc<RefCell<Vec<WidgetEvent>>>,
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
impl TableWidget {
    /// Create a widget. `config` may be `undefined` or a partial config object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<TableWidget, JsValue> {
        console_error_panic_hook::set_once();

        let config: WidgetConfig = if config.is_undefined() || config.is_null() {
            WidgetConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("invalid configuration: {e}")))?
        };

        let pending = Rc::new(RefCell::new(Vec::new()));
        let mut widget = GridWidget::new(config);
        let sink = Rc::clone(&pending);
        widget.subscribe(move |event: &WidgetEvent| sink.borrow_mut().push(event.clone()));

        Ok(TableWidget {
            state: Rc::new(RefCell::new(SharedState {
                widget,
                registry: ElementRegistry::new(),
                render_callback: None,
            })),
            pending,
        })
    }

    /// Register a JS callback receiving an array of change events.
    #[wasm_bindgen(js_name = "setRenderCallback")]
    pub fn set_render_callback(&self, callback: Option<Function>) {
        self.state.borrow_mut().render_callback = callback;
    }

    // Data

    /// Replace the table from an array of string arrays (header row first).
    #[wasm_bindgen(js_name = "loadRows")]
    pub fn load_rows(&self, rows: JsValue) -> Result<(), JsValue> {
        let rows: Vec<Vec<String>> =
            serde_wasm_bindgen::from_value(rows).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.with_widget(|s| s.widget.load_from_tabular(&rows))?;
        Ok(())
    }

    /// Header row followed by data rows.
    #[wasm_bindgen(js_name = "toRows")]
    pub fn to_rows(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.borrow().widget.store().to_tabular())
    }

    /// The full table as `{ columns: [{ x, label, cells }] }`.
    #[wasm_bindgen]
    pub fn table(&self) -> Result<JsValue, JsValue> {
        to_js(self.state.borrow().widget.store().table())
    }

    #[wasm_bindgen]
    pub fn revision(&self) -> u64 {
        self.state.borrow().widget.store().revision()
    }

    #[wasm_bindgen(js_name = "appendRow")]
    pub fn append_row(&self, labels: Vec<String>) -> Result<u32, JsValue> {
        Ok(self.with_widget(|s| s.widget.append_row(&labels))?)
    }

    #[wasm_bindgen(js_name = "appendBlankRow")]
    pub fn append_blank_row(&self) -> Result<u32, JsValue> {
        Ok(self.with_widget(|s| s.widget.append_blank_row())?)
    }

    #[wasm_bindgen(js_name = "appendColumn")]
    pub fn append_column(&self, label: Option<String>) -> Result<u32, JsValue> {
        Ok(self.with_widget(|s| s.widget.append_column(label.as_deref()))?)
    }

    #[wasm_bindgen(js_name = "setCellPayload")]
    pub fn set_cell_payload(&self, x: u32, y: u32, url: Option<String>) -> Result<(), JsValue> {
        Ok(self.with_widget(|s| s.widget.set_cell_payload(x, y, url.map(MediaRef::new)))?)
    }

    // Elements

    #[wasm_bindgen(js_name = "registerCell")]
    pub fn register_cell(&self, x: u32, y: u32, element: Element) {
        self.state
            .borrow_mut()
            .registry
            .register(GridTarget::Cell { x, y }, element);
    }

    #[wasm_bindgen(js_name = "registerHeader")]
    pub fn register_header(&self, x: u32, element: Element) {
        self.state
            .borrow_mut()
            .registry
            .register(GridTarget::ColumnHeader { x }, element);
    }

    #[wasm_bindgen(js_name = "unregisterCell")]
    pub fn unregister_cell(&self, x: u32, y: u32) {
        self.state
            .borrow_mut()
            .registry
            .unregister(GridTarget::Cell { x, y });
    }

    #[wasm_bindgen(js_name = "unregisterHeader")]
    pub fn unregister_header(&self, x: u32) {
        self.state
            .borrow_mut()
            .registry
            .unregister(GridTarget::ColumnHeader { x });
    }

    #[wasm_bindgen(js_name = "clearElements")]
    pub fn clear_elements(&self) {
        self.state.borrow_mut().registry.clear();
    }

    // Pointer and keyboard

    #[wasm_bindgen(js_name = "pointerDown")]
    pub fn pointer_down(&self, x: u32, y: u32) -> bool {
        self.with_widget(|s| {
            s.widget
                .on_cell_pointer_down(&s.registry, CellCoord::new(x, y))
        })
    }

    #[wasm_bindgen(js_name = "pointerMove")]
    pub fn pointer_move(&self, x: u32, y: u32) -> bool {
        self.with_widget(|s| {
            s.widget
                .on_cell_pointer_move(&s.registry, CellCoord::new(x, y))
        })
    }

    /// Pointer pressed on a registered element. Header elements and
    /// unknown elements are ignored.
    #[wasm_bindgen(js_name = "pointerDownOn")]
    pub fn pointer_down_on(&self, element: &Element) -> bool {
        self.with_widget(|s| match s.registry.target_of(element) {
            Some(GridTarget::Cell { x, y }) => s
                .widget
                .on_cell_pointer_down(&s.registry, CellCoord::new(x, y)),
            _ => false,
        })
    }

    #[wasm_bindgen(js_name = "pointerMoveOn")]
    pub fn pointer_move_on(&self, element: &Element) -> bool {
        self.with_widget(|s| match s.registry.target_of(element) {
            Some(GridTarget::Cell { x, y }) => s
                .widget
                .on_cell_pointer_move(&s.registry, CellCoord::new(x, y)),
            _ => false,
        })
    }

    #[wasm_bindgen(js_name = "pointerUp")]
    pub fn pointer_up(&self) {
        self.with_widget(|s| s.widget.on_pointer_up());
    }

    /// Returns the cells to highlight for the hovered cell.
    #[wasm_bindgen(js_name = "pointerEnter")]
    pub fn pointer_enter(&self, x: u32, y: u32) -> Result<JsValue, JsValue> {
        let cells = self.with_widget(|s| {
            s.widget
                .on_cell_pointer_enter(CellCoord::new(x, y))
                .map(|()| s.widget.highlighted().to_vec())
        })?;
        to_js(&cells)
    }

    #[wasm_bindgen(js_name = "pointerLeave")]
    pub fn pointer_leave(&self, x: u32, y: u32) {
        self.with_widget(|s| s.widget.on_cell_pointer_leave(CellCoord::new(x, y)));
    }

    /// Feed a `keydown` key name. Returns true if it toggled selection mode.
    #[wasm_bindgen(js_name = "keyDown")]
    pub fn key_down(&self, key: &str) -> bool {
        self.with_widget(|s| s.widget.on_key_down(key))
    }

    #[wasm_bindgen(js_name = "keyUp")]
    pub fn key_up(&self, key: &str) -> bool {
        self.with_widget(|s| s.widget.on_key_up(key))
    }

    #[wasm_bindgen(js_name = "setSelectionMode")]
    pub fn set_selection_mode(&self, active: bool) -> bool {
        self.with_widget(|s| s.widget.set_selection_mode(active))
    }

    /// Current selection box, or `undefined` when hidden.
    #[wasm_bindgen(js_name = "selectionRect")]
    pub fn selection_rect(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.borrow().widget.selection().bounding_rect())
    }

    // Rename

    #[wasm_bindgen(js_name = "beginRenameCell")]
    pub fn begin_rename_cell(
        &self,
        x: u32,
        y: u32,
        initial_text: Option<String>,
        placeholder: Option<String>,
    ) -> Result<JsValue, JsValue> {
        self.begin_rename(
            RenameTarget::Cell(CellCoord::new(x, y)),
            initial_text.as_deref(),
            placeholder.as_deref(),
        )
    }

    #[wasm_bindgen(js_name = "beginRenameHeader")]
    pub fn begin_rename_header(
        &self,
        x: u32,
        initial_text: Option<String>,
        placeholder: Option<String>,
    ) -> Result<JsValue, JsValue> {
        self.begin_rename(
            RenameTarget::ColumnHeader(x),
            initial_text.as_deref(),
            placeholder.as_deref(),
        )
    }

    #[wasm_bindgen(js_name = "setRenameText")]
    pub fn set_rename_text(&self, text: &str) {
        self.state.borrow_mut().widget.set_rename_text(text);
    }

    #[wasm_bindgen(js_name = "commitRename")]
    pub fn commit_rename(&self) -> Result<bool, JsValue> {
        Ok(self.with_widget(|s| s.widget.commit_rename())?)
    }

    #[wasm_bindgen(js_name = "blurRename")]
    pub fn blur_rename(&self) -> Result<bool, JsValue> {
        Ok(self.with_widget(|s| s.widget.blur_rename())?)
    }

    #[wasm_bindgen(js_name = "discardRename")]
    pub fn discard_rename(&self) -> bool {
        self.with_widget(|s| s.widget.discard_rename())
    }
}

impl TableWidget {
    fn begin_rename(
        &self,
        target: RenameTarget,
        initial_text: Option<&str>,
        placeholder: Option<&str>,
    ) -> Result<JsValue, JsValue> {
        let placement = self.with_widget(|s| {
            s.widget
                .begin_rename(&s.registry, target, initial_text, placeholder)
        })?;
        to_js(&placement)
    }

    /// Run `f` with the state borrowed, then flush queued events to the
    /// render callback once the borrow is gone.
    fn with_widget<T>(&self, f: impl FnOnce(&mut SharedState) -> T) -> T {
        let (result, callback) = {
            let mut s = self.state.borrow_mut();
            let result = f(&mut *s);
            (result, s.render_callback.clone())
        };
        let events = std::mem::take(&mut *self.pending.borrow_mut());
        if events.is_empty() {
            return result;
        }
        if let Some(callback) = callback {
            match serde_wasm_bindgen::to_value(&events) {
                Ok(payload) => {
                    let _ = callback.call1(&JsValue::NULL, &payload);
                }
                Err(e) => log::warn!("failed to serialize widget events: {e}"),
            }
        }
        result
    }
}
