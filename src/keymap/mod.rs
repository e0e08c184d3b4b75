//! Keymap types and layer resolution
//!
//! Keyberon resolves transparent keys only against its default layer and has no
//! notion of toggled layers. [`Keymap`] drives keyberon's layout with the keymap
//! layers followed by a toggle copy of every non-base layer, see
//! [`with_toggle_layers`]. The copy of the topmost toggled layer is used as the
//! default layer, so held layers fall through to it and it falls through to base.

/// Additional key actions
pub mod actions;
/// Bit-set of active layers
mod layer_state;
/// Key matrix geometry
pub mod matrix;
/// Swedish layout symbols
pub mod swedish;

use keyberon::{action, key_code::KeyCode, layout::{self, CustomEvent, Event}};
use static_assertions as sa;

pub use actions::{Action as CustomAction, CustomEventExt};
pub use layer_state::LayerState;
use matrix::{NCOLS, NROWS};

/// Key action stored in the keymap
pub type Action = action::Action<CustomAction>;
/// Full keymap with `L` layers
pub type Layers<const L: usize> = layout::Layers<NCOLS, NROWS, L, CustomAction>;
/// Keyberon layout over `L` layers
pub type Layout<const L: usize> = layout::Layout<NCOLS, NROWS, L, CustomAction>;

sa::const_assert!(crate::config::N_LAYERS <= LayerState::MAX_LAYERS);

/// Number of layers handed to keyberon for a keymap of `layers` layers
pub const fn layout_layers(layers: usize) -> usize {
    2 * layers - 1
}

/// Index of the keyberon layer used as default layer while `layer` is the topmost toggle
const fn toggle_copy(layers: usize, layer: usize) -> usize {
    if layer == 0 { 0 } else { layers + layer - 1 }
}

/// Keymap layer of a keyberon layer index
const fn keymap_layer(layers: usize, index: usize) -> usize {
    if index < layers { index } else { index + 1 - layers }
}

/// Append toggle copies of all non-base layers
///
/// Layers `0..L` are unchanged. Layer `L + n - 1` is layer `n` with transparent
/// keys replaced by the base layer action. `M` must equal [`layout_layers`]`(L)`.
pub const fn with_toggle_layers<const L: usize, const M: usize>(layers: &Layers<L>) -> Layers<M> {
    assert!(L > 0 && M == layout_layers(L), "Wrong number of layout layers");
    let mut out = [[[Action::NoOp; NCOLS]; NROWS]; M];
    let mut l = 0;
    while l < M {
        let src = keymap_layer(L, l);
        let mut row = 0;
        while row < NROWS {
            let mut col = 0;
            while col < NCOLS {
                out[l][row][col] = match layers[src][row][col] {
                    Action::Trans if l >= L => layers[0][row][col],
                    action => action,
                };
                col += 1;
            }
            row += 1;
        }
        l += 1;
    }
    out
}

/// Layers of the keymap
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Layer {
    /// Default typing layer
    Base = 0,
    /// Symbols, numpad, function keys and media
    Symbols = 1,
    /// Left half remapped for games
    Gaming = 2,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Self::Base, Self::Symbols, Self::Gaming];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Base),
            1 => Some(Self::Symbols),
            2 => Some(Self::Gaming),
            _ => None,
        }
    }
}

/// Keyberon layout with persistent layer toggles
///
/// `N` is the number of layout layers, as built by [`with_toggle_layers`].
pub struct Keymap<const N: usize> {
    layers: &'static Layers<N>,
    layout: Layout<N>,
    toggled: LayerState,
}

impl<const N: usize> Keymap<N> {
    /// Number of keymap layers, the remaining layout layers are toggle copies
    pub const LAYERS: usize = (N + 1) / 2;

    pub fn new(layers: &'static Layers<N>) -> Self {
        Self {
            layers,
            layout: Layout::new(layers),
            toggled: LayerState::BASE,
        }
    }

    pub fn layout(&self) -> &Layout<N> {
        &self.layout
    }

    /// Pass a key event (in layout coordinates) to the layout
    pub fn event(&mut self, event: Event) {
        self.layout.event(event);
    }

    /// Advance layout time, handling layer toggles
    pub fn tick(&mut self) {
        let custom = self.layout.tick();
        self.custom_event(custom);
    }

    /// Keys currently reported by the layout
    pub fn keycodes(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.layout.keycodes()
    }

    /// Layers toggled on by [`CustomAction::ToggleLayer`], base layer always included
    pub fn toggled(&self) -> LayerState {
        self.toggled
    }

    /// Active layers: toggled layers and the momentary layer held in the layout
    pub fn layer_state(&self) -> LayerState {
        let current = self.layout.current_layer();
        let default = toggle_copy(Self::LAYERS, self.toggled.top());
        let held = keymap_layer(Self::LAYERS, current);
        if current != default && held < Self::LAYERS {
            self.toggled.with(held)
        } else {
            self.toggled
        }
    }

    /// Handle custom events produced by keyberon's layout
    pub fn custom_event(&mut self, event: CustomEvent<CustomAction>) {
        if let Some((action, pressed)) = event.transposed() {
            match action {
                CustomAction::ToggleLayer(layer) => if pressed {
                    self.toggle(*layer);
                },
            }
        }
    }

    /// Toggle a layer and make the layout default to the topmost toggled layer
    pub fn toggle(&mut self, layer: usize) {
        if layer == 0 || layer >= Self::LAYERS {
            warn!("Ignoring toggle of layer {=usize}", layer);
            return;
        }
        self.toggled.toggle(layer);
        let top = self.toggled.top();
        self.layout.set_default_layer(toggle_copy(Self::LAYERS, top));
        info!("Layer {=usize} toggled, top {=usize}", layer, top);
    }

    /// Resolve the action for a key in the given layer state
    ///
    /// Starts at the topmost active layer and falls through transparent keys
    /// to lower active layers, ending at the base layer.
    pub fn action(&self, state: LayerState, (row, col): (u8, u8)) -> &'static Action {
        let (row, col) = (row as usize, col as usize);
        if row >= NROWS || col >= NCOLS {
            return &Action::NoOp;
        }
        let layers: &'static Layers<N> = self.layers;
        let resolved = state.active()
            .chain(core::iter::once(0))
            .filter(|&layer| layer < Self::LAYERS)
            .map(|layer| &layers[layer][row][col])
            .find(|action| !matches!(action, Action::Trans));
        match resolved {
            Some(action) => action,
            None => {
                warn!("Transparent key on base layer at ({=usize}, {=usize})", row, col);
                &Action::NoOp
            },
        }
    }

    /// Resolve the action for a key in the current layer state
    pub fn current_action(&self, coords: (u8, u8)) -> &'static Action {
        self.action(self.layer_state(), coords)
    }
}
