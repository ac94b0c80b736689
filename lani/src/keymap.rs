use lani_types::action::KeyAction;
use lani_types::layer::LayerId;

use crate::dance::DanceTable;
use crate::error::ConfigError;
use crate::event::KeyboardEvent;

/// Keymap of the keyboard, `NUM_LAYER` layers of `ROW` x `COL` actions.
///
/// Layer `n` of the array is [`LayerId`] with discriminant `n`.
pub struct KeyMap<const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    layers: [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Layer each held position was resolved on, so its release uses the same action
    layer_cache: [[LayerId; COL]; ROW],
}

impl<const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<ROW, COL, NUM_LAYER> {
    pub fn new(layers: [[[KeyAction; COL]; ROW]; NUM_LAYER]) -> Self {
        Self {
            layers,
            layer_cache: [[LayerId::default(); COL]; ROW],
        }
    }

    pub fn contains_layer(&self, layer: LayerId) -> bool {
        layer.index() < NUM_LAYER
    }

    /// The action at a position in a layer, `KeyAction::No` out of bounds
    pub fn get_action_at(&self, row: usize, col: usize, layer: LayerId) -> KeyAction {
        self.layers
            .get(layer.index())
            .and_then(|l| l.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or_default()
    }

    /// The action at a position, transparent actions resolved on `default_layer`
    pub fn get_action(&self, row: usize, col: usize, layer: LayerId, default_layer: LayerId) -> KeyAction {
        match self.get_action_at(row, col, layer) {
            KeyAction::Transparent => match self.get_action_at(row, col, default_layer) {
                // Transparent on the default layer itself
                KeyAction::Transparent => KeyAction::No,
                action => action,
            },
            action => action,
        }
    }

    /// Fetch the action of a key event.
    ///
    /// Presses look up `layer`, falling back to `default_layer` when the action is
    /// transparent, and remember the layer used. Releases use the remembered layer.
    pub fn get_action_with_layer_cache(
        &mut self,
        event: KeyboardEvent,
        layer: LayerId,
        default_layer: LayerId,
    ) -> KeyAction {
        let row = event.row as usize;
        let col = event.col as usize;
        if row >= ROW || col >= COL {
            warn!("Key event out of keymap: {:?}", event);
            return KeyAction::No;
        }

        if !event.pressed {
            let cached = core::mem::replace(&mut self.layer_cache[row][col], default_layer);
            return self.get_action_at(row, col, cached);
        }

        self.layer_cache[row][col] = match self.get_action_at(row, col, layer) {
            KeyAction::Transparent => default_layer,
            _ => layer,
        };
        self.get_action(row, col, layer, default_layer)
    }

    /// Check every dance used in the keymap is bound, and every layer dance targets a
    /// layer of the keymap
    pub fn validate(&self, dances: &DanceTable) -> Result<(), ConfigError> {
        for action in self.layers.iter().flatten().flatten() {
            if let KeyAction::TapDance(id) = action {
                if dances.get(*id).is_none() {
                    return Err(ConfigError::UnboundDance(*id));
                }
            }
        }
        for slot in dances.iter() {
            if let Some(layer) = slot.dance.target_layer() {
                if !self.contains_layer(layer) {
                    return Err(ConfigError::LayerOutOfRange(layer));
                }
            }
        }
        Ok(())
    }
}
