use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlState {
    #[default]
    Normal,
    Focused,
    Highlighted,
    Disabled,
}

/// Per-state assets, such as thumb images. Lookups for a state without an
/// entry fall back to the `Normal` entry.
#[derive(Clone, Debug)]
pub struct StateAssets<T> {
    assets: HashMap<ControlState, T>,
}

impl<T> Default for StateAssets<T> {
    fn default() -> Self {
        Self {
            assets: HashMap::new(),
        }
    }
}

impl<T> StateAssets<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` clears the entry for `state`.
    pub fn set(&mut self, state: ControlState, asset: Option<T>) {
        match asset {
            Some(asset) => {
                self.assets.insert(state, asset);
            }
            None => {
                self.assets.remove(&state);
            }
        }
    }

    pub fn get(&self, state: ControlState) -> Option<&T> {
        self.assets
            .get(&state)
            .or_else(|| self.assets.get(&ControlState::Normal))
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_state_falls_back_to_normal() {
        let mut assets = StateAssets::new();
        assets.set(ControlState::Normal, Some("dot"));
        assets.set(ControlState::Highlighted, Some("ring"));

        assert_eq!(assets.get(ControlState::Highlighted), Some(&"ring"));
        assert_eq!(assets.get(ControlState::Focused), Some(&"dot"));
        assert_eq!(assets.get(ControlState::Disabled), Some(&"dot"));
    }

    #[test]
    fn clearing_an_entry() {
        let mut assets = StateAssets::new();
        assets.set(ControlState::Focused, Some(7));
        assert_eq!(assets.get(ControlState::Focused), Some(&7));

        assets.set(ControlState::Focused, None);
        assert_eq!(assets.get(ControlState::Focused), None);
        assert!(assets.is_empty());
    }
}
