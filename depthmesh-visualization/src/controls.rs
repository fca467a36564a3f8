//! Live key bindings for tuning the visualizer between frames

use depthmesh_core::VisualizerConfig;
use winit::keyboard::Key;

/// Spot light distance moved per key press
pub const SPOT_LIGHT_STEP: f32 = 5.0;

/// Connect distance change per key press
pub const CONNECT_DISTANCE_STEP: f32 = 5.0;

/// Axis of the spot light position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotAxis {
    X,
    Y,
    Z,
}

impl SpotAxis {
    fn index(self) -> usize {
        match self {
            SpotAxis::X => 0,
            SpotAxis::Y => 1,
            SpotAxis::Z => 2,
        }
    }
}

/// Every mutation the live controls can make to a [`VisualizerConfig`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    ToggleFilter,
    ToggleLabels,
    CycleTopology,
    RaiseMinRawDepth,
    LowerMinRawDepth,
    RaiseMaxRawDepth,
    LowerMaxRawDepth,
    IncreaseStepSize,
    DecreaseStepSize,
    IncreaseConnectDistance,
    DecreaseConnectDistance,
    MoveSpotLight(SpotAxis, f32),
}

impl ControlAction {
    /// Map a typed character onto its action
    pub fn from_char(c: char) -> Option<Self> {
        let action = match c.to_ascii_lowercase() {
            'f' => ControlAction::ToggleFilter,
            'u' => ControlAction::ToggleLabels,
            'y' => ControlAction::CycleTopology,
            'p' => ControlAction::RaiseMinRawDepth,
            'o' => ControlAction::LowerMinRawDepth,
            'l' => ControlAction::RaiseMaxRawDepth,
            'k' => ControlAction::LowerMaxRawDepth,
            'm' => ControlAction::IncreaseStepSize,
            'n' => ControlAction::DecreaseStepSize,
            't' => ControlAction::IncreaseConnectDistance,
            'r' => ControlAction::DecreaseConnectDistance,
            'w' => ControlAction::MoveSpotLight(SpotAxis::Z, SPOT_LIGHT_STEP),
            'q' => ControlAction::MoveSpotLight(SpotAxis::Z, -SPOT_LIGHT_STEP),
            's' => ControlAction::MoveSpotLight(SpotAxis::X, SPOT_LIGHT_STEP),
            'a' => ControlAction::MoveSpotLight(SpotAxis::X, -SPOT_LIGHT_STEP),
            'x' => ControlAction::MoveSpotLight(SpotAxis::Y, SPOT_LIGHT_STEP),
            'z' => ControlAction::MoveSpotLight(SpotAxis::Y, -SPOT_LIGHT_STEP),
            _ => return None,
        };
        Some(action)
    }

    /// Map a winit logical key onto its action
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Character(c) => {
                let mut chars = c.as_str().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// Raw depth step: fine below one meter, coarse above
fn raise_depth(depth: f32) -> f32 {
    if depth <= 1.0 {
        depth + 0.05
    } else {
        depth + 0.25
    }
}

fn lower_depth(depth: f32) -> f32 {
    if depth > 1.0 {
        depth - 0.25
    } else if depth > 0.05 {
        depth - 0.05
    } else {
        depth
    }
}

/// Something the live controls can act on
pub trait ControlSurface {
    fn apply(&mut self, action: ControlAction);
}

impl ControlSurface for VisualizerConfig {
    fn apply(&mut self, action: ControlAction) {
        match action {
            ControlAction::ToggleFilter => self.filter_enabled = !self.filter_enabled,
            ControlAction::ToggleLabels => self.label_points = !self.label_points,
            ControlAction::CycleTopology => self.topology = self.topology.next(),
            ControlAction::RaiseMinRawDepth => {
                self.range.min_raw_depth = raise_depth(self.range.min_raw_depth)
            }
            ControlAction::LowerMinRawDepth => {
                self.range.min_raw_depth = lower_depth(self.range.min_raw_depth)
            }
            ControlAction::RaiseMaxRawDepth => {
                self.range.max_raw_depth = raise_depth(self.range.max_raw_depth)
            }
            ControlAction::LowerMaxRawDepth => {
                self.range.max_raw_depth = lower_depth(self.range.max_raw_depth)
            }
            ControlAction::IncreaseStepSize => self.grid.step_size += 1,
            ControlAction::DecreaseStepSize => {
                if self.grid.step_size > 1 {
                    self.grid.step_size -= 1;
                }
            }
            ControlAction::IncreaseConnectDistance => {
                self.connect_distance += CONNECT_DISTANCE_STEP
            }
            ControlAction::DecreaseConnectDistance => {
                self.connect_distance = (self.connect_distance - CONNECT_DISTANCE_STEP)
                    .max(VisualizerConfig::MIN_CONNECT_DISTANCE)
            }
            ControlAction::MoveSpotLight(axis, delta) => self.spot_light[axis.index()] += delta,
        }
        log::debug!("applied {:?}", action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use depthmesh_core::PrimitiveTopology;

    fn apply_all(config: &mut VisualizerConfig, keys: &str) {
        for c in keys.chars() {
            if let Some(action) = ControlAction::from_char(c) {
                config.apply(action);
            }
        }
    }

    #[test]
    fn test_toggles() {
        let mut config = VisualizerConfig::default();
        apply_all(&mut config, "fu");
        assert!(!config.filter_enabled);
        assert!(config.label_points);
    }

    #[test]
    fn test_topology_cycles_back() {
        let mut config = VisualizerConfig::default();
        assert_eq!(config.topology, PrimitiveTopology::Triangles);
        apply_all(&mut config, "yyyyyyy");
        assert_eq!(config.topology, PrimitiveTopology::Triangles);
        apply_all(&mut config, "y");
        assert_eq!(config.topology, PrimitiveTopology::TriangleStrip);
    }

    #[test]
    fn test_raw_depth_steps() {
        let mut config = VisualizerConfig::default();
        config.range.min_raw_depth = 1.0;
        apply_all(&mut config, "p");
        assert_relative_eq!(config.range.min_raw_depth, 1.05);
        apply_all(&mut config, "p");
        assert_relative_eq!(config.range.min_raw_depth, 1.3);
        apply_all(&mut config, "o");
        assert_relative_eq!(config.range.min_raw_depth, 1.05);
        apply_all(&mut config, "o");
        assert_relative_eq!(config.range.min_raw_depth, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_raw_depth_floor() {
        let mut config = VisualizerConfig::default();
        config.range.max_raw_depth = 0.05;
        apply_all(&mut config, "kkk");
        assert_relative_eq!(config.range.max_raw_depth, 0.05);
        apply_all(&mut config, "l");
        assert_relative_eq!(config.range.max_raw_depth, 0.1);
    }

    #[test]
    fn test_step_size_floor() {
        let mut config = VisualizerConfig::default();
        config.grid.step_size = 2;
        apply_all(&mut config, "nnn");
        assert_eq!(config.grid.step_size, 1);
        apply_all(&mut config, "mm");
        assert_eq!(config.grid.step_size, 3);
    }

    #[test]
    fn test_connect_distance_floor() {
        let mut config = VisualizerConfig::constellation();
        config.connect_distance = 15.0;
        apply_all(&mut config, "rrrr");
        assert_eq!(config.connect_distance, 5.0);
        apply_all(&mut config, "t");
        assert_eq!(config.connect_distance, 10.0);
    }

    #[test]
    fn test_spot_light() {
        let mut config = VisualizerConfig::default();
        config.spot_light = [0.0, 0.0, 0.0];
        apply_all(&mut config, "wwqsxxz");
        assert_eq!(config.spot_light, [5.0, 5.0, 5.0]);
        apply_all(&mut config, "aa");
        assert_eq!(config.spot_light, [-5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(ControlAction::from_char('g'), None);
        assert_eq!(ControlAction::from_char('F'), Some(ControlAction::ToggleFilter));
    }

    #[test]
    fn test_from_key() {
        let key = Key::Character("m".into());
        assert_eq!(ControlAction::from_key(&key), Some(ControlAction::IncreaseStepSize));
        let key = Key::Character("mm".into());
        assert_eq!(ControlAction::from_key(&key), None);
        let key = Key::Named(winit::keyboard::NamedKey::Escape);
        assert_eq!(ControlAction::from_key(&key), None);
    }
}
