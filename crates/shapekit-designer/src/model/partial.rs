use serde::{Deserialize, Serialize};

use super::ShapeProps;

/// Sparse update to a shape record. `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapePartial {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<ShapeProps>,
}

impl ShapePartial {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn props(props: ShapeProps) -> Self {
        Self {
            props: Some(props),
            ..Default::default()
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_props(mut self, props: ShapeProps) -> Self {
        self.props = Some(props);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.rotation.is_none() && self.props.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_partial_serializes_to_empty_object() {
        let partial = ShapePartial::default();
        assert!(partial.is_empty());
        assert_eq!(serde_json::to_string(&partial).unwrap(), "{}");
    }

    #[test]
    fn test_builders() {
        let partial = ShapePartial::position(1.0, 2.0).with_rotation(0.25);
        assert!(!partial.is_empty());
        assert_eq!(partial.x, Some(1.0));
        assert_eq!(partial.rotation, Some(0.25));
        assert!(partial.props.is_none());
    }
}
