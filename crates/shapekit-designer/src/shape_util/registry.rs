use std::fmt;
use std::sync::Arc;

use super::{
    GeoShapeUtil, GroupShapeUtil, ImageShapeUtil, LineShapeUtil, NoteShapeUtil, ShapeUtil,
    TextShapeUtil,
};
use crate::model::ShapeKind;

/// Maps each shape kind to its capabilities.
///
/// Every kind always has a util: the built-ins are installed on construction
/// and [`register`](Self::register) only replaces them.
#[derive(Clone)]
pub struct ShapeUtilRegistry {
    utils: [Arc<dyn ShapeUtil>; 6],
}

fn slot(kind: ShapeKind) -> usize {
    match kind {
        ShapeKind::Geo => 0,
        ShapeKind::Image => 1,
        ShapeKind::Line => 2,
        ShapeKind::Text => 3,
        ShapeKind::Note => 4,
        ShapeKind::Group => 5,
    }
}

impl ShapeUtilRegistry {
    pub fn new() -> Self {
        Self {
            utils: [
                Arc::new(GeoShapeUtil),
                Arc::new(ImageShapeUtil),
                Arc::new(LineShapeUtil),
                Arc::new(TextShapeUtil),
                Arc::new(NoteShapeUtil),
                Arc::new(GroupShapeUtil),
            ],
        }
    }

    /// Installs `util` for its kind, returning the util it replaced.
    pub fn register(&mut self, util: Arc<dyn ShapeUtil>) -> Arc<dyn ShapeUtil> {
        let kind = util.kind();
        tracing::debug!("Registering shape util for {}", kind);
        std::mem::replace(&mut self.utils[slot(kind)], util)
    }

    pub fn get(&self, kind: ShapeKind) -> &dyn ShapeUtil {
        self.utils[slot(kind)].as_ref()
    }
}

impl Default for ShapeUtilRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ShapeUtilRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.utils.iter().map(|u| u.kind()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;
    use crate::model::ShapeRecord;
    use crate::shape_graph::ShapeGraph;

    struct FrozenGeo;

    impl ShapeUtil for FrozenGeo {
        fn kind(&self) -> ShapeKind {
            ShapeKind::Geo
        }

        fn geometry(&self, _shape: &ShapeRecord, _graph: &dyn ShapeGraph) -> Geometry {
            Geometry::rectangle(1.0, 1.0)
        }

        fn can_resize(&self, _shape: &ShapeRecord) -> bool {
            false
        }
    }

    #[test]
    fn test_builtins_installed_for_every_kind() {
        let registry = ShapeUtilRegistry::new();
        for kind in ShapeKind::ALL {
            assert_eq!(registry.get(kind).kind(), kind);
        }
    }

    #[test]
    fn test_register_replaces_builtin() {
        let mut registry = ShapeUtilRegistry::new();
        let previous = registry.register(Arc::new(FrozenGeo));
        assert!(previous.resize_handler().is_some());
        assert!(registry.get(ShapeKind::Geo).resize_handler().is_none());
    }
}
