/// Class of a scene-graph node, as far as shape searches care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Group,
    Set,
    StaticMesh,
    Other,
}

/// A node of the host's scene graph.
pub trait SceneNode: Sized {
    fn kind(&self) -> NodeKind;

    /// Direct children. Only groups and sets are expected to have any.
    fn children(&self) -> &[Self];

    /// Shape file of a static mesh.
    fn shape_name(&self) -> Option<&str>;
}

/// Collects every static mesh below `group` whose shape file name contains
/// `needle`, ignoring case. Results come back in depth-first order.
///
/// Both the shape name and `needle` are lower-cased, so `"Flag"` matches
/// `art/claim_flag.dts` as well as `"flag"` does.
pub fn find_shape_files<'a, N: SceneNode>(needle: &str, group: &'a N) -> Vec<&'a N> {
    let needle = needle.to_lowercase();
    let mut found = Vec::new();
    collect_shapes(&needle, group, &mut found);
    found
}

fn collect_shapes<'a, N: SceneNode>(needle: &str, group: &'a N, found: &mut Vec<&'a N>) {
    for child in group.children() {
        match child.kind() {
            NodeKind::Group | NodeKind::Set => collect_shapes(needle, child, found),
            NodeKind::StaticMesh => {
                if child
                    .shape_name()
                    .is_some_and(|name| name.to_lowercase().contains(needle))
                {
                    found.push(child);
                }
            }
            NodeKind::Other => {}
        }
    }
}

/// A plain in-memory scene tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub kind: NodeKind,
    pub shape_name: Option<String>,
    pub children: Vec<SceneObject>,
}

impl SceneObject {
    pub fn group(name: impl Into<String>, children: Vec<SceneObject>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Group,
            shape_name: None,
            children,
        }
    }

    pub fn set(name: impl Into<String>, children: Vec<SceneObject>) -> Self {
        Self {
            kind: NodeKind::Set,
            ..Self::group(name, children)
        }
    }

    pub fn static_mesh(name: impl Into<String>, shape_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::StaticMesh,
            shape_name: Some(shape_name.into()),
            children: Vec::new(),
        }
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Other,
            shape_name: None,
            children: Vec::new(),
        }
    }
}

impl SceneNode for SceneObject {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn shape_name(&self) -> Option<&str> {
        self.shape_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mission() -> SceneObject {
        SceneObject::group(
            "MissionGroup",
            vec![
                SceneObject::static_mesh("gate", "art/Models/Castle/Gate_Wood.dts"),
                SceneObject::other("sun"),
                SceneObject::set(
                    "claims",
                    vec![
                        SceneObject::static_mesh("wall_a", "art/models/castle/wall_stone.dts"),
                        SceneObject::group(
                            "inner",
                            vec![SceneObject::static_mesh(
                                "gate_b",
                                "art/models/castle/GATE_iron.dts",
                            )],
                        ),
                    ],
                ),
                SceneObject::static_mesh("tree", "art/models/nature/oak.dts"),
            ],
        )
    }

    #[test]
    fn test_find_recurses_into_groups_and_sets() {
        let root = mission();
        let found: Vec<&str> = find_shape_files("gate", &root)
            .iter()
            .map(|node| node.name.as_str())
            .collect();
        assert_eq!(found, vec!["gate", "gate_b"]);
    }

    #[test]
    fn test_find_is_case_insensitive_on_needle() {
        let root = mission();
        assert_eq!(find_shape_files("CASTLE", &root).len(), 3);
    }

    #[test]
    fn test_find_no_matches() {
        let root = mission();
        assert!(find_shape_files("boat", &root).is_empty());
        assert!(find_shape_files("gate", &SceneObject::group("empty", vec![])).is_empty());
    }

    #[test]
    fn test_other_nodes_are_ignored() {
        let mut odd = SceneObject::other("marker");
        odd.shape_name = Some("gate.dts".to_string());
        let root = SceneObject::group("root", vec![odd]);
        assert!(find_shape_files("gate", &root).is_empty());
    }
}
