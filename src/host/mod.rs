//! Helpers over the host server's object model: connections, scene graph,
//! transforms. The host supplies the concrete types through these traits.

pub mod registry;
pub mod scene;
pub mod transform;

pub use registry::{Broadcast, Connection, get_player, message_all};
pub use scene::{NodeKind, SceneNode, SceneObject, find_shape_files};
pub use transform::{AxisAngle, Transform, create_position_transform};
