/*!
# Galaxy 2D Camera

2D camera management for the Galaxy engine's real-time rendering loop.

## Architecture

- **DisplayReference**: design resolution, read once from configuration
- **CameraManager**: camera registry keyed by host object
- **Viewport / projection resolution**: `Center`, `Expand` and `Stretch`
  scale behaviors against the current window size
- **Frustum**: projection × view, used for activation, screen↔world
  conversion and 2D culling
- **Shake**: cancellable, repeating, decaying camera shake driven by the
  host's animation scheduler

Hosts plug in through the traits in `galaxy2d::host`.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod config;
pub mod host;
pub mod animation;
pub mod camera;

// Main galaxy2d namespace module
pub mod galaxy2d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging front-end
    pub use crate::engine::Engine;

    // Camera manager
    pub use crate::camera::CameraManager;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Configuration sub-module
    pub mod config {
        pub use crate::config::*;
    }

    // Host collaborator seams
    pub mod host {
        pub use crate::host::*;
    }

    // Animation sub-module
    pub mod animation {
        pub use crate::animation::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }
}

// Re-export math library at crate root
pub use glam;
