pub mod log {
    pub use bridge_log::*;
}

pub mod gl {
    pub use bridge_gl::*;
}

pub mod layout {
    pub use bridge_layout::*;
}

pub mod validation {
    pub use bridge_validation::*;
}

pub mod prelude {
    pub use bridge_gl::prelude::*;
    pub use bridge_layout::prelude::*;
    pub use bridge_validation::prelude::*;
}
