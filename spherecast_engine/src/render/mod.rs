pub mod render;
pub mod render_opts;
pub mod renderer;
