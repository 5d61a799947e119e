use crate::tracing_targets;

tracing_targets! {
    MAIN = "main",
    /// Viewport setup and the per-row render workers
    RENDERER = "renderer",
    /// Scene ingestion, including every default that gets applied
    SCENE = "scene",
    OBJECT = "object",
    OUTPUT = "output",
}
