//! Internal module containing targets for the [tracing] crate

spherecast_engine::tracing_targets! {
    MAIN = "main",
    REPORT = "report",
}
