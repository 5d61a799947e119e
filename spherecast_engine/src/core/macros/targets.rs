//! Declares the log targets used with the [`tracing`] macros, like `info!(target: RENDERER, ..)`
//!
//! Every target is prefixed with the name of the crate that expands the macro,
//! so the engine and the binary can be filtered separately with `RUST_LOG`.

#[macro_export]
macro_rules! tracing_targets {
    {$( $(#[$meta:meta])* $name:ident $(= $val:expr)? ),* $(,)?} => {
        $( $crate::tracing_targets!(@value $(#[$meta])* $name $(= $val)? ); )*
    };

    (@value $(#[$meta:meta])* $name:ident = $val:expr) => {
        $(#[$meta])*
        pub const $name: &'static str = concat!(env!("CARGO_PKG_NAME"), "::", $val);
    };
    (@value $(#[$meta:meta])* $name:ident) => {
        $crate::tracing_targets!(@value $(#[$meta])* $name = stringify!($name));
    };
}
