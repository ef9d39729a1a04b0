// Trace records for degenerate geometry. Expands to nothing unless the
// `logging` feature is enabled.

#[cfg(feature = "logging")]
macro_rules! geom_log {
    ($fmt:expr) => (
        ::log::trace!(target: "planar_geom", $fmt)
    );
    ($fmt:expr, $($arg:tt)*) => (
        ::log::trace!(target: "planar_geom", $fmt, $($arg)*)
    );
}

#[cfg(not(feature = "logging"))]
macro_rules! geom_log {
    ($fmt:expr) => {};
    ($fmt:expr, $($arg:tt)*) => {};
}
