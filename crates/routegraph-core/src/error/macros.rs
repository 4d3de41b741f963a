//! Error macros for routegraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for creating invariant violation errors
#[macro_export]
macro_rules! bail_invariant {
    ($($arg:tt)*) => {
        return Err($crate::error::GraphError::invariant(format!($($arg)*)))
    };
}
