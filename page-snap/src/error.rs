/// Precondition violations rejected by the geometry constructors and the page/snap queries.
///
/// The host decides what to do with these (typically: keep its own proposed offset).
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum PageSnapError {
    #[error("item width must be finite and positive (got {width})")]
    InvalidItemWidth { width: f64 },
    #[error("item spacing must be finite and non-negative (got {spacing})")]
    InvalidItemSpacing { spacing: f64 },
    #[error("viewport width must be finite and positive (got {width})")]
    InvalidViewportWidth { width: f64 },
    #[error("row has no items")]
    EmptyRow,
}
