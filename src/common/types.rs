/// Virtual page number type.
///
/// Page numbers are unbounded non-negative integers; the simulator places no
/// upper limit on the identifiers a reference stream may use.
pub type PageId = u64;

/// Physical frame (slot) index type, always in `[0, capacity)`.
pub type FrameId = usize;
