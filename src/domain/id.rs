// Id generation seam for custom widgets

/// Produces candidate ids for new custom widgets.
///
/// Implementations only need to be collision resistant; the transition that
/// consumes the id re-draws until it is unused in the current state.
pub trait WidgetIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}
