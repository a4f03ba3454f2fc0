// Per-item outcome of a batch step

/// What happened to one input word.
///
/// A word that could not be converted into the engine encoding never
/// reaches the engine; its slot is filled with the operation's
/// failure-default instead of failing the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome<T> {
    /// The word was converted and the engine produced this value.
    Value(T),
    /// The word could not be converted; the slot takes `T::default()`.
    Defaulted,
}

impl<T> ItemOutcome<T> {
    pub fn is_defaulted(&self) -> bool {
        matches!(self, ItemOutcome::Defaulted)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ItemOutcome<U> {
        match self {
            ItemOutcome::Value(v) => ItemOutcome::Value(f(v)),
            ItemOutcome::Defaulted => ItemOutcome::Defaulted,
        }
    }
}

impl<T: Default> ItemOutcome<T> {
    /// The value to place in the output slot.
    pub fn into_value(self) -> T {
        match self {
            ItemOutcome::Value(v) => v,
            ItemOutcome::Defaulted => T::default(),
        }
    }
}

impl<T, E> From<Result<T, E>> for ItemOutcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => ItemOutcome::Value(v),
            Err(_) => ItemOutcome::Defaulted,
        }
    }
}
