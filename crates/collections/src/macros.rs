/// Builds a fresh [`Slot`](crate::Slot) holding `key` and a single value.
#[macro_export]
macro_rules! slot {
    ( $key: expr, $value: expr) => {
        $crate::Slot {
            key: $key.into(),
            values: vec![$value.into()],
        }
    };
}
