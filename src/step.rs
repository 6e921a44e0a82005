/// Integer types `range` can generate
///
/// Stepping is checked so a generator can refuse, up front, a range whose
/// last element would not fit the type.
pub trait Step: Copy + PartialOrd + std::fmt::Debug {
    /// `self + steps`, or `None` on overflow
    fn forward(self, steps: usize) -> Option<Self>;
}

macro_rules! impl_step {
    ($($ty:ty),*) => {
        $(
            impl Step for $ty {
                fn forward(self, steps: usize) -> Option<Self> {
                    let steps = <$ty>::try_from(steps).ok()?;
                    self.checked_add(steps)
                }
            }
        )*
    };
}

// Signed types step by their unsigned twin so the whole span is reachable.
macro_rules! impl_signed_step {
    ($($ty:ty => $unsigned:ty),*) => {
        $(
            impl Step for $ty {
                fn forward(self, steps: usize) -> Option<Self> {
                    let steps = <$unsigned>::try_from(steps).ok()?;
                    self.checked_add_unsigned(steps)
                }
            }
        )*
    };
}

impl_step!(u8, u16, u32, u64, u128, usize);
impl_signed_step!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
