/// Counter held by the page root. The list re-fetches whenever it observes a new value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RefreshSignal(u32);

impl RefreshSignal {
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn bumped(self) -> Self {
        RefreshSignal(self.0.wrapping_add(1))
    }
}
