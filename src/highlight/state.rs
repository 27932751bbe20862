/// One entry of a visibility batch: which target changed and whether it is
/// now inside the trigger region.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityEntry<T> {
    pub target: T,
    pub is_visible: bool,
}

impl<T> VisibilityEntry<T> {
    pub fn new(target: T, is_visible: bool) -> Self {
        Self { target, is_visible }
    }
}

/// Which step the reader has reached, and which one is still pulsing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObservationState {
    pub active_step: Option<usize>,
    pub highlighted_step: Option<usize>,
    pub generation: u64,
}

impl ObservationState {
    /// Marks `index` as both active and highlighted. Returns the generation a
    /// later clear must present to take effect.
    pub fn reach(&mut self, index: usize) -> u64 {
        self.active_step = Some(index);
        self.highlighted_step = Some(index);
        self.generation += 1;
        self.generation
    }

    /// Drops the transient highlight, unless a newer step has been reached
    /// since `generation` was handed out.
    pub fn clear_highlight(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.highlighted_step.is_none() {
            return false;
        }
        self.highlighted_step = None;
        true
    }

    pub fn is_emphasized(&self, index: usize) -> bool {
        self.active_step == Some(index) || self.highlighted_step == Some(index)
    }
}

/// Resolves a batch to the step that should become active. Only visible
/// entries whose target is registered count; the last such entry wins.
pub fn resolve_batch<T: PartialEq>(
    entries: &[VisibilityEntry<T>],
    targets: &[T],
) -> Option<usize> {
    let mut candidate = None;
    for entry in entries.iter().filter(|e| e.is_visible) {
        if let Some(index) = targets.iter().position(|t| *t == entry.target) {
            candidate = Some(index);
        }
    }
    candidate
}
