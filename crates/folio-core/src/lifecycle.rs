//! Page show/hide transitions and what they mean for the mounted page.
//!
//! A `pagehide` that puts the document into the back/forward cache keeps
//! everything mounted; the browser freezes timers and listeners and resumes
//! them on restore. Only a final `pagehide` tears the page down. A restore
//! that finds nothing mounted mounts again.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTransition {
    Hide { persisted: bool },
    Show { persisted: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleAction {
    Keep,
    Teardown,
    Remount,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageState {
    #[default]
    Mounting,
    Mounted,
    Unmounted,
}

#[derive(Debug, Default)]
pub struct PageLifecycle {
    state: PageState,
}

impl PageLifecycle {
    /// Starts in [`PageState::Mounting`]; the first mount is already under way.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    /// Record that a mount finished. Returns `false` when the page was hidden
    /// for good while mounting, in which case the fresh page must be dropped.
    pub fn finish_mount(&mut self) -> bool {
        match self.state {
            PageState::Mounting => {
                self.state = PageState::Mounted;
                true
            }
            PageState::Mounted | PageState::Unmounted => false,
        }
    }

    pub fn transition(&mut self, transition: PageTransition) -> LifecycleAction {
        match (transition, self.state) {
            (PageTransition::Hide { persisted: false }, PageState::Mounted) => {
                self.state = PageState::Unmounted;
                LifecycleAction::Teardown
            }
            (PageTransition::Hide { persisted: false }, PageState::Mounting) => {
                self.state = PageState::Unmounted;
                LifecycleAction::Keep
            }
            (PageTransition::Show { persisted: true }, PageState::Unmounted) => {
                self.state = PageState::Mounting;
                LifecycleAction::Remount
            }
            _ => LifecycleAction::Keep,
        }
    }
}
