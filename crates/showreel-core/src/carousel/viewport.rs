use crate::config::{BreakpointConfig, ItemsPerViewConfig};

/// Viewport size class selected by the breakpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Small,
    Medium,
    Large,
}

impl ViewportClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportClass::Small => "small",
            ViewportClass::Medium => "medium",
            ViewportClass::Large => "large",
        }
    }
}

/// Two width thresholds splitting viewports into three classes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub medium_min: f64,
    pub large_min: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        BreakpointConfig::default().into()
    }
}

impl From<BreakpointConfig> for Breakpoints {
    fn from(config: BreakpointConfig) -> Self {
        Self {
            medium_min: config.medium_min,
            large_min: config.large_min,
        }
    }
}

impl Breakpoints {
    /// Classify a viewport width. Widths below `medium_min` are small,
    /// below `large_min` medium, the rest large. Non-finite widths are small.
    pub fn classify(&self, width: f64) -> ViewportClass {
        if !width.is_finite() || width < self.medium_min {
            ViewportClass::Small
        } else if width < self.large_min {
            ViewportClass::Medium
        } else {
            ViewportClass::Large
        }
    }
}

/// Number of slides visible at once, per viewport class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemsPerView {
    pub small: usize,
    pub medium: usize,
    pub large: usize,
}

impl Default for ItemsPerView {
    fn default() -> Self {
        ItemsPerViewConfig::default().into()
    }
}

impl From<ItemsPerViewConfig> for ItemsPerView {
    fn from(config: ItemsPerViewConfig) -> Self {
        Self {
            small: config.small,
            medium: config.medium,
            large: config.large,
        }
    }
}

impl ItemsPerView {
    /// Items per view for a class, never less than one
    pub fn for_class(&self, class: ViewportClass) -> usize {
        let n = match class {
            ViewportClass::Small => self.small,
            ViewportClass::Medium => self.medium,
            ViewportClass::Large => self.large,
        };
        n.max(1)
    }
}
