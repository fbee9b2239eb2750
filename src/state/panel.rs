//! Expand/collapse panel
//!
//! Follows the owning entry's expanded flag. The content region and the
//! divider are both optional in the markup; whichever is missing is left
//! alone.

pub const READ_MORE: &str = "Read More";
pub const READ_LESS: &str = "Read Less";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentHeight {
    /// Forced to zero
    Collapsed,
    /// The content's own scroll height
    Natural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerPosition {
    BeforeContent,
    AfterContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandPanel {
    content: Option<ContentHeight>,
    divider: Option<DividerPosition>,
    label: &'static str,
}

impl ExpandPanel {
    /// Collapsed panel. `has_content`/`has_divider` mirror the markup.
    pub fn new(has_content: bool, has_divider: bool) -> Self {
        Self {
            content: has_content.then_some(ContentHeight::Collapsed),
            divider: has_divider.then_some(DividerPosition::BeforeContent),
            label: READ_MORE,
        }
    }

    pub fn apply(&mut self, expanded: bool) {
        if let Some(height) = self.content.as_mut() {
            *height = if expanded {
                ContentHeight::Natural
            } else {
                ContentHeight::Collapsed
            };

            // The divider is positioned relative to the content node
            if let Some(divider) = self.divider.as_mut() {
                *divider = if expanded {
                    DividerPosition::AfterContent
                } else {
                    DividerPosition::BeforeContent
                };
            }
        }

        self.label = if expanded { READ_LESS } else { READ_MORE };
    }

    pub fn content_height(&self) -> Option<ContentHeight> {
        self.content
    }

    pub fn divider_position(&self) -> Option<DividerPosition> {
        self.divider
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}
