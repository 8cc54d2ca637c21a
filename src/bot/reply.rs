use super::texts;

/// Outbound message: one text plus the options the user can tap
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Reply {
    pub(crate) text: String,
    /// One option per keyboard row; empty means no keyboard
    pub(crate) options: Vec<&'static str>,
}

impl Reply {
    pub(crate) fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
        }
    }

    pub(crate) fn with_options(text: impl Into<String>, options: &[&'static str]) -> Self {
        Self {
            text: text.into(),
            options: options.to_vec(),
        }
    }
}

/// Menu shown to a user who has not been here before
pub(crate) const FIRST_VISIT_MENU: &[&str] = &[texts::LABEL_INFO, texts::LABEL_FILL];
pub(crate) const FULL_MENU: &[&str] = &[texts::LABEL_INFO, texts::LABEL_FILL, texts::LABEL_EXIT];
pub(crate) const INFO_MENU: &[&str] = &[texts::LABEL_BACK, texts::LABEL_EXIT];
