//! Panel pagination controls and their button custom ids.

use crate::error::internal::InternalError;

/// Number of roster entries shown per panel page.
pub const PAGE_SIZE: usize = 10;

/// Action carried by a panel button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Previous,
    Refresh,
    Next,
}

impl PanelAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelAction::Previous => "previous",
            PanelAction::Refresh => "refresh",
            PanelAction::Next => "next",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "previous" => Some(PanelAction::Previous),
            "refresh" => Some(PanelAction::Refresh),
            "next" => Some(PanelAction::Next),
            _ => None,
        }
    }
}

/// A panel button press: the action and the page it navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelButton {
    pub action: PanelAction,
    pub page: usize,
}

impl PanelButton {
    pub fn new(action: PanelAction, page: usize) -> Self {
        Self { action, page }
    }

    /// Encodes the button as `{action}_{page}`.
    pub fn custom_id(&self) -> String {
        format!("{}_{}", self.action.as_str(), self.page)
    }

    /// Decodes a custom id produced by [`PanelButton::custom_id`].
    pub fn parse(custom_id: &str) -> Result<Self, InternalError> {
        let malformed = || InternalError::MalformedCustomId {
            custom_id: custom_id.to_string(),
        };

        let (action, page) = custom_id.split_once('_').ok_or_else(malformed)?;
        let action = PanelAction::parse(action).ok_or_else(malformed)?;
        let page = page.parse::<usize>().map_err(|_| malformed())?;

        Ok(Self { action, page })
    }
}
