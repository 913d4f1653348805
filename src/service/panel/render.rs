//! Status panel rendering.
//!
//! Rendering is split from posting: `render_page` produces a `PanelPage` from plain values,
//! which is then turned into Serenity builders for the embed and its button row.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter, Timestamp,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::{
        guild_config::MemberStat,
        panel::{PanelAction, PanelButton, PAGE_SIZE},
    },
    service::panel::roster::RoleRoster,
};

/// Embed colour of the status panel.
pub const PANEL_COLOR: u32 = 0x3498db;

/// One rendered page of the status panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelPage {
    pub title: String,
    /// Formatted roster entries on this page.
    pub entries: Vec<String>,
    /// Zero-based page index.
    pub page: usize,
    /// Number of members in the whole roster.
    pub roster_size: usize,
}

/// A button of the panel's control row.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelControl {
    pub button: PanelButton,
    pub label: &'static str,
    pub style: ButtonStyle,
    pub disabled: bool,
}

/// Renders a page of the roster with each member's accumulated durations.
///
/// Live role membership decides who is listed; members without stored accumulators are
/// shown as having no data. A page past the end of the roster renders empty.
///
/// # Arguments
/// - `roster` - Current holders of the tracked role
/// - `stats` - Stored accumulators for the guild
/// - `page` - Zero-based page index
pub fn render_page(roster: &RoleRoster, stats: &[MemberStat], page: usize) -> PanelPage {
    let by_member: HashMap<u64, &MemberStat> = stats.iter().map(|s| (s.member_id, s)).collect();

    let entries = roster
        .member_ids
        .iter()
        .skip(page.saturating_mul(PAGE_SIZE))
        .take(PAGE_SIZE)
        .map(|id| match by_member.get(id) {
            Some(stat) => format!(
                "<@{}>: \nOnline: {} \nIdle: {} \nDND: {} \nOffline: {}",
                id,
                format_duration(stat.online),
                format_duration(stat.idle),
                format_duration(stat.dnd),
                format_duration(stat.offline)
            ),
            None => format!("<@{}>: No data available", id),
        })
        .collect();

    PanelPage {
        title: format!("Status for role: {}", roster.role_name),
        entries,
        page,
        roster_size: roster.len(),
    }
}

/// Formats seconds as `{h}h {m}m {s}s` using floor division, without days or padding.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.floor() as i64;
    let hours = total.div_euclid(3600);
    let minutes = total.rem_euclid(3600) / 60;
    let secs = total.rem_euclid(60);

    format!("{}h {}m {}s", hours, minutes, secs)
}

impl PanelPage {
    /// Embed body: entries separated by blank lines, or `None` for an empty page.
    pub fn description(&self) -> String {
        if self.entries.is_empty() {
            "None".to_string()
        } else {
            self.entries.join("\n\n")
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1).saturating_mul(PAGE_SIZE) < self.roster_size
    }

    /// Previous, Refresh and Next buttons for this page.
    ///
    /// Refresh always returns to the first page.
    pub fn controls(&self) -> [PanelControl; 3] {
        [
            PanelControl {
                button: PanelButton::new(PanelAction::Previous, self.page.saturating_sub(1)),
                label: "Previous",
                style: ButtonStyle::Secondary,
                disabled: !self.has_previous(),
            },
            PanelControl {
                button: PanelButton::new(PanelAction::Refresh, 0),
                label: "Refresh",
                style: ButtonStyle::Primary,
                disabled: false,
            },
            PanelControl {
                button: PanelButton::new(PanelAction::Next, self.page.saturating_add(1)),
                label: "Next",
                style: ButtonStyle::Secondary,
                disabled: !self.has_next(),
            },
        ]
    }

    /// Builds the panel embed stamped with `now`.
    ///
    /// # Returns
    /// - `Ok(CreateEmbed)` - Embed ready for sending or editing
    /// - `Err(AppError::InternalErr)` - `now` cannot be represented as a Discord timestamp
    pub fn embed(&self, now: DateTime<Utc>) -> Result<CreateEmbed, AppError> {
        let timestamp = Timestamp::from_unix_timestamp(now.timestamp()).map_err(|e| {
            AppError::InternalErr(InternalError::InvalidDiscordTimestamp {
                timestamp: now.timestamp(),
                reason: e.to_string(),
            })
        })?;

        Ok(CreateEmbed::new()
            .title(&self.title)
            .description(self.description())
            .color(PANEL_COLOR)
            .timestamp(timestamp)
            .footer(CreateEmbedFooter::new("Last updated")))
    }

    /// Builds the control row attached below the embed.
    pub fn components(&self) -> Vec<CreateActionRow> {
        let buttons = self
            .controls()
            .into_iter()
            .map(|control| {
                CreateButton::new(control.button.custom_id())
                    .label(control.label)
                    .style(control.style)
                    .disabled(control.disabled)
            })
            .collect();

        vec![CreateActionRow::Buttons(buttons)]
    }
}
