//! Notification dropdown fed by fixture notifications.

#[cfg(test)]
#[path = "notification_panel_test.rs"]
mod notification_panel_test;

use leptos::prelude::*;

use crate::util::dates;

/// Category of a notification, driving its icon and accent color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
}

/// One notification row.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationItem {
    pub id: u32,
    pub message: String,
    pub read: bool,
    pub date: String,
    pub kind: NotificationKind,
}

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✅",
        NotificationKind::Warning => "⚠️",
        NotificationKind::Info => "ℹ️",
    }
}

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "notification__icon--success",
        NotificationKind::Warning => "notification__icon--warning",
        NotificationKind::Info => "notification__icon--info",
    }
}

pub fn unread_count(items: &[NotificationItem]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

fn item(id: u32, message: &str, read: bool, date: &str, kind: NotificationKind) -> NotificationItem {
    NotificationItem { id, message: message.to_owned(), read, date: date.to_owned(), kind }
}

fn fixture() -> Vec<NotificationItem> {
    vec![
        item(
            1,
            "Your land record TL001234 has been verified successfully",
            false,
            "2024-01-15",
            NotificationKind::Success,
        ),
        item(
            2,
            "New transfer request received for land record TL001235",
            true,
            "2024-01-14",
            NotificationKind::Info,
        ),
        item(
            3,
            "Land record TL001236 requires additional documentation",
            false,
            "2024-01-13",
            NotificationKind::Warning,
        ),
        item(
            4,
            "Transfer request for TL001234 has been approved",
            true,
            "2024-01-12",
            NotificationKind::Success,
        ),
    ]
}

/// Dropdown panel listing recent notifications with an unread badge.
#[component]
pub fn NotificationPanel() -> impl IntoView {
    let items = fixture();
    let unread = unread_count(&items);

    view! {
        <div class="notification-panel">
            <header class="notification-panel__header">
                <h3>"Notifications"</h3>
                <span class="notification-panel__badge">{format!("{unread} new")}</span>
            </header>
            <div class="notification-panel__list">
                {if items.is_empty() {
                    view! { <p class="notification-panel__empty">"No notifications"</p> }.into_any()
                } else {
                    items
                        .into_iter()
                        .map(|n| {
                            view! {
                                <div class="notification" class:notification--unread=!n.read>
                                    <span class=format!(
                                        "notification__icon {}",
                                        kind_class(n.kind),
                                    )>{kind_icon(n.kind)}</span>
                                    <div class="notification__body">
                                        <p class="notification__message">{n.message}</p>
                                        <p class="notification__date">{dates::format_short(&n.date)}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}
