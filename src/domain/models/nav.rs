//! Static side navigation descriptors

use std::collections::HashSet;

use crate::shared::errors::{AppError, Result};

/// A leaf menu entry pointing at a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Font Awesome icon name, rendered as `fa fa-{icon}`
    pub icon: &'static str,
    pub link: &'static str,
}

/// A top-level menu entry: either a link or a labelled group of links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Link(NavLink),
    Group {
        label: &'static str,
        icon: &'static str,
        children: &'static [NavLink],
    },
}

impl NavEntry {
    pub fn label(&self) -> &'static str {
        match self {
            NavEntry::Link(link) => link.label,
            NavEntry::Group { label, .. } => label,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavEntry::Link(link) => link.icon,
            NavEntry::Group { icon, .. } => icon,
        }
    }
}

const fn link(label: &'static str, icon: &'static str, link: &'static str) -> NavLink {
    NavLink { label, icon, link }
}

const TASK_ITEMS: &[NavLink] = &[
    link("Execute", "cogs", "/execute"),
    link("Schedule", "clock-o", "/schedule"),
    link("Status", "heartbeat", "/status"),
];

pub static SIDENAV_ITEMS: &[NavEntry] = &[
    NavEntry::Link(link("Config", "pencil", "/config")),
    NavEntry::Link(link("History", "history", "/history")),
    NavEntry::Link(link("Log", "book", "/log")),
    NavEntry::Link(link("Movies", "film", "/movies")),
    NavEntry::Link(link("Pending", "check", "/pending")),
    NavEntry::Link(link("Seen", "eye", "/seen")),
    NavEntry::Link(link("Series", "tv", "/series")),
    NavEntry::Group {
        label: "Tasks",
        icon: "tasks",
        children: TASK_ITEMS,
    },
];

/// Every leaf link, depth-first in display order
pub fn links(entries: &[NavEntry]) -> impl Iterator<Item = &NavLink> + '_ {
    entries.iter().flat_map(|entry| match entry {
        NavEntry::Link(link) => std::slice::from_ref(link),
        NavEntry::Group { children, .. } => *children,
    })
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Look up the leaf whose link matches `path` (a trailing slash is ignored)
pub fn find_by_link<'a>(entries: &'a [NavEntry], path: &str) -> Option<&'a NavLink> {
    let path = normalize(path);
    links(entries).find(|item| item.link == path)
}

/// Whether `entry` is a group that owns `path`
pub fn group_contains(entry: &NavEntry, path: &str) -> bool {
    let path = normalize(path);
    match entry {
        NavEntry::Link(_) => false,
        NavEntry::Group { children, .. } => children.iter().any(|child| child.link == path),
    }
}

/// Link paths must be absolute and unique; groups must not be empty.
pub fn validate(entries: &[NavEntry]) -> Result<()> {
    let mut seen = HashSet::new();

    for entry in entries {
        if let NavEntry::Group { label, children, .. } = entry {
            if children.is_empty() {
                return Err(AppError::EmptyGroup(label.to_string()));
            }
        }
    }

    for item in links(entries) {
        if !item.link.starts_with('/') {
            return Err(AppError::RelativeLink(item.link.to_string()));
        }
        if !seen.insert(normalize(item.link)) {
            return Err(AppError::DuplicateLink(item.link.to_string()));
        }
    }

    Ok(())
}
