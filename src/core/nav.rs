// CE Autopilot - core/nav.rs
//
// Static navigation table and tab routing.

use crate::core::model::Tab;

/// Which view the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    Evidence,
    /// "Module Under Construction" placeholder for sections without a view.
    Placeholder,
}

/// Route a tab to the single view that renders it.
pub fn route(tab: Tab) -> ViewKind {
    match tab {
        Tab::Dashboard => ViewKind::Dashboard,
        Tab::Evidence => ViewKind::Evidence,
        Tab::Endpoints | Tab::Identity | Tab::Mobile => ViewKind::Placeholder,
    }
}

/// One row of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    /// A selectable section.
    Entry { tab: Tab, label: &'static str },
    /// A non-selectable group caption.
    Heading(&'static str),
}

/// Sidebar rows in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem::Entry {
        tab: Tab::Dashboard,
        label: "Dashboard",
    },
    NavItem::Entry {
        tab: Tab::Evidence,
        label: "Assessment & Evidence",
    },
    NavItem::Heading("Assets"),
    NavItem::Entry {
        tab: Tab::Endpoints,
        label: "Endpoints (Agents)",
    },
    NavItem::Entry {
        tab: Tab::Identity,
        label: "Identity (M365)",
    },
    NavItem::Entry {
        tab: Tab::Mobile,
        label: "Mobile (MDM)",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tab_has_exactly_one_entry() {
        for tab in Tab::all() {
            let count = NAV_ITEMS
                .iter()
                .filter(|i| matches!(i, NavItem::Entry { tab: t, .. } if t == tab))
                .count();
            assert_eq!(count, 1, "{tab}");
        }
    }

    #[test]
    fn test_entries_follow_tab_order() {
        let tabs: Vec<Tab> = NAV_ITEMS
            .iter()
            .filter_map(|i| match i {
                NavItem::Entry { tab, .. } => Some(*tab),
                NavItem::Heading(_) => None,
            })
            .collect();
        assert_eq!(tabs, Tab::all());
    }

    #[test]
    fn test_route_only_two_real_views() {
        assert_eq!(route(Tab::Dashboard), ViewKind::Dashboard);
        assert_eq!(route(Tab::Evidence), ViewKind::Evidence);
        for tab in [Tab::Endpoints, Tab::Identity, Tab::Mobile] {
            assert_eq!(route(tab), ViewKind::Placeholder);
        }
    }
}
