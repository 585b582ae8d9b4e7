//! Role-based navigation filtering.
//!
//! A static mapping from role to the ordered destinations that role may
//! see, grouped by section for display. This is advisory UI filtering:
//! hiding a destination does not prevent the API from serving its data.

use std::collections::HashSet;

use luxeboard_core::Role;

/// A navigable destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub section: &'static str,
}

const ADMIN_MENU: &[NavItem] = &[
    NavItem { label: "Dashboard", href: "/", icon: "🏠", section: "Overview" },
    NavItem { label: "Properties", href: "/properties", icon: "🏡", section: "Operations" },
    NavItem { label: "Bookings", href: "/bookings", icon: "📅", section: "Operations" },
    NavItem { label: "Guests", href: "/guests", icon: "👥", section: "People" },
    NavItem { label: "Payments", href: "/payments", icon: "💳", section: "Finance" },
    NavItem { label: "Tasks", href: "/tasks", icon: "📝", section: "Operations" },
    NavItem { label: "User Management", href: "/users", icon: "🛡️", section: "Administration" },
];

const MANAGER_MENU: &[NavItem] = &[
    NavItem { label: "Dashboard", href: "/", icon: "🏠", section: "Overview" },
    NavItem { label: "Properties", href: "/properties", icon: "🏡", section: "Operations" },
    NavItem { label: "Bookings", href: "/bookings", icon: "📅", section: "Operations" },
    NavItem { label: "Guests", href: "/guests", icon: "👥", section: "People" },
    NavItem { label: "Tasks", href: "/tasks", icon: "📝", section: "Operations" },
];

const STAFF_MENU: &[NavItem] = &[
    NavItem { label: "Dashboard", href: "/", icon: "🏠", section: "Overview" },
    NavItem { label: "Tasks", href: "/tasks", icon: "📝", section: "Operations" },
    NavItem { label: "Guests", href: "/guests", icon: "👥", section: "People" },
];

/// The ordered destinations visible to `role`.
#[must_use]
pub const fn menu_for(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => ADMIN_MENU,
        Role::Manager => MANAGER_MENU,
        Role::Staff => STAFF_MENU,
    }
}

/// Like [`menu_for`], from a raw role name. Unknown roles fall back to the
/// broadest (Admin) list.
#[must_use]
pub fn menu_for_name(role: &str) -> &'static [NavItem] {
    menu_for(Role::parse(role).unwrap_or(Role::Admin))
}

/// Group items by section, preserving both the order sections first appear
/// in and the item order within each section.
#[must_use]
pub fn grouped(items: &'static [NavItem]) -> Vec<(&'static str, Vec<&'static NavItem>)> {
    let mut sections: Vec<(&'static str, Vec<&'static NavItem>)> = Vec::new();
    for item in items {
        match sections.iter_mut().find(|(name, _)| *name == item.section) {
            Some((_, entries)) => entries.push(item),
            None => sections.push((item.section, vec![item])),
        }
    }
    sections
}

/// Transient per-section collapse state, keyed by section name. Not
/// persisted; every mount starts expanded.
#[derive(Debug, Default)]
pub struct SectionToggles {
    collapsed: HashSet<String>,
}

impl SectionToggles {
    /// All sections expanded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one section's collapse state.
    pub fn toggle(&mut self, section: &str) {
        if !self.collapsed.remove(section) {
            self.collapsed.insert(section.to_owned());
        }
    }

    /// Whether `section` is currently collapsed.
    #[must_use]
    pub fn is_collapsed(&self, section: &str) -> bool {
        self.collapsed.contains(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_menu_subset_in_order() {
        let labels: Vec<_> = menu_for(Role::Staff).iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Tasks", "Guests"]);
    }

    #[test]
    fn test_unknown_role_falls_back_to_admin() {
        assert_eq!(menu_for_name("Unknown"), menu_for(Role::Admin));
        assert_eq!(menu_for_name(""), menu_for(Role::Admin));
        assert_eq!(menu_for_name("Manager"), menu_for(Role::Manager));
    }

    #[test]
    fn test_grouping_preserves_order() {
        let sections = grouped(menu_for(Role::Admin));
        let names: Vec<_> = sections.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["Overview", "Operations", "People", "Finance", "Administration"]
        );

        let operations = &sections[1].1;
        let labels: Vec<_> = operations.iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Properties", "Bookings", "Tasks"]);
    }

    #[test]
    fn test_section_toggles() {
        let mut toggles = SectionToggles::new();
        assert!(!toggles.is_collapsed("Operations"));
        toggles.toggle("Operations");
        assert!(toggles.is_collapsed("Operations"));
        assert!(!toggles.is_collapsed("Finance"));
        toggles.toggle("Operations");
        assert!(!toggles.is_collapsed("Operations"));
    }
}
